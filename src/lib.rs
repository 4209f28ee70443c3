pub mod modules {
    pub mod feedback {
        pub mod core {
            pub mod feedback_item;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod create_feedback {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_feedback {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod upvote_feedback {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod feedback_repository;
                pub mod feedback_repository_in_memory;
            }
        }
    }
}

pub mod shell;
