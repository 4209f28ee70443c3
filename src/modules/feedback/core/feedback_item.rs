use serde::Serialize;
use std::cmp::Ordering;

/// A single submitted text entry with a vote count and creation time.
///
/// `created_at` is a Unix timestamp in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackItem {
    pub id: u64,
    pub text: String,
    pub votes: u64,
    pub created_at: i64,
}

impl FeedbackItem {
    pub fn new(id: u64, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            votes: 0,
            created_at,
        }
    }

    pub fn upvote(&mut self) {
        self.votes = self.votes.saturating_add(1);
    }

    /// Most votes first, newest first among equals.
    pub fn popularity_order(a: &Self, b: &Self) -> Ordering {
        b.votes
            .cmp(&a.votes)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }
}

/// Stable: items equal on both keys keep their relative order.
pub fn sort_by_popularity(items: &mut [FeedbackItem]) {
    items.sort_by(FeedbackItem::popularity_order);
}

#[cfg(test)]
mod feedback_item_tests {
    use super::*;
    use rstest::rstest;

    fn item(id: u64, votes: u64, created_at: i64) -> FeedbackItem {
        FeedbackItem {
            id,
            text: format!("item {id}"),
            votes,
            created_at,
        }
    }

    #[rstest]
    fn it_should_create_an_item_without_votes() {
        let item = FeedbackItem::new(1, "Add dark mode", 1_700_000_000);
        assert_eq!(item.id, 1);
        assert_eq!(item.text, "Add dark mode");
        assert_eq!(item.votes, 0);
        assert_eq!(item.created_at, 1_700_000_000);
    }

    #[rstest]
    fn it_should_increment_votes_by_one() {
        let mut item = FeedbackItem::new(1, "Add dark mode", 1_700_000_000);
        item.upvote();
        item.upvote();
        assert_eq!(item.votes, 2);
    }

    #[rstest]
    #[case(item(1, 5, 100), item(2, 3, 200), Ordering::Less)]
    #[case(item(1, 3, 100), item(2, 5, 200), Ordering::Greater)]
    #[case(item(1, 3, 200), item(2, 3, 100), Ordering::Less)]
    #[case(item(1, 3, 100), item(2, 3, 100), Ordering::Equal)]
    fn it_should_order_by_votes_then_recency(
        #[case] a: FeedbackItem,
        #[case] b: FeedbackItem,
        #[case] expected: Ordering,
    ) {
        assert_eq!(FeedbackItem::popularity_order(&a, &b), expected);
    }

    #[rstest]
    fn it_should_sort_a_board_by_popularity() {
        let mut items = vec![
            item(1, 0, 100),
            item(2, 2, 100),
            item(3, 0, 300),
            item(4, 2, 50),
        ];
        sort_by_popularity(&mut items);
        let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[rstest]
    fn it_should_keep_insertion_order_for_full_ties() {
        let mut items = vec![item(1, 1, 100), item(2, 1, 100), item(3, 1, 100)];
        sort_by_popularity(&mut items);
        let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    fn it_should_serialize_to_the_wire_shape() {
        let item = FeedbackItem::new(1, "Add dark mode", 1_700_000_000);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({
                "id": 1,
                "text": "Add dark mode",
                "votes": 0,
                "created_at": 1_700_000_000
            })
        );
    }
}
