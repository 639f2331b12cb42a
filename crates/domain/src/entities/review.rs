//! Movie reviews projected from RATED relationships.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// The author of a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    pub user_id: UserId,
    pub name: Option<String>,
}

/// One RATED relationship projected as a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub rating: i64,
    /// Epoch milliseconds of the latest write to the relationship.
    pub timestamp: i64,
    pub user: Reviewer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_shape_round_trips() {
        let review: Review = serde_json::from_value(serde_json::json!({
            "rating": 5,
            "timestamp": 1650000000000i64,
            "user": {"userId": "u-1", "name": "Graph Fan"}
        }))
        .expect("deserialize");

        assert_eq!(review.rating, 5);
        assert_eq!(review.timestamp, 1_650_000_000_000);
        assert_eq!(review.user.user_id.as_str(), "u-1");
        assert_eq!(review.user.name.as_deref(), Some("Graph Fan"));
    }
}
