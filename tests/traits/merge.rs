use std::collections::{BTreeMap, HashMap};

use chain_rail::prelude::*;

#[test]
fn hash_maps_merge_with_override() {
    let left = HashMap::from([("a", 1), ("b", 2)]);
    let right = HashMap::from([("b", 3)]);

    let merged = left.merge(right);

    assert_eq!(merged, HashMap::from([("a", 1), ("b", 3)]));
}

#[test]
fn btree_maps_merge_with_override() {
    let left = BTreeMap::from([("a", "x")]);
    let right = BTreeMap::from([("a", "y"), ("b", "z")]);

    let merged = left.merge(right).merge(());

    assert_eq!(merged.into_iter().collect::<Vec<_>>(), [("a", "y"), ("b", "z")]);
}

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct Score {
    points: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct ScoredUser {
    name: &'static str,
    points: u32,
}

impl Merge<Score> for User {
    type Output = ScoredUser;

    fn merge(self, rhs: Score) -> ScoredUser {
        ScoredUser { name: self.name, points: rhs.points }
    }
}

#[tokio::test]
async fn typed_records_accumulate_through_add_data() {
    let outcome = start_with::<_, &str>(User { name: "alice" })
        .add_data(|user, _| async move {
            match user.name {
                "alice" => Ok(Score { points: 10 }),
                _ => Err("unknown user"),
            }
        })
        .await;

    assert_eq!(outcome, Ok(ScoredUser { name: "alice", points: 10 }));
}

#[test]
fn merged_context_is_a_fresh_value() {
    let base = record! { "a" => 1 };
    let copy = base.clone();

    let merged = base.merge(record! { "a" => 2 });

    assert_eq!(copy.get("a"), Some(&1));
    assert_eq!(merged.get("a"), Some(&2));
}
