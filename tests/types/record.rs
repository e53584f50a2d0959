use chain_rail::{record, Merge, MissingField, Record};

#[test]
fn record_macro_keeps_insertion_order() {
    let record = record! { "b" => 1, "a" => 2, "c" => 3 };

    assert_eq!(record.len(), 3);
    assert_eq!(record.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
    assert_eq!(record.values().copied().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn merge_overrides_colliding_keys_and_keeps_the_rest() {
    let left = record! { "a" => 1, "b" => 2 };
    let right = record! { "b" => 20, "c" => 30 };

    let merged = left.merge(right);

    assert_eq!(merged, record! { "a" => 1, "b" => 20, "c" => 30 });
    assert_eq!(merged.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn unit_is_the_empty_record() {
    let from_unit = ().merge(record! { "a" => 1 });
    let into_unit = record! { "a" => 1 }.merge(());

    assert_eq!(from_unit, into_unit);
}

#[test]
fn owned_keys_and_static_keys_mix() {
    let dynamic = format!("user_{}", 7);
    let mut record: Record<&str> = Record::new().with("static", "s");
    record.insert(dynamic, "d");

    assert_eq!(record.get("user_7"), Some(&"d"));
    assert!(record.contains_key("static"));
}

#[test]
fn get_mut_updates_in_place() {
    let mut record = record! { "count" => 1 };
    if let Some(count) = record.get_mut("count") {
        *count += 1;
    }

    assert_eq!(record.get("count"), Some(&2));
}

#[test]
fn require_reports_the_missing_key() {
    let record = record! { "present" => true };

    assert_eq!(record.require("present"), Ok(&true));
    let error = record.require("absent").unwrap_err();
    assert_eq!(error, MissingField::new("absent"));
    assert_eq!(error.to_string(), "missing field `absent`");
}

#[test]
fn collects_and_extends_from_pairs() {
    let mut record: Record<u8> = vec![("a", 1), ("b", 2)].into_iter().collect();
    record.extend([("b", 3), ("c", 4)]);

    let pairs: Vec<(&str, &u8)> = record.iter().collect();
    assert_eq!(pairs, [("a", &1), ("b", &3), ("c", &4)]);

    let owned: Vec<_> = record.into_iter().map(|(key, value)| (key.into_owned(), value)).collect();
    assert_eq!(owned[2], ("c".to_owned(), 4));
}

#[test]
fn debug_renders_as_a_map() {
    let record = record! { "a" => 1 };
    assert_eq!(format!("{:?}", record), r#"{"a": 1}"#);
}

#[cfg(feature = "serde")]
#[test]
fn serializes_as_an_ordered_json_object() {
    let record = record! { "b" => 2, "a" => 1 };

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"b":2,"a":1}"#);

    let back: Record<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
