//! Unit tests for record and value types

use super::*;
use serde_json::json;

fn record(pairs: &[(&str, Value)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_value_from_json_numbers() {
    assert_eq!(Value::from(json!(42)), Value::Int(42));
    assert_eq!(Value::from(json!(0.275)), Value::Float(0.275));
    assert_eq!(Value::from(json!("NYY")), Value::Text("NYY".to_string()));
    assert_eq!(Value::from(json!(null)), Value::Null);
    assert_eq!(Value::from(json!(true)), Value::Bool(true));
}

#[test]
fn test_value_from_json_nested_becomes_text() {
    assert_eq!(Value::from(json!([1, 2])), Value::Text("[1,2]".to_string()));
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Float(3.0).to_string(), "3");
    assert_eq!(Value::Float(0.312).to_string(), "0.312");
    assert_eq!(Value::Int(-4).to_string(), "-4");
    assert_eq!(Value::Null.to_string(), "");
    let link = Value::Link(Link {
        text: "Mike Trout".to_string(),
        target: Route::Player(PlayerId::new("troutmi01")),
    });
    assert_eq!(link.to_string(), "Mike Trout");
}

#[test]
fn test_value_as_f64() {
    assert_eq!(Value::Int(7).as_f64(), Some(7.0));
    assert_eq!(Value::Float(1.5).as_f64(), Some(1.5));
    assert_eq!(Value::Text(" 12.5 ".to_string()).as_f64(), Some(12.5));
    assert_eq!(Value::Text("LAA".to_string()).as_f64(), None);
    assert_eq!(Value::Null.as_f64(), None);
    assert_eq!(Value::Bool(true).as_f64(), None);
}

#[test]
fn test_natural_cmp_numbers_mixed() {
    assert_eq!(Value::Int(2).natural_cmp(&Value::Float(2.5)), Ordering::Less);
    assert_eq!(Value::Float(10.0).natural_cmp(&Value::Int(9)), Ordering::Greater);
    assert_eq!(Value::Int(3).natural_cmp(&Value::Int(3)), Ordering::Equal);
}

#[test]
fn test_natural_cmp_text_and_links() {
    let a = Value::Text("Abreu".to_string());
    let b = Value::Link(Link {
        text: "Betts".to_string(),
        target: Route::Player(PlayerId::new("bettsmo01")),
    });
    assert_eq!(a.natural_cmp(&b), Ordering::Less);
    assert_eq!(b.natural_cmp(&a), Ordering::Greater);
}

#[test]
fn test_natural_cmp_across_kinds() {
    assert_eq!(Value::Null.natural_cmp(&Value::Int(0)), Ordering::Less);
    assert_eq!(
        Value::Int(1000).natural_cmp(&Value::Text("1".to_string())),
        Ordering::Less
    );
    assert_eq!(Value::Bool(true).natural_cmp(&Value::Null), Ordering::Greater);
}

#[test]
fn test_to_plain_strips_link() {
    let link = Value::Link(Link {
        text: "BOS".to_string(),
        target: Route::Team(FranchiseId::new("BOS")),
    });
    assert_eq!(link.to_plain(), Value::Text("BOS".to_string()));
    assert_eq!(Value::Int(5).to_plain(), Value::Int(5));
}

#[test]
fn test_route_display_and_serialize() {
    let route = Route::Team(FranchiseId::new("sfg"));
    assert_eq!(route.to_string(), "/team/SFG");

    let link = Link {
        text: "Barry Bonds".to_string(),
        target: Route::Player(PlayerId::new("bondsba01")),
    };
    let json = serde_json::to_value(Value::Link(link)).unwrap();
    assert_eq!(json, json!({"text": "Barry Bonds", "href": "/player/bondsba01"}));
}

#[test]
fn test_record_preserves_field_order() {
    let parsed: Record =
        serde_json::from_str(r#"{"Year": 2001, "Team": "SEA", "G": 157, "AB": 692}"#).unwrap();
    let keys: Vec<&str> = parsed.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["Year", "Team", "G", "AB"]);
}

#[test]
fn test_record_set_schema_is_union_of_all_rows() {
    let set = RecordSet::from_json(json!([
        {"Year": 2001, "G": 50},
        {"Year": 2002, "G": 10, "SB": 3},
        {"SO": 1, "Year": 2003}
    ]))
    .unwrap();

    assert_eq!(set.fields(), &["Year", "G", "SB", "SO"]);
    assert_eq!(set.len(), 3);
    assert!(set.has_field("SB"));
    assert!(!set.has_field("HR"));
}

#[test]
fn test_record_set_from_json_rejects_non_array() {
    assert!(RecordSet::from_json(json!({"detail": "No data for given year"})).is_err());
}

#[test]
fn test_record_set_empty() {
    let set = RecordSet::from_json(json!([])).unwrap();
    assert!(set.is_empty());
    assert!(set.fields().is_empty());
}

#[test]
fn test_set_links() {
    let mut set = RecordSet::from_records(vec![
        record(&[
            ("Team", Value::Text("NYA".to_string())),
            ("franchID", Value::Text("NYY".to_string())),
        ]),
        record(&[("Team", Value::Text("XXX".to_string()))]),
    ]);

    let linked = set.set_links("Team", |r| match r.get("franchID") {
        Some(Value::Text(id)) => Some(Link {
            text: id.clone(),
            target: Route::Team(FranchiseId::new(id.as_str())),
        }),
        _ => None,
    });

    assert_eq!(linked, 1);
    match &set.records()[0]["Team"] {
        Value::Link(link) => {
            assert_eq!(link.text, "NYY");
            assert_eq!(link.target.to_string(), "/team/NYY");
        }
        other => panic!("Expected link, got {other:?}"),
    }
    assert_eq!(set.records()[1]["Team"], Value::Text("XXX".to_string()));
}

#[test]
fn test_franchise_deserialize() {
    let franchise: Franchise = serde_json::from_value(json!({
        "franchID": "ANA",
        "franchName": "Los Angeles Angels of Anaheim",
        "active": "Y",
        "NAassoc": null
    }))
    .unwrap();

    assert_eq!(franchise.id, FranchiseId::new("ANA"));
    assert_eq!(franchise.name, "Los Angeles Angels of Anaheim");
    assert_eq!(franchise.active.as_deref(), Some("Y"));
}
