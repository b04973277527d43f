use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

use crate::cli::types::{FranchiseId, PlayerId};

#[cfg(test)]
mod tests;

/// Navigation target of a link cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Team(FranchiseId),
    Player(PlayerId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Team(id) => write!(f, "/team/{}", id),
            Route::Player(id) => write!(f, "/player/{}", id),
        }
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A cell that displays `text` and navigates to another team or player page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub text: String,
    #[serde(rename = "href")]
    pub target: Route,
}

/// One cell of a statistics record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Link(Link),
}

impl Value {
    /// Numeric reading used by the minimum filter. Text is accepted when it
    /// parses as a number; links read their display text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(s) => s.trim().parse().ok(),
            Value::Link(link) => link.text.trim().parse().ok(),
            Value::Null | Value::Bool(_) => None,
        }
    }

    /// The value with any link replaced by its display text.
    pub fn to_plain(&self) -> Value {
        match self {
            Value::Link(link) => Value::Text(link.text.clone()),
            other => other.clone(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Text(_) | Value::Link(_) => 3,
        }
    }

    fn text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Link(link) => Some(&link.text),
            _ => None,
        }
    }

    /// Natural ordering: nulls first, then booleans, numbers, and text.
    /// Integers and floats compare numerically with each other.
    pub fn natural_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                let a = self.as_f64().unwrap_or(f64::NAN);
                let b = other.as_f64().unwrap_or(f64::NAN);
                a.total_cmp(&b)
            }
            _ => match (self.text(), other.text()) {
                (Some(a), Some(b)) => a.cmp(b),
                _ => self.rank().cmp(&other.rank()),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
            Value::Link(link) => write!(f, "{}", link.text),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::Text(s),
            nested => Value::Text(nested.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

/// One statistics line (a team-season or player-season), fields in API order.
pub type Record = IndexMap<String, Value>;

/// An ordered sequence of records plus the full list of fields they carry.
///
/// The field list is declared up front rather than guessed from the first
/// row, so a field that only later rows carry can still be shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordSet {
    fields: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Build a record set with an explicit schema.
    pub fn new(fields: Vec<String>, records: Vec<Record>) -> Self {
        Self { fields, records }
    }

    /// Build a record set whose schema is every field seen, in order of first appearance.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut fields: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !fields.iter().any(|f| f == key) {
                    fields.push(key.clone());
                }
            }
        }
        Self { fields, records }
    }

    /// Parse the JSON array of objects returned by the stats endpoints.
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        let records: Vec<Record> = serde_json::from_value(value)?;
        Ok(Self::from_records(records))
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Turn `field` into a link column. Records for which `link_for` returns
    /// `None` keep their plain value.
    pub fn set_links<F>(&mut self, field: &str, link_for: F) -> usize
    where
        F: Fn(&Record) -> Option<Link>,
    {
        let mut linked = 0;
        for record in &mut self.records {
            if let Some(link) = link_for(record) {
                record.insert(field.to_string(), Value::Link(link));
                linked += 1;
            }
        }
        if linked > 0 && !self.has_field(field) {
            self.fields.push(field.to_string());
        }
        linked
    }
}

/// Franchise entry from `/franchises`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Franchise {
    #[serde(rename = "franchID")]
    pub id: FranchiseId,
    #[serde(rename = "franchName")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
}

/// Response of `/playername/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerNameResponse {
    pub name: String,
}

/// Response of `/playerid/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerIdResponse {
    pub id: PlayerId,
}
