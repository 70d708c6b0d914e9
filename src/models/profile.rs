use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// One raw result object from the people search endpoint.
///
/// Torre returns loosely shaped records, so the JSON is kept as-is and fields
/// are read on demand. An absent or `null` field reads as `None`. Numbers may
/// arrive as numeric strings. Any other type mismatch is an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRecord(Value);

impl ProfileRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn name(&self) -> Result<Option<&str>> {
        self.str_field("name")
    }

    pub fn professional_headline(&self) -> Result<Option<&str>> {
        self.str_field("professionalHeadline")
    }

    pub fn weight(&self) -> Result<Option<f64>> {
        self.f64_field("weight")
    }

    pub fn completion(&self) -> Result<Option<f64>> {
        self.f64_field("completion")
    }

    fn field(&self, key: &'static str) -> Option<&Value> {
        match self.0.get(key) {
            None | Some(Value::Null) => None,
            Some(v) => Some(v),
        }
    }

    fn str_field(&self, key: &'static str) -> Result<Option<&str>> {
        match self.field(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(Error::MalformedProfile {
                field: key,
                expected: "string",
            }),
        }
    }

    fn f64_field(&self, key: &'static str) -> Result<Option<f64>> {
        let number = match self.field(key) {
            None => return Ok(None),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(v) => v.as_f64(),
        };
        number.map(Some).ok_or(Error::MalformedProfile {
            field: key,
            expected: "number",
        })
    }
}

impl From<Value> for ProfileRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
