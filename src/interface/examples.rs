//! Implemented interface examples.
//!
//! These types exist to exercise and test the [`Configurable`] contract;
//! they embody no independent design decisions.

use serde_json::Value as Json;

use crate::errors::Error;
use crate::interface::generic::{Configurable, Serializer};
use crate::value::{ConfigMap, Value};

fn take_value(dict: &mut ConfigMap) -> Result<Value, Error> {
    let value = dict
        .remove("value")
        .ok_or_else(|| Error::missing_parameter("value"))?;
    if let Some(key) = dict.keys().next() {
        return Err(Error::unexpected_parameter(key));
    }
    Ok(value)
}

/// Transformer rendering naive date/time values as ISO-8601 strings.
fn datetime_iso8601(value: &Value) -> Option<Json> {
    match value {
        Value::DateTime(dt) => Some(Json::String(
            dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        )),
        _ => None,
    }
}

/// Smallest possible implementation: wraps a single arbitrary value.
///
/// Uses the default fail-fast serializer, so a date/time value makes
/// [`Configurable::to_json`] fail with [`Error::Encode`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleCase {
    pub value: Value,
}

impl SimpleCase {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Configurable for SimpleCase {
    fn to_dict(&self) -> ConfigMap {
        ConfigMap::from([("value".to_string(), self.value.clone())])
    }

    fn from_dict(mut dict: ConfigMap) -> Result<Self, Error> {
        Ok(Self {
            value: take_value(&mut dict)?,
        })
    }
}

/// Same shape as [`SimpleCase`], with a serializer that special-cases
/// date/time values and delegates everything else to the parent chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleCaseWithSerializer {
    pub value: Value,
}

impl SimpleCaseWithSerializer {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Configurable for SimpleCaseWithSerializer {
    fn to_dict(&self) -> ConfigMap {
        ConfigMap::from([("value".to_string(), self.value.clone())])
    }

    fn from_dict(mut dict: ConfigMap) -> Result<Self, Error> {
        Ok(Self {
            value: take_value(&mut dict)?,
        })
    }

    fn serializer(&self) -> Serializer {
        Serializer::new().with(datetime_iso8601)
    }
}
