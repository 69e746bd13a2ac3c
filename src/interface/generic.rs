//! Generic configuration contract for all objects of the package.

use serde_json::{Map as JsonMap, Value as Json};

use crate::errors::Error;
use crate::value::{ConfigMap, Value};

/// A single typed transformer in a serializer chain.
///
/// Returns `Some` with the JSON rendering when the transformer recognizes
/// the value, `None` to fall through to the next link in the chain.
pub type Transform = fn(&Value) -> Option<Json>;

/// Ordered chain of transformers, most specific first.
///
/// JSON-native values encode directly and never consult the chain; a value
/// with no native rendering is offered to each link in order. The empty
/// chain is the fail-fast default: such a value yields [`Error::Encode`].
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    chain: Vec<Transform>,
}

impl Serializer {
    /// The empty chain.
    pub fn new() -> Self {
        Self { chain: Vec::new() }
    }

    /// Prepend a transformer so it is consulted before the existing chain.
    ///
    /// An implementation extending another serializer keeps its own,
    /// more specific transformers at the front and delegates to the parent
    /// chain for everything it does not recognize.
    #[must_use]
    pub fn with(mut self, transform: Transform) -> Self {
        self.chain.insert(0, transform);
        self
    }

    /// Encode one value as JSON.
    ///
    /// Native kinds encode directly, arrays and maps recurse through the
    /// same chain, everything else walks the chain front to back. Fails
    /// when no link claims the value.
    pub fn encode(&self, value: &Value) -> Result<Json, Error> {
        match value {
            Value::Null => Ok(Json::Null),
            Value::Bool(b) => Ok(Json::Bool(*b)),
            Value::Int(n) => Ok(Json::from(*n)),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(Json::Number)
                .ok_or_else(|| Error::encode(value.kind())),
            Value::String(s) => Ok(Json::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| self.encode(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Json::Array),
            Value::Map(map) => {
                let mut object = JsonMap::new();
                for (key, nested) in map {
                    object.insert(key.clone(), self.encode(nested)?);
                }
                Ok(Json::Object(object))
            }
            Value::DateTime(_) => self
                .chain
                .iter()
                .find_map(|transform| transform(value))
                .ok_or_else(|| Error::encode(value.kind())),
        }
    }
}

/// Generic interface for all objects of the package.
///
/// The contract is stateless and pure: [`to_dict`](Configurable::to_dict)
/// must be deterministic and side-effect-free, and its keys must match the
/// parameters accepted by [`from_dict`](Configurable::from_dict) exactly,
/// so that `T::from_dict(instance.to_dict())` rebuilds an equal instance.
///
/// The trait itself cannot be instantiated; a type that does not provide
/// `to_dict` and `from_dict` does not compile.
pub trait Configurable {
    /// Return the configuration of the object as a mapping.
    fn to_dict(&self) -> ConfigMap;

    /// Rebuild an instance from its configuration mapping.
    ///
    /// Fails with [`Error::InvalidParameter`] when a key is missing,
    /// unexpected, or carries the wrong kind of value.
    fn from_dict(dict: ConfigMap) -> Result<Self, Error>
    where
        Self: Sized;

    /// The serializer chain used by [`to_json`](Configurable::to_json).
    ///
    /// Defaults to the empty chain, so values without a native JSON
    /// rendering fail fast. Implementations with domain values prepend
    /// their own transformers and fall through to this default.
    fn serializer(&self) -> Serializer {
        Serializer::new()
    }

    /// Return the configuration of the object as a JSON string.
    ///
    /// Encoding failures propagate unrecovered; there is no silent
    /// coercion and no default substitution.
    fn to_json(&self) -> Result<String, Error> {
        let serializer = self.serializer();
        let mut object = JsonMap::new();
        for (key, value) in &self.to_dict() {
            object.insert(key.clone(), serializer.encode(value)?);
        }
        Ok(Json::Object(object).to_string())
    }
}
