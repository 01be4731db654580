use anyhow::{bail, Context};
use serde_json::{Map, Value};

pub const ID_KEY: &str = "id";

/// String-keyed view of a resource instance as the host hands it over.
pub trait ResourceData {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: String);
    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: Option<String>);
}

/// Resource instance stored as a flat JSON object, e.g.
/// `{"id": "...", "cluster_id": "...", "principal": "...", ...}`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct JsonResourceData {
    values: Map<String, Value>,
}

impl JsonResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, anyhow::Error> {
        let value = serde_json::from_str::<Value>(json).context("While parsing resource state")?;
        Self::try_from(value)
    }

    pub fn to_json(&self) -> Result<String, anyhow::Error> {
        serde_json::to_string_pretty(&self.values).context("While serializing resource state")
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }
}

impl TryFrom<Value> for JsonResourceData {
    type Error = anyhow::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(values) = value else {
            bail!("Resource state must be a JSON object")
        };

        Ok(Self { values })
    }
}

impl ResourceData for JsonResourceData {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), Value::String(value));
    }

    fn id(&self) -> Option<&str> {
        self.get(ID_KEY).filter(|x| !x.is_empty())
    }

    fn set_id(&mut self, id: Option<String>) {
        let value = id.map(Value::String).unwrap_or(Value::Null);
        self.values.insert(ID_KEY.to_owned(), value);
    }
}
