use near_sdk::serde::Serialize;
use near_sdk::serde_json::{self, json, Map, Value};
use near_sdk::{env, AccountId};

use super::{PREFIX, STANDARD, VERSION};

/// NEP-297 envelope builder for registry events. `data` carries a single
/// object holding the operation, the acting account, and any extra fields.
pub(crate) struct EventBuilder {
    event: &'static str,
    data: Map<String, Value>,
}

impl EventBuilder {
    pub(crate) fn new(event: &'static str, operation: &str, actor_id: &AccountId) -> Self {
        let mut data = Map::new();
        data.insert("operation".to_string(), Value::String(operation.to_string()));
        data.insert("actor_id".to_string(), Value::String(actor_id.to_string()));
        Self { event, data }
    }

    pub(crate) fn field(mut self, key: &str, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.data.insert(key.to_string(), value);
        }
        self
    }

    pub(crate) fn emit(self) {
        let payload = json!({
            "standard": STANDARD,
            "version": VERSION,
            "event": self.event,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", PREFIX, payload));
    }
}
