pub mod cep;
pub mod cnpj;

use crate::adapters::HttpFetcher;
use crate::core::FlowController;
use crate::domain::model::JsonObject;
use serde_json::Value;

pub use cep::CepLookup;
pub use cnpj::CnpjLookup;

pub type CepFlow<F = HttpFetcher> = FlowController<CepLookup, F>;
pub type CnpjFlow<F = HttpFetcher> = FlowController<CnpjLookup, F>;

/// Loose truthiness of a JSON value: `null`, `false`, `0` and `""` are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Display text of `body[key]`; absent, null and structured values become "".
pub(crate) fn text_field(body: &JsonObject, key: &str) -> String {
    match body.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
