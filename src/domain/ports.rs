use crate::domain::model::{JsonObject, Mapped};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Issues a GET and parses the body as a JSON object. Every failure is a
/// `ConsultaError::Transport`.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<JsonObject>;
}

/// User-facing alert primitive.
pub trait Notifier: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn cep_endpoint(&self) -> &str;
    fn cnpj_endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn user_agent(&self) -> &str;
}

/// Everything that differs between the CEP and CNPJ flows.
pub trait LookupKind: Send + Sync + 'static {
    type Entity: Clone + std::fmt::Debug + Send + Sync + 'static;

    /// Short name used in logs and validation errors.
    const NAME: &'static str;
    const DIGITS: usize;
    const DEFAULT_ENDPOINT: &'static str;
    const INVALID_INPUT_MESSAGE: &'static str;
    const TRANSPORT_ERROR_MESSAGE: &'static str;

    /// Classify a parsed body. Total: never fails.
    fn classify(body: &JsonObject) -> Mapped<Self::Entity>;

    /// Endpoint template for this kind from the given configuration.
    fn endpoint(config: &dyn ConfigProvider) -> &str;
}

#[async_trait]
impl<T: JsonFetcher + ?Sized> JsonFetcher for std::sync::Arc<T> {
    async fn get_json(&self, url: &str) -> Result<JsonObject> {
        (**self).get_json(url).await
    }
}
