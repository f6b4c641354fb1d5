pub mod flow;

pub use crate::domain::model::{JsonObject, Mapped, PresentationState};
pub use crate::domain::ports::{ConfigProvider, JsonFetcher, LookupKind, Notifier};
pub use crate::utils::error::Result;
pub use flow::{FlowController, SubmitOutcome, ALERT_TITLE};
