pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{ConsoleNotifier, HttpFetcher};
pub use app::lookups::{CepFlow, CepLookup, CnpjFlow, CnpjLookup};
pub use config::{toml_config::TomlConfig, LookupSettings};
pub use core::{FlowController, SubmitOutcome};
pub use domain::model::{AddressResult, Card, CompanyResult, FlowPhase, PresentationState};
pub use utils::error::{ConsultaError, Result};
