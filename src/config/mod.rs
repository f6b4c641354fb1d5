pub mod toml_config;

use crate::app::lookups::cep::CEP_ENDPOINT;
use crate::app::lookups::cnpj::CNPJ_ENDPOINT;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_endpoint_template, validate_non_empty_string, validate_range, Validate,
};
use std::path::Path;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_USER_AGENT: &str = concat!("consulta-br/", env!("CARGO_PKG_VERSION"));
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Resolved settings shared by both flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    pub cep_endpoint: String,
    pub cnpj_endpoint: String,
    /// `None` leaves reqwest's default (no overall timeout).
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            cep_endpoint: CEP_ENDPOINT.to_string(),
            cnpj_endpoint: CNPJ_ENDPOINT.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl LookupSettings {
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Some(Duration::from_secs(seconds));
        self
    }

    /// Loads the optional TOML file, applies the timeout override and validates
    /// the result.
    pub fn resolve(config_path: Option<&Path>, timeout_seconds: Option<u64>) -> Result<Self> {
        let mut settings = match config_path {
            Some(path) => TomlConfig::from_file(path)?.to_settings(),
            None => Self::default(),
        };
        if let Some(seconds) = timeout_seconds {
            settings = settings.with_timeout_seconds(seconds);
        }
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for LookupSettings {
    fn cep_endpoint(&self) -> &str {
        &self.cep_endpoint
    }

    fn cnpj_endpoint(&self) -> &str {
        &self.cnpj_endpoint
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for LookupSettings {
    fn validate(&self) -> Result<()> {
        validate_endpoint_template("cep.endpoint", &self.cep_endpoint)?;
        validate_endpoint_template("cnpj.endpoint", &self.cnpj_endpoint)?;
        if let Some(timeout) = self.timeout {
            validate_range(
                "http.timeout_seconds",
                timeout.as_secs(),
                1,
                MAX_TIMEOUT_SECONDS,
            )?;
        }
        validate_non_empty_string("http.user_agent", &self.user_agent)
    }
}

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "consulta")]
    #[command(about = "Consulta CEP (ViaCEP) e CNPJ (ReceitaWS)")]
    pub struct CliConfig {
        /// TOML file with endpoint and HTTP settings
        #[arg(long, global = true)]
        pub config: Option<PathBuf>,

        /// Request timeout in seconds (overrides the config file)
        #[arg(long, global = true)]
        pub timeout: Option<u64>,

        /// Print results as JSON instead of cards
        #[arg(long, global = true)]
        pub json: bool,

        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Busca endereço pelo CEP
        Cep {
            /// CEP, with or without punctuation
            value: String,
        },
        /// Busca empresa pelo CNPJ
        Cnpj {
            /// CNPJ, with or without punctuation
            value: String,
        },
        /// Runs both lookups concurrently
        Both {
            #[arg(long)]
            cep: String,
            #[arg(long)]
            cnpj: String,
        },
    }
}
