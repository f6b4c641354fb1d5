use crate::config::LookupSettings;
use crate::utils::error::{ConsultaError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// File form of the settings. Every table is optional:
///
/// ```toml
/// [http]
/// timeout_seconds = 10
/// user_agent = "consulta-br"
///
/// [cep]
/// endpoint = "https://viacep.com.br/ws/{id}/json/"
///
/// [cnpj]
/// endpoint = "${CNPJ_ENDPOINT}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub http: Option<HttpConfig>,
    pub cep: Option<EndpointConfig>,
    pub cnpj: Option<EndpointConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub endpoint: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConsultaError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConsultaError::Config {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConsultaError::Config {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Settings with the file's values laid over the defaults.
    pub fn to_settings(&self) -> LookupSettings {
        let mut settings = LookupSettings::default();
        if let Some(cep) = &self.cep {
            settings.cep_endpoint = cep.endpoint.clone();
        }
        if let Some(cnpj) = &self.cnpj {
            settings.cnpj_endpoint = cnpj.endpoint.clone();
        }
        if let Some(http) = &self.http {
            if let Some(seconds) = http.timeout_seconds {
                settings.timeout = Some(Duration::from_secs(seconds));
            }
            if let Some(user_agent) = &http.user_agent {
                settings.user_agent = user_agent.clone();
            }
        }
        settings
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_settings().validate()
    }
}
