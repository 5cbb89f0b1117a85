use thiserror::Error;

const DEFAULT_FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "FMP_API_KEY is not set; get a key at https://site.financialmodelingprep.com/ \
         and export it before starting"
    )]
    MissingApiKey,

    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub fmp_api_key: String,
    pub fmp_base_url: String,
    pub port: u16,
    pub frontend_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let config = Self {
            fmp_api_key: std::env::var("FMP_API_KEY").unwrap_or_default(),
            fmp_base_url: std::env::var("FMP_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_FMP_BASE_URL.to_string()),
            port,
            frontend_origin: std::env::var("FRONTEND_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    // The API key is required configuration: a missing key fails
    // startup instead of silently degrading to a low-quota default.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.fmp_api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if url::Url::parse(&self.fmp_base_url).is_err() {
            return Err(ConfigError::Invalid {
                name: "FMP_BASE_URL",
                value: self.fmp_base_url.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            fmp_api_key: "test-key".to_string(),
            fmp_base_url: DEFAULT_FMP_BASE_URL.to_string(),
            port: DEFAULT_PORT,
            frontend_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn missing_api_key_fails_validation() {
        let mut config = base_config();
        config.fmp_api_key = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::MissingApiKey)));

        config.fmp_api_key = "   ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn malformed_base_url_fails_validation() {
        let mut config = base_config();
        config.fmp_base_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { name: "FMP_BASE_URL", .. })
        ));
    }
}
