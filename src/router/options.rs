use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_WILDCARD: &str = "*";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    pub decode_uri: bool,
    pub case_sensitive: bool,
    pub wildcard: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            decode_uri: true,
            case_sensitive: true,
            wildcard: DEFAULT_WILDCARD.to_string(),
        }
    }
}

impl RouterConfig {
    pub fn builder() -> RouterConfigBuilder {
        RouterConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterConfigError> {
        if self.wildcard.is_empty() {
            return Err(RouterConfigError::EmptyWildcard);
        }
        if self.wildcard.contains('/') {
            return Err(RouterConfigError::WildcardContainsSlash {
                wildcard: self.wildcard.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterConfigBuilder {
    config: RouterConfig,
}

impl RouterConfigBuilder {
    pub fn decode_uri(mut self, value: bool) -> Self {
        self.config.decode_uri = value;
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.config.case_sensitive = value;
        self
    }

    pub fn wildcard<S: Into<String>>(mut self, wildcard: S) -> Self {
        self.config.wildcard = wildcard.into();
        self
    }

    pub fn build(self) -> Result<RouterConfig, RouterConfigError> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterConfigError {
    #[error("wildcard token must not be empty")]
    EmptyWildcard,
    #[error("wildcard token '{wildcard}' must not contain '/'")]
    WildcardContainsSlash { wildcard: String },
}

pub type RouterOptions = RouterConfig;
pub type RouterOptionsBuilder = RouterConfigBuilder;
pub type RouterOptionsError = RouterConfigError;
