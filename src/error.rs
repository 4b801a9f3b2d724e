use serde::{Serialize, Deserialize};
use std::fmt;

/// Error type for the fallible edges of the catalog: parsing embedded or
/// host-supplied resources, loading configuration, validating a catalog and
/// installing the logger. Plain lookups never produce it; absence is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogError {
    pub message: String,
    pub stage: String,
    pub context: Option<String>,
    pub source: Option<String>,
}

impl CatalogError {
    /// Create a new error with stage and message
    pub fn new<S: Into<String>>(message: S, stage: &'static str) -> Self {
        CatalogError {
            message: message.into(),
            stage: stage.to_string(),
            context: None,
            source: None,
        }
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add source error information
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)?;
        if let Some(context) = &self.context {
            write!(f, " (context: {})", context)?;
        }
        match &self.source {
            Some(source) => write!(f, " (source: {})", source),
            None => Ok(()),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        CatalogError::new(format!("{:#}", err), "unknown").with_source("anyhow")
    }
}

// Resource parse failures keep the parser's message and name the parser.
impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::new(format!("JSON error: {}", err), "json_parse").with_source("serde_json")
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::new(format!("TOML error: {}", err), "toml_parse").with_source("toml")
    }
}
