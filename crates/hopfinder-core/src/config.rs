//! Layered configuration for routing front-ends.
//!
//! Values are merged in order, later sources winning:
//! 1. Built-in defaults
//! 2. A TOML file (`hopfinder.toml` or an explicit path)
//! 3. Environment variables prefixed with `HOPFINDER_` (`__` separates sections)
//!
//! ```toml
//! [graph]
//! capacity_hint = 8000
//!
//! [routing]
//! algorithm = "weighted"
//! avoid = [30000142]
//! avoid_edges = [[30000142, 30000144]]
//!
//! [logging]
//! filter = "hopfinder_core=debug"
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::route::{Algorithm, RouteConstraints};

/// File read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "hopfinder.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "HOPFINDER_";

/// Largest accepted `graph.capacity_hint`.
pub const MAX_CAPACITY_HINT: usize = 1 << 28;

/// Graph loading settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Expected node count, used to pre-size the store. The loader never
    /// reserves more than twice the records in the document.
    pub capacity_hint: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            capacity_hint: 1024,
        }
    }
}

/// Default solver and avoidance lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Solver used when the caller does not pick one.
    pub algorithm: Algorithm,
    /// Nodes and edges excluded from every route.
    #[serde(flatten)]
    pub constraints: RouteConstraints,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HopfinderConfig {
    /// `[graph]` section.
    pub graph: GraphConfig,
    /// `[routing]` section.
    pub routing: RoutingConfig,
    /// `[logging]` section.
    pub logging: LoggingConfig,
}

impl HopfinderConfig {
    /// Loads defaults, then the TOML file, then `HOPFINDER_*` variables.
    ///
    /// With `path = None` the default file is optional; an explicit path must
    /// exist.
    ///
    /// # Errors
    ///
    /// `Error::Config` if the file is missing (explicit path only), cannot be
    /// parsed, or the merged values fail [`HopfinderConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path
            }
            None => Path::new(DEFAULT_CONFIG_FILE),
        };

        tracing::debug!(path = %file.display(), "Loading configuration");
        Self::extract(
            Figment::from(Serialized::defaults(Self::default()))
                .merge(Toml::file(file))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    /// Parses a TOML document on top of the defaults, ignoring the environment.
    ///
    /// # Errors
    ///
    /// `Error::Config` on parse or validation failure.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::extract(Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(toml)))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// `Error::Config` naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.graph.capacity_hint > MAX_CAPACITY_HINT {
            return Err(Error::Config(format!(
                "graph.capacity_hint must be at most {MAX_CAPACITY_HINT}, got {}",
                self.graph.capacity_hint
            )));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(Error::Config("logging.filter must not be empty".into()));
        }

        Ok(())
    }
}
