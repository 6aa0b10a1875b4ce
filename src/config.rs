//! Configuration management

use crate::error::ConfigError;
use crate::models::Litres;

/// Environment variable holding the base radius for anchor-seeded clustering
pub const BASE_DISTANCE_ENV: &str = "ORDER_CLUSTERING_BASE_DISTANCE_KM";

/// Environment variable holding the default litre target
pub const DEFAULT_LITRES_ENV: &str = "ORDER_CLUSTERING_DEFAULT_LITRES";

/// Clustering configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusteringConfig {
    /// Radius around each anchor before the caller's extra margin is added, in km
    pub base_distance_km: f64,

    /// Litre target used when a caller does not give one
    pub default_litre_target: Litres,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            base_distance_km: 3.0,
            default_litre_target: 1000,
        }
    }
}

impl ClusteringConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_distance_km = match lookup(BASE_DISTANCE_ENV) {
            Some(value) => {
                let parsed = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::NotANumber {
                        key: BASE_DISTANCE_ENV,
                        value: value.clone(),
                    })?;
                if !parsed.is_finite() || parsed <= 0.0 {
                    return Err(ConfigError::NotPositive {
                        key: BASE_DISTANCE_ENV,
                        value,
                    });
                }
                parsed
            }
            None => defaults.base_distance_km,
        };

        let default_litre_target = match lookup(DEFAULT_LITRES_ENV) {
            Some(value) => {
                let parsed = value
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ConfigError::NotANumber {
                        key: DEFAULT_LITRES_ENV,
                        value: value.clone(),
                    })?;
                if parsed <= 0 {
                    return Err(ConfigError::NotPositive {
                        key: DEFAULT_LITRES_ENV,
                        value,
                    });
                }
                parsed as Litres
            }
            None => defaults.default_litre_target,
        };

        Ok(Self {
            base_distance_km,
            default_litre_target,
        })
    }
}
