//! Routes file loading and validation.
//!
//! ```yaml
//! routes:
//!   - name: user-profile
//!     path: "/users/:number/profile"
//!     schemes: [https]
//!     headers: ["X-Api-Version", "2"]
//!   - name: trace
//!     path: "#/api/v[0-9]+/trace#"
//!     headersRegexp: ["X-Trace", "^[0-9]+$"]
//! ```

mod routes;

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub use routes::{CompiledRoute, RouteSpec};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RouteConfig {
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

impl RouteConfig {
    /// Load a routes file. `.json` files are parsed as JSON, everything else
    /// as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read routes file {}", path.display()))?;

        let config: RouteConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&contents)?
        } else {
            serde_yaml::from_str(&contents)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, anyhow::Error> {
        let config: RouteConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let mut seen = HashSet::new();

        for (idx, route) in self.routes.iter().enumerate() {
            if route.name.trim().is_empty() {
                anyhow::bail!("routes[{idx}]: route name must not be empty");
            }
            if !seen.insert(route.name.as_str()) {
                anyhow::bail!("routes[{idx}]: duplicate route name '{}'", route.name);
            }
            if !route.has_predicates() {
                anyhow::bail!(
                    "routes[{idx}] '{}': define at least one of path, schemes, headers, headersRegexp",
                    route.name
                );
            }
        }

        Ok(())
    }

    /// Compile every route, keeping file order.
    pub fn compile(&self) -> Result<Vec<CompiledRoute>, anyhow::Error> {
        self.routes
            .iter()
            .map(|route| {
                route
                    .compile()
                    .with_context(|| format!("invalid route '{}'", route.name))
            })
            .collect()
    }
}
