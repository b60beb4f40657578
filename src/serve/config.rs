use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::AvatarSize;
use crate::foundation::error::{AvatarError, AvatarResult};

/// Server settings. Every field has a default, so a config file may be partial.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeConfig {
    pub listen: SocketAddr,
    /// Size used when a request has no `size` parameter.
    pub default_size: AvatarSize,
    pub route: String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            default_size: AvatarSize::S64,
            route: "/avatar".to_owned(),
        }
    }
}

impl ServeConfig {
    pub fn from_path(path: &Path) -> AvatarResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AvatarResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| AvatarError::validation(format!("config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AvatarResult<()> {
        if !self.route.starts_with('/') {
            return Err(AvatarError::validation(format!(
                "route must start with '/' (got '{}')",
                self.route
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/serve/config.rs"]
mod tests;
