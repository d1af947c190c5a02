//! Web UI server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address the web UI binds to (default: "127.0.0.1:7860")
    pub addr: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:7860".to_string(),
        }
    }
}
