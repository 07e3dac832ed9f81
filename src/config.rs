use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::codegen::regions::placeholder;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Written into the `// Generated by ...` line.
    #[serde(default = "default_product_name")]
    pub product_name: String,
    /// One level of indentation in the generated script.
    #[serde(default = "default_indent")]
    pub indent: String,
    /// Text of the comment placed in empty editable regions.
    #[serde(default = "default_placeholder_message")]
    pub placeholder_message: String,
}

fn default_product_name() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
fn default_indent() -> String { "\t".into() }
fn default_placeholder_message() -> String { "user code here".into() }

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            product_name: default_product_name(),
            indent: default_indent(),
            placeholder_message: default_placeholder_message(),
        }
    }
}

impl GeneratorConfig {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Missing file means defaults; an unreadable one is reported and also
    /// falls back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => config,
                Err(e) => {
                    warn!("invalid generator config {} ({e}), using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("canvas-codegen");
        path.push("codegen.json");
        path
    }

    /// Placeholder for the pre/post-init regions, which sit inside a body.
    pub fn body_placeholder(&self) -> String {
        placeholder(&self.indent, &self.placeholder_message)
    }

    /// Placeholder for the text after the end-of-generated-code marker.
    pub fn trailing_placeholder(&self) -> String {
        placeholder("", &self.placeholder_message)
    }
}
