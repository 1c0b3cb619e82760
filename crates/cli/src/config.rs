use anyhow::{Context, Result};
use markup_core::RenderOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "markup.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MarkupConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_include_script_tag")]
    pub include_script_tag: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_script_tag: default_include_script_tag(),
        }
    }
}

fn default_include_script_tag() -> bool {
    true
}

impl MarkupConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: MarkupConfig = toml::from_str(&raw)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// An explicit path must exist; the default `markup.toml` is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            include_script_tag: self.output.include_script_tag,
        }
    }
}
