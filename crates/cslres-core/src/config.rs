use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Style requested when a caller names none.
pub const DEFAULT_STYLE: &str = "chicago-author-date";

/// Global configuration loaded from `~/.config/cslres/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CslresConfig {
    /// Directory holding independent styles as `<shortName>.csl` files.
    pub style_dir: PathBuf,
    /// Directory holding dependent styles; defaults to `<style_dir>/dependent`.
    #[serde(default)]
    pub dependent_dir: Option<PathBuf>,
    /// Style used when a request names none (default: chicago-author-date).
    #[serde(default)]
    pub default_style: Option<String>,
}

impl Default for CslresConfig {
    fn default() -> Self {
        Self {
            style_dir: PathBuf::from("csl"),
            dependent_dir: None,
            default_style: None,
        }
    }
}

impl CslresConfig {
    /// Effective dependent-style directory.
    pub fn dependent_dir(&self) -> PathBuf {
        self.dependent_dir
            .clone()
            .unwrap_or_else(|| self.style_dir.join("dependent"))
    }

    /// Effective default style short name.
    pub fn default_style(&self) -> &str {
        self.default_style.as_deref().unwrap_or(DEFAULT_STYLE)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cslres")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CslresConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CslresConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CslresConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = CslresConfig::default();
        assert_eq!(cfg.style_dir, PathBuf::from("csl"));
        assert_eq!(cfg.dependent_dir(), PathBuf::from("csl/dependent"));
        assert_eq!(cfg.default_style(), "chicago-author-date");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CslresConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CslresConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.style_dir, cfg.style_dir);
        assert_eq!(parsed.dependent_dir, cfg.dependent_dir);
        assert_eq!(parsed.default_style, cfg.default_style);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            style_dir = "/srv/styles"
            dependent_dir = "/srv/styles-dependent"
            default_style = "apa"
        "#;
        let cfg: CslresConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.style_dir, PathBuf::from("/srv/styles"));
        assert_eq!(cfg.dependent_dir(), PathBuf::from("/srv/styles-dependent"));
        assert_eq!(cfg.default_style(), "apa");
    }

    #[test]
    fn config_toml_minimal() {
        let toml = r#"style_dir = "styles""#;
        let cfg: CslresConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.style_dir, PathBuf::from("styles"));
        assert!(cfg.dependent_dir.is_none());
        assert_eq!(cfg.dependent_dir(), PathBuf::from("styles/dependent"));
        assert_eq!(cfg.default_style(), DEFAULT_STYLE);
    }
}
