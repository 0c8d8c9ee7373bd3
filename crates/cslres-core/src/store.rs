//! Byte-content reads from the two style storage locations.
//!
//! Independent styles live as `<shortName>.csl` directly under the style
//! directory; dependent styles under the dependent directory. Reads are
//! async suspension points in the request pipeline.

use std::path::{Path, PathBuf};

use crate::error::StyleError;
use crate::registry::STYLE_FILE_SUFFIX;

/// Filesystem access to the style storage locations.
#[derive(Debug, Clone)]
pub struct StyleStore {
    independent_dir: PathBuf,
    dependent_dir: PathBuf,
}

impl StyleStore {
    pub fn new(independent_dir: impl Into<PathBuf>, dependent_dir: impl Into<PathBuf>) -> Self {
        Self {
            independent_dir: independent_dir.into(),
            dependent_dir: dependent_dir.into(),
        }
    }

    pub fn independent_path(&self, short_name: &str) -> PathBuf {
        style_path(&self.independent_dir, short_name)
    }

    pub fn dependent_path(&self, short_name: &str) -> PathBuf {
        style_path(&self.dependent_dir, short_name)
    }

    /// Raw text of an independent stylesheet.
    pub async fn read_independent(&self, short_name: &str) -> Result<String, StyleError> {
        read(self.independent_path(short_name)).await
    }

    /// Raw text of a dependent stylesheet.
    pub async fn read_dependent(&self, short_name: &str) -> Result<String, StyleError> {
        read(self.dependent_path(short_name)).await
    }
}

fn style_path(dir: &Path, short_name: &str) -> PathBuf {
    dir.join(format!("{short_name}{STYLE_FILE_SUFFIX}"))
}

async fn read(path: PathBuf) -> Result<String, StyleError> {
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Ok(content),
        Err(source) => Err(StyleError::FileRead { path, source }),
    }
}
