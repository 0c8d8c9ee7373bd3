//! Style registry: startup snapshot of known style names.
//!
//! Built once before any request is served and never refreshed; a style
//! added to storage afterwards is invisible until restart. The independent
//! set is immutable; the dependent table memoizes parent links as they are
//! resolved.

use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::RwLock;

/// Filename suffix of style files in both storage locations.
pub const STYLE_FILE_SUFFIX: &str = ".csl";

/// Resolution state of one dependent style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependentState {
    /// Parent not looked up yet.
    Unresolved,
    /// Parent link already extracted; the raw identifier string as it
    /// appeared in the stylesheet. Entries never revert to Unresolved.
    ResolvedTo(String),
}

/// Process-wide registry of known style short names.
///
/// Shared read-mostly across concurrent requests. The only mutation after
/// load is the one-way Unresolved -> ResolvedTo transition in `dependent`;
/// concurrent requests racing on the same name write the same value, so the
/// race is benign.
#[derive(Debug)]
pub struct StyleRegistry {
    independent: HashSet<String>,
    dependent: RwLock<HashMap<String, DependentState>>,
}

impl StyleRegistry {
    /// Build a registry by enumerating `<shortName>.csl` files in the two
    /// storage locations. Runs synchronously at startup; failure to
    /// enumerate either location is fatal to the process, not a per-request
    /// error.
    pub fn load(independent_dir: &Path, dependent_dir: &Path) -> Result<Self> {
        let independent: HashSet<String> = enumerate_styles(independent_dir)
            .with_context(|| {
                format!(
                    "enumerate independent styles in {}",
                    independent_dir.display()
                )
            })?
            .into_iter()
            .collect();

        let mut dependent = HashMap::new();
        for name in enumerate_styles(dependent_dir).with_context(|| {
            format!("enumerate dependent styles in {}", dependent_dir.display())
        })? {
            // A short name belongs to at most one table; independent wins.
            if independent.contains(&name) {
                tracing::warn!(
                    "style {:?} present in both locations; ignoring the dependent file",
                    name
                );
                continue;
            }
            dependent.insert(name, DependentState::Unresolved);
        }

        tracing::info!(
            "loaded style registry: {} independent, {} dependent",
            independent.len(),
            dependent.len()
        );

        Ok(Self {
            independent,
            dependent: RwLock::new(dependent),
        })
    }

    pub fn is_independent(&self, short_name: &str) -> bool {
        self.independent.contains(short_name)
    }

    /// Current state of a dependent entry, or None if the name is unknown
    /// to the dependent table.
    pub fn dependent_state(&self, short_name: &str) -> Option<DependentState> {
        self.dependent.read().unwrap().get(short_name).cloned()
    }

    /// Memoize the parent of a dependent style. Permanent for the process
    /// lifetime; re-recording the same name stores the same value.
    pub fn record_parent(&self, short_name: &str, parent: &str) {
        self.dependent.write().unwrap().insert(
            short_name.to_string(),
            DependentState::ResolvedTo(parent.to_string()),
        );
    }

    pub fn independent_count(&self) -> usize {
        self.independent.len()
    }

    pub fn dependent_count(&self) -> usize {
        self.dependent.read().unwrap().len()
    }

    /// Independent short names, sorted for stable listing.
    pub fn independent_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.independent.iter().cloned().collect();
        names.sort();
        names
    }

    /// Dependent short names with their current state, sorted by name.
    pub fn dependent_entries(&self) -> Vec<(String, DependentState)> {
        let mut entries: Vec<(String, DependentState)> = self
            .dependent
            .read()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// Short names of all `*.csl` files directly under `dir`.
fn enumerate_styles(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if let Some(short) = file_name.strip_suffix(STYLE_FILE_SUFFIX) {
            if !short.is_empty() {
                names.push(short.to_string());
            }
        }
    }
    Ok(names)
}
