//! Builds a temporary style storage tree and a resolver over it.

use cslres_core::registry::StyleRegistry;
use cslres_core::resolver::StyleResolver;
use cslres_core::store::StyleStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary independent + dependent style directories.
pub struct StyleTree {
    pub dir: TempDir,
}

impl StyleTree {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("dependent")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an independent style with the given exact content.
    pub fn independent(&self, short_name: &str, content: &str) -> &Self {
        fs::write(self.path().join(format!("{short_name}.csl")), content).unwrap();
        self
    }

    /// Write a dependent style declaring `parent` as its independent parent.
    pub fn dependent(&self, short_name: &str, parent: &str) -> &Self {
        let content = format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<style xmlns="http://purl.org/net/xbiblio/csl" version="1.0" default-locale="en-US">
  <info>
    <title>{short_name}</title>
    <id>http://www.zotero.org/styles/{short_name}</id>
    <link href="http://www.zotero.org/styles/{short_name}" rel="self"/>
    <link href="{parent}" rel="independent-parent"/>
  </info>
</style>
"#
        );
        fs::write(
            self.path().join("dependent").join(format!("{short_name}.csl")),
            content,
        )
        .unwrap();
        self
    }

    /// Load the registry snapshot and build a resolver over this tree.
    pub fn resolver(&self) -> StyleResolver {
        let dependent_dir = self.path().join("dependent");
        let registry = StyleRegistry::load(self.path(), &dependent_dir).unwrap();
        StyleResolver::new(registry, StyleStore::new(self.path(), dependent_dir))
    }
}
