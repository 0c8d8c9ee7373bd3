//! Dependent-chain resolution and content fetch.
//!
//! `StyleResolver` owns the registry snapshot and storage access; request
//! handlers share one resolver rather than reaching a global. `resolve_step`
//! advances an identifier by at most one dependency hop; `resolve_fully`
//! loops it with a hop bound and cycle check for callers that want a
//! terminal independent style.

use std::collections::HashSet;

use crate::config::CslresConfig;
use crate::error::StyleError;
use crate::extract::extract_parent_link;
use crate::identifier::{normalize, StyleIdentifier};
use crate::registry::{DependentState, StyleRegistry};
use crate::store::StyleStore;

/// Upper bound on dependency hops in `resolve_fully`.
pub const MAX_RESOLVE_HOPS: usize = 10;

/// Per-call state carried through the pipeline. Owned by one call; never
/// shared across concurrent requests.
#[derive(Debug)]
pub struct StyleRequest {
    /// Current identifier; replaced wholesale by each resolution hop.
    pub identifier: StyleIdentifier,
    /// Pre-supplied stylesheet payload. When present it wins over any
    /// resolved identifier and no storage is consulted.
    pub posted_style: Option<String>,
}

impl StyleRequest {
    /// Normalize a raw style reference into a request.
    pub fn parse(raw: &str) -> Result<Self, StyleError> {
        Ok(Self {
            identifier: normalize(raw)?,
            posted_style: None,
        })
    }

    /// Attach a posted stylesheet payload, bypassing resolution and fetch.
    pub fn with_posted_style(mut self, payload: String) -> Self {
        self.posted_style = Some(payload);
        self
    }
}

/// What one resolution step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Short name is independent; the identifier is terminal.
    Independent,
    /// Identifier advanced one hop to the dependent style's parent.
    Advanced,
}

/// Resolution service: immutable name-set snapshot plus the memoizing
/// dependent-parent table, and read access to style storage.
#[derive(Debug)]
pub struct StyleResolver {
    registry: StyleRegistry,
    store: StyleStore,
}

impl StyleResolver {
    pub fn new(registry: StyleRegistry, store: StyleStore) -> Self {
        Self { registry, store }
    }

    /// Load the registry from the configured storage locations and build a
    /// resolver. Startup-time; enumeration failure is fatal.
    pub fn from_config(cfg: &CslresConfig) -> anyhow::Result<Self> {
        let dependent_dir = cfg.dependent_dir();
        let registry = StyleRegistry::load(&cfg.style_dir, &dependent_dir)?;
        let store = StyleStore::new(&cfg.style_dir, &dependent_dir);
        Ok(Self::new(registry, store))
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Advance the request's identifier by at most one dependency hop.
    ///
    /// Independent names succeed without mutation. A dependent name with a
    /// memoized parent is a pure lookup; an unresolved one costs exactly one
    /// storage read, after which the parent is memoized for the process
    /// lifetime. Unknown names fail with `StyleNotFound`.
    pub async fn resolve_step(&self, request: &mut StyleRequest) -> Result<StepOutcome, StyleError> {
        let short_name = request.identifier.short_name.clone();

        if self.registry.is_independent(&short_name) {
            return Ok(StepOutcome::Independent);
        }

        match self.registry.dependent_state(&short_name) {
            Some(DependentState::ResolvedTo(parent)) => {
                tracing::debug!("dependent style {:?}: cached parent {:?}", short_name, parent);
                request.identifier = normalize(&parent)?;
                Ok(StepOutcome::Advanced)
            }
            Some(DependentState::Unresolved) => {
                let content = self.store.read_dependent(&short_name).await?;
                let parent = extract_parent_link(&content).ok_or_else(|| {
                    StyleError::DependentResolution {
                        short_name: short_name.clone(),
                        reason: "no independent-parent link in stylesheet".to_string(),
                    }
                })?;
                let parent_identifier = normalize(&parent)?;
                self.registry.record_parent(&short_name, &parent);
                tracing::debug!("dependent style {:?}: resolved parent {:?}", short_name, parent);
                request.identifier = parent_identifier;
                Ok(StepOutcome::Advanced)
            }
            None => Err(StyleError::StyleNotFound(short_name)),
        }
    }

    /// Resolve until an independent style is reached.
    ///
    /// Bounded by `MAX_RESOLVE_HOPS` with cycle detection over visited short
    /// names; either condition fails with `DependentResolution`.
    pub async fn resolve_fully(&self, request: &mut StyleRequest) -> Result<(), StyleError> {
        let start = request.identifier.short_name.clone();
        let mut seen = HashSet::new();
        seen.insert(start.clone());

        for _ in 0..MAX_RESOLVE_HOPS {
            match self.resolve_step(request).await? {
                StepOutcome::Independent => return Ok(()),
                StepOutcome::Advanced => {
                    if !seen.insert(request.identifier.short_name.clone()) {
                        return Err(StyleError::DependentResolution {
                            short_name: start,
                            reason: format!(
                                "dependency cycle via {:?}",
                                request.identifier.short_name
                            ),
                        });
                    }
                }
            }
        }

        Err(StyleError::DependentResolution {
            short_name: start,
            reason: format!("dependency chain exceeds {MAX_RESOLVE_HOPS} hops"),
        })
    }

    /// Return the raw stylesheet text for a resolved request.
    ///
    /// Priority: posted payload, then canonical-host independent styles from
    /// storage. A still-dependent name means the caller skipped resolution
    /// and is surfaced as `InternalFallthrough`; non-canonical hosts are
    /// refused with `UnsupportedSource`.
    pub async fn fetch(&self, request: &StyleRequest) -> Result<String, StyleError> {
        if let Some(payload) = &request.posted_style {
            return Ok(payload.clone());
        }

        let identifier = &request.identifier;
        let short_name = &identifier.short_name;

        if identifier.is_canonical_host() && self.registry.is_independent(short_name) {
            return self.store.read_independent(short_name).await;
        }
        if self.registry.dependent_state(short_name).is_some() {
            return Err(StyleError::InternalFallthrough {
                short_name: short_name.clone(),
            });
        }
        if !identifier.is_canonical_host() {
            return Err(StyleError::UnsupportedSource {
                host: identifier.host.clone(),
            });
        }
        Err(StyleError::StyleNotFound(short_name.clone()))
    }
}
