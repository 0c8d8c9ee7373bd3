//! Style identifier normalization.
//!
//! Turns a raw style reference (short name or URL) into a canonical
//! `StyleIdentifier`. Pure string work, no I/O.

use crate::error::StyleError;

/// Host that canonically serves CSL styles.
pub const CANONICAL_STYLE_HOST: &str = "www.zotero.org";

/// Path prefix under which the canonical host serves styles.
pub const STYLE_PATH_PREFIX: &str = "/styles/";

/// Structured form of a style reference.
///
/// Immutable once constructed; a resolution step replaces a request's
/// identifier with a freshly normalized one rather than editing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleIdentifier {
    pub host: String,
    pub path: String,
    /// Filename-derived identifier, stable within a registry snapshot.
    pub short_name: String,
}

impl StyleIdentifier {
    /// True if this identifier points at the canonical style host.
    pub fn is_canonical_host(&self) -> bool {
        self.host == CANONICAL_STYLE_HOST
    }

    /// Canonical URL form, `http://<host><path>`.
    pub fn url(&self) -> String {
        format!("http://{}{}", self.host, self.path)
    }
}

impl std::fmt::Display for StyleIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url())
    }
}

/// Normalizes a raw style reference into a `StyleIdentifier`.
///
/// A bare short name becomes `http://www.zotero.org/styles/<name>`. A URL on
/// the canonical host must carry the `/styles/` prefix or it is rejected.
pub fn normalize(input: &str) -> Result<StyleIdentifier, StyleError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(StyleError::InvalidIdentifier {
            input: input.to_string(),
            reason: "empty identifier".to_string(),
        });
    }

    let parsed = url::Url::parse(input)
        .ok()
        .filter(|u| u.host_str().is_some());

    let url = match parsed {
        // Not a URL with a host: the whole input is a short name.
        None => {
            return Ok(StyleIdentifier {
                host: CANONICAL_STYLE_HOST.to_string(),
                path: format!("{STYLE_PATH_PREFIX}{input}"),
                short_name: input.to_string(),
            });
        }
        Some(u) => u,
    };

    let host = url.host_str().unwrap_or_default().to_string();
    let path = url.path().to_string();

    if host == CANONICAL_STYLE_HOST {
        match path.strip_prefix(STYLE_PATH_PREFIX) {
            Some(rest) if !rest.is_empty() => {
                let short_name = rest.to_string();
                Ok(StyleIdentifier {
                    host,
                    path,
                    short_name,
                })
            }
            _ => Err(StyleError::InvalidIdentifier {
                input: input.to_string(),
                reason: format!("canonical-host path {path:?} lacks the {STYLE_PATH_PREFIX:?} prefix"),
            }),
        }
    } else {
        // Foreign hosts get the same prefix heuristic on a best-effort basis.
        // The short name derived here is not authoritative; fetching from such
        // hosts is refused later with UnsupportedSource.
        let short_name = path
            .strip_prefix(STYLE_PATH_PREFIX)
            .unwrap_or_else(|| path.trim_start_matches('/'))
            .to_string();
        Ok(StyleIdentifier {
            host,
            path,
            short_name,
        })
    }
}
