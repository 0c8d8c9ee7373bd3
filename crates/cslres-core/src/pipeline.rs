//! Request pipeline: Normalize -> Resolve -> Fetch.
//!
//! A strict sequence per request; `?` gives the first-failure-aborts
//! contract, so no later stage runs once one has failed. Steps of a single
//! request never overlap; concurrent requests share only the resolver.

use crate::error::StyleError;
use crate::resolver::{StyleRequest, StyleResolver};

/// Resolve a request to an independent style and fetch its text.
///
/// A posted payload short-circuits resolution entirely and is returned
/// verbatim by the fetch stage.
pub async fn resolve_and_fetch(
    resolver: &StyleResolver,
    request: &mut StyleRequest,
) -> Result<String, StyleError> {
    if request.posted_style.is_none() {
        resolver.resolve_fully(request).await?;
    }
    resolver.fetch(request).await
}

/// Full pipeline from a raw style reference to stylesheet text.
pub async fn run(resolver: &StyleResolver, raw: &str) -> Result<String, StyleError> {
    let mut request = StyleRequest::parse(raw)?;
    resolve_and_fetch(resolver, &mut request).await
}
