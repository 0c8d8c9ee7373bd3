//! Integration test: full pipeline over an on-disk style tree.
//!
//! Builds independent and dependent styles in a temp directory, loads the
//! registry snapshot, and drives the Normalize -> Resolve -> Fetch pipeline
//! end to end, including memoization and concurrent-request behavior.

mod common;

use common::style_tree::StyleTree;
use cslres_core::error::StyleError;
use cslres_core::pipeline;
use cslres_core::registry::DependentState;
use cslres_core::resolver::StyleRequest;
use std::sync::Arc;

#[tokio::test]
async fn dependent_style_resolves_to_parent_content() {
    let tree = StyleTree::new();
    tree.independent("mla", "the mla stylesheet body")
        .dependent("mla-variant", "mla");
    let resolver = tree.resolver();

    let mut request = StyleRequest::parse("mla-variant").unwrap();
    resolver.resolve_fully(&mut request).await.unwrap();
    assert_eq!(request.identifier.short_name, "mla");
    assert_eq!(
        request.identifier.url(),
        "http://www.zotero.org/styles/mla"
    );

    let content = resolver.fetch(&request).await.unwrap();
    assert_eq!(content, "the mla stylesheet body");
}

#[tokio::test]
async fn canonical_url_input_works_end_to_end() {
    let tree = StyleTree::new();
    tree.independent("apa", "apa body");
    let resolver = tree.resolver();

    let content = pipeline::run(&resolver, "http://www.zotero.org/styles/apa")
        .await
        .unwrap();
    assert_eq!(content, "apa body");
}

#[tokio::test]
async fn parent_url_form_in_dependent_style() {
    let tree = StyleTree::new();
    tree.independent("chicago-author-date", "chicago body").dependent(
        "chicago-variant",
        "http://www.zotero.org/styles/chicago-author-date",
    );
    let resolver = tree.resolver();

    let content = pipeline::run(&resolver, "chicago-variant").await.unwrap();
    assert_eq!(content, "chicago body");
}

#[tokio::test]
async fn resolution_memoizes_across_requests() {
    let tree = StyleTree::new();
    tree.independent("mla", "mla body").dependent("mla-variant", "mla");
    let resolver = tree.resolver();

    let first = pipeline::run(&resolver, "mla-variant").await.unwrap();
    assert_eq!(first, "mla body");
    assert_eq!(
        resolver.registry().dependent_state("mla-variant"),
        Some(DependentState::ResolvedTo("mla".to_string()))
    );

    // Remove the dependent file; the memoized mapping must carry the second
    // request with zero additional reads of it.
    std::fs::remove_file(tree.path().join("dependent/mla-variant.csl")).unwrap();
    let second = pipeline::run(&resolver, "mla-variant").await.unwrap();
    assert_eq!(second, "mla body");
}

#[tokio::test]
async fn concurrent_requests_share_the_registry() {
    let tree = StyleTree::new();
    tree.independent("mla", "mla body").dependent("mla-variant", "mla");
    let resolver = Arc::new(tree.resolver());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let resolver = Arc::clone(&resolver);
        handles.push(tokio::spawn(async move {
            pipeline::run(&resolver, "mla-variant").await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "mla body");
    }
    assert_eq!(
        resolver.registry().dependent_state("mla-variant"),
        Some(DependentState::ResolvedTo("mla".to_string()))
    );
}

#[tokio::test]
async fn multi_hop_chain_and_posted_override() {
    let tree = StyleTree::new();
    tree.independent("root", "root body")
        .dependent("middle", "root")
        .dependent("leaf", "middle");
    let resolver = tree.resolver();

    assert_eq!(pipeline::run(&resolver, "leaf").await.unwrap(), "root body");

    let mut request = StyleRequest::parse("leaf")
        .unwrap()
        .with_posted_style("posted body".to_string());
    let content = pipeline::resolve_and_fetch(&resolver, &mut request)
        .await
        .unwrap();
    assert_eq!(content, "posted body");
}

#[tokio::test]
async fn error_kinds_reach_the_caller_unchanged() {
    let tree = StyleTree::new();
    tree.dependent("orphanless", "ghost-parent");
    let resolver = tree.resolver();

    // Parent name is unknown to both tables.
    assert!(matches!(
        pipeline::run(&resolver, "orphanless").await,
        Err(StyleError::StyleNotFound(name)) if name == "ghost-parent"
    ));

    assert!(matches!(
        pipeline::run(&resolver, "http://www.zotero.org/oops").await,
        Err(StyleError::InvalidIdentifier { .. })
    ));
}
