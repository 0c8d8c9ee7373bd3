//! `cslres list` – show the registry snapshot.

use anyhow::Result;
use cslres_core::registry::DependentState;
use cslres_core::resolver::StyleResolver;

pub fn run_list(resolver: &StyleResolver) -> Result<()> {
    let registry = resolver.registry();
    if registry.independent_count() == 0 && registry.dependent_count() == 0 {
        println!("No styles in registry.");
        return Ok(());
    }

    println!("{:<40} {:<12} {}", "NAME", "KIND", "PARENT");
    for name in registry.independent_names() {
        println!("{name:<40} {:<12} -", "independent");
    }
    for (name, state) in registry.dependent_entries() {
        let parent = match state {
            DependentState::Unresolved => "(unresolved)".to_string(),
            DependentState::ResolvedTo(parent) => parent,
        };
        println!("{name:<40} {:<12} {parent}", "dependent");
    }
    Ok(())
}
