//! `cslres resolve <style>` – resolve an identifier to its independent style.

use anyhow::Result;
use cslres_core::resolver::{StepOutcome, StyleRequest, StyleResolver};

pub async fn run_resolve(resolver: &StyleResolver, style: &str, step: bool) -> Result<()> {
    let mut request = StyleRequest::parse(style)?;

    if step {
        let outcome = resolver.resolve_step(&mut request).await?;
        match outcome {
            StepOutcome::Independent => {
                println!("independent: {}", request.identifier);
            }
            StepOutcome::Advanced => {
                println!("advanced to: {}", request.identifier);
            }
        }
    } else {
        resolver.resolve_fully(&mut request).await?;
        println!("{}", request.identifier);
    }

    Ok(())
}
