//! `cslres fetch <style>` – resolve a style and print or save its text.

use anyhow::{Context, Result};
use cslres_core::pipeline;
use cslres_core::resolver::{StyleRequest, StyleResolver};
use std::path::Path;

pub async fn run_fetch(
    resolver: &StyleResolver,
    style: &str,
    post: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    let mut request = StyleRequest::parse(style)?;
    if let Some(path) = post {
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("read posted style file: {path}"))?;
        request = request.with_posted_style(payload);
    }

    let content = pipeline::resolve_and_fetch(resolver, &mut request).await?;

    match output {
        Some(path) => {
            std::fs::write(Path::new(path), &content)
                .with_context(|| format!("write stylesheet to {path}"))?;
            println!("Wrote {} bytes to {path}", content.len());
        }
        None => print!("{content}"),
    }

    Ok(())
}
