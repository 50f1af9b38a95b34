use anyhow::Context;
use nd_core::{Article, NewsResponse, Result};
use tokio::io::AsyncReadExt;

/// Reads `path`, or stdin when `path` is `-`.
pub async fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        return Ok(buf);
    }

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path))?;
    Ok(raw)
}

/// Accepts either a full retrieval-layer response or a bare array of articles.
pub fn parse_articles(raw: &str) -> Result<Vec<Article>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }
    serde_json::from_value::<NewsResponse>(value)?.into_articles()
}

pub async fn load_articles(path: &str) -> Result<Vec<Article>> {
    let raw = read_input(path).await?;
    parse_articles(&raw)
}
