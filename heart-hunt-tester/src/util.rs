use anyhow::{Context, Result};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse a comma-separated seed list. Empty input falls back to `1337`.
pub fn parse_seeds(s: &str) -> Result<Vec<u64>> {
    let seeds = split_csv(s)
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed {token:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(if seeds.is_empty() { vec![1337] } else { seeds })
}
