use anyhow::{anyhow, Result};

use crate::model::week::DayLabel;

/// Expands `key` to the one candidate it names: an exact match, or a
/// unique case-insensitive prefix.
pub fn expand_key<'a>(key: &str, candidates: &[&'a str]) -> Result<&'a str> {
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("Empty key"));
    }

    if let Some(exact) = candidates.iter().copied().find(|c| *c == key) {
        return Ok(exact);
    }

    let lowered = key.to_lowercase();
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(&lowered))
        .copied()
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Resolves a roster name from a prefix.
pub fn resolve_person<'a>(input: &str, roster: &'a [String]) -> Result<&'a str> {
    let names: Vec<&str> = roster.iter().map(String::as_str).collect();
    expand_key(input, &names).map_err(|e| anyhow!("Person: {}", e))
}

/// Resolves a day as a 1-based number (1 = Monday) or a weekday-name prefix.
pub fn resolve_day(input: &str, days: &[DayLabel]) -> Result<usize> {
    if let Ok(n) = input.trim().parse::<usize>() {
        if n >= 1 && n <= days.len() {
            return Ok(n - 1);
        }
        return Err(anyhow!("Day number must be between 1 and {}", days.len()));
    }
    let names: Vec<&str> = days.iter().map(DayLabel::name).collect();
    let name = expand_key(input, &names).map_err(|e| anyhow!("Day: {}", e))?;
    names
        .iter()
        .position(|n| *n == name)
        .ok_or_else(|| anyhow!("Day: unknown '{}'", input))
}
