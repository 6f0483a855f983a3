//! Suggestions for rejected input.

use strsim::jaro_winkler;

/// Minimum similarity for a candidate to be suggested (0.0-1.0).
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Find the candidate closest to `input`, if any is close enough.
///
/// Suggestions are advisory only; a suggested command is never executed on
/// the player's behalf.
pub fn suggest<'a, I>(input: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let input = input.trim().to_lowercase();
    let mut best: Option<(&str, f64)> = None;

    for candidate in candidates {
        let score = jaro_winkler(&input, candidate);
        if score < SUGGESTION_THRESHOLD {
            continue;
        }
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }

    best.map(|(candidate, _)| candidate.to_string())
}
