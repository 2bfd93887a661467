//! Extract route suggestions from free text.
//!
//! Generated text is expected to contain lines like
//! `1. DEL to GOI: Beaches after a busy week`. Each line that mentions two
//! three-letter codes joined by `to`, `-` or `→` becomes a suggestion.

use crate::domain::AirportCode;

use super::Suggestion;

/// Reason used when a line has no `:` explanation.
pub const DEFAULT_REASON: &str = "Interesting route!";

/// Maximum number of suggestions shown at once.
pub const MAX_SUGGESTIONS: usize = 3;

const SEPARATORS: [&str; 3] = ["to", "-", "→"];

/// Parse up to `limit` suggestions from generated text.
pub fn parse_suggestions(text: &str, limit: usize) -> Vec<Suggestion> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_line)
        .take(limit)
        .collect()
}

fn parse_line(line: &str) -> Option<Suggestion> {
    let (from, to) = find_pair(line)?;

    let reason = line
        .split(':')
        .nth(1)
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_REASON);

    Some(Suggestion {
        from,
        to,
        reason: reason.to_string(),
    })
}

/// Leftmost `CODE sep CODE` match in a line.
fn find_pair(line: &str) -> Option<(AirportCode, AirportCode)> {
    line.char_indices()
        .find_map(|(start, _)| match_pair_at(&line[start..]))
}

fn match_pair_at(s: &str) -> Option<(AirportCode, AirportCode)> {
    let (from, rest) = take_code(s)?;
    let rest = rest.trim_start();
    let rest = SEPARATORS
        .iter()
        .find_map(|sep| rest.strip_prefix(sep))?
        .trim_start();
    let (to, _) = take_code(rest)?;
    Some((from, to))
}

fn take_code(s: &str) -> Option<(AirportCode, &str)> {
    let head = s.get(..3)?;
    if !head.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    let code = AirportCode::parse(head).ok()?;
    Some((code, &s[3..]))
}
