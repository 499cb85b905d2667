//! Cleanup of passage text returned by the API.
//!
//! Passages may arrive with embedded markup even when plain text is
//! requested. The contract here: all `<...>` tags removed, whitespace runs
//! collapsed to single spaces, surrounding whitespace trimmed.

/// Strip markup and normalize whitespace
#[must_use]
pub fn clean_text(raw: &str) -> String {
    let stripped = strip_tags(raw);
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove `<...>` spans; a `<` with no closing `>` (or an empty `<>`) is
/// ordinary text and kept
fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find('>') {
            Some(1) => {
                out.push_str("<>");
                rest = &tail[2..];
            }
            Some(close) => {
                rest = &tail[close + 1..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
