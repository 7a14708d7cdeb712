use crate::domain::{HtmlFragment, RawPair};
use once_cell::sync::Lazy;
use regex::Regex;

// Anything inside one entry: whole JSON strings (which may contain braces or
// escaped quotes) or single characters other than braces and quotes.
const IN_ENTRY: &str = r#"(?:"(?:[^"\\]|\\.)*"|[^{}"])*?"#;

// One games list entry holding both `"appid":N` and `"playtime_forever":M`,
// in either order and with any other fields around them. Both keys have to
// sit in the same `{...}`, so an entry without a playtime is dropped rather
// than paired with its neighbour. The number delimiters keep `1.5` or
// `12abc` from matching. Nested objects inside an entry are not supported.
static GAMES_LIST_REGEX: Lazy<Regex> = Lazy::new(|| {
    let gap = IN_ENTRY;
    let app_id = r#""appid"\s*:\s*(\d+)"#;
    let playtime = r#""playtime_forever"\s*:\s*(\d+)"#;
    Regex::new(&format!(
        r#"(?s)\{{{gap}(?:{app_id}[,\s]{gap}{playtime}|{playtime}[,\s]{gap}{app_id})(?:[,}}\]\s]|$)"#
    ))
    .unwrap()
});

/// Every appid/playtime pair in the fragment, in document order.
///
/// The serializer writes the quotes of an attribute payload as `&quot;` and
/// those of a text payload as `"`; both are read as plain quotes.
pub fn extract_pairs(fragment: &HtmlFragment) -> Vec<RawPair> {
    let text = fragment.as_str().replace("&quot;", "\"");

    GAMES_LIST_REGEX
        .captures_iter(&text)
        .filter_map(|caps| {
            let (app_id, playtime) = match (caps.get(1), caps.get(2)) {
                (Some(app_id), Some(playtime)) => (app_id, playtime),
                _ => (caps.get(4)?, caps.get(3)?),
            };
            Some(RawPair::new(app_id.as_str(), playtime.as_str()))
        })
        .collect()
}
