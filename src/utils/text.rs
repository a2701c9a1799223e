//! Text cleanup for scraped fragments.

use regex::Regex;
use std::sync::OnceLock;

static WS: OnceLock<Regex> = OnceLock::new();

/// Collapse internal whitespace runs to a single space and trim the ends.
/// Scraped card text often spans several indented source lines.
pub fn normalize_ws(s: &str) -> String {
    let re = WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    re.replace_all(s.trim(), " ").into_owned()
}
