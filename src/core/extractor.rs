//! Recognizes Maven reactor summary lines:
//! `[INFO] <module> ....... <STATUS> [<time>]`.

use regex::Regex;
use std::sync::LazyLock;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[INFO\]\s+(?P<name>.+?)\s+\.{3,}\s+(?P<status>\S+)\s+\[\s*(?P<time>[^\[\]]*?)\s*\]$",
    )
    .expect("summary line pattern is valid")
});

/// Fields captured from one timing line, borrowed from the line itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch<'a> {
    pub name: &'a str,
    pub status: &'a str,
    pub time: &'a str,
}

/// Returns the module/status/time triple, or `None` for ordinary log noise.
///
/// The time token is returned without the padding inside the brackets and is
/// otherwise untouched; it is not validated here. A module name cannot
/// contain three consecutive dots.
pub fn extract(line: &str) -> Option<LineMatch<'_>> {
    let caps = LINE_RE.captures(line.trim())?;
    let name = caps.name("name")?.as_str();

    // the name ends at the first dot-fill run; the lazy match is the shortest
    // candidate, so a dot run inside it means the line has two fills
    if name.contains("...") {
        return None;
    }

    Some(LineMatch {
        name,
        status: caps.name("status")?.as_str(),
        time: caps.name("time")?.as_str(),
    })
}
