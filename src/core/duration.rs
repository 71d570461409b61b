//! Duration token normalization.
//!
//! Build tools print elapsed times as `5.990 s`, `01:50 min` or `1.5 min`.
//! Every accepted form goes through one anchored pattern:
//!
//! ```text
//! token   := [minutes ":"] value WS* unit
//! minutes := digit+          (only with unit "min")
//! value   := digit+ ["." digit+]
//! unit    := "min" | "s"
//! ```

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<minutes>\d+):)?(?P<value>\d+(?:\.\d+)?)\s*(?P<unit>min|s)$")
        .expect("duration pattern is valid")
});

/// Converts a duration token into seconds.
///
/// The token is trimmed first. Anything not matching the grammar in full is
/// rejected with [`AppError::InvalidDuration`], including a `minutes:` prefix
/// combined with the `s` unit (`1:5.990 s`) and values that overflow `f64`.
pub fn normalize(token: &str) -> AppResult<f64> {
    let t = token.trim();
    let invalid = || AppError::InvalidDuration(token.to_string());

    let caps = DURATION_RE.captures(t).ok_or_else(invalid)?;

    let value: f64 = caps["value"].parse().map_err(|_| invalid())?;
    let minutes = caps.name("minutes").map(|m| m.as_str());

    let seconds = match (&caps["unit"], minutes) {
        ("s", None) => value,
        ("s", Some(_)) => return Err(invalid()),
        ("min", Some(m)) => {
            let m: f64 = m.parse().map_err(|_| invalid())?;
            m * 60.0 + value
        }
        ("min", None) => value * 60.0,
        _ => return Err(invalid()),
    };

    // digit runs too long for f64 parse to infinity
    if !seconds.is_finite() {
        return Err(invalid());
    }

    Ok(seconds)
}
