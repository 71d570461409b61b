use serde::Serialize;

/// One module's outcome as reported in the reactor summary.
///
/// `raw_time` keeps the exact text found in the log; `seconds` is the
/// normalized value used for sorting and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildRecord {
    #[serde(rename = "module")]
    pub name: String,
    pub status: String,
    #[serde(rename = "time")]
    pub raw_time: String,
    pub seconds: f64,
}

impl BuildRecord {
    pub fn new(name: &str, status: &str, raw_time: &str, seconds: f64) -> Self {
        Self {
            name: name.to_string(),
            status: status.to_string(),
            raw_time: raw_time.to_string(),
            seconds,
        }
    }
}
