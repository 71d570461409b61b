use crate::core::{duration, extractor};
use crate::errors::{AppError, AppResult};
use crate::models::BuildRecord;

/// A timing line whose duration token could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedLine {
    /// 1-based line number in the input.
    pub line: usize,
    pub token: String,
}

/// Records collected from one scan, in input order, plus the lines left out.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub records: Vec<BuildRecord>,
    pub dropped: Vec<DroppedLine>,
}

pub struct Core;

impl Core {
    /// Extracts and normalizes every timing line.
    ///
    /// With `strict == false` a line carrying a malformed duration is dropped
    /// and the scan goes on; with `strict == true` the first one aborts the scan.
    pub fn scan_lines<I, S>(lines: I, strict: bool) -> AppResult<ScanOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = ScanOutcome::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let Some(m) = extractor::extract(line) else {
                continue;
            };

            match duration::normalize(m.time) {
                Ok(seconds) => outcome
                    .records
                    .push(BuildRecord::new(m.name, m.status, m.time, seconds)),
                Err(_) => {
                    if strict {
                        return Err(AppError::InvalidDurationOnLine {
                            line: idx + 1,
                            token: m.time.to_string(),
                        });
                    }
                    outcome.dropped.push(DroppedLine {
                        line: idx + 1,
                        token: m.time.to_string(),
                    });
                }
            }
        }

        Ok(outcome)
    }

    /// Longest build first; equal durations keep their input order.
    pub fn sort_records(records: &mut [BuildRecord]) {
        records.sort_by(|a, b| b.seconds.total_cmp(&a.seconds));
    }

    pub fn total_seconds(records: &[BuildRecord]) -> f64 {
        records.iter().map(|r| r.seconds).sum()
    }
}
