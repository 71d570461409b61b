//! Reads the build log line by line.

use crate::errors::{AppError, AppResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

fn unreadable(path: &Path, source: io::Error) -> AppError {
    AppError::FileUnreadable {
        path: path.display().to_string(),
        source,
    }
}

/// Loads all lines of `path`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, and a
/// trailing `\r` is removed so CRLF logs behave like LF ones.
pub fn read_lines(path: &Path) -> AppResult<Vec<String>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::FileNotFound(path.display().to_string()),
        _ => unreadable(path, e),
    })?;

    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| unreadable(path, e))?;
        if n == 0 {
            break;
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}
