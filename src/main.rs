//! rbuildtimes main entrypoint.

use rbuildtimes::errors::AppError;
use rbuildtimes::run;
use rbuildtimes::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        match e {
            AppError::Usage(usage) => eprint!("{usage}"),
            other => error(format!("Error: {other}")),
        }
        std::process::exit(1);
    }
}
