pub mod duration;
pub mod extractor;
pub mod logic;
pub mod reader;

pub use logic::{Core, DroppedLine, ScanOutcome};
