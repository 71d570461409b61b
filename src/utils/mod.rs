pub mod formatting;
pub mod table;

pub use formatting::{format_total, pad_right};
