pub mod build_record;

pub use build_record::BuildRecord;
