pub mod json;

pub use json::{LearnerSnapshot, export_snapshot_to_path, import_snapshot};
