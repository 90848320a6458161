//! Application layer: turns filesystem input into domain trees

pub mod error;
pub mod scan;

pub use error::{ApplicationError, ApplicationResult};
pub use scan::{ScanOptions, TreeScanner};
