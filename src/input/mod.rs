//! Input processing module
//! Loads candidate and posting records from disk and validates them

pub mod file_detector;
pub mod record_parser;
pub mod validation;
pub mod manager;

pub use manager::InputManager;
