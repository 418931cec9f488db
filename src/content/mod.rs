/// Static Q&A records.
pub mod questions;
