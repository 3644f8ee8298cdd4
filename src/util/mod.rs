//! Small shared helpers: durable token storage and display formatting.

pub mod format;
pub mod storage;
