//! File I/O around the numerical core: lenient CSV loading and CSV
//! export of query results.

pub mod export;
pub mod loader;
