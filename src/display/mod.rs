//! Console rendering of query results. Everything here builds plain
//! strings; callers decide where they go.

pub mod report;
