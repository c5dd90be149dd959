//! Integration tests for okpick crates.
//!
//! End-to-end checks across the conversion crates, the registry and the
//! render worker.

#[cfg(test)]
mod golden;
