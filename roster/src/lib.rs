//! In-memory activity roster for the Mergington extracurricular programme.
//!
//! The crate keeps the same split the server relies on:
//!
//! - **[`core`]**: Pure, deterministic logic (activity types, the shared
//!   registry, catalog invariants). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting helpers (configuration and catalog files).
//!
//! The HTTP surface lives in the `roster-server` binary, which owns one
//! [`core::registry::ActivityRegistry`] for the process lifetime.

pub mod core;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
