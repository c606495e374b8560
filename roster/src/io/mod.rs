//! Side-effecting helpers kept out of [`crate::core`].

pub mod config;
