//! Shared utilities

pub mod encode;
