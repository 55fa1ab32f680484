//! Shared helpers for the analytics engine

pub mod money;
