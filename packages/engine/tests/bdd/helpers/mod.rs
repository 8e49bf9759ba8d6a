//! Shared helpers for the step definitions

pub mod options_table;
