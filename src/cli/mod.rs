// src/cli/mod.rs
pub mod args;
pub mod parsers;
pub mod value_enum;
