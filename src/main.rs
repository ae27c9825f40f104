// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

mod app;
mod cli;
mod config;
mod presentation;
mod version;

pub(crate) use version::VERSION;

fn main() -> ExitCode {
    match app::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
