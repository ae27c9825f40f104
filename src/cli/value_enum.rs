// src/cli/value_enum.rs
use clap::ValueEnum;
use verstamp_core::Target;

/// CLI-facing artifact format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliTarget {
    Header,
    Rc,
    Rust,
    Json,
}

impl From<CliTarget> for Target {
    fn from(t: CliTarget) -> Self {
        match t {
            CliTarget::Header => Self::Header,
            CliTarget::Rc => Self::Rc,
            CliTarget::Rust => Self::Rust,
            CliTarget::Json => Self::Json,
        }
    }
}
