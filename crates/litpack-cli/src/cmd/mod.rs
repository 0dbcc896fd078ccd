// crates/litpack-cli/src/cmd/mod.rs

pub mod analyze;
pub mod pack;

use clap::ValueEnum;
use litpack_core::EscapeStyle;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Escape {
    /// Two-digit hex escapes (\x00..\xff).
    Padded,
    /// Natural-width hex escapes (\x0..\xff), byte-for-byte with the classic packer.
    Compat,
}

pub fn escape_style(e: Escape) -> EscapeStyle {
    match e {
        Escape::Padded => EscapeStyle::Padded,
        Escape::Compat => EscapeStyle::Compat,
    }
}

pub fn escape_label(e: Escape) -> &'static str {
    match e {
        Escape::Padded => "padded",
        Escape::Compat => "compat",
    }
}
