// crates/litpack-cli/src/io/mod.rs

use anyhow::Context;
use std::path::Path;

/// Byte-oriented input collaborator: the whole file, or a failure
/// naming the path.
pub fn read_input(path: &str) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read input: {path}"))
}

/// Write the generated source as UTF-8, overwriting unconditionally.
pub fn write_source(path: &str, source: &str) -> anyhow::Result<()> {
    std::fs::write(path, source.as_bytes()).with_context(|| format!("write: {path}"))
}

/// Final path component as UTF-8, for identifier derivation.
pub fn file_name(path: &str) -> anyhow::Result<&str> {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("no file name in path: {path}"))
}
