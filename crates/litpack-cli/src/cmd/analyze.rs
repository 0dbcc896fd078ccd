use clap::Args;
use std::collections::HashSet;
use std::io::Cursor;

use litpack_core::derive_identifier;
use litpack_core::digest;
use litpack_core::escape::{escape_into, is_hex_escaped, is_plain};
use litpack_core::validate::check_identifier;

use crate::cmd::{escape_label, escape_style, Escape};
use crate::io;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input files to analyze; nothing is written
    pub inputs: Vec<String>,

    /// Hex escape style to project the literal body with
    #[arg(long, value_enum, default_value_t = Escape::Padded)]
    pub escape: Escape,

    /// Also derive identifiers with this prefix and flag illegal or colliding ones
    #[arg(long)]
    pub prefix: Option<String>,

    /// Also report zstd compressed size (as a real-world compressibility scoreboard)
    #[arg(long, default_value_t = true)]
    pub zstd: bool,

    /// Zstd compression level (1..=22 typical). Higher is slower.
    #[arg(long, default_value_t = 3)]
    pub zstd_level: i32,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let style = escape_style(args.escape);
    let mut seen: HashSet<String> = HashSet::new();

    for path in &args.inputs {
        let bytes = io::read_input(path)?;
        let n = bytes.len();

        let mut body = String::new();
        escape_into(style, &bytes, &mut body);

        let (plain, newline, hex) = class_counts(&bytes);
        let expansion = if n == 0 {
            0.0
        } else {
            (body.len() as f64) / (n as f64)
        };

        eprintln!("--- analyze {} ---", path);
        eprintln!("escape          = {}", escape_label(args.escape));
        eprintln!("bytes           = {}", n);
        eprintln!("body_chars      = {}", body.len());
        eprintln!("expansion       = {:.4}x", expansion);
        eprintln!("plain           = {}", plain);
        eprintln!("newline_escapes = {}", newline);
        eprintln!("hex_escapes     = {}", hex);
        eprintln!("ambiguity_sites = {}", ambiguity_sites(&bytes));
        eprintln!("crc32           = 0x{:08x}", digest::crc32(&bytes));
        eprintln!("blake3_16       = {}", digest::short_id(&bytes));

        if args.zstd {
            let z = zstd_size(&bytes, args.zstd_level)?;
            let ratio = if z == 0 { 0.0 } else { (n as f64) / (z as f64) };
            eprintln!("zstd_level      = {}", args.zstd_level);
            eprintln!("zstd_bytes      = {}", z);
            eprintln!("ratio_raw/zstd  = {:.4}x", ratio);
        }

        if let Some(prefix) = args.prefix.as_deref() {
            let name = derive_identifier(prefix, io::file_name(path)?);
            match check_identifier(&name) {
                Ok(()) => eprintln!("identifier      = {}", name),
                Err(e) => eprintln!("identifier      = {} (warning: {})", name, e),
            }
            if !seen.insert(name) {
                eprintln!("warning: identifier collides with an earlier input");
            }
        }
    }

    Ok(())
}

fn class_counts(bytes: &[u8]) -> (usize, usize, usize) {
    let mut plain = 0usize;
    let mut newline = 0usize;
    let mut hex = 0usize;
    for &b in bytes {
        if is_plain(b) {
            plain += 1;
        } else if b == b'\n' {
            newline += 1;
        } else {
            hex += 1;
        }
    }
    (plain, newline, hex)
}

/// Positions where a hex-escaped byte is immediately followed by a byte
/// that renders as a literal hex digit. A greedy \x lexer keeps consuming
/// there and reads a different byte than intended.
fn ambiguity_sites(bytes: &[u8]) -> usize {
    bytes
        .windows(2)
        .filter(|w| is_hex_escaped(w[0]) && w[1].is_ascii_hexdigit())
        .count()
}

fn zstd_size(bytes: &[u8], level: i32) -> anyhow::Result<usize> {
    // Deterministic given bytes+level; good enough for a scoreboard.
    let out = zstd::stream::encode_all(Cursor::new(bytes), level)?;
    Ok(out.len())
}
