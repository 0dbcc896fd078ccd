use clap::Args;
use std::collections::HashSet;

use litpack_core::validate::check_identifier;
use litpack_core::{derive_identifier, Generator};

use crate::cmd::{escape_label, escape_style, Escape};
use crate::io;

#[derive(Args, Debug)]
pub struct PackArgs {
    /// Destination source file; overwritten unconditionally
    pub out: String,

    /// Prefix prepended to every derived identifier
    pub prefix: String,

    /// Input files, packed left to right
    pub inputs: Vec<String>,

    /// Hex escape style
    #[arg(long, value_enum, default_value_t = Escape::Padded)]
    pub escape: Escape,
}

pub fn run(args: PackArgs) -> anyhow::Result<()> {
    let mut gen = Generator::new(escape_style(args.escape));
    let mut seen: HashSet<String> = HashSet::new();
    let mut bytes_in = 0usize;

    // Every input is read (and encoded) before the output is touched, so
    // a missing input never truncates an existing output file.
    for path in &args.inputs {
        let data = io::read_input(path)?;
        let name = derive_identifier(&args.prefix, io::file_name(path)?);

        // Advisory only: the declaration is emitted either way.
        if let Err(e) = check_identifier(&name) {
            eprintln!("warning: {path}: {e}");
        }
        if !seen.insert(name.clone()) {
            eprintln!("warning: {path}: identifier {name:?} already emitted; keeping both");
        }

        bytes_in += data.len();
        gen.push_array(&name, &data);
    }

    let source = gen.into_source();
    io::write_source(&args.out, &source)?;

    eprintln!(
        "pack ok: inputs={} bytes_in={} source_bytes={} escape={} out={}",
        args.inputs.len(),
        bytes_in,
        source.len(),
        escape_label(args.escape),
        args.out
    );

    Ok(())
}
