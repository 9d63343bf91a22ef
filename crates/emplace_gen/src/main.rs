//! Emplace constructor generator CLI.
//!
//! Prints the generated constructors to stdout; a build step redirects the
//! output into a source file. Takes no arguments.

use std::io;
use std::process::ExitCode;

use emplace_gen::{GenConfig, GenError, GenSummary, WriterEmitter};

fn main() -> ExitCode {
    emplace_gen::init_tracing();

    if std::env::args().len() > 1 {
        print_usage();
        return ExitCode::from(2);
    }

    match run() {
        Ok(summary) => {
            tracing::info!(total = summary.total(), "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<GenSummary, GenError> {
    let config = GenConfig::default();
    let mut emitter = WriterEmitter::new(io::stdout().lock());
    let summary = emplace_gen::generate(&config, &mut emitter)?;
    emitter.finish()?;
    Ok(summary)
}

fn print_usage() {
    eprintln!("Usage: emplace-gen > constructors.rs");
    eprintln!();
    eprintln!("Writes the generated in-place constructors to stdout.");
    eprintln!("Set RUST_LOG=emplace_gen=debug for generation logs on stderr.");
}
