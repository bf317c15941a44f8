//! `phyllo` binary: opens a window and runs the spiral.
//!
//! ```text
//! phyllo [options.toml]            run, optionally with an options file
//! phyllo --print-schema            write the options JSON Schema to stdout
//! phyllo --write-options <path>    write the default options as TOML
//! ```
//!
//! Logging is controlled with `RUST_LOG`.

use std::io::Write;
use std::path::Path;

use phyllo::{options::Options, PhylloError, Viewer};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [flag] if flag == "--print-schema" => print_schema(),
        [flag, path] if flag == "--write-options" => {
            Options::default().save(Path::new(path)).map(|()| {
                log::info!("wrote default options to {path}");
            })
        }
        [path] => Options::load(Path::new(path)).and_then(|options| {
            log::info!("loaded options from {path}");
            run(options)
        }),
        [] => run(Options::default()),
        _ => Err(PhylloError::Viewer(
            "usage: phyllo [options.toml | --print-schema | --write-options <path>]"
                .into(),
        )),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(options: Options) -> Result<(), PhylloError> {
    Viewer::builder().with_options(options).build().run()
}

fn print_schema() -> Result<(), PhylloError> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| PhylloError::OptionsParse(e.to_string()))?;
    writeln!(std::io::stdout().lock(), "{schema}").map_err(PhylloError::Io)
}
