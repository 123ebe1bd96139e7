//! ycm-flags CLI binary.

#![deny(missing_docs)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ycm_flags::cli::{self, Format};
use ycm_flags::error::FlagsError;
use ycm_flags::project::Project;

fn main() -> FlagsError<()> {
    let args = cli::Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let [file] = args.files.as_slice() else {
        let prog = std::env::args().next().unwrap_or_else(|| "ycm-flags".into());
        println!(
            "USAGE: {prog} <filename>, where filename is a file to get compilation flags for."
        );
        println!("Use `{prog} -- <filename>` when the name starts with '-'.");
        std::process::exit(1);
    };

    let mut project = match &args.root {
        Some(root) => Project::at(root)?,
        None => Project::locate(&std::env::current_dir()?)?,
    };
    if !args.include_dirs.is_empty() {
        project.set_include_dirs(args.include_dirs.clone());
    }

    let result = project.flags_for_file(file);
    match args.format {
        Format::Json => println!("{}", serde_json::to_string(&result)?),
        Format::Lines => {
            for flag in &result.flags {
                println!("{flag}");
            }
        }
    }
    Ok(())
}
