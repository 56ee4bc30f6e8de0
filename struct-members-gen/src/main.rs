//! CLI entrypoint for `struct-members-gen`.

mod cli;

use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use struct_members_gen::placeholder::Arity;
use struct_members_gen::{Artifact, GeneratorConfig, GeneratorError, output};

use crate::cli::Args;

fn main() -> Result<(), GeneratorError> {
    run()
}

fn run() -> Result<(), GeneratorError> {
    let args = Args::parse();
    init_tracing(args.verbosity.level());

    let config = GeneratorConfig::new(args.output, Arity::new(args.max_arity));
    let artifact = Artifact::generate(config.max_arity);

    if args.should_check {
        output::check_artifact(&config.output, &artifact)?;
        info!(path = %config.output, "struct members header is current");
    } else {
        output::write_artifact(&config.output, &artifact)?;
    }
    Ok(())
}

fn init_tracing(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
