//! Command-line interface definitions for `struct-members-gen`.

use camino::Utf8PathBuf;
use clap::{ArgAction, Args as ClapArgs, Parser};
use tracing::level_filters::LevelFilter;

use struct_members_gen::config::{DEFAULT_MAX_ARITY, DEFAULT_OUTPUT};

/// Parsed CLI arguments for `struct-members-gen`.
#[derive(Debug, Parser)]
#[command(name = "struct-members-gen")]
#[command(about = "Generate the native component member registration header")]
#[command(version)]
pub struct Args {
    /// Destination header file.
    #[arg(
        long,
        short,
        value_name = "path",
        env = "STRUCT_MEMBERS_OUTPUT",
        default_value = DEFAULT_OUTPUT
    )]
    pub output: Utf8PathBuf,
    /// Highest member count to generate macros for.
    #[arg(
        long,
        value_name = "n",
        env = "STRUCT_MEMBERS_MAX_ARITY",
        default_value_t = DEFAULT_MAX_ARITY
    )]
    pub max_arity: u8,
    /// Fail if the header on disk differs from the generated text instead of
    /// writing it.
    #[arg(long = "check")]
    pub should_check: bool,
    /// Logging verbosity flags.
    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

/// Logging verbosity flags.
#[derive(Debug, ClapArgs, Clone, Copy)]
pub struct VerbosityArgs {
    /// Increase log output (repeat for more detail).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Only report errors.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub is_quiet: bool,
}

impl VerbosityArgs {
    /// Maximum level to log when `RUST_LOG` is unset.
    pub const fn level(self) -> LevelFilter {
        if self.is_quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_match_legacy_header() {
        let args = Args::try_parse_from(["struct-members-gen"]).expect("parse defaults");
        assert_eq!(args.max_arity, 16);
        assert_eq!(args.output, Utf8PathBuf::from("structMembers.h"));
        assert!(!args.should_check);
    }

    #[rstest]
    #[case(&["struct-members-gen"], LevelFilter::WARN)]
    #[case(&["struct-members-gen", "-v"], LevelFilter::INFO)]
    #[case(&["struct-members-gen", "-vv"], LevelFilter::DEBUG)]
    #[case(&["struct-members-gen", "-vvvv"], LevelFilter::TRACE)]
    #[case(&["struct-members-gen", "--quiet"], LevelFilter::ERROR)]
    fn verbosity_maps_to_level(#[case] argv: &[&str], #[case] expected: LevelFilter) {
        let args = Args::try_parse_from(argv.iter().copied()).expect("parse verbosity");
        assert_eq!(args.verbosity.level(), expected);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["struct-members-gen", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn max_arity_rejects_values_above_u8() {
        let result = Args::try_parse_from(["struct-members-gen", "--max-arity", "300"]);
        assert!(result.is_err());
    }
}
