//! Shared helpers for `struct-members-gen` integration tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::error::Error;
use std::process::{Command, Output};

/// Resolves the compiled `struct-members-gen` binary path from test
/// environment variables.
///
/// # Errors
///
/// Returns an error when none of the supported cargo/nextest binary
/// environment variables are present.
pub(crate) fn struct_members_gen_exe() -> Result<Utf8PathBuf, Box<dyn Error>> {
    let env_vars = [
        "CARGO_BIN_EXE_struct-members-gen",
        "CARGO_BIN_EXE_struct_members_gen",
        "NEXTEST_BIN_EXE_struct-members-gen",
        "NEXTEST_BIN_EXE_struct_members_gen",
    ];
    for var in env_vars {
        if let Ok(path) = std::env::var(var) {
            return Ok(Utf8PathBuf::from(path));
        }
    }
    Err("struct-members-gen binary path not found in environment".into())
}

/// Runs the generator with `args` from `cwd`, clearing the generator's
/// environment overrides unless `envs` sets them.
pub(crate) fn run_generator(
    cwd: &Utf8Path,
    args: &[&str],
    envs: &[(&str, &str)],
) -> Result<Output, Box<dyn Error>> {
    let exe = struct_members_gen_exe()?;
    let mut command = Command::new(exe.as_str());
    command
        .current_dir(cwd.as_str())
        .env_remove("STRUCT_MEMBERS_OUTPUT")
        .env_remove("STRUCT_MEMBERS_MAX_ARITY")
        .env_remove("RUST_LOG")
        .args(args)
        .envs(envs.iter().copied());
    Ok(command.output()?)
}
