//! Generator configuration.

use camino::Utf8PathBuf;

use crate::placeholder::Arity;

/// Highest member count generated when none is configured.
pub const DEFAULT_MAX_ARITY: u8 = 16;

/// Header file name expected by the component sources.
pub const DEFAULT_OUTPUT: &str = "structMembers.h";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Highest member count a generated macro variant accepts.
    pub max_arity: Arity,
    /// Destination header path.
    pub output: Utf8PathBuf,
}

impl GeneratorConfig {
    /// Creates a configuration writing `max_arity` macros to `output`.
    #[must_use]
    pub const fn new(output: Utf8PathBuf, max_arity: Arity) -> Self {
        Self { max_arity, output }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_arity: Arity::new(DEFAULT_MAX_ARITY),
            output: Utf8PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
