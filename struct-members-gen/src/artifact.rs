//! The complete generated header.

use std::fmt;

use crate::definition::{
    MacroDefinition, generate_name_macros, generate_offset_macros, generate_registration_macros,
    generate_type_macros,
};
use crate::placeholder::Arity;

/// Comment banner written at the top of every generated header.
pub const BANNER: &str = "// This file was auto generated by struct-members-gen,\n\
// when making changes to this file, please do it through that tool to preserve them\n\n";

/// Ordered macro definitions making up one header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    definitions: Vec<MacroDefinition>,
}

impl Artifact {
    /// Generates every family up to `max_arity`.
    ///
    /// Families appear in [`crate::MacroFamily::ORDER`], each in ascending
    /// arity, with `REGISTER_MEMBERS_0` last.
    #[must_use]
    pub fn generate(max_arity: Arity) -> Self {
        let mut definitions = generate_type_macros(max_arity);
        definitions.extend(generate_offset_macros(max_arity));
        definitions.extend(generate_name_macros(max_arity));
        definitions.extend(generate_registration_macros(max_arity));
        Self { definitions }
    }

    /// Definitions in emission order.
    #[must_use]
    pub fn definitions(&self) -> &[MacroDefinition] {
        &self.definitions
    }

    /// Renders the banner followed by every definition.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BANNER)?;
        for definition in &self.definitions {
            write!(f, "{definition}")?;
        }
        Ok(())
    }
}
