//! Individual macro definitions and the per-family generators.
//!
//! Rendering reproduces the legacy header layout byte for byte: backslash
//! line continuations, tab indentation, and the blank lines between
//! definitions. Consumers diff and grep the generated header, so the layout
//! is treated as fixed.

use std::fmt;

use tracing::debug;

use crate::family::{COMPONENT_TYPE, FRIEND_CLASSES, HelperFamily, MacroFamily};
use crate::placeholder::{Arity, Placeholders};

/// A single `#define` in the generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDefinition {
    family: MacroFamily,
    arity: Arity,
    placeholders: Placeholders,
}

impl MacroDefinition {
    /// Builds the `family` macro for `arity` members.
    #[must_use]
    pub fn new(family: MacroFamily, arity: Arity) -> Self {
        Self {
            family,
            arity,
            placeholders: Placeholders::for_arity(arity),
        }
    }

    /// The `REGISTER_MEMBERS_0(name)` variant for components without
    /// reflected members.
    #[must_use]
    pub fn register_empty() -> Self {
        Self::new(MacroFamily::Register, Arity::ZERO)
    }

    /// Family this definition belongs to.
    #[must_use]
    pub const fn family(&self) -> MacroFamily {
        self.family
    }

    /// Number of member/name pairs the macro accepts.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Placeholders used in the signature and body.
    #[must_use]
    pub const fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Macro name, for example `REGISTER_MEMBERS_2`.
    #[must_use]
    pub fn name(&self) -> String {
        self.family.macro_name(self.arity)
    }

    /// Parenthesised parameter list, for example `(Struct, m0, n0)`.
    #[must_use]
    pub fn parameter_list(&self) -> String {
        let leading = self.family.leading_parameter();
        if self.placeholders.is_empty() {
            format!("({leading})")
        } else {
            format!("({leading}, {})", self.placeholders.argument_list())
        }
    }

    fn fmt_sequence(&self, f: &mut fmt::Formatter<'_>, helper: HelperFamily) -> fmt::Result {
        writeln!(f, "#define {}{} \\", self.name(), self.parameter_list())?;
        writeln!(f, "\tstd::move(std::vector<{}>(\\", helper.sequence_type())?;
        writeln!(f, "\t{{\\")?;
        for (member, name) in self.placeholders.pairs() {
            writeln!(f, "\t\t{}, \\", helper.sequence_entry(member, name))?;
        }
        f.write_str("\t}))\n\n\n")
    }

    fn fmt_registration(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#define {}{}\\", self.name(), self.parameter_list())?;
        for friend in FRIEND_CLASSES {
            writeln!(f, "\tfriend class {friend};\\")?;
        }

        let arguments = self.placeholders.argument_list();
        for helper in HelperFamily::ALL {
            writeln!(
                f,
                "\tstatic std::vector<{}> {}()\\",
                helper.sequence_type(),
                helper.accessor()
            )?;
            writeln!(f, "\t{{\\")?;
            if self.placeholders.is_empty() {
                writeln!(f, "\t\treturn {{}};\\")?;
            } else {
                writeln!(
                    f,
                    "\t\treturn {}({COMPONENT_TYPE}, {arguments});\\",
                    helper.macro_name(self.arity)
                )?;
            }
            writeln!(f, "\t}}\\")?;
        }

        writeln!(f, "\tstatic const char* getComponentName()\\")?;
        writeln!(f, "\t{{\\")?;
        writeln!(f, "\t    return name;\\")?;
        // The trailing tab is part of the legacy layout: the next definition
        // starts on the same physical line.
        f.write_str("\t}\n\t\n\t\n\t")
    }
}

impl fmt::Display for MacroDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.family.helper() {
            Some(helper) => self.fmt_sequence(f, helper),
            None => self.fmt_registration(f),
        }
    }
}

fn generate_family(family: MacroFamily, max_arity: Arity) -> Vec<MacroDefinition> {
    let definitions: Vec<_> = Arity::iter_up_to(max_arity)
        .map(|arity| MacroDefinition::new(family, arity))
        .collect();
    debug!(
        family = family.prefix(),
        count = definitions.len(),
        "generated macro family"
    );
    definitions
}

/// `STRUCT_MEMBER_TYPES_N` for every `N` in `1..=max_arity`.
#[must_use]
pub fn generate_type_macros(max_arity: Arity) -> Vec<MacroDefinition> {
    generate_family(MacroFamily::Types, max_arity)
}

/// `STRUCT_MEMBER_OFFSETS_N` for every `N` in `1..=max_arity`.
#[must_use]
pub fn generate_offset_macros(max_arity: Arity) -> Vec<MacroDefinition> {
    generate_family(MacroFamily::Offsets, max_arity)
}

/// `STRUCT_MEMBER_NAMES_N` for every `N` in `1..=max_arity`.
#[must_use]
pub fn generate_name_macros(max_arity: Arity) -> Vec<MacroDefinition> {
    generate_family(MacroFamily::Names, max_arity)
}

/// `REGISTER_MEMBERS_N` for every `N` in `1..=max_arity`, followed by
/// `REGISTER_MEMBERS_0`.
#[must_use]
pub fn generate_registration_macros(max_arity: Arity) -> Vec<MacroDefinition> {
    let mut definitions = generate_family(MacroFamily::Register, max_arity);
    definitions.push(MacroDefinition::register_empty());
    definitions
}
