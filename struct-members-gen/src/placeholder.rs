//! Positional placeholder naming for generated macro parameters.
//!
//! Member placeholders are spelt `m0, m1, …` and name placeholders
//! `n0, n1, …`. Hand-written component code invokes the generated macros
//! positionally, so these spellings and their interleaving are part of the
//! header's public shape.

use std::fmt;

const MEMBER_PREFIX: &str = "m";
const NAME_PREFIX: &str = "n";

/// Number of reflected members a generated macro variant accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arity(u8);

impl Arity {
    /// The registration variant that takes only a component name.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw member count.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw member count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterates over every non-zero arity up to and including `max`.
    pub fn iter_up_to(max: Self) -> impl Iterator<Item = Self> {
        (1..=max.0).map(Self)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered member and name placeholders for one arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    members: Vec<String>,
    names: Vec<String>,
}

impl Placeholders {
    /// Builds `arity` member/name placeholder pairs, numbered from zero.
    #[must_use]
    pub fn for_arity(arity: Arity) -> Self {
        let positions = 0..arity.get();
        Self {
            members: positions
                .clone()
                .map(|pos| format!("{MEMBER_PREFIX}{pos}"))
                .collect(),
            names: positions.map(|pos| format!("{NAME_PREFIX}{pos}")).collect(),
        }
    }

    /// Member placeholders in declaration order.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Name placeholders in declaration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether this is the zero-arity placeholder set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates `(member, name)` pairs by position.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.members
            .iter()
            .zip(&self.names)
            .map(|(member, name)| (member.as_str(), name.as_str()))
    }

    /// Renders the interleaved argument list `m0, n0, m1, n1, …`.
    ///
    /// Empty for the zero-arity set.
    #[must_use]
    pub fn argument_list(&self) -> String {
        self.pairs()
            .map(|(member, name)| format!("{member}, {name}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case(0, "")]
    #[case(1, "m0, n0")]
    #[case(2, "m0, n0, m1, n1")]
    #[case(3, "m0, n0, m1, n1, m2, n2")]
    fn argument_list_interleaves_pairs(#[case] arity: u8, #[case] expected: &str) {
        let placeholders = Placeholders::for_arity(Arity::new(arity));
        assert_eq!(placeholders.argument_list(), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(16)]
    fn placeholders_are_distinct_across_both_lists(#[case] arity: u8) {
        let placeholders = Placeholders::for_arity(Arity::new(arity));
        assert_eq!(placeholders.members().len(), usize::from(arity));
        assert_eq!(placeholders.names().len(), usize::from(arity));

        let unique: HashSet<&String> = placeholders
            .members()
            .iter()
            .chain(placeholders.names())
            .collect();
        assert_eq!(unique.len(), usize::from(arity) * 2);
    }

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    fn is_empty_only_for_zero_arity(#[case] arity: u8, #[case] expected: bool) {
        const fn usable_in_const_context(placeholders: &Placeholders) -> bool {
            placeholders.is_empty()
        }
        let placeholders = Placeholders::for_arity(Arity::new(arity));
        assert_eq!(usable_in_const_context(&placeholders), expected);
    }

    #[test]
    fn iter_up_to_skips_zero() {
        let arities: Vec<u8> = Arity::iter_up_to(Arity::new(3)).map(Arity::get).collect();
        assert_eq!(arities, vec![1, 2, 3]);
        assert_eq!(Arity::iter_up_to(Arity::ZERO).count(), 0);
    }
}
