//! Macro families emitted into the header.

use crate::placeholder::Arity;

/// Struct token the registration macros pass to the helper families.
pub const COMPONENT_TYPE: &str = "ComponentType";

/// Classes granted friendship by every registration macro.
pub const FRIEND_CLASSES: [&str; 2] = ["NativeComponent<ComponentType>", "AssetManager"];

/// One of the four generated macro families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroFamily {
    /// `STRUCT_MEMBER_TYPES_N`: reflected type of each member.
    Types,
    /// `STRUCT_MEMBER_OFFSETS_N`: byte offset of each member.
    Offsets,
    /// `STRUCT_MEMBER_NAMES_N`: caller-supplied member names.
    Names,
    /// `REGISTER_MEMBERS_N`: accessors and friendship grants for a component.
    Register,
}

impl MacroFamily {
    /// Emission order of the families within the header.
    pub const ORDER: [Self; 4] = [Self::Types, Self::Offsets, Self::Names, Self::Register];

    /// Macro name without the arity suffix.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Types => "STRUCT_MEMBER_TYPES",
            Self::Offsets => "STRUCT_MEMBER_OFFSETS",
            Self::Names => "STRUCT_MEMBER_NAMES",
            Self::Register => "REGISTER_MEMBERS",
        }
    }

    /// Full macro name for `arity`, for example `STRUCT_MEMBER_NAMES_3`.
    #[must_use]
    pub fn macro_name(self, arity: Arity) -> String {
        format!("{}_{arity}", self.prefix())
    }

    /// First parameter of the macro signature.
    #[must_use]
    pub const fn leading_parameter(self) -> &'static str {
        match self {
            Self::Register => "name",
            Self::Types | Self::Offsets | Self::Names => "Struct",
        }
    }

    /// The sequence-building family this is, or `None` for
    /// [`MacroFamily::Register`].
    #[must_use]
    pub const fn helper(self) -> Option<HelperFamily> {
        match self {
            Self::Types => Some(HelperFamily::Types),
            Self::Offsets => Some(HelperFamily::Offsets),
            Self::Names => Some(HelperFamily::Names),
            Self::Register => None,
        }
    }
}

/// A family that builds a `std::vector` of per-member entries and that
/// registration macros delegate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperFamily {
    /// Reflected member types.
    Types,
    /// Member byte offsets.
    Offsets,
    /// Member names.
    Names,
}

impl HelperFamily {
    /// Helper families in accessor order.
    pub const ALL: [Self; 3] = [Self::Types, Self::Offsets, Self::Names];

    /// The macro family this helper renders as.
    #[must_use]
    pub const fn family(self) -> MacroFamily {
        match self {
            Self::Types => MacroFamily::Types,
            Self::Offsets => MacroFamily::Offsets,
            Self::Names => MacroFamily::Names,
        }
    }

    /// Element type of the built `std::vector`.
    #[must_use]
    pub const fn sequence_type(self) -> &'static str {
        match self {
            Self::Types => "VirtualType::Type",
            Self::Offsets => "size_t",
            Self::Names => "std::string",
        }
    }

    /// Static accessor a registration macro defines for this family.
    #[must_use]
    pub const fn accessor(self) -> &'static str {
        match self {
            Self::Types => "getMemberTypes",
            Self::Offsets => "getMemberOffsets",
            Self::Names => "getMemberNames",
        }
    }

    /// Sequence entry for one member/name pair.
    #[must_use]
    pub fn sequence_entry(self, member: &str, name: &str) -> String {
        match self {
            Self::Types => format!("VirtualType::type<decltype(Struct::{member})>()"),
            Self::Offsets => format!("offsetof(Struct, Struct::{member})"),
            Self::Names => name.to_owned(),
        }
    }

    /// Full macro name for `arity`.
    #[must_use]
    pub fn macro_name(self, arity: Arity) -> String {
        self.family().macro_name(arity)
    }
}
