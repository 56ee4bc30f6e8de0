//! Library interface for `struct-members-gen`.
//!
//! Generates the C++ preprocessor header that native ECS components include
//! to register their reflected members. For every member count up to a
//! configurable ceiling the header defines helper macros that collect member
//! types, offsets and names, plus a `REGISTER_MEMBERS_N` macro that wires those
//! helpers into static accessors on the component.

pub mod artifact;
pub mod config;
pub mod definition;
pub mod error;
pub mod family;
mod fs_helpers;
pub mod output;
pub mod placeholder;

pub use artifact::{Artifact, BANNER};
pub use config::GeneratorConfig;
pub use definition::{
    MacroDefinition, generate_name_macros, generate_offset_macros, generate_registration_macros,
    generate_type_macros,
};
pub use error::GeneratorError;
pub use family::{HelperFamily, MacroFamily};
pub use placeholder::{Arity, Placeholders};
