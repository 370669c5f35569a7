//! html-aria
//!
//! ARIA in HTML role and attribute resolution.
//!
//! Features:
//! - Effective role of an element, including explicit `role` tokens,
//!   attribute-driven rules, and ancestor context
//! - Roles an element may legally declare
//! - ARIA attributes an element supports
//! - Attribute value validation for boolean and enumerated attributes
//! - Read-only tables of roles, attributes, and tags
//!
//! Everything is a pure function of the element descriptor, its
//! ancestors, and static tables, so it can be called from any thread.

#[macro_use]
mod keyword;

pub mod attribute;
pub mod context;
pub mod get_role;
pub mod input;
pub mod name;
pub mod role;
pub mod supported_attributes;
pub mod supported_roles;
pub mod tag;
pub mod validate;

// Core exports
pub use attribute::{AriaAttribute, AttributeKind, GLOBAL_ATTRIBUTES, NAMING_ATTRIBUTES};
pub use context::{ResolveOptions, TableContext};
pub use get_role::{get_role, is_role};
pub use input::InputType;
pub use name::{accessible_name, has_accessible_name};
pub use role::{AriaRole, NameFrom, RoleInfo};
pub use supported_attributes::{get_supported_attributes, is_supported_attribute};
pub use supported_roles::{get_supported_roles, is_supported_role};
pub use tag::{SupportedRoles, Tag, TagInfo};
pub use validate::{is_valid_attribute_value, is_valid_value};

pub use aria_dom::{AttributeValue, Element, ElementDescriptor};

/// html-aria error
#[derive(Debug, thiserror::Error)]
pub enum AriaError {
    #[error("Unknown ARIA attribute: {0}")]
    UnknownAttribute(String),

    #[error("Invalid ARIA role: {0}")]
    UnknownRole(String),

    #[error("Unknown HTML tag: {0}")]
    UnknownTag(String),
}

pub type Result<T> = std::result::Result<T, AriaError>;
