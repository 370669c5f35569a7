//! Resolution context
//!
//! Per-call options and the ancestor classifications shared by the
//! resolvers. Both the role and the supported-roles resolver go through
//! [`TableContext::classify`], so they always agree on which bucket an
//! ancestor chain falls into.

use aria_dom::{Element, ElementDescriptor};

use crate::role::AriaRole;

/// Options for a single resolution call
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions<'a> {
    /// Ancestors, nearest first.
    ///
    /// `None` means the context is unknown; `Some(&[])` means the element
    /// is known to have no ancestors. The two resolve differently.
    pub ancestors: Option<&'a [ElementDescriptor]>,
}

impl<'a> ResolveOptions<'a> {
    /// Options with unknown ancestor context
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with a known ancestor chain (nearest first)
    pub fn with_ancestors(ancestors: &'a [ElementDescriptor]) -> Self {
        Self { ancestors: Some(ancestors) }
    }

    /// Nearest ancestor, if the context is known and non-empty
    pub fn parent(&self) -> Option<&'a ElementDescriptor> {
        self.ancestors.and_then(<[_]>::first)
    }

    /// Whether the nearest ancestor is the given tag
    pub fn parent_is(&self, tag_name: &str) -> bool {
        self.parent().is_some_and(|p| p.is_tag(tag_name))
    }
}

/// Split a space-separated attribute value into tokens
pub fn parse_token_list(value: &str) -> impl Iterator<Item = &str> {
    value.split_ascii_whitespace()
}

/// First token of the `role` attribute that names a known role
pub fn explicit_role(element: &impl Element) -> Option<AriaRole> {
    let value = element.attribute_str("role")?;
    parse_token_list(&value).find_map(AriaRole::parse)
}

/// Where a table part sits relative to its table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableContext {
    /// Ancestors were not supplied
    Unknown,
    /// Ancestors are known to be empty
    Detached,
    /// Ancestors were supplied but none is table-like; the chain may be partial
    Outside,
    /// Inside a `table` (or `role=table`)
    Table,
    /// Inside a `role=grid` or `role=treegrid`
    Grid,
}

impl TableContext {
    /// Classify by the nearest table-like ancestor
    pub fn classify(ancestors: Option<&[ElementDescriptor]>) -> Self {
        let Some(ancestors) = ancestors else {
            return Self::Unknown;
        };
        if ancestors.is_empty() {
            return Self::Detached;
        }
        let context = ancestors
            .iter()
            .find_map(|ancestor| match explicit_role(ancestor) {
                Some(AriaRole::Table) => Some(Self::Table),
                Some(role) if role.is_tabular() => Some(Self::Grid),
                _ if ancestor.is_tag("table") => Some(Self::Table),
                _ => None,
            })
            .unwrap_or(Self::Outside);
        tracing::trace!(?context, depth = ancestors.len(), "classified table context");
        context
    }
}

/// Tags that scope `header`/`footer` away from the page landmark.
/// `body` is included so the scan stops at the document level.
const LANDMARK_SCOPES: &[&str] = &[
    "article",
    "aside",
    "blockquote",
    "body",
    "details",
    "dialog",
    "fieldset",
    "figure",
    "main",
    "nav",
    "section",
    "td",
];

/// Whether a `header`/`footer` sits inside sectioning content or a
/// sectioning root other than `body`
pub fn in_sectioning_scope(ancestors: Option<&[ElementDescriptor]>) -> bool {
    let Some(ancestors) = ancestors else {
        return false;
    };
    let scope = ancestors.iter().find(|ancestor| {
        matches!(
            explicit_role(*ancestor),
            Some(
                AriaRole::Article
                    | AriaRole::Complementary
                    | AriaRole::Main
                    | AriaRole::Navigation
                    | AriaRole::Region
            )
        ) || LANDMARK_SCOPES.iter().any(|tag| ancestor.is_tag(tag))
    });
    scope.is_some_and(|s| !s.is_tag("body"))
}

/// Whether any ancestor is a list container (`ol`, `ul`, `menu`)
pub fn in_list(ancestors: &[ElementDescriptor]) -> bool {
    ancestors
        .iter()
        .any(|a| a.is_tag("ol") || a.is_tag("ul") || a.is_tag("menu"))
}
