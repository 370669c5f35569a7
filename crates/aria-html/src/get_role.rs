//! Role resolution
//!
//! Computes the single effective role of an element.

use aria_dom::Element;

use crate::context::{explicit_role, in_list, in_sectioning_scope, ResolveOptions, TableContext};
use crate::input::{has_suggestions, InputType};
use crate::name::has_accessible_name;
use crate::role::AriaRole;
use crate::tag::Tag;

/// Effective role of an element.
///
/// An explicit `role` attribute wins outright: the first token naming a
/// known role is returned even where ARIA in HTML would not allow it.
/// Otherwise the tag's implicit role applies, refined by attributes and
/// ancestor context. `None` means the element has no corresponding role.
pub fn get_role(element: &impl Element, options: &ResolveOptions<'_>) -> Option<AriaRole> {
    if let Some(role) = explicit_role(element) {
        tracing::trace!(tag = element.tag_name(), %role, "explicit role");
        return Some(role);
    }
    let Some(tag) = Tag::parse(element.tag_name()) else {
        tracing::trace!(tag = element.tag_name(), "unknown tag");
        return None;
    };
    implicit_role(tag, element, options)
}

/// Whether the element's effective role is `role`
pub fn is_role(element: &impl Element, role: AriaRole, options: &ResolveOptions<'_>) -> bool {
    get_role(element, options) == Some(role)
}

/// Implicit role of a known tag, ignoring any `role` attribute
pub(crate) fn implicit_role(
    tag: Tag,
    element: &impl Element,
    options: &ResolveOptions<'_>,
) -> Option<AriaRole> {
    let default_role = tag.info().default_role;
    match tag {
        Tag::A | Tag::Area => {
            if element.has_attribute("href") {
                default_role
            } else {
                Some(AriaRole::Generic)
            }
        }
        Tag::Header | Tag::Footer => {
            if in_sectioning_scope(options.ancestors) {
                Some(AriaRole::Generic)
            } else {
                default_role
            }
        }
        Tag::Img => {
            if has_accessible_name(element) {
                Some(AriaRole::Img)
            } else {
                Some(AriaRole::None)
            }
        }
        Tag::Input => input_role(element),
        Tag::Li => match options.ancestors {
            Some(ancestors) if !in_list(ancestors) => Some(AriaRole::Generic),
            _ => default_role,
        },
        Tag::Section => {
            if has_accessible_name(element) {
                default_role
            } else {
                Some(AriaRole::Generic)
            }
        }
        Tag::Select => {
            if is_listbox_select(element) {
                Some(AriaRole::Listbox)
            } else {
                default_role
            }
        }
        Tag::Td => match TableContext::classify(options.ancestors) {
            TableContext::Table => Some(AriaRole::Cell),
            TableContext::Grid => Some(AriaRole::GridCell),
            TableContext::Detached => None,
            TableContext::Outside | TableContext::Unknown => default_role,
        },
        Tag::Th => th_role(element, TableContext::classify(options.ancestors)),
        Tag::Tr => match TableContext::classify(options.ancestors) {
            TableContext::Detached => None,
            TableContext::Table
            | TableContext::Grid
            | TableContext::Outside
            | TableContext::Unknown => default_role,
        },

        Tag::Abbr
        | Tag::Address
        | Tag::Article
        | Tag::Aside
        | Tag::Audio
        | Tag::B
        | Tag::Base
        | Tag::Bdi
        | Tag::Bdo
        | Tag::Blockquote
        | Tag::Body
        | Tag::Br
        | Tag::Button
        | Tag::Canvas
        | Tag::Caption
        | Tag::Cite
        | Tag::Code
        | Tag::Col
        | Tag::Colgroup
        | Tag::Data
        | Tag::Datalist
        | Tag::Dd
        | Tag::Del
        | Tag::Details
        | Tag::Dfn
        | Tag::Dialog
        | Tag::Div
        | Tag::Dl
        | Tag::Dt
        | Tag::Em
        | Tag::Embed
        | Tag::Fieldset
        | Tag::Figcaption
        | Tag::Figure
        | Tag::Form
        | Tag::H1
        | Tag::H2
        | Tag::H3
        | Tag::H4
        | Tag::H5
        | Tag::H6
        | Tag::Head
        | Tag::Hgroup
        | Tag::Hr
        | Tag::Html
        | Tag::I
        | Tag::Iframe
        | Tag::Ins
        | Tag::Kbd
        | Tag::Label
        | Tag::Legend
        | Tag::Link
        | Tag::Main
        | Tag::Map
        | Tag::Mark
        | Tag::Math
        | Tag::Menu
        | Tag::Meta
        | Tag::Meter
        | Tag::Nav
        | Tag::Noscript
        | Tag::Object
        | Tag::Ol
        | Tag::Optgroup
        | Tag::Option
        | Tag::Output
        | Tag::P
        | Tag::Param
        | Tag::Picture
        | Tag::Pre
        | Tag::Progress
        | Tag::Q
        | Tag::Rp
        | Tag::Rt
        | Tag::Ruby
        | Tag::S
        | Tag::Samp
        | Tag::Script
        | Tag::Search
        | Tag::Slot
        | Tag::Small
        | Tag::Source
        | Tag::Span
        | Tag::Strong
        | Tag::Style
        | Tag::Sub
        | Tag::Summary
        | Tag::Sup
        | Tag::Svg
        | Tag::Table
        | Tag::Tbody
        | Tag::Template
        | Tag::Textarea
        | Tag::Tfoot
        | Tag::Thead
        | Tag::Time
        | Tag::Title
        | Tag::Track
        | Tag::U
        | Tag::Ul
        | Tag::Var
        | Tag::Video
        | Tag::Wbr => default_role,
    }
}

fn input_role(element: &impl Element) -> Option<AriaRole> {
    let input_type = InputType::of(element);
    if has_suggestions(element, input_type) {
        return Some(AriaRole::Combobox);
    }
    input_type.role()
}

/// `select` renders as a listbox when it shows several options at once
pub(crate) fn is_listbox_select(element: &impl Element) -> bool {
    element.has_attribute("multiple")
        || element
            .attribute("size")
            .filter(|v| v.is_present())
            .and_then(|v| v.as_integer())
            .is_some_and(|size| size > 1)
}

fn th_role(element: &impl Element, context: TableContext) -> Option<AriaRole> {
    let scope = element
        .attribute_str("scope")
        .map(|s| s.trim().to_ascii_lowercase());
    let scoped = match scope.as_deref() {
        Some("row" | "rowgroup") => Some(AriaRole::RowHeader),
        Some("col" | "colgroup") => Some(AriaRole::ColumnHeader),
        _ => None,
    };
    match context {
        TableContext::Detached => None,
        TableContext::Grid => scoped.or(Some(AriaRole::GridCell)),
        TableContext::Table | TableContext::Outside | TableContext::Unknown => {
            scoped.or(Some(AriaRole::ColumnHeader))
        }
    }
}
