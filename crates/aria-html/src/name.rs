//! Accessible name
//!
//! Attribute-only text alternative. Resolvers only ask whether an
//! element is named, so content-derived names are not computed.

use aria_dom::Element;

use crate::input::InputType;

/// Compute the accessible name from attributes.
///
/// Order: `aria-labelledby`, `aria-label`, the element's native text
/// alternative (`alt` on `img`, `area`, `input type=image`), then `title`.
/// `aria-labelledby` ids cannot be dereferenced without a document, so
/// the id list itself stands in for the referenced text.
pub fn accessible_name(element: &impl Element) -> String {
    let mut candidates = vec!["aria-labelledby", "aria-label"];
    if has_native_alt(element) {
        candidates.push("alt");
    }
    candidates.push("title");

    candidates
        .into_iter()
        .filter_map(|name| element.attribute_str(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// Whether the element has a non-empty accessible name
pub fn has_accessible_name(element: &impl Element) -> bool {
    !accessible_name(element).is_empty()
}

fn has_native_alt(element: &impl Element) -> bool {
    element.is_tag("img")
        || element.is_tag("area")
        || (element.is_tag("input") && InputType::of(element) == InputType::Image)
}
