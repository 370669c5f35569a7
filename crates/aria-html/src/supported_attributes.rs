//! Supported attributes
//!
//! ARIA attributes usable on an element, derived from its resolved role
//! and adjusted per tag.

use std::collections::BTreeSet;

use aria_dom::Element;

use crate::attribute::{AriaAttribute, GLOBAL_ATTRIBUTES};
use crate::context::{explicit_role, ResolveOptions};
use crate::get_role::get_role;
use crate::input::InputType;
use crate::name::has_accessible_name;
use crate::role::{AriaRole, NameFrom};
use crate::tag::{Tag, TagInfo};

/// ARIA attributes the element supports, sorted by name
pub fn get_supported_attributes(
    element: &impl Element,
    options: &ResolveOptions<'_>,
) -> BTreeSet<AriaAttribute> {
    let tag = Tag::parse(element.tag_name());
    let tag_info = tag.map(Tag::info);

    if let Some(attributes) = tag_info.and_then(|info| info.attribute_override) {
        tracing::trace!(tag = element.tag_name(), "attribute override");
        return attributes.iter().copied().collect();
    }

    let role = get_role(element, options);
    let role_attributes = role.map(|r| r.info().supported());

    let attributes = match tag {
        Some(Tag::Audio | Tag::Video) => AriaRole::Application.info().supported(),
        Some(Tag::Img) => match role_attributes {
            Some(set) if has_accessible_name(element) && !set.is_empty() => set,
            _ => BTreeSet::from([AriaAttribute::Hidden]),
        },
        Some(Tag::Input) => input_attributes(element, role_attributes),
        Some(Tag::Summary) => {
            let mut set = role_attributes.unwrap_or_else(global_attributes);
            set.extend([AriaAttribute::Disabled, AriaAttribute::HasPopup]);
            set
        }
        _ => role_attributes.unwrap_or_else(global_attributes),
    };

    if explicit_role(element).is_some() {
        return attributes;
    }
    filter_naming(attributes, role, tag_info)
}

/// Whether the element supports `attribute`
pub fn is_supported_attribute(
    element: &impl Element,
    attribute: AriaAttribute,
    options: &ResolveOptions<'_>,
) -> bool {
    get_supported_attributes(element, options).contains(&attribute)
}

fn global_attributes() -> BTreeSet<AriaAttribute> {
    GLOBAL_ATTRIBUTES.iter().copied().collect()
}

fn input_attributes(
    element: &impl Element,
    role_attributes: Option<BTreeSet<AriaAttribute>>,
) -> BTreeSet<AriaAttribute> {
    match InputType::of(element) {
        InputType::Checkbox | InputType::Radio => {
            // native checked state makes aria-checked redundant
            let mut set = role_attributes.unwrap_or_default();
            set.remove(&AriaAttribute::Checked);
            set
        }
        InputType::Color => {
            let mut set = global_attributes();
            set.insert(AriaAttribute::Disabled);
            set
        }
        InputType::File => {
            let mut set = global_attributes();
            set.extend([
                AriaAttribute::Disabled,
                AriaAttribute::Invalid,
                AriaAttribute::Required,
            ]);
            set
        }
        InputType::Hidden => BTreeSet::new(),
        _ => role_attributes.unwrap_or_else(|| AriaRole::TextBox.info().supported()),
    }
}

/// Drop naming attributes where naming is prohibited, and anything the
/// role prohibits. Applying it twice gives the same set.
pub(crate) fn filter_naming(
    mut attributes: BTreeSet<AriaAttribute>,
    role: Option<AriaRole>,
    tag_info: Option<TagInfo>,
) -> BTreeSet<AriaAttribute> {
    let role_info = role.map(AriaRole::info);
    let naming_prohibited = role_info.is_some_and(|info| info.name_from == NameFrom::Prohibited)
        || tag_info.is_some_and(|info| info.naming_prohibited);

    if naming_prohibited {
        attributes.retain(|a| !a.is_naming());
    }
    if let Some(info) = role_info {
        attributes.retain(|a| !info.prohibited.contains(a));
    }
    attributes
}
