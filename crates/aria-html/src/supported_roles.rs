//! Supported roles
//!
//! Which roles an element may legally declare. This is a different
//! question from its default role: an `<a>` without `href` defaults to
//! `generic` but may take any role at all. Any `role` attribute present
//! on the element is ignored here.

use aria_dom::Element;

use crate::context::{ResolveOptions, TableContext};
use crate::get_role::is_listbox_select;
use crate::input::{has_suggestions, InputType};
use crate::name::has_accessible_name;
use crate::role::AriaRole as R;
use crate::role::AriaRole;
use crate::tag::{SupportedRoles, Tag};

use SupportedRoles::{All, NoRoles, Only};

/// Roles allowed on an `img` with an accessible name
const NAMED_IMG_ROLES: &[AriaRole] = &[
    R::Button,
    R::Checkbox,
    R::Image,
    R::Img,
    R::Link,
    R::Math,
    R::MenuItem,
    R::MenuItemCheckbox,
    R::MenuItemRadio,
    R::Meter,
    R::Option,
    R::ProgressBar,
    R::Radio,
    R::ScrollBar,
    R::Separator,
    R::Slider,
    R::Switch,
    R::Tab,
    R::TreeItem,
];

const INPUT_BUTTON_ROLES: &[AriaRole] = &[
    R::Button,
    R::Checkbox,
    R::Combobox,
    R::GridCell,
    R::Link,
    R::MenuItem,
    R::MenuItemCheckbox,
    R::MenuItemRadio,
    R::Option,
    R::Radio,
    R::Separator,
    R::Slider,
    R::Switch,
    R::Tab,
    R::TreeItem,
];
const INPUT_IMAGE_ROLES: &[AriaRole] = &[
    R::Button,
    R::Link,
    R::MenuItem,
    R::MenuItemCheckbox,
    R::MenuItemRadio,
    R::Radio,
    R::Switch,
];
const INPUT_CHECKBOX_ROLES: &[AriaRole] = &[
    R::Checkbox,
    R::Button,
    R::MenuItemCheckbox,
    R::Option,
    R::Switch,
];
const INPUT_TEXT_ROLES: &[AriaRole] = &[R::TextBox, R::Combobox, R::SearchBox, R::SpinButton];

/// Roles the element may declare.
///
/// Unknown tags support no roles.
pub fn get_supported_roles(element: &impl Element, options: &ResolveOptions<'_>) -> SupportedRoles {
    let Some(tag) = Tag::parse(element.tag_name()) else {
        tracing::trace!(tag = element.tag_name(), "unknown tag");
        return NoRoles;
    };
    let supported = tag.info().supported_roles;
    match tag {
        Tag::A | Tag::Area => {
            if element.has_attribute("href") {
                supported
            } else {
                All
            }
        }
        Tag::Div => {
            // Only the immediate parent is checked; deeper content-model
            // violations need the whole document.
            if options.parent_is("dl") {
                Only(&[R::None, R::Presentation])
            } else {
                supported
            }
        }
        Tag::Img => {
            if has_accessible_name(element) {
                Only(NAMED_IMG_ROLES)
            } else {
                supported
            }
        }
        Tag::Input => input_roles(element),
        Tag::Select => {
            if is_listbox_select(element) {
                Only(&[R::Listbox])
            } else {
                supported
            }
        }
        Tag::Summary => {
            // Only the immediate parent, as with `div` in `dl`.
            if options.parent_is("details") {
                NoRoles
            } else {
                supported
            }
        }
        Tag::Td => match TableContext::classify(options.ancestors) {
            TableContext::Table => Only(&[R::Cell]),
            TableContext::Grid => Only(&[R::GridCell]),
            TableContext::Detached | TableContext::Outside | TableContext::Unknown => All,
        },
        Tag::Th => match TableContext::classify(options.ancestors) {
            TableContext::Table => Only(&[R::ColumnHeader, R::RowHeader]),
            TableContext::Grid => Only(&[R::ColumnHeader, R::GridCell, R::RowHeader]),
            TableContext::Detached | TableContext::Outside | TableContext::Unknown => All,
        },
        Tag::Tr => match TableContext::classify(options.ancestors) {
            TableContext::Table | TableContext::Grid => Only(&[R::Row]),
            TableContext::Detached | TableContext::Outside | TableContext::Unknown => All,
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
        | Tag::Dl
        | Tag::Dt
        | Tag::Em
        | Tag::Embed
        | Tag::Fieldset
        | Tag::Figcaption
        | Tag::Figure
        | Tag::Footer
        | Tag::Form
        | Tag::H1
        | Tag::H2
        | Tag::H3
        | Tag::H4
        | Tag::H5
        | Tag::H6
        | Tag::Head
        | Tag::Header
        | Tag::Hgroup
        | Tag::Hr
        | Tag::Html
        | Tag::I
        | Tag::Iframe
        | Tag::Ins
        | Tag::Kbd
        | Tag::Label
        | Tag::Legend
        | Tag::Li
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
        | Tag::Section
        | Tag::Slot
        | Tag::Small
        | Tag::Source
        | Tag::Span
        | Tag::Strong
        | Tag::Style
        | Tag::Sub
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
        | Tag::Wbr => supported,
    }
}

/// Whether the element may declare `role`
pub fn is_supported_role(
    element: &impl Element,
    role: AriaRole,
    options: &ResolveOptions<'_>,
) -> bool {
    get_supported_roles(element, options).contains(role)
}

fn input_roles(element: &impl Element) -> SupportedRoles {
    let input_type = InputType::of(element);
    if has_suggestions(element, input_type) {
        return Only(&[R::Combobox]);
    }
    match input_type {
        InputType::Button => Only(INPUT_BUTTON_ROLES),
        InputType::Image => Only(INPUT_IMAGE_ROLES),
        InputType::Reset | InputType::Submit => Only(&[R::Button]),
        InputType::Checkbox => Only(INPUT_CHECKBOX_ROLES),
        InputType::Radio => Only(&[R::Radio, R::MenuItemRadio]),
        InputType::Range => Only(&[R::Slider]),
        InputType::Number => Only(&[R::SpinButton]),
        InputType::Search => Only(&[R::SearchBox, R::Combobox]),
        InputType::Email | InputType::Tel | InputType::Url => Only(&[R::TextBox]),
        InputType::Text | InputType::Unknown => Only(INPUT_TEXT_ROLES),
        InputType::Color
        | InputType::Date
        | InputType::DatetimeLocal
        | InputType::File
        | InputType::Hidden
        | InputType::Month
        | InputType::Password
        | InputType::Time
        | InputType::Week => NoRoles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_dom::ElementDescriptor;

    fn el(tag: &str) -> ElementDescriptor {
        ElementDescriptor::new(tag)
    }

    fn roles(element: &ElementDescriptor) -> SupportedRoles {
        get_supported_roles(element, &ResolveOptions::new())
    }

    fn roles_in(element: &ElementDescriptor, ancestors: &[ElementDescriptor]) -> SupportedRoles {
        get_supported_roles(element, &ResolveOptions::with_ancestors(ancestors))
    }

    #[test]
    fn test_anchor_without_href_allows_all() {
        assert_eq!(roles(&el("a")), All);
        assert!(roles(&el("a").with_attribute("href", "#")).contains(R::Tab));
        assert!(!roles(&el("a").with_attribute("href", "#")).contains(R::Heading));
    }

    #[test]
    fn test_explicit_role_ignored() {
        let a = el("a").with_attribute("role", "button");
        assert_eq!(roles(&a), All);
        assert_eq!(roles(&el("button").with_attribute("role", "heading")), roles(&el("button")));
    }

    #[test]
    fn test_img() {
        let named = roles(&el("img").with_attribute("alt", "chart"));
        assert_eq!(named.to_vec().len(), 19);
        assert!(named.contains(R::Slider));
        assert!(!named.contains(R::None));

        assert_eq!(roles(&el("img")).to_vec(), vec![R::Img, R::Image, R::None, R::Presentation]);
    }

    #[test]
    fn test_div_in_dl() {
        assert_eq!(roles_in(&el("div"), &[el("dl")]), Only(&[R::None, R::Presentation]));
        assert_eq!(roles_in(&el("div"), &[el("section"), el("dl")]), All);
        assert_eq!(roles(&el("div")), All);
    }

    #[test]
    fn test_summary_in_details() {
        assert_eq!(roles_in(&el("summary"), &[el("details")]), NoRoles);
        assert_eq!(roles_in(&el("summary"), &[el("div"), el("details")]), All);
        assert!(roles_in(&el("summary"), &[el("details")]).is_empty());
        assert_eq!(roles(&el("summary")), All);
    }

    #[test]
    fn test_table_parts() {
        assert_eq!(roles_in(&el("td"), &[el("tr"), el("table")]), Only(&[R::Cell]));
        assert_eq!(
            roles_in(&el("td"), &[el("table").with_attribute("role", "grid")]),
            Only(&[R::GridCell])
        );
        assert_eq!(roles(&el("td")), All);
        assert_eq!(roles_in(&el("td"), &[]), All);
        assert_eq!(roles_in(&el("td"), &[el("tr")]), All);
        assert_eq!(roles_in(&el("tr"), &[el("tbody")]), All);
        assert!(roles_in(&el("th"), &[el("table")]).contains(R::RowHeader));
        assert_eq!(roles_in(&el("tr"), &[el("table")]), Only(&[R::Row]));
    }

    #[test]
    fn test_inputs() {
        let input = |t: &str| el("input").with_attribute("type", t);
        assert_eq!(roles(&input("hidden")), NoRoles);
        assert!(roles(&input("checkbox")).contains(R::Switch));
        assert_eq!(roles(&input("range")), Only(&[R::Slider]));
        assert_eq!(roles(&el("input").with_attribute("list", "l")), Only(&[R::Combobox]));
        assert!(roles(&el("input")).contains(R::SearchBox));
    }

    #[test]
    fn test_select() {
        assert_eq!(roles(&el("select").with_attribute("multiple", true)), Only(&[R::Listbox]));
        assert!(roles(&el("select")).contains(R::Menu));
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(roles(&el("blink")), NoRoles);
        assert!(!is_supported_role(&el("blink"), R::Button, &ResolveOptions::new()));
    }

    #[test]
    fn test_is_supported_role() {
        let opts = ResolveOptions::new();
        assert!(is_supported_role(&el("nav"), R::TabList, &opts));
        assert!(!is_supported_role(&el("nav"), R::Button, &opts));
    }
}
