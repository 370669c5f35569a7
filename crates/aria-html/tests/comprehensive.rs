//! Comprehensive tests for aria-html
//!
//! End-to-end resolution through the public API.

use std::collections::BTreeSet;

use aria_dom::DomTree;
use aria_html::{
    get_role, get_supported_attributes, get_supported_roles, is_role, is_supported_attribute,
    is_supported_role, is_valid_attribute_value, AriaAttribute, AriaError, AriaRole,
    AttributeValue, Element, ElementDescriptor, ResolveOptions, SupportedRoles, Tag,
};

fn el(tag: &str) -> ElementDescriptor {
    ElementDescriptor::new(tag)
}

fn unknown() -> ResolveOptions<'static> {
    ResolveOptions::new()
}

// ============================================================================
// ROLE RESOLUTION
// ============================================================================

#[test]
fn test_explicit_role_overrides_default() {
    let div = el("div").with_attribute("role", "button");
    assert_eq!(get_role(&div, &unknown()), Some(AriaRole::Button));
}

#[test]
fn test_li_absent_vs_empty_ancestors() {
    assert_eq!(get_role(&el("li"), &unknown()), Some(AriaRole::ListItem));
    assert_eq!(
        get_role(&el("li"), &ResolveOptions::with_ancestors(&[])),
        Some(AriaRole::Generic)
    );
}

#[test]
fn test_td_ancestor_dispatch() {
    let table = [el("table")];
    let grid = [el("table").with_attribute("role", "grid")];

    assert_eq!(get_role(&el("td"), &ResolveOptions::with_ancestors(&table)), Some(AriaRole::Cell));
    assert_eq!(
        get_role(&el("td"), &ResolveOptions::with_ancestors(&grid)),
        Some(AriaRole::GridCell)
    );
    assert_eq!(get_role(&el("td"), &ResolveOptions::with_ancestors(&[])), None);
}

#[test]
fn test_partial_ancestor_chain() {
    let row = [el("tr")];
    let body = [el("tbody")];

    assert_eq!(get_role(&el("td"), &ResolveOptions::with_ancestors(&row)), Some(AriaRole::Cell));
    assert_eq!(get_role(&el("tr"), &ResolveOptions::with_ancestors(&body)), Some(AriaRole::Row));
    assert_eq!(get_role(&el("tr"), &ResolveOptions::with_ancestors(&[])), None);
}

#[test]
fn test_input_type_dispatch() {
    let range = el("input").with_attribute("type", "range");
    let hidden = el("input").with_attribute("type", "hidden");
    let listed = el("input").with_attribute("list", "x");

    assert_eq!(get_role(&range, &unknown()), Some(AriaRole::Slider));
    assert_eq!(get_role(&hidden, &unknown()), None);
    assert_eq!(get_role(&listed, &unknown()), Some(AriaRole::Combobox));
}

#[test]
fn test_image_naming() {
    let named = el("img").with_attribute("alt", "x");
    let bare = el("img");

    assert_eq!(get_role(&named, &unknown()), Some(AriaRole::Img));
    assert_eq!(get_role(&bare, &unknown()), Some(AriaRole::None));
    assert_eq!(
        get_supported_attributes(&bare, &unknown()),
        BTreeSet::from([AriaAttribute::Hidden])
    );
}

#[test]
fn test_none_role_is_not_no_role() {
    // img without a name has the literal `none` role; hidden inputs have no role at all
    assert_eq!(get_role(&el("img"), &unknown()), Some(AriaRole::None));
    assert_eq!(get_role(&el("input").with_attribute("type", "hidden"), &unknown()), None);
}

// ============================================================================
// SUPPORTED ATTRIBUTES
// ============================================================================

#[test]
fn test_naming_prohibition_waiver() {
    let bare = get_supported_attributes(&el("div"), &unknown());
    let with_role = get_supported_attributes(&el("div").with_attribute("role", "button"), &unknown());

    for naming in [AriaAttribute::Label, AriaAttribute::LabelledBy] {
        assert!(!bare.contains(&naming));
        assert!(with_role.contains(&naming));
    }
}

#[test]
fn test_invalid_explicit_role_does_not_waive() {
    let div = el("div").with_attribute("role", "notarole");
    assert!(!is_supported_attribute(&div, AriaAttribute::Label, &unknown()));
}

#[test]
fn test_supported_attributes_sorted_and_unique() {
    let set = get_supported_attributes(&el("input").with_attribute("type", "number"), &unknown());
    let names: Vec<_> = set.iter().map(|a| a.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
    assert!(set.contains(&AriaAttribute::ValueNow));
}

// ============================================================================
// SUPPORTED ROLES
// ============================================================================

#[test]
fn test_supported_roles_diverge_from_default() {
    let a = el("a");
    assert_eq!(get_role(&a, &unknown()), Some(AriaRole::Generic));
    assert_eq!(get_supported_roles(&a, &unknown()), SupportedRoles::All);
}

#[test]
fn test_resolvers_agree_on_table_bucket() {
    let contexts: [&[ElementDescriptor]; 4] = [
        &[],
        &[el("tbody")],
        &[el("tr"), el("table")],
        &[el("tr"), el("div").with_attribute("role", "treegrid")],
    ];
    for ancestors in contexts {
        let opts = ResolveOptions::with_ancestors(ancestors);
        for tag in ["td", "th", "tr"] {
            let element = el(tag);
            match get_role(&element, &opts) {
                Some(role) => assert!(
                    get_supported_roles(&element, &opts).contains(role),
                    "<{tag}> role {role} not supported in {ancestors:?}"
                ),
                None => assert_eq!(get_supported_roles(&element, &opts), SupportedRoles::All),
            }
        }
    }
}

#[test]
fn test_default_role_always_supported() {
    for tag in Tag::ALL {
        let element = el(tag.as_str());
        if let Some(role) = get_role(&element, &unknown()) {
            assert!(
                is_supported_role(&element, role, &unknown()),
                "<{tag}> resolves to unsupported role {role}"
            );
        }
    }
}

// ============================================================================
// CONVENIENCE WRAPPERS
// ============================================================================

#[test]
fn test_boolean_wrappers() {
    let opts = unknown();
    let nav = el("nav");
    assert!(is_role(&nav, AriaRole::Navigation, &opts));
    assert!(is_supported_role(&nav, AriaRole::MenuBar, &opts));
    assert!(is_supported_attribute(&nav, AriaAttribute::Label, &opts));
    assert!(!is_supported_attribute(&nav, AriaAttribute::Checked, &opts));
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_validator() {
    let t = AttributeValue::from("");
    assert!(is_valid_attribute_value("aria-disabled", Some(&t)).unwrap());
    assert!(!is_valid_attribute_value("aria-sort", Some(&"sideways".into())).unwrap());
    assert!(matches!(
        is_valid_attribute_value("aria-foo", Some(&t)),
        Err(AriaError::UnknownAttribute(_))
    ));
}

// ============================================================================
// ADAPTERS
// ============================================================================

#[test]
fn test_tree_backed_elements() {
    let mut tree = DomTree::new();
    let table = tree.create_element("table");
    let tr = tree.create_element("tr");
    let td = tree.create_element("td");
    tree.set_attribute(table, "role", "grid");
    tree.append_child(table, tr).unwrap();
    tree.append_child(tr, td).unwrap();

    let ancestors = tree.ancestors(td);
    let opts = ResolveOptions::with_ancestors(&ancestors);
    let cell = tree.element(td).unwrap();

    assert_eq!(get_role(&cell, &opts), Some(AriaRole::GridCell));
    assert_eq!(get_role(&cell.virtualize(), &opts), Some(AriaRole::GridCell));
    assert_eq!(get_supported_roles(&cell, &opts), SupportedRoles::Only(&[AriaRole::GridCell]));

    let root_ancestors = tree.ancestors(table);
    let root = tree.element(table).unwrap();
    assert_eq!(get_role(&root, &ResolveOptions::with_ancestors(&root_ancestors)), Some(AriaRole::Grid));
}

#[test]
fn test_json_descriptors() {
    let element: ElementDescriptor = serde_json::from_str(
        r#"{"tagName":"SELECT","attributes":{"size":4}}"#,
    )
    .unwrap();
    assert_eq!(get_role(&element, &unknown()), Some(AriaRole::Listbox));

    let role = get_role(&el("main"), &unknown()).unwrap();
    assert_eq!(serde_json::to_string(&role).unwrap(), "\"main\"");
}

#[test]
fn test_concurrent_resolution() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let th = el("th").with_attribute("scope", "row");
                get_role(&th, &ResolveOptions::new())
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(AriaRole::RowHeader));
    }
}
