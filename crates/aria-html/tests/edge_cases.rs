//! Edge case tests for aria-html
//!
//! Malformed input, unusual casing, and boundary conditions.

use aria_html::{
    get_role, get_supported_attributes, get_supported_roles, is_valid_attribute_value,
    AriaAttribute, AriaRole, AttributeValue, ElementDescriptor, ResolveOptions, SupportedRoles,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn el(tag: &str) -> ElementDescriptor {
    ElementDescriptor::new(tag)
}

// ============================================================================
// ROLE TOKENS
// ============================================================================

#[test]
fn test_role_fallback_list() {
    init_tracing();
    let div = el("div").with_attribute("role", "  bogus\tswitch checkbox ");
    assert_eq!(get_role(&div, &ResolveOptions::new()), Some(AriaRole::Switch));
}

#[test]
fn test_role_all_invalid_falls_back_to_implicit() {
    let nav = el("nav").with_attribute("role", "bogus other");
    assert_eq!(get_role(&nav, &ResolveOptions::new()), Some(AriaRole::Navigation));
}

#[test]
fn test_role_empty_and_whitespace() {
    for value in ["", "   ", "\n"] {
        let ul = el("ul").with_attribute("role", value);
        assert_eq!(get_role(&ul, &ResolveOptions::new()), Some(AriaRole::List));
    }
}

#[test]
fn test_role_mixed_case() {
    let div = el("div").with_attribute("role", "TabList");
    assert_eq!(get_role(&div, &ResolveOptions::new()), Some(AriaRole::TabList));
}

#[test]
fn test_abstract_role_rejected() {
    let div = el("div").with_attribute("role", "landmark widget");
    assert_eq!(get_role(&div, &ResolveOptions::new()), Some(AriaRole::Generic));
}

// ============================================================================
// TAGS AND ATTRIBUTES
// ============================================================================

#[test]
fn test_uppercase_tag() {
    let th = el("TH").with_attribute("SCOPE", "Row");
    assert_eq!(get_role(&th, &ResolveOptions::new()), Some(AriaRole::RowHeader));
}

#[test]
fn test_unknown_tag_everywhere() {
    let opts = ResolveOptions::new();
    let custom = el("my-widget");
    assert_eq!(get_role(&custom, &opts), None);
    assert_eq!(get_supported_roles(&custom, &opts), SupportedRoles::NoRoles);
    assert!(get_supported_attributes(&custom, &opts).contains(&AriaAttribute::Label));

    let custom = custom.with_attribute("role", "button");
    assert_eq!(get_role(&custom, &opts), Some(AriaRole::Button));
}

#[test]
fn test_false_boolean_attribute_is_absent() {
    let select = el("select").with_attribute("multiple", false);
    assert_eq!(get_role(&select, &ResolveOptions::new()), Some(AriaRole::Combobox));

    let a = el("a").with_attribute("href", false);
    assert_eq!(get_role(&a, &ResolveOptions::new()), Some(AriaRole::Generic));
}

#[test]
fn test_select_size_boundaries() {
    let role = |size: AttributeValue| {
        get_role(&el("select").with_attribute("size", size), &ResolveOptions::new())
    };
    assert_eq!(role(1.into()), Some(AriaRole::Combobox));
    assert_eq!(role(2.into()), Some(AriaRole::Listbox));
    assert_eq!(role("3".into()), Some(AriaRole::Listbox));
    assert_eq!(role("big".into()), Some(AriaRole::Combobox));
    assert_eq!(role((-4).into()), Some(AriaRole::Combobox));
}

#[test]
fn test_whitespace_name_is_no_name() {
    let img = el("img").with_attribute("alt", "   ");
    assert_eq!(get_role(&img, &ResolveOptions::new()), Some(AriaRole::None));

    let img = el("img").with_attribute("aria-label", "logo");
    assert_eq!(get_role(&img, &ResolveOptions::new()), Some(AriaRole::Img));
}

// ============================================================================
// ANCESTORS
// ============================================================================

#[test]
fn test_nearest_table_ancestor_wins() {
    let ancestors = [el("tr"), el("table"), el("div").with_attribute("role", "grid")];
    let opts = ResolveOptions::with_ancestors(&ancestors);
    assert_eq!(get_role(&el("td"), &opts), Some(AriaRole::Cell));
}

#[test]
fn test_header_scoping() {
    init_tracing();
    let in_article = [el("article"), el("body")];
    let in_body = [el("body")];

    let header = el("header");
    assert_eq!(
        get_role(&header, &ResolveOptions::with_ancestors(&in_article)),
        Some(AriaRole::Generic)
    );
    assert_eq!(
        get_role(&header, &ResolveOptions::with_ancestors(&in_body)),
        Some(AriaRole::Banner)
    );
    assert_eq!(get_role(&el("footer"), &ResolveOptions::new()), Some(AriaRole::ContentInfo));
}

#[test]
fn test_li_nested_under_list_deep() {
    let ancestors = [el("div"), el("span"), el("ol")];
    assert_eq!(
        get_role(&el("li"), &ResolveOptions::with_ancestors(&ancestors)),
        Some(AriaRole::ListItem)
    );
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_validator_edges() {
    assert!(is_valid_attribute_value("ARIA-PRESSED", Some(&" Mixed ".into())).unwrap());
    assert!(!is_valid_attribute_value("aria-pressed", Some(&AttributeValue::from(0.5))).unwrap());
    assert!(is_valid_attribute_value("aria-rowcount", Some(&(-1).into())).unwrap());
    assert!(is_valid_attribute_value("aria-label", None).is_ok_and(|valid| !valid));
}
