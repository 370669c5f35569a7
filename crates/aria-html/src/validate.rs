//! Attribute value validation
//!
//! Checks values against the attribute's declared kind. Only boolean and
//! enumerated kinds are checked; ids, numbers, and free text always pass.

use aria_dom::AttributeValue;

use crate::attribute::{AriaAttribute, AttributeKind};
use crate::context::parse_token_list;
use crate::{AriaError, Result};

/// Whether `value` is admissible for `attribute`.
///
/// Fails with [`AriaError::UnknownAttribute`] when `attribute` is not an
/// ARIA attribute; that is a caller bug, not a data problem. A missing
/// value is never valid.
pub fn is_valid_attribute_value(attribute: &str, value: Option<&AttributeValue>) -> Result<bool> {
    let Some(parsed) = AriaAttribute::parse(attribute) else {
        tracing::debug!(attribute, "validity check on unknown attribute");
        return Err(AriaError::UnknownAttribute(attribute.to_string()));
    };
    Ok(value.is_some_and(|v| is_valid_value(parsed, v)))
}

/// Typed variant of [`is_valid_attribute_value`]
pub fn is_valid_value(attribute: AriaAttribute, value: &AttributeValue) -> bool {
    let raw = value.to_token_string();
    let token = raw.trim();
    match attribute.kind() {
        // empty is the same as "true"
        AttributeKind::Boolean => {
            token.is_empty() || token.eq_ignore_ascii_case("true") || token.eq_ignore_ascii_case("false")
        }
        AttributeKind::Enum(allowed) => allowed.iter().any(|a| token.eq_ignore_ascii_case(a)),
        AttributeKind::TokenList(allowed) => {
            let mut tokens = parse_token_list(token).peekable();
            tokens.peek().is_some()
                && tokens.all(|t| allowed.iter().any(|a| t.eq_ignore_ascii_case(a)))
        }
        AttributeKind::IdReference
        | AttributeKind::IdReferenceList
        | AttributeKind::Integer
        | AttributeKind::Number
        | AttributeKind::String => true,
    }
}
