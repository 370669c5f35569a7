//! Element Descriptors
//!
//! The `{tag name, attributes}` shape every resolver works on, and the
//! [`Element`] trait that lets tree-backed elements stand in for it.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{AttributeValue, NamedNodeMap};

/// Plain element description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    /// Lower-cased tag name
    #[serde(deserialize_with = "lowercase")]
    pub tag_name: String,
    /// Attributes (absent in JSON means empty)
    #[serde(default)]
    pub attributes: NamedNodeMap,
}

fn lowercase<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(|s| s.to_ascii_lowercase())
}

impl ElementDescriptor {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attributes: NamedNodeMap::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.set_attribute(name, value);
        self
    }

    /// Set attribute in place
    pub fn set_attribute(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.attributes.set_attribute(name, value);
    }
}

/// Anything that can be read as an element descriptor.
///
/// Implemented by [`ElementDescriptor`] and by tree nodes
/// ([`crate::NodeRef`]), so resolvers accept either without copying.
pub trait Element {
    /// Tag name, lower-cased
    fn tag_name(&self) -> &str;

    /// Raw attribute value
    fn attribute(&self, name: &str) -> Option<&AttributeValue>;

    /// Whether the attribute is set (and not switched off with `false`)
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some_and(AttributeValue::is_present)
    }

    /// String form of a present attribute
    fn attribute_str(&self, name: &str) -> Option<Cow<'_, str>> {
        self.attribute(name)
            .filter(|v| v.is_present())
            .map(AttributeValue::to_token_string)
    }

    /// Whether the tag name matches, ignoring ASCII case
    fn is_tag(&self, tag_name: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag_name)
    }

    /// Copy out a plain descriptor
    fn virtualize(&self) -> ElementDescriptor;
}

impl Element for ElementDescriptor {
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get_attribute(name)
    }

    fn virtualize(&self) -> ElementDescriptor {
        self.clone()
    }
}

impl<E: Element + ?Sized> Element for &E {
    fn tag_name(&self) -> &str {
        (**self).tag_name()
    }

    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        (**self).attribute(name)
    }

    fn virtualize(&self) -> ElementDescriptor {
        (**self).virtualize()
    }
}
