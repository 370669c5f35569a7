//! `<input type>` classification

use aria_dom::Element;

use crate::role::AriaRole;

/// State of an `<input>` element's `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Button,
    Checkbox,
    Color,
    Date,
    DatetimeLocal,
    Email,
    File,
    Hidden,
    Image,
    Month,
    Number,
    Password,
    Radio,
    Range,
    Reset,
    Search,
    Submit,
    Tel,
    Text,
    Time,
    Url,
    Week,
    /// Missing or unrecognised `type`, which browsers treat as `text`
    Unknown,
}

impl InputType {
    /// Read the `type` attribute, ignoring case and whitespace
    pub fn of(element: &impl Element) -> Self {
        match element.attribute_str("type") {
            Some(value) => Self::parse(&value),
            None => Self::Unknown,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "color" => Self::Color,
            "date" => Self::Date,
            "datetime-local" => Self::DatetimeLocal,
            "email" => Self::Email,
            "file" => Self::File,
            "hidden" => Self::Hidden,
            "image" => Self::Image,
            "month" => Self::Month,
            "number" => Self::Number,
            "password" => Self::Password,
            "radio" => Self::Radio,
            "range" => Self::Range,
            "reset" => Self::Reset,
            "search" => Self::Search,
            "submit" => Self::Submit,
            "tel" => Self::Tel,
            "text" => Self::Text,
            "time" => Self::Time,
            "url" => Self::Url,
            "week" => Self::Week,
            _ => Self::Unknown,
        }
    }

    /// Whether a `list` attribute turns this input into a combobox
    pub fn accepts_list(self) -> bool {
        matches!(
            self,
            Self::Email | Self::Search | Self::Tel | Self::Text | Self::Url | Self::Unknown
        )
    }

    /// Role implied by the type alone, before the `list` check
    pub fn role(self) -> Option<AriaRole> {
        match self {
            Self::Button | Self::Image | Self::Reset | Self::Submit => Some(AriaRole::Button),
            Self::Checkbox => Some(AriaRole::Checkbox),
            Self::Radio => Some(AriaRole::Radio),
            Self::Range => Some(AriaRole::Slider),
            Self::Number => Some(AriaRole::SpinButton),
            Self::Search => Some(AriaRole::SearchBox),
            Self::Email | Self::Tel | Self::Text | Self::Url | Self::Unknown => {
                Some(AriaRole::TextBox)
            }
            Self::Color
            | Self::Date
            | Self::DatetimeLocal
            | Self::File
            | Self::Hidden
            | Self::Month
            | Self::Password
            | Self::Time
            | Self::Week => None,
        }
    }
}

/// Whether the input carries a `list` its type can use
pub(crate) fn has_suggestions(element: &impl Element, input_type: InputType) -> bool {
    input_type.accepts_list() && element.has_attribute("list")
}
