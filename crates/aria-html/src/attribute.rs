//! ARIA Attributes
//!
//! States and properties, and the value kind each one accepts.

keyword_enum! {
    /// ARIA state or property.
    ///
    /// Declared in keyword order, so the derived `Ord` sorts by name.
    pub enum AriaAttribute ("ARIA attribute", UnknownAttribute) {
        ActiveDescendant => "aria-activedescendant",
        Atomic => "aria-atomic",
        AutoComplete => "aria-autocomplete",
        BrailleLabel => "aria-braillelabel",
        BrailleRoleDescription => "aria-brailleroledescription",
        Busy => "aria-busy",
        Checked => "aria-checked",
        ColCount => "aria-colcount",
        ColIndex => "aria-colindex",
        ColIndexText => "aria-colindextext",
        ColSpan => "aria-colspan",
        Controls => "aria-controls",
        Current => "aria-current",
        DescribedBy => "aria-describedby",
        Description => "aria-description",
        Details => "aria-details",
        Disabled => "aria-disabled",
        DropEffect => "aria-dropeffect",
        ErrorMessage => "aria-errormessage",
        Expanded => "aria-expanded",
        FlowTo => "aria-flowto",
        Grabbed => "aria-grabbed",
        HasPopup => "aria-haspopup",
        Hidden => "aria-hidden",
        Invalid => "aria-invalid",
        KeyShortcuts => "aria-keyshortcuts",
        Label => "aria-label",
        LabelledBy => "aria-labelledby",
        Level => "aria-level",
        Live => "aria-live",
        Modal => "aria-modal",
        Multiline => "aria-multiline",
        MultiSelectable => "aria-multiselectable",
        Orientation => "aria-orientation",
        Owns => "aria-owns",
        Placeholder => "aria-placeholder",
        PosInSet => "aria-posinset",
        Pressed => "aria-pressed",
        ReadOnly => "aria-readonly",
        Relevant => "aria-relevant",
        Required => "aria-required",
        RoleDescription => "aria-roledescription",
        RowCount => "aria-rowcount",
        RowIndex => "aria-rowindex",
        RowIndexText => "aria-rowindextext",
        RowSpan => "aria-rowspan",
        Selected => "aria-selected",
        SetSize => "aria-setsize",
        Sort => "aria-sort",
        ValueMax => "aria-valuemax",
        ValueMin => "aria-valuemin",
        ValueNow => "aria-valuenow",
        ValueText => "aria-valuetext",
    }
}

use AriaAttribute::*;

/// Attributes every role supports (unless the role prohibits them)
pub const GLOBAL_ATTRIBUTES: &[AriaAttribute] = &[
    Atomic,
    BrailleLabel,
    BrailleRoleDescription,
    Busy,
    Controls,
    Current,
    DescribedBy,
    Description,
    Details,
    DropEffect,
    FlowTo,
    Grabbed,
    Hidden,
    KeyShortcuts,
    Label,
    LabelledBy,
    Live,
    Owns,
    Relevant,
    RoleDescription,
];

/// Attributes that give an element its accessible name
pub const NAMING_ATTRIBUTES: &[AriaAttribute] = &[BrailleLabel, Label, LabelledBy];

/// Value kind of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// `true` / `false`
    Boolean,
    /// One value out of a fixed set
    Enum(&'static [&'static str]),
    /// Space-separated tokens, each out of a fixed set
    TokenList(&'static [&'static str]),
    IdReference,
    IdReferenceList,
    Integer,
    Number,
    String,
}

const TRISTATE: &[&str] = &["false", "mixed", "true", "undefined"];
const TRUE_FALSE_UNDEFINED: &[&str] = &["false", "true", "undefined"];

impl AriaAttribute {
    /// Declared value kind
    pub const fn kind(self) -> AttributeKind {
        use AttributeKind as K;
        match self {
            Atomic | Busy | Disabled | Modal | Multiline | MultiSelectable | ReadOnly
            | Required => K::Boolean,

            AutoComplete => K::Enum(&["both", "inline", "list", "none"]),
            Checked | Pressed => K::Enum(TRISTATE),
            Current => K::Enum(&["date", "false", "location", "page", "step", "time", "true"]),
            Expanded | Grabbed | Hidden | Selected => K::Enum(TRUE_FALSE_UNDEFINED),
            HasPopup => K::Enum(&["dialog", "false", "grid", "listbox", "menu", "tree", "true"]),
            Invalid => K::Enum(&["false", "grammar", "spelling", "true"]),
            Live => K::Enum(&["assertive", "off", "polite"]),
            Orientation => K::Enum(&["horizontal", "undefined", "vertical"]),
            Sort => K::Enum(&["ascending", "descending", "none", "other"]),

            DropEffect => K::TokenList(&["copy", "execute", "link", "move", "none", "popup"]),
            Relevant => K::TokenList(&["additions", "all", "removals", "text"]),

            ActiveDescendant | ErrorMessage => K::IdReference,
            Controls | DescribedBy | Details | FlowTo | LabelledBy | Owns => K::IdReferenceList,

            ColCount | ColIndex | ColSpan | Level | PosInSet | RowCount | RowIndex | RowSpan
            | SetSize => K::Integer,

            ValueMax | ValueMin | ValueNow => K::Number,

            BrailleLabel | BrailleRoleDescription | ColIndexText | Description | KeyShortcuts
            | Label | Placeholder | RoleDescription | RowIndexText | ValueText => K::String,
        }
    }

    /// Whether every role supports this attribute by default
    pub fn is_global(self) -> bool {
        GLOBAL_ATTRIBUTES.contains(&self)
    }

    /// Whether this attribute names the element
    pub fn is_naming(self) -> bool {
        NAMING_ATTRIBUTES.contains(&self)
    }
}
