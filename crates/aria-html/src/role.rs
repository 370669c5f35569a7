//! ARIA Roles
//!
//! Concrete WAI-ARIA roles and the attribute rules attached to each.
//! Abstract roles (`widget`, `landmark`, ...) are not part of the set:
//! authors cannot use them, so a `role` token naming one is ignored.

use std::collections::BTreeSet;

use crate::attribute::{AriaAttribute, GLOBAL_ATTRIBUTES, NAMING_ATTRIBUTES};

keyword_enum! {
    /// ARIA role
    pub enum AriaRole ("ARIA role", UnknownRole) {
        Alert => "alert",
        AlertDialog => "alertdialog",
        Application => "application",
        Article => "article",
        Banner => "banner",
        Blockquote => "blockquote",
        Button => "button",
        Caption => "caption",
        Cell => "cell",
        Checkbox => "checkbox",
        Code => "code",
        ColumnHeader => "columnheader",
        Combobox => "combobox",
        Complementary => "complementary",
        ContentInfo => "contentinfo",
        Definition => "definition",
        Deletion => "deletion",
        Dialog => "dialog",
        Directory => "directory",
        Document => "document",
        Emphasis => "emphasis",
        Feed => "feed",
        Figure => "figure",
        Form => "form",
        Generic => "generic",
        Grid => "grid",
        GridCell => "gridcell",
        Group => "group",
        Heading => "heading",
        Image => "image",
        Img => "img",
        Insertion => "insertion",
        Link => "link",
        List => "list",
        Listbox => "listbox",
        ListItem => "listitem",
        Log => "log",
        Main => "main",
        Mark => "mark",
        Marquee => "marquee",
        Math => "math",
        Menu => "menu",
        MenuBar => "menubar",
        MenuItem => "menuitem",
        MenuItemCheckbox => "menuitemcheckbox",
        MenuItemRadio => "menuitemradio",
        Meter => "meter",
        Navigation => "navigation",
        /// The literal `none` role, not the absence of a role
        None => "none",
        Note => "note",
        Option => "option",
        Paragraph => "paragraph",
        Presentation => "presentation",
        ProgressBar => "progressbar",
        Radio => "radio",
        RadioGroup => "radiogroup",
        Region => "region",
        Row => "row",
        RowGroup => "rowgroup",
        RowHeader => "rowheader",
        ScrollBar => "scrollbar",
        Search => "search",
        SearchBox => "searchbox",
        Separator => "separator",
        Slider => "slider",
        SpinButton => "spinbutton",
        Status => "status",
        Strong => "strong",
        Subscript => "subscript",
        Superscript => "superscript",
        Switch => "switch",
        Tab => "tab",
        Table => "table",
        TabList => "tablist",
        TabPanel => "tabpanel",
        Term => "term",
        TextBox => "textbox",
        Time => "time",
        Timer => "timer",
        Toolbar => "toolbar",
        ToolTip => "tooltip",
        Tree => "tree",
        TreeGrid => "treegrid",
        TreeItem => "treeitem",
    }
}

/// Where a role's accessible name may come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFrom {
    /// Only from author attributes (`aria-label`, `aria-labelledby`)
    Author,
    /// From author attributes or the element's contents
    Contents,
    /// Naming is prohibited
    Prohibited,
}

/// Attribute rules for a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleInfo {
    /// Role-specific attributes on top of the global set
    pub own: &'static [AriaAttribute],
    /// Attributes authors must provide
    pub required: &'static [AriaAttribute],
    /// Attributes authors must not use
    pub prohibited: &'static [AriaAttribute],
    pub name_from: NameFrom,
}

impl RoleInfo {
    /// Supported attributes: global plus role-specific, minus prohibited
    pub fn supported(&self) -> BTreeSet<AriaAttribute> {
        GLOBAL_ATTRIBUTES
            .iter()
            .chain(self.own)
            .copied()
            .filter(|a| !self.prohibited.contains(a))
            .collect()
    }

    /// Whether a single attribute is supported
    pub fn supports(&self, attribute: AriaAttribute) -> bool {
        !self.prohibited.contains(&attribute)
            && (GLOBAL_ATTRIBUTES.contains(&attribute) || self.own.contains(&attribute))
    }
}

use AriaAttribute as A;

const NO_ATTRS: &[AriaAttribute] = &[];

const CELL: &[AriaAttribute] = &[
    A::ColIndex,
    A::ColIndexText,
    A::ColSpan,
    A::RowIndex,
    A::RowIndexText,
    A::RowSpan,
];
const HEADER_CELL: &[AriaAttribute] = &[
    A::ColIndex,
    A::ColIndexText,
    A::ColSpan,
    A::Disabled,
    A::ErrorMessage,
    A::Expanded,
    A::HasPopup,
    A::Invalid,
    A::ReadOnly,
    A::Required,
    A::RowIndex,
    A::RowIndexText,
    A::RowSpan,
    A::Selected,
    A::Sort,
];
const GRID_CELL: &[AriaAttribute] = &[
    A::ColIndex,
    A::ColIndexText,
    A::ColSpan,
    A::Disabled,
    A::ErrorMessage,
    A::Expanded,
    A::HasPopup,
    A::Invalid,
    A::ReadOnly,
    A::Required,
    A::RowIndex,
    A::RowIndexText,
    A::RowSpan,
    A::Selected,
];
const CHECKBOX: &[AriaAttribute] = &[
    A::Checked,
    A::Disabled,
    A::ErrorMessage,
    A::Expanded,
    A::Invalid,
    A::ReadOnly,
    A::Required,
];
const GRID: &[AriaAttribute] = &[
    A::ActiveDescendant,
    A::ColCount,
    A::Disabled,
    A::ErrorMessage,
    A::Invalid,
    A::MultiSelectable,
    A::ReadOnly,
    A::RowCount,
];
const MENU: &[AriaAttribute] = &[A::ActiveDescendant, A::Disabled, A::Orientation];
const MENU_ITEM: &[AriaAttribute] = &[
    A::Disabled,
    A::Expanded,
    A::HasPopup,
    A::PosInSet,
    A::SetSize,
];
const MENU_ITEM_CHECKED: &[AriaAttribute] = &[
    A::Checked,
    A::Disabled,
    A::Expanded,
    A::HasPopup,
    A::PosInSet,
    A::SetSize,
];
const RANGE: &[AriaAttribute] = &[A::ValueMax, A::ValueMin, A::ValueNow, A::ValueText];
const TEXTBOX: &[AriaAttribute] = &[
    A::ActiveDescendant,
    A::AutoComplete,
    A::Disabled,
    A::ErrorMessage,
    A::HasPopup,
    A::Invalid,
    A::Multiline,
    A::Placeholder,
    A::ReadOnly,
    A::Required,
];
const TREE: &[AriaAttribute] = &[
    A::ActiveDescendant,
    A::Disabled,
    A::ErrorMessage,
    A::Invalid,
    A::MultiSelectable,
    A::Orientation,
    A::Required,
];
const TREEGRID: &[AriaAttribute] = &[
    A::ActiveDescendant,
    A::ColCount,
    A::Disabled,
    A::ErrorMessage,
    A::Invalid,
    A::MultiSelectable,
    A::Orientation,
    A::ReadOnly,
    A::Required,
    A::RowCount,
];
const WINDOW: &[AriaAttribute] = &[A::Modal];

const GENERIC_PROHIBITED: &[AriaAttribute] = &[
    A::BrailleLabel,
    A::BrailleRoleDescription,
    A::Label,
    A::LabelledBy,
    A::RoleDescription,
];

const fn author(own: &'static [AriaAttribute]) -> RoleInfo {
    RoleInfo { own, required: NO_ATTRS, prohibited: NO_ATTRS, name_from: NameFrom::Author }
}

const fn contents(own: &'static [AriaAttribute]) -> RoleInfo {
    RoleInfo { own, required: NO_ATTRS, prohibited: NO_ATTRS, name_from: NameFrom::Contents }
}

const fn unnamed() -> RoleInfo {
    RoleInfo {
        own: NO_ATTRS,
        required: NO_ATTRS,
        prohibited: NAMING_ATTRIBUTES,
        name_from: NameFrom::Prohibited,
    }
}

const fn require(info: RoleInfo, required: &'static [AriaAttribute]) -> RoleInfo {
    RoleInfo { required, ..info }
}

impl AriaRole {
    /// Attribute rules for this role
    pub const fn info(self) -> RoleInfo {
        use AriaRole as R;
        match self {
            R::Alert | R::Log | R::Marquee | R::Status | R::Timer => author(NO_ATTRS),
            R::AlertDialog | R::Dialog => author(WINDOW),
            R::Application => author(&[
                A::ActiveDescendant,
                A::Disabled,
                A::ErrorMessage,
                A::Expanded,
                A::HasPopup,
                A::Invalid,
            ]),
            R::Article => author(&[A::PosInSet, A::SetSize]),
            R::Banner | R::Complementary | R::ContentInfo | R::Form | R::Main
            | R::Navigation | R::Region | R::Search => author(NO_ATTRS),
            R::Blockquote | R::Definition | R::Directory | R::Document | R::Feed
            | R::Figure | R::Image | R::Img | R::List | R::Math | R::Note | R::RowGroup
            | R::TabPanel | R::Time => author(NO_ATTRS),
            R::Button => contents(&[A::Disabled, A::Expanded, A::HasPopup, A::Pressed]),
            R::Caption | R::Code | R::Deletion | R::Emphasis | R::Insertion | R::Mark
            | R::None | R::Paragraph | R::Presentation | R::Strong | R::Subscript
            | R::Superscript => unnamed(),
            R::Cell => contents(CELL),
            R::Checkbox | R::Switch => require(contents(CHECKBOX), &[A::Checked]),
            R::ColumnHeader | R::RowHeader => contents(HEADER_CELL),
            R::Combobox => require(
                author(&[
                    A::ActiveDescendant,
                    A::AutoComplete,
                    A::Disabled,
                    A::ErrorMessage,
                    A::Expanded,
                    A::HasPopup,
                    A::Invalid,
                    A::ReadOnly,
                    A::Required,
                ]),
                &[A::Controls, A::Expanded],
            ),
            R::Generic => RoleInfo {
                own: NO_ATTRS,
                required: NO_ATTRS,
                prohibited: GENERIC_PROHIBITED,
                name_from: NameFrom::Prohibited,
            },
            R::Grid => author(GRID),
            R::GridCell => contents(GRID_CELL),
            R::Group => author(&[A::ActiveDescendant, A::Disabled]),
            R::Heading => require(contents(&[A::Level]), &[A::Level]),
            R::Link => contents(&[A::Disabled, A::Expanded, A::HasPopup]),
            R::Listbox => author(&[
                A::ActiveDescendant,
                A::Disabled,
                A::ErrorMessage,
                A::Expanded,
                A::Invalid,
                A::MultiSelectable,
                A::Orientation,
                A::ReadOnly,
                A::Required,
            ]),
            R::ListItem => author(&[A::Level, A::PosInSet, A::SetSize]),
            R::Menu | R::MenuBar => author(MENU),
            R::MenuItem => contents(MENU_ITEM),
            R::MenuItemCheckbox | R::MenuItemRadio => {
                require(contents(MENU_ITEM_CHECKED), &[A::Checked])
            }
            R::Meter => require(author(RANGE), &[A::ValueNow]),
            R::Option => contents(&[
                A::Checked,
                A::Disabled,
                A::PosInSet,
                A::Selected,
                A::SetSize,
            ]),
            R::ProgressBar => author(RANGE),
            R::Radio => require(
                contents(&[A::Checked, A::Disabled, A::PosInSet, A::SetSize]),
                &[A::Checked],
            ),
            R::RadioGroup => author(&[
                A::ActiveDescendant,
                A::Disabled,
                A::ErrorMessage,
                A::Invalid,
                A::Orientation,
                A::ReadOnly,
                A::Required,
            ]),
            R::Row => contents(&[
                A::ActiveDescendant,
                A::ColIndex,
                A::Disabled,
                A::Expanded,
                A::Level,
                A::PosInSet,
                A::RowIndex,
                A::RowIndexText,
                A::Selected,
                A::SetSize,
            ]),
            R::ScrollBar => require(
                author(&[
                    A::Disabled,
                    A::Orientation,
                    A::ValueMax,
                    A::ValueMin,
                    A::ValueNow,
                    A::ValueText,
                ]),
                &[A::Controls, A::ValueNow],
            ),
            R::SearchBox | R::TextBox => author(TEXTBOX),
            R::Separator => author(&[
                A::Disabled,
                A::Orientation,
                A::ValueMax,
                A::ValueMin,
                A::ValueNow,
                A::ValueText,
            ]),
            R::Slider => require(
                author(&[
                    A::Disabled,
                    A::ErrorMessage,
                    A::HasPopup,
                    A::Invalid,
                    A::Orientation,
                    A::ReadOnly,
                    A::ValueMax,
                    A::ValueMin,
                    A::ValueNow,
                    A::ValueText,
                ]),
                &[A::ValueNow],
            ),
            R::SpinButton => author(&[
                A::ActiveDescendant,
                A::Disabled,
                A::ErrorMessage,
                A::Invalid,
                A::ReadOnly,
                A::Required,
                A::ValueMax,
                A::ValueMin,
                A::ValueNow,
                A::ValueText,
            ]),
            R::Tab => contents(&[
                A::Disabled,
                A::Expanded,
                A::HasPopup,
                A::PosInSet,
                A::Selected,
                A::SetSize,
            ]),
            R::Table => author(&[A::ColCount, A::RowCount]),
            R::TabList => author(&[
                A::ActiveDescendant,
                A::Disabled,
                A::MultiSelectable,
                A::Orientation,
            ]),
            R::Term => contents(NO_ATTRS),
            R::Toolbar => author(MENU),
            R::ToolTip => contents(NO_ATTRS),
            R::Tree => author(TREE),
            R::TreeGrid => author(TREEGRID),
            R::TreeItem => contents(&[
                A::Checked,
                A::Disabled,
                A::Expanded,
                A::HasPopup,
                A::Level,
                A::PosInSet,
                A::Selected,
                A::SetSize,
            ]),
        }
    }

    /// Check if role is landmark
    pub fn is_landmark(&self) -> bool {
        matches!(self,
            Self::Banner | Self::Complementary | Self::ContentInfo |
            Self::Form | Self::Main | Self::Navigation | Self::Region | Self::Search
        )
    }

    /// Check if role lays out tabular data (`table`, `grid`, `treegrid`)
    pub fn is_tabular(&self) -> bool {
        matches!(self, Self::Table | Self::Grid | Self::TreeGrid)
    }
}
