//! HTML Tags
//!
//! Per-tag defaults from ARIA in HTML: implicit role, the roles authors
//! may set, and attribute restrictions.

use crate::attribute::AriaAttribute;
use crate::role::AriaRole;

keyword_enum! {
    /// HTML element known to the ARIA in HTML mapping
    pub enum Tag ("HTML tag", UnknownTag) {
        A => "a",
        Abbr => "abbr",
        Address => "address",
        Area => "area",
        Article => "article",
        Aside => "aside",
        Audio => "audio",
        B => "b",
        Base => "base",
        Bdi => "bdi",
        Bdo => "bdo",
        Blockquote => "blockquote",
        Body => "body",
        Br => "br",
        Button => "button",
        Canvas => "canvas",
        Caption => "caption",
        Cite => "cite",
        Code => "code",
        Col => "col",
        Colgroup => "colgroup",
        Data => "data",
        Datalist => "datalist",
        Dd => "dd",
        Del => "del",
        Details => "details",
        Dfn => "dfn",
        Dialog => "dialog",
        Div => "div",
        Dl => "dl",
        Dt => "dt",
        Em => "em",
        Embed => "embed",
        Fieldset => "fieldset",
        Figcaption => "figcaption",
        Figure => "figure",
        Footer => "footer",
        Form => "form",
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
        Head => "head",
        Header => "header",
        Hgroup => "hgroup",
        Hr => "hr",
        Html => "html",
        I => "i",
        Iframe => "iframe",
        Img => "img",
        Input => "input",
        Ins => "ins",
        Kbd => "kbd",
        Label => "label",
        Legend => "legend",
        Li => "li",
        Link => "link",
        Main => "main",
        Map => "map",
        Mark => "mark",
        Math => "math",
        Menu => "menu",
        Meta => "meta",
        Meter => "meter",
        Nav => "nav",
        Noscript => "noscript",
        Object => "object",
        Ol => "ol",
        Optgroup => "optgroup",
        Option => "option",
        Output => "output",
        P => "p",
        Param => "param",
        Picture => "picture",
        Pre => "pre",
        Progress => "progress",
        Q => "q",
        Rp => "rp",
        Rt => "rt",
        Ruby => "ruby",
        S => "s",
        Samp => "samp",
        Script => "script",
        Search => "search",
        Section => "section",
        Select => "select",
        Slot => "slot",
        Small => "small",
        Source => "source",
        Span => "span",
        Strong => "strong",
        Style => "style",
        Sub => "sub",
        Summary => "summary",
        Sup => "sup",
        Svg => "svg",
        Table => "table",
        Tbody => "tbody",
        Td => "td",
        Template => "template",
        Textarea => "textarea",
        Tfoot => "tfoot",
        Th => "th",
        Thead => "thead",
        Time => "time",
        Title => "title",
        Tr => "tr",
        Track => "track",
        U => "u",
        Ul => "ul",
        Var => "var",
        Video => "video",
        Wbr => "wbr",
    }
}

/// Roles an element may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedRoles {
    /// Every role is allowed
    All,
    /// No role is allowed
    NoRoles,
    /// Exactly these roles (never empty)
    Only(&'static [AriaRole]),
}

impl SupportedRoles {
    /// Check membership
    pub fn contains(&self, role: AriaRole) -> bool {
        match self {
            Self::All => true,
            Self::NoRoles => false,
            Self::Only(roles) => roles.contains(&role),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoRoles)
    }

    /// Iterate over the allowed roles; `All` expands to [`AriaRole::ALL`]
    pub fn iter(&self) -> impl Iterator<Item = AriaRole> + '_ {
        let roles: &'static [AriaRole] = match self {
            Self::All => AriaRole::ALL,
            Self::NoRoles => &[],
            Self::Only(roles) => roles,
        };
        roles.iter().copied()
    }

    /// Materialise the role list
    pub fn to_vec(&self) -> Vec<AriaRole> {
        self.iter().collect()
    }
}

/// ARIA in HTML record for a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    /// Implicit role (`None` when the tag has no corresponding role)
    pub default_role: Option<AriaRole>,
    pub supported_roles: SupportedRoles,
    /// Authoritative attribute list, replacing role-derived attributes
    pub attribute_override: Option<&'static [AriaAttribute]>,
    /// Authors may not name this element
    pub naming_prohibited: bool,
}

use AriaRole as R;
use SupportedRoles::{All, NoRoles, Only};

const fn tag(default_role: Option<AriaRole>, supported_roles: SupportedRoles) -> TagInfo {
    TagInfo {
        default_role,
        supported_roles,
        attribute_override: None,
        naming_prohibited: false,
    }
}

/// Tag whose implicit role cannot be named
const fn unnamed(default_role: Option<AriaRole>, supported_roles: SupportedRoles) -> TagInfo {
    TagInfo { naming_prohibited: true, ..tag(default_role, supported_roles) }
}

/// Tag that takes no role and no ARIA attributes
const fn bare() -> TagInfo {
    TagInfo { attribute_override: Some(&[]), ..tag(None, NoRoles) }
}

const LIST_ROLES: SupportedRoles = Only(&[
    R::List,
    R::Directory,
    R::Group,
    R::Listbox,
    R::Menu,
    R::MenuBar,
    R::None,
    R::Presentation,
    R::RadioGroup,
    R::TabList,
    R::Toolbar,
    R::Tree,
]);
const EMBEDDED_ROLES: SupportedRoles = Only(&[
    R::Application,
    R::Document,
    R::Img,
    R::Image,
    R::None,
    R::Presentation,
]);
const HEADING_ROLES: SupportedRoles = Only(&[R::Heading, R::None, R::Presentation, R::Tab]);
const PRESENTATIONAL: SupportedRoles = Only(&[R::None, R::Presentation]);

/// Roles allowed on `img` without an accessible name
pub(crate) const UNNAMED_IMG_ROLES: &[AriaRole] = &[R::Img, R::Image, R::None, R::Presentation];

impl Tag {
    /// ARIA in HTML record
    pub const fn info(self) -> TagInfo {
        use Tag as T;
        match self {
            T::A => tag(
                Some(R::Link),
                Only(&[
                    R::Link,
                    R::Button,
                    R::Checkbox,
                    R::MenuItem,
                    R::MenuItemCheckbox,
                    R::MenuItemRadio,
                    R::Option,
                    R::Radio,
                    R::Switch,
                    R::Tab,
                    R::TreeItem,
                ]),
            ),
            T::Abbr | T::Cite | T::Kbd | T::Var => tag(None, All),
            T::Address | T::Hgroup => tag(Some(R::Group), All),
            T::Area => tag(Some(R::Link), Only(&[R::Link])),
            T::Article => tag(
                Some(R::Article),
                Only(&[
                    R::Article,
                    R::Application,
                    R::Document,
                    R::Feed,
                    R::Main,
                    R::None,
                    R::Presentation,
                    R::Region,
                ]),
            ),
            T::Aside => tag(
                Some(R::Complementary),
                Only(&[
                    R::Complementary,
                    R::Feed,
                    R::None,
                    R::Note,
                    R::Presentation,
                    R::Region,
                    R::Search,
                ]),
            ),
            T::Audio | T::Video => tag(None, Only(&[R::Application])),
            T::B | T::Bdi | T::Bdo | T::I | T::Pre | T::Q | T::Samp | T::Small | T::Span
            | T::U => unnamed(Some(R::Generic), All),
            T::Data | T::Div => unnamed(Some(R::Generic), All),
            T::Base | T::Col | T::Colgroup | T::Head | T::Link | T::Map
            | T::Meta | T::Noscript | T::Param | T::Picture | T::Script | T::Slot
            | T::Source | T::Style | T::Template | T::Title | T::Track => bare(),
            T::Blockquote => tag(Some(R::Blockquote), All),
            T::Body => tag(Some(R::Generic), Only(&[R::Generic])),
            T::Br | T::Wbr => TagInfo {
                attribute_override: Some(&[AriaAttribute::Hidden]),
                ..tag(None, PRESENTATIONAL)
            },
            T::Button => tag(
                Some(R::Button),
                Only(&[
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
                ]),
            ),
            T::Canvas | T::Svg => tag(None, All),
            T::Caption => unnamed(Some(R::Caption), Only(&[R::Caption])),
            T::Code => unnamed(Some(R::Code), All),
            T::Datalist => TagInfo {
                attribute_override: Some(&[]),
                ..tag(Some(R::Listbox), Only(&[R::Listbox]))
            },
            T::Dd => tag(Some(R::Definition), Only(&[R::Definition])),
            T::Del | T::S => unnamed(Some(R::Deletion), All),
            T::Details => tag(Some(R::Group), Only(&[R::Group])),
            T::Dfn => tag(Some(R::Term), All),
            T::Dialog => tag(Some(R::Dialog), Only(&[R::Dialog, R::AlertDialog])),
            T::Dl => tag(None, Only(&[R::Group, R::List, R::None, R::Presentation])),
            T::Dt => tag(Some(R::Term), Only(&[R::Term, R::ListItem])),
            T::Em => unnamed(Some(R::Emphasis), All),
            T::Embed | T::Iframe => tag(None, EMBEDDED_ROLES),
            T::Fieldset => tag(
                Some(R::Group),
                Only(&[R::Group, R::None, R::Presentation, R::RadioGroup]),
            ),
            T::Figcaption => tag(None, Only(&[R::Group, R::None, R::Presentation])),
            T::Figure => tag(Some(R::Figure), All),
            T::Footer => tag(
                Some(R::ContentInfo),
                Only(&[R::ContentInfo, R::Generic, R::Group, R::None, R::Presentation]),
            ),
            T::Form => tag(Some(R::Form), Only(&[R::Form, R::None, R::Presentation, R::Search])),
            T::H1 | T::H2 | T::H3 | T::H4 | T::H5 | T::H6 => tag(Some(R::Heading), HEADING_ROLES),
            T::Header => tag(
                Some(R::Banner),
                Only(&[R::Banner, R::Generic, R::Group, R::None, R::Presentation]),
            ),
            T::Hr => tag(Some(R::Separator), Only(&[R::Separator, R::None, R::Presentation])),
            T::Html => TagInfo {
                attribute_override: Some(&[]),
                ..tag(Some(R::Document), Only(&[R::Document]))
            },
            T::Img => tag(Some(R::Img), Only(UNNAMED_IMG_ROLES)),
            T::Input => tag(
                Some(R::TextBox),
                Only(&[R::TextBox, R::Combobox, R::SearchBox, R::SpinButton]),
            ),
            T::Ins => unnamed(Some(R::Insertion), All),
            T::Label | T::Legend => tag(None, NoRoles),
            T::Li => tag(
                Some(R::ListItem),
                Only(&[
                    R::ListItem,
                    R::MenuItem,
                    R::MenuItemCheckbox,
                    R::MenuItemRadio,
                    R::None,
                    R::Option,
                    R::Presentation,
                    R::Radio,
                    R::Separator,
                    R::Tab,
                    R::TreeItem,
                ]),
            ),
            T::Main => tag(Some(R::Main), Only(&[R::Main])),
            T::Mark => unnamed(Some(R::Mark), All),
            T::Math => tag(Some(R::Math), Only(&[R::Math])),
            T::Menu | T::Ol | T::Ul => tag(Some(R::List), LIST_ROLES),
            T::Meter => tag(Some(R::Meter), Only(&[R::Meter])),
            T::Nav => tag(
                Some(R::Navigation),
                Only(&[
                    R::Navigation,
                    R::Menu,
                    R::MenuBar,
                    R::None,
                    R::Presentation,
                    R::TabList,
                ]),
            ),
            T::Object => tag(None, Only(&[R::Application, R::Document, R::Img, R::Image])),
            T::Optgroup => tag(Some(R::Group), Only(&[R::Group])),
            T::Option => tag(Some(R::Option), Only(&[R::Option])),
            T::Output => tag(Some(R::Status), All),
            T::P => unnamed(Some(R::Paragraph), All),
            T::Progress => tag(Some(R::ProgressBar), Only(&[R::ProgressBar])),
            T::Rp | T::Rt | T::Ruby => tag(None, All),
            T::Search => tag(
                Some(R::Search),
                Only(&[R::Search, R::Form, R::Group, R::None, R::Presentation, R::Region]),
            ),
            T::Section => tag(
                Some(R::Region),
                Only(&[
                    R::Region,
                    R::Alert,
                    R::AlertDialog,
                    R::Application,
                    R::Banner,
                    R::Complementary,
                    R::ContentInfo,
                    R::Dialog,
                    R::Document,
                    R::Feed,
                    R::Generic,
                    R::Group,
                    R::Log,
                    R::Main,
                    R::Marquee,
                    R::Navigation,
                    R::None,
                    R::Note,
                    R::Presentation,
                    R::Search,
                    R::Status,
                    R::TabPanel,
                ]),
            ),
            T::Select => tag(Some(R::Combobox), Only(&[R::Combobox, R::Menu])),
            T::Strong => unnamed(Some(R::Strong), All),
            T::Sub => unnamed(Some(R::Subscript), All),
            T::Summary => tag(None, All),
            T::Sup => unnamed(Some(R::Superscript), All),
            T::Table => tag(Some(R::Table), All),
            T::Tbody | T::Tfoot | T::Thead => tag(Some(R::RowGroup), All),
            T::Td => tag(Some(R::Cell), All),
            T::Textarea => tag(Some(R::TextBox), Only(&[R::TextBox])),
            T::Th => tag(Some(R::ColumnHeader), All),
            T::Time => tag(Some(R::Time), All),
            T::Tr => tag(Some(R::Row), All),
        }
    }
}
