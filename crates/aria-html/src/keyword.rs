//! Keyword enums
//!
//! Roles, attributes, and tag names are closed sets of ASCII keywords.
//! `keyword_enum!` declares the enum together with its keyword table so
//! the two can never drift apart.

/// Declare a closed keyword enum.
///
/// Generates `ALL`, `as_str`, case-insensitive `parse`, `Display`,
/// `FromStr` (failing with the given `AriaError` variant), and serde
/// impls that use the keyword spelling.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($what:literal, $err:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $kw:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            /// Every keyword, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )* ];

            /// Keyword spelling
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $kw, )*
                }
            }

            /// Parse a keyword, ignoring ASCII case and surrounding whitespace
            pub fn parse(s: &str) -> Option<Self> {
                let s = s.trim();
                match s {
                    $( $kw => Some($name::$variant), )*
                    _ if s.bytes().any(|b| b.is_ascii_uppercase()) => {
                        Self::parse(&s.to_ascii_lowercase())
                    }
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::AriaError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| crate::AriaError::$err(s.to_string()))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&raw).ok_or_else(|| {
                    <D::Error as serde::de::Error>::custom(format!("unknown {}: {}", $what, raw))
                })
            }
        }
    };
}
