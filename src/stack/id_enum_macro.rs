/// Defines a closed identifier enum with an explicit `Unknown` fallback.
///
/// Each variant carries a serde name, a display name and optional aliases.
/// Text that matches none of them (case-insensitively) becomes `Unknown`
/// instead of being carried along as an arbitrary string.
#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $serde_name:literal : $display_name:literal
                $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// Value outside the known vocabulary
            Unknown,
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let s = match self {
                    $(
                        Self::$variant => $serde_name,
                    )*
                    Self::Unknown => "unknown",
                };
                serializer.serialize_str(s)
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self::parse(&s))
            }
        }

        impl $enum_name {
            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $display_name,
                    )*
                    Self::Unknown => "Unknown",
                }
            }

            /// Looks up a variant by serde name, display name or alias
            pub fn from_name(name: &str) -> Option<Self> {
                let name = name.trim();
                $(
                    if name.eq_ignore_ascii_case($serde_name)
                        || name.eq_ignore_ascii_case($display_name)
                        $( || name.eq_ignore_ascii_case($alias) )*
                    {
                        return Some(Self::$variant);
                    }
                )*
                None
            }

            /// Like [`Self::from_name`], mapping unrecognized text to `Unknown`
            pub fn parse(name: &str) -> Self {
                Self::from_name(name).unwrap_or(Self::Unknown)
            }

            pub fn all_variants() -> &'static [Self] {
                &[
                    $(
                        Self::$variant,
                    )*
                ]
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown)
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse(s))
            }
        }
    };
}
