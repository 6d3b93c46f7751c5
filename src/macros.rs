//! Macros to reduce boilerplate for string-keyed enums

/// Generate `Display` and case-insensitive `FromStr` for a fieldless enum,
/// along with an `ALL_STRINGS` constant listing the accepted spellings.
///
/// # Usage
///
/// ```rust,ignore
/// enum_display_fromstr!(
///     AccordionMode,
///     TicketDeskError::InvalidMode,
///     {
///         Single => "single",
///         Multiple => "multiple",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $error_variant:path,
        { $($variant:ident => $str:literal),+ $(,)? }
    ) => {
        impl $enum_name {
            /// All valid string representations of this enum.
            pub const ALL_STRINGS: &[&str] = &[$($str),+];

            /// The canonical lowercase name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($enum_name::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::TicketDeskError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok($enum_name::$variant),)+
                    _ => Err($error_variant(s.to_string())),
                }
            }
        }
    };
}
