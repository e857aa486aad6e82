use doctext_ingest::CharClass;

pub const ASCII_ONLY_ENV: &str = "DOCTEXT_ASCII_ONLY";

/// Settings resolved from CLI flags, environment and defaults, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub char_class: CharClass,
    pub clean: bool,
}

impl Settings {
    pub fn resolve(ascii_only: bool, raw: bool) -> Self {
        Self::resolve_with(ascii_only, raw, |key| std::env::var(key).ok())
    }

    /// Resolve against an arbitrary environment lookup.
    pub fn resolve_with(
        ascii_only: bool,
        raw: bool,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let ascii_only = ascii_only || env(ASCII_ONLY_ENV).is_some_and(|v| is_truthy(&v));
        Self {
            char_class: if ascii_only {
                CharClass::Ascii
            } else {
                CharClass::Unicode
            },
            clean: !raw,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
