//! Pure locale parsing: primary-subtag extraction and the supported
//! language allow-list.

/// Languages the product ships translations for.
pub const SUPPORTED_LANGUAGES: [&str; 6] = ["tr", "en", "de", "ru", "ar", "zh"];

/// Fallback when the locale is missing or unsupported.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Primary subtag of a locale string, before any region or encoding
/// suffix: "en-US" -> "en", "de_DE.UTF-8" -> "de".
pub fn primary_subtag(locale: &str) -> &str {
    locale
        .split(|c: char| matches!(c, '-' | '_' | '.'))
        .next()
        .unwrap_or(locale)
}

/// Map a raw locale string to a supported language code, defaulting to
/// [`DEFAULT_LANGUAGE`] when the locale is absent or not in the
/// supported set.
pub fn supported_language(locale: Option<&str>) -> String {
    let Some(raw) = locale else {
        return DEFAULT_LANGUAGE.to_string();
    };

    let subtag = primary_subtag(raw).to_ascii_lowercase();
    if SUPPORTED_LANGUAGES.contains(&subtag.as_str()) {
        subtag
    } else {
        DEFAULT_LANGUAGE.to_string()
    }
}
