use crate::domain::ports::LocaleSource;

/// Locale environment variables in POSIX precedence order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Reads the process environment's reported locale.
///
/// The "C" and "POSIX" pseudo-locales carry no language information and
/// are treated the same as an unset variable.
#[derive(Debug, Clone, Default)]
pub struct EnvLocaleSource;

impl LocaleSource for EnvLocaleSource {
    fn current_locale(&self) -> Option<String> {
        LOCALE_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty() && !matches!(value.as_str(), "C" | "POSIX"))
    }
}
