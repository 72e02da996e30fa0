pub mod env_locale;
