//! Startup configuration of the designer.
//!
//! The frontend reads the raw values from the page (`<html lang>`, the CSRF
//! input or cookie, attributes of the mount element) and hands them to
//! [`DesignerConfig::from_sources`], which owns all the parsing.

use log::LevelFilter;
use percent_encoding::percent_decode_str;

use crate::i18n::Lang;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignerConfig {
    pub lang: Lang,
    /// Path prefix for every request, e.g. `/ar`.
    pub lang_prefix: String,
    pub csrf_token: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self::from_sources(None, None, None, None)
    }
}

impl DesignerConfig {
    /// `csrf_field` is the value of the hidden `csrfmiddlewaretoken` input and
    /// wins over the `csrftoken` entry of `cookies`.
    pub fn from_sources(
        document_lang: Option<&str>,
        csrf_field: Option<&str>,
        cookies: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let tag = document_lang.unwrap_or("en");
        let csrf_token = csrf_field
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .or_else(|| cookies.and_then(|c| cookie_value(c, CSRF_COOKIE)));
        Self {
            lang: Lang::from_tag(tag),
            lang_prefix: lang_prefix(tag),
            csrf_token,
            log_level: parse_log_level(log_level),
        }
    }
}

/// `/` followed by the primary subtag of the page language, `/en` if none.
pub fn lang_prefix(tag: &str) -> String {
    let primary = tag
        .split(['-', '_'])
        .next()
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or_else(|| "en".to_string());
    format!("/{}", primary)
}

/// Looks `name` up in a `document.cookie` string and percent-decodes it.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_uses_primary_language_subtag() {
        assert_eq!(lang_prefix("ar"), "/ar");
        assert_eq!(lang_prefix("en-US"), "/en");
        assert_eq!(lang_prefix("AR_jo"), "/ar");
        assert_eq!(lang_prefix(""), "/en");
    }

    #[test]
    fn csrf_field_wins_over_cookie() {
        let config = DesignerConfig::from_sources(
            Some("ar"),
            Some("from-field"),
            Some("csrftoken=from-cookie"),
            None,
        );
        assert_eq!(config.csrf_token.as_deref(), Some("from-field"));
        assert_eq!(config.lang, Lang::Ar);
        assert_eq!(config.lang_prefix, "/ar");
    }

    #[test]
    fn csrf_falls_back_to_cookie() {
        let config = DesignerConfig::from_sources(
            None,
            Some(""),
            Some("sessionid=abc; csrftoken=a%2Bb; theme=dark"),
            Some("debug"),
        );
        assert_eq!(config.csrf_token.as_deref(), Some("a+b"));
        assert_eq!(config.lang, Lang::En);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn cookie_lookup_requires_exact_name() {
        assert_eq!(cookie_value("xcsrftoken=1", CSRF_COOKIE), None);
        assert_eq!(cookie_value("", CSRF_COOKIE), None);
        assert_eq!(cookie_value("csrftoken=%zz", CSRF_COOKIE).as_deref(), Some("%zz"));
    }

    #[test]
    fn cookie_value_decodes_multibyte_sequences() {
        assert_eq!(
            cookie_value("theme=dark; csrftoken=%D8%B4%20x", CSRF_COOKIE).as_deref(),
            Some("ش x")
        );
        assert_eq!(cookie_value("csrftoken=%FF", CSRF_COOKIE).as_deref(), Some("\u{FFFD}"));
    }

    #[test]
    fn unknown_log_level_defaults_to_info() {
        assert_eq!(parse_log_level(Some("verbose")), LevelFilter::Info);
        assert_eq!(parse_log_level(None), LevelFilter::Info);
        assert_eq!(parse_log_level(Some("warn")), LevelFilter::Warn);
    }
}
