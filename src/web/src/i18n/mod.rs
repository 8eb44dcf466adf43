use crate::common::default_handler::Assets;
use log::error;
use std::collections::HashMap;
use std::sync::Arc;

/// (lang_code, display_name)
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[("pt", "Português"), ("en", "English")];

const SUPPORTED_LANG_CODES: &[&str] = &["pt", "en"];

pub const DEFAULT_LANGUAGE: &str = "pt";

type Translations = Arc<HashMap<String, String>>;

pub struct I18nManager {
    translations: HashMap<String, Translations>,
}

impl Default for I18nManager {
    fn default() -> Self {
        Self::new()
    }
}

impl I18nManager {
    pub fn new() -> Self {
        let mut translations = HashMap::new();

        for &(lang, _) in SUPPORTED_LANGUAGES {
            translations.insert(lang.to_string(), Arc::new(Self::load(lang)));
        }

        I18nManager { translations }
    }

    fn load(lang: &str) -> HashMap<String, String> {
        let path = format!("i18n/{}.json", lang);

        let Some(file) = Assets::get(&path) else {
            error!("missing translation file: {}", path);
            return HashMap::new();
        };

        serde_json::from_slice(&file.data).unwrap_or_else(|e| {
            error!("invalid translation file {}: {}", path, e);
            HashMap::new()
        })
    }

    pub fn for_lang(&self, lang: &str) -> I18n {
        let lang_key = if self.translations.contains_key(lang) {
            lang
        } else {
            DEFAULT_LANGUAGE
        };

        let empty = || Arc::new(HashMap::new());

        let translations = self.translations.get(lang_key).cloned().unwrap_or_else(empty);
        let fallback = if lang_key != DEFAULT_LANGUAGE {
            self.translations.get(DEFAULT_LANGUAGE).cloned().unwrap_or_else(empty)
        } else {
            translations.clone()
        };

        I18n {
            translations,
            fallback,
            lang: lang_key.to_string(),
        }
    }

    pub fn is_supported_language(lang: &str) -> bool {
        SUPPORTED_LANG_CODES.contains(&lang)
    }
}

pub struct I18n {
    translations: Translations,
    fallback: Translations,
    pub lang: String,
}

impl I18n {
    /// Translated label, or the key itself when no language knows it.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map(|s| s.as_str())
            .unwrap_or(key)
    }
}

pub fn detect_language(accept_language: &str) -> String {
    for part in accept_language.split(',') {
        let lang = part.split(';').next().unwrap_or("").trim();
        let lang_prefix = lang.split('-').next().unwrap_or("").to_lowercase();
        if SUPPORTED_LANG_CODES.contains(&lang_prefix.as_str()) {
            return lang_prefix;
        }
    }
    DEFAULT_LANGUAGE.to_string()
}
