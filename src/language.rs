//! Language tags and choice of the language to display an address in.

use crate::models::Rule;

const SUBTAG_SEPARATOR: char = '-';
const ALTERNATIVE_SUBTAG_SEPARATOR: char = '_';
const LATIN_SCRIPT_SUFFIX: &str = "-Latn";

/// A BCP-47 language tag split into the parts address display cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Full tag with `-` separators, e.g. "zh-Hant-HK"
    pub tag: String,
    /// Lowercase base language, e.g. "zh"
    pub base: String,
    /// True when the second or third subtag is the Latin script
    pub has_latin_script: bool,
}

impl Language {
    pub fn new(tag: &str) -> Self {
        let tag = tag.replace(ALTERNATIVE_SUBTAG_SEPARATOR, "-");
        let lowercase = tag.to_lowercase();
        let subtags: Vec<&str> = lowercase.split(SUBTAG_SEPARATOR).collect();

        let base = subtags.first().copied().unwrap_or_default().to_string();
        let has_latin_script = subtags.iter().skip(1).take(2).any(|s| *s == "latn");

        Self {
            tag,
            base,
            has_latin_script,
        }
    }
}

/// Choose the language an address in the region of `region_rule` should be
/// displayed in, given the user's preferred language.
pub fn choose_best_address_language(region_rule: &Rule, ui_language: &Language) -> Language {
    let available: Vec<Language> = region_rule.languages.iter().map(|l| Language::new(l)).collect();

    let Some(first) = available.first() else {
        return ui_language.clone();
    };

    if ui_language.tag.is_empty() {
        return first.clone();
    }

    let has_latin_format = !region_rule.latin_format.is_empty();
    let latin_script_language = || Language::new(&format!("{}{}", first.base, LATIN_SCRIPT_SUFFIX));

    if has_latin_format && ui_language.has_latin_script {
        return latin_script_language();
    }

    // No region offers one base language in two scripts, so the base is enough.
    if let Some(lang) = available.iter().find(|l| l.base == ui_language.base) {
        return lang.clone();
    }

    if has_latin_format {
        latin_script_language()
    } else {
        first.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(languages: &[&str], latin_format: &str) -> Rule {
        Rule {
            languages: languages.iter().map(|l| l.to_string()).collect(),
            latin_format: latin_format.to_string(),
            ..Rule::default()
        }
    }

    #[test]
    fn test_language_parsing() {
        let lang = Language::new("zh_Latn_CN");
        assert_eq!(lang.tag, "zh-Latn-CN");
        assert_eq!(lang.base, "zh");
        assert!(lang.has_latin_script);

        let lang = Language::new("sr-RS-Latn");
        assert!(lang.has_latin_script);

        let lang = Language::new("en-US-x-latn");
        assert!(!lang.has_latin_script);

        let lang = Language::new("");
        assert!(lang.base.is_empty());
    }

    #[test]
    fn test_no_region_languages_keeps_ui_language() {
        let ui = Language::new("fr");
        assert_eq!(choose_best_address_language(&rule(&[], ""), &ui), ui);
    }

    #[test]
    fn test_empty_ui_language_takes_first() {
        let ch = rule(&["de", "fr", "it"], "");
        let chosen = choose_best_address_language(&ch, &Language::new(""));
        assert_eq!(chosen.tag, "de");
    }

    #[test]
    fn test_base_match() {
        let chosen =
            choose_best_address_language(&rule(&["de", "fr", "it"], ""), &Language::new("fr-CH"));
        assert_eq!(chosen.tag, "fr");
    }

    #[test]
    fn test_latin_script_request() {
        let cn = rule(&["zh-Hans"], "%N%n%A");
        let chosen = choose_best_address_language(&cn, &Language::new("zh-Latn"));
        assert_eq!(chosen.tag, "zh-Latn");

        // Unrelated language falls back to the Latin rendering when one exists
        let chosen = choose_best_address_language(&cn, &Language::new("en"));
        assert_eq!(chosen.tag, "zh-Latn");
    }

    #[test]
    fn test_fallback_to_first() {
        let chosen = choose_best_address_language(&rule(&["ko"], ""), &Language::new("en"));
        assert_eq!(chosen.tag, "ko");
    }
}
