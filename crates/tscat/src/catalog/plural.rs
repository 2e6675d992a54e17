//! CLDR plural form resolution.
//!
//! A `.ts` plural message lists one `<numerusform>` per plural form of the
//! target language. The forms are ordered like CLDR categories (zero, one,
//! two, few, many, other), keeping only the categories a language selects for
//! whole quantities. Chinese has a single form, English has one/other,
//! Russian has one/few/many and Arabic uses all six.
//!
//! Categories that whole numbers only reach at millions (the French "many")
//! are not counted as forms; such quantities use the last form instead.
//!
//! Plural rules are cached per thread per language to avoid re-creating
//! `PluralRules` instances on every call. The cache is initialized lazily
//! on first access within each thread.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

/// Supported language codes for plural rule resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bg", "bn", "cs", "cy", "da", "de", "el", "en", "es", "fa", "fi", "fr", "ga", "he",
    "hi", "hu", "id", "it", "ja", "ko", "lt", "lv", "nb", "nl", "pl", "pt", "ro", "ru", "sk",
    "sl", "sv", "th", "tr", "uk", "vi", "zh",
];

/// CLDR category order used for numerus forms.
const CATEGORY_ORDER: [PluralCategory; 6] = [
    PluralCategory::Zero,
    PluralCategory::One,
    PluralCategory::Two,
    PluralCategory::Few,
    PluralCategory::Many,
    PluralCategory::Other,
];

/// Quantities below this bound decide which categories count as forms.
const FORM_SAMPLE_LIMIT: i64 = 1000;

struct LanguageRules {
    lang: &'static str,
    rules: PluralRules,
    forms: Vec<PluralCategory>,
}

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code.
    static PLURAL_RULES_CACHE: RefCell<Vec<LanguageRules>> = const { RefCell::new(Vec::new()) };
}

/// Normalize a language tag to a supported static string reference.
///
/// Accepts Qt (`zh_CN`) and BCP 47 (`zh-Hans-CN`) spellings. Returns the
/// canonical `&'static str` for the primary language, or `"en"` for
/// unrecognized codes.
fn normalize_lang(tag: &str) -> &'static str {
    let primary = tag.split(['_', '-']).next().unwrap_or(tag).to_ascii_lowercase();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == primary)
        .copied()
        .unwrap_or("en")
}

/// Build `PluralRules` for a normalized language code.
fn build_rules(lang: &'static str) -> PluralRules {
    let loc = match lang {
        "ar" => locale!("ar"),
        "bg" => locale!("bg"),
        "bn" => locale!("bn"),
        "cs" => locale!("cs"),
        "cy" => locale!("cy"),
        "da" => locale!("da"),
        "de" => locale!("de"),
        "el" => locale!("el"),
        "es" => locale!("es"),
        "fa" => locale!("fa"),
        "fi" => locale!("fi"),
        "fr" => locale!("fr"),
        "ga" => locale!("ga"),
        "he" => locale!("he"),
        "hi" => locale!("hi"),
        "hu" => locale!("hu"),
        "id" => locale!("id"),
        "it" => locale!("it"),
        "ja" => locale!("ja"),
        "ko" => locale!("ko"),
        "lt" => locale!("lt"),
        "lv" => locale!("lv"),
        "nb" => locale!("nb"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "pt" => locale!("pt"),
        "ro" => locale!("ro"),
        "ru" => locale!("ru"),
        "sk" => locale!("sk"),
        "sl" => locale!("sl"),
        "sv" => locale!("sv"),
        "th" => locale!("th"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "zh" => locale!("zh"),
        _ => locale!("en"),
    };
    PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
        .expect("locale should be supported")
}

/// Categories selected by whole quantities, in CLDR order.
fn numerus_forms(rules: &PluralRules) -> Vec<PluralCategory> {
    let mut seen = Vec::new();
    for n in 0..FORM_SAMPLE_LIMIT {
        let category = rules.category_for(n);
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    CATEGORY_ORDER
        .into_iter()
        .filter(|category| seen.contains(category))
        .collect()
}

/// Run `f` with the cached rules for a language tag.
fn with_rules<T>(tag: &str, f: impl FnOnce(&LanguageRules) -> T) -> T {
    let lang = normalize_lang(tag);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|entry| entry.lang == lang) {
            return f(entry);
        }
        let rules = build_rules(lang);
        let forms = numerus_forms(&rules);
        let entry = LanguageRules { lang, rules, forms };
        let result = f(&entry);
        cache.push(entry);
        result
    })
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Get the CLDR plural category for a number in a given language.
///
/// Returns one of: "zero", "one", "two", "few", "many", "other".
///
/// ```
/// use tscat::plural_category;
///
/// assert_eq!(plural_category("en", 1), "one");
/// assert_eq!(plural_category("ru_RU", 3), "few");
/// assert_eq!(plural_category("zh_CN", 1), "other");
/// ```
pub fn plural_category(lang: &str, n: i64) -> &'static str {
    with_rules(lang, |entry| category_str(entry.rules.category_for(n)))
}

/// Get the index of the numerus form used for `n` in a given language.
///
/// Negative quantities are categorized by their absolute value. Quantities
/// whose category is not one of the language's forms use the last form.
///
/// ```
/// use tscat::plural_index;
///
/// // Chinese has a single form.
/// assert_eq!(plural_index("zh_CN", 5), 0);
///
/// // English: "one" then "other".
/// assert_eq!(plural_index("en", 1), 0);
/// assert_eq!(plural_index("en", 0), 1);
///
/// // Russian: "one", "few", "many".
/// assert_eq!(plural_index("ru", 21), 0);
/// assert_eq!(plural_index("ru", 3), 1);
/// assert_eq!(plural_index("ru", 11), 2);
/// ```
pub fn plural_index(lang: &str, n: i64) -> usize {
    with_rules(lang, |entry| {
        let category = entry.rules.category_for(n);
        entry
            .forms
            .iter()
            .position(|&form| form == category)
            .unwrap_or_else(|| entry.forms.len().saturating_sub(1))
    })
}

/// Number of numerus forms a `.ts` plural message has in a given language.
///
/// ```
/// use tscat::plural_form_count;
///
/// assert_eq!(plural_form_count("zh_CN"), 1);
/// assert_eq!(plural_form_count("en_US"), 2);
/// assert_eq!(plural_form_count("ar"), 6);
/// ```
pub fn plural_form_count(lang: &str) -> usize {
    with_rules(lang, |entry| entry.forms.len())
}
