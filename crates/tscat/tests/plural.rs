//! Integration tests for plural form selection

use std::thread;

use tscat::{plural_category, plural_form_count, plural_index};

#[test]
fn test_chinese_has_one_form() {
    assert_eq!(plural_form_count("zh_CN"), 1);
    for n in [0, 1, 2, 5, 21, 100, 1_000_000, -7] {
        assert_eq!(plural_index("zh_CN", n), 0, "n = {n}");
    }
}

#[test]
fn test_english_forms() {
    assert_eq!(plural_form_count("en"), 2);
    assert_eq!(plural_index("en", 1), 0);
    assert_eq!(plural_index("en", 0), 1);
    assert_eq!(plural_index("en", 2), 1);
    assert_eq!(plural_index("en", 101), 1);
}

#[test]
fn test_russian_forms() {
    assert_eq!(plural_form_count("ru"), 3);
    assert_eq!(plural_index("ru", 1), 0);
    assert_eq!(plural_index("ru", 21), 0);
    assert_eq!(plural_index("ru", 2), 1);
    assert_eq!(plural_index("ru", 24), 1);
    assert_eq!(plural_index("ru", 0), 2);
    assert_eq!(plural_index("ru", 5), 2);
    assert_eq!(plural_index("ru", 11), 2);
    assert_eq!(plural_index("ru", 12), 2);
}

#[test]
fn test_arabic_uses_six_forms() {
    assert_eq!(plural_form_count("ar"), 6);
    assert_eq!(plural_index("ar", 0), 0);
    assert_eq!(plural_index("ar", 1), 1);
    assert_eq!(plural_index("ar", 2), 2);
    assert_eq!(plural_index("ar", 3), 3);
    assert_eq!(plural_index("ar", 11), 4);
    assert_eq!(plural_index("ar", 100), 5);
}

#[test]
fn test_languages_without_plurals() {
    for lang in ["ja", "ko", "th", "vi"] {
        assert_eq!(plural_form_count(lang), 1, "{lang}");
    }
}

#[test]
fn test_negative_quantities_use_absolute_value() {
    assert_eq!(plural_index("en", -1), plural_index("en", 1));
    assert_eq!(plural_index("ru", -3), plural_index("ru", 3));
    assert_eq!(plural_category("ru", -5), "many");
}

#[test]
fn test_tag_spellings() {
    assert_eq!(plural_form_count("zh-Hans-CN"), 1);
    assert_eq!(plural_form_count("ZH"), 1);
    assert_eq!(plural_form_count("pt_BR"), 2);
    assert_eq!(plural_index("ru_RU", 3), 1);
}

#[test]
fn test_unknown_language_uses_english_rules() {
    assert_eq!(plural_form_count("tlh"), 2);
    assert_eq!(plural_category("tlh", 1), "one");
    assert_eq!(plural_index("", 7), 1);
}

#[test]
fn test_categories() {
    assert_eq!(plural_category("en", 1), "one");
    assert_eq!(plural_category("en", 5), "other");
    assert_eq!(plural_category("zh_CN", 1), "other");
    assert_eq!(plural_category("ar", 0), "zero");
    assert_eq!(plural_category("ar", 2), "two");
    assert_eq!(plural_category("pl", 3), "few");
}

#[test]
fn test_rules_are_available_on_other_threads() {
    let handle = thread::spawn(|| plural_index("ru", 3));
    assert_eq!(handle.join().unwrap(), 1);
}
