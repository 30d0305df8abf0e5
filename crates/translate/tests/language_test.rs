use batchform_core::errors::FormError;
use batchform_translate::{Language, LanguageSelection};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_switcher_order() {
    let codes: Vec<&str> = Language::all().iter().map(|l| l.code()).collect();

    assert_eq!(codes, vec!["en", "ar", "fr", "es", "fa", "ru", "pt", "zh-CN", "id", "ms", "ha"]);
    assert_eq!(Language::included_codes(), "en,ar,fr,es,fa,ru,pt,zh-CN,id,ms,ha");
}

#[rstest]
#[case(Language::English, "/en/en")]
#[case(Language::Chinese, "/en/zh-CN")]
#[case(Language::Hausa, "/en/ha")]
fn test_cookie_value(#[case] language: Language, #[case] expected: &str) {
    assert_eq!(language.cookie_value(), expected);
}

#[test]
fn test_codes_round_trip() {
    for language in Language::all() {
        assert_eq!(Language::from_code(language.code()), Some(*language));
    }
}

#[test]
fn test_names() {
    assert_eq!(Language::Persian.name(), "Persian");
    assert_eq!(Language::Persian.local_name(), "فارسی");
    assert_eq!(Language::Malay.local_name(), "Bahasa Melayu");
}

#[test]
fn test_unknown_code() {
    let err = "de".parse::<Language>().unwrap_err();

    assert!(matches!(err, FormError::UnsupportedLanguage(ref code) if code == "de"));
    assert_eq!(err.to_string(), "Unsupported language: de");
}

#[test]
fn test_selection() {
    let mut selection = LanguageSelection::default();
    assert_eq!(selection.current(), Language::English);

    assert_eq!(selection.set_code("fr").unwrap(), Language::French);
    assert!(selection.set_code("xx").is_err());
    assert_eq!(selection.current(), Language::French);

    selection.set(Language::Arabic);
    assert_eq!(selection.current(), Language::Arabic);
}
