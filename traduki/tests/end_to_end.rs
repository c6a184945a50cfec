//! End-to-end translation scenarios across the whole public API.

use traduki::{Dictionary, I18n};

fn test_service() -> I18n {
    let i18n = I18n::new();

    let en = Dictionary::new("en");
    en.add_all([
        ("hello-0", "Hello {0}"),
        ("welcome", "Welcome"),
        ("dashboard", "Dashboard"),
        ("goodbye", "Goodbye"),
        ("hello-0-world", "Hello {0} World"),
        ("item-count", "{count, plural, one {# item} other {# items}}"),
        (
            "message-count",
            "{count, plural, zero {no messages} one {# message} other {# messages}}",
        ),
    ]);
    i18n.register(en);

    let fr = Dictionary::new("fr");
    fr.add_all([
        ("hello-0", "Bonjour {0}"),
        ("welcome", "Bienvenue"),
        ("dashboard", "Tableau de bord"),
        ("hello-0-world", "Bonjour {0} Monde"),
        ("item-count", "{count, plural, one {# élément} other {# éléments}}"),
    ]);
    i18n.register(fr);

    i18n
}

#[test]
fn t_basic_translation() {
    let i18n = test_service();
    let greeting = i18n.t("hello-0", &[&"John"]);
    assert_eq!(greeting.resolve("en"), "Hello John");
    assert_eq!(greeting.resolve("fr"), "Bonjour John");
}

#[test]
fn t_falls_back_to_default_language() {
    let i18n = test_service();
    // French has no "goodbye"; the default-language (en) entry wins over
    // the raw key.
    assert_eq!(i18n.t("goodbye", &[]).resolve("fr"), "Goodbye");
}

#[test]
fn t_unknown_key_resolves_to_key() {
    let i18n = test_service();
    assert_eq!(
        i18n.t("nonexistent-key", &[&"arg"]).resolve("en"),
        "nonexistent-key"
    );
}

#[test]
fn t_unknown_locale_uses_default() {
    let i18n = test_service();
    assert_eq!(i18n.t("welcome", &[]).resolve("de"), "Welcome");
}

#[test]
fn t_without_args() {
    let i18n = test_service();
    let welcome = i18n.t("welcome", &[]);
    assert_eq!(welcome.resolve("en"), "Welcome");
    assert_eq!(welcome.resolve("fr"), "Bienvenue");
}

#[test]
fn t_multiple_args() {
    let i18n = test_service();
    i18n.dictionary("en").unwrap().add(
        "multi-args",
        "Hello {0}, you have {1} messages and {2} notifications",
    );
    i18n.dictionary("fr").unwrap().add(
        "multi-args",
        "Bonjour {0}, vous avez {1} messages et {2} notifications",
    );

    let msg = i18n.t("multi-args", &[&"John", &5, &3]);
    assert_eq!(
        msg.resolve("en"),
        "Hello John, you have 5 messages and 3 notifications"
    );
    assert_eq!(
        msg.resolve("fr"),
        "Bonjour John, vous avez 5 messages et 3 notifications"
    );
}

#[test]
fn f_derives_key_and_translates() {
    let i18n = test_service();
    let msg = i18n.f("Hello %s World", &[&"Beautiful"]);
    assert_eq!(msg.resolve("en"), "Hello Beautiful World");
    assert_eq!(msg.resolve("fr"), "Bonjour Beautiful Monde");
}

#[test]
fn f_without_entry_formats_source_text() {
    let i18n = test_service();
    // No dictionary entry: the normalized template is used directly, so
    // the result reproduces plain formatting of the input.
    let msg = i18n.f("Unknown %s format", &[&"test"]);
    assert_eq!(msg.resolve("en"), "Unknown test format");
}

#[test]
fn s_translates_static_text() {
    let i18n = test_service();
    let title = i18n.s("Dashboard");
    assert_eq!(title.resolve("en"), "Dashboard");
    assert_eq!(title.resolve("fr"), "Tableau de bord");
}

#[test]
fn s_miss_returns_original_text_not_key() {
    let i18n = test_service();
    let text = i18n.s("Unknown Text");
    // Not "unknown-text".
    assert_eq!(text.resolve("en"), "Unknown Text");
    assert_eq!(text.resolve("fr"), "Unknown Text");
}

#[test]
fn r_is_immediate() {
    let i18n = test_service();
    assert_eq!(i18n.r("en", "Dashboard"), "Dashboard");
    assert_eq!(i18n.r("fr", "Dashboard"), "Tableau de bord");
    assert_eq!(i18n.r("fr", "Unknown Text"), "Unknown Text");
}

#[test]
fn p_english_and_french_forms() {
    let i18n = test_service();

    assert_eq!(i18n.p("item-count", 1).resolve("en"), "1 item");
    assert_eq!(i18n.p("item-count", 5).resolve("en"), "5 items");
    assert_eq!(i18n.p("item-count", 1).resolve("fr"), "1 élément");
    assert_eq!(i18n.p("item-count", 5).resolve("fr"), "5 éléments");
}

#[test]
fn p_zero_category() {
    let i18n = test_service();
    assert_eq!(i18n.p("message-count", 0).resolve("en"), "no messages");
    assert_eq!(i18n.p("message-count", 1).resolve("en"), "1 message");
    assert_eq!(i18n.p("message-count", 3).resolve("en"), "3 messages");
}

#[test]
fn p_across_locale_families() {
    let i18n = test_service();
    i18n.dictionary("en").unwrap().add(
        "advanced-count",
        "{count, plural, zero {no items} one {# item} other {# items}}",
    );

    let ru = Dictionary::new("ru");
    ru.add(
        "advanced-count",
        "{count, plural, zero {нет элементов} one {# элемент} few {# элемента} many {# элементов}}",
    );
    i18n.register(ru);

    let ar = Dictionary::new("ar");
    ar.add(
        "advanced-count",
        "{count, plural, zero {لا عناصر} one {عنصر واحد} two {عنصران} few {# عناصر} many {# عنصر} other {# عنصر}}",
    );
    i18n.register(ar);

    let cases: [(&str, u64, &str); 20] = [
        ("en", 0, "no items"),
        ("en", 1, "1 item"),
        ("en", 2, "2 items"),
        ("en", 5, "5 items"),
        ("ru", 0, "нет элементов"),
        ("ru", 1, "1 элемент"),
        ("ru", 2, "2 элемента"),
        ("ru", 3, "3 элемента"),
        ("ru", 4, "4 элемента"),
        ("ru", 5, "5 элементов"),
        ("ru", 10, "10 элементов"),
        ("ar", 0, "لا عناصر"),
        ("ar", 1, "عنصر واحد"),
        ("ar", 2, "عنصران"),
        ("ar", 3, "3 عناصر"),
        ("ar", 5, "5 عناصر"),
        ("ar", 10, "10 عناصر"),
        ("ar", 11, "11 عنصر"),
        ("ar", 50, "50 عنصر"),
        ("ar", 100, "100 عنصر"),
    ];

    for (locale, count, expected) in cases {
        assert_eq!(
            i18n.p("advanced-count", count).resolve(locale),
            expected,
            "p(advanced-count, {count}) in {locale:?}"
        );
    }
}

#[test]
fn p_missing_category_falls_back_to_other() {
    let i18n = test_service();
    // Russian rules pick "few" for 2, but the en template has no "few";
    // the "other" form is used instead.
    assert_eq!(i18n.p("item-count", 2).resolve("ru"), "2 items");
}

#[test]
fn p_plain_template_uses_count_substitution() {
    let i18n = test_service();
    i18n.dictionary("en")
        .unwrap()
        .add("simple-count", "{count} things");
    assert_eq!(i18n.p("simple-count", 3).resolve("en"), "3 things");
}

#[test]
fn p_unknown_key_substitutes_into_key() {
    let i18n = test_service();
    assert_eq!(i18n.p("no-such-count", 2).resolve("en"), "no-such-count");
}
