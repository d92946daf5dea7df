//! Input validators and text helpers used on dialog results.

use dialogkit::{palette, text, validate};

#[test]
fn email_accepts_common_addresses() {
    for input in ["ada@example.com", "first.last+tag@mail.co.uk"] {
        assert!(validate::is_email_valid(input), "{}", input);
    }
    for input in ["", "ada", "ada@", "@example.com", "ada@example"] {
        assert!(!validate::is_email_valid(input), "{}", input);
    }
}

#[test]
fn url_accepts_hosts_ips_and_localhost() {
    for input in [
        "https://example.com",
        "http://192.168.0.1:8080/status",
        "http://localhost:3000",
    ] {
        assert!(validate::is_url_valid(input), "{}", input);
    }
    assert!(!validate::is_url_valid("not a url"));
}

#[test]
fn numeric_accepts_signed_decimals() {
    assert!(validate::is_numeric("42"));
    assert!(validate::is_numeric("-3.5"));
    assert!(!validate::is_numeric("3."));
    assert!(!validate::is_numeric("1e5"));
}

#[test]
fn phone_rejects_letters() {
    assert!(!validate::is_phone_valid("call me"));
}

#[test]
fn text_helpers_tidy_entered_text() {
    assert_eq!(text::truncate("dialogkit", 6), "dialog");
    assert_eq!(text::remove_whitespace(" a b\tc "), "abc");
    assert_eq!(text::count_occurrences("banana", "an"), 2);
    assert_eq!(text::camel_to_snake_case("singleSelectList"), "single_select_list");
}

#[test]
fn palette_colour_is_stable_per_label() {
    let first = palette::color_for("Ada");
    assert_eq!(first, palette::color_for("Ada"));
    assert!(palette::colors().contains(&first));
}
