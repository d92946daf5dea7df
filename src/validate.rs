//! String validators for text-input outcomes.
//!
//! All checks are full-string matches. Callers run them on the text of a
//! positive text-input outcome; the dialog engine never validates.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("email pattern")
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+[0-9]+[\- .]*)?(\([0-9]+\)[\- .]*)?([0-9][0-9\- .]+[0-9])$")
        .expect("phone pattern")
});

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)^
        (https?://)?
        (
            ([a-z0-9]([a-z0-9\-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}
            |
            \d{1,3}(\.\d{1,3}){3}
            |
            localhost
        )
        (:\d{1,5})?
        ([/?\#]\S*)?
        $",
    )
    .expect("url pattern")
});

static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("numeric pattern"));

pub fn is_email_valid(input: &str) -> bool {
    EMAIL.is_match(input)
}

pub fn is_phone_valid(input: &str) -> bool {
    PHONE.is_match(input)
}

pub fn is_url_valid(input: &str) -> bool {
    URL.is_match(input)
}

/// Optional minus sign, digits, optional fractional part.
pub fn is_numeric(input: &str) -> bool {
    NUMERIC.is_match(input)
}
