//! Small string helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel case pattern"));

/// First `max_chars` characters of `input`.
pub fn truncate(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &input[..byte_index],
        None => input,
    }
}

/// Non-overlapping occurrences of `needle`. An empty needle counts zero.
pub fn count_occurrences(input: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    input.matches(needle).count()
}

pub fn remove_whitespace(input: &str) -> String {
    input.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Upper-cases the first letter of every space-separated word.
pub fn to_title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `userName` -> `user_name`.
pub fn camel_to_snake_case(input: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(input, "${1}_${2}")
        .to_lowercase()
}

/// `ada@example.com` -> `ad...@example.com`.
pub fn mask_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let domain = email.rsplit('@').next().unwrap_or_default();
    format!("{}...@{}", truncate(local, 2), domain)
}
