//! String format predicates used by the schema validator.

use uuid::{Uuid, Variant};

/// Pattern text reported when a park code is rejected.
pub const PARK_CODE_PATTERN: &str = "/^[a-z]{4}$/";
/// Pattern text reported when a phone number is rejected.
pub const PHONE_PATTERN: &str = "/^[0-9]{10,15}$/";
/// Pattern text reported when a numeric string is rejected.
pub const NUMERIC_PATTERN: &str = r"/^[+-]?(\d+(\.\d*)?|\.\d+)$/";

/// Checks that a park code is exactly 4 lowercase ASCII letters.
///
/// # Examples
///
/// ```
/// use trailhead_core::validation::is_valid_park_code;
///
/// assert!(is_valid_park_code("abcd"));
/// assert!(!is_valid_park_code("ABCD"));
/// assert!(!is_valid_park_code("abc"));
/// ```
pub fn is_valid_park_code(input: &str) -> bool {
    input.len() == 4 && input.bytes().all(|b| b.is_ascii_lowercase())
}

/// Checks for a hyphenated RFC 4122 version 4 UUID.
pub fn is_uuid_v4(input: &str) -> bool {
    if input.len() != 36 {
        return false;
    }
    match Uuid::try_parse(input) {
        Ok(uuid) => uuid.get_version_num() == 4 && uuid.get_variant() == Variant::RFC4122,
        Err(_) => false,
    }
}

/// Checks for an absolute URI with a scheme.
pub fn is_uri(input: &str) -> bool {
    !input.chars().any(char::is_whitespace) && url::Url::parse(input).is_ok()
}

/// Checks for a `local@domain.tld` email address.
pub fn is_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let tld = labels[labels.len() - 1];
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Checks for 10 to 15 ASCII digits.
pub fn is_phone_number(input: &str) -> bool {
    (10..=15).contains(&input.len()) && input.bytes().all(|b| b.is_ascii_digit())
}

/// Checks for a plain decimal number such as `-12`, `36.5` or `.5`.
pub fn is_numeric(input: &str) -> bool {
    let unsigned = input
        .strip_prefix('-')
        .or_else(|| input.strip_prefix('+'))
        .unwrap_or(input);

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match fraction {
        None => !whole.is_empty() && digits(whole),
        Some(fraction) => {
            !(whole.is_empty() && fraction.is_empty()) && digits(whole) && digits(fraction)
        }
    }
}
