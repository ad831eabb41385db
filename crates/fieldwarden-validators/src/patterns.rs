//! Pre-compiled patterns shared by the built-in rules.

use regex::Regex;
use std::sync::LazyLock;

// Loose address shape: something@something.something with no whitespace and
// exactly one '@'. Deliverability is not the concern here.
pub(crate) static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Characters allowed anywhere in a phone number.
pub(crate) static PHONE_CHARS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[0-9\s\-+()]+$").expect("PHONE_CHARS_REGEX: invalid regex pattern")
});
