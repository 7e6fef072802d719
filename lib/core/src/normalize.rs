//! Normalization of exact-match contact signals
//!
//! Phone numbers and website URLs arrive in many surface forms; both sides
//! of an exact-signal comparison must go through the same normalization.

/// Reduce a phone number to its digits.
///
/// `"081-234-5678"` and `"0812345678"` normalize equal. An empty result
/// means the value carries no usable phone signal.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize a website URL for exact comparison.
///
/// Lowercases, strips the `http://`/`https://` scheme, a leading `www.`,
/// and a trailing slash. `"http://beachcamp.com"` and
/// `"https://www.beachcamp.com/"` normalize equal.
pub fn normalize_website(website: &str) -> String {
    let mut url = website.trim().to_lowercase();
    for scheme in ["https://", "http://"] {
        if let Some(rest) = url.strip_prefix(scheme) {
            url = rest.to_string();
            break;
        }
    }
    if let Some(rest) = url.strip_prefix("www.") {
        url = rest.to_string();
    }
    url.trim_end_matches('/').to_string()
}
