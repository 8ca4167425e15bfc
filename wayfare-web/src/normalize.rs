//! Typographic punctuation folding.

use std::borrow::Cow;

/// Map a targeted code point to its ASCII stand-in.
fn ascii_replacement(ch: char) -> Option<&'static str> {
    match ch {
        '\u{2013}' | '\u{2014}' => Some("-"),
        '\u{2018}' | '\u{2019}' => Some("'"),
        '\u{201C}' | '\u{201D}' => Some("\""),
        '\u{2026}' => Some("..."),
        _ => None,
    }
}

/// Replace "smart" punctuation with ASCII equivalents.
///
/// Pure substitution: whitespace is left untouched, and input without any
/// targeted character is returned borrowed.
///
/// ```
/// use wayfare_web::normalize;
///
/// assert_eq!(normalize("Hanoi \u{2013} Halong\u{2026}"), "Hanoi - Halong...");
/// assert_eq!(normalize("plain"), "plain");
/// ```
pub fn normalize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| ascii_replacement(c).is_some()) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        match ascii_replacement(ch) {
            Some(rep) => out.push_str(rep),
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}
