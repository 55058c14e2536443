//! Artist name canonicalization.
//!
//! A canonical name is the deduplication key for a graph node. Two raw labels
//! that canonicalize to the same string are the same artist.
//!
//! The rule:
//!
//! 1. Trim leading/trailing whitespace.
//! 2. Collapse interior whitespace runs to a single space.
//! 3. Title-case each token: the first alphabetic character is uppercased,
//!    every later alphabetic character is lowercased.
//!
//! Non-letter characters pass through untouched, and non-ASCII letters are
//! kept as letters (`"moğollar"` becomes `"Moğollar"`, never `"Mogollar"`).
//!
//! # Dotted and dotless I
//!
//! Case changes follow Turkish pairing for the four I forms: `I` ↔ `ı` and
//! `İ` ↔ `i`. Everything else uses the Unicode default mapping. So
//! `"BARIŞ MANÇO"` and `"barış manço"` both become `"Barış Manço"`, and
//! `"FİKRET"` lowercases to plain `i` with no combining dot.

/// Canonicalize a raw artist label.
///
/// Total and pure: whitespace-only input yields an empty string, which the
/// aggregator rejects.
#[must_use]
pub fn canonicalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for (i, token) in raw.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_title_case(&mut out, token);
    }

    out
}

fn push_title_case(out: &mut String, token: &str) {
    let mut seen_letter = false;
    for ch in token.chars() {
        if !ch.is_alphabetic() {
            out.push(ch);
        } else if seen_letter {
            push_lower(out, ch);
        } else {
            seen_letter = true;
            push_upper(out, ch);
        }
    }
}

fn push_upper(out: &mut String, ch: char) {
    match ch {
        'i' => out.push('İ'),
        'ı' => out.push('I'),
        _ => out.extend(ch.to_uppercase()),
    }
}

fn push_lower(out: &mut String, ch: char) {
    match ch {
        'I' => out.push('ı'),
        'İ' => out.push('i'),
        _ => out.extend(ch.to_lowercase()),
    }
}
