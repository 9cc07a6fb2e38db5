use crate::models::EntryId;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Characters changed to dashes before transliteration, per Google's
/// recommendation of dashes over underscores in URLs.
const DASH_CHARS: &[char] = &['.', ' ', ',', ';', '/', '\\', '_'];

/// Latin-1 supplement letters mapped to url-friendly ASCII. The title is
/// lowercased before this table is consulted, so only the lowercase range
/// needs entries. The division sign is deliberately unmapped and drops
/// out with the other unknown characters.
static SUBSTITUTIONS: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('\u{00B2}', "2"),
        ('\u{00B3}', "3"),
        ('\u{00D7}', "x"),
        ('\u{00DF}', "ss"),
        ('\u{00E0}', "a"),
        ('\u{00E1}', "a"),
        ('\u{00E2}', "a"),
        ('\u{00E3}', "a"),
        ('\u{00E4}', "a"),
        ('\u{00E5}', "a"),
        ('\u{00E6}', "ae"),
        ('\u{00E7}', "c"),
        ('\u{00E8}', "e"),
        ('\u{00E9}', "e"),
        ('\u{00EA}', "e"),
        ('\u{00EB}', "e"),
        ('\u{00EC}', "i"),
        ('\u{00ED}', "i"),
        ('\u{00EE}', "i"),
        ('\u{00EF}', "i"),
        ('\u{00F0}', "d"),
        ('\u{00F1}', "n"),
        ('\u{00F2}', "o"),
        ('\u{00F3}', "o"),
        ('\u{00F4}', "o"),
        ('\u{00F5}', "o"),
        ('\u{00F6}', "o"),
        ('\u{00F8}', "o"),
        ('\u{00F9}', "u"),
        ('\u{00FA}', "u"),
        ('\u{00FB}', "u"),
        ('\u{00FC}', "u"),
        ('\u{00FD}', "y"),
        ('\u{00FE}', "p"),
        ('\u{00FF}', "y"),
    ])
});

/// Builds the slug for an entry title.
///
/// Lowercases, folds punctuation and whitespace to dashes, transliterates
/// Latin-1 letters to ASCII, strips everything else, then collapses and
/// trims dashes. A missing, empty, or fully-stripped title falls back to
/// the entry id so every entry gets a non-empty slug.
///
/// Pure and deterministic: the same title always yields the same slug,
/// and re-running the builder on its own output is a no-op.
pub fn entry_slug(title: Option<&str>, fallback: &EntryId) -> String {
    let title = match title {
        Some(t) if !t.is_empty() => t,
        _ => return fallback.to_string(),
    };

    let mut folded = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if DASH_CHARS.contains(&c) {
            folded.push('-');
        } else if let Some(replacement) = SUBSTITUTIONS.get(&c) {
            folded.push_str(replacement);
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            folded.push(c);
        }
    }

    let mut slug = String::with_capacity(folded.len());
    for c in folded.chars() {
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }

    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug.to_owned()
    }
}

/// Checks a string against the slug character set: non-empty, lowercase
/// ASCII letters, digits, and dashes only.
pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
