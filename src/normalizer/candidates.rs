use std::{borrow::Cow, sync::LazyLock};

use log::trace;
use regex::Regex;

use super::helper_constants::{ALTERNATION_SEPARATORS, WHITESPACE_SEPARATOR};

static ALTERNATION_SEPARATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ALTERNATION_SEPARATORS).unwrap());

/// Splits the raw input into the substrings tried as phone numbers: the
/// whole input, every piece between '/' or ',' and, if enabled, every piece
/// between spaces. Pieces overlap and may repeat, duplicates are dropped
/// later by content.
pub(super) fn split_candidates(raw: &str, split_on_whitespace: bool) -> Vec<&str> {
    let mut candidates = vec![raw];
    candidates.extend(ALTERNATION_SEPARATOR_PATTERN.split(raw));
    if split_on_whitespace {
        candidates.extend(raw.split(WHITESPACE_SEPARATOR));
    }
    candidates
}

/// Percent-decodes the candidate. Escapes that decode to invalid UTF-8 are
/// replaced with U+FFFD, the text around them survives.
pub(super) fn unquote(candidate: &str) -> Cow<'_, str> {
    match urlencoding::decode_binary(candidate.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(candidate),
        Cow::Owned(bytes) => match String::from_utf8(bytes) {
            Ok(decoded) => Cow::Owned(decoded),
            Err(err) => {
                trace!("Candidate '{candidate}' decodes to invalid UTF-8: {err}");
                Cow::Owned(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        },
    }
}

/// Keeps only the digits and '+' signs. Decimal digits of other scripts are
/// folded to ASCII first.
pub(super) fn clean_digits(candidate: &str) -> String {
    let folded = dec_from_char::normalize_decimals(candidate);
    folded
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}
