use std::borrow::Cow;

use super::helper_constants::{
    ANNOTATION_SEPARATOR, DOUBLE_ZERO, EXTENSION_SEPARATOR, MAX_TRUNK_PREFIX_LEN, PLUS_SIGN,
};
use crate::string_util::{skip_chars, truncate_at};

/// Rewrites of a candidate that don't involve the implied region, in the
/// order they are tried:
///
/// 1. the candidate up to the first '#' (extension annotations);
/// 2. the candidate up to the first ':' (other annotations);
/// 3. the cleaned digits as is;
/// 4. the cleaned digits with a leading '+' (the user forgot it);
/// 5. if the cleaned digits start with "00", the rest after a '+' ("00" is
///    the usual international call prefix).
pub(super) fn without_dialing_prefix<'a>(candidate: &'a str, cleaned: &'a str) -> Vec<Cow<'a, str>> {
    let mut variants = Vec::with_capacity(5);
    variants.push(Cow::Borrowed(truncate_at(candidate, EXTENSION_SEPARATOR)));
    variants.push(Cow::Borrowed(truncate_at(candidate, ANNOTATION_SEPARATOR)));
    variants.push(Cow::Borrowed(cleaned));
    variants.push(Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, cleaned)));
    if let Some(international) = cleaned.strip_prefix(DOUBLE_ZERO) {
        variants.push(Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, international)));
    }
    variants
}

/// Rewrites of the cleaned digits completed with the region's dialing
/// prefix: the digits as is (a local number), without their first digit (a
/// trunk prefix such as "0") and without their first two digits. Generated
/// lazily so the caller can stop at the first one that validates.
pub(super) fn with_dialing_prefix<'a>(
    cleaned: &'a str,
    dialing_prefix: &'a str,
) -> impl Iterator<Item = String> + 'a {
    (0..=MAX_TRUNK_PREFIX_LEN)
        .map(move |trunk_len| fast_cat::concat_str!(dialing_prefix, skip_chars(cleaned, trunk_len)))
}
