pub(crate) mod helper_constants;
mod candidates;
mod variants;
mod result_set;
pub mod errors;
pub mod enums;
pub mod normalizer;
pub mod policy;
pub mod raw_input;

use std::sync::LazyLock;

pub use enums::PhoneNumberFormat;

use crate::{engine::LibPhoneNumber, normalizer::{normalizer::PhoneNumberNormalizer, raw_input::RawInput}};

pub static PHONE_NUMBER_NORMALIZER: LazyLock<PhoneNumberNormalizer<LibPhoneNumber, LibPhoneNumber>> =
    LazyLock::new(|| PhoneNumberNormalizer::default());

/// Formats/validates the specified phone number with the process-wide
/// libphonenumber backed normalizer. See [`PhoneNumberNormalizer::normalize`].
pub fn normalize<'a>(
    raw: impl Into<RawInput<'a>>,
    implied_region: &str,
    format: PhoneNumberFormat,
) -> Vec<String> {
    PHONE_NUMBER_NORMALIZER.normalize(raw, implied_region, format)
}

/// First number [`normalize`] finds, if any.
pub fn normalize_first<'a>(
    raw: impl Into<RawInput<'a>>,
    implied_region: &str,
    format: PhoneNumberFormat,
) -> Option<String> {
    PHONE_NUMBER_NORMALIZER.normalize_first(raw, implied_region, format)
}
