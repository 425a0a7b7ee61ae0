mod interfaces;
mod engine;
mod normalizer;
pub mod i18n;
pub(crate) mod string_util;

/// There are several places where the same `From` boilerplate is needed
/// for every primitive integer, a macro names it once.
mod macros;

#[cfg(test)]
mod tests;

pub use engine::LibPhoneNumber;
pub use interfaces::{NumberingPlan, RegionDataSource};
pub use normalizer::{
    errors::{ParseError, VariantRejection},
    normalize, normalize_first,
    normalizer::PhoneNumberNormalizer,
    policy::CascadePolicy,
    raw_input::RawInput,
    PhoneNumberFormat, PHONE_NUMBER_NORMALIZER,
};
