use crate::normalizer::{PhoneNumberFormat, errors::ParseError};

/// Numbering plan API used to isolate the underlying libphonenumber
/// implementation from the normalization cascade and allow different
/// implementations (or fixed test data) to be swapped in easily.
pub trait NumberingPlan {
    /// Parsed representation of a phone number.
    type Number;

    /// Parses `text` into a number. `region_hint` is the region a number
    /// without a leading plus sign is assumed to belong to; `None` means such
    /// numbers must fail to parse.
    fn parse(&self, text: &str, region_hint: Option<&str>) -> Result<Self::Number, ParseError>;

    /// Returns whether the number has a possible length for its plan,
    /// local-only lengths included.
    fn is_possible(&self, number: &Self::Number) -> bool;

    /// Returns whether the number passes the full numbering plan check.
    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Renders the number in the given format.
    fn format(&self, number: &Self::Number, format: PhoneNumberFormat) -> String;
}

/// Source of country calling codes.
pub trait RegionDataSource {
    /// Returns the calling code of an upper-cased two-letter region code,
    /// `None` when the region is unknown.
    fn dialing_code_for_region(&self, region: &str) -> Option<u16>;
}
