use super::helper_constants::{MAX_FORMATTED_LEN, MIN_INPUT_LEN};

/// Knobs of the variant cascade. The defaults reproduce the behaviour
/// documented on [`PhoneNumberNormalizer::normalize`](crate::PhoneNumberNormalizer::normalize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadePolicy {
    /// Also try every space separated piece of the input as a candidate.
    pub split_on_whitespace: bool,
    /// Pass the implied region to the numbering plan when parsing, so numbers
    /// without a '+' can parse as national numbers of that region. Off by
    /// default: such numbers are then only completed through the dialing
    /// prefix variants, and "40773818041" stays a Romanian number instead of
    /// becoming an implausible national number of the implied region.
    pub parse_with_region_hint: bool,
    /// Renderings longer than this are discarded.
    pub max_formatted_len: usize,
    /// Inputs shorter than this (in chars) return nothing.
    pub min_input_len: usize,
}

impl Default for CascadePolicy {
    fn default() -> Self {
        Self {
            split_on_whitespace: true,
            parse_with_region_hint: false,
            max_formatted_len: MAX_FORMATTED_LEN,
            min_input_len: MIN_INPUT_LEN,
        }
    }
}

impl CascadePolicy {
    pub fn with_split_on_whitespace(mut self, split_on_whitespace: bool) -> Self {
        self.split_on_whitespace = split_on_whitespace;
        self
    }

    pub fn with_region_hint(mut self, parse_with_region_hint: bool) -> Self {
        self.parse_with_region_hint = parse_with_region_hint;
        self
    }

    pub fn with_max_formatted_len(mut self, max_formatted_len: usize) -> Self {
        self.max_formatted_len = max_formatted_len;
        self
    }

    pub fn with_min_input_len(mut self, min_input_len: usize) -> Self {
        self.min_input_len = min_input_len;
        self
    }
}
