// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::{debug, trace};

use super::{
    PhoneNumberFormat, candidates,
    errors::VariantRejection,
    policy::CascadePolicy,
    raw_input::RawInput,
    result_set::ResultSet,
    variants,
};
use crate::{LibPhoneNumber, NumberingPlan, RegionDataSource, i18n::RegionResolver};

/// Turns free-form phone number input into validated, formatted numbers.
pub struct PhoneNumberNormalizer<P, R> {
    /// Parses, validates and formats the generated variants.
    plan: P,

    /// Provides the dialing prefix of the implied region.
    regions: RegionResolver<R>,

    policy: CascadePolicy,
}

impl Default for PhoneNumberNormalizer<LibPhoneNumber, LibPhoneNumber> {
    fn default() -> Self {
        Self::new(LibPhoneNumber, LibPhoneNumber)
    }
}

impl<P: NumberingPlan, R: RegionDataSource> PhoneNumberNormalizer<P, R> {
    pub fn new(plan: P, regions: R) -> Self {
        Self {
            plan,
            regions: RegionResolver::new(regions),
            policy: CascadePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CascadePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn plan(&self) -> &P {
        &self.plan
    }

    pub fn regions(&self) -> &RegionResolver<R> {
        &self.regions
    }

    pub fn policy(&self) -> &CascadePolicy {
        &self.policy
    }

    /// Formats/validates the specified phone number.
    ///
    /// This method will parse almost anything: crazy characters in-between,
    /// comma separated values, percent-encoded input. It attempts everything
    /// it can to build valid phone numbers from the input and returns all of
    /// them in the order they were found.
    ///
    /// The strategy:
    ///
    ///   - Split the input by comma, slash and space, and try the whole input
    ///     and every piece.
    ///   - Attempt validation of the piece up to a '#' or ':' annotation.
    ///   - Remove everything except digits and '+', attempt validation as is,
    ///     with a leading '+' and with a leading "00" replaced by '+'.
    ///   - If none of these is valid and the digits are not already part of a
    ///     number found earlier, attempt validation with the region's dialing
    ///     prefix in front, then without the first digit and then without
    ///     the first two digits (leading zeros implying the local trunk
    ///     prefix).
    ///
    /// A variant is accepted when the numbering plan considers it possible
    /// or valid and its rendering fits the configured length cap. Inputs
    /// shorter than three chars return nothing.
    pub fn normalize<'a>(
        &self,
        raw: impl Into<RawInput<'a>>,
        implied_region: &str,
        format: PhoneNumberFormat,
    ) -> Vec<String> {
        let raw: RawInput<'a> = raw.into();
        let raw = raw.as_str();
        if raw.chars().count() < self.policy.min_input_len {
            trace!("Input '{raw}' is too short to be a phone number");
            return Vec::new();
        }

        let dialing_prefix = self.regions.dialing_prefix(implied_region);
        let dialing_prefix = dialing_prefix.as_deref().unwrap_or("");
        let region_hint = self.policy.parse_with_region_hint.then_some(implied_region);

        let mut found = ResultSet::new();
        for candidate in candidates::split_candidates(raw, self.policy.split_on_whitespace) {
            let unquoted = candidates::unquote(candidate);
            let cleaned = candidates::clean_digits(&unquoted);
            debug!("Trying candidate '{unquoted}' (digits '{cleaned}')");

            let direct = variants::without_dialing_prefix(&unquoted, &cleaned);
            if let Some(number) = self.first_valid(direct, region_hint, format) {
                found.insert(number);
                continue;
            }

            if found.subsumes(&cleaned) {
                trace!("Digits '{cleaned}' are part of a number found earlier");
                continue;
            }

            let completed = variants::with_dialing_prefix(&cleaned, dialing_prefix);
            if let Some(number) = self.first_valid(completed, region_hint, format) {
                found.insert(number);
            }
        }

        debug!(
            "Found {} number(s) in '{raw}' for region '{implied_region}'",
            found.len()
        );
        found.into_vec()
    }

    /// Returns the first number [`Self::normalize`] finds, if any.
    pub fn normalize_first<'a>(
        &self,
        raw: impl Into<RawInput<'a>>,
        implied_region: &str,
        format: PhoneNumberFormat,
    ) -> Option<String> {
        self.normalize(raw, implied_region, format).into_iter().next()
    }

    /// Formatted rendering of the first variant that is accepted. Variants
    /// are consumed lazily, the rest are never parsed.
    fn first_valid<I>(
        &self,
        variants: I,
        region_hint: Option<&str>,
        format: PhoneNumberFormat,
    ) -> Option<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        variants.into_iter().find_map(|variant| {
            let variant = variant.as_ref();
            match self.validate_variant(variant, region_hint, format) {
                Ok(number) => {
                    trace!("Variant '{variant}' accepted as '{number}'");
                    Some(number)
                }
                Err(rejection) => {
                    trace!("Variant '{variant}' rejected: {rejection}");
                    None
                }
            }
        })
    }

    fn validate_variant(
        &self,
        variant: &str,
        region_hint: Option<&str>,
        format: PhoneNumberFormat,
    ) -> Result<String, VariantRejection> {
        let number = self.plan.parse(variant, region_hint)?;
        if !self.plan.is_possible(&number) && !self.plan.is_valid(&number) {
            return Err(VariantRejection::Implausible);
        }

        let formatted = self.plan.format(&number, format);
        let len = formatted.chars().count();
        if len > self.policy.max_formatted_len {
            return Err(VariantRejection::Oversize {
                len,
                max: self.policy.max_formatted_len,
            });
        }
        Ok(formatted)
    }
}
