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

use std::{iter, panic};

use log::warn;
use phonenumber::{
    Mode, PhoneNumber, country,
    metadata::{DATABASE, Descriptors},
};

use crate::{
    NumberingPlan, RegionDataSource,
    i18n::RegionCode,
    normalizer::{PhoneNumberFormat, errors::ParseError},
};

/// Numbering plan and region data backed by the `phonenumber` crate and the
/// libphonenumber metadata it bundles.
///
/// Parser panics on malformed variants are caught and count as parse
/// failures. They still go through the process panic hook, so callers that
/// feed untrusted input and want a quiet stderr should install their own
/// hook with [`std::panic::set_hook`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LibPhoneNumber;

impl From<PhoneNumberFormat> for Mode {
    fn from(format: PhoneNumberFormat) -> Self {
        match format {
            PhoneNumberFormat::E164 => Mode::E164,
            PhoneNumberFormat::International => Mode::International,
            PhoneNumberFormat::National => Mode::National,
            PhoneNumberFormat::RFC3966 => Mode::Rfc3966,
        }
    }
}

impl NumberingPlan for LibPhoneNumber {
    type Number = PhoneNumber;

    fn parse(&self, text: &str, region_hint: Option<&str>) -> Result<PhoneNumber, ParseError> {
        let hint = region_hint
            .and_then(|region| RegionCode::normalize(region).parse::<country::Id>().ok());

        // The parser has some unwraps on malformed input, a panic must only
        // cost this variant. The panic hook still runs, so the default hook
        // reports it on stderr.
        match panic::catch_unwind(move || phonenumber::parse(hint, text)) {
            Ok(Ok(number)) => Ok(number),
            Ok(Err(err)) => Err(ParseError::NotANumber(err.to_string())),
            Err(_) => {
                warn!("phonenumber panicked while parsing '{text}'");
                Err(ParseError::EnginePanicked)
            }
        }
    }

    /// A number is possible when its national significant number has one of
    /// the lengths its region lists for any number type, local-only lengths
    /// included.
    fn is_possible(&self, number: &PhoneNumber) -> bool {
        let Some(metadata) = number.metadata(&DATABASE) else {
            return false;
        };
        let national = number.national();
        let national_len =
            national.zeros() as usize + itoa::Buffer::new().format(national.value()).len();
        possible_lengths(metadata.descriptors()).any(|len| len as usize == national_len)
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn format(&self, number: &PhoneNumber, format: PhoneNumberFormat) -> String {
        number.format().mode(format.into()).to_string()
    }
}

impl RegionDataSource for LibPhoneNumber {
    fn dialing_code_for_region(&self, region: &str) -> Option<u16> {
        DATABASE
            .by_id(region)
            .map(|metadata| metadata.country_code())
    }
}

/// Lengths of every number type of a region. The bundled metadata leaves
/// the general descriptor's lists empty, libphonenumber derives them as this
/// same union.
fn possible_lengths(descriptors: &Descriptors) -> impl Iterator<Item = u16> + '_ {
    let by_type = [
        descriptors.fixed_line(),
        descriptors.mobile(),
        descriptors.toll_free(),
        descriptors.premium_rate(),
        descriptors.shared_cost(),
        descriptors.personal_number(),
        descriptors.voip(),
        descriptors.pager(),
        descriptors.uan(),
        descriptors.voicemail(),
    ];
    iter::once(descriptors.general())
        .chain(by_type.into_iter().flatten())
        .flat_map(|descriptor| {
            descriptor
                .possible_length()
                .iter()
                .chain(descriptor.possible_local_length())
                .copied()
        })
}
