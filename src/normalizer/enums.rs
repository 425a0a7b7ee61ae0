// Copyright (C) 2009 The Libphonenumber Authors
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

use strum::EnumIter;

/// Defines the formats normalized numbers can be rendered in.
///
/// For example, the Google Switzerland office number would be:
/// - **INTERNATIONAL**: `+41 44 668 18 00`
/// - **NATIONAL**: `044 668 18 00`
/// - **E164**: `+41446681800` (international format without formatting)
/// - **RFC3966**: `tel:+41-44-668-18-00` (hyphen-separated with a "tel:" prefix)
///
/// Every rendering is subject to the normalizer's length cap, so the
/// separated formats drop long numbers that E.164 would still return.
#[derive(Debug, EnumIter, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// No spaces or symbols, always starting with a `+` followed by the
    /// country code. Example: `+41446681800`.
    #[default]
    E164,
    /// **International format.**
    /// Country code followed by the number grouped with spaces.
    /// Example: `+41 44 668 18 00`.
    International,
    /// **National format.**
    /// As dialed within the number's own country, including a national
    /// prefix where one is used. Example: `044 668 18 00`.
    National,
    /// **RFC3966 format.**
    /// Starts with "tel:" and uses hyphens as separators.
    /// Example: `tel:+41-44-668-18-00`.
    RFC3966,
}
