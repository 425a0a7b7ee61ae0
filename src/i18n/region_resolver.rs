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

use std::sync::Arc;

use dashmap::DashMap;
use log::trace;

use crate::{RegionDataSource, i18n::RegionCode, normalizer::helper_constants::PLUS_SIGN};

/// Resolves region codes into dialing codes and dialing prefixes.
///
/// The dialing code is not the same as the dialing prefix: the code is the
/// bare calling code (`971` for the UAE), the prefix is the code preceded by
/// '+' (`"+971"`). Prefixes are memoized per well-formed region code,
/// codes without a calling code included.
pub struct RegionResolver<R> {
    source: R,
    prefixes: DashMap<String, Option<Arc<str>>>,
}

impl<R: RegionDataSource> RegionResolver<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            prefixes: DashMap::new(),
        }
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    /// Gets the dialing code for the specified region, `None` if the region
    /// is unknown or has no calling code.
    pub fn dialing_code(&self, region: &str) -> Option<u16> {
        let region = RegionCode::normalize(region);
        if RegionCode::is_unknown(&region) {
            return None;
        }
        match self.source.dialing_code_for_region(&region) {
            Some(0) | None => {
                trace!("No dialing code for region '{region}'");
                None
            }
            code => code,
        }
    }

    /// Gets the dialing prefix for the specified region, e.g. `"+971"` for
    /// `"AE"`. `None` under the same conditions as [`Self::dialing_code`].
    pub fn dialing_prefix(&self, region: &str) -> Option<Arc<str>> {
        let region = RegionCode::normalize(region);
        // Only well-formed codes are memoized, the map stays bounded.
        if RegionCode::is_unknown(&region) {
            return None;
        }
        if let Some(prefix) = self.prefixes.get(&*region) {
            return prefix.value().clone();
        }

        let prefix = self.dialing_code(&region).map(|code| {
            let mut buf = itoa::Buffer::new();
            Arc::from(fast_cat::concat_str!(PLUS_SIGN, buf.format(code)))
        });
        self.prefixes
            .entry(region.into_owned())
            .or_insert(prefix)
            .value()
            .clone()
    }
}
