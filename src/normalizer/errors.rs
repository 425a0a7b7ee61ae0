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

use thiserror::Error;

/// Failure of a [`NumberingPlan`](crate::NumberingPlan) to parse a variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Not a number: {0}")]
    NotANumber(String),
    #[error("Numbering plan engine panicked while parsing")]
    EnginePanicked,
}

/// Why a single rewrite of the input was not accepted. Rejections are only
/// logged: a rejected variant contributes nothing to the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantRejection {
    #[error("{0}")]
    Unparseable(#[from] ParseError),
    #[error("Neither a possible nor a valid number")]
    Implausible,
    #[error("Formatted number is {len} chars long (max is {max})")]
    Oversize { len: usize, max: usize },
}
