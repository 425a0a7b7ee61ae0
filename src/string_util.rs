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

/// Returns the part of `s` before the first `delimiter`, or the whole
/// string if the delimiter is absent.
pub fn truncate_at(s: &str, delimiter: char) -> &str {
    s.split_once(delimiter).map_or(s, |(head, _)| head)
}

/// Skips the first `count` chars of `s`. Returns an empty slice when the
/// string is shorter than that.
pub fn skip_chars(s: &str, count: usize) -> &str {
    s.char_indices()
        .nth(count)
        .map_or("", |(idx, _)| &s[idx..])
}

#[cfg(test)]
mod tests {
    use crate::string_util::{skip_chars, truncate_at};

    #[test]
    fn test_truncate_at() {
        assert_eq!(truncate_at("+97144220125#40", '#'), "+97144220125");
        assert_eq!(truncate_at("+97144220125:40:1", ':'), "+97144220125");
        assert_eq!(truncate_at("+97144220125", '#'), "+97144220125");
        assert_eq!(truncate_at("#40", '#'), "");
    }

    #[test]
    fn test_skip_chars() {
        assert_eq!(skip_chars("0501896203", 0), "0501896203");
        assert_eq!(skip_chars("0501896203", 1), "501896203");
        assert_eq!(skip_chars("00501896203", 2), "501896203");
        assert_eq!(skip_chars("0", 2), "");
        assert_eq!(skip_chars("", 1), "");
        assert_eq!(skip_chars("٠١٢", 1), "١٢");
    }
}
