// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Percent-encoding of variable values.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters to encode in a value: everything except the RFC 3986 unreserved set.
const VALUE_ENCODING_SET: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes the UTF-8 representation of `value` so that it can be inserted anywhere in a
/// URI as opaque data.
pub(crate) fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, VALUE_ENCODING_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_value_unreserved() {
        assert_eq!("", encode_value(""));
        assert_eq!("Wiesbaden", encode_value("Wiesbaden"));
        assert_eq!("1.2.0", encode_value("1.2.0"));
        assert_eq!("a-b_c~d", encode_value("a-b_c~d"));
    }

    #[test]
    fn test_encode_value_reserved() {
        assert_eq!("a%20b%2Fc", encode_value("a b/c"));
        assert_eq!("%3F%26%3D%23", encode_value("?&=#"));
        assert_eq!("%7Bx%7D", encode_value("{x}"));
        assert_eq!("100%25", encode_value("100%"));
        assert_eq!("a%2Bb", encode_value("a+b"));
    }

    #[test]
    fn test_encode_value_utf8() {
        assert_eq!("caf%C3%A9", encode_value("caf\u{00e9}"));
    }
}
