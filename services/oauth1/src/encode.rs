use percent_encoding::percent_decode_str;
use percent_encoding::utf8_percent_encode;

use crate::constants::OAUTH_ENCODE_SET;

/// Percent-encode `input` for use in OAuth signatures and headers.
///
/// Hex digits are uppercase. `escape("a b!*()'")` gives `a%20b%21%2A%28%29%27`.
pub fn escape(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}

/// Reverse of [`escape`]. Invalid UTF-8 sequences are replaced.
pub fn unescape(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
