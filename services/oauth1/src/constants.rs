use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used in oauth1 signing.
pub const OAUTH1_CONSUMER_KEY: &str = "OAUTH1_CONSUMER_KEY";
pub const OAUTH1_CONSUMER_SECRET: &str = "OAUTH1_CONSUMER_SECRET";
pub const OAUTH1_ACCESS_TOKEN: &str = "OAUTH1_ACCESS_TOKEN";
pub const OAUTH1_ACCESS_SECRET: &str = "OAUTH1_ACCESS_SECRET";

// Protocol parameter names.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_VERSION: &str = "oauth_version";

// Protocol parameter values.
pub const OAUTH_VERSION_1_0: &str = "1.0";
pub const HMAC_SHA1: &str = "HMAC-SHA1";
pub const AUTHORIZATION_SCHEME: &str = "OAuth";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const DEFAULT_USER_AGENT: &str = concat!("engage-oauth1/", env!("CARGO_PKG_VERSION"));

/// AsciiSet for [OAuth percent encoding](https://tools.ietf.org/html/rfc5849#section-3.6)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - Unlike URI component encoding this also encodes `!`, `*`, `(`, `)` and `'`.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
