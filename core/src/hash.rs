//! Hash related utils.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha1::Digest;
use sha1::Sha1;

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

fn sha1(content: &[u8]) -> Vec<u8> {
    Sha1::digest(content).to_vec()
}

/// Base64 encoded SHA1 hash.
pub fn base64_sha1(content: &[u8]) -> String {
    base64_encode(&sha1(content))
}

fn hmac_sha1(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha1>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// Base64 encoded HMAC with SHA1 hash.
pub fn base64_hmac_sha1(key: &[u8], content: &[u8]) -> String {
    base64_encode(&hmac_sha1(key, content))
}
