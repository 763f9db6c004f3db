use engage_core::hash::base64_encode;
use engage_core::hash::base64_sha1;
use rand::thread_rng;
use rand::Rng;
use rand::RngCore;

/// How `oauth_nonce` values are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NonceStyle {
    /// 32 random bytes, base64 encoded with every non-alphanumeric character removed.
    #[default]
    Random,
    /// SHA-1 of a random integer in `[0, 10000)`, base64 encoded with `/`, `=`, `_`
    /// and `+` removed.
    ///
    /// Only 10000 distinct values exist, keep this for peers that expect the
    /// digest-shaped nonce.
    Sha1Digest,
}

impl NonceStyle {
    /// Generate a fresh nonce.
    pub fn generate(self) -> String {
        let mut rng = thread_rng();
        match self {
            NonceStyle::Random => {
                let mut bs = [0u8; 32];
                rng.fill_bytes(&mut bs);
                base64_encode(&bs)
                    .chars()
                    .filter(char::is_ascii_alphanumeric)
                    .collect()
            }
            NonceStyle::Sha1Digest => sha1_digest_nonce(rng.gen_range(0..10000)),
        }
    }
}

/// Digest-shaped nonce for the given seed.
pub fn sha1_digest_nonce(seed: u32) -> String {
    base64_sha1(seed.to_string().as_bytes())
        .chars()
        .filter(|c| !matches!(c, '/' | '=' | '_' | '+'))
        .collect()
}
