use crate::AuthError;
use ed25519_dalek::{PublicKey, Signature, Verifier, SIGNATURE_LENGTH};

/// Checks that an interaction was signed by Discord. The signed message is the timestamp header
/// followed by the raw, untouched request body.
pub struct SignatureVerifier {
    public_key: PublicKey,
}

impl SignatureVerifier {
    pub fn new(public_key: PublicKey) -> SignatureVerifier {
        SignatureVerifier { public_key }
    }

    pub fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> Result<(), AuthError> {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        hex::decode_to_slice(signature, &mut bytes).map_err(bad_signature)?;

        let signature = Signature::try_from(&bytes[..]).map_err(bad_signature)?;

        let body_with_timestamp: Vec<u8> = timestamp
            .as_bytes()
            .iter()
            .copied()
            .chain(body.iter().copied())
            .collect();

        self.public_key
            .verify(&body_with_timestamp[..], &signature)
            .map_err(bad_signature)
    }
}

fn bad_signature<E: std::fmt::Display>(e: E) -> AuthError {
    AuthError::BadSignature(e.to_string().into_boxed_str())
}
