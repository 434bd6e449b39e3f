//! HMAC-SHA512 secure hash computation and verification.
//!
//! The key schedule is computed once when the engine is built; every
//! signature clones the keyed state, so the engine is cheap to share.

use std::fmt;

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::ser::{Serialize, SerializeMap, Serializer};
use sha2::Sha512;
use subtle::ConstantTimeEq;

use super::errors::VnpayError;
use super::fields;
use super::params::{CanonicalString, ParameterSet};

type HmacSha512 = Hmac<Sha512>;

/// Signs and verifies canonical strings with the merchant's shared secret.
#[derive(Clone)]
pub struct SignatureEngine {
    mac: HmacSha512,
}

impl SignatureEngine {
    /// Creates an engine keyed by the shared hash secret.
    ///
    /// # Errors
    ///
    /// - `MissingCredential` if the secret is empty
    /// - `InvalidSigningKey` if the HMAC cannot be keyed
    pub fn new(secret: &SecretString) -> Result<Self, VnpayError> {
        let key = secret.expose_secret();
        if key.is_empty() {
            return Err(VnpayError::MissingCredential("hash_secret"));
        }

        let mac = HmacSha512::new_from_slice(key.as_bytes())
            .map_err(|_| VnpayError::InvalidSigningKey)?;

        Ok(Self { mac })
    }

    /// Computes the lowercase hex digest of the canonical string.
    pub fn sign(&self, canonical: &CanonicalString) -> String {
        hex::encode(self.digest(canonical))
    }

    /// Recomputes the digest and compares it with the candidate.
    ///
    /// The candidate is hex-decoded and compared in constant time, so an
    /// uppercase rendering of the same digest is accepted. Malformed hex
    /// is simply a mismatch.
    pub fn verify(&self, canonical: &CanonicalString, candidate: &str) -> bool {
        match hex::decode(candidate) {
            Ok(candidate) => constant_time_compare(&self.digest(canonical), &candidate),
            Err(_) => false,
        }
    }

    /// Canonicalizes and signs a parameter set.
    ///
    /// Any signature fields already present are discarded first; the hash
    /// never covers itself.
    pub fn sign_parameters(&self, mut params: ParameterSet) -> SignedPayload {
        params.take_signature();
        let canonical = params.canonicalize();
        let secure_hash = self.sign(&canonical);

        SignedPayload {
            params,
            canonical,
            secure_hash,
        }
    }

    fn digest(&self, canonical: &CanonicalString) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(canonical.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

impl fmt::Debug for SignatureEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureEngine").finish_non_exhaustive()
    }
}

/// Constant-time byte comparison; differing lengths never match.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// A parameter set together with its canonical form and secure hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    params: ParameterSet,
    canonical: CanonicalString,
    secure_hash: String,
}

impl SignedPayload {
    /// The signed fields, without the hash.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn canonical(&self) -> &CanonicalString {
        &self.canonical
    }

    pub fn secure_hash(&self) -> &str {
        &self.secure_hash
    }

    /// Query string in signing order with `vnp_SecureHash` appended last.
    pub fn to_query_string(&self) -> String {
        if self.canonical.as_str().is_empty() {
            format!("{}={}", fields::SECURE_HASH, self.secure_hash)
        } else {
            format!(
                "{}&{}={}",
                self.canonical, fields::SECURE_HASH, self.secure_hash
            )
        }
    }

    /// The signed fields plus `vnp_SecureHash`, as sent over the wire.
    pub fn to_parameter_set(&self) -> ParameterSet {
        self.params
            .clone()
            .with(fields::SECURE_HASH, &self.secure_hash)
    }
}

impl Serialize for SignedPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.params.len() + 1))?;
        for (key, value) in self.params.iter() {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(fields::SECURE_HASH, &self.secure_hash)?;
        map.end()
    }
}
