use super::{AlgorithmName, HashAlgorithm};
use crate::error::{HttpSigError, HttpSigResult};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/* -------------------------------- */
/// Shared key for the `hmac` algorithm family. Holds the keyed-hash context
/// initialized once over the secret; each signing operation works on a clone
/// so the stored context is never consumed.
#[derive(Clone, Debug)]
pub enum SharedKey {
  HmacSha1(HmacSha1),
  HmacSha256(HmacSha256),
}

impl SharedKey {
  /// Initialize a keyed-hash context over `secret`. Any byte sequence is a
  /// valid hmac key.
  pub fn new(secret: &[u8], hash: HashAlgorithm) -> HttpSigResult<Self> {
    match hash {
      HashAlgorithm::Sha1 => {
        let mac = HmacSha1::new_from_slice(secret).map_err(|e| HttpSigError::InvalidKey(e.to_string()))?;
        Ok(SharedKey::HmacSha1(mac))
      }
      HashAlgorithm::Sha256 => {
        let mac = HmacSha256::new_from_slice(secret).map_err(|e| HttpSigError::InvalidKey(e.to_string()))?;
        Ok(SharedKey::HmacSha256(mac))
      }
      other => Err(HttpSigError::UnknownAlgorithm(format!("hmac-{other}"))),
    }
  }
}

impl super::SigningKey for SharedKey {
  /// Mac the data over a copy of the stored context
  fn sign(&self, data: &[u8]) -> HttpSigResult<Vec<u8>> {
    match self {
      SharedKey::HmacSha1(mac) => {
        let mut mac = mac.clone();
        mac.update(data);
        Ok(mac.finalize().into_bytes().to_vec())
      }
      SharedKey::HmacSha256(mac) => {
        let mut mac = mac.clone();
        mac.update(data);
        Ok(mac.finalize().into_bytes().to_vec())
      }
    }
  }

  fn alg(&self) -> AlgorithmName {
    use super::VerifyingKey;
    <Self as VerifyingKey>::alg(self)
  }
}

impl super::VerifyingKey for SharedKey {
  /// Recompute the mac and compare in constant time
  fn verify(&self, data: &[u8], expected_mac: &[u8]) -> HttpSigResult<()> {
    match self {
      SharedKey::HmacSha1(mac) => {
        let mut mac = mac.clone();
        mac.update(data);
        mac.verify_slice(expected_mac).map_err(|e| HttpSigError::InvalidSignature(e.to_string()))
      }
      SharedKey::HmacSha256(mac) => {
        let mut mac = mac.clone();
        mac.update(data);
        mac.verify_slice(expected_mac).map_err(|e| HttpSigError::InvalidSignature(e.to_string()))
      }
    }
  }

  fn alg(&self) -> AlgorithmName {
    match self {
      SharedKey::HmacSha1(_) => AlgorithmName::HmacSha1,
      SharedKey::HmacSha256(_) => AlgorithmName::HmacSha256,
    }
  }
}
