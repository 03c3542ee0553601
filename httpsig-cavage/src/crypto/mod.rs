mod asymmetric;
mod symmetric;

use crate::{
  error::{HttpSigError, HttpSigResult},
  util::ascii_bytes,
};
use base64::{engine::general_purpose, Engine as _};

pub use asymmetric::RsaKey;
pub use symmetric::SharedKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Algorithm names
pub enum AlgorithmName {
  RsaSha1,
  RsaSha256,
  RsaSha384,
  RsaSha512,
  HmacSha1,
  HmacSha256,
}

impl AlgorithmName {
  pub fn as_str(&self) -> &'static str {
    match self {
      AlgorithmName::RsaSha1 => "rsa-sha1",
      AlgorithmName::RsaSha256 => "rsa-sha256",
      AlgorithmName::RsaSha384 => "rsa-sha384",
      AlgorithmName::RsaSha512 => "rsa-sha512",
      AlgorithmName::HmacSha1 => "hmac-sha1",
      AlgorithmName::HmacSha256 => "hmac-sha256",
    }
  }

  /// Signing family, the part before the dash
  pub fn family(&self) -> AlgorithmFamily {
    match self {
      AlgorithmName::RsaSha1 | AlgorithmName::RsaSha256 | AlgorithmName::RsaSha384 | AlgorithmName::RsaSha512 => {
        AlgorithmFamily::Rsa
      }
      AlgorithmName::HmacSha1 | AlgorithmName::HmacSha256 => AlgorithmFamily::Hmac,
    }
  }

  /// Hash function, the part after the dash
  pub fn hash(&self) -> HashAlgorithm {
    match self {
      AlgorithmName::RsaSha1 | AlgorithmName::HmacSha1 => HashAlgorithm::Sha1,
      AlgorithmName::RsaSha256 | AlgorithmName::HmacSha256 => HashAlgorithm::Sha256,
      AlgorithmName::RsaSha384 => HashAlgorithm::Sha384,
      AlgorithmName::RsaSha512 => HashAlgorithm::Sha512,
    }
  }
}

impl Default for AlgorithmName {
  fn default() -> Self {
    AlgorithmName::HmacSha256
  }
}

impl std::fmt::Display for AlgorithmName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl core::str::FromStr for AlgorithmName {
  type Err = HttpSigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "rsa-sha1" => Ok(Self::RsaSha1),
      "rsa-sha256" => Ok(Self::RsaSha256),
      "rsa-sha384" => Ok(Self::RsaSha384),
      "rsa-sha512" => Ok(Self::RsaSha512),
      "hmac-sha1" => Ok(Self::HmacSha1),
      "hmac-sha256" => Ok(Self::HmacSha256),
      _ => Err(HttpSigError::UnknownAlgorithm(s.to_string())),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Signing strategy families
pub enum AlgorithmFamily {
  Rsa,
  Hmac,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Hash functions resolvable from an algorithm identifier
pub enum HashAlgorithm {
  Sha1,
  Sha256,
  Sha384,
  Sha512,
}

impl HashAlgorithm {
  pub fn as_str(&self) -> &'static str {
    match self {
      HashAlgorithm::Sha1 => "sha1",
      HashAlgorithm::Sha256 => "sha256",
      HashAlgorithm::Sha384 => "sha384",
      HashAlgorithm::Sha512 => "sha512",
    }
  }

  /// One-shot digest of `data`
  pub fn digest(&self, data: &[u8]) -> Vec<u8> {
    use sha2::Digest;
    match self {
      HashAlgorithm::Sha1 => sha1::Sha1::digest(data).to_vec(),
      HashAlgorithm::Sha256 => sha2::Sha256::digest(data).to_vec(),
      HashAlgorithm::Sha384 => sha2::Sha384::digest(data).to_vec(),
      HashAlgorithm::Sha512 => sha2::Sha512::digest(data).to_vec(),
    }
  }
}

impl std::fmt::Display for HashAlgorithm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// SigningKey trait
pub trait SigningKey {
  fn sign(&self, data: &[u8]) -> HttpSigResult<Vec<u8>>;
  fn alg(&self) -> AlgorithmName;
}

/// VerifyingKey trait
pub trait VerifyingKey {
  fn verify(&self, data: &[u8], signature: &[u8]) -> HttpSigResult<()>;
  fn alg(&self) -> AlgorithmName;
}

/* -------------------------------- */
/// Signing strategy bound to one secret, selected once at construction.
/// For the `rsa` family the secret is a PEM-encoded private key (or, as a
/// verification-only fallback, a public key); for the `hmac` family it is
/// the raw shared key.
#[derive(Debug)]
pub enum Signer {
  Rsa(RsaKey),
  Hmac(SharedKey),
}

impl Signer {
  /// Build a signer for `algorithm` over `secret`
  pub fn new(secret: &[u8], algorithm: AlgorithmName) -> HttpSigResult<Self> {
    match algorithm.family() {
      AlgorithmFamily::Rsa => {
        let pem = core::str::from_utf8(secret)
          .map_err(|_| HttpSigError::InvalidKey("PEM key must be utf-8 text".to_string()))?;
        Ok(Self::Rsa(RsaKey::from_pem(pem, algorithm.hash())?))
      }
      AlgorithmFamily::Hmac => Ok(Self::Hmac(SharedKey::new(secret, algorithm.hash())?)),
    }
  }

  /// Algorithm identifier this signer was constructed for
  pub fn algorithm(&self) -> AlgorithmName {
    match self {
      Self::Rsa(key) => SigningKey::alg(key),
      Self::Hmac(key) => SigningKey::alg(key),
    }
  }

  /// False when the signer fell back to a public key and cannot sign
  pub fn can_sign(&self) -> bool {
    match self {
      Self::Rsa(key) => key.has_private_key(),
      Self::Hmac(_) => true,
    }
  }

  /// Sign `data` and return the signature as base64 text, ready to be
  /// embedded into a header value.
  pub fn produce_signature(&self, data: &str) -> HttpSigResult<String> {
    let data = ascii_bytes(data)?;
    let raw = match self {
      Self::Rsa(key) => key.sign(data),
      Self::Hmac(key) => key.sign(data),
    }?;
    Ok(general_purpose::STANDARD.encode(raw))
  }

  /// Verify a base64 signature over `data`
  pub fn verify(&self, data: &str, signature: &str) -> HttpSigResult<()> {
    let data = ascii_bytes(data)?;
    let signature = general_purpose::STANDARD.decode(signature)?;
    match self {
      Self::Rsa(key) => key.verify(data, &signature),
      Self::Hmac(key) => key.verify(data, &signature),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use core::str::FromStr;

  #[test]
  fn algorithm_identifiers_round_trip() {
    for id in ["rsa-sha1", "rsa-sha256", "rsa-sha384", "rsa-sha512", "hmac-sha1", "hmac-sha256"] {
      let alg = AlgorithmName::from_str(id).unwrap();
      assert_eq!(alg.as_str(), id);
    }
  }

  #[test]
  fn unknown_algorithm_is_rejected() {
    let err = AlgorithmName::from_str("rsa-md5").unwrap_err();
    assert!(matches!(&err, HttpSigError::UnknownAlgorithm(s) if s == "rsa-md5"));
    assert!(err.is_configuration());
    assert!(AlgorithmName::from_str("dsa-sha256").is_err());
    assert!(AlgorithmName::from_str("").is_err());
  }

  #[test]
  fn default_algorithm_is_hmac_sha256() {
    assert_eq!(AlgorithmName::default(), AlgorithmName::HmacSha256);
  }

  #[test]
  fn family_and_hash_split() {
    assert_eq!(AlgorithmName::RsaSha384.family(), AlgorithmFamily::Rsa);
    assert_eq!(AlgorithmName::RsaSha384.hash(), HashAlgorithm::Sha384);
    assert_eq!(AlgorithmName::HmacSha1.family(), AlgorithmFamily::Hmac);
    assert_eq!(AlgorithmName::HmacSha1.hash(), HashAlgorithm::Sha1);
  }

  #[test]
  fn hmac_signer_produces_base64_text() {
    let signer = Signer::new(b"abc123", AlgorithmName::HmacSha256).unwrap();
    let signature = signer.produce_signature("date: Tue, 07 Jun 2014 20:51:35 GMT").unwrap();
    assert_eq!(signature, "kDgYoENgTVdhxAX3YKFYmcfG/YcC0Hvn2nAMy50jABo=");
    signer.verify("date: Tue, 07 Jun 2014 20:51:35 GMT", &signature).unwrap();
  }

  #[test]
  fn non_ascii_signing_input_is_rejected() {
    let signer = Signer::new(b"abc123", AlgorithmName::HmacSha256).unwrap();
    assert!(matches!(
      signer.produce_signature("date: Tüesday").unwrap_err(),
      HttpSigError::NonAsciiInput
    ));
  }
}
