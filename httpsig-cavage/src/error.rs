use thiserror::Error;

/// Result type for http signature
pub type HttpSigResult<T> = std::result::Result<T, HttpSigError>;

/// Error type for http signature
#[derive(Error, Debug)]
pub enum HttpSigError {
  #[error("Base64 decode error: {0}")]
  Base64DecodeError(#[from] base64::DecodeError),

  /* ----- Configuration errors ----- */
  /// Algorithm identifier outside the supported table
  #[error("Unknown algorithm: {0}")]
  UnknownAlgorithm(String),
  /// Secret parsed as neither a private nor a public key
  #[error("Invalid key: {0}")]
  InvalidKey(String),
  /// Password-protected private keys are unsupported
  #[error("Encrypted private keys are not supported")]
  EncryptedKey,
  /// Provider holds a public key only and cannot produce signatures
  #[error("No signing capability: {0}")]
  NoSigningCapability(String),
  /// `(request-target)` needs the caller to supply both method and path
  #[error("Method and path required for (request-target)")]
  MissingRequestTarget,

  /* ----- Signing-time errors ----- */
  /// A header demanded by the configured header list is absent
  #[error("Missing required header: {0}")]
  MissingHeader(String),
  /// Signing input must be 7-bit clean
  #[error("Signing input is not us-ascii")]
  NonAsciiInput,
  /// The signing primitive itself failed
  #[error("Failed to generate signature: {0}")]
  SignatureGenerationError(String),

  /* ----- Verification errors ----- */
  /// Invalid Signature
  #[error("Invalid Signature: {0}")]
  InvalidSignature(String),
}

impl HttpSigError {
  /// True for failures rooted in how the signer was configured rather than
  /// in the data handed to a single `sign` call.
  pub fn is_configuration(&self) -> bool {
    matches!(
      self,
      Self::UnknownAlgorithm(_)
        | Self::InvalidKey(_)
        | Self::EncryptedKey
        | Self::NoSigningCapability(_)
        | Self::MissingRequestTarget
    )
  }
}
