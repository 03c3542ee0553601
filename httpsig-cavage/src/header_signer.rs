use crate::{
  crypto::{AlgorithmName, Signer},
  error::{HttpSigError, HttpSigResult},
  header_map::HeaderMap,
  signing_string::build_signing_string,
};

/// Header list used when the caller configures none
pub const DEFAULT_HEADERS: &[&str] = &["date"];

const AUTHORIZATION: &str = "authorization";

/* -------------------------------- */
/// Authorization value with the signature slot unfilled, fixed at signer
/// construction and reused for every request.
#[derive(Debug)]
struct SignatureTemplate {
  prefix: String,
}

impl SignatureTemplate {
  fn new(key_id: &str, algorithm: AlgorithmName, header_names: &[String]) -> Self {
    let headers = header_names.join(" ");
    Self {
      prefix: format!(r#"Signature keyId="{key_id}",algorithm="{algorithm}",headers="{headers}""#),
    }
  }

  fn render(&self, signature: &str) -> String {
    format!(r#"{},signature="{signature}""#, self.prefix)
  }
}

/* -------------------------------- */
/// Signs request headers with the draft-cavage `Signature` scheme. Built
/// once per key and header list (key parsing happens here), then reused
/// across requests; each `sign` call only canonicalizes and signs.
#[derive(Debug)]
pub struct HeaderSigner {
  signer: Signer,
  header_names: Vec<String>,
  template: SignatureTemplate,
}

impl HeaderSigner {
  /// Create a signer for `key_id`. `header_names` is the ordered list of
  /// headers to cover; an empty list means `["date"]`. Names are stored
  /// lowercased so the template and the signing string agree verbatim.
  /// Fails when the secret does not fit the algorithm, or when it parses
  /// to a public key and can never produce a signature.
  pub fn new(key_id: &str, secret: &[u8], algorithm: AlgorithmName, header_names: &[&str]) -> HttpSigResult<Self> {
    let signer = Signer::new(secret, algorithm)?;
    if !signer.can_sign() {
      return Err(HttpSigError::NoSigningCapability(
        "public key can verify but not sign".to_string(),
      ));
    }
    let header_names = if header_names.is_empty() {
      DEFAULT_HEADERS.iter().map(|name| name.to_string()).collect::<Vec<_>>()
    } else {
      header_names.iter().map(|name| name.to_ascii_lowercase()).collect::<Vec<_>>()
    };
    let template = SignatureTemplate::new(key_id, signer.algorithm(), &header_names);
    Ok(Self { signer, header_names, template })
  }

  /// Ordered header names covered by this signer
  pub fn header_names(&self) -> &[String] {
    &self.header_names
  }

  /// Algorithm this signer was constructed with
  pub fn algorithm(&self) -> AlgorithmName {
    self.signer.algorithm()
  }

  /// Sign `headers` and return the collection with the `authorization`
  /// entry set, overwriting any prior value. `host` overrides the host
  /// header; `method` and `path` feed the `(request-target)` pseudo-header
  /// and are required whenever it is covered.
  pub fn sign(
    &self,
    headers: HeaderMap,
    host: Option<&str>,
    method: Option<&str>,
    path: Option<&str>,
  ) -> HttpSigResult<HeaderMap> {
    let mut headers = headers;
    let signing_string = build_signing_string(&self.header_names, &headers, host, method, path)?;
    let signature = self.signer.produce_signature(&signing_string)?;
    headers.insert(AUTHORIZATION, self.template.render(&signature));
    Ok(headers)
  }
}
