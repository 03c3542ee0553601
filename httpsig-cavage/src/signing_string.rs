use crate::{
  error::{HttpSigError, HttpSigResult},
  header_map::HeaderMap,
};

/// Pseudo-header standing in for the HTTP method and path. Not a real
/// transmitted header; its value is always supplied by the caller.
pub const REQUEST_TARGET: &str = "(request-target)";

const HOST: &str = "host";

/// Build the canonical signing string: one `name: value` line per configured
/// header name, in the configured order, joined by newlines with no trailing
/// newline. A verifier reconstructing from the same names and headers must
/// obtain these exact bytes.
pub fn build_signing_string(
  header_names: &[String],
  headers: &HeaderMap,
  host: Option<&str>,
  method: Option<&str>,
  path: Option<&str>,
) -> HttpSigResult<String> {
  let mut lines = Vec::with_capacity(header_names.len());
  for name in header_names {
    let name = name.to_ascii_lowercase();
    match name.as_str() {
      REQUEST_TARGET => {
        let (Some(method), Some(path)) = (method, path) else {
          return Err(HttpSigError::MissingRequestTarget);
        };
        lines.push(format!("{REQUEST_TARGET}: {} {path}", method.to_ascii_lowercase()));
      }
      HOST => {
        // the host override takes precedence over the header value
        let value = host
          .or_else(|| headers.get(HOST))
          .ok_or_else(|| HttpSigError::MissingHeader(HOST.to_string()))?;
        lines.push(format!("{HOST}: {value}"));
      }
      _ => {
        let value = headers.get(&name).ok_or_else(|| HttpSigError::MissingHeader(name.clone()))?;
        lines.push(format!("{name}: {value}"));
      }
    }
  }
  Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
  use super::*;

  const BASIC_SIGNING_STRING: &str =
    "(request-target): get /foo?param=value&pet=dog\nhost: example.com\ndate: Sun, 05 Jan 2014 21:31:40 GMT";

  fn request_headers() -> HeaderMap {
    HeaderMap::from([
      ("Host", "example.com"),
      ("Date", "Sun, 05 Jan 2014 21:31:40 GMT"),
      ("Content-Type", "application/json"),
      ("Digest", "SHA-256=X48E9qOokqqrvdts8nOJRJN3OWDUoyWxBf7kbu9DBPE="),
      ("Content-Length", "18"),
    ])
  }

  fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
  }

  #[test]
  fn basic_signing_string() {
    let signing_string = build_signing_string(
      &names(&[REQUEST_TARGET, "host", "date"]),
      &request_headers(),
      None,
      Some("GET"),
      Some("/foo?param=value&pet=dog"),
    )
    .unwrap();
    assert_eq!(signing_string, BASIC_SIGNING_STRING);
  }

  #[test]
  fn all_headers_signing_string() {
    let signing_string = build_signing_string(
      &names(&[REQUEST_TARGET, "host", "date", "content-type", "digest", "content-length"]),
      &request_headers(),
      None,
      Some("POST"),
      Some("/foo?param=value&pet=dog"),
    )
    .unwrap();
    assert_eq!(
      signing_string,
      "(request-target): post /foo?param=value&pet=dog\n\
       host: example.com\n\
       date: Sun, 05 Jan 2014 21:31:40 GMT\n\
       content-type: application/json\n\
       digest: SHA-256=X48E9qOokqqrvdts8nOJRJN3OWDUoyWxBf7kbu9DBPE=\n\
       content-length: 18"
    );
  }

  #[test]
  fn single_header_has_no_trailing_newline() {
    let signing_string =
      build_signing_string(&names(&["date"]), &request_headers(), None, None, None).unwrap();
    assert_eq!(signing_string, "date: Sun, 05 Jan 2014 21:31:40 GMT");
  }

  #[test]
  fn configured_names_are_matched_case_insensitively_and_lowercased() {
    let signing_string =
      build_signing_string(&names(&["Date", "CONTENT-TYPE"]), &request_headers(), None, None, None).unwrap();
    assert_eq!(
      signing_string,
      "date: Sun, 05 Jan 2014 21:31:40 GMT\ncontent-type: application/json"
    );
  }

  #[test]
  fn missing_header_is_named_in_the_error() {
    let err = build_signing_string(&names(&["date", "digest"]), &HeaderMap::from([("Date", "today")]), None, None, None)
      .unwrap_err();
    assert!(matches!(&err, HttpSigError::MissingHeader(name) if name == "digest"));
    assert!(!err.is_configuration());
  }

  #[test]
  fn request_target_requires_method_and_path() {
    let headers = request_headers();
    let names = names(&[REQUEST_TARGET, "date"]);
    let err = build_signing_string(&names, &headers, None, None, Some("/foo")).unwrap_err();
    assert!(matches!(err, HttpSigError::MissingRequestTarget));
    let err = build_signing_string(&names, &headers, None, Some("GET"), None).unwrap_err();
    assert!(matches!(err, HttpSigError::MissingRequestTarget));
  }

  #[test]
  fn request_target_lowercases_the_method_only() {
    let signing_string = build_signing_string(
      &names(&[REQUEST_TARGET]),
      &HeaderMap::new(),
      None,
      Some("GET"),
      Some("/Foo?A=1"),
    )
    .unwrap();
    assert_eq!(signing_string, "(request-target): get /Foo?A=1");
  }

  #[test]
  fn host_override_takes_precedence() {
    let signing_string =
      build_signing_string(&names(&["host"]), &request_headers(), Some("override.example"), None, None).unwrap();
    assert_eq!(signing_string, "host: override.example");
  }

  #[test]
  fn host_falls_back_to_the_header_then_errors() {
    let signing_string = build_signing_string(&names(&["host"]), &request_headers(), None, None, None).unwrap();
    assert_eq!(signing_string, "host: example.com");

    let err = build_signing_string(&names(&["host"]), &HeaderMap::new(), None, None, None).unwrap_err();
    assert!(matches!(&err, HttpSigError::MissingHeader(name) if name == "host"));
  }

  #[test]
  fn canonicalization_ignores_input_insertion_order() {
    let reordered = HeaderMap::from([
      ("content-length", "18"),
      ("DATE", "Sun, 05 Jan 2014 21:31:40 GMT"),
      ("host", "example.com"),
    ]);
    let names = names(&["host", "date", "content-length"]);
    let a = build_signing_string(&names, &reordered, None, None, None).unwrap();
    let b = build_signing_string(
      &names,
      &HeaderMap::from([
        ("Host", "example.com"),
        ("Date", "Sun, 05 Jan 2014 21:31:40 GMT"),
        ("Content-Length", "18"),
      ]),
      None,
      None,
      None,
    )
    .unwrap();
    assert_eq!(a, b);
  }
}
