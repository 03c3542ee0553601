use indexmap::IndexMap;

/* -------------------------------- */
/// Header collection with case-insensitive names. Names are normalized to
/// lowercase on insert and lookup, values are kept exactly as given, and one
/// entry exists per normalized name. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
  inner: IndexMap<String, String>,
}

impl HeaderMap {
  /// Create an empty header collection
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert a header, overwriting any value stored under the same name in
  /// any casing. Returns the previous value if one existed.
  pub fn insert(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
    self.inner.insert(name.to_ascii_lowercase(), value.into())
  }

  /// Case-insensitive lookup
  pub fn get(&self, name: &str) -> Option<&str> {
    self.inner.get(&name.to_ascii_lowercase()).map(String::as_str)
  }

  /// Case-insensitive membership test
  pub fn contains(&self, name: &str) -> bool {
    self.inner.contains_key(&name.to_ascii_lowercase())
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  /// Iterate over `(normalized name, value)` pairs in insertion order
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

impl<N, V> FromIterator<(N, V)> for HeaderMap
where
  N: AsRef<str>,
  V: Into<String>,
{
  fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
    let mut map = Self::new();
    for (name, value) in iter {
      map.insert(name.as_ref(), value);
    }
    map
  }
}

impl<N, V, const L: usize> From<[(N, V); L]> for HeaderMap
where
  N: AsRef<str>,
  V: Into<String>,
{
  fn from(entries: [(N, V); L]) -> Self {
    entries.into_iter().collect()
  }
}

impl<'a> IntoIterator for &'a HeaderMap {
  type Item = (&'a str, &'a str);
  type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

  fn into_iter(self) -> Self::IntoIter {
    Box::new(self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str())))
  }
}
