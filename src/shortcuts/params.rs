//! Command parameter snapshots.

use std::collections::BTreeMap;
use std::fmt;

/// Parameters passed to a command when its shortcut fires.
///
/// Snapshots compare by value, so `Zoom { action = "in" }` and
/// `Zoom { action = "out" }` are distinct bindings while two separately built
/// `{ action = "in" }` maps are the same one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder form of [`Params::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for Params {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_compare_by_value() {
        let a = Params::new().with("action", "in").with("focus", "center");
        let b: Params = [("focus", "center"), ("action", "in")].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, Params::new().with("action", "out"));
    }

    #[test]
    fn display_lists_sorted_pairs() {
        let params = Params::new().with("orientation", "vertical").with("target", "mask");
        assert_eq!(params.to_string(), "orientation=vertical, target=mask");
        assert_eq!(Params::new().to_string(), "");
    }
}
