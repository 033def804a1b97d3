use std::fmt;

/// A formatted, human-readable address.
///
/// An empty address means that no address has been resolved yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address(String);

impl Address {
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Address {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Address {
    fn from(from: &str) -> Self {
        Self(from.to_string())
    }
}

impl From<Address> for String {
    fn from(from: Address) -> Self {
        from.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
