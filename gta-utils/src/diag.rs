use std::fmt;

/// Non-fatal problems collected while parsing a single file.
///
/// The parsers in this workspace recover locally where they can: a malformed
/// mesh, texture or table row is dropped and scanning continues with its
/// siblings. Each dropped element leaves a human-readable entry here, and is
/// mirrored to the [`log`] facade at warn level, so callers can decide
/// whether a partially parsed file is acceptable.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<String>,
}

impl Diagnostics {
    /// Create an empty diagnostics list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and forward it to `log::warn!`.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{message}");
        self.entries.push(message);
    }

    /// All recorded warnings, in encounter order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of recorded warnings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move all entries out of `other` into `self`.
    pub fn absorb(&mut self, mut other: Diagnostics) {
        self.entries.append(&mut other.entries);
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn records_in_order() {
        let mut diag = Diagnostics::new();
        assert!(diag.is_empty());
        diag.warn("first");
        diag.warn(String::from("second"));
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.entries(), ["first", "second"]);
    }

    #[test_log::test]
    fn absorb_appends() {
        let mut a = Diagnostics::new();
        a.warn("a");
        let mut b = Diagnostics::new();
        b.warn("b");
        a.absorb(b);
        assert_eq!(a.entries(), ["a", "b"]);
    }
}
