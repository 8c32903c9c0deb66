//! Secret classification for values that must never be logged or displayed
//!
//! [`Sensitive<T>`] is a one-way wrapper: once a value is classified, every
//! value derived from it through [`Sensitive::map`] is classified too. There
//! is no operation that drops the classification by accident; the only way
//! out is the explicitly named [`Sensitive::expose`].

/// A value whose contents must not appear in logs or diffs
#[derive(Clone)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Classify a value as sensitive
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Derive a new sensitive value from this one
    ///
    /// The transform may freely mix the inner value with plain data; the
    /// result carries the classification regardless. This is the only
    /// composition path, so a secret can never silently become plain.
    pub fn map<U, F>(self, transform: F) -> Sensitive<U>
    where
        F: FnOnce(T) -> U,
    {
        Sensitive(transform(self.0))
    }

    /// Read the inner value
    ///
    /// The deliberate name marks the call site as a secrecy boundary. Callers
    /// own whatever happens to the value afterwards.
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> std::fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Sensitive([REDACTED])")
    }
}
