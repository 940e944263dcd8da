use core::fmt;
use core::ops::Deref;

use heapless::String;

/// Returned when an append would exceed a field's limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow;

/// A fixed-capacity text field stored inline. No heap allocation.
///
/// Bytes are stored as Latin-1 characters, so every byte value is accepted; a byte
/// above `0x7F` occupies two bytes of capacity once encoded. Appends never grow
/// the storage: they either fit under the limit or report [`Overflow`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Field<const N: usize> {
    text: String<N>,
}

impl<const N: usize> Field<N> {
    /// Storage capacity in bytes.
    pub const CAPACITY: usize = N;

    /// Creates an empty field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Creates a field from `s`, dropping whatever does not fit.
    #[must_use]
    pub fn truncated(s: &str) -> Self {
        let mut field = Self::new();
        field.push_str_truncating(s);
        field
    }

    /// Appends one received byte, refusing to grow past `limit` (clamped to capacity).
    pub fn push_byte(&mut self, byte: u8, limit: usize) -> Result<(), Overflow> {
        let ch = char::from(byte);
        if self.text.len() + ch.len_utf8() > limit.min(N) {
            return Err(Overflow);
        }
        self.text.push(ch).map_err(|_| Overflow)
    }

    /// Appends as many whole characters of `s` as fit. Returns the bytes appended.
    pub fn push_str_truncating(&mut self, s: &str) -> usize {
        let before = self.text.len();
        for ch in s.chars() {
            if self.text.push(ch).is_err() {
                break;
            }
        }
        self.text.len() - before
    }

    /// Removes leading and trailing whitespace in place.
    pub fn trim(&mut self) {
        if self.text.trim().len() == self.text.len() {
            return;
        }
        let mut trimmed = String::new();
        // Never fails: the trimmed text is shorter than the original.
        let _ = trimmed.push_str(self.text.trim());
        self.text = trimmed;
    }

    /// Removes one trailing `byte`, if present. Returns whether it was removed.
    pub fn strip_suffix_byte(&mut self, byte: u8) -> bool {
        if self.text.ends_with(char::from(byte)) {
            self.text.pop();
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<const N: usize> Deref for Field<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for Field<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Truncating writer: formatted output past capacity is silently dropped.
impl<const N: usize> fmt::Write for Field<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str_truncating(s);
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Field<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for Field<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> PartialEq<str> for Field<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for Field<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
