//! Input values accepted by the escapers.
//!
//! Escaping is only defined for text. A value for which [`AsText::as_text`]
//! returns `None` (an absent `Option`, say) is passed through: the escapers
//! hand back their sentinel instead of an error.

use std::borrow::Cow;

/// A value that may or may not carry text bytes.
pub trait AsText {
    /// The raw bytes of the text, in whatever charset they happen to be.
    fn as_text(&self) -> Option<&[u8]>;

    /// Text that escapes to nothing: empty, or the single character `"0"`.
    ///
    /// The attribute, CSS and JS escapers return their pass-through sentinel
    /// for falsy text, exactly as for non-text.
    fn is_falsy(&self) -> bool {
        matches!(self.as_text(), None | Some(b"") | Some(b"0"))
    }
}

impl AsText for str {
    fn as_text(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl AsText for String {
    fn as_text(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl AsText for [u8] {
    fn as_text(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<const N: usize> AsText for [u8; N] {
    fn as_text(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl AsText for Vec<u8> {
    fn as_text(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl AsText for Cow<'_, str> {
    fn as_text(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl AsText for Cow<'_, [u8]> {
    fn as_text(&self) -> Option<&[u8]> {
        Some(&**self)
    }
}

impl<T: AsText + ?Sized> AsText for &T {
    fn as_text(&self) -> Option<&[u8]> {
        (**self).as_text()
    }
}

impl<T: AsText> AsText for Option<T> {
    fn as_text(&self) -> Option<&[u8]> {
        self.as_ref().and_then(AsText::as_text)
    }
}
