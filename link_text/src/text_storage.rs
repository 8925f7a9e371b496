// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

/// The text wrapped by a [`LinkedText`].
///
/// [`LinkedText`]: crate::LinkedText
pub trait TextStorage {
    /// The length of the text, in bytes.
    fn len(&self) -> usize;

    /// Return `true` if the text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return whether `index` is a UTF-8 character boundary in the text.
    fn is_char_boundary(&self, index: usize) -> bool;

    /// The byte offset of the first literal occurrence of `needle`, if any.
    ///
    /// An empty `needle` never matches.
    fn find(&self, needle: &str) -> Option<usize>;
}

impl TextStorage for String {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        self.as_str().is_char_boundary(index)
    }

    fn find(&self, needle: &str) -> Option<usize> {
        self.as_str().find_literal(needle)
    }
}

impl TextStorage for &str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }

    fn find(&self, needle: &str) -> Option<usize> {
        self.find_literal(needle)
    }
}

impl TextStorage for Arc<str> {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }

    fn find(&self, needle: &str) -> Option<usize> {
        (**self).find_literal(needle)
    }
}

trait FindLiteral {
    fn find_literal(&self, needle: &str) -> Option<usize>;
}

impl FindLiteral for str {
    fn find_literal(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        str::find(self, needle)
    }
}

#[cfg(test)]
mod tests {
    use super::TextStorage;
    use alloc::string::ToString;
    use alloc::sync::Arc;

    fn assert_finds<T: TextStorage>(t: &T) {
        assert_eq!(t.find("link"), Some(15));
        assert_eq!(t.find("Hello"), Some(0));
        assert_eq!(t.find("absent"), None);
        assert_eq!(t.find(""), None);
    }

    #[test]
    fn find_first_occurrence() {
        let s = "Hello! This is link";
        assert_finds(&s);
        assert_finds(&s.to_string());
        assert_finds(&Arc::<str>::from(s));

        // Only the first of repeated matches is reported.
        assert_eq!(TextStorage::find(&"a link and link", "link"), Some(2));
    }

    #[test]
    fn find_after_multibyte() {
        let s = "café link";
        assert_eq!(TextStorage::find(&s, "link"), Some(6));
        assert!(TextStorage::is_char_boundary(&s, 6));
        assert!(!TextStorage::is_char_boundary(&s, 4));
    }
}
