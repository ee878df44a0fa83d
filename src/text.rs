//! In-place string utilities.
//!
//! The operations work on any [`Text`]: Rust strings are treated as sequences
//! of Unicode scalar values, while raw byte strings (such as the contents of a
//! C string) are treated as sequences of bytes. In both cases the buffer is
//! owned by the caller and modified in place; nothing is allocated.

/// A character buffer that can be inspected and modified in place.
pub trait Text {
    /// Reverses the characters of the buffer.
    fn reverse_in_place(&mut self);

    /// Converts ASCII lowercase letters to uppercase, leaving everything
    /// else untouched.
    fn make_uppercase(&mut self);

    /// Returns the number of characters in the buffer.
    fn length(&self) -> usize;

    /// Returns `true` if the buffer reads the same forwards and backwards.
    fn is_palindrome(&self) -> bool;
}

impl Text for [u8] {
    fn reverse_in_place(&mut self) {
        self.reverse();
    }

    fn make_uppercase(&mut self) {
        self.make_ascii_uppercase();
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn is_palindrome(&self) -> bool {
        let len = self.length();
        (0..len / 2).all(|i| self[i] == self[len - i - 1])
    }
}

impl Text for str {
    fn reverse_in_place(&mut self) {
        // SAFETY: Reversing all bytes leaves each multi-byte sequence with
        // its leading byte last. Reversing every such sequence back restores
        // valid UTF-8 before the byte slice borrow ends, and nothing in
        // between can panic: a valid UTF-8 string never starts with a
        // continuation byte, so the scan always finds a leading byte.
        let bytes = unsafe { self.as_bytes_mut() };
        bytes.reverse();

        let mut start = 0;
        while start < bytes.len() {
            let mut end = start;
            while is_continuation_byte(bytes[end]) {
                end += 1;
            }
            bytes[start..=end].reverse();
            start = end + 1;
        }
    }

    fn make_uppercase(&mut self) {
        self.make_ascii_uppercase();
    }

    fn length(&self) -> usize {
        self.chars().count()
    }

    fn is_palindrome(&self) -> bool {
        let half = self.length() / 2;
        self.chars().take(half).eq(self.chars().rev().take(half))
    }
}

impl Text for String {
    fn reverse_in_place(&mut self) {
        self.as_mut_str().reverse_in_place();
    }

    fn make_uppercase(&mut self) {
        self.as_mut_str().make_uppercase();
    }

    fn length(&self) -> usize {
        self.as_str().length()
    }

    fn is_palindrome(&self) -> bool {
        self.as_str().is_palindrome()
    }
}

fn is_continuation_byte(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Reverses `s` in place.
///
/// # Examples
///
/// ```
/// let mut s = String::from("hello");
/// cutils::reverse_string(&mut s);
/// assert_eq!(s, "olleh");
/// ```
pub fn reverse_string<T: Text + ?Sized>(s: &mut T) {
    s.reverse_in_place();
}

/// Converts the ASCII lowercase letters of `s` to uppercase in place.
pub fn to_uppercase<T: Text + ?Sized>(s: &mut T) {
    s.make_uppercase();
}

/// Returns the number of characters in `s`.
pub fn string_length<T: Text + ?Sized>(s: &T) -> usize {
    s.length()
}

/// Returns `true` if `s` is a palindrome. The empty string is a palindrome.
pub fn is_palindrome<T: Text + ?Sized>(s: &T) -> bool {
    s.is_palindrome()
}
