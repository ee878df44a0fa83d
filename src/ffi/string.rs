//! NUL-terminated C string borrows.

use std::{
    ffi::CStr,
    fmt::{self, Debug, Formatter},
    ops::{Deref, DerefMut},
    os::raw::c_char,
    slice,
};

/// A mutable borrow of a NUL-terminated C string.
///
/// The borrowed bytes exclude the terminator, so that in-place operations can
/// never move or overwrite it.
pub struct CStrMut<'a> {
    bytes: &'a mut [u8],
}

impl<'a> CStrMut<'a> {
    /// Borrows the C string at `ptr`, returning `None` for a null pointer.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point to a NUL-terminated buffer that is valid for
    /// reads and writes for `'a` and is not accessed through any other pointer
    /// during that time.
    pub unsafe fn from_ptr(ptr: *mut c_char) -> Option<Self> {
        let len = borrow_c_str(ptr)?.to_bytes().len();
        let bytes = slice::from_raw_parts_mut(ptr.cast::<u8>(), len);

        Some(Self { bytes })
    }
}

impl Deref for CStrMut<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes
    }
}

impl DerefMut for CStrMut<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.bytes
    }
}

impl Debug for CStrMut<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&String::from_utf8_lossy(self.bytes), f)
    }
}

/// Borrows the C string at `ptr`, returning `None` for a null pointer.
///
/// # Safety
///
/// A non-null `ptr` must point to a NUL-terminated buffer that is valid for
/// reads for `'a` and is not mutated during that time.
pub unsafe fn borrow_c_str<'a>(ptr: *const c_char) -> Option<&'a CStr> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{ffi::CString, ptr};

    #[test]
    fn null_pointers_are_absent() {
        unsafe {
            assert!(borrow_c_str(ptr::null()).is_none());
            assert!(CStrMut::from_ptr(ptr::null_mut()).is_none());
        }
    }

    #[test]
    fn borrow_excludes_terminator() {
        let raw = CString::new("abc").unwrap().into_raw();
        unsafe {
            let s = CStrMut::from_ptr(raw).unwrap();
            assert_eq!(&*s, b"abc");
            drop(CString::from_raw(raw));
        }
    }

    #[test]
    fn writes_through_to_c_buffer() {
        let raw = CString::new("abc").unwrap().into_raw();
        unsafe {
            let mut s = CStrMut::from_ptr(raw).unwrap();
            s[0] = b'x';
            assert_eq!(CString::from_raw(raw).as_bytes_with_nul(), b"xbc\0");
        }
    }
}
