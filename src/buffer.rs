//! Fixed-capacity containers. Anything that would grow past its capacity fails with
//! `Error::BufferOverflow` instead of being cut short.
use crate::error::{Error, Result};
use std::fmt;
use std::ops::Deref;

pub const HOST_CAPACITY: usize = 1023;
pub const PORT_CAPACITY: usize = 7;
pub const PATH_CAPACITY: usize = 1023;
pub const REQUEST_CAPACITY: usize = 1023;
pub const ANSWER_CAPACITY: usize = 2048;

/// A `String` that never holds more than `CAP` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedString<const CAP: usize> {
    what: &'static str,
    inner: String,
}

impl<const CAP: usize> BoundedString<CAP> {
    pub fn new(what: &'static str) -> Self {
        BoundedString {
            what,
            inner: String::new(),
        }
    }

    pub fn try_new(what: &'static str, s: &str) -> Result<Self> {
        let mut bounded = Self::new(what);
        bounded.push_str(s)?;
        Ok(bounded)
    }

    pub fn push_str(&mut self, s: &str) -> Result<()> {
        let length = self.inner.len() + s.len();
        if length > CAP {
            return Err(Error::BufferOverflow {
                what: self.what,
                capacity: CAP,
                length,
            });
        }
        self.inner.push_str(s);
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        CAP
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl<const CAP: usize> Deref for BoundedString<CAP> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.inner
    }
}

impl<const CAP: usize> AsRef<str> for BoundedString<CAP> {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl<const CAP: usize> fmt::Display for BoundedString<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl<const CAP: usize> fmt::Debug for BoundedString<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}
