//! Bit sequences for code words and compressed output.
//!
//! One bit per byte (values 0 or 1). Nothing is packed: this is an in-memory
//! representation, not a storage format.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Ordered sequence of binary digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<u8>,
}

impl BitString {
    /// Create an empty bit string.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Build a bit string from raw 0/1 values.
    ///
    /// # Errors
    /// Returns `Error::InvalidBit` for any value other than 0 or 1.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        if let Some(position) = bits.iter().position(|&b| b > 1) {
            return Err(Error::InvalidBit {
                position,
                value: bits[position],
            });
        }
        Ok(Self { bits })
    }

    /// Append one bit; any non-zero value is a 1.
    pub fn push(&mut self, bit: u8) {
        self.bits.push(u8::from(bit != 0));
    }

    /// Append the bits of `other`.
    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Remove and return the last bit.
    pub fn pop(&mut self) -> Option<u8> {
        self.bits.pop()
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if there are no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits as 0/1 values.
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// True if `self` is a prefix of `other` (every bit string is a prefix of itself).
    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b == 0 { "0" } else { "1" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .bytes()
            .enumerate()
            .map(|(position, c)| match c {
                b'0' => Ok(0),
                b'1' => Ok(1),
                value => Err(Error::InvalidBit { position, value }),
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { bits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse() {
        let bits: BitString = "0110".parse().unwrap();
        assert_eq!(bits.as_slice(), &[0, 1, 1, 0]);
        assert_eq!(bits.to_string(), "0110");
        assert_eq!("".parse::<BitString>().unwrap(), BitString::new());
    }

    #[test]
    fn test_parse_rejects_other_chars() {
        assert_eq!(
            "01x1".parse::<BitString>(),
            Err(Error::InvalidBit {
                position: 2,
                value: b'x'
            })
        );
    }

    #[test]
    fn test_from_bits() {
        assert!(BitString::from_bits(vec![0, 1, 1]).is_ok());
        assert_eq!(
            BitString::from_bits(vec![0, 2]),
            Err(Error::InvalidBit {
                position: 1,
                value: 2
            })
        );
    }

    #[test]
    fn test_push_pop_prefix() {
        let mut a = BitString::new();
        a.push(1);
        a.push(0);
        let mut b = a.clone();
        b.push(7);
        assert_eq!(b.to_string(), "101");
        assert!(a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
        assert_eq!(b.pop(), Some(1));
        assert_eq!(a, b);
        b.extend_from(&a);
        assert_eq!(b.len(), 4);
    }
}
