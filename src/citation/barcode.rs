//! The binary barcode printed in the title row.

use crate::error::CitationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An ordered sequence of binary digits, one vertical strip each.
///
/// Only `0` and `1` are accepted; any length (including empty) is valid.
///
/// ```
/// use citation::Barcode;
///
/// let barcode: Barcode = "10110".parse().unwrap();
/// assert_eq!(barcode.len(), 5);
/// assert!(Barcode::new([1, 0, 2]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Barcode(Vec<u8>);

impl Barcode {
    /// Validate and wrap a digit sequence.
    pub fn new<I, T>(digits: I) -> Result<Self, CitationError>
    where
        I: IntoIterator<Item = T>,
        T: Into<i64>,
    {
        digits
            .into_iter()
            .map(|d| match d.into() {
                0 => Ok(0),
                1 => Ok(1),
                other => Err(CitationError::InvalidBarcode(other)),
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Barcode)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    /// Iterate strips as "filled" flags (`true` for a `1`).
    pub fn strips(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().map(|&d| d == 1)
    }
}

impl FromStr for Barcode {
    type Err = CitationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Barcode::new(s.chars().map(|c| match c.to_digit(10) {
            Some(d) => d as i64,
            None => c as i64,
        }))
    }
}

impl TryFrom<Vec<i64>> for Barcode {
    type Error = CitationError;

    fn try_from(digits: Vec<i64>) -> Result<Self, Self::Error> {
        Barcode::new(digits)
    }
}

impl From<Barcode> for Vec<i64> {
    fn from(b: Barcode) -> Self {
        b.0.into_iter().map(i64::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_binary_sequences() {
        assert_eq!(Barcode::new([0u8, 0, 0]).unwrap().len(), 3);
        assert_eq!(Barcode::new([1u8; 40]).unwrap().len(), 40);
        assert_eq!(Barcode::new([1u8, 0, 1, 1, 0]).unwrap().digits(), &[1, 0, 1, 1, 0]);
        assert!(Barcode::new(Vec::<u8>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_other_values() {
        assert!(matches!(
            Barcode::new([1, 0, 2]),
            Err(CitationError::InvalidBarcode(2))
        ));
        assert!(matches!(
            Barcode::new([-1i64]),
            Err(CitationError::InvalidBarcode(-1))
        ));
    }

    #[test]
    fn test_parse_string() {
        let b: Barcode = "1101".parse().unwrap();
        assert_eq!(b.digits(), &[1, 1, 0, 1]);
        assert!("10a1".parse::<Barcode>().is_err());
        assert!("1021".parse::<Barcode>().is_err());
    }

    #[test]
    fn test_strips() {
        let b = Barcode::new([1u8, 0, 1]).unwrap();
        assert_eq!(b.strips().collect::<Vec<_>>(), vec![true, false, true]);
    }

    #[test]
    fn test_json_validation() {
        let b: Barcode = serde_json::from_str("[1, 0, 1]").unwrap();
        assert_eq!(b.len(), 3);
        assert!(serde_json::from_str::<Barcode>("[1, 3]").is_err());
        assert_eq!(serde_json::to_string(&b).unwrap(), "[1,0,1]");
    }
}
