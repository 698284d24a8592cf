//! Group addresses: the multicast-style destination identifier on the bus.
//!
//! Addresses parse from three-level `main/middle/sub` (5/3/8 bits),
//! two-level `main/sub` (5/11 bits), or free (plain decimal) notation.
//! Everything above this module treats an address as an opaque comparable
//! key; its internal structure is never inspected for routing.

use std::fmt;
use std::str::FromStr;

/// A 16-bit group address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupAddress(u16);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("could not parse group address {0:?}")]
    Invalid(String),
    #[error("group address component out of range in {0:?}")]
    OutOfRange(String),
}

impl GroupAddress {
    pub const fn new(raw: u16) -> Self {
        GroupAddress(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn main(self) -> u8 {
        (self.0 >> 11) as u8
    }

    pub const fn middle(self) -> u8 {
        (self.0 >> 8 & 0b111) as u8
    }

    pub const fn sub(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl FromStr for GroupAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, AddressError> {
        let component = |part: &str| -> Result<u32, AddressError> {
            part.parse().map_err(|_| AddressError::Invalid(s.to_string()))
        };
        let raw = match s.split('/').collect::<Vec<_>>().as_slice() {
            [free] => {
                let free = component(free)?;
                if free > 0xFFFF {
                    return Err(AddressError::OutOfRange(s.to_string()));
                }
                free
            }
            [main, sub] => {
                let (main, sub) = (component(main)?, component(sub)?);
                if main > 31 || sub > 2047 {
                    return Err(AddressError::OutOfRange(s.to_string()));
                }
                main << 11 | sub
            }
            [main, middle, sub] => {
                let (main, middle, sub) = (component(main)?, component(middle)?, component(sub)?);
                if main > 31 || middle > 7 || sub > 255 {
                    return Err(AddressError::OutOfRange(s.to_string()));
                }
                main << 11 | middle << 8 | sub
            }
            _ => return Err(AddressError::Invalid(s.to_string())),
        };
        Ok(GroupAddress(raw as u16))
    }
}

impl fmt::Display for GroupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.main(), self.middle(), self.sub())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_three_level() {
        let ga: GroupAddress = "1/2/3".parse().expect("parse");
        assert_eq!(ga.raw(), 1 << 11 | 2 << 8 | 3);
        assert_eq!((ga.main(), ga.middle(), ga.sub()), (1, 2, 3));
        assert_eq!(ga.to_string(), "1/2/3");
    }

    #[test]
    fn parse_two_level_and_free() {
        assert_eq!("1/256".parse::<GroupAddress>().expect("parse").raw(), 1 << 11 | 256);
        assert_eq!("2563".parse::<GroupAddress>().expect("parse"), "1/2/3".parse().expect("parse"));
    }

    #[test]
    fn parse_rejects_out_of_range_components() {
        assert_eq!(
            "32/0/0".parse::<GroupAddress>(),
            Err(AddressError::OutOfRange("32/0/0".to_string()))
        );
        assert!("0/8/0".parse::<GroupAddress>().is_err());
        assert!("0/0/256".parse::<GroupAddress>().is_err());
        assert!("1/2048".parse::<GroupAddress>().is_err());
        assert!("65536".parse::<GroupAddress>().is_err());
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("".parse::<GroupAddress>().is_err());
        assert!("a/b/c".parse::<GroupAddress>().is_err());
        assert!("1/2/3/4".parse::<GroupAddress>().is_err());
        assert!("1//3".parse::<GroupAddress>().is_err());
    }
}
