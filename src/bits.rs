//! Fixed-point and bit-flag primitives shared by composite datapoint codecs.
//!
//! Fractions are carried on the wire as 16-bit unsigned fixed point over
//! [0, 1]; validity flags are packed into a trailing bitmask byte.

/// Encode a fraction in [0, 1] as a 16-bit unsigned fixed-point integer.
///
/// The domain is an input contract: the composite codec validates the value
/// and raises the conversion error; this primitive never clamps.
pub fn encode_fraction(value: f64) -> u16 {
    debug_assert!((0.0..=1.0).contains(&value));
    (value * f64::from(u16::MAX)).round() as u16
}

/// Decode a 16-bit fixed-point fraction back into [0, 1], rounded to 5
/// decimal digits. The rounding keeps output legible; no two distinct 16-bit
/// inputs collapse to the same rounded value.
pub fn decode_fraction(raw: u16) -> f64 {
    round5(f64::from(raw) / f64::from(u16::MAX))
}

fn round5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

/// Pack validity flags into a bitmask byte: flag 0 occupies the highest used
/// bit, so for two flags, flag 0 -> bit 1 and flag 1 -> bit 0. Unused high
/// bits stay zero.
pub fn pack_flags<const N: usize>(flags: [bool; N]) -> u8 {
    debug_assert!(N <= 8);
    let mut byte = 0u8;
    for (i, flag) in flags.into_iter().enumerate() {
        if flag {
            byte |= 1 << (N - 1 - i);
        }
    }
    byte
}

/// Unpack the lowest `N` bits of a bitmask byte; reserved bits above are
/// ignored on read.
pub fn unpack_flags<const N: usize>(byte: u8) -> [bool; N] {
    debug_assert!(N <= 8);
    std::array::from_fn(|i| byte >> (N - 1 - i) & 1 == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_boundaries() {
        assert_eq!(encode_fraction(0.0), 0x0000);
        assert_eq!(encode_fraction(1.0), 0xFFFF);
        assert_eq!(decode_fraction(0x0000), 0.0);
        assert_eq!(decode_fraction(0xFFFF), 1.0);
    }

    #[test]
    fn fraction_known_values() {
        // 0.9 * 0xFFFF = 58981.5, rounds up
        assert_eq!(encode_fraction(0.9), 0xE666);
        assert_eq!(encode_fraction(0.6), 0x9999);
        assert_eq!(decode_fraction(0x9999), 0.6);
        assert_eq!(decode_fraction(0x6666), 0.4);
    }

    #[test]
    fn fraction_rounding_preserves_resolution() {
        // Adjacent raw values must stay distinct after 5-digit rounding
        // (16-bit step is ~1.5e-5, above the 1e-5 rounding grid).
        assert_ne!(decode_fraction(0x7FFF), decode_fraction(0x8000));
        assert_ne!(decode_fraction(0x0000), decode_fraction(0x0001));
    }

    #[test]
    fn flags_pack_order() {
        assert_eq!(pack_flags([false, false]), 0b00);
        assert_eq!(pack_flags([true, false]), 0b10);
        assert_eq!(pack_flags([false, true]), 0b01);
        assert_eq!(pack_flags([true, true]), 0b11);
    }

    #[test]
    fn flags_unpack_ignores_reserved_bits() {
        assert_eq!(unpack_flags::<2>(0b0000_0011), [true, true]);
        assert_eq!(unpack_flags::<2>(0b1111_1100), [false, false]);
        assert_eq!(unpack_flags::<2>(0b1111_1110), [true, false]);
    }

    #[test]
    fn flags_roundtrip() {
        for byte in 0u8..4 {
            assert_eq!(pack_flags(unpack_flags::<2>(byte)), byte);
        }
    }
}
