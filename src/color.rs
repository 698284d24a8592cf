//! Color xyY: an xy chromaticity pair plus brightness, on a 6-octet payload.

use byteorder::{BigEndian, ByteOrder};

use crate::bits::{decode_fraction, encode_fraction, pack_flags, unpack_flags};
use crate::dpt::{ConversionError, Dpt};

/// An xy chromaticity coordinate with brightness.
///
/// The two parts are independently optional; `None` means "not supplied" and
/// is distinct from any boundary value such as `(0.0, 0.0)`. The axis pair is
/// atomic: the type cannot represent one axis without the other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XyyColor {
    /// `(x_axis, y_axis)`, each in [0, 1] when present.
    pub color: Option<(f64, f64)>,
    /// Brightness 0..=255 when present.
    pub brightness: Option<u8>,
}

impl XyyColor {
    pub const fn new(color: Option<(f64, f64)>, brightness: Option<u8>) -> Self {
        XyyColor { color, brightness }
    }

    /// Build from loosely supplied parts, validating at the boundary.
    ///
    /// Rejects a partial axis pair (both axes or neither) and brightness
    /// outside 0..=255. Axis range is checked at encode time, when the value
    /// actually meets the wire format.
    pub fn from_parts(
        x_axis: Option<f64>,
        y_axis: Option<f64>,
        brightness: Option<i64>,
    ) -> Result<Self, ConversionError> {
        let color = match (x_axis, y_axis) {
            (Some(x), Some(y)) => Some((x, y)),
            (None, None) => None,
            (x, y) => {
                return Err(ConversionError::IncompleteValue {
                    dpt: DptColorXyy::NAME,
                    value: format!("x_axis: {x:?}, y_axis: {y:?}"),
                })
            }
        };
        let brightness = brightness
            .map(|b| {
                u8::try_from(b).map_err(|_| ConversionError::OutOfRange {
                    dpt: DptColorXyy::NAME,
                    value: format!("brightness: {b}"),
                })
            })
            .transpose()?;
        Ok(XyyColor { color, brightness })
    }
}

/// 6-octet color xyY codec.
///
/// Layout: bytes 0-1 x-axis, bytes 2-3 y-axis (each big-endian 16-bit fixed
/// point over [0, 1]), byte 4 raw brightness, byte 5 validity bitmask
/// (`color_valid << 1 | brightness_valid`, high bits reserved as zero).
#[derive(Debug)]
pub struct DptColorXyy;

impl Dpt for DptColorXyy {
    type Value = XyyColor;

    const NAME: &'static str = "DptColorXyy";
    const PAYLOAD_LENGTH: usize = 6;

    fn encode(value: &XyyColor) -> Result<Vec<u8>, ConversionError> {
        let mut raw = vec![0u8; Self::PAYLOAD_LENGTH];

        if let Some((x_axis, y_axis)) = value.color {
            for axis in [x_axis, y_axis] {
                if !(0.0..=1.0).contains(&axis) {
                    return Err(ConversionError::OutOfRange {
                        dpt: Self::NAME,
                        value: format!("axis: {axis}"),
                    });
                }
            }
            BigEndian::write_u16(&mut raw[0..2], encode_fraction(x_axis));
            BigEndian::write_u16(&mut raw[2..4], encode_fraction(y_axis));
        }
        if let Some(brightness) = value.brightness {
            raw[4] = brightness;
        }
        raw[5] = pack_flags([value.color.is_some(), value.brightness.is_some()]);
        Ok(raw)
    }

    fn decode(raw: &[u8]) -> Result<XyyColor, ConversionError> {
        if raw.len() != Self::PAYLOAD_LENGTH {
            return Err(ConversionError::PayloadLength {
                dpt: Self::NAME,
                expected: Self::PAYLOAD_LENGTH,
                actual: raw.len(),
            });
        }
        let [color_valid, brightness_valid] = unpack_flags(raw[5]);
        Ok(XyyColor {
            color: color_valid.then(|| {
                (
                    decode_fraction(BigEndian::read_u16(&raw[0..2])),
                    decode_fraction(BigEndian::read_u16(&raw[2..4])),
                )
            }),
            brightness: brightness_valid.then_some(raw[4]),
        })
    }
}
