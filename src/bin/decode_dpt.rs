//! Decode a color xyY payload given as hex bytes on the command line.
//!
//! Usage:
//!   decode_dpt FF FF 66 66 FA 03
//!   decode_dpt ffff6666fa03

use anyhow::{bail, Context, Result};
use groupbus::{Dpt, DptColorXyy};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        bail!("usage: decode_dpt <hex bytes>");
    }
    let hex: String = args.concat().replace([' ', ':'], "");
    if hex.len() % 2 != 0 {
        bail!("odd number of hex digits");
    }
    let raw: Vec<u8> = (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .with_context(|| format!("invalid hex byte {:?}", &hex[i..i + 2]))
        })
        .collect::<Result<_>>()?;

    let value = DptColorXyy::decode(&raw)?;
    match value.color {
        Some((x_axis, y_axis)) => println!("color: x={x_axis} y={y_axis}"),
        None => println!("color: invalid"),
    }
    match value.brightness {
        Some(brightness) => println!("brightness: {brightness}"),
        None => println!("brightness: invalid"),
    }
    Ok(())
}
