//! Decode fuzz target: feed arbitrary bytes to the color xyY decoder.
//! Decoding must not panic; it returns Ok(XyyColor) or Err(ConversionError).
//! Build with: cargo fuzz run decode_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    use groupbus::{Dpt, DptColorXyy};
    let _ = DptColorXyy::decode(data);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run decode_fuzz");
}
