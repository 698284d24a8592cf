//! # groupbus — field-bus datapoint codecs and remote values
//!
//! Converts typed application values to and from fixed-width binary payloads
//! exchanged on a group-addressed field bus, and bridges those payloads to
//! "remote values" that keep local state in sync with bus traffic.
//!
//! ## Components
//!
//! - [`bits`]: 16-bit fixed-point fractions and validity-bitmask packing.
//! - [`Dpt`]: the composite datapoint codec contract (declared fixed payload
//!   length, `encode`/`decode`, trailing validity bitmask for independently
//!   optional fields).
//! - [`DptColorXyy`]: the 6-octet chromaticity + brightness instance.
//! - [`RemoteValue`]: per-address bridge; `set` encodes and queues a group
//!   write, `process` validates and applies inbound telegrams, reporting
//!   applicability as a boolean rather than an error.
//! - [`TelegramQueue`]: strict-FIFO handoff between bridges and the
//!   transport (transport itself is out of scope).
//!
//! ## Example
//!
//! ```
//! use groupbus::{RemoteValueColorXyy, TelegramQueue, XyyColor};
//!
//! let queue = TelegramQueue::new();
//! let mut light = RemoteValueColorXyy::new("1/2/3".parse().unwrap(), queue.sender());
//!
//! light.set(&XyyColor::new(Some((0.3127, 0.329)), Some(204))).unwrap();
//! assert_eq!(queue.len(), 1);
//! ```

pub mod address;
pub mod bits;
pub mod color;
pub mod dpt;
pub mod queue;
pub mod remote_value;
pub mod telegram;

pub use address::{AddressError, GroupAddress};
pub use color::{DptColorXyy, XyyColor};
pub use dpt::{ConversionError, Dpt};
pub use queue::TelegramQueue;
pub use remote_value::{RemoteValue, RemoteValueColorXyy, RemoteValueError};
pub use telegram::{Apci, Telegram, TelegramPayload};
