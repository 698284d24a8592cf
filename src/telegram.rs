//! Telegrams: one discrete unit of bus communication, addressed to a group.

use crate::address::GroupAddress;

/// Payload carried by a group command.
///
/// The two kinds are structurally incompatible: a datapoint type declares
/// which kind it consumes, and a payload of the other kind is a routing
/// mismatch, not a decode attempt. Payloads are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelegramPayload {
    /// Byte-array payload of a per-type fixed length.
    Array(Vec<u8>),
    /// Small value carried inside the command octet (up to 6 bits).
    Binary(u8),
}

/// Application-layer command of a telegram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Apci {
    GroupValueWrite(TelegramPayload),
    GroupValueRead,
}

/// One telegram on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telegram {
    pub destination: GroupAddress,
    pub payload: Apci,
}

impl Telegram {
    /// A group value write carrying `payload` to `destination`.
    pub fn write(destination: GroupAddress, payload: TelegramPayload) -> Self {
        Telegram {
            destination,
            payload: Apci::GroupValueWrite(payload),
        }
    }

    /// A group value read request for `destination`.
    pub fn read(destination: GroupAddress) -> Self {
        Telegram {
            destination,
            payload: Apci::GroupValueRead,
        }
    }
}
