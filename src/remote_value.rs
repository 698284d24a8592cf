//! Remote values: the bridge between typed application state and wire-level
//! telegrams for one destination/type pair.

use std::marker::PhantomData;

use crossbeam_channel::Sender;
use tracing::debug;

use crate::address::GroupAddress;
use crate::dpt::{ConversionError, Dpt};
use crate::telegram::{Apci, Telegram};

/// Failure of a [`RemoteValue::set`] call. Nothing is queued in either case.
#[derive(Debug, thiserror::Error)]
pub enum RemoteValueError {
    /// The value did not pass the codec's domain validation.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// The transport side of the outbound queue has hung up.
    #[error("outbound telegram queue closed")]
    QueueClosed,
}

/// Synchronizes local state with bus traffic for one group address and one
/// datapoint type.
///
/// The destination is fixed at construction; the outbound queue handle is
/// injected, never reached through ambient state. The cached value starts
/// unknown and is only ever overwritten by a successful decode.
///
/// A bridge has a single logical owner: callers serialize `set` and `process`
/// on the same instance (one event loop, or an external lock).
pub struct RemoteValue<D: Dpt> {
    destination: GroupAddress,
    outbound: Sender<Telegram>,
    value: Option<D::Value>,
    _dpt: PhantomData<D>,
}

impl<D: Dpt> RemoteValue<D> {
    pub fn new(destination: GroupAddress, outbound: Sender<Telegram>) -> Self {
        RemoteValue {
            destination,
            outbound,
            value: None,
            _dpt: PhantomData,
        }
    }

    pub fn destination(&self) -> GroupAddress {
        self.destination
    }

    /// Last successfully received value, or `None` while unknown.
    ///
    /// Decode failures never clear a previously cached value.
    pub fn value(&self) -> Option<&D::Value> {
        self.value.as_ref()
    }

    /// Encode `value` and enqueue exactly one group write telegram.
    ///
    /// On encode failure the error propagates and nothing is queued. No
    /// coalescing, no retry: two `set` calls enqueue two telegrams in call
    /// order.
    pub fn set(&mut self, value: &D::Value) -> Result<(), RemoteValueError> {
        let raw = D::encode(value)?;
        let telegram = Telegram::write(self.destination, D::to_payload(raw));
        debug!(destination = %self.destination, dpt = D::NAME, "queueing group write");
        self.outbound
            .send(telegram)
            .map_err(|_| RemoteValueError::QueueClosed)
    }

    /// Validate and apply an incoming telegram.
    ///
    /// Returns `false` without touching the cache when the telegram is not
    /// for this bridge (foreign destination, not a group write, wrong payload
    /// kind) or when its payload fails to decode. Decode failures are
    /// reported through the return value only; malformed bus traffic must not
    /// crash the endpoint. Returns `true` after overwriting the cache.
    pub fn process(&mut self, telegram: &Telegram) -> bool {
        if telegram.destination != self.destination {
            return false;
        }
        let Apci::GroupValueWrite(payload) = &telegram.payload else {
            return false;
        };
        match D::from_payload(payload) {
            Ok(value) => {
                self.value = Some(value);
                true
            }
            Err(err) => {
                debug!(destination = %self.destination, dpt = D::NAME, %err, "telegram not applicable");
                false
            }
        }
    }
}

/// Remote value for the 6-octet color xyY datapoint.
pub type RemoteValueColorXyy = RemoteValue<crate::color::DptColorXyy>;
