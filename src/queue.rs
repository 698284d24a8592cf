//! Outbound telegram queue: strict FIFO between remote value bridges
//! (producers) and the transport (consumer).

use crossbeam_channel::{unbounded, Receiver, RecvError, Sender, TryRecvError};

use crate::telegram::Telegram;

/// FIFO of fully formed telegrams awaiting transmission.
///
/// Bridges hold cloned [`Sender`] handles obtained from [`sender`]; enqueueing
/// never blocks. The transport side drains with [`recv`] (blocking) or
/// [`try_recv`] (polling). Telegrams come out in the order they were sent.
///
/// [`sender`]: TelegramQueue::sender
/// [`recv`]: TelegramQueue::recv
/// [`try_recv`]: TelegramQueue::try_recv
#[derive(Debug)]
pub struct TelegramQueue {
    tx: Sender<Telegram>,
    rx: Receiver<Telegram>,
}

impl TelegramQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        TelegramQueue { tx, rx }
    }

    /// Producer handle for a bridge.
    pub fn sender(&self) -> Sender<Telegram> {
        self.tx.clone()
    }

    /// Block until the next telegram is available.
    pub fn recv(&self) -> Result<Telegram, RecvError> {
        self.rx.recv()
    }

    /// Poll for the next telegram without blocking.
    pub fn try_recv(&self) -> Result<Telegram, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for TelegramQueue {
    fn default() -> Self {
        Self::new()
    }
}
