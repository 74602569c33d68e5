//! Out-of-band handoff of pasted text to the external host.

use std::sync::mpsc;

/// Two-phase paste handoff: stage a payload, then activate the relay so
/// the host observes it through its own authoritative path.
///
/// In a rendered tree the relay is the hidden element named by
/// [`PASTE_TARGET_ID`](crate::document::PASTE_TARGET_ID); here it is a
/// seam the host implements. The grid itself is never written; the host
/// applies pasted text on its own terms after the relay fires.
pub trait PasteRelay {
    /// Stages `text` as the relay payload without notifying the host.
    fn set_payload(&mut self, text: String);

    /// Notifies the host that the staged payload is ready.
    fn activate(&mut self);
}

impl<R: PasteRelay + ?Sized> PasteRelay for &mut R {
    fn set_payload(&mut self, text: String) {
        (**self).set_payload(text);
    }

    fn activate(&mut self) {
        (**self).activate();
    }
}

/// Relay that hands activated payloads to the host over an mpsc channel.
#[derive(Debug)]
pub struct ChannelRelay {
    pending: Option<String>,
    tx: mpsc::Sender<String>,
}

impl ChannelRelay {
    /// Creates a relay sending into `tx`.
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self { pending: None, tx }
    }

    /// The staged payload, if one has been set and not yet activated.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}

impl PasteRelay for ChannelRelay {
    fn set_payload(&mut self, text: String) {
        self.pending = Some(text);
    }

    fn activate(&mut self) {
        if let Some(text) = self.pending.take() {
            if self.tx.send(text).is_err() {
                log::debug!("paste relay activated with no host listening");
            }
        }
    }
}
