//! Interaction interception: copy, paste, key suppression, and the
//! post-mount scroll.

use std::time::Duration;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::config::{Config, ScrollConfig};
use crate::document::{CONSOLE_ID, Document, SelectionNode, TERMINAL_ID};
use crate::relay::PasteRelay;
use crate::selection;

/// The two interaction surfaces the host forwards events from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The root container.
    Terminal,
    /// The inner interactive region.
    Console,
}

impl Surface {
    /// Identifier of the container element backing this surface.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Terminal => TERMINAL_ID,
            Self::Console => CONSOLE_ID,
        }
    }
}

/// One user-originated interaction, delivered by the host.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent<'a> {
    /// One-time mount completion of the root container.
    Mounted,
    /// A key press within `surface`.
    KeyDown { surface: Surface },
    /// A copy interaction, carrying the live selection endpoints.
    Copy {
        anchor: SelectionNode<'a>,
        focus: SelectionNode<'a>,
    },
    /// A paste interaction.
    Paste,
}

/// Deferred scroll of the console viewport, applied by the host after
/// `delay`. Fire and forget; nothing orders it against later events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub x: i32,
    pub y: i32,
    pub delay: Duration,
}

/// What the host must do after the bridge has handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The event is consumed; the host's default handling must not run.
    Consumed,
    /// Consumed, and the console viewport should additionally be
    /// scrolled.
    Scroll(ScrollRequest),
}

/// Wires copy/paste interactions to selection serialization and the
/// paste relay.
///
/// Constructed once with its collaborators and handed every interaction.
/// Handlers are stateless and independent; a failed interaction leaves
/// nothing behind for the next one.
pub struct ConsoleBridge<D, C, R> {
    document: D,
    clipboard: C,
    relay: R,
    scroll: ScrollConfig,
}

impl<D: Document, C: Clipboard, R: PasteRelay> ConsoleBridge<D, C, R> {
    /// Creates a bridge over the live `document` with the given clipboard
    /// and paste relay.
    pub fn new(document: D, clipboard: C, relay: R, config: &Config) -> Self {
        Self {
            document,
            clipboard,
            relay,
            scroll: config.scroll,
        }
    }

    /// The live document this bridge reads selections from.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Handles one interaction.
    ///
    /// Every event is consumed: host defaults never run inside the grid,
    /// so keystrokes and native paste insertion cannot disturb the cell
    /// addressing.
    pub fn handle(&mut self, event: InputEvent<'_>) -> Handled {
        match event {
            InputEvent::Mounted => Handled::Scroll(ScrollRequest {
                x: self.scroll.x,
                y: self.scroll.y,
                delay: Duration::from_millis(self.scroll.delay_ms),
            }),
            InputEvent::KeyDown { .. } => Handled::Consumed,
            InputEvent::Copy { anchor, focus } => {
                self.copy(anchor, focus);
                Handled::Consumed
            }
            InputEvent::Paste => {
                self.paste();
                Handled::Consumed
            }
        }
    }

    /// Serializes the selection and writes it to the clipboard.
    ///
    /// An unresolvable endpoint aborts the copy with nothing written; the
    /// event stays consumed either way, so the host's own copy never runs
    /// in its place.
    fn copy(&mut self, anchor: SelectionNode<'_>, focus: SelectionNode<'_>) {
        let text = match selection::serialize_selection(&self.document, anchor, focus) {
            Ok(text) => text,
            Err(err) => {
                log::debug!("copy aborted: {err}");
                return;
            }
        };
        if let Err(err) = self.clipboard.set_text(&text) {
            // Surfaced by the platform itself; not retried.
            log::warn!("clipboard write failed: {err}");
        }
    }

    /// Reads the clipboard and forwards the text through the relay.
    fn paste(&mut self) {
        let text = match self.clipboard.get_text() {
            Ok(text) => text,
            // An empty clipboard still relays an empty payload.
            Err(ClipboardError::Empty) => String::new(),
            Err(err) => {
                log::warn!("clipboard read failed: {err}");
                return;
            }
        };
        self.relay.set_payload(text);
        self.relay.activate();
    }
}
