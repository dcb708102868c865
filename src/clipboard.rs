use std::{fmt::Display, rc::Rc};

use log::{debug, warn};

#[derive(Debug)]
pub enum ClipboardError {
    Unavailable,
    Denied(String),
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable => f.write_str("clipboard is not available"),
            ClipboardError::Denied(reason) => write!(f, "clipboard write denied: {reason}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Handle to the platform clipboard, shared through component context.
/// Server-side rendering runs without one.
#[derive(Clone)]
pub struct Clipboard(Rc<dyn ClipboardWriter>);

impl Clipboard {
    pub fn new<W: ClipboardWriter + 'static>(writer: W) -> Self {
        Self(Rc::new(writer))
    }

    pub fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.0.write_text(text)
    }
}

/// Writes `text` to `clipboard` and reports whether it got there. Failures
/// end here: they are logged and never passed on to the caller.
pub fn copy_text(clipboard: Option<&Clipboard>, text: &str) -> bool {
    let result = clipboard
        .ok_or(ClipboardError::Unavailable)
        .and_then(|clipboard| clipboard.write_text(text));

    match result {
        Ok(()) => {
            debug!("Copied {text:?}");
            true
        }
        Err(err) => {
            warn!("Copying {text:?} failed: {err}");
            false
        }
    }
}
