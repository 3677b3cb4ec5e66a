// src/ui/clipboard.rs
use std::io::Read;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use thiserror::Error;

/// Set in the environment of the helper process that keeps a copied
/// password on the clipboard after `heslo` exits.
pub const HOLDER_ENV: &str = "HESLO_CLIPBOARD_HOLDER";

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Makes the last written text outlive this process. Most clipboards
    /// keep it on their own.
    async fn persist(&self) -> Result<(), ClipboardError> {
        Ok(())
    }
}

#[derive(Default)]
struct Selection {
    // On X11 and Wayland the text is served by whoever owns this handle
    owner: Option<arboard::Clipboard>,
    last: Option<String>,
}

/// The desktop clipboard, reached through `arboard`. The handle is opened
/// on the first write and kept for as long as this value lives.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    selection: Arc<Mutex<Selection>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn last_written(&self) -> Option<String> {
        self.selection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last
            .clone()
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        let selection = Arc::clone(&self.selection);
        // arboard talks to the display server synchronously
        tokio::task::spawn_blocking(move || {
            let mut selection = selection.lock().unwrap_or_else(PoisonError::into_inner);
            if selection.owner.is_none() {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                selection.owner = Some(clipboard);
            }
            if let Some(clipboard) = selection.owner.as_mut() {
                clipboard
                    .set_text(text.clone())
                    .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
            }
            selection.last = Some(text);
            Ok(())
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
    }

    async fn persist(&self) -> Result<(), ClipboardError> {
        match self.last_written() {
            Some(text) if cfg!(target_os = "linux") => spawn_holder(&text),
            _ => Ok(()),
        }
    }
}

/// Re-executes `heslo` as a detached helper that takes over the selection
/// and serves it until another program claims the clipboard.
fn spawn_holder(text: &str) -> Result<(), ClipboardError> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let exe = std::env::current_exe().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    let mut command = Command::new(exe);
    command
        .env(HOLDER_ENV, "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let mut child = command
        .spawn()
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| ClipboardError::Unavailable("holder has no stdin".to_string()))?;
    stdin
        .write_all(text.as_bytes())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

    log::debug!("Clipboard holder started as pid {}", child.id());
    Ok(())
}

pub fn is_holder_process() -> bool {
    std::env::var_os(HOLDER_ENV).is_some()
}

/// Entry point of the helper process: reads the text from stdin and keeps
/// the selection until it is replaced.
pub fn run_holder() -> Result<(), ClipboardError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

    hold_selection(&mut clipboard, text).map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

// Blocks until another program takes the selection over
#[cfg(target_os = "linux")]
fn hold_selection(clipboard: &mut arboard::Clipboard, text: String) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn hold_selection(clipboard: &mut arboard::Clipboard, text: String) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
