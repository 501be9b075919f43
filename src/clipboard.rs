use anyhow::Result;
use arboard::Clipboard;
use tokio::sync::mpsc;

/// Request sent to the clipboard worker
#[derive(Debug, Clone)]
pub enum ClipboardRequest {
    /// Put the given text on the system clipboard
    Copy(String),
    /// Read the current clipboard text
    Paste,
}

/// Event emitted by the clipboard worker once a request finishes
#[derive(Debug, Clone)]
pub enum ClipboardEvent {
    Copied,
    Pasted(String),
    Failed(String),
}

/// Spawn the background clipboard worker
///
/// Clipboard calls can block while talking to the display server, so each
/// operation runs on the blocking pool and reports back over the event
/// channel. The worker exits when the request sender is dropped.
pub fn spawn_worker() -> (
    mpsc::UnboundedSender<ClipboardRequest>,
    mpsc::UnboundedReceiver<ClipboardEvent>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ClipboardRequest>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<ClipboardEvent>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let event = match tokio::task::spawn_blocking(move || handle_request(request)).await {
                Ok(event) => event,
                Err(e) => ClipboardEvent::Failed(e.to_string()),
            };

            if event_tx.send(event).is_err() {
                break;
            }
        }
    });

    (request_tx, event_rx)
}

fn handle_request(request: ClipboardRequest) -> ClipboardEvent {
    match request {
        ClipboardRequest::Copy(text) => match copy_text(text) {
            Ok(()) => ClipboardEvent::Copied,
            Err(e) => ClipboardEvent::Failed(e.to_string()),
        },
        ClipboardRequest::Paste => match paste_text() {
            Ok(text) => ClipboardEvent::Pasted(text),
            Err(e) => ClipboardEvent::Failed(e.to_string()),
        },
    }
}

fn copy_text(text: String) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

fn paste_text() -> Result<String> {
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}

/// First non-empty line of pasted text, trimmed
///
/// Browsers put a single URL on the clipboard, but terminals and editors
/// often add surrounding whitespace or trailing newlines.
pub fn first_nonempty_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_nonempty_line_plain_url() {
        assert_eq!(
            first_nonempty_line("https://example.com/page"),
            Some("https://example.com/page")
        );
    }

    #[test]
    fn test_first_nonempty_line_trims_whitespace() {
        assert_eq!(
            first_nonempty_line("  https://example.com  \n"),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_first_nonempty_line_skips_blank_lines() {
        assert_eq!(
            first_nonempty_line("\n   \nsecond line\nthird"),
            Some("second line")
        );
    }

    #[test]
    fn test_first_nonempty_line_empty_input() {
        assert_eq!(first_nonempty_line(""), None);
        assert_eq!(first_nonempty_line("\n\n  \n"), None);
    }
}
