use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::clipboard::{self, ClipboardEvent, ClipboardRequest};
use crate::{features, shared, ui};
use features::export::generate_markdown;
use features::todos::TodoList;
use shared::{Config, I18n, ModernTheme, ThemeMode};
use tokio::sync::mpsc;

/// Input focus for the main view
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Actions reachable from the normal-mode key map
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    AddTodo,
    ToggleTodo,
    DeleteTodo,
    ExportMarkdown,
    PasteCurrentUrl,
    CycleTheme,
    ToggleHelp,
}

impl Action {
    /// Map a normal-mode key press to its action
    ///
    /// Each key maps to at most one action; the header buttons rely on this
    /// for their activate-exactly-once behavior.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('q') | KeyCode::Char('ㅂ') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Char('ㅓ') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Char('ㅏ') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('a') | KeyCode::Char('ㅁ') => Some(Action::AddTodo),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleTodo),
            KeyCode::Char('d') | KeyCode::Char('ㅇ') => Some(Action::DeleteTodo),
            KeyCode::Char('e') | KeyCode::Char('ㄷ') => Some(Action::ExportMarkdown),
            KeyCode::Char('p') | KeyCode::Char('ㅔ') => Some(Action::PasteCurrentUrl),
            KeyCode::Char('t') | KeyCode::Char('ㅅ') => Some(Action::CycleTheme),
            KeyCode::Char('?') | KeyCode::Char('/') => Some(Action::ToggleHelp),
            _ => None,
        }
    }
}

/// Status message for user feedback
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub timestamp: std::time::Instant,
    pub message_type: StatusType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusType {
    Info,
    Success,
    Warning,
    Error,
}

/// Text input state for the new-todo overlay
///
/// The cursor is a grapheme index, not a byte offset, so editing stays
/// correct for multi-byte and wide characters.
#[derive(Debug, Default)]
pub struct InputState {
    pub buffer: String,
    cursor: usize,
}

impl InputState {
    fn byte_offset(&self, grapheme_index: usize) -> usize {
        self.buffer
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.buffer.len())
    }

    pub fn grapheme_count(&self) -> usize {
        self.buffer.graphemes(true).count()
    }

    /// Visual width of the text left of the cursor, for cursor placement
    pub fn width_before_cursor(&self) -> usize {
        self.buffer
            .graphemes(true)
            .take(self.cursor)
            .map(|g| g.width())
            .sum()
    }

    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.buffer.insert(offset, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.buffer.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.buffer.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.grapheme_count() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

fn theme_for_mode(mode: ThemeMode) -> ModernTheme {
    match mode {
        ThemeMode::Dark => ModernTheme::dark(),
        ThemeMode::Light => ModernTheme::light(),
        ThemeMode::Ocean => ModernTheme::ocean(),
    }
}

/// Main application state
pub struct App {
    /// Flag to indicate if the app should quit
    pub should_quit: bool,
    /// In-memory todo list
    pub todos: TodoList,
    /// Application configuration
    pub config: Config,
    /// Application theme
    pub theme: ModernTheme,
    /// Internationalization
    pub i18n: I18n,
    /// Currently selected todo index
    pub selected: usize,
    /// Whether the new-todo overlay is open
    pub input_mode: InputMode,
    /// New-todo input buffer
    pub input: InputState,
    /// Current status message
    pub status_message: Option<StatusMessage>,
    /// Flag to indicate if UI needs redraw
    needs_redraw: bool,
    /// Todo count captured when an export is queued, for the result message
    pending_export: usize,
    /// Background clipboard worker channels
    clipboard_tx: mpsc::UnboundedSender<ClipboardRequest>,
    clipboard_rx: mpsc::UnboundedReceiver<ClipboardEvent>,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let theme = theme_for_mode(config.theme_mode);
        let i18n = I18n::new(config.language.clone());

        // Setup background clipboard worker
        let (clipboard_tx, clipboard_rx) = clipboard::spawn_worker();

        Ok(Self {
            should_quit: false,
            todos: TodoList::new(),
            config,
            theme,
            i18n,
            selected: 0,
            input_mode: InputMode::Normal,
            input: InputState::default(),
            status_message: None,
            needs_redraw: true,
            pending_export: 0,
            clipboard_tx,
            clipboard_rx,
        })
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        if !IsTty::is_tty(&io::stdout()) {
            eprintln!("This application requires a TTY terminal to run.");
            return Ok(());
        }

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        while !self.should_quit {
            // Apply finished clipboard operations
            while let Ok(event) = self.clipboard_rx.try_recv() {
                self.handle_clipboard_event(event);
            }

            // Update status message (auto-clear after 2 seconds)
            self.update_status_message(std::time::Duration::from_secs(2));

            // Only redraw if something changed
            if self.needs_redraw {
                terminal.draw(|f| ui::draw(f, self))?;
                self.needs_redraw = false;
            }

            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key.code, key.modifiers)?;
                    self.needs_redraw = true; // Redraw after user input
                }
            }
        }

        self.cleanup()?;

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key_event(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> Result<()> {
        // Handle help overlay first
        if self.config.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Char('/') | KeyCode::Esc => {
                    self.config.toggle_help();
                    let _ = self.config.save(); // Save config after change
                }
                _ => {}
            }
            return Ok(());
        }

        // Input overlay has its own editing keys
        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key);
            return Ok(());
        }

        if let Some(action) = Action::from_key(key) {
            self.dispatch(action)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveDown => self.move_selection_down(),
            Action::MoveUp => self.move_selection_up(),
            Action::AddTodo => self.start_input(),
            Action::ToggleTodo => self.toggle_selected(),
            Action::DeleteTodo => self.delete_selected(),
            Action::ExportMarkdown => self.export_to_markdown(),
            Action::PasteCurrentUrl => self.paste_current_url(),
            Action::CycleTheme => self.cycle_theme()?,
            Action::ToggleHelp => self.toggle_help()?,
        }
        Ok(())
    }

    /// Handle keys while the new-todo overlay is open
    fn handle_editing_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.commit_input(),
            KeyCode::Esc => self.cancel_input(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Char(c) => self.input.insert(c),
            _ => {}
        }
    }

    /// Move selection down in the todo list
    fn move_selection_down(&mut self) {
        if !self.todos.is_empty() {
            self.selected = (self.selected + 1) % self.todos.len();
        }
    }

    /// Move selection up in the todo list
    fn move_selection_up(&mut self) {
        if !self.todos.is_empty() {
            self.selected = if self.selected == 0 {
                self.todos.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    fn start_input(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Editing;
    }

    fn commit_input(&mut self) {
        let text = self.input.buffer.trim().to_string();
        self.input_mode = InputMode::Normal;
        self.input.clear();

        if text.is_empty() {
            self.show_status("Empty todo discarded", StatusType::Warning);
            return;
        }

        self.todos.add(text.clone());
        self.selected = self.todos.len() - 1;
        self.show_status(&format!("Added: {text}"), StatusType::Success);
    }

    fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
    }

    /// Toggle the selected todo between open and done
    fn toggle_selected(&mut self) {
        if let Some(status) = self.todos.toggle(self.selected) {
            self.show_status(&format!("Marked as {status}"), StatusType::Info);
        }
    }

    /// Delete the selected todo
    fn delete_selected(&mut self) {
        if let Some(removed) = self.todos.remove(self.selected) {
            if self.selected >= self.todos.len() && self.selected > 0 {
                self.selected = self.todos.len() - 1;
            }
            self.show_status(&format!("Deleted: {}", removed.text), StatusType::Info);
        }
    }

    /// Serialize the list as Markdown and queue a clipboard copy
    ///
    /// One activation queues exactly one copy request; the result arrives as
    /// a clipboard event in the run loop.
    fn export_to_markdown(&mut self) {
        if self.todos.is_empty() {
            self.show_status("No todos to export", StatusType::Warning);
            return;
        }

        let markdown = generate_markdown(self.todos.items());
        self.pending_export = self.todos.len();

        if self
            .clipboard_tx
            .send(ClipboardRequest::Copy(markdown))
            .is_ok()
        {
            self.show_status("Copying todos to clipboard...", StatusType::Info);
        } else {
            self.show_status("Clipboard worker is not running", StatusType::Error);
        }
    }

    /// Queue a clipboard read; the first non-empty line becomes a new todo
    fn paste_current_url(&mut self) {
        if self.clipboard_tx.send(ClipboardRequest::Paste).is_ok() {
            self.show_status("Reading clipboard...", StatusType::Info);
        } else {
            self.show_status("Clipboard worker is not running", StatusType::Error);
        }
    }

    /// Apply a finished clipboard operation to the application state
    fn handle_clipboard_event(&mut self, event: ClipboardEvent) {
        match event {
            ClipboardEvent::Copied => {
                let noun = if self.pending_export == 1 {
                    "todo"
                } else {
                    "todos"
                };
                self.show_status(
                    &format!("Copied {} {noun} as Markdown", self.pending_export),
                    StatusType::Success,
                );
            }
            ClipboardEvent::Pasted(text) => match clipboard::first_nonempty_line(&text) {
                Some(line) => {
                    self.todos.add(line.to_string());
                    self.selected = self.todos.len() - 1;
                    self.show_status(&format!("Added: {line}"), StatusType::Success);
                }
                None => self.show_status("Clipboard is empty", StatusType::Warning),
            },
            ClipboardEvent::Failed(e) => {
                self.show_status(&format!("Clipboard error: {e}"), StatusType::Error);
            }
        }
        self.needs_redraw = true;
    }

    /// Cycle to the next theme
    fn cycle_theme(&mut self) -> Result<()> {
        let new_mode = self.config.theme_mode.next();
        self.config.set_theme_mode(new_mode);
        let _ = self.config.save(); // Save config after change

        self.theme = theme_for_mode(new_mode);
        self.show_status(
            &format!("Changed theme to {}", self.config.theme_display()),
            StatusType::Success,
        );
        Ok(())
    }

    /// Toggle help overlay
    fn toggle_help(&mut self) -> Result<()> {
        self.config.toggle_help();
        let _ = self.config.save(); // Save config after change
        Ok(())
    }

    /// Get current theme instance
    pub fn current_theme(&self) -> &ModernTheme {
        &self.theme
    }

    /// Show a status message to the user
    pub fn show_status(&mut self, text: &str, status_type: StatusType) {
        self.status_message = Some(StatusMessage {
            text: text.to_string(),
            timestamp: std::time::Instant::now(),
            message_type: status_type,
        });
        self.needs_redraw = true;
    }

    /// Clear status message if it's older than the specified duration
    pub fn update_status_message(&mut self, max_age: std::time::Duration) {
        if let Some(ref msg) = self.status_message {
            if msg.timestamp.elapsed() > max_age {
                self.status_message = None;
                self.needs_redraw = true;
            }
        }
    }

    /// Clean up resources before exiting
    fn cleanup(&mut self) -> Result<()> {
        // Save current configuration before exiting
        self.config.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_key_maps_only_to_export() {
        assert_eq!(
            Action::from_key(KeyCode::Char('e')),
            Some(Action::ExportMarkdown)
        );
        assert_ne!(
            Action::from_key(KeyCode::Char('e')),
            Some(Action::PasteCurrentUrl)
        );
    }

    #[test]
    fn test_paste_key_maps_only_to_paste() {
        assert_eq!(
            Action::from_key(KeyCode::Char('p')),
            Some(Action::PasteCurrentUrl)
        );
        assert_ne!(
            Action::from_key(KeyCode::Char('p')),
            Some(Action::ExportMarkdown)
        );
    }

    #[test]
    fn test_korean_key_aliases() {
        assert_eq!(Action::from_key(KeyCode::Char('ㅂ')), Some(Action::Quit));
        assert_eq!(Action::from_key(KeyCode::Char('ㅓ')), Some(Action::MoveDown));
        assert_eq!(Action::from_key(KeyCode::Char('ㅏ')), Some(Action::MoveUp));
        assert_eq!(
            Action::from_key(KeyCode::Char('ㄷ')),
            Some(Action::ExportMarkdown)
        );
        assert_eq!(
            Action::from_key(KeyCode::Char('ㅔ')),
            Some(Action::PasteCurrentUrl)
        );
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        assert_eq!(Action::from_key(KeyCode::Char('z')), None);
        assert_eq!(Action::from_key(KeyCode::F(1)), None);
    }

    #[test]
    fn test_input_state_ascii_editing() {
        let mut input = InputState::default();
        for c in "todo".chars() {
            input.insert(c);
        }
        assert_eq!(input.buffer, "todo");

        input.backspace();
        assert_eq!(input.buffer, "tod");

        input.move_left();
        input.move_left();
        input.insert('x');
        assert_eq!(input.buffer, "txod");
    }

    #[test]
    fn test_input_state_unicode_editing() {
        let mut input = InputState::default();
        for c in "한글".chars() {
            input.insert(c);
        }
        assert_eq!(input.buffer, "한글");
        assert_eq!(input.grapheme_count(), 2);

        input.backspace();
        assert_eq!(input.buffer, "한");

        // Wide characters occupy two columns
        assert_eq!(input.width_before_cursor(), 2);
    }

    #[test]
    fn test_input_state_delete_and_bounds() {
        let mut input = InputState::default();
        input.insert('a');
        input.insert('b');

        input.move_left();
        input.move_left();
        input.delete();
        assert_eq!(input.buffer, "b");

        // Deleting past the end is a no-op
        input.move_right();
        input.delete();
        assert_eq!(input.buffer, "b");

        // Backspace at the start is a no-op
        let mut at_start = InputState::default();
        at_start.backspace();
        assert_eq!(at_start.buffer, "");
    }

    #[test]
    fn test_input_state_clear() {
        let mut input = InputState::default();
        input.insert('a');
        input.clear();
        assert_eq!(input.buffer, "");
        assert_eq!(input.grapheme_count(), 0);
        assert_eq!(input.width_before_cursor(), 0);
    }
}
