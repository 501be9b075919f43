use super::config::Language;

/// Internationalization support for UI text
pub struct I18n {
    #[allow(dead_code)]
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        match key {
            // Header
            "app.title" => "Todo Enhanced",
            "header.todos" => "todos",
            "button.export" => "Export MD",
            "button.paste" => "Paste URL",

            // Main panel
            "progress.title" => "Progress",
            "progress.completed" => "completed",
            "progress.open" => "open",
            "list.title" => "Todos",
            "list.empty" => "No todos yet.",
            "list.empty_hint" => "Press a to add one, or p to capture a URL from the clipboard.",

            // Input overlay
            "input.title" => "New Todo",
            "input.confirm" => "to add",
            "input.cancel" => "to cancel",

            // Controls
            "controls.navigation" => "Navigation:",
            "controls.add" => "add",
            "controls.toggle" => "toggle",
            "controls.delete" => "delete",
            "controls.export" => "export",
            "controls.paste" => "paste URL",
            "controls.theme" => "Theme:",
            "controls.help" => "Help:",
            "controls.quit" => "quit",

            // Help overlay - keys
            "help.keys.title" => "Keyboard Reference",
            "help.keys.line1" => "Everyday keys:",
            "help.keys.line2" => "",
            "help.keys.line3" => "a       Add a new todo (Enter commits, Esc cancels)",
            "help.keys.line4" => "Space   Toggle the selected todo between Open and Done",
            "help.keys.line5" => "d       Delete the selected todo",
            "help.keys.line6" => "j/k ↑↓  Move the selection (wraps around)",
            "help.keys.line7" => "t       Cycle theme, ? toggles this help, q quits",

            // Help overlay - export
            "help.export.title" => "Export to Markdown",
            "help.export.line1" => "e copies the whole list to the system clipboard as",
            "help.export.line2" => "a Markdown bullet list, one \"- \" line per todo in",
            "help.export.line3" => "list order. Paste it straight into notes or a PR.",

            // Help overlay - paste
            "help.paste.title" => "Paste URL",
            "help.paste.line1" => "p appends whatever URL (or text) is currently on the",
            "help.paste.line2" => "clipboard as a new todo. Only the first non-empty",
            "help.paste.line3" => "line is taken, with surrounding whitespace trimmed.",

            // General
            "theme.title" => "Theme",
            "theme.cycle_hint" => "t to cycle",

            _ => key, // Fallback to key if not found
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_resolve() {
        let i18n = I18n::new(Language::English);
        assert_eq!(i18n.t("app.title"), "Todo Enhanced");
        assert_eq!(i18n.t("button.export"), "Export MD");
        assert_eq!(i18n.t("button.paste"), "Paste URL");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let i18n = I18n::new(Language::English);
        assert_eq!(i18n.t("does.not.exist"), "does.not.exist");
    }
}
