use crate::features::todos::TodoItem;

/// Serialize todos as a Markdown bullet list
///
/// One `- ` line per item in input order, joined with single newlines and no
/// trailing newline. An empty list yields an empty string. Status and other
/// fields are ignored; only the text travels.
pub fn generate_markdown(todos: &[TodoItem]) -> String {
    todos
        .iter()
        .map(|todo| format!("- {}", todo.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::todos::{TodoItem, TodoStatus};

    fn items(texts: &[&str]) -> Vec<TodoItem> {
        texts.iter().map(|text| TodoItem::new(*text)).collect()
    }

    #[test]
    fn test_empty_list_yields_empty_string() {
        assert_eq!(generate_markdown(&[]), "");
    }

    #[test]
    fn test_single_item() {
        assert_eq!(generate_markdown(&items(&["a"])), "- a");
    }

    #[test]
    fn test_multiple_items_joined_with_newlines() {
        assert_eq!(generate_markdown(&items(&["a", "b"])), "- a\n- b");
    }

    #[test]
    fn test_no_trailing_newline() {
        let output = generate_markdown(&items(&["a", "b", "c"]));
        assert!(!output.ends_with('\n'));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let forward = generate_markdown(&items(&["x", "y", "z"]));
        assert_eq!(forward, "- x\n- y\n- z");

        let reversed = generate_markdown(&items(&["z", "y", "x"]));
        assert_eq!(reversed, "- z\n- y\n- x");
    }

    #[test]
    fn test_idempotent_on_same_input() {
        let todos = items(&["buy milk", "ship v0.3"]);
        assert_eq!(generate_markdown(&todos), generate_markdown(&todos));
    }

    #[test]
    fn test_done_items_render_like_open_ones() {
        let mut todos = items(&["finished task"]);
        todos[0].status = TodoStatus::Done;
        assert_eq!(generate_markdown(&todos), "- finished task");
    }

    #[test]
    fn test_unicode_text_passes_through() {
        assert_eq!(generate_markdown(&items(&["한글 할일"])), "- 한글 할일");
    }
}
