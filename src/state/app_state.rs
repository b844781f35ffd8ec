//! Application state definitions

use super::composer::ComposerState;
use super::draft::FieldDef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    /// Saved forms list (the Idle half of the create workflow)
    #[default]
    Forms,
    /// Preview of a single saved form
    FormDetail,
    /// The composer (the Composing half of the create workflow)
    Compose,
}

/// A persisted form as returned by the backend.
///
/// The backend is lenient about shape: one deployment omits `name`, older
/// documents use Mongo's `_id`, and `fields` can be absent entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedForm {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SavedForm {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled form")
    }
}

/// A delete awaiting confirmation in the dialog
#[derive(Debug, Clone)]
pub struct PendingDeleteAction {
    pub form_id: String,
    pub form_display: String,
    /// false = Cancel, true = Delete
    pub selected_option: bool,
}

impl PendingDeleteAction {
    pub fn new(form: &SavedForm) -> Self {
        Self {
            form_id: form.id.clone(),
            form_display: form.display_name().to_string(),
            selected_option: false,
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Data
    pub saved_forms: Vec<SavedForm>,

    // Selection
    pub selected_index: usize,

    // UI state
    pub scroll_offset: usize,
    pub backend_connected: bool,
    pub pending_delete: Option<PendingDeleteAction>,
    errors: VecDeque<String>,

    // Composer
    pub composer: ComposerState,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep the selection inside the current list after a refresh or delete
    pub fn clamp_selection(&mut self) {
        let max = self.saved_forms.len();
        if self.selected_index >= max && max > 0 {
            self.selected_index = max - 1;
        } else if max == 0 {
            self.selected_index = 0;
        }
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// The saved form under the cursor
    pub fn selected_form(&self) -> Option<&SavedForm> {
        self.saved_forms.get(self.selected_index)
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldType;
    use pretty_assertions::assert_eq;

    fn form(id: &str) -> SavedForm {
        SavedForm {
            id: id.to_string(),
            name: Some(format!("Form {id}")),
            fields: vec![FieldDef::new("Name", FieldType::Text)],
            created_at: None,
        }
    }

    mod view {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_forms() {
            assert_eq!(View::default(), View::Forms);
        }
    }

    mod saved_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_deserializes_full_shape() {
            let json = r#"{
                "id": "abc123",
                "name": "Contact",
                "fields": [{"name": "Email", "type": "email"}],
                "createdAt": "2024-03-01T12:00:00Z"
            }"#;
            let form: SavedForm = serde_json::from_str(json).unwrap();
            assert_eq!(form.id, "abc123");
            assert_eq!(form.display_name(), "Contact");
            assert_eq!(form.fields.len(), 1);
            assert!(form.created_at.is_some());
        }

        #[test]
        fn test_accepts_mongo_style_id() {
            let form: SavedForm =
                serde_json::from_str(r#"{"_id": "65f0", "fields": []}"#).unwrap();
            assert_eq!(form.id, "65f0");
        }

        #[test]
        fn test_tolerates_missing_name_and_fields() {
            let form: SavedForm = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
            assert_eq!(form.display_name(), "Untitled form");
            assert!(form.fields.is_empty());
            assert!(form.created_at.is_none());
        }

        #[test]
        fn test_ignores_unknown_backend_fields() {
            let form: SavedForm =
                serde_json::from_str(r#"{"id": "x", "__v": 0, "updatedAt": "nope"}"#).unwrap();
            assert_eq!(form.id, "x");
        }
    }

    mod selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_move_selection_stays_in_bounds() {
            let mut state = AppState::default();
            state.saved_forms = vec![form("1"), form("2")];

            state.move_selection_down(state.saved_forms.len());
            state.move_selection_down(state.saved_forms.len());
            assert_eq!(state.selected_index, 1);

            state.move_selection_up();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_clamp_selection_after_shrink() {
            let mut state = AppState::default();
            state.saved_forms = vec![form("1"), form("2"), form("3")];
            state.selected_index = 2;

            state.saved_forms.pop();
            state.clamp_selection();

            assert_eq!(state.selected_index, 1);
        }

        #[test]
        fn test_clamp_selection_on_empty_list() {
            let mut state = AppState::default();
            state.selected_index = 5;
            state.clamp_selection();
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_selected_form_returns_cursor_row() {
            let mut state = AppState::default();
            state.saved_forms = vec![form("1"), form("2")];
            state.selected_index = 1;
            assert_eq!(state.selected_form().unwrap().id, "2");
        }
    }

    mod error_queue {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_errors_are_shown_in_fifo_order() {
            let mut state = AppState::default();
            state.push_error("first");
            state.push_error("second");

            assert!(state.has_errors());
            assert_eq!(state.current_error(), Some("first"));

            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));

            state.dismiss_error();
            assert!(!state.has_errors());
        }

        #[test]
        fn test_dismiss_on_empty_queue_is_noop() {
            let mut state = AppState::default();
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }

    mod pending_delete {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_defaults_to_cancel_option() {
            let action = PendingDeleteAction::new(&form("9"));
            assert_eq!(action.form_id, "9");
            assert_eq!(action.form_display, "Form 9");
            assert!(!action.selected_option);
        }
    }
}
