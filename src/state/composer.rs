//! Composer state: the field-entry controls and the draft they feed

use super::draft::{Draft, FieldType};

/// Which composer control currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerFocus {
    #[default]
    NameInput,
    TypeSelect,
    FieldList,
    Buttons,
}

impl ComposerFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::NameInput => Self::TypeSelect,
            Self::TypeSelect => Self::FieldList,
            Self::FieldList => Self::Buttons,
            Self::Buttons => Self::NameInput,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::NameInput => Self::Buttons,
            Self::TypeSelect => Self::NameInput,
            Self::FieldList => Self::TypeSelect,
            Self::Buttons => Self::FieldList,
        }
    }
}

/// Buttons on the composer action panel (0=Save, 1=Cancel)
pub const COMPOSER_BUTTON_COUNT: usize = 2;

/// State for the form composer view.
///
/// Owns the draft plus the transient entry controls: the field-name buffer
/// and the type selector over the configured catalog.
#[derive(Debug, Clone)]
pub struct ComposerState {
    pub name_input: String,
    pub type_index: usize,
    pub focus: ComposerFocus,
    pub selected_field: usize,
    pub selected_button: usize,
    pub draft: Draft,
    catalog: Vec<FieldType>,
}

impl ComposerState {
    pub fn new(catalog: Vec<FieldType>) -> Self {
        debug_assert!(!catalog.is_empty());
        Self {
            name_input: String::new(),
            type_index: 0,
            focus: ComposerFocus::default(),
            selected_field: 0,
            selected_button: 0,
            draft: Draft::default(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &[FieldType] {
        &self.catalog
    }

    /// The type currently shown in the selector
    pub fn selected_type(&self) -> FieldType {
        self.catalog[self.type_index.min(self.catalog.len() - 1)]
    }

    pub fn next_type(&mut self) {
        self.type_index = (self.type_index + 1) % self.catalog.len();
    }

    pub fn prev_type(&mut self) {
        if self.type_index == 0 {
            self.type_index = self.catalog.len() - 1;
        } else {
            self.type_index -= 1;
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % COMPOSER_BUTTON_COUNT;
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = COMPOSER_BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.name_input.push(c);
    }

    pub fn backspace(&mut self) {
        self.name_input.pop();
    }

    /// Append the current name/type pair to the draft.
    ///
    /// On success the name buffer is cleared and the selector returns to the
    /// first catalog entry, ready for the next field. A blank name leaves
    /// both the draft and the entry controls unchanged.
    pub fn add_current_field(&mut self) -> bool {
        let added = self.draft.add_field(&self.name_input, self.selected_type());
        if added {
            self.name_input.clear();
            self.type_index = 0;
        }
        added
    }

    /// Delete the draft field under the list cursor
    pub fn delete_selected_field(&mut self) {
        if self.draft.delete_field(self.selected_field) && self.selected_field >= self.draft.len() {
            self.selected_field = self.draft.len().saturating_sub(1);
        }
    }

    pub fn move_field_selection_down(&mut self) {
        if !self.draft.is_empty() && self.selected_field < self.draft.len() - 1 {
            self.selected_field += 1;
        }
    }

    pub fn move_field_selection_up(&mut self) {
        self.selected_field = self.selected_field.saturating_sub(1);
    }

    /// Discard the draft and all entry state (cancel or after a save)
    pub fn reset(&mut self) {
        self.name_input.clear();
        self.type_index = 0;
        self.focus = ComposerFocus::default();
        self.selected_field = 0;
        self.selected_button = 0;
        self.draft.clear();
    }
}

impl Default for ComposerState {
    fn default() -> Self {
        Self::new(FieldType::ALL.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldDef;

    mod focus {
        use super::*;

        #[test]
        fn test_next_cycles_through_all_controls() {
            let mut focus = ComposerFocus::NameInput;
            focus = focus.next();
            assert_eq!(focus, ComposerFocus::TypeSelect);
            focus = focus.next();
            assert_eq!(focus, ComposerFocus::FieldList);
            focus = focus.next();
            assert_eq!(focus, ComposerFocus::Buttons);
            focus = focus.next();
            assert_eq!(focus, ComposerFocus::NameInput); // Wrapped back
        }

        #[test]
        fn test_prev_wraps_from_name_input() {
            assert_eq!(ComposerFocus::NameInput.prev(), ComposerFocus::Buttons);
        }
    }

    mod type_selector {
        use super::*;

        #[test]
        fn test_default_catalog_is_full() {
            let composer = ComposerState::default();
            assert_eq!(composer.catalog(), &FieldType::ALL);
            assert_eq!(composer.selected_type(), FieldType::Text);
        }

        #[test]
        fn test_next_type_wraps_around() {
            let mut composer = ComposerState::new(vec![FieldType::Text, FieldType::Date]);
            composer.next_type();
            assert_eq!(composer.selected_type(), FieldType::Date);
            composer.next_type();
            assert_eq!(composer.selected_type(), FieldType::Text);
        }

        #[test]
        fn test_prev_type_wraps_around() {
            let mut composer = ComposerState::new(vec![FieldType::Text, FieldType::Date]);
            composer.prev_type();
            assert_eq!(composer.selected_type(), FieldType::Date);
        }

        #[test]
        fn test_restricted_catalog_only_offers_configured_types() {
            let composer = ComposerState::new(vec![
                FieldType::Title,
                FieldType::Gender,
                FieldType::Date,
                FieldType::Checkbox,
            ]);
            assert_eq!(composer.catalog().len(), 4);
            assert_eq!(composer.selected_type(), FieldType::Title);
        }
    }

    mod field_entry {
        use super::*;

        #[test]
        fn test_add_current_field_appends_and_resets_controls() {
            let mut composer = ComposerState::default();
            composer.name_input = "Email".to_string();
            composer.next_type(); // Number
            composer.next_type(); // Address
            composer.next_type(); // Email

            assert!(composer.add_current_field());

            assert_eq!(
                composer.draft.fields(),
                &[FieldDef::new("Email", FieldType::Email)]
            );
            assert!(composer.name_input.is_empty());
            assert_eq!(composer.selected_type(), FieldType::Text);
        }

        #[test]
        fn test_add_current_field_with_blank_name_changes_nothing() {
            let mut composer = ComposerState::default();
            composer.name_input = "   ".to_string();
            composer.next_type();

            assert!(!composer.add_current_field());

            assert!(composer.draft.is_empty());
            assert_eq!(composer.name_input, "   ");
            assert_eq!(composer.selected_type(), FieldType::Number);
        }

        #[test]
        fn test_input_char_and_backspace_edit_the_name_buffer() {
            let mut composer = ComposerState::default();
            composer.input_char('D');
            composer.input_char('O');
            composer.input_char('B');
            composer.backspace();
            assert_eq!(composer.name_input, "DO");
        }
    }

    mod field_list {
        use super::*;

        fn composer_with_fields(names: &[&str]) -> ComposerState {
            let mut composer = ComposerState::default();
            for name in names {
                composer.draft.add_field(name, FieldType::Text);
            }
            composer
        }

        #[test]
        fn test_delete_selected_field_clamps_cursor() {
            let mut composer = composer_with_fields(&["A", "B"]);
            composer.selected_field = 1;

            composer.delete_selected_field();

            assert_eq!(composer.draft.len(), 1);
            assert_eq!(composer.selected_field, 0);
        }

        #[test]
        fn test_delete_on_empty_list_is_noop() {
            let mut composer = composer_with_fields(&[]);
            composer.delete_selected_field();
            assert!(composer.draft.is_empty());
            assert_eq!(composer.selected_field, 0);
        }

        #[test]
        fn test_selection_stays_in_bounds() {
            let mut composer = composer_with_fields(&["A", "B"]);
            composer.move_field_selection_down();
            composer.move_field_selection_down();
            assert_eq!(composer.selected_field, 1);
            composer.move_field_selection_up();
            composer.move_field_selection_up();
            assert_eq!(composer.selected_field, 0);
        }
    }

    mod buttons {
        use super::*;

        #[test]
        fn test_button_cycling_wraps() {
            let mut composer = ComposerState::default();
            composer.next_button();
            assert_eq!(composer.selected_button, 1);
            composer.next_button();
            assert_eq!(composer.selected_button, 0);
            composer.prev_button();
            assert_eq!(composer.selected_button, 1);
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn test_reset_discards_draft_and_entry_state() {
            let mut composer = ComposerState::default();
            composer.name_input = "pending".to_string();
            composer.next_type();
            composer.focus = ComposerFocus::Buttons;
            composer.selected_button = 1;
            composer.draft.add_field("A", FieldType::Text);

            composer.reset();

            assert!(composer.draft.is_empty());
            assert!(composer.name_input.is_empty());
            assert_eq!(composer.selected_type(), FieldType::Text);
            assert_eq!(composer.focus, ComposerFocus::NameInput);
            assert_eq!(composer.selected_button, 0);
        }
    }
}
