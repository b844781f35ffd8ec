//! Application state and core logic

use crate::backend::{BackendClient, BackendClientTrait};
use crate::config::TuiConfig;
use crate::state::{
    AppState, ComposerFocus, ComposerState, PendingDeleteAction, SplashState, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client for HTTP communication
    pub backend: Box<dyn BackendClientTrait>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Transient status bar message
    pub status_message: Option<String>,
    /// Show createdAt timestamps in the saved forms list
    pub show_timestamps: bool,
    /// Backend address, for the status bar
    pub backend_url: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_else(|e| {
            warn!("failed to load config: {e:#}");
            TuiConfig::default()
        });

        let client = BackendClient::new(config.backend_url.as_deref())?;
        let backend_url = client.base_url().to_string();

        let mut app = Self::with_backend(Box::new(client), backend_url);
        app.show_timestamps = config.show_timestamps();
        app.state.composer = ComposerState::new(config.field_catalog());

        // Start with splash screen
        app.state.current_view = View::Splash;

        // Check backend connection
        app.state.backend_connected = app.backend.check_connection().await;

        // Load saved forms if connected
        if app.state.backend_connected {
            match app.backend.list_forms().await {
                Ok(forms) => app.state.saved_forms = forms,
                Err(e) => warn!("initial forms fetch failed: {e}"),
            }
        }

        Ok(app)
    }

    /// Create an App around an existing backend client
    pub fn with_backend(backend: Box<dyn BackendClientTrait>, backend_url: String) -> Self {
        Self {
            state: AppState::default(),
            backend,
            splash_state: Some(SplashState::new()),
            status_message: None,
            show_timestamps: false,
            backend_url,
            quit: false,
        }
    }

    /// Update splash animation state.
    /// Returns true if animation is complete and we should transition.
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Forms;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle delete confirmation dialog (modal)
        if self.state.pending_delete.is_some() {
            self.handle_confirm_delete_key(key).await;
            return Ok(());
        }

        // Clear any status message on key press
        self.status_message = None;

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Forms => self.handle_forms_key(key).await,
            View::FormDetail => self.handle_form_detail_key(key).await,
            View::Compose => self.handle_compose_key(key).await,
        }

        Ok(())
    }

    /// Any key skips the splash animation
    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
    }

    /// Handle keys in the saved forms list
    async fn handle_forms_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.move_selection_down(self.state.saved_forms.len());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.move_selection_up();
            }
            KeyCode::Enter => {
                if self.state.selected_form().is_some() {
                    self.state.scroll_offset = 0;
                    self.state.current_view = View::FormDetail;
                }
            }
            KeyCode::Char('n') => {
                self.start_compose();
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.request_delete_selected();
            }
            KeyCode::Char('r') => {
                self.refresh_forms().await;
            }
            KeyCode::Char('y') => {
                self.copy_selected_form();
            }
            KeyCode::Char('q') => {
                self.quit = true;
            }
            _ => {}
        }
    }

    /// Handle keys in the saved form detail view
    async fn handle_form_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Char('d') | KeyCode::Delete => {
                self.request_delete_selected();
            }
            KeyCode::Char('y') => {
                self.copy_selected_form();
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.state.scroll_offset = 0;
                self.state.current_view = View::Forms;
            }
            _ => {}
        }
    }

    /// Handle keys in the composer
    async fn handle_compose_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.composer.next_focus(),
            KeyCode::BackTab => self.state.composer.prev_focus(),
            // Save (Ctrl+S, or platform copy-modifier + W as fallback)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_draft().await;
            }
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.submit_draft().await;
            }
            KeyCode::Esc => {
                self.cancel_compose();
            }
            _ => match self.state.composer.focus {
                ComposerFocus::NameInput => match key.code {
                    KeyCode::Enter => self.add_field_from_input(),
                    KeyCode::Char(c) => self.state.composer.input_char(c),
                    KeyCode::Backspace => self.state.composer.backspace(),
                    _ => {}
                },
                ComposerFocus::TypeSelect => match key.code {
                    KeyCode::Left | KeyCode::Up => self.state.composer.prev_type(),
                    KeyCode::Right | KeyCode::Down => self.state.composer.next_type(),
                    KeyCode::Enter => self.add_field_from_input(),
                    _ => {}
                },
                ComposerFocus::FieldList => match key.code {
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.state.composer.move_field_selection_down();
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.state.composer.move_field_selection_up();
                    }
                    KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                        self.state.composer.delete_selected_field();
                    }
                    _ => {}
                },
                ComposerFocus::Buttons => match key.code {
                    KeyCode::Down | KeyCode::Char('j') => self.state.composer.next_button(),
                    KeyCode::Up | KeyCode::Char('k') => self.state.composer.prev_button(),
                    // Button order: 0=Save Form, 1=Cancel
                    KeyCode::Enter => match self.state.composer.selected_button {
                        0 => self.submit_draft().await,
                        _ => self.cancel_compose(),
                    },
                    _ => {}
                },
            },
        }
    }

    /// Handle keys while the delete confirmation dialog is open
    async fn handle_confirm_delete_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k')
            | KeyCode::Tab => {
                if let Some(pending) = self.state.pending_delete.as_mut() {
                    pending.selected_option = !pending.selected_option;
                }
            }
            KeyCode::Esc => {
                self.state.pending_delete = None;
            }
            KeyCode::Enter => {
                if let Some(action) = self.state.pending_delete.take() {
                    if action.selected_option {
                        self.delete_form(&action.form_id).await;
                    }
                }
            }
            _ => {}
        }
    }

    /// Enter the composer with a fresh draft
    fn start_compose(&mut self) {
        self.state.composer.reset();
        self.state.current_view = View::Compose;
    }

    /// Leave the composer, discarding the draft
    fn cancel_compose(&mut self) {
        self.state.composer.reset();
        self.state.current_view = View::Forms;
    }

    /// Append the entered name/type pair to the draft
    fn add_field_from_input(&mut self) {
        if !self.state.composer.add_current_field() {
            self.status_message = Some("Field name cannot be empty".to_string());
        }
    }

    /// Open the delete confirmation dialog for the selected form
    fn request_delete_selected(&mut self) {
        if let Some(form) = self.state.selected_form() {
            self.state.pending_delete = Some(PendingDeleteAction::new(form));
        }
    }

    /// Re-fetch the saved forms list, replacing local state on success.
    /// On failure the previous list is kept.
    async fn refresh_forms(&mut self) {
        match self.backend.list_forms().await {
            Ok(forms) => {
                self.state.saved_forms = forms;
                self.state.clamp_selection();
            }
            Err(e) => {
                warn!("failed to fetch forms: {e}");
                self.state.push_error(format!("Failed to fetch forms: {e}"));
            }
        }
    }

    /// Submit the draft to the backend.
    ///
    /// On success the saved list is refreshed, the draft is cleared, and the
    /// composer is left. On failure the draft and view stay as they are so
    /// the operator can retry.
    async fn submit_draft(&mut self) {
        if self.state.composer.draft.is_empty() {
            self.status_message = Some("Add at least one field before saving".to_string());
            return;
        }

        let result = self
            .backend
            .create_form(self.state.composer.draft.fields())
            .await;

        match result {
            Ok(()) => {
                info!("form submitted successfully");
                self.refresh_forms().await;
                self.state.composer.reset();
                self.state.current_view = View::Forms;
                self.status_message = Some("Form saved!".to_string());
            }
            Err(e) => {
                warn!("failed to submit form: {e}");
                self.state.push_error(format!("Failed to save form: {e}"));
            }
        }
    }

    /// Delete a saved form by id, refreshing the list on success
    async fn delete_form(&mut self, form_id: &str) {
        match self.backend.delete_form(form_id).await {
            Ok(()) => {
                info!("form {form_id} deleted");
                self.refresh_forms().await;
                if matches!(self.state.current_view, View::FormDetail) {
                    self.state.scroll_offset = 0;
                    self.state.current_view = View::Forms;
                }
                self.status_message = Some("Form deleted".to_string());
            }
            Err(e) => {
                warn!("failed to delete form {form_id}: {e}");
                self.state.push_error(format!("Failed to delete form: {e}"));
            }
        }
    }

    /// Copy the selected form's JSON to the clipboard
    fn copy_selected_form(&mut self) {
        let Some(form) = self.state.selected_form() else {
            return;
        };

        let json = match serde_json::to_string_pretty(form) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize form: {e}");
                return;
            }
        };

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(json)) {
            Ok(()) => {
                self.status_message = Some("Copied form JSON".to_string());
            }
            Err(e) => {
                warn!("clipboard unavailable: {e}");
                self.state.push_error("Clipboard unavailable");
            }
        }
    }
}
