//! Application state and core logic

use crate::config::FormConfig;
use crate::state::forms::{Focus, Form, PhoneForm};
use crate::state::{AppState, SUCCESS_MESSAGE};
use crate::submit::{Submission, SubmissionNotifier};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives accepted submissions
    notifier: Box<dyn SubmissionNotifier>,
    /// Loaded configuration, updated when toggles change
    config: FormConfig,
    /// Where config changes are persisted, if anywhere
    config_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: FormConfig,
        config_path: Option<PathBuf>,
        notifier: Box<dyn SubmissionNotifier>,
    ) -> Self {
        let form = PhoneForm::new(config.clear_hidden_selections());
        Self {
            state: AppState::new(form, config.show_devtools()),
            notifier,
            config,
            config_path,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Submission alert (modal)
        if self.state.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.state.alert = None;
            }
            return Ok(());
        }

        let submit_shortcut = key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
            || key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::F(12) => self.toggle_devtools(),
            KeyCode::Char('s') if submit_shortcut => self.submit(),
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            _ => match self.state.form.focus() {
                Focus::Submit => self.handle_submit_button_key(key),
                Focus::Field(field) if field.is_text() => self.handle_text_key(key),
                Focus::Field(_) => self.handle_group_key(key),
            },
        }
        Ok(())
    }

    /// Handle pasted text
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_modal() {
            return;
        }
        self.state.status_message = None;
        self.state.form.input_str(text);
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.status_message = None;
                self.state.form.input_char(c);
            }
            KeyCode::Backspace => {
                self.state.status_message = None;
                self.state.form.backspace();
            }
            // Enter in a text input submits the form
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn handle_group_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => self.state.form.move_option(false),
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
                self.state.form.move_option(true)
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.state.status_message = None;
                self.state.form.activate_option();
            }
            _ => {}
        }
    }

    fn handle_submit_button_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.submit();
        }
    }

    /// Validate and submit the form.
    ///
    /// Accepted data goes to the notifier, then the form resets and a
    /// one-time alert is shown. A notifier failure keeps the form intact.
    pub fn submit(&mut self) {
        match self.state.form.submit() {
            Ok(values) => {
                let submission = Submission::new(values);
                if let Err(err) = self.notifier.notify(&submission) {
                    self.push_error(format!("Failed to deliver submission: {err}"));
                    return;
                }
                tracing::info!("submission accepted");
                self.state.alert = Some(submission.summary());
                self.state.status_message = Some(SUCCESS_MESSAGE.to_string());
                self.state.form.reset();
            }
            Err(err) => {
                tracing::warn!(fields = ?err.fields, "submit blocked: {err}");
                self.state.status_message = None;
            }
        }
    }

    /// Show or hide the form-state inspector and remember the choice
    fn toggle_devtools(&mut self) {
        self.state.show_devtools = !self.state.show_devtools;
        self.config.show_devtools = Some(self.state.show_devtools);

        if let Some(path) = &self.config_path {
            if let Err(err) = self.config.save_to(path) {
                tracing::warn!("Failed to save config: {err}");
            }
        }
    }
}
