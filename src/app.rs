//! Application state and core logic

use crate::config::RegistrationConfig;
use crate::gateway::{HttpTransport, SubmissionGateway};
use crate::state::{AppState, ClassCatalog, Focus, RegistrationForm, SubmissionOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Gateway shared with the in-flight submission task
    gateway: Arc<SubmissionGateway>,
    /// Finished submissions are delivered back to the event loop here
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance submitting over HTTP
    pub fn new(config: &RegistrationConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.endpoint_url())?;
        tracing::info!(endpoint = transport.endpoint(), "using registration endpoint");

        let state = AppState::new(
            ClassCatalog::default(),
            RegistrationForm::new(config.program_name()),
        );

        Ok(Self::with_gateway(
            state,
            SubmissionGateway::new(Box::new(transport)),
        ))
    }

    /// Create an App with an explicit state and gateway
    pub fn with_gateway(state: AppState, gateway: SubmissionGateway) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state,
            gateway: Arc::new(gateway),
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Submit shortcut works from anywhere
        if key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER))
        {
            self.request_submit();
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            _ => match self.state.focus {
                Focus::ClassPicker => self.handle_picker_key(key),
                Focus::Field(_) => self.handle_field_key(key),
                Focus::SubmitButton => self.handle_submit_button_key(key),
            },
        }
        Ok(())
    }

    /// Handle keys while the class picker is focused
    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                self.state.picker_prev()
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                self.state.picker_next()
            }
            KeyCode::Enter => self.state.next_focus(),
            _ => {}
        }
    }

    /// Handle keys while a student field is focused
    fn handle_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input_char(c)
            }
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Enter | KeyCode::Down => self.state.next_focus(),
            KeyCode::Up => self.state.prev_focus(),
            _ => {}
        }
    }

    /// Handle keys while the submit button is focused
    fn handle_submit_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.request_submit();
            }
            KeyCode::Up => self.state.prev_focus(),
            KeyCode::Down => self.state.next_focus(),
            _ => {}
        }
    }

    /// Start a submission if the form allows it.
    ///
    /// Returns whether a submission was started. While disabled (no class or
    /// already submitting) nothing happens; with empty required fields the
    /// first empty one is focused and a notice is shown instead.
    pub fn request_submit(&mut self) -> bool {
        if !self.state.can_submit() {
            tracing::debug!("submit ignored: affordance disabled");
            return false;
        }

        let missing: Vec<(String, String)> = self
            .state
            .form
            .missing_fields()
            .into_iter()
            .map(|f| (f.identifier.clone(), f.display_name()))
            .collect();
        if let Some((first, _)) = missing.first() {
            let first = first.clone();
            let names: Vec<String> = missing.into_iter().map(|(_, name)| name).collect();
            self.state.notice = Some(format!("Please fill in: {}", names.join(", ")));
            self.state.focus_field(&first);
            return false;
        }

        if let Err(e) = self.state.submit.begin(self.state.form.is_class_selected()) {
            tracing::warn!("submit refused: {e}");
            return false;
        }
        self.state.notice = None;

        let values = self.state.form.values().clone();
        let gateway = Arc::clone(&self.gateway);
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = gateway.submit(&values).await;
            if outcome_tx.send(outcome).is_err() {
                tracing::warn!("submission finished after the app closed");
            }
        });

        tracing::info!(class = ?self.state.form.selected_class_id(), "submission started");
        true
    }

    /// Apply any finished submissions; called once per event loop tick
    pub fn poll_submission(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        self.state.submit.settle(outcome);
        tracing::info!(phase = ?self.state.submit.phase(), "submission settled");
    }
}
