//! Submit flow: Idle -> Submitting -> (Succeeded | Failed) -> Submitting ...

/// Whether a submission attempt succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Error,
}

/// Result of one submission attempt, rendered as an inline message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl SubmissionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

/// Phase of the submit flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Reasons a submit attempt is refused before reaching the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("no class selected")]
    NoClassSelected,
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

/// Tracks the single in-flight submission and the last outcome
#[derive(Debug, Clone, Default)]
pub struct SubmitFlow {
    phase: SubmitPhase,
    outcome: Option<SubmissionOutcome>,
}

impl SubmitFlow {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Whether the submit affordance is enabled
    pub fn can_submit(&self, class_selected: bool) -> bool {
        class_selected && !self.is_submitting()
    }

    /// Enter `Submitting`, clearing any previous outcome
    pub fn begin(&mut self, class_selected: bool) -> Result<(), SubmitError> {
        if !class_selected {
            return Err(SubmitError::NoClassSelected);
        }
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }
        self.phase = SubmitPhase::Submitting;
        self.outcome = None;
        Ok(())
    }

    /// Record the outcome of the in-flight submission
    pub fn settle(&mut self, outcome: SubmissionOutcome) {
        if !self.is_submitting() {
            tracing::warn!(?outcome, "dropping outcome with no submission in flight");
            return;
        }
        self.phase = if outcome.is_success() {
            SubmitPhase::Succeeded
        } else {
            SubmitPhase::Failed
        };
        self.outcome = Some(outcome);
    }
}
