//! Session state for the content generation screen.
//!
//! DESIGN
//! ======
//! One `SessionState` is owned by a session-scoped context signal provided
//! in `app.rs`, never process-global, so independent views (and tests)
//! cannot interfere with each other. The generate flow is a small state
//! machine: idle → pending → {displaying, idle-with-error}. The pending
//! phase is the sole concurrency guard: a second submit while a call is
//! outstanding is rejected, not queued.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use content::{ContentRequest, ContentResponse, ValidationError};

/// Where the generate flow currently is.
///
/// `Failed` is "idle with an error": a fresh submit is allowed and clears
/// the message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GeneratePhase {
    #[default]
    Idle,
    /// A generation call is outstanding; further submits are rejected.
    Pending,
    /// The last attempt failed with this user-visible message.
    Failed(String),
}

/// Display modes for a held result. Mutually exclusive; switching is a
/// pure projection of the same immutable response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Preview,
    Html,
    Markdown,
    Json,
}

impl ViewMode {
    /// Every display mode, in tab order.
    pub const ALL: [Self; 4] = [Self::Preview, Self::Html, Self::Markdown, Self::Json];

    /// Tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Preview => "Preview",
            Self::Html => "HTML",
            Self::Markdown => "Markdown",
            Self::Json => "JSON",
        }
    }
}

/// All state for one generation session: the editable draft, the flow
/// phase, the last successful result, and the selected display mode.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Mutable brief being edited in the form.
    pub draft: ContentRequest,
    pub phase: GeneratePhase,
    /// Field-level validation failure from the last rejected submit.
    pub validation: Option<ValidationError>,
    /// Last successful result; lives until superseded by the next success.
    pub result: Option<ContentResponse>,
    pub view: ViewMode,
}

impl SessionState {
    /// Whether a submit would currently be accepted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !matches!(self.phase, GeneratePhase::Pending)
    }

    /// Try to start a generation call.
    ///
    /// Returns an immutable snapshot of the draft to hand to the network
    /// call, or `None` if a call is already pending (mutual exclusion) or
    /// the draft fails validation (recorded in `self.validation`, no call
    /// issued).
    pub fn begin_submit(&mut self) -> Option<ContentRequest> {
        if !self.can_submit() {
            return None;
        }
        if let Err(err) = self.draft.validate() {
            self.validation = Some(err);
            return None;
        }
        self.validation = None;
        self.phase = GeneratePhase::Pending;
        Some(self.draft.clone())
    }

    /// Record a successful generation. The new result supersedes any
    /// previous one.
    pub fn complete(&mut self, response: ContentResponse) {
        self.phase = GeneratePhase::Idle;
        self.result = Some(response);
    }

    /// Record a failed generation. A previously held result is retained.
    pub fn fail(&mut self, message: String) {
        self.phase = GeneratePhase::Failed(message);
    }

    /// User-visible message from the last failed attempt, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            GeneratePhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
