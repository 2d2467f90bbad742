//! Submission flow: honeypot check, send, and the outcome's effect on state

use super::forms::{ContactForm, ContactPayload};
use crate::sender::{EmailSender, SendError};
use std::time::{Duration, Instant};

/// Shown after a message was delivered
pub const SUCCESS_MESSAGE: &str = "Message sent!";
/// Shown after the send operation failed
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong, try again later.";

/// Terminal result of one submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed,
}

/// Where the flow currently is: `Idle -> Submitting -> {Succeeded, Failed} -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Transient submission state, reset on launch and never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub is_loading: bool,
    pub last_result: Option<SubmissionOutcome>,
    pub notification_visible: bool,
    /// Set by a failed send, cleared by a successful one
    pub error: bool,
    /// When the current notification was raised
    pub notification_shown_at: Option<Instant>,
}

impl SubmissionState {
    pub fn phase(&self) -> SubmissionPhase {
        if self.is_loading {
            return SubmissionPhase::Submitting;
        }
        match (self.notification_visible, self.last_result) {
            (true, Some(SubmissionOutcome::Succeeded)) => SubmissionPhase::Succeeded,
            (true, Some(SubmissionOutcome::Failed)) => SubmissionPhase::Failed,
            _ => SubmissionPhase::Idle,
        }
    }

    /// Text of the notification for the last outcome, if one is showing
    pub fn notification_message(&self) -> Option<&'static str> {
        if !self.notification_visible {
            return None;
        }
        Some(if self.error {
            FAILURE_MESSAGE
        } else {
            SUCCESS_MESSAGE
        })
    }

    /// Hide the notification. Leaves the last result and the form alone.
    pub fn dismiss_notification(&mut self) {
        self.notification_visible = false;
        self.notification_shown_at = None;
    }

    /// Success notifications hide themselves after `timeout`; errors stay
    /// until dismissed. Returns true when the notification was hidden.
    pub fn expire_notification(&mut self, timeout: Duration) -> bool {
        self.expire_notification_at(Instant::now(), timeout)
    }

    /// `expire_notification` against an explicit clock reading
    fn expire_notification_at(&mut self, now: Instant, timeout: Duration) -> bool {
        let expired = self.notification_visible
            && !self.error
            && self
                .notification_shown_at
                .is_some_and(|shown_at| now.saturating_duration_since(shown_at) >= timeout);
        if expired {
            self.dismiss_notification();
        }
        expired
    }

    fn show_notification(&mut self) {
        self.notification_visible = true;
        self.notification_shown_at = Some(Instant::now());
    }
}

/// Start a submission.
///
/// Returns the payload to send, or `None` when the honeypot is filled. A bot
/// submission is dropped silently: no state change and nothing to send.
/// Callers are expected to only submit a valid form.
pub fn begin_submission(form: &ContactForm, state: &mut SubmissionState) -> Option<ContactPayload> {
    if form.is_bot_submission() {
        return None;
    }

    state.is_loading = true;
    Some(form.payload())
}

/// Apply the send result to the form and submission state
pub fn finish_submission(
    form: &mut ContactForm,
    state: &mut SubmissionState,
    result: Result<(), SendError>,
) -> SubmissionOutcome {
    state.is_loading = false;

    let outcome = match result {
        Ok(()) => {
            *form = form.reset();
            state.error = false;
            SubmissionOutcome::Succeeded
        }
        // Values are kept so the user can retry without re-typing
        Err(_) => {
            state.error = true;
            SubmissionOutcome::Failed
        }
    };

    state.last_result = Some(outcome);
    state.show_notification();
    outcome
}

/// Run a whole submission, awaiting the send inline.
///
/// This is the awaitable form of the flow and the reference for its
/// ordering: honeypot check, loading on, send, outcome applied. Returns
/// `None` when the submission was dropped by the honeypot check.
///
/// The binary does not call it. `App` runs the same two halves,
/// `begin_submission` and `finish_submission`, around a spawned send so the
/// screen keeps drawing, and its tests cover that path separately.
#[allow(dead_code)]
pub async fn submit(
    form: &mut ContactForm,
    state: &mut SubmissionState,
    sender: &dyn EmailSender,
) -> Option<SubmissionOutcome> {
    let payload = begin_submission(form, state)?;
    let result = sender.send_email(payload).await;
    Some(finish_submission(form, state, result))
}
