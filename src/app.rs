//! Application state and core logic

use crate::config::ContactConfig;
use crate::sender::{CallableClient, EmailSender, SendError};
use crate::state::{begin_submission, finish_submission, AppState, Focus, SubmissionOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot::{self, error::TryRecvError};
use uuid::Uuid;

/// A send that has been handed to the runtime and not yet reported back
struct PendingSend {
    id: Uuid,
    started_at: Instant,
    receiver: oneshot::Receiver<Result<(), SendError>>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Injected send operation
    sender: Arc<dyn EmailSender>,
    /// At most one send is ever in flight
    pending: Option<PendingSend>,
    /// Success notification auto-dismiss delay
    notification_timeout: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured callable function
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let client = CallableClient::from_config(config)?;
        tracing::info!("Sending contact messages to {}", client.url());
        Ok(Self::with_sender(Arc::new(client), config.notification_timeout()))
    }

    /// Create an App around any send implementation
    pub fn with_sender(sender: Arc<dyn EmailSender>, notification_timeout: Duration) -> Self {
        Self {
            state: AppState::default(),
            sender,
            pending: None,
            notification_timeout,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// How long the current send has been running, for the spinner
    pub fn send_elapsed(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.started_at.elapsed())
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notification is modal while shown
        if self.state.submission.notification_visible {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.submission.dismiss_notification();
            }
            return Ok(());
        }

        let on_button = self.state.focus == Focus::SendButton;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            // Ctrl+S everywhere, plus Cmd+S on macOS
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SEND_MODIFIER) =>
            {
                self.request_submit();
            }
            KeyCode::Enter if on_button => self.request_submit(),
            KeyCode::Enter => {
                if self.state.is_focused_field_multiline() {
                    self.state.form_input_char('\n');
                } else {
                    self.state.next_focus();
                }
            }
            KeyCode::Char(c) => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Start a submission if the form allows it.
    ///
    /// The send runs on the runtime so the UI keeps drawing; `tick` picks up
    /// the result.
    pub fn request_submit(&mut self) {
        if !self.state.can_submit() || self.pending.is_some() {
            return;
        }

        let id = Uuid::new_v4();
        let Some(payload) = begin_submission(&self.state.form, &mut self.state.submission) else {
            tracing::info!(submission_id = %id, "Dropping submission with filled honeypot");
            return;
        };

        tracing::info!(submission_id = %id, "Sending contact message");
        let (tx, rx) = oneshot::channel();
        let sender = Arc::clone(&self.sender);
        tokio::spawn(async move {
            let result = sender.send_email(payload).await;
            // Receiver only goes away when the app is shutting down
            let _ = tx.send(result);
        });

        self.pending = Some(PendingSend {
            id,
            started_at: Instant::now(),
            receiver: rx,
        });
    }

    /// Advance time-driven state: collect a finished send, expire notifications
    pub fn tick(&mut self) {
        self.poll_pending();
        if self
            .state
            .submission
            .expire_notification(self.notification_timeout)
        {
            tracing::debug!("Success notification auto-dismissed");
        }
    }

    fn poll_pending(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        let result = match pending.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(SendError::Interrupted),
        };

        let id = pending.id;
        let elapsed = pending.started_at.elapsed();
        self.pending = None;

        if let Err(ref err) = result {
            tracing::warn!(
                submission_id = %id,
                ?elapsed,
                kind = err.kind(),
                status = ?err.status(),
                "Contact message failed"
            );
        }

        let outcome = finish_submission(&mut self.state.form, &mut self.state.submission, result);
        if outcome == SubmissionOutcome::Succeeded {
            tracing::info!(submission_id = %id, ?elapsed, "Contact message sent");
            self.state.focus = Focus::default();
        }
    }
}
