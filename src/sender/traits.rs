//! Trait abstraction for the send operation to enable mocking in tests

use super::error::SendError;
use crate::state::ContactPayload;
use async_trait::async_trait;

/// The single external call made by the contact form.
///
/// Resolves with nothing on success. Failures carry no detail the form acts on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, payload: ContactPayload) -> Result<(), SendError>;
}
