//! Delivery of contact messages to the remote callable function

mod client;
mod error;
mod traits;

pub use client::CallableClient;
pub use error::SendError;
pub use traits::EmailSender;

#[cfg(test)]
pub use traits::MockEmailSender;
