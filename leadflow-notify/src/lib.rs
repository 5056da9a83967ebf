//! Notification hand-off for the Leadflow pipeline
//!
//! The matcher never sends mail itself; it forwards the matched member ids
//! to the email service through this client.

pub mod client;

pub use client::NotifierClient;
