// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Folio portfolio concierge.
//!
//! This crate provides the shared message and id types, the error type, and
//! the [`Responder`] trait that decouples the presentation layer from the
//! keyword-scoring engine.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FolioError;
pub use traits::Responder;
pub use types::{Message, MessageId, Sender, SessionId};
