// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response catalog for the Folio concierge.
//!
//! This crate provides:
//! - [`Catalog`]: an ordered, immutable set of `(key, body)` topics
//! - [`builtin`]: the six built-in topics plus fallback and greeting texts
//!
//! Catalogs are read-only after construction; configuration overrides are
//! applied once at startup via [`Catalog::with_overrides`].

pub mod builtin;
pub mod topic;

pub use builtin::builtin;
pub use topic::{Catalog, Topic};
