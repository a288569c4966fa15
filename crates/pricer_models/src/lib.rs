//! # Pricer Models (L2: Business Logic)
//!
//! Trade payloads and the pricing backends behind the adapter.
//!
//! This crate provides:
//! - Trade kinds with explicit ancestry ([`instruments::TradeKind`])
//! - The [`instruments::Trade`] trait and the built-in rates payloads
//! - Serialisable trade records for portfolio files
//! - Backend signatures and placeholder formulas ([`analytical`])
//!
//! ## Design Principles
//!
//! - **Explicit ancestry**: kinds declare their parents; nothing relies on runtime reflection
//! - **Opaque payloads**: free-form fields stay `pricer_core::types::Value` end to end
//! - **Replaceable backends**: every backend is a trait with a default implementation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
