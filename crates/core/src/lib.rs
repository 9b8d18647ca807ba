//! Core library for coderev
//!
//! This crate implements the **Functional Core** of the coderev application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`coderev_core`** (this crate): Pure transformation functions with zero I/O
//! - **`coderev`**: I/O operations and orchestration (the Imperative Shell)
//!
//! All functions here are deterministic and side-effect free, so they can be
//! tested with simple fixture data and no mocking. The model response splitter
//! in [`sections`] is the heart of the application: given free-form text from
//! the completion API it produces the labeled sections the clients display,
//! and it must behave identically no matter which shell (CLI or HTTP relay)
//! drives it.
//!
//! # Module Organization
//!
//! - [`sections`]: Splitting a model response into labeled review sections
//! - [`language`]: Ordered lexical signatures for language detection
//! - [`prompt`]: The review prompt sent to the completion API
//! - [`types`]: Request/response wire types shared by the shells

pub mod language;
pub mod prompt;
pub mod sections;
pub mod types;
