//! # Login Page Sample Application
//!
//! A login screen's view model updated entirely through focal optics.
//!
//! ## Overview
//!
//! The page is an immutable tree: a title, a credential box holding two text
//! fields, and a button whose state moves through empty, processing, failed
//! and completed. Every transition in [`script`] is written as an optic
//! instead of nested copy-and-update code.
//!
//! ## Module Structure
//!
//! - `model`: The view model types, with derived lenses and prisms
//! - `script`: The optics over the model and the transitions built from them

#![forbid(unsafe_code)]

pub mod model;
pub mod script;
