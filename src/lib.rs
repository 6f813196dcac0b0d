//! # focal
//!
//! Composable optics for reading and updating immutable nested data.
//!
//! ## Overview
//!
//! An optic is a pair of pure functions that focuses on a part of a larger
//! value. Optics compose, so a chain of single-level accessors becomes one
//! accessor that reaches deep into a structure without hand-written
//! copy-and-update code.
//!
//! - **Lens**: a part that is always present (a struct field)
//! - **Prism**: a part that exists only for one shape of the whole (an enum variant)
//! - **Affine**: a part whose presence and replacement both depend on the whole
//! - **Zip**: independent lenses combined over a tuple, independent prisms over an [`Either`](either::Either)
//! - **Laws**: predicates and verifiers for the round-trip laws every optic must satisfy
//!
//! ## Feature Flags
//!
//! - `optics`: Lens, Prism, Affine and their combinators (default)
//! - `derive`: `#[derive(Lenses)]` and `#[derive(Prisms)]` (default)
//! - `serde`: `Serialize`/`Deserialize` for [`Either`](either::Either)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use focal::prelude::*;
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Field { text: String, secure: bool }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Form { title: String, username: Field }
//!
//! let username_text = lens!(Form, username).compose(lens!(Field, text));
//!
//! let form = Form {
//!     title: "Sign in".to_string(),
//!     username: Field { text: String::new(), secure: false },
//! };
//!
//! let updated = username_text.set(form, "foobar".to_string());
//! assert_eq!(updated.username.text, "foobar");
//! assert_eq!(updated.title, "Sign in");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the optic traits, the function sequencing helpers and [`Either`](crate::either::Either).
///
/// # Usage
///
/// ```rust
/// use focal::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;

    pub use crate::either::Either;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use crate::{Lenses, Prisms};
}

pub mod compose;

pub mod either;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use focal_derive::{Lenses, Prisms};
