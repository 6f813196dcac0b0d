//! Composition through an optional part.
//!
//! A `Lens<W, Option<B>>` cannot be composed with a `Lens<B, C>` into a
//! `Lens<W, C>`: when the outer part is `None` there is no `C` to read.
//! [`OptionLens::compose_or`] produces a `Lens<W, Option<C>>` instead, and
//! requires a fallback producer for the `B` that a write creates when the
//! outer slot is empty.
//!
//! # Write policy
//!
//! - `set(whole, Some(c))` writes `c` into the existing `B`, or into the
//!   fallback `B` if the slot is empty, and stores the result.
//! - `set(whole, None)` clears the outer slot entirely.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use focal::optics::{map_entry, Lens, OptionLens};
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Field { text: String, secure: bool }
//!
//! let password_text = map_entry::<String, Field>("password".to_string())
//!     .compose_or(lens!(Field, text), || Field { text: String::new(), secure: true });
//!
//! let fields = password_text.set(HashMap::new(), Some("hunter2".to_string()));
//! assert_eq!(
//!     fields.get("password"),
//!     Some(&Field { text: "hunter2".to_string(), secure: true })
//! );
//!
//! let cleared = password_text.set(fields, None);
//! assert!(cleared.is_empty());
//! ```

use std::marker::PhantomData;

use super::lens::Lens;

/// Extension methods for lenses whose part is an `Option`.
pub trait OptionLens<W, B>: Lens<W, Option<B>> {
    /// Composes through the optional part with a lens into `B`.
    ///
    /// `fallback` builds the `B` that a `Some` write goes into when the outer
    /// slot is currently `None`. It is not called on reads, on `None` writes,
    /// or when the slot is occupied.
    fn compose_or<C, L, D>(self, inner: L, fallback: D) -> FallbackLens<Self, L, D, B>
    where
        Self: Sized,
        L: Lens<B, C>,
        D: Fn() -> B,
    {
        FallbackLens::new(self, inner, fallback)
    }
}

impl<W, B, O> OptionLens<W, B> for O where O: Lens<W, Option<B>> {}

/// A lens onto an optional part nested behind another optional part.
///
/// Created by [`OptionLens::compose_or`].
///
/// # Type Parameters
///
/// - `O`: The outer lens, focusing on `Option<B>`
/// - `L`: The inner lens, focusing from `B` onto `C`
/// - `D`: The fallback producer for `B`
/// - `B`: The intermediate type
pub struct FallbackLens<O, L, D, B> {
    outer: O,
    inner: L,
    fallback: D,
    _marker: PhantomData<B>,
}

impl<O, L, D, B> FallbackLens<O, L, D, B> {
    /// Creates a new fallback lens.
    #[must_use]
    pub const fn new(outer: O, inner: L, fallback: D) -> Self {
        Self {
            outer,
            inner,
            fallback,
            _marker: PhantomData,
        }
    }
}

impl<W, B, C, O, L, D> Lens<W, Option<C>> for FallbackLens<O, L, D, B>
where
    O: Lens<W, Option<B>>,
    L: Lens<B, C>,
    D: Fn() -> B,
{
    fn get(&self, whole: &W) -> Option<C> {
        self.outer
            .get(whole)
            .map(|intermediate| self.inner.get(&intermediate))
    }

    fn set(&self, whole: W, part: Option<C>) -> W {
        match part {
            Some(value) => {
                let intermediate = self
                    .outer
                    .get(&whole)
                    .unwrap_or_else(|| (self.fallback)());
                let updated = self.inner.set(intermediate, value);
                self.outer.set(whole, Some(updated))
            }
            None => self.outer.set(whole, None),
        }
    }
}

impl<O: Clone, L: Clone, D: Clone, B> Clone for FallbackLens<O, L, D, B> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone(), self.fallback.clone())
    }
}

impl<O: std::fmt::Debug, L: std::fmt::Debug, D, B> std::fmt::Debug for FallbackLens<O, L, D, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FallbackLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
