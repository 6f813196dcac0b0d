//! Affine optics for parts whose presence and replacement both depend on the whole.
//!
//! An Affine sits between a Lens and a Prism: like a Prism its read may come
//! back empty, and unlike a Prism its write may be refused too. Every Lens and
//! every Prism can be viewed as an Affine, and composing a Lens with a Prism in
//! either order produces one.
//!
//! # Laws
//!
//! 1. **`TrySetTryGet` Law**: A successful write is read back.
//!    ```text
//!    if affine.try_set(whole, part) == Some(updated) then
//!        affine.try_get(&updated) == Some(part)
//!    ```
//!
//! 2. **`TryGetTrySet` Law**: Writing back what was read rebuilds the whole.
//!    ```text
//!    if affine.try_get(&whole) == Some(part) then
//!        affine.try_set(whole, part) == Some(whole)
//!    ```
//!
//! # Examples
//!
//! ```
//! use focal::optics::{Affine, Lens};
//! use focal::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Contact { Email(String), Phone(String) }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { contact: Contact }
//!
//! let email = lens!(User, contact).compose_prism(prism!(Contact, Email));
//!
//! let user = User { contact: Contact::Email("a@example.com".to_string()) };
//! let updated = email.try_modify(user, |address| address.to_uppercase());
//! assert_eq!(updated.contact, Contact::Email("A@EXAMPLE.COM".to_string()));
//!
//! let caller = User { contact: Contact::Phone("555-0100".to_string()) };
//! assert_eq!(email.try_get(&caller), None);
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use super::prism::Prism;

/// An Affine focuses on at most one part, and may refuse to replace it.
///
/// # Type Parameters
///
/// - `W`: The whole type
/// - `P`: The part type
///
/// # Laws
///
/// 1. **`TrySetTryGet` Law**: if `affine.try_set(whole, part) == Some(updated)`, then `affine.try_get(&updated) == Some(part)`
/// 2. **`TryGetTrySet` Law**: if `affine.try_get(&whole) == Some(part)`, then `affine.try_set(whole, part) == Some(whole)`
pub trait Affine<W, P> {
    /// Attempts to read the focused part.
    ///
    /// # Returns
    ///
    /// The part if the whole currently contains one, `None` otherwise
    fn try_get(&self, whole: &W) -> Option<P>;

    /// Attempts to replace the focused part.
    ///
    /// # Arguments
    ///
    /// * `whole` - The whole (consumed)
    /// * `part` - The new value for the focused part
    ///
    /// # Returns
    ///
    /// The edited whole, or `None` if the whole cannot accept the part in its
    /// current shape
    fn try_set(&self, whole: W, part: P) -> Option<W>;

    /// Transforms the focused part, returning `None` when either the read or
    /// the write is refused.
    fn modify_option<F>(&self, whole: W, function: F) -> Option<W>
    where
        F: FnOnce(P) -> P,
    {
        let part = self.try_get(&whole)?;
        self.try_set(whole, function(part))
    }

    /// Transforms the focused part, leaving the whole unchanged when the part
    /// is absent or the write is refused.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Affine, FunctionAffine};
    ///
    /// // Focuses on the head of a non-empty vector.
    /// let head = FunctionAffine::new(
    ///     |items: &Vec<i32>| items.first().copied(),
    ///     |mut items: Vec<i32>, head: i32| {
    ///         let slot = items.first_mut()?;
    ///         *slot = head;
    ///         Some(items)
    ///     },
    /// );
    ///
    /// assert_eq!(head.try_modify(vec![1, 2, 3], |x| x * 10), vec![10, 2, 3]);
    /// assert_eq!(head.try_modify(Vec::new(), |x| x * 10), Vec::<i32>::new());
    /// ```
    fn try_modify<F>(&self, whole: W, function: F) -> W
    where
        W: Clone,
        F: FnOnce(P) -> P,
    {
        match self.try_get(&whole) {
            Some(part) => self
                .try_set(whole.clone(), function(part))
                .unwrap_or(whole),
            None => whole,
        }
    }

    /// Lifts a part-to-part function into a whole-to-whole function.
    ///
    /// This is the curried form of [`try_modify`](Affine::try_modify).
    fn try_modifier<F>(&self, function: F) -> impl Fn(W) -> W
    where
        W: Clone,
        F: Fn(P) -> P,
    {
        move |whole| self.try_modify(whole, &function)
    }

    /// Composes this affine with an affine into its part.
    ///
    /// Writing reads the intermediate part through this affine, writes into it
    /// through `other`, and writes the result back through this affine. Any
    /// refusal along the way refuses the whole write.
    fn compose<S, A>(self, other: A) -> ComposedAffine<Self, A, P>
    where
        Self: Sized,
        A: Affine<P, S>,
    {
        ComposedAffine::new(self, other)
    }

    /// Composes this affine with a lens into its part.
    fn compose_lens<S, L>(self, lens: L) -> ComposedAffine<Self, LensAsAffine<L, P, S>, P>
    where
        Self: Sized,
        L: Lens<P, S>,
    {
        ComposedAffine::new(self, LensAsAffine::new(lens))
    }

    /// Composes this affine with a prism into its part.
    fn compose_prism<S, Q>(self, prism: Q) -> ComposedAffine<Self, PrismAsAffine<Q, P, S>, P>
    where
        Self: Sized,
        Q: Prism<P, S>,
    {
        ComposedAffine::new(self, PrismAsAffine::new(prism))
    }
}

/// An affine built from a `try_get` function and a `try_set` function.
///
/// # Type Parameters
///
/// - `W`: The whole type
/// - `P`: The part type
/// - `G`: The `try_get` function type
/// - `St`: The `try_set` function type
pub struct FunctionAffine<W, P, G, St>
where
    G: Fn(&W) -> Option<P>,
    St: Fn(W, P) -> Option<W>,
{
    try_get_function: G,
    try_set_function: St,
    _marker: PhantomData<(W, P)>,
}

impl<W, P, G, St> FunctionAffine<W, P, G, St>
where
    G: Fn(&W) -> Option<P>,
    St: Fn(W, P) -> Option<W>,
{
    /// Creates a new `FunctionAffine` from `try_get` and `try_set` functions.
    #[must_use]
    pub const fn new(try_get_function: G, try_set_function: St) -> Self {
        Self {
            try_get_function,
            try_set_function,
            _marker: PhantomData,
        }
    }
}

impl<W, P, G, St> Affine<W, P> for FunctionAffine<W, P, G, St>
where
    G: Fn(&W) -> Option<P>,
    St: Fn(W, P) -> Option<W>,
{
    fn try_get(&self, whole: &W) -> Option<P> {
        (self.try_get_function)(whole)
    }

    fn try_set(&self, whole: W, part: P) -> Option<W> {
        (self.try_set_function)(whole, part)
    }
}

impl<W, P, G, St> Clone for FunctionAffine<W, P, G, St>
where
    G: Fn(&W) -> Option<P> + Clone,
    St: Fn(W, P) -> Option<W> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            try_get_function: self.try_get_function.clone(),
            try_set_function: self.try_set_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<W, P, G, St> std::fmt::Debug for FunctionAffine<W, P, G, St>
where
    G: Fn(&W) -> Option<P>,
    St: Fn(W, P) -> Option<W>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionAffine")
            .finish_non_exhaustive()
    }
}

/// An affine composed of two affines.
///
/// # Type Parameters
///
/// - `A1`: The type of the outer affine
/// - `A2`: The type of the inner affine
/// - `P`: The intermediate type (part of A1, whole of A2)
pub struct ComposedAffine<A1, A2, P> {
    first: A1,
    second: A2,
    _marker: PhantomData<P>,
}

impl<A1, A2, P> ComposedAffine<A1, A2, P> {
    /// Creates a new composed affine.
    #[must_use]
    pub const fn new(first: A1, second: A2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<W, P, S, A1, A2> Affine<W, S> for ComposedAffine<A1, A2, P>
where
    A1: Affine<W, P>,
    A2: Affine<P, S>,
{
    fn try_get(&self, whole: &W) -> Option<S> {
        self.first
            .try_get(whole)
            .and_then(|intermediate| self.second.try_get(&intermediate))
    }

    fn try_set(&self, whole: W, part: S) -> Option<W> {
        let intermediate = self.first.try_get(&whole)?;
        let new_intermediate = self.second.try_set(intermediate, part)?;
        self.first.try_set(whole, new_intermediate)
    }
}

impl<A1: Clone, A2: Clone, P> Clone for ComposedAffine<A1, A2, P> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A1: std::fmt::Debug, A2: std::fmt::Debug, P> std::fmt::Debug for ComposedAffine<A1, A2, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedAffine")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A lens viewed as an affine. Reads and writes always succeed.
///
/// Created by [`Lens::to_affine`].
pub struct LensAsAffine<L, W, P> {
    lens: L,
    _marker: PhantomData<(W, P)>,
}

impl<L, W, P> LensAsAffine<L, W, P> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, W, P> Affine<W, P> for LensAsAffine<L, W, P>
where
    L: Lens<W, P>,
{
    fn try_get(&self, whole: &W) -> Option<P> {
        Some(self.lens.get(whole))
    }

    fn try_set(&self, whole: W, part: P) -> Option<W> {
        Some(self.lens.set(whole, part))
    }
}

impl<L: Clone, W, P> Clone for LensAsAffine<L, W, P> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone())
    }
}

impl<L: std::fmt::Debug, W, P> std::fmt::Debug for LensAsAffine<L, W, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensAsAffine")
            .field("lens", &self.lens)
            .finish()
    }
}

/// A prism viewed as an affine.
///
/// Writes succeed only into wholes that already have the prism's shape:
/// `try_set(whole, part)` is `Some(inject(part))` when `whole` matches and
/// `None` otherwise.
///
/// Created by [`Prism::to_affine`].
pub struct PrismAsAffine<Q, W, P> {
    prism: Q,
    _marker: PhantomData<(W, P)>,
}

impl<Q, W, P> PrismAsAffine<Q, W, P> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: Q) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<Q, W, P> Affine<W, P> for PrismAsAffine<Q, W, P>
where
    Q: Prism<W, P>,
{
    fn try_get(&self, whole: &W) -> Option<P> {
        self.prism.try_get(whole)
    }

    fn try_set(&self, whole: W, part: P) -> Option<W> {
        self.prism
            .matches(&whole)
            .then(|| self.prism.inject(part))
    }
}

impl<Q: Clone, W, P> Clone for PrismAsAffine<Q, W, P> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone())
    }
}

impl<Q: std::fmt::Debug, W, P> std::fmt::Debug for PrismAsAffine<Q, W, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsAffine")
            .field("prism", &self.prism)
            .finish()
    }
}

/// A lens followed by a prism into the lens's part.
///
/// Reading and writing both succeed only when the prism matches the lens's
/// part. A write into a mismatched shape is refused, the same as for
/// `lens.to_affine().compose_prism(prism)`.
///
/// Created by [`Lens::compose_prism`].
pub struct LensPrismComposition<L, Q, P> {
    lens: L,
    prism: Q,
    _marker: PhantomData<P>,
}

impl<L, Q, P> LensPrismComposition<L, Q, P> {
    /// Creates a new lens-then-prism composition.
    #[must_use]
    pub const fn new(lens: L, prism: Q) -> Self {
        Self {
            lens,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<W, P, S, L, Q> Affine<W, S> for LensPrismComposition<L, Q, P>
where
    L: Lens<W, P>,
    Q: Prism<P, S>,
{
    fn try_get(&self, whole: &W) -> Option<S> {
        self.prism.try_get(&self.lens.get(whole))
    }

    fn try_set(&self, whole: W, part: S) -> Option<W> {
        self.prism
            .matches(&self.lens.get(&whole))
            .then(|| self.lens.set(whole, self.prism.inject(part)))
    }
}

impl<L: Clone, Q: Clone, P> Clone for LensPrismComposition<L, Q, P> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone(), self.prism.clone())
    }
}

impl<L: std::fmt::Debug, Q: std::fmt::Debug, P> std::fmt::Debug for LensPrismComposition<L, Q, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensPrismComposition")
            .field("lens", &self.lens)
            .field("prism", &self.prism)
            .finish()
    }
}

/// A prism followed by a lens into the prism's part.
///
/// Reading succeeds when the prism matches. Writing also requires a match,
/// because the lens needs an existing part to write into.
///
/// Created by [`Prism::compose_lens`].
pub struct PrismLensComposition<Q, L, P> {
    prism: Q,
    lens: L,
    _marker: PhantomData<P>,
}

impl<Q, L, P> PrismLensComposition<Q, L, P> {
    /// Creates a new prism-then-lens composition.
    #[must_use]
    pub const fn new(prism: Q, lens: L) -> Self {
        Self {
            prism,
            lens,
            _marker: PhantomData,
        }
    }
}

impl<W, P, S, Q, L> Affine<W, S> for PrismLensComposition<Q, L, P>
where
    Q: Prism<W, P>,
    L: Lens<P, S>,
{
    fn try_get(&self, whole: &W) -> Option<S> {
        self.prism.try_get(whole).map(|part| self.lens.get(&part))
    }

    fn try_set(&self, whole: W, part: S) -> Option<W> {
        self.prism
            .try_get(&whole)
            .map(|current| self.prism.inject(self.lens.set(current, part)))
    }
}

impl<Q: Clone, L: Clone, P> Clone for PrismLensComposition<Q, L, P> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone(), self.lens.clone())
    }
}

impl<Q: std::fmt::Debug, L: std::fmt::Debug, P> std::fmt::Debug for PrismLensComposition<Q, L, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismLensComposition")
            .field("prism", &self.prism)
            .field("lens", &self.lens)
            .finish()
    }
}

type HeadGetter = fn(&Vec<u8>) -> Option<u8>;
type HeadSetter = fn(Vec<u8>, u8) -> Option<Vec<u8>>;

static_assertions::assert_impl_all!(FunctionAffine<Vec<u8>, u8, HeadGetter, HeadSetter>: Send, Sync, Clone);
