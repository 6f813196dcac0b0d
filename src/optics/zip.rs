//! Side-by-side combination of independent optics.
//!
//! - [`LensZip`] and [`LensZip3`] combine lenses over the same whole into a
//!   lens over the tuple of their parts (product).
//! - [`PrismZip`] combines prisms over the same whole into a prism over an
//!   [`Either`] of their parts (sum).
//!
//! The zipped optics need not focus on disjoint regions. When they overlap,
//! the fixed write order decides the outcome: a zipped lens writes its
//! components first to last, so a later component wins on the region it
//! shares with an earlier one. A zipped prism reads its left component first,
//! so a whole that both components match is always reported as `Left`.

use super::lens::Lens;
use super::prism::Prism;
use crate::either::Either;

/// Two lenses over the same whole, viewed as one lens onto a pair.
///
/// Created by [`Lens::zip`].
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Form { title: String, username: String, remember: bool }
///
/// let header = lens!(Form, title).zip(lens!(Form, username));
///
/// let form = Form {
///     title: String::new(),
///     username: String::new(),
///     remember: true,
/// };
/// let filled = header.set(form, ("Sign in".to_string(), "alice".to_string()));
///
/// assert_eq!(header.get(&filled), ("Sign in".to_string(), "alice".to_string()));
/// assert!(filled.remember);
/// ```
pub struct LensZip<A, B> {
    first: A,
    second: B,
}

impl<A, B> LensZip<A, B> {
    /// Creates a new zipped lens.
    ///
    /// # Arguments
    ///
    /// * `first` - The lens written first
    /// * `second` - The lens written second
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<W, P1, P2, A, B> Lens<W, (P1, P2)> for LensZip<A, B>
where
    A: Lens<W, P1>,
    B: Lens<W, P2>,
{
    fn get(&self, whole: &W) -> (P1, P2) {
        (self.first.get(whole), self.second.get(whole))
    }

    fn set(&self, whole: W, (first_part, second_part): (P1, P2)) -> W {
        let whole = self.first.set(whole, first_part);
        self.second.set(whole, second_part)
    }
}

impl<A: Clone, B: Clone> Clone for LensZip<A, B> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for LensZip<A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensZip")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Three lenses over the same whole, viewed as one lens onto a triple.
///
/// Writes are applied in the order `first`, `second`, `third`.
///
/// Created by [`Lens::zip3`].
pub struct LensZip3<A, B, C> {
    first: A,
    second: B,
    third: C,
}

impl<A, B, C> LensZip3<A, B, C> {
    /// Creates a new zipped lens over three components.
    #[must_use]
    pub const fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            second,
            third,
        }
    }
}

impl<W, P1, P2, P3, A, B, C> Lens<W, (P1, P2, P3)> for LensZip3<A, B, C>
where
    A: Lens<W, P1>,
    B: Lens<W, P2>,
    C: Lens<W, P3>,
{
    fn get(&self, whole: &W) -> (P1, P2, P3) {
        (
            self.first.get(whole),
            self.second.get(whole),
            self.third.get(whole),
        )
    }

    fn set(&self, whole: W, (first_part, second_part, third_part): (P1, P2, P3)) -> W {
        let whole = self.first.set(whole, first_part);
        let whole = self.second.set(whole, second_part);
        self.third.set(whole, third_part)
    }
}

impl<A: Clone, B: Clone, C: Clone> Clone for LensZip3<A, B, C> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone(), self.third.clone())
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug, C: std::fmt::Debug> std::fmt::Debug
    for LensZip3<A, B, C>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensZip3")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("third", &self.third)
            .finish()
    }
}

/// Two prisms over the same whole, viewed as one prism onto an [`Either`].
///
/// `try_get` consults `left` first and falls back to `right`; `inject`
/// dispatches on the tag.
///
/// Created by [`Prism::zip`].
pub struct PrismZip<A, B> {
    left: A,
    right: B,
}

impl<A, B> PrismZip<A, B> {
    /// Creates a new summed prism.
    ///
    /// # Arguments
    ///
    /// * `left` - The prism that takes priority
    /// * `right` - The prism consulted when `left` does not match
    #[must_use]
    pub const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<W, P1, P2, A, B> Prism<W, Either<P1, P2>> for PrismZip<A, B>
where
    A: Prism<W, P1>,
    B: Prism<W, P2>,
{
    fn try_get(&self, whole: &W) -> Option<Either<P1, P2>> {
        self.left
            .try_get(whole)
            .map(Either::Left)
            .or_else(|| self.right.try_get(whole).map(Either::Right))
    }

    fn inject(&self, part: Either<P1, P2>) -> W {
        match part {
            Either::Left(left_part) => self.left.inject(left_part),
            Either::Right(right_part) => self.right.inject(right_part),
        }
    }
}

impl<A: Clone, B: Clone> Clone for PrismZip<A, B> {
    fn clone(&self) -> Self {
        Self::new(self.left.clone(), self.right.clone())
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for PrismZip<A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismZip")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
