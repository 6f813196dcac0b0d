//! Prism optics for focusing on one shape of a whole.
//!
//! A Prism is an optic that provides `try_get`/`inject` access to a variant of
//! an enum. Unlike a Lens which always succeeds, a Prism's read fails when the
//! whole has a different shape; building a whole from a part (`inject`) never
//! fails.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **`InjectTryGet` Law**: Injecting then reading yields the original part.
//!    ```text
//!    prism.try_get(&prism.inject(part)) == Some(part)
//!    ```
//!
//! 2. **`TryGetInject` Law**: If the read succeeds, injecting the result rebuilds the whole.
//!    ```text
//!    if let Some(part) = prism.try_get(&whole) then
//!        prism.inject(part) == whole
//!    ```
//!
//! # Examples
//!
//! ```
//! use focal::optics::{Prism, FunctionPrism};
//! use focal::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! let circle = Shape::Circle(5.0);
//! assert_eq!(circle_prism.try_get(&circle), Some(5.0));
//!
//! let rect = Shape::Rectangle(3.0, 4.0);
//! assert_eq!(circle_prism.try_get(&rect), None);
//!
//! let constructed = circle_prism.inject(10.0);
//! assert_eq!(constructed, Shape::Circle(10.0));
//! ```

use std::marker::PhantomData;

use super::affine::{PrismAsAffine, PrismLensComposition};
use super::lens::Lens;
use super::zip::PrismZip;

/// A Prism focuses on a part that only some wholes contain.
///
/// # Type Parameters
///
/// - `W`: The whole type (usually an enum)
/// - `P`: The part type (the payload of the targeted variant)
///
/// # Laws
///
/// 1. **`InjectTryGet` Law**: `prism.try_get(&prism.inject(part)) == Some(part)`
/// 2. **`TryGetInject` Law**: if `prism.try_get(&whole) == Some(part)`, then `prism.inject(part) == whole`
pub trait Prism<W, P> {
    /// Attempts to read the focused part.
    ///
    /// Returns `None` when the whole is not of the targeted shape. Absence is
    /// the only failure signal; it is an expected outcome, not an error.
    ///
    /// # Arguments
    ///
    /// * `whole` - The whole to read from
    ///
    /// # Returns
    ///
    /// The part if the whole has the targeted shape, `None` otherwise
    fn try_get(&self, whole: &W) -> Option<P>;

    /// Builds a whole of the targeted shape from a part.
    ///
    /// # Arguments
    ///
    /// * `part` - The value to wrap
    ///
    /// # Returns
    ///
    /// A whole for which `try_get` returns `part`
    fn inject(&self, part: P) -> W;

    /// Returns `true` if the whole has the targeted shape.
    fn matches(&self, whole: &W) -> bool {
        self.try_get(whole).is_some()
    }

    /// Transforms the focused part when the whole has the targeted shape.
    ///
    /// When `try_get` is absent the whole is returned unchanged: a failed
    /// focus is a no-op, never an error.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Prism;
    /// use focal::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape {
    ///     Circle(f64),
    ///     Rectangle(f64, f64),
    /// }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    ///
    /// let doubled = circle_prism.try_modify(Shape::Circle(5.0), |r| r * 2.0);
    /// assert_eq!(doubled, Shape::Circle(10.0));
    ///
    /// let rect = Shape::Rectangle(3.0, 4.0);
    /// let unchanged = circle_prism.try_modify(rect.clone(), |r| r * 2.0);
    /// assert_eq!(unchanged, rect);
    /// ```
    fn try_modify<F>(&self, whole: W, function: F) -> W
    where
        F: FnOnce(P) -> P,
    {
        match self.try_get(&whole) {
            Some(part) => self.inject(function(part)),
            None => whole,
        }
    }

    /// Transforms the focused part, returning `None` when the shape does not match.
    fn modify_option<F>(&self, whole: &W, function: F) -> Option<W>
    where
        F: FnOnce(P) -> P,
    {
        self.try_get(whole).map(|part| self.inject(function(part)))
    }

    /// Lifts a part-to-part function into a whole-to-whole function.
    ///
    /// This is the curried form of [`try_modify`](Prism::try_modify).
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Prism;
    /// use focal::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Progress { Waiting(u32), Done }
    ///
    /// let waiting = prism!(Progress, Waiting);
    /// let tick = waiting.try_modifier(|ticks| ticks + 1);
    ///
    /// assert_eq!(tick(Progress::Waiting(1)), Progress::Waiting(2));
    /// assert_eq!(tick(Progress::Done), Progress::Done);
    /// ```
    fn try_modifier<F>(&self, function: F) -> impl Fn(W) -> W
    where
        F: Fn(P) -> P,
    {
        move |whole| self.try_modify(whole, &function)
    }

    /// Composes this prism with a prism into its part.
    ///
    /// Reading succeeds only when both prisms match; injecting wraps through
    /// the inner prism first and the outer prism second.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Prism;
    /// use focal::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Outer { Inner(Inner), Empty }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Inner { Value(i32), Nothing }
    ///
    /// let outer_value = prism!(Outer, Inner).compose(prism!(Inner, Value));
    ///
    /// assert_eq!(outer_value.try_get(&Outer::Inner(Inner::Value(42))), Some(42));
    /// assert_eq!(outer_value.try_get(&Outer::Inner(Inner::Nothing)), None);
    /// assert_eq!(outer_value.try_get(&Outer::Empty), None);
    /// assert_eq!(outer_value.inject(7), Outer::Inner(Inner::Value(7)));
    /// ```
    fn compose<S, Q>(self, other: Q) -> ComposedPrism<Self, Q, P>
    where
        Self: Sized,
        Q: Prism<P, S>,
    {
        ComposedPrism::new(self, other)
    }

    /// Composes this prism with a lens into its part, producing an affine.
    ///
    /// Writing through the result succeeds only when the whole already has
    /// the targeted shape, since the lens needs an existing part to write into.
    fn compose_lens<S, L>(self, lens: L) -> PrismLensComposition<Self, L, P>
    where
        Self: Sized,
        L: Lens<P, S>,
    {
        PrismLensComposition::new(self, lens)
    }

    /// Sums this prism with an independent prism over the same whole.
    ///
    /// The result focuses on an [`Either`](crate::either::Either) of the two
    /// parts. `try_get` tries this prism first and `other` second, so when a
    /// whole would match both, the result is always `Left`. `inject`
    /// dispatches on the tag.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::either::Either;
    /// use focal::optics::Prism;
    /// use focal::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Reply { Text(String), Code(u16), Silence }
    ///
    /// let text_or_code = prism!(Reply, Text).zip(prism!(Reply, Code));
    ///
    /// assert_eq!(text_or_code.try_get(&Reply::Code(404)), Some(Either::Right(404)));
    /// assert_eq!(text_or_code.try_get(&Reply::Silence), None);
    /// assert_eq!(text_or_code.inject(Either::Left("ok".to_string())), Reply::Text("ok".to_string()));
    /// ```
    fn zip<P2, Q>(self, other: Q) -> PrismZip<Self, Q>
    where
        Self: Sized,
        Q: Prism<W, P2>,
    {
        PrismZip::new(self, other)
    }

    /// Views this prism as an affine.
    ///
    /// The affine writes only into wholes that already have the targeted shape.
    fn to_affine(self) -> PrismAsAffine<Self, W, P>
    where
        Self: Sized,
    {
        PrismAsAffine::new(self)
    }
}

/// A prism built from a `try_get` function and an `inject` function.
///
/// The `prism!` macro and `#[derive(Prisms)]` generate a `FunctionPrism`
/// internally.
///
/// # Type Parameters
///
/// - `W`: The whole type
/// - `P`: The part type
/// - `T`: The `try_get` function type
/// - `I`: The `inject` function type
///
/// # Example
///
/// ```
/// use focal::optics::{Prism, FunctionPrism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape {
///     Circle(f64),
///     Rectangle(f64, f64),
/// }
///
/// let rectangle_prism = FunctionPrism::new(
///     |shape: &Shape| match shape {
///         Shape::Rectangle(width, height) => Some((*width, *height)),
///         _ => None,
///     },
///     |(width, height): (f64, f64)| Shape::Rectangle(width, height),
/// );
///
/// assert_eq!(rectangle_prism.try_get(&Shape::Rectangle(3.0, 4.0)), Some((3.0, 4.0)));
/// assert_eq!(rectangle_prism.try_get(&Shape::Circle(1.0)), None);
/// ```
pub struct FunctionPrism<W, P, T, I>
where
    T: Fn(&W) -> Option<P>,
    I: Fn(P) -> W,
{
    try_get_function: T,
    inject_function: I,
    _marker: PhantomData<(W, P)>,
}

impl<W, P, T, I> FunctionPrism<W, P, T, I>
where
    T: Fn(&W) -> Option<P>,
    I: Fn(P) -> W,
{
    /// Creates a new `FunctionPrism` from `try_get` and `inject` functions.
    ///
    /// # Arguments
    ///
    /// * `try_get_function` - Reads the part when the whole has the targeted shape
    /// * `inject_function` - Builds a whole of the targeted shape from a part
    #[must_use]
    pub const fn new(try_get_function: T, inject_function: I) -> Self {
        Self {
            try_get_function,
            inject_function,
            _marker: PhantomData,
        }
    }
}

impl<W, P, T, I> Prism<W, P> for FunctionPrism<W, P, T, I>
where
    T: Fn(&W) -> Option<P>,
    I: Fn(P) -> W,
{
    fn try_get(&self, whole: &W) -> Option<P> {
        (self.try_get_function)(whole)
    }

    fn inject(&self, part: P) -> W {
        (self.inject_function)(part)
    }
}

impl<W, P, T, I> Clone for FunctionPrism<W, P, T, I>
where
    T: Fn(&W) -> Option<P> + Clone,
    I: Fn(P) -> W + Clone,
{
    fn clone(&self) -> Self {
        Self {
            try_get_function: self.try_get_function.clone(),
            inject_function: self.inject_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<W, P, T, I> std::fmt::Debug for FunctionPrism<W, P, T, I>
where
    T: Fn(&W) -> Option<P>,
    I: Fn(P) -> W,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
///
/// # Type Parameters
///
/// - `P1`: The type of the outer prism
/// - `P2`: The type of the inner prism
/// - `P`: The intermediate type (part of P1, whole of P2)
pub struct ComposedPrism<P1, P2, P> {
    first: P1,
    second: P2,
    _marker: PhantomData<P>,
}

impl<P1, P2, P> ComposedPrism<P1, P2, P> {
    /// Creates a new composed prism.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer prism (focuses on the intermediate shape)
    /// * `second` - The inner prism (focuses within the intermediate shape)
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<W, P, S, P1, P2> Prism<W, S> for ComposedPrism<P1, P2, P>
where
    P1: Prism<W, P>,
    P2: Prism<P, S>,
{
    fn try_get(&self, whole: &W) -> Option<S> {
        self.first
            .try_get(whole)
            .and_then(|intermediate| self.second.try_get(&intermediate))
    }

    fn inject(&self, part: S) -> W {
        self.first.inject(self.second.inject(part))
    }
}

impl<P1: Clone, P2: Clone, P> Clone for ComposedPrism<P1, P2, P> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, P> std::fmt::Debug for ComposedPrism<P1, P2, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

static_assertions::assert_impl_all!(
    FunctionPrism<Option<u8>, u8, fn(&Option<u8>) -> Option<u8>, fn(u8) -> Option<u8>>: Send, Sync, Clone
);

/// Creates a prism for a single-field tuple variant of an enum.
///
/// The `try_get` side clones the payload out of the variant, so the payload
/// type must implement `Clone`. For multi-field or struct variants use
/// `#[derive(Prisms)]` or [`FunctionPrism::new`].
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// prism!(module::EnumType, VariantName)
/// prism!(EnumType<Nested<T>>, VariantName)
/// ```
///
/// The last two forms go through a local type alias, so the type may not
/// mention generic parameters of an enclosing function.
///
/// # Example
///
/// ```
/// use focal::optics::Prism;
/// use focal::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum MyOption<T> {
///     Some(T),
///     None,
/// }
///
/// let some_prism = prism!(MyOption<i32>, Some);
///
/// assert_eq!(some_prism.try_get(&MyOption::Some(42)), Some(42));
/// assert_eq!(some_prism.try_get(&MyOption::None), None);
/// assert_eq!(some_prism.inject(100), MyOption::Some(100));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |whole: &$enum_type| match whole {
                $enum_type::$variant(part) => ::core::option::Option::Some(::core::clone::Clone::clone(part)),
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            },
            |part| $enum_type::$variant(part),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |whole: &$enum_type<$($generic),+>| match whole {
                $enum_type::$variant(part) => ::core::option::Option::Some(::core::clone::Clone::clone(part)),
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            },
            |part| $enum_type::$variant(part),
        )
    };
    ($enum_type:path, $variant:ident) => {{
        type __PrismWhole = $enum_type;
        $crate::optics::FunctionPrism::new(
            |whole: &__PrismWhole| match whole {
                __PrismWhole::$variant(part) => ::core::option::Option::Some(::core::clone::Clone::clone(part)),
                #[allow(unreachable_patterns)]
                _ => ::core::option::Option::None,
            },
            |part| __PrismWhole::$variant(part),
        )
    }};
}
