//! Lens optics for focusing on a part that is always present.
//!
//! A Lens is an optic that provides get/set access to a part within a larger
//! whole. Lenses compose, allowing access to deeply nested fields, and zip,
//! allowing several independent fields to be read and written as one tuple.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **`SetGet` Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(whole, part)) == part
//!    ```
//!
//! 2. **`GetSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(whole, lens.get(&whole)) == whole
//!    ```
//!
//! 3. **`SetSet` Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(whole, p1), p2) == lens.set(whole, p2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use focal::optics::{Lens, FunctionLens};
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! // Using lens! macro
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated.x, 100);
//! ```

use std::marker::PhantomData;

use super::affine::{LensAsAffine, LensPrismComposition};
use super::prism::Prism;
use super::zip::{LensZip, LensZip3};

/// A Lens focuses on a part that every whole contains exactly once.
///
/// `get` borrows the whole and returns an owned part; `set` consumes the whole
/// and returns the edited one. Parts that are not stored inside the whole as-is
/// (a tuple of several fields, a derived view) are therefore expressible.
///
/// # Type Parameters
///
/// - `W`: The whole type
/// - `P`: The part type
///
/// # Laws
///
/// 1. **`SetGet` Law**: `lens.get(&lens.set(whole, part)) == part`
/// 2. **`GetSet` Law**: `lens.set(whole, lens.get(&whole)) == whole`
/// 3. **`SetSet` Law**: `lens.set(lens.set(whole, p1), p2) == lens.set(whole, p2)`
pub trait Lens<W, P> {
    /// Reads the focused part.
    ///
    /// # Arguments
    ///
    /// * `whole` - The whole to read from
    ///
    /// # Returns
    ///
    /// The focused part
    fn get(&self, whole: &W) -> P;

    /// Replaces the focused part, returning the edited whole.
    ///
    /// Everything the lens does not focus on is carried over unchanged.
    ///
    /// # Arguments
    ///
    /// * `whole` - The whole (consumed)
    /// * `part` - The new value for the focused part
    ///
    /// # Returns
    ///
    /// A whole with the focused part replaced
    fn set(&self, whole: W, part: P) -> W;

    /// Transforms the focused part.
    ///
    /// Defined as `set(whole, function(get(&whole)))`, so every lens gets it
    /// for free from `get` and `set`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let point = Point { x: 10, y: 20 };
    /// let doubled = x_lens.modify(point, |x| x * 2);
    /// assert_eq!(doubled, Point { x: 20, y: 20 });
    /// ```
    fn modify<F>(&self, whole: W, function: F) -> W
    where
        F: FnOnce(P) -> P,
    {
        let current = self.get(&whole);
        self.set(whole, function(current))
    }

    /// Lifts a part-to-part function into a whole-to-whole function.
    ///
    /// This is the curried form of [`modify`](Lens::modify): the returned
    /// closure can be stored, passed on, or sequenced with other transforms.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Counter { count: u32 }
    ///
    /// let count_lens = lens!(Counter, count);
    /// let increment = count_lens.modifier(|count| count + 1);
    ///
    /// let counter = increment(increment(Counter { count: 0 }));
    /// assert_eq!(counter.count, 2);
    /// ```
    fn modifier<F>(&self, function: F) -> impl Fn(W) -> W
    where
        F: Fn(P) -> P,
    {
        move |whole| self.modify(whole, &function)
    }

    /// Returns a whole-to-whole function that sets the focused part to `part`.
    ///
    /// This is the curried `set(part)(whole)` form.
    fn setter(&self, part: P) -> impl Fn(W) -> W
    where
        P: Clone,
    {
        move |whole| self.set(whole, part.clone())
    }

    /// Composes this lens with a lens into its part.
    ///
    /// The intermediate type disappears from the result: composing
    /// `Lens<W, P>` with `Lens<P, S>` yields a `Lens<W, S>`. Composition is
    /// associative.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(person_street.get(&person), "Main St");
    /// ```
    ///
    /// A lens onto an `Option<B>` does not compose with a lens into `B`; use
    /// [`OptionLens::compose_or`](super::OptionLens::compose_or) and supply a fallback:
    ///
    /// ```compile_fail
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone)]
    /// struct Profile { nickname: String }
    ///
    /// #[derive(Clone)]
    /// struct Account { profile: Option<Profile> }
    ///
    /// let nickname = lens!(Account, profile).compose(lens!(Profile, nickname));
    /// let account = Account { profile: None };
    /// let _ = nickname.get(&account);
    /// ```
    fn compose<S, L>(self, other: L) -> ComposedLens<Self, L, P>
    where
        Self: Sized,
        L: Lens<P, S>,
    {
        ComposedLens::new(self, other)
    }

    /// Composes this lens with a prism into its part, producing an affine.
    ///
    /// The result reads and writes the part only when the prism matches the
    /// lens's part; a write into any other shape is refused.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Affine, Lens};
    /// use focal::{lens, prism};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Status { Idle, Busy(String) }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Worker { status: Status }
    ///
    /// let busy_reason = lens!(Worker, status).compose_prism(prism!(Status, Busy));
    ///
    /// let busy = Worker { status: Status::Busy("indexing".to_string()) };
    /// assert_eq!(busy_reason.try_get(&busy), Some("indexing".to_string()));
    ///
    /// let idle = Worker { status: Status::Idle };
    /// assert_eq!(busy_reason.try_get(&idle), None);
    /// assert_eq!(busy_reason.try_set(idle, "syncing".to_string()), None);
    /// ```
    fn compose_prism<S, Q>(self, prism: Q) -> LensPrismComposition<Self, Q, P>
    where
        Self: Sized,
        Q: Prism<P, S>,
    {
        LensPrismComposition::new(self, prism)
    }

    /// Zips this lens with an independent lens over the same whole.
    ///
    /// The result focuses on the pair of both parts. Setting applies this
    /// lens's `set` first and `other`'s second, so when the two lenses focus on
    /// overlapping regions, the second write wins for the overlapping region it
    /// touches. For disjoint regions the order is unobservable.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let both = lens!(Point, x).zip(lens!(Point, y));
    ///
    /// let point = Point { x: 1, y: 2 };
    /// assert_eq!(both.get(&point), (1, 2));
    /// assert_eq!(both.set(point, (10, 20)), Point { x: 10, y: 20 });
    /// ```
    fn zip<P2, L>(self, other: L) -> LensZip<Self, L>
    where
        Self: Sized,
        L: Lens<W, P2>,
    {
        LensZip::new(self, other)
    }

    /// Zips this lens with two independent lenses over the same whole.
    ///
    /// Sets are applied in the fixed order self, `second`, `third`.
    fn zip3<P2, P3, L2, L3>(self, second: L2, third: L3) -> LensZip3<Self, L2, L3>
    where
        Self: Sized,
        L2: Lens<W, P2>,
        L3: Lens<W, P3>,
    {
        LensZip3::new(self, second, third)
    }

    /// Views this lens as an affine whose reads and writes always succeed.
    fn to_affine(self) -> LensAsAffine<Self, W, P>
    where
        Self: Sized,
    {
        LensAsAffine::new(self)
    }
}

/// A lens built from a getter and a setter function.
///
/// This is the most common way to create a lens. The `lens!` macro and
/// `#[derive(Lenses)]` generate a `FunctionLens` internally.
///
/// # Type Parameters
///
/// - `W`: The whole type
/// - `P`: The part type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// ```
pub struct FunctionLens<W, P, G, St>
where
    G: Fn(&W) -> P,
    St: Fn(W, P) -> W,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(W, P)>,
}

impl<W, P, G, St> FunctionLens<W, P, G, St>
where
    G: Fn(&W) -> P,
    St: Fn(W, P) -> W,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - Reads the focused part out of a whole
    /// * `setter` - Builds a new whole with the focused part replaced
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<W, P, G, St> Lens<W, P> for FunctionLens<W, P, G, St>
where
    G: Fn(&W) -> P,
    St: Fn(W, P) -> W,
{
    fn get(&self, whole: &W) -> P {
        (self.getter)(whole)
    }

    fn set(&self, whole: W, part: P) -> W {
        (self.setter)(whole, part)
    }
}

impl<W, P, G, St> Clone for FunctionLens<W, P, G, St>
where
    G: Fn(&W) -> P + Clone,
    St: Fn(W, P) -> W + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<W, P, G, St> std::fmt::Debug for FunctionLens<W, P, G, St>
where
    G: Fn(&W) -> P,
    St: Fn(W, P) -> W,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `P`: The intermediate type (part of L1, whole of L2)
pub struct ComposedLens<L1, L2, P> {
    first: L1,
    second: L2,
    _marker: PhantomData<P>,
}

impl<L1, L2, P> ComposedLens<L1, L2, P> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer lens (focuses on the intermediate part)
    /// * `second` - The inner lens (focuses within the intermediate part)
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<W, P, S, L1, L2> Lens<W, S> for ComposedLens<L1, L2, P>
where
    L1: Lens<W, P>,
    L2: Lens<P, S>,
{
    fn get(&self, whole: &W) -> S {
        self.second.get(&self.first.get(whole))
    }

    fn set(&self, whole: W, part: S) -> W {
        let intermediate = self.first.get(&whole);
        let new_intermediate = self.second.set(intermediate, part);
        self.first.set(whole, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, P> Clone for ComposedLens<L1, L2, P> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, P> std::fmt::Debug for ComposedLens<L1, L2, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

type PairGetter = fn(&(i32, String)) -> i32;
type PairSetter = fn((i32, String), i32) -> (i32, String);

static_assertions::assert_impl_all!(FunctionLens<(i32, String), i32, PairGetter, PairSetter>: Send, Sync, Clone);
static_assertions::assert_impl_all!(
    ComposedLens<
        FunctionLens<(i32, String), i32, PairGetter, PairSetter>,
        FunctionLens<i32, i32, fn(&i32) -> i32, fn(i32, i32) -> i32>,
        i32,
    >: Send, Sync, Clone
);

/// Creates a lens for a struct field.
///
/// The getter clones the field out of the struct and the setter moves the new
/// value in, so the field type must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(StructType<T, ...>, field_name)
/// ```
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let y_lens = lens!(Point, y);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// assert_eq!(y_lens.get(&point), 20);
///
/// let updated = x_lens.set(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |whole: &$struct_type| ::core::clone::Clone::clone(&whole.$field),
            |mut whole: $struct_type, part| {
                whole.$field = part;
                whole
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |whole: &$struct_type<$($generic),+>| ::core::clone::Clone::clone(&whole.$field),
            |mut whole: $struct_type<$($generic),+>, part| {
                whole.$field = part;
                whole
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |whole: &$struct_type| ::core::clone::Clone::clone(&whole.$field),
            |mut whole: $struct_type, part| {
                whole.$field = part;
                whole
            },
        )
    };
}
