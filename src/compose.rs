//! Sequencing utilities.
//!
//! Two kinds of sequencing show up when working with optics:
//!
//! - Sequencing **optics**: [`focus!`](crate::focus) chains any number of
//!   composable optics, `focus!(a, b, c)` being `a.compose(b).compose(c)`.
//! - Sequencing **functions**: [`then`] and [`chain!`](crate::chain) compose
//!   plain functions left to right, which is what the curried transform
//!   operators (`modifier`, `try_modifier`) need to be stacked point-free.
//!
//! # Example
//!
//! ```
//! use focal::chain;
//! use focal::compose::then;
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! // then(f, g)(x) = g(f(x))
//! assert_eq!(then(add_one, double)(5), 12);
//! assert_eq!(chain!(add_one, double, add_one)(5), 13);
//! ```

/// The identity function.
///
/// # Example
///
/// ```
/// use focal::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Composes two functions left to right: `then(first, second)(x) == second(first(x))`.
///
/// Composition is associative, so `then(then(f, g), h)` and `then(f, then(g, h))`
/// are interchangeable.
///
/// # Example
///
/// ```
/// use focal::compose::then;
///
/// let length = |text: String| text.len();
/// let is_long = |length: usize| length > 3;
///
/// let long_text = then(length, is_long);
/// assert!(long_text("hello".to_string()));
/// assert!(!long_text("hi".to_string()));
/// ```
#[inline]
pub fn then<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Composes functions from left to right.
///
/// `chain!(f, g, h)(x)` is equivalent to `h(g(f(x)))`.
///
/// # Syntax
///
/// - `chain!(f)` - Returns `f` unchanged
/// - `chain!(f, g)` - Returns `|x| g(f(x))`
/// - `chain!(f, g, h, ...)` - Chains any number of functions
///
/// # Example
///
/// ```
/// use focal::chain;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // square(double(add_one(3))) = square(8) = 64
/// assert_eq!(chain!(add_one, double, square)(3), 64);
/// ```
#[macro_export]
macro_rules! chain {
    ($function:expr) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::chain!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}

/// Chains optics with `compose`, outermost first.
///
/// `focus!(a, b, c)` expands to `a.compose(b).compose(c)`. Every optic in the
/// chain must be of a kind whose `compose` accepts the next one (lenses with
/// lenses, prisms with prisms, affines with affines).
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::{focus, lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Field { text: String }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Credentials { username: Field, password: Field }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Page { credentials: Credentials }
///
/// let username_text = focus!(
///     lens!(Page, credentials),
///     lens!(Credentials, username),
///     lens!(Field, text),
/// );
///
/// let page = Page {
///     credentials: Credentials {
///         username: Field { text: String::new() },
///         password: Field { text: "secret".to_string() },
///     },
/// };
///
/// let updated = username_text.set(page, "foobar".to_string());
/// assert_eq!(updated.credentials.username.text, "foobar");
/// assert_eq!(updated.credentials.password.text, "secret");
/// ```
#[macro_export]
macro_rules! focus {
    ($optic:expr $(,)?) => {
        $optic
    };

    ($outer_optic:expr, $($inner_optics:expr),+ $(,)?) => {
        $outer_optic$(.compose($inner_optics))+
    };
}
