//! Derive macros for focal optics.
//!
//! This crate provides procedural macros that generate an explicit get/set
//! pair per struct field and a `try_get`/`inject` pair per enum variant. No
//! reflection is involved: the generated code is the same closure-backed
//! `FunctionLens`/`FunctionPrism` a caller would write by hand.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates lens methods for struct fields
//! - [`Prisms`]: Generates prism methods for enum variants
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use focal::optics::Lens;
//! use focal::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32>
//! // - Point::y_lens() -> impl Lens<Point, i32>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().get(&point), 10);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use focal::optics::Prism;
//! use focal::Prisms;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism() -> impl Prism<Shape, f64>
//! // - Shape::rectangle_prism() -> impl Prism<Shape, (f64, f64)>
//!
//! let rectangle = Shape::Rectangle(3.0, 4.0);
//! assert_eq!(Shape::rectangle_prism().try_get(&rectangle), Some((3.0, 4.0)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro for generating Lens implementations for struct fields.
///
/// This macro generates a method for each field in the struct that returns
/// a lens focusing on that field. The method name follows the pattern
/// `{field_name}_lens()`.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple struct)
/// - Each field type must implement `Clone`, since `get` returns an owned part
///
/// # Generated Code
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone where T: Clone { ... }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use focal::optics::Lens;
/// use focal::Lenses;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person = Person {
///     name: "Alice".to_string(),
///     age: 30,
/// };
///
/// let name_lens = Person::name_lens();
/// assert_eq!(name_lens.get(&person), "Alice");
///
/// let updated = name_lens.set(person, "Bob".to_string());
/// assert_eq!(updated.name, "Bob");
/// ```
///
/// # Generics
///
/// The macro supports generic structs. Call the lens method on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let container = Container { value: 42 };
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(lens.get(&container), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro for generating Prism implementations for enum variants.
///
/// This macro generates a method for each variant in the enum that returns
/// a prism focusing on that variant. The method name follows the pattern
/// `{variant_name_snake_case}_prism()`.
///
/// # Requirements
///
/// - The type must be an enum
/// - Every payload field type must implement `Clone`, since `try_get` returns an owned part
///
/// # Variant Types
///
/// - **Unit variants** (e.g., `Idle`): `impl Prism<Enum, ()>`
/// - **Single-field tuple variants** (e.g., `Processing(String)`): `impl Prism<Enum, String>`
/// - **Multi-field tuple variants** (e.g., `Point(i32, i32)`): `impl Prism<Enum, (i32, i32)>`
/// - **Struct variants** (e.g., `Click { x: i32, y: i32 }`): `impl Prism<Enum, (i32, i32)>`,
///   fields in declaration order
///
/// # Example
///
/// ```rust,ignore
/// use focal::optics::Prism;
/// use focal::Prisms;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Event {
///     Click { x: i32, y: i32 },
///     KeyPress(char),
///     Idle,
/// }
///
/// let click = Event::Click { x: 10, y: 20 };
/// assert_eq!(Event::click_prism().try_get(&click), Some((10, 20)));
/// assert_eq!(Event::key_press_prism().try_get(&click), None);
/// assert_eq!(Event::idle_prism().inject(()), Event::Idle);
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
