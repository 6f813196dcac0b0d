//! Optics for immutable data manipulation.
//!
//! This module provides optics - composable accessors for immutable
//! data structures. Optics allow you to focus on specific parts of a data
//! structure, enabling type-safe reading and updating of deeply nested fields.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens  <: Affine
//! Prism <: Affine
//! Lens  . Prism = Affine
//! Prism . Lens  = Affine
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a part that is always present (get/set access)
//! - [`Prism`]: Focus on one shape of the whole (`try_get`/`inject` access)
//! - [`Affine`]: Focus on a part whose read and write may both be refused
//! - [`LensZip`], [`LensZip3`]: Independent lenses combined over a tuple
//! - [`PrismZip`]: Independent prisms combined over an [`Either`](crate::either::Either)
//! - [`FallbackLens`]: A lens through an `Option` part with a fallback for writes
//! - [`laws`]: Law predicates and verifiers
//!
//! # Example with Lens
//!
//! ```
//! use focal::optics::{Lens, FunctionLens};
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! // Create lenses using the macro
//! let address_lens = lens!(Person, address);
//! let street_lens = lens!(Address, street);
//!
//! // Compose lenses to focus on nested fields
//! let person_street = address_lens.compose(street_lens);
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! // Set nested field (returns new structure)
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo"); // Other fields unchanged
//! ```
//!
//! # Example with Prism
//!
//! ```
//! use focal::optics::Prism;
//! use focal::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum ButtonState {
//!     Idle(String),
//!     Processing(String),
//!     Completed(String),
//! }
//!
//! let processing = prism!(ButtonState, Processing);
//!
//! let waiting = ButtonState::Processing("Please wait".to_string());
//! let advanced = processing.try_modify(waiting, |_| "Almost there".to_string());
//! assert_eq!(advanced, ButtonState::Processing("Almost there".to_string()));
//!
//! let done = ButtonState::Completed("Welcome".to_string());
//! assert_eq!(processing.try_modify(done.clone(), |_| String::new()), done);
//! ```
//!
//! # Lens Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **`SetGet` Law**: `lens.get(&lens.set(whole, part)) == part`
//! 2. **`GetSet` Law**: `lens.set(whole, lens.get(&whole)) == whole`
//! 3. **`SetSet` Law**: `lens.set(lens.set(whole, p1), p2) == lens.set(whole, p2)`
//!
//! # Prism Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **`InjectTryGet` Law**: `prism.try_get(&prism.inject(part)) == Some(part)`
//! 2. **`TryGetInject` Law**: if `prism.try_get(&whole) == Some(part)` then `prism.inject(part) == whole`
//!
//! # Affine Laws
//!
//! Every Affine must satisfy two laws (where the read or write succeeds):
//!
//! 1. **`TrySetTryGet` Law**: if `affine.try_set(whole, part) == Some(updated)` then `affine.try_get(&updated) == Some(part)`
//! 2. **`TryGetTrySet` Law**: if `affine.try_get(&whole) == Some(part)` then `affine.try_set(whole, part) == Some(whole)`

mod affine;
pub mod laws;
mod lens;
mod option_lens;
mod prism;
mod standard_optics;
mod zip;

// Lens exports
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;

// Prism exports
pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::Prism;

// Affine exports
pub use affine::Affine;
pub use affine::ComposedAffine;
pub use affine::FunctionAffine;
pub use affine::LensAsAffine;
pub use affine::LensPrismComposition;
pub use affine::PrismAsAffine;
pub use affine::PrismLensComposition;

// Zip exports
pub use zip::LensZip;
pub use zip::LensZip3;
pub use zip::PrismZip;

// Option composition exports
pub use option_lens::FallbackLens;
pub use option_lens::OptionLens;

// Standard optics exports
pub use standard_optics::btree_entry;
pub use standard_optics::err_prism;
pub use standard_optics::first_lens;
pub use standard_optics::identity_lens;
pub use standard_optics::left_prism;
pub use standard_optics::map_entry;
pub use standard_optics::ok_prism;
pub use standard_optics::right_prism;
pub use standard_optics::second_lens;
pub use standard_optics::some_prism;
