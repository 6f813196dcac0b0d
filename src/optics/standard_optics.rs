//! Standard optics that are commonly used.
//!
//! This module provides pre-defined optics for std types: pairs, maps,
//! `Option`, `Result` and [`Either`].

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use super::{FunctionLens, FunctionPrism, Lens, Prism};
use crate::either::Either;

/// Creates a lens that focuses on the whole itself.
///
/// `identity_lens()` is the neutral element of lens composition.
///
/// # Example
///
/// ```
/// use focal::optics::{identity_lens, Lens};
///
/// let identity = identity_lens::<i32>();
///
/// assert_eq!(identity.get(&42), 42);
/// assert_eq!(identity.set(42, 7), 7);
/// ```
#[must_use]
pub fn identity_lens<T: Clone>() -> impl Lens<T, T> + Clone {
    FunctionLens::new(|whole: &T| whole.clone(), |_whole: T, part: T| part)
}

/// Creates a lens onto the first element of a pair.
///
/// # Example
///
/// ```
/// use focal::optics::{first_lens, Lens};
///
/// let first = first_lens::<i32, String>();
/// let pair = (1, "one".to_string());
///
/// assert_eq!(first.get(&pair), 1);
/// assert_eq!(first.set(pair, 2), (2, "one".to_string()));
/// ```
#[must_use]
pub fn first_lens<A: Clone, B>() -> impl Lens<(A, B), A> + Clone {
    FunctionLens::new(
        |(first, _): &(A, B)| first.clone(),
        |(_, second): (A, B), first: A| (first, second),
    )
}

/// Creates a lens onto the second element of a pair.
#[must_use]
pub fn second_lens<A, B: Clone>() -> impl Lens<(A, B), B> + Clone {
    FunctionLens::new(
        |(_, second): &(A, B)| second.clone(),
        |(first, _): (A, B), second: B| (first, second),
    )
}

/// Creates a lens onto the entry of a `HashMap` under `key`.
///
/// Reading yields `None` when the key is absent. Writing `Some(value)`
/// inserts or replaces the entry; writing `None` removes it.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use focal::optics::{map_entry, Lens};
///
/// let alice = map_entry::<&str, u32>("alice");
/// let scores = HashMap::from([("bob", 3)]);
///
/// assert_eq!(alice.get(&scores), None);
///
/// let scores = alice.set(scores, Some(5));
/// assert_eq!(scores.get("alice"), Some(&5));
///
/// let scores = alice.set(scores, None);
/// assert_eq!(scores.len(), 1);
/// ```
#[must_use]
pub fn map_entry<K, V>(key: K) -> impl Lens<HashMap<K, V>, Option<V>> + Clone
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let lookup_key = key.clone();
    FunctionLens::new(
        move |map: &HashMap<K, V>| map.get(&lookup_key).cloned(),
        move |mut map: HashMap<K, V>, value: Option<V>| {
            match value {
                Some(value) => {
                    map.insert(key.clone(), value);
                }
                None => {
                    map.remove(&key);
                }
            }
            map
        },
    )
}

/// Creates a lens onto the entry of a `BTreeMap` under `key`.
///
/// Behaves like [`map_entry`].
#[must_use]
pub fn btree_entry<K, V>(key: K) -> impl Lens<BTreeMap<K, V>, Option<V>> + Clone
where
    K: Ord + Clone,
    V: Clone,
{
    let lookup_key = key.clone();
    FunctionLens::new(
        move |map: &BTreeMap<K, V>| map.get(&lookup_key).cloned(),
        move |mut map: BTreeMap<K, V>, value: Option<V>| {
            match value {
                Some(value) => {
                    map.insert(key.clone(), value);
                }
                None => {
                    map.remove(&key);
                }
            }
            map
        },
    )
}

/// Creates a prism onto the value inside `Some`.
///
/// # Example
///
/// ```
/// use focal::optics::{some_prism, Prism};
///
/// let some = some_prism::<i32>();
///
/// assert_eq!(some.try_get(&Some(3)), Some(3));
/// assert_eq!(some.try_get(&None), None);
/// assert_eq!(some.inject(3), Some(3));
/// ```
#[must_use]
pub fn some_prism<T: Clone>() -> impl Prism<Option<T>, T> + Clone {
    FunctionPrism::new(|option: &Option<T>| option.clone(), Some)
}

/// Creates a prism onto the value inside `Ok`.
#[must_use]
pub fn ok_prism<T: Clone, E>() -> impl Prism<Result<T, E>, T> + Clone {
    FunctionPrism::new(
        |result: &Result<T, E>| result.as_ref().ok().cloned(),
        Ok,
    )
}

/// Creates a prism onto the error inside `Err`.
#[must_use]
pub fn err_prism<T, E: Clone>() -> impl Prism<Result<T, E>, E> + Clone {
    FunctionPrism::new(
        |result: &Result<T, E>| result.as_ref().err().cloned(),
        Err,
    )
}

/// Creates a prism onto the value inside [`Either::Left`].
#[must_use]
pub fn left_prism<L: Clone, R>() -> impl Prism<Either<L, R>, L> + Clone {
    FunctionPrism::new(
        |either: &Either<L, R>| either.as_ref().left().cloned(),
        Either::Left,
    )
}

/// Creates a prism onto the value inside [`Either::Right`].
#[must_use]
pub fn right_prism<L, R: Clone>() -> impl Prism<Either<L, R>, R> + Clone {
    FunctionPrism::new(
        |either: &Either<L, R>| either.as_ref().right().cloned(),
        Either::Right,
    )
}
