//! Law checks for lenses, prisms and affines.
//!
//! Two layers are provided:
//!
//! - `check_*` predicates return `bool` and are meant to be called from a
//!   property-based test harness (`prop_assert!(check_set_get(&lens, w, p))`).
//! - [`LensLaws`], [`PrismLaws`] and [`AffineLaws`] run every law of an optic
//!   kind on one sample and report the first failure as a [`LawViolation`]
//!   carrying the `Debug` renderings of what was expected and what was seen.
//!
//! # Example
//!
//! ```
//! use focal::lens;
//! use focal::optics::laws::{check_set_get, LensLaws};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//! let origin = Point { x: 0, y: 0 };
//!
//! assert!(check_set_get(&x_lens, origin.clone(), 5));
//! assert!(LensLaws::new(&x_lens).verify(&origin, &1, &2).is_ok());
//! ```

use std::fmt::Debug;
use std::marker::PhantomData;

use thiserror::Error;

use super::affine::Affine;
use super::lens::Lens;
use super::prism::Prism;

// =============================================================================
// Predicates
// =============================================================================

/// `lens.get(&lens.set(whole, part)) == part`
pub fn check_set_get<W, P, L>(lens: &L, whole: W, part: P) -> bool
where
    L: Lens<W, P>,
    P: PartialEq + Clone,
{
    lens.get(&lens.set(whole, part.clone())) == part
}

/// `lens.set(whole, lens.get(&whole)) == whole`
pub fn check_get_set<W, P, L>(lens: &L, whole: &W) -> bool
where
    L: Lens<W, P>,
    W: PartialEq + Clone,
{
    lens.set(whole.clone(), lens.get(whole)) == *whole
}

/// `lens.set(lens.set(whole, first), second) == lens.set(whole, second)`
pub fn check_set_set<W, P, L>(lens: &L, whole: W, first: P, second: P) -> bool
where
    L: Lens<W, P>,
    W: PartialEq + Clone,
    P: Clone,
{
    lens.set(lens.set(whole.clone(), first), second.clone()) == lens.set(whole, second)
}

/// `prism.try_get(&prism.inject(part)) == Some(part)`
pub fn check_inject_try_get<W, P, Q>(prism: &Q, part: P) -> bool
where
    Q: Prism<W, P>,
    P: PartialEq + Clone,
{
    prism.try_get(&prism.inject(part.clone())) == Some(part)
}

/// If `prism.try_get(&whole)` is `Some(part)`, then `prism.inject(part) == whole`.
pub fn check_try_get_inject<W, P, Q>(prism: &Q, whole: &W) -> bool
where
    Q: Prism<W, P>,
    W: PartialEq,
{
    prism
        .try_get(whole)
        .is_none_or(|part| prism.inject(part) == *whole)
}

/// If `prism` does not match `whole`, `prism.try_modify(whole, function) == whole`.
pub fn check_try_modify_no_op<W, P, Q, F>(prism: &Q, whole: &W, function: F) -> bool
where
    Q: Prism<W, P>,
    W: PartialEq + Clone,
    F: FnOnce(P) -> P,
{
    prism.matches(whole) || prism.try_modify(whole.clone(), function) == *whole
}

/// If `affine.try_set(whole, part)` is `Some(updated)`, then `affine.try_get(&updated) == Some(part)`.
pub fn check_try_set_try_get<W, P, A>(affine: &A, whole: W, part: P) -> bool
where
    A: Affine<W, P>,
    P: PartialEq + Clone,
{
    affine
        .try_set(whole, part.clone())
        .is_none_or(|updated| affine.try_get(&updated) == Some(part))
}

/// If `affine.try_get(&whole)` is `Some(part)`, then `affine.try_set(whole, part) == Some(whole)`.
pub fn check_try_get_try_set<W, P, A>(affine: &A, whole: &W) -> bool
where
    A: Affine<W, P>,
    W: PartialEq + Clone,
{
    affine
        .try_get(whole)
        .is_none_or(|part| affine.try_set(whole.clone(), part).as_ref() == Some(whole))
}

/// Two lenses agree on `get` and on `set(whole, part)` for this sample.
///
/// Used to check that differently bracketed compositions behave the same.
pub fn check_lenses_agree<W, P, L1, L2>(left: &L1, right: &L2, whole: &W, part: P) -> bool
where
    L1: Lens<W, P>,
    L2: Lens<W, P>,
    W: PartialEq + Clone,
    P: PartialEq + Clone,
{
    left.get(whole) == right.get(whole)
        && left.set(whole.clone(), part.clone()) == right.set(whole.clone(), part)
}

// =============================================================================
// Violations
// =============================================================================

/// A law that an optic failed on a concrete sample.
///
/// `expected` and `actual` hold the `Debug` renderings of the two sides of the
/// law's equation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LawViolation {
    /// `get(set(whole, part))` differed from `part`.
    #[error("set-get law violated: expected {expected}, got {actual}")]
    SetGet {
        /// The part that was set.
        expected: String,
        /// The part read back.
        actual: String,
    },

    /// `set(whole, get(whole))` differed from `whole`.
    #[error("get-set law violated: expected {expected}, got {actual}")]
    GetSet {
        /// The original whole.
        expected: String,
        /// The whole after writing back its own part.
        actual: String,
    },

    /// `set(set(whole, first), second)` differed from `set(whole, second)`.
    #[error("set-set law violated: expected {expected}, got {actual}")]
    SetSet {
        /// The whole after a single set.
        expected: String,
        /// The whole after two sets.
        actual: String,
    },

    /// `try_get(inject(part))` differed from `Some(part)`.
    #[error("inject-try_get law violated: expected {expected}, got {actual}")]
    InjectTryGet {
        /// `Some(part)`.
        expected: String,
        /// What `try_get` returned.
        actual: String,
    },

    /// `inject(try_get(whole))` differed from `whole`.
    #[error("try_get-inject law violated: expected {expected}, got {actual}")]
    TryGetInject {
        /// The original whole.
        expected: String,
        /// The rebuilt whole.
        actual: String,
    },

    /// `try_get(try_set(whole, part))` differed from `Some(part)`.
    #[error("try_set-try_get law violated: expected {expected}, got {actual}")]
    TrySetTryGet {
        /// `Some(part)`.
        expected: String,
        /// What `try_get` returned.
        actual: String,
    },

    /// `try_set(whole, try_get(whole))` differed from `Some(whole)`.
    #[error("try_get-try_set law violated: expected {expected}, got {actual}")]
    TryGetTrySet {
        /// `Some(whole)`.
        expected: String,
        /// What `try_set` returned.
        actual: String,
    },
}

impl LawViolation {
    /// The short name of the violated law.
    #[must_use]
    pub const fn law(&self) -> &'static str {
        match self {
            Self::SetGet { .. } => "set-get",
            Self::GetSet { .. } => "get-set",
            Self::SetSet { .. } => "set-set",
            Self::InjectTryGet { .. } => "inject-try_get",
            Self::TryGetInject { .. } => "try_get-inject",
            Self::TrySetTryGet { .. } => "try_set-try_get",
            Self::TryGetTrySet { .. } => "try_get-try_set",
        }
    }
}

fn compare<T, V>(expected: &T, actual: &T, violation: V) -> Result<(), LawViolation>
where
    T: PartialEq + Debug,
    V: FnOnce(String, String) -> LawViolation,
{
    if expected == actual {
        return Ok(());
    }

    let violation = violation(format!("{expected:?}"), format!("{actual:?}"));
    tracing::debug!(law = violation.law(), %violation, "optic law violated");
    Err(violation)
}

// =============================================================================
// Verifiers
// =============================================================================

/// Runs the three lens laws against a lens.
///
/// # Example
///
/// ```
/// use focal::lens;
/// use focal::optics::FunctionLens;
/// use focal::optics::laws::{LawViolation, LensLaws};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { count: u32 }
///
/// let sticky = FunctionLens::new(
///     |counter: &Counter| counter.count,
///     |counter: Counter, _count: u32| counter,
/// );
///
/// let result = LensLaws::new(&sticky).verify(&Counter { count: 0 }, &1, &2);
/// assert!(matches!(result, Err(LawViolation::SetGet { .. })));
/// ```
pub struct LensLaws<'a, L, W, P> {
    lens: &'a L,
    _marker: PhantomData<(W, P)>,
}

impl<'a, L, W, P> LensLaws<'a, L, W, P> {
    /// Creates a verifier for `lens`.
    #[must_use]
    pub const fn new(lens: &'a L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, W, P> LensLaws<'_, L, W, P>
where
    L: Lens<W, P>,
    W: Clone + PartialEq + Debug,
    P: Clone + PartialEq + Debug,
{
    /// Checks set-get, get-set and set-set on one sample.
    ///
    /// # Errors
    ///
    /// Returns the first law that does not hold.
    pub fn verify(&self, whole: &W, first: &P, second: &P) -> Result<(), LawViolation> {
        self.verify_set_get(whole, first)?;
        self.verify_get_set(whole)?;
        self.verify_set_set(whole, first, second)?;
        tracing::trace!(optic = "lens", "all laws hold");
        Ok(())
    }

    /// Checks `get(set(whole, part)) == part`.
    ///
    /// # Errors
    ///
    /// Returns [`LawViolation::SetGet`] if the law does not hold.
    pub fn verify_set_get(&self, whole: &W, part: &P) -> Result<(), LawViolation> {
        let actual = self.lens.get(&self.lens.set(whole.clone(), part.clone()));
        compare(part, &actual, |expected, actual| LawViolation::SetGet {
            expected,
            actual,
        })
    }

    /// Checks `set(whole, get(whole)) == whole`.
    ///
    /// # Errors
    ///
    /// Returns [`LawViolation::GetSet`] if the law does not hold.
    pub fn verify_get_set(&self, whole: &W) -> Result<(), LawViolation> {
        let actual = self.lens.set(whole.clone(), self.lens.get(whole));
        compare(whole, &actual, |expected, actual| LawViolation::GetSet {
            expected,
            actual,
        })
    }

    /// Checks `set(set(whole, first), second) == set(whole, second)`.
    ///
    /// # Errors
    ///
    /// Returns [`LawViolation::SetSet`] if the law does not hold.
    pub fn verify_set_set(&self, whole: &W, first: &P, second: &P) -> Result<(), LawViolation> {
        let expected = self.lens.set(whole.clone(), second.clone());
        let actual = self.lens.set(
            self.lens.set(whole.clone(), first.clone()),
            second.clone(),
        );
        compare(&expected, &actual, |expected, actual| LawViolation::SetSet {
            expected,
            actual,
        })
    }
}

/// Runs the two prism laws against a prism.
pub struct PrismLaws<'a, Q, W, P> {
    prism: &'a Q,
    _marker: PhantomData<(W, P)>,
}

impl<'a, Q, W, P> PrismLaws<'a, Q, W, P> {
    /// Creates a verifier for `prism`.
    #[must_use]
    pub const fn new(prism: &'a Q) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<Q, W, P> PrismLaws<'_, Q, W, P>
where
    Q: Prism<W, P>,
    W: PartialEq + Debug,
    P: Clone + PartialEq + Debug,
{
    /// Checks inject-try_get on `part` and try_get-inject on `whole`.
    ///
    /// `whole` may have any shape; the try_get-inject law holds vacuously when
    /// the prism does not match it.
    ///
    /// # Errors
    ///
    /// Returns the first law that does not hold.
    pub fn verify(&self, whole: &W, part: &P) -> Result<(), LawViolation> {
        self.verify_inject_try_get(part)?;
        self.verify_try_get_inject(whole)?;
        tracing::trace!(optic = "prism", "all laws hold");
        Ok(())
    }

    /// Checks `try_get(inject(part)) == Some(part)`.
    ///
    /// # Errors
    ///
    /// Returns [`LawViolation::InjectTryGet`] if the law does not hold.
    pub fn verify_inject_try_get(&self, part: &P) -> Result<(), LawViolation> {
        let actual = self.prism.try_get(&self.prism.inject(part.clone()));
        compare(&Some(part.clone()), &actual, |expected, actual| {
            LawViolation::InjectTryGet { expected, actual }
        })
    }

    /// Checks `inject(part) == whole` whenever `try_get(whole) == Some(part)`.
    ///
    /// # Errors
    ///
    /// Returns [`LawViolation::TryGetInject`] if the law does not hold.
    pub fn verify_try_get_inject(&self, whole: &W) -> Result<(), LawViolation> {
        match self.prism.try_get(whole) {
            Some(part) => {
                let actual = self.prism.inject(part);
                compare(whole, &actual, |expected, actual| {
                    LawViolation::TryGetInject { expected, actual }
                })
            }
            None => Ok(()),
        }
    }
}

/// Runs the two affine laws against an affine.
pub struct AffineLaws<'a, A, W, P> {
    affine: &'a A,
    _marker: PhantomData<(W, P)>,
}

impl<'a, A, W, P> AffineLaws<'a, A, W, P> {
    /// Creates a verifier for `affine`.
    #[must_use]
    pub const fn new(affine: &'a A) -> Self {
        Self {
            affine,
            _marker: PhantomData,
        }
    }
}

impl<A, W, P> AffineLaws<'_, A, W, P>
where
    A: Affine<W, P>,
    W: Clone + PartialEq + Debug,
    P: Clone + PartialEq + Debug,
{
    /// Checks try_set-try_get and try_get-try_set on one sample.
    ///
    /// Both laws hold vacuously where the affine refuses the read or the write.
    ///
    /// # Errors
    ///
    /// Returns the first law that does not hold.
    pub fn verify(&self, whole: &W, part: &P) -> Result<(), LawViolation> {
        self.verify_try_set_try_get(whole, part)?;
        self.verify_try_get_try_set(whole)?;
        tracing::trace!(optic = "affine", "all laws hold");
        Ok(())
    }

    /// Checks `try_get(updated) == Some(part)` whenever `try_set(whole, part) == Some(updated)`.
    ///
    /// # Errors
    ///
    /// Returns [`LawViolation::TrySetTryGet`] if the law does not hold.
    pub fn verify_try_set_try_get(&self, whole: &W, part: &P) -> Result<(), LawViolation> {
        match self.affine.try_set(whole.clone(), part.clone()) {
            Some(updated) => {
                let actual = self.affine.try_get(&updated);
                compare(&Some(part.clone()), &actual, |expected, actual| {
                    LawViolation::TrySetTryGet { expected, actual }
                })
            }
            None => Ok(()),
        }
    }

    /// Checks `try_set(whole, part) == Some(whole)` whenever `try_get(whole) == Some(part)`.
    ///
    /// # Errors
    ///
    /// Returns [`LawViolation::TryGetTrySet`] if the law does not hold.
    pub fn verify_try_get_try_set(&self, whole: &W) -> Result<(), LawViolation> {
        match self.affine.try_get(whole) {
            Some(part) => {
                let actual = self.affine.try_set(whole.clone(), part);
                compare(&Some(whole.clone()), &actual, |expected, actual| {
                    LawViolation::TryGetTrySet { expected, actual }
                })
            }
            None => Ok(()),
        }
    }
}
