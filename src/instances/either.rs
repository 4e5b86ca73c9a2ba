// Copyright (c) 2025 - Cowboy AI, LLC.

//! Simple algebraic data types behind the cocartesian structure.

use serde::{Deserialize, Serialize};

/// A standard Either ADT: Left(L) or Right(R).
///
/// As the tensor of [`crate::Coproduct`], `Either<A, B>` is the object
/// `A ⊕ B`: a value tagged with the side it came from. Serialized adjacently
/// tagged, e.g. `{"kind":"Left","value":3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Either<L, R> {
    /// Left branch
    Left(L),
    /// Right branch
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Map over the Right value.
    pub fn map<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Map over the Left value.
    pub fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Case analysis: fold either branch into a common result.
    pub fn either<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Exchange the branches.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Whether this is the Left branch.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Whether this is the Right branch.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Get a reference to the Left value if present.
    pub fn left(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            _ => None,
        }
    }

    /// Get a reference to the Right value if present.
    pub fn right(&self) -> Option<&R> {
        match self {
            Either::Right(r) => Some(r),
            _ => None,
        }
    }
}

/// The uninhabited type: no value of `Void` can ever be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Void {}

impl Void {
    /// Ex falso: a `Void` in hand proves the current branch is unreachable.
    pub fn absurd<T>(self) -> T {
        match self {}
    }
}
