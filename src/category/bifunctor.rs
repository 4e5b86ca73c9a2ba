// Copyright 2025 Cowboy AI, LLC.

//! Bifunctors on a category
//!
//! A bifunctor maps a pair of objects to a single object and a pair of
//! morphisms to a single morphism between the results. It is the tensor
//! product of a monoidal category.

use super::base::Category;

/// A two-argument structure-preserving mapping over category `C`
///
/// Laws (see [`crate::laws::BifunctorLaws`]):
/// - `bimap(id, id) == id`
/// - `bimap(f2 ∘ f1, g2 ∘ g1) == bimap(f2, g2) ∘ bimap(f1, g1)`
pub trait Bifunctor<C: Category> {
    /// The object `A ⊗ B`
    type Obj<A: 'static, B: 'static>: 'static;

    /// Lift `f` and `g` to act on the left and right components of a tensor
    fn bimap<A: 'static, B: 'static, X: 'static, Y: 'static>(
        f: &C::Hom<A, B>,
        g: &C::Hom<X, Y>,
    ) -> C::Hom<Self::Obj<A, X>, Self::Obj<B, Y>>;
}
