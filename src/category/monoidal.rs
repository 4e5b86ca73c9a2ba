// Copyright 2025 Cowboy AI, LLC.

//! Monoidal, braided and symmetric monoidal categories
//!
//! Each layer extends the previous one. Implementors fix the tensor and its
//! unit once, through associated types, and provide the structural
//! isomorphisms as morphisms of the underlying category:
//!
//! | Symbol | Method              | Shape                    |
//! |--------|---------------------|--------------------------|
//! | ρ      | `right_unitor`      | `A ⊗ I -> A`             |
//! | ρ⁻¹    | `right_unitor_inv`  | `A -> A ⊗ I`             |
//! | λ      | `left_unitor`       | `I ⊗ A -> A`             |
//! | λ⁻¹    | `left_unitor_inv`   | `A -> I ⊗ A`             |
//! | α      | `associator`        | `(A ⊗ B) ⊗ C -> A ⊗ (B ⊗ C)` |
//! | α⁻¹    | `associator_inv`    | `A ⊗ (B ⊗ C) -> (A ⊗ B) ⊗ C` |
//! | σ      | `braiding`          | `A ⊗ B -> B ⊗ A`         |
//!
//! The coherence conditions these must satisfy live in [`crate::laws`].

use super::base::Category;
use super::bifunctor::Bifunctor;

/// The object `A ⊗ B` of monoidal category `M`
pub type Tensor<M, A, B> =
    <<M as MonoidalCategory>::TensorProduct as Bifunctor<M>>::Obj<A, B>;

/// A category equipped with a tensor product and a unit object
pub trait MonoidalCategory: Category {
    /// The tensor unit `I`
    type Unit: 'static;

    /// The tensor product bifunctor `⊗`
    type TensorProduct: Bifunctor<Self>;

    /// ρ: `A ⊗ I -> A`
    fn right_unitor<A: 'static>() -> Self::Hom<Tensor<Self, A, Self::Unit>, A>;

    /// ρ⁻¹: `A -> A ⊗ I`
    fn right_unitor_inv<A: 'static>() -> Self::Hom<A, Tensor<Self, A, Self::Unit>>;

    /// λ: `I ⊗ A -> A`
    fn left_unitor<A: 'static>() -> Self::Hom<Tensor<Self, Self::Unit, A>, A>;

    /// λ⁻¹: `A -> I ⊗ A`
    fn left_unitor_inv<A: 'static>() -> Self::Hom<A, Tensor<Self, Self::Unit, A>>;

    /// α: `(A ⊗ B) ⊗ C -> A ⊗ (B ⊗ C)`
    fn associator<A: 'static, B: 'static, C: 'static>(
    ) -> Self::Hom<Tensor<Self, Tensor<Self, A, B>, C>, Tensor<Self, A, Tensor<Self, B, C>>>;

    /// α⁻¹: `A ⊗ (B ⊗ C) -> (A ⊗ B) ⊗ C`
    fn associator_inv<A: 'static, B: 'static, C: 'static>(
    ) -> Self::Hom<Tensor<Self, A, Tensor<Self, B, C>>, Tensor<Self, Tensor<Self, A, B>, C>>;

    /// `f ⊗ g`, delegated to the tensor bifunctor
    fn bimap<A: 'static, B: 'static, X: 'static, Y: 'static>(
        f: &Self::Hom<A, B>,
        g: &Self::Hom<X, Y>,
    ) -> Self::Hom<Tensor<Self, A, X>, Tensor<Self, B, Y>> {
        <Self::TensorProduct as Bifunctor<Self>>::bimap::<A, B, X, Y>(f, g)
    }
}

/// A monoidal category with a natural swap of tensor components
pub trait BraidedMonoidalCategory: MonoidalCategory {
    /// σ: `A ⊗ B -> B ⊗ A`
    fn braiding<A: 'static, B: 'static>() -> Self::Hom<Tensor<Self, A, B>, Tensor<Self, B, A>>;
}

/// A braided monoidal category whose braiding is its own inverse
///
/// Carries no operations of its own; implementing it asserts
/// `σ_{B,A} ∘ σ_{A,B} == id`, which
/// [`crate::laws::SymmetricMonoidalCategoryLaws::involution_law`] checks.
pub trait SymmetricMonoidalCategory: BraidedMonoidalCategory {}
