// Copyright 2025 Cowboy AI, LLC.

//! Hexagon and naturality laws for braidings, involution for symmetries

use crate::category::{BraidedMonoidalCategory, SymmetricMonoidalCategory, Tensor};

/// Laws every [`BraidedMonoidalCategory`] must satisfy
pub trait BraidedMonoidalCategoryLaws: BraidedMonoidalCategory {
    /// First hexagon, from `(A ⊗ B) ⊗ C` to `B ⊗ (C ⊗ A)`
    ///
    /// - `α_{B,C,A} ∘ σ_{A,B⊗C} ∘ α_{A,B,C}`
    /// - `(id ⊗ σ_{A,C}) ∘ α_{B,A,C} ∘ (σ_{A,B} ⊗ id)`
    fn hexagon_equations_left<A: 'static, B: 'static, C: 'static>(
        sample: Tensor<Self, Tensor<Self, A, B>, C>,
    ) -> bool
    where
        Tensor<Self, Tensor<Self, A, B>, C>: Clone,
        Tensor<Self, B, Tensor<Self, C, A>>: PartialEq,
    {
        let through_braid = Self::compose::<
            Tensor<Self, Tensor<Self, A, B>, C>,
            Tensor<Self, Tensor<Self, B, C>, A>,
            Tensor<Self, B, Tensor<Self, C, A>>,
        >(
            &Self::associator::<B, C, A>(),
            &Self::compose::<
                Tensor<Self, Tensor<Self, A, B>, C>,
                Tensor<Self, A, Tensor<Self, B, C>>,
                Tensor<Self, Tensor<Self, B, C>, A>,
            >(
                &Self::braiding::<A, Tensor<Self, B, C>>(),
                &Self::associator::<A, B, C>(),
            ),
        );

        let stepwise = Self::compose::<
            Tensor<Self, Tensor<Self, A, B>, C>,
            Tensor<Self, B, Tensor<Self, A, C>>,
            Tensor<Self, B, Tensor<Self, C, A>>,
        >(
            &Self::bimap::<B, B, Tensor<Self, A, C>, Tensor<Self, C, A>>(
                &Self::identity::<B>(),
                &Self::braiding::<A, C>(),
            ),
            &Self::compose::<
                Tensor<Self, Tensor<Self, A, B>, C>,
                Tensor<Self, Tensor<Self, B, A>, C>,
                Tensor<Self, B, Tensor<Self, A, C>>,
            >(
                &Self::associator::<B, A, C>(),
                &Self::bimap::<Tensor<Self, A, B>, Tensor<Self, B, A>, C, C>(
                    &Self::braiding::<A, B>(),
                    &Self::identity::<C>(),
                ),
            ),
        );

        Self::apply::<Tensor<Self, Tensor<Self, A, B>, C>, Tensor<Self, B, Tensor<Self, C, A>>>(
            &through_braid,
            sample.clone(),
        ) == Self::apply::<
            Tensor<Self, Tensor<Self, A, B>, C>,
            Tensor<Self, B, Tensor<Self, C, A>>,
        >(&stepwise, sample)
    }

    /// Second hexagon, from `A ⊗ (B ⊗ C)` to `(C ⊗ A) ⊗ B`
    ///
    /// - `α⁻¹_{C,A,B} ∘ σ_{A⊗B,C} ∘ α⁻¹_{A,B,C}`
    /// - `(σ_{A,C} ⊗ id) ∘ α⁻¹_{A,C,B} ∘ (id ⊗ σ_{B,C})`
    fn hexagon_equations_right<A: 'static, B: 'static, C: 'static>(
        sample: Tensor<Self, A, Tensor<Self, B, C>>,
    ) -> bool
    where
        Tensor<Self, A, Tensor<Self, B, C>>: Clone,
        Tensor<Self, Tensor<Self, C, A>, B>: PartialEq,
    {
        let through_braid = Self::compose::<
            Tensor<Self, A, Tensor<Self, B, C>>,
            Tensor<Self, C, Tensor<Self, A, B>>,
            Tensor<Self, Tensor<Self, C, A>, B>,
        >(
            &Self::associator_inv::<C, A, B>(),
            &Self::compose::<
                Tensor<Self, A, Tensor<Self, B, C>>,
                Tensor<Self, Tensor<Self, A, B>, C>,
                Tensor<Self, C, Tensor<Self, A, B>>,
            >(
                &Self::braiding::<Tensor<Self, A, B>, C>(),
                &Self::associator_inv::<A, B, C>(),
            ),
        );

        let stepwise = Self::compose::<
            Tensor<Self, A, Tensor<Self, B, C>>,
            Tensor<Self, Tensor<Self, A, C>, B>,
            Tensor<Self, Tensor<Self, C, A>, B>,
        >(
            &Self::bimap::<Tensor<Self, A, C>, Tensor<Self, C, A>, B, B>(
                &Self::braiding::<A, C>(),
                &Self::identity::<B>(),
            ),
            &Self::compose::<
                Tensor<Self, A, Tensor<Self, B, C>>,
                Tensor<Self, A, Tensor<Self, C, B>>,
                Tensor<Self, Tensor<Self, A, C>, B>,
            >(
                &Self::associator_inv::<A, C, B>(),
                &Self::bimap::<A, A, Tensor<Self, B, C>, Tensor<Self, C, B>>(
                    &Self::identity::<A>(),
                    &Self::braiding::<B, C>(),
                ),
            ),
        );

        Self::apply::<Tensor<Self, A, Tensor<Self, B, C>>, Tensor<Self, Tensor<Self, C, A>, B>>(
            &through_braid,
            sample.clone(),
        ) == Self::apply::<
            Tensor<Self, A, Tensor<Self, B, C>>,
            Tensor<Self, Tensor<Self, C, A>, B>,
        >(&stepwise, sample)
    }

    /// Naturality of σ: `σ ∘ (f ⊗ g) == (g ⊗ f) ∘ σ`
    fn braiding_naturality_law<A: 'static, B: 'static, X: 'static, Y: 'static>(
        f: &Self::Hom<A, B>,
        g: &Self::Hom<X, Y>,
        sample: Tensor<Self, A, X>,
    ) -> bool
    where
        Tensor<Self, A, X>: Clone,
        Tensor<Self, Y, B>: PartialEq,
    {
        let map_then_swap = Self::compose::<
            Tensor<Self, A, X>,
            Tensor<Self, B, Y>,
            Tensor<Self, Y, B>,
        >(&Self::braiding::<B, Y>(), &Self::bimap::<A, B, X, Y>(f, g));
        let swap_then_map = Self::compose::<
            Tensor<Self, A, X>,
            Tensor<Self, X, A>,
            Tensor<Self, Y, B>,
        >(&Self::bimap::<X, Y, A, B>(g, f), &Self::braiding::<A, X>());
        Self::apply::<Tensor<Self, A, X>, Tensor<Self, Y, B>>(&map_then_swap, sample.clone())
            == Self::apply::<Tensor<Self, A, X>, Tensor<Self, Y, B>>(&swap_then_map, sample)
    }
}

impl<M: BraidedMonoidalCategory> BraidedMonoidalCategoryLaws for M {}

/// Laws every [`SymmetricMonoidalCategory`] must satisfy
pub trait SymmetricMonoidalCategoryLaws: SymmetricMonoidalCategory {
    /// Involution: `σ_{B,A} ∘ σ_{A,B} == id`
    fn involution_law<A: 'static, B: 'static>(sample: Tensor<Self, A, B>) -> bool
    where
        Tensor<Self, A, B>: Clone + PartialEq,
    {
        let twice = Self::compose::<Tensor<Self, A, B>, Tensor<Self, B, A>, Tensor<Self, A, B>>(
            &Self::braiding::<B, A>(),
            &Self::braiding::<A, B>(),
        );
        Self::apply::<Tensor<Self, A, B>, Tensor<Self, A, B>>(&twice, sample.clone()) == sample
    }
}

impl<M: SymmetricMonoidalCategory> SymmetricMonoidalCategoryLaws for M {}
