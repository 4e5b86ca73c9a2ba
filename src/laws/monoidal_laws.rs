// Copyright 2025 Cowboy AI, LLC.

//! Coherence and inverse laws for monoidal categories
//!
//! Every law builds two morphisms between the same endpoints, runs both on the
//! sample and compares the results structurally.

use crate::category::{MonoidalCategory, Tensor};

/// Laws every [`MonoidalCategory`] must satisfy
pub trait MonoidalCategoryLaws: MonoidalCategory {
    /// `ρ⁻¹ ∘ ρ == id` on `A ⊗ I`
    fn right_unitor_iso_law<A: 'static>(sample: Tensor<Self, A, Self::Unit>) -> bool
    where
        Tensor<Self, A, Self::Unit>: Clone + PartialEq,
    {
        let round_trip = Self::compose::<
            Tensor<Self, A, Self::Unit>,
            A,
            Tensor<Self, A, Self::Unit>,
        >(&Self::right_unitor_inv::<A>(), &Self::right_unitor::<A>());
        Self::apply::<Tensor<Self, A, Self::Unit>, Tensor<Self, A, Self::Unit>>(
            &round_trip,
            sample.clone(),
        ) == sample
    }

    /// `ρ ∘ ρ⁻¹ == id` on `A`
    fn right_unitor_section_law<A: 'static>(sample: A) -> bool
    where
        A: Clone + PartialEq,
    {
        let round_trip = Self::compose::<A, Tensor<Self, A, Self::Unit>, A>(
            &Self::right_unitor::<A>(),
            &Self::right_unitor_inv::<A>(),
        );
        Self::apply::<A, A>(&round_trip, sample.clone()) == sample
    }

    /// `λ⁻¹ ∘ λ == id` on `I ⊗ A`
    fn left_unitor_iso_law<A: 'static>(sample: Tensor<Self, Self::Unit, A>) -> bool
    where
        Tensor<Self, Self::Unit, A>: Clone + PartialEq,
    {
        let round_trip = Self::compose::<
            Tensor<Self, Self::Unit, A>,
            A,
            Tensor<Self, Self::Unit, A>,
        >(&Self::left_unitor_inv::<A>(), &Self::left_unitor::<A>());
        Self::apply::<Tensor<Self, Self::Unit, A>, Tensor<Self, Self::Unit, A>>(
            &round_trip,
            sample.clone(),
        ) == sample
    }

    /// `λ ∘ λ⁻¹ == id` on `A`
    fn left_unitor_section_law<A: 'static>(sample: A) -> bool
    where
        A: Clone + PartialEq,
    {
        let round_trip = Self::compose::<A, Tensor<Self, Self::Unit, A>, A>(
            &Self::left_unitor::<A>(),
            &Self::left_unitor_inv::<A>(),
        );
        Self::apply::<A, A>(&round_trip, sample.clone()) == sample
    }

    /// `α⁻¹ ∘ α == id` on `(A ⊗ B) ⊗ C`
    fn associator_iso_law<A: 'static, B: 'static, C: 'static>(
        sample: Tensor<Self, Tensor<Self, A, B>, C>,
    ) -> bool
    where
        Tensor<Self, Tensor<Self, A, B>, C>: Clone + PartialEq,
    {
        let round_trip = Self::compose::<
            Tensor<Self, Tensor<Self, A, B>, C>,
            Tensor<Self, A, Tensor<Self, B, C>>,
            Tensor<Self, Tensor<Self, A, B>, C>,
        >(
            &Self::associator_inv::<A, B, C>(),
            &Self::associator::<A, B, C>(),
        );
        Self::apply::<Tensor<Self, Tensor<Self, A, B>, C>, Tensor<Self, Tensor<Self, A, B>, C>>(
            &round_trip,
            sample.clone(),
        ) == sample
    }

    /// `α ∘ α⁻¹ == id` on `A ⊗ (B ⊗ C)`
    fn associator_inv_iso_law<A: 'static, B: 'static, C: 'static>(
        sample: Tensor<Self, A, Tensor<Self, B, C>>,
    ) -> bool
    where
        Tensor<Self, A, Tensor<Self, B, C>>: Clone + PartialEq,
    {
        let round_trip = Self::compose::<
            Tensor<Self, A, Tensor<Self, B, C>>,
            Tensor<Self, Tensor<Self, A, B>, C>,
            Tensor<Self, A, Tensor<Self, B, C>>,
        >(
            &Self::associator::<A, B, C>(),
            &Self::associator_inv::<A, B, C>(),
        );
        Self::apply::<Tensor<Self, A, Tensor<Self, B, C>>, Tensor<Self, A, Tensor<Self, B, C>>>(
            &round_trip,
            sample.clone(),
        ) == sample
    }

    /// Naturality of λ: `f ∘ λ == λ ∘ (id ⊗ f)`
    fn left_unitor_naturality_law<A: 'static, B: 'static>(
        f: &Self::Hom<A, B>,
        sample: Tensor<Self, Self::Unit, A>,
    ) -> bool
    where
        Tensor<Self, Self::Unit, A>: Clone,
        B: PartialEq,
    {
        let eliminate_first =
            Self::compose::<Tensor<Self, Self::Unit, A>, A, B>(f, &Self::left_unitor::<A>());
        let map_first = Self::compose::<
            Tensor<Self, Self::Unit, A>,
            Tensor<Self, Self::Unit, B>,
            B,
        >(
            &Self::left_unitor::<B>(),
            &Self::bimap::<Self::Unit, Self::Unit, A, B>(&Self::identity::<Self::Unit>(), f),
        );
        Self::apply::<Tensor<Self, Self::Unit, A>, B>(&eliminate_first, sample.clone())
            == Self::apply::<Tensor<Self, Self::Unit, A>, B>(&map_first, sample)
    }

    /// Naturality of ρ: `f ∘ ρ == ρ ∘ (f ⊗ id)`
    fn right_unitor_naturality_law<A: 'static, B: 'static>(
        f: &Self::Hom<A, B>,
        sample: Tensor<Self, A, Self::Unit>,
    ) -> bool
    where
        Tensor<Self, A, Self::Unit>: Clone,
        B: PartialEq,
    {
        let eliminate_first =
            Self::compose::<Tensor<Self, A, Self::Unit>, A, B>(f, &Self::right_unitor::<A>());
        let map_first = Self::compose::<
            Tensor<Self, A, Self::Unit>,
            Tensor<Self, B, Self::Unit>,
            B,
        >(
            &Self::right_unitor::<B>(),
            &Self::bimap::<A, B, Self::Unit, Self::Unit>(f, &Self::identity::<Self::Unit>()),
        );
        Self::apply::<Tensor<Self, A, Self::Unit>, B>(&eliminate_first, sample.clone())
            == Self::apply::<Tensor<Self, A, Self::Unit>, B>(&map_first, sample)
    }

    /// Naturality of α: `α ∘ ((f ⊗ g) ⊗ h) == (f ⊗ (g ⊗ h)) ∘ α`
    fn associator_naturality_law<A, B, C, X, Y, Z>(
        f: &Self::Hom<A, X>,
        g: &Self::Hom<B, Y>,
        h: &Self::Hom<C, Z>,
        sample: Tensor<Self, Tensor<Self, A, B>, C>,
    ) -> bool
    where
        A: 'static,
        B: 'static,
        C: 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
        Tensor<Self, Tensor<Self, A, B>, C>: Clone,
        Tensor<Self, X, Tensor<Self, Y, Z>>: PartialEq,
    {
        let map_then_associate = Self::compose::<
            Tensor<Self, Tensor<Self, A, B>, C>,
            Tensor<Self, Tensor<Self, X, Y>, Z>,
            Tensor<Self, X, Tensor<Self, Y, Z>>,
        >(
            &Self::associator::<X, Y, Z>(),
            &Self::bimap::<Tensor<Self, A, B>, Tensor<Self, X, Y>, C, Z>(
                &Self::bimap::<A, X, B, Y>(f, g),
                h,
            ),
        );
        let associate_then_map = Self::compose::<
            Tensor<Self, Tensor<Self, A, B>, C>,
            Tensor<Self, A, Tensor<Self, B, C>>,
            Tensor<Self, X, Tensor<Self, Y, Z>>,
        >(
            &Self::bimap::<A, X, Tensor<Self, B, C>, Tensor<Self, Y, Z>>(
                f,
                &Self::bimap::<B, Y, C, Z>(g, h),
            ),
            &Self::associator::<A, B, C>(),
        );
        Self::apply::<Tensor<Self, Tensor<Self, A, B>, C>, Tensor<Self, X, Tensor<Self, Y, Z>>>(
            &map_then_associate,
            sample.clone(),
        ) == Self::apply::<
            Tensor<Self, Tensor<Self, A, B>, C>,
            Tensor<Self, X, Tensor<Self, Y, Z>>,
        >(&associate_then_map, sample)
    }

    /// Triangle: `ρ ⊗ id == (id ⊗ λ) ∘ α` on `(A ⊗ I) ⊗ B`
    fn triangle_equations<A: 'static, B: 'static>(
        sample: Tensor<Self, Tensor<Self, A, Self::Unit>, B>,
    ) -> bool
    where
        Tensor<Self, Tensor<Self, A, Self::Unit>, B>: Clone,
        Tensor<Self, A, B>: PartialEq,
    {
        let direct = Self::bimap::<Tensor<Self, A, Self::Unit>, A, B, B>(
            &Self::right_unitor::<A>(),
            &Self::identity::<B>(),
        );
        let via_associator = Self::compose::<
            Tensor<Self, Tensor<Self, A, Self::Unit>, B>,
            Tensor<Self, A, Tensor<Self, Self::Unit, B>>,
            Tensor<Self, A, B>,
        >(
            &Self::bimap::<A, A, Tensor<Self, Self::Unit, B>, B>(
                &Self::identity::<A>(),
                &Self::left_unitor::<B>(),
            ),
            &Self::associator::<A, Self::Unit, B>(),
        );
        Self::apply::<Tensor<Self, Tensor<Self, A, Self::Unit>, B>, Tensor<Self, A, B>>(
            &direct,
            sample.clone(),
        ) == Self::apply::<Tensor<Self, Tensor<Self, A, Self::Unit>, B>, Tensor<Self, A, B>>(
            &via_associator,
            sample,
        )
    }

    /// Pentagon: the two ways of re-bracketing `((A ⊗ B) ⊗ C) ⊗ D` into
    /// `A ⊗ (B ⊗ (C ⊗ D))` agree
    ///
    /// - top: `α_{A,B,C⊗D} ∘ α_{A⊗B,C,D}`
    /// - bottom: `(id ⊗ α_{B,C,D}) ∘ α_{A,B⊗C,D} ∘ (α_{A,B,C} ⊗ id)`
    fn pentagon_equations<A: 'static, B: 'static, C: 'static, D: 'static>(
        sample: Tensor<Self, Tensor<Self, Tensor<Self, A, B>, C>, D>,
    ) -> bool
    where
        Tensor<Self, Tensor<Self, Tensor<Self, A, B>, C>, D>: Clone,
        Tensor<Self, A, Tensor<Self, B, Tensor<Self, C, D>>>: PartialEq,
    {
        let top = Self::compose::<
            Tensor<Self, Tensor<Self, Tensor<Self, A, B>, C>, D>,
            Tensor<Self, Tensor<Self, A, B>, Tensor<Self, C, D>>,
            Tensor<Self, A, Tensor<Self, B, Tensor<Self, C, D>>>,
        >(
            &Self::associator::<A, B, Tensor<Self, C, D>>(),
            &Self::associator::<Tensor<Self, A, B>, C, D>(),
        );

        let reassociate_left = Self::bimap::<
            Tensor<Self, Tensor<Self, A, B>, C>,
            Tensor<Self, A, Tensor<Self, B, C>>,
            D,
            D,
        >(&Self::associator::<A, B, C>(), &Self::identity::<D>());
        let reassociate_middle = Self::associator::<A, Tensor<Self, B, C>, D>();
        let reassociate_right = Self::bimap::<
            A,
            A,
            Tensor<Self, Tensor<Self, B, C>, D>,
            Tensor<Self, B, Tensor<Self, C, D>>,
        >(&Self::identity::<A>(), &Self::associator::<B, C, D>());
        let bottom = Self::compose::<
            Tensor<Self, Tensor<Self, Tensor<Self, A, B>, C>, D>,
            Tensor<Self, A, Tensor<Self, Tensor<Self, B, C>, D>>,
            Tensor<Self, A, Tensor<Self, B, Tensor<Self, C, D>>>,
        >(
            &reassociate_right,
            &Self::compose::<
                Tensor<Self, Tensor<Self, Tensor<Self, A, B>, C>, D>,
                Tensor<Self, Tensor<Self, A, Tensor<Self, B, C>>, D>,
                Tensor<Self, A, Tensor<Self, Tensor<Self, B, C>, D>>,
            >(&reassociate_middle, &reassociate_left),
        );

        Self::apply::<
            Tensor<Self, Tensor<Self, Tensor<Self, A, B>, C>, D>,
            Tensor<Self, A, Tensor<Self, B, Tensor<Self, C, D>>>,
        >(&top, sample.clone())
            == Self::apply::<
                Tensor<Self, Tensor<Self, Tensor<Self, A, B>, C>, D>,
                Tensor<Self, A, Tensor<Self, B, Tensor<Self, C, D>>>,
            >(&bottom, sample)
    }
}

impl<M: MonoidalCategory> MonoidalCategoryLaws for M {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{Coproduct, Either, Product};

    #[test]
    fn test_product_triangle_and_pentagon() {
        assert!(Product::triangle_equations::<i32, char>(((1, ()), 'b')));
        assert!(Product::pentagon_equations::<u8, u16, u32, u64>((((1, 2), 3), 4)));
    }

    #[test]
    fn test_coproduct_triangle_and_pentagon() {
        let left_unit = Either::Left(Either::Left(1));
        assert!(Coproduct::triangle_equations::<i32, char>(left_unit));
        assert!(Coproduct::triangle_equations::<i32, char>(Either::Right('b')));
        let sample = Either::Left(Either::Left(Either::Right(3)));
        assert!(Coproduct::pentagon_equations::<u8, u16, u32, u64>(sample));
    }

    #[test]
    fn test_unitor_round_trips() {
        assert!(Product::right_unitor_iso_law::<String>(("a".to_string(), ())));
        assert!(Product::left_unitor_section_law::<String>("a".to_string()));
        let tagged = Either::Right("a".to_string());
        assert!(Coproduct::left_unitor_iso_law::<String>(tagged));
        assert!(Coproduct::right_unitor_section_law::<String>("a".to_string()));
    }
}
