// Copyright 2025 Cowboy AI, LLC.

//! Identity and associativity for categories, functor laws for bifunctors

use crate::category::{Bifunctor, Category};

/// Category laws, checked by running both sides on a sample
pub trait CategoryLaws: Category {
    /// `id ∘ f == f`
    fn left_identity_law<A: 'static, B: 'static>(f: &Self::Hom<A, B>, sample: A) -> bool
    where
        A: Clone,
        B: PartialEq,
    {
        let composed = Self::compose::<A, B, B>(&Self::identity::<B>(), f);
        Self::apply::<A, B>(&composed, sample.clone()) == Self::apply::<A, B>(f, sample)
    }

    /// `f ∘ id == f`
    fn right_identity_law<A: 'static, B: 'static>(f: &Self::Hom<A, B>, sample: A) -> bool
    where
        A: Clone,
        B: PartialEq,
    {
        let composed = Self::compose::<A, A, B>(f, &Self::identity::<A>());
        Self::apply::<A, B>(&composed, sample.clone()) == Self::apply::<A, B>(f, sample)
    }

    /// `(f ∘ g) ∘ h == f ∘ (g ∘ h)`
    fn associativity_law<A: 'static, B: 'static, C: 'static, D: 'static>(
        f: &Self::Hom<C, D>,
        g: &Self::Hom<B, C>,
        h: &Self::Hom<A, B>,
        sample: A,
    ) -> bool
    where
        A: Clone,
        D: PartialEq,
    {
        let left = Self::compose::<A, B, D>(&Self::compose::<B, C, D>(f, g), h);
        let right = Self::compose::<A, C, D>(f, &Self::compose::<A, B, C>(g, h));
        Self::apply::<A, D>(&left, sample.clone()) == Self::apply::<A, D>(&right, sample)
    }
}

impl<C: Category> CategoryLaws for C {}

/// Functor laws for a bifunctor over category `C`
pub trait BifunctorLaws<C: Category>: Bifunctor<C> {
    /// `bimap(id, id) == id`
    fn bimap_identity_law<A: 'static, B: 'static>(sample: Self::Obj<A, B>) -> bool
    where
        Self::Obj<A, B>: Clone + PartialEq,
    {
        let lifted =
            <Self as Bifunctor<C>>::bimap::<A, A, B, B>(&C::identity::<A>(), &C::identity::<B>());
        C::apply::<Self::Obj<A, B>, Self::Obj<A, B>>(&lifted, sample.clone()) == sample
    }

    /// `bimap(f2, g2) ∘ bimap(f1, g1) == bimap(f2 ∘ f1, g2 ∘ g1)`
    fn bimap_composition_law<A, B, P, X, Y, Q>(
        f1: &C::Hom<A, B>,
        g1: &C::Hom<X, Y>,
        f2: &C::Hom<B, P>,
        g2: &C::Hom<Y, Q>,
        sample: Self::Obj<A, X>,
    ) -> bool
    where
        A: 'static,
        B: 'static,
        P: 'static,
        X: 'static,
        Y: 'static,
        Q: 'static,
        Self::Obj<A, X>: Clone,
        Self::Obj<P, Q>: PartialEq,
    {
        let stepwise = C::compose::<Self::Obj<A, X>, Self::Obj<B, Y>, Self::Obj<P, Q>>(
            &<Self as Bifunctor<C>>::bimap::<B, P, Y, Q>(f2, g2),
            &<Self as Bifunctor<C>>::bimap::<A, B, X, Y>(f1, g1),
        );
        let fused = <Self as Bifunctor<C>>::bimap::<A, P, X, Q>(
            &C::compose::<A, B, P>(f2, f1),
            &C::compose::<X, Y, Q>(g2, g1),
        );
        C::apply::<Self::Obj<A, X>, Self::Obj<P, Q>>(&stepwise, sample.clone())
            == C::apply::<Self::Obj<A, X>, Self::Obj<P, Q>>(&fused, sample)
    }
}

impl<C: Category, F: Bifunctor<C>> BifunctorLaws<C> for F {}
