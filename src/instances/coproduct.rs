// Copyright 2025 Cowboy AI, LLC.

//! Cocartesian monoidal structure: tensor is [`Either`], unit is [`Void`]
//!
//! Eliminating the unit never has to handle a real value: `A ⊕ Void` only
//! ever holds a `Left`. The `Right(void)` arms below are discharged with
//! [`Void::absurd`] so the impossible case stays visible in the code.

use crate::category::{
    Bifunctor, BraidedMonoidalCategory, Category, Morphism, MonoidalCategory,
    SymmetricMonoidalCategory,
};

use super::either::{Either, Void};

/// Rust types and functions, with `Either<A, B>` as tensor and `Void` as unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coproduct;

/// The tagged-choice bifunctor `Either<A, B>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EitherTensor;

impl Category for Coproduct {
    type Hom<A: 'static, B: 'static> = Morphism<A, B>;

    fn identity<A: 'static>() -> Morphism<A, A> {
        Morphism::identity()
    }

    fn compose<A: 'static, B: 'static, C: 'static>(
        f: &Morphism<B, C>,
        g: &Morphism<A, B>,
    ) -> Morphism<A, C> {
        f.compose(g)
    }

    fn apply<A: 'static, B: 'static>(f: &Morphism<A, B>, source: A) -> B {
        f.apply(source)
    }
}

impl Bifunctor<Coproduct> for EitherTensor {
    type Obj<A: 'static, B: 'static> = Either<A, B>;

    fn bimap<A: 'static, B: 'static, X: 'static, Y: 'static>(
        f: &Morphism<A, B>,
        g: &Morphism<X, Y>,
    ) -> Morphism<Either<A, X>, Either<B, Y>> {
        let description = format!("({} + {})", f.description(), g.description());
        let (f, g) = (f.clone(), g.clone());
        Morphism::new(description, move |value: Either<A, X>| match value {
            Either::Left(a) => Either::Left(f.apply(a)),
            Either::Right(x) => Either::Right(g.apply(x)),
        })
    }
}

impl MonoidalCategory for Coproduct {
    type Unit = Void;
    type TensorProduct = EitherTensor;

    fn right_unitor<A: 'static>() -> Morphism<Either<A, Void>, A> {
        Morphism::new("ρ", |value: Either<A, Void>| match value {
            Either::Left(a) => a,
            Either::Right(void) => void.absurd(),
        })
    }

    fn right_unitor_inv<A: 'static>() -> Morphism<A, Either<A, Void>> {
        Morphism::new("ρ⁻¹", Either::Left)
    }

    fn left_unitor<A: 'static>() -> Morphism<Either<Void, A>, A> {
        Morphism::new("λ", |value: Either<Void, A>| match value {
            Either::Left(void) => void.absurd(),
            Either::Right(a) => a,
        })
    }

    fn left_unitor_inv<A: 'static>() -> Morphism<A, Either<Void, A>> {
        Morphism::new("λ⁻¹", Either::Right)
    }

    fn associator<A: 'static, B: 'static, C: 'static>(
    ) -> Morphism<Either<Either<A, B>, C>, Either<A, Either<B, C>>> {
        Morphism::new("α", |value: Either<Either<A, B>, C>| match value {
            Either::Left(Either::Left(a)) => Either::Left(a),
            Either::Left(Either::Right(b)) => Either::Right(Either::Left(b)),
            Either::Right(c) => Either::Right(Either::Right(c)),
        })
    }

    fn associator_inv<A: 'static, B: 'static, C: 'static>(
    ) -> Morphism<Either<A, Either<B, C>>, Either<Either<A, B>, C>> {
        Morphism::new("α⁻¹", |value: Either<A, Either<B, C>>| match value {
            Either::Left(a) => Either::Left(Either::Left(a)),
            Either::Right(Either::Left(b)) => Either::Left(Either::Right(b)),
            Either::Right(Either::Right(c)) => Either::Right(c),
        })
    }
}

impl BraidedMonoidalCategory for Coproduct {
    fn braiding<A: 'static, B: 'static>() -> Morphism<Either<A, B>, Either<B, A>> {
        Morphism::new("σ", Either::swap)
    }
}

impl SymmetricMonoidalCategory for Coproduct {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_associator_retags_by_case() {
        let alpha = Coproduct::associator::<i32, String, bool>();
        assert_eq!(alpha.apply(Either::Left(Either::Left(1))), Either::Left(1));
        assert_eq!(
            alpha.apply(Either::Left(Either::Right("x".to_string()))),
            Either::Right(Either::Left("x".to_string()))
        );
        assert_eq!(
            alpha.apply(Either::Right(true)),
            Either::Right(Either::Right(true))
        );
    }

    #[test]
    fn test_unitors_unwrap_inhabited_side() {
        assert_eq!(Coproduct::right_unitor::<u8>().apply(Either::Left(9)), 9);
        assert_eq!(Coproduct::left_unitor::<u8>().apply(Either::Right(9)), 9);
        assert_eq!(Coproduct::right_unitor_inv::<u8>().apply(9), Either::Left(9));
        assert_eq!(Coproduct::left_unitor_inv::<u8>().apply(9), Either::Right(9));
    }

    #[test]
    fn test_braiding_swaps_tags() {
        let sigma = Coproduct::braiding::<i32, String>();
        assert_eq!(sigma.apply(Either::Left(1)), Either::Right(1));
    }

    #[test]
    fn test_bimap_touches_only_the_present_side() {
        let inc = Morphism::new("inc", |x: i32| x + 1);
        let len = Morphism::new("len", |s: String| s.len());
        let both = Coproduct::bimap::<i32, i32, String, usize>(&inc, &len);

        assert_eq!(both.apply(Either::Left(1)), Either::Left(2));
        assert_eq!(both.apply(Either::Right("ab".to_string())), Either::Right(2));
        assert_eq!(both.description(), "(inc + len)");
    }
}
