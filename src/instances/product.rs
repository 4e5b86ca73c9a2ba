// Copyright 2025 Cowboy AI, LLC.

//! Cartesian monoidal structure: tensor is the ordered pair, unit is `()`

use crate::category::{
    Bifunctor, BraidedMonoidalCategory, Category, Morphism, MonoidalCategory,
    SymmetricMonoidalCategory,
};

/// Rust types and functions, with `(A, B)` as tensor and `()` as unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Product;

/// The pairing bifunctor `(A, B)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairTensor;

impl Category for Product {
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

impl Bifunctor<Product> for PairTensor {
    type Obj<A: 'static, B: 'static> = (A, B);

    fn bimap<A: 'static, B: 'static, X: 'static, Y: 'static>(
        f: &Morphism<A, B>,
        g: &Morphism<X, Y>,
    ) -> Morphism<(A, X), (B, Y)> {
        let description = format!("({} × {})", f.description(), g.description());
        let (f, g) = (f.clone(), g.clone());
        Morphism::new(description, move |(a, x): (A, X)| (f.apply(a), g.apply(x)))
    }
}

impl MonoidalCategory for Product {
    type Unit = ();
    type TensorProduct = PairTensor;

    fn right_unitor<A: 'static>() -> Morphism<(A, ()), A> {
        Morphism::new("ρ", |(a, ()): (A, ())| a)
    }

    fn right_unitor_inv<A: 'static>() -> Morphism<A, (A, ())> {
        Morphism::new("ρ⁻¹", |a: A| (a, ()))
    }

    fn left_unitor<A: 'static>() -> Morphism<((), A), A> {
        Morphism::new("λ", |((), a): ((), A)| a)
    }

    fn left_unitor_inv<A: 'static>() -> Morphism<A, ((), A)> {
        Morphism::new("λ⁻¹", |a: A| ((), a))
    }

    fn associator<A: 'static, B: 'static, C: 'static>() -> Morphism<((A, B), C), (A, (B, C))> {
        Morphism::new("α", |((a, b), c): ((A, B), C)| (a, (b, c)))
    }

    fn associator_inv<A: 'static, B: 'static, C: 'static>() -> Morphism<(A, (B, C)), ((A, B), C)>
    {
        Morphism::new("α⁻¹", |(a, (b, c)): (A, (B, C))| ((a, b), c))
    }
}

impl BraidedMonoidalCategory for Product {
    fn braiding<A: 'static, B: 'static>() -> Morphism<(A, B), (B, A)> {
        Morphism::new("σ", |(a, b): (A, B)| (b, a))
    }
}

impl SymmetricMonoidalCategory for Product {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_associator_renests_triple() {
        let alpha = Product::associator::<i32, &str, bool>();
        assert_eq!(alpha.apply(((1, "x"), true)), (1, ("x", true)));

        let alpha_inv = Product::associator_inv::<i32, &str, bool>();
        assert_eq!(alpha_inv.apply((1, ("x", true))), ((1, "x"), true));
    }

    #[test]
    fn test_unitors_project_away_unit() {
        assert_eq!(Product::right_unitor::<u8>().apply((4, ())), 4);
        assert_eq!(Product::left_unitor::<u8>().apply(((), 4)), 4);
        assert_eq!(Product::right_unitor_inv::<u8>().apply(4), (4, ()));
        assert_eq!(Product::left_unitor_inv::<u8>().apply(4), ((), 4));
    }

    #[test]
    fn test_bimap_acts_componentwise() {
        let inc = Morphism::new("inc", |x: i32| x + 1);
        let len = Morphism::new("len", |s: String| s.len());

        let both = Product::bimap::<i32, i32, String, usize>(&inc, &len);
        assert_eq!(both.apply((1, "abc".to_string())), (2, 3));
        assert_eq!(both.description(), "(inc × len)");
    }

    #[test]
    fn test_braiding_swaps() {
        let sigma = Product::braiding::<i32, char>();
        assert_eq!(sigma.apply((1, 'a')), ('a', 1));
    }
}
