// Copyright (c) 2025 - Cowboy AI, LLC.

//! Sampled coherence laws for the cartesian (pair / unit) structure.
//!
//! Passing samples are evidence that the laws hold, not a proof.

use cim_monoidal::{
    BifunctorLaws, BraidedMonoidalCategory, BraidedMonoidalCategoryLaws, Morphism,
    MonoidalCategory, MonoidalCategoryLaws, PairTensor, Product, SymmetricMonoidalCategoryLaws,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use test_case::test_case;

fn shift(k: i64) -> Morphism<i64, i64> {
    Morphism::new(format!("+{k}"), move |x: i64| x.wrapping_add(k))
}

fn repeat(n: usize) -> Morphism<String, String> {
    Morphism::new(format!("repeat{n}"), move |s: String| s.repeat(n))
}

proptest! {
    #[test]
    fn unitors_are_mutually_inverse(a in any::<i32>()) {
        prop_assert!(Product::right_unitor_iso_law::<i32>((a, ())));
        prop_assert!(Product::right_unitor_section_law::<i32>(a));
        prop_assert!(Product::left_unitor_iso_law::<i32>(((), a)));
        prop_assert!(Product::left_unitor_section_law::<i32>(a));
    }

    #[test]
    fn associator_is_an_isomorphism(a in any::<i32>(), b in ".{0,8}", c in any::<bool>()) {
        prop_assert!(Product::associator_iso_law::<i32, String, bool>(((a, b.clone()), c)));
        prop_assert!(Product::associator_inv_iso_law::<i32, String, bool>((a, (b, c))));
    }

    #[test]
    fn triangle_holds(a in any::<i64>(), b in ".{0,8}") {
        prop_assert!(Product::triangle_equations::<i64, String>(((a, ()), b)));
    }

    #[test]
    fn pentagon_holds(a in any::<u8>(), b in any::<i16>(), c in ".{0,4}", d in any::<bool>()) {
        prop_assert!(Product::pentagon_equations::<u8, i16, String, bool>((((a, b), c), d)));
    }

    #[test]
    fn hexagons_hold(a in any::<i32>(), b in any::<char>(), c in any::<bool>()) {
        prop_assert!(Product::hexagon_equations_left::<i32, char, bool>(((a, b), c)));
        prop_assert!(Product::hexagon_equations_right::<i32, char, bool>((a, (b, c))));
    }

    #[test]
    fn braiding_is_an_involution(a in any::<i32>(), b in ".{0,8}") {
        prop_assert!(Product::involution_law::<i32, String>((a, b)));
    }

    #[test]
    fn structural_maps_are_natural(
        k in any::<i64>(),
        n in 0usize..4,
        a in any::<i64>(),
        s in "[a-z]{0,4}",
    ) {
        prop_assert!(Product::left_unitor_naturality_law::<i64, i64>(&shift(k), ((), a)));
        prop_assert!(Product::right_unitor_naturality_law::<String, String>(
            &repeat(n),
            (s.clone(), ()),
        ));
        prop_assert!(Product::braiding_naturality_law::<i64, i64, String, String>(
            &shift(k),
            &repeat(n),
            (a, s.clone()),
        ));
        prop_assert!(Product::associator_naturality_law::<i64, String, i64, i64, String, i64>(
            &shift(k),
            &repeat(n),
            &shift(a),
            ((a, s), k),
        ));
    }

    #[test]
    fn pair_bimap_is_functorial(
        j in any::<i64>(),
        k in any::<i64>(),
        n in 0usize..3,
        m in 0usize..3,
        a in any::<i64>(),
        s in "[a-z]{0,3}",
    ) {
        prop_assert!(<PairTensor as BifunctorLaws<Product>>::bimap_identity_law::<i64, String>((
            a,
            s.clone(),
        )));
        prop_assert!(<PairTensor as BifunctorLaws<Product>>::bimap_composition_law::<
            i64,
            i64,
            i64,
            String,
            String,
            String,
        >(
            &shift(j),
            &repeat(n),
            &shift(k),
            &repeat(m),
            (a, s),
        ));
    }
}

#[test]
fn associator_renests_concrete_triple() {
    let nested = ((1, "x"), true);
    let alpha = Product::associator::<i32, &str, bool>();
    let alpha_inv = Product::associator_inv::<i32, &str, bool>();

    let renested = alpha.apply(nested);
    assert_eq!(renested, (1, ("x", true)));
    assert_eq!(alpha_inv.apply(renested), nested);
}

#[test_case(1, 'a' ; "ascii")]
#[test_case(-7, 'λ' ; "unicode")]
fn braiding_swaps_components(a: i32, b: char) {
    assert_eq!(Product::braiding::<i32, char>().apply((a, b)), (b, a));
}

#[test]
fn structural_morphisms_are_described() {
    assert_eq!(Product::associator::<u8, u8, u8>().description(), "α");
    let lifted = Product::bimap::<(u8, ()), u8, u8, u8>(
        &Product::right_unitor::<u8>(),
        &Morphism::identity(),
    );
    assert_eq!(lifted.description(), "(ρ × id)");
}
