// Copyright (c) 2025 - Cowboy AI, LLC.

//! Drives the law checker over generated samples, for the lawful instances and
//! for a deliberately broken one whose associator leaks a counter.

use cim_monoidal::{
    Bifunctor, BraidedMonoidalCategoryLaws, Category, Coproduct, Either, LawCheckConfig,
    LawChecker, LawError, LawKind, Morphism, MonoidalCategory, MonoidalCategoryLaws, Product,
    SymmetricMonoidalCategoryLaws,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;

type Quad = Either<Either<Either<i32, u8>, bool>, char>;

/// Pairs that count how often they were re-associated
#[derive(Debug, Clone, PartialEq)]
struct Tagged<A, B> {
    left: A,
    right: B,
    depth: u8,
}

struct Skewed;
struct TaggedTensor;

impl Category for Skewed {
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

impl Bifunctor<Skewed> for TaggedTensor {
    type Obj<A: 'static, B: 'static> = Tagged<A, B>;

    fn bimap<A: 'static, B: 'static, X: 'static, Y: 'static>(
        f: &Morphism<A, B>,
        g: &Morphism<X, Y>,
    ) -> Morphism<Tagged<A, X>, Tagged<B, Y>> {
        let (f, g) = (f.clone(), g.clone());
        Morphism::new("tagged", move |t: Tagged<A, X>| Tagged {
            left: f.apply(t.left),
            right: g.apply(t.right),
            depth: t.depth,
        })
    }
}

impl MonoidalCategory for Skewed {
    type Unit = ();
    type TensorProduct = TaggedTensor;

    fn right_unitor<A: 'static>() -> Morphism<Tagged<A, ()>, A> {
        Morphism::new("ρ", |t: Tagged<A, ()>| t.left)
    }

    fn right_unitor_inv<A: 'static>() -> Morphism<A, Tagged<A, ()>> {
        Morphism::new("ρ⁻¹", |a: A| Tagged {
            left: a,
            right: (),
            depth: 0,
        })
    }

    fn left_unitor<A: 'static>() -> Morphism<Tagged<(), A>, A> {
        Morphism::new("λ", |t: Tagged<(), A>| t.right)
    }

    fn left_unitor_inv<A: 'static>() -> Morphism<A, Tagged<(), A>> {
        Morphism::new("λ⁻¹", |a: A| Tagged {
            left: (),
            right: a,
            depth: 0,
        })
    }

    fn associator<A: 'static, B: 'static, C: 'static>(
    ) -> Morphism<Tagged<Tagged<A, B>, C>, Tagged<A, Tagged<B, C>>> {
        Morphism::new("α", |t: Tagged<Tagged<A, B>, C>| Tagged {
            left: t.left.left,
            right: Tagged {
                left: t.left.right,
                right: t.right,
                depth: t.left.depth,
            },
            depth: t.depth.wrapping_add(1),
        })
    }

    fn associator_inv<A: 'static, B: 'static, C: 'static>(
    ) -> Morphism<Tagged<A, Tagged<B, C>>, Tagged<Tagged<A, B>, C>> {
        Morphism::new("α⁻¹", |t: Tagged<A, Tagged<B, C>>| Tagged {
            left: Tagged {
                left: t.left,
                right: t.right.left,
                depth: t.right.depth,
            },
            right: t.right.right,
            depth: t.depth,
        })
    }
}

fn generate<S: Strategy>(strategy: S, count: usize) -> Vec<S::Value> {
    let mut runner = TestRunner::deterministic();
    (0..count)
        .map(|_| {
            strategy
                .new_tree(&mut runner)
                .expect("strategy generates values")
                .current()
        })
        .collect()
}

#[test]
fn lawful_instances_pass_every_coherence_check() {
    let config = LawCheckConfig::default().with_sample_count(64);
    let mut checker = LawChecker::new(config).expect("valid config");

    let triples = generate((any::<i32>(), any::<u8>(), any::<bool>()), 64);
    let quads = generate((any::<i32>(), any::<u8>(), any::<bool>(), any::<char>()), 64);

    checker
        .check("Product", LawKind::Triangle, triples.clone(), |&(a, _, c)| {
            Product::triangle_equations::<i32, bool>(((a, ()), c))
        })
        .unwrap();
    checker
        .check("Product", LawKind::Pentagon, quads, |&(a, b, c, d)| {
            Product::pentagon_equations::<i32, u8, bool, char>((((a, b), c), d))
        })
        .unwrap();
    checker
        .check("Product", LawKind::HexagonLeft, triples.clone(), |&(a, b, c)| {
            Product::hexagon_equations_left::<i32, u8, bool>(((a, b), c))
        })
        .unwrap();
    checker
        .check("Product", LawKind::HexagonRight, triples.clone(), |&(a, b, c)| {
            Product::hexagon_equations_right::<i32, u8, bool>((a, (b, c)))
        })
        .unwrap();
    checker
        .check("Product", LawKind::Involution, triples, |&(a, b, _)| {
            Product::involution_law::<i32, u8>((a, b))
        })
        .unwrap();

    let tagged = generate(
        prop_oneof![
            any::<i32>().prop_map(|a| Quad::Left(Either::Left(Either::Left(a)))),
            any::<u8>().prop_map(|b| Quad::Left(Either::Left(Either::Right(b)))),
            any::<bool>().prop_map(|c| Quad::Left(Either::Right(c))),
            any::<char>().prop_map(Quad::Right)
        ],
        64,
    );
    checker
        .check("Coproduct", LawKind::Pentagon, tagged, |sample| {
            Coproduct::pentagon_equations::<i32, u8, bool, char>(sample.clone())
        })
        .unwrap();

    assert!(checker.all_satisfied());
    assert_eq!(checker.history().len(), 6);
    assert_eq!(checker.results_for("Product").len(), 5);
    assert!(checker
        .history()
        .iter()
        .all(|result| result.samples_checked == 64));
}

#[test]
fn leaking_associator_is_caught() {
    let mut checker = LawChecker::default();
    let samples = generate((any::<i32>(), any::<u8>(), any::<bool>(), 0u8..4), 16);

    let result = checker
        .check("Skewed", LawKind::AssociatorIso, samples, |&(a, b, c, depth)| {
            Skewed::associator_iso_law::<i32, u8, bool>(Tagged {
                left: Tagged {
                    left: a,
                    right: b,
                    depth: 0,
                },
                right: c,
                depth,
            })
        })
        .unwrap();

    assert!(!result.satisfied);
    assert_eq!(result.samples_checked, 1);
    assert_eq!(result.violations[0].sample_index, 0);
    assert!(result.violations[0]
        .sample
        .as_deref()
        .is_some_and(|s| s.starts_with('(')));

    let err = result.into_result().unwrap_err();
    assert!(err.is_violation());
    assert!(matches!(
        err,
        LawError::Violation {
            law: LawKind::AssociatorIso,
            ..
        }
    ));
}

#[test]
fn leaking_associator_breaks_the_triangle_on_every_sample() {
    let config = LawCheckConfig::default().exhaustive();
    let mut checker = LawChecker::new(config).unwrap();
    let samples = generate((any::<i64>(), ".{0,4}"), 20);

    let result = checker
        .check("Skewed", LawKind::Triangle, samples, |(a, b)| {
            Skewed::triangle_equations::<i64, String>(Tagged {
                left: Tagged {
                    left: *a,
                    right: (),
                    depth: 0,
                },
                right: b.clone(),
                depth: 0,
            })
        })
        .unwrap();

    assert_eq!(result.samples_checked, 20);
    assert_eq!(result.violation_count, 20);
    assert_eq!(result.first_violation_index, Some(0));
    assert_eq!(result.violations.len(), 8);
    assert!(!checker.all_satisfied());
}

#[test]
fn unitors_survive_when_only_the_associator_is_wrong() {
    let mut checker = LawChecker::default();
    let samples = generate(any::<i32>(), 32);

    let result = checker
        .check("Skewed", LawKind::RightUnitorSection, samples, |&a| {
            Skewed::right_unitor_section_law::<i32>(a)
        })
        .unwrap();
    assert!(result.satisfied);
}

#[test]
fn history_serializes_for_reporting() {
    let mut checker = LawChecker::default();
    checker
        .check("Coproduct", LawKind::Involution, generate(any::<i32>(), 8), |&a| {
            Coproduct::involution_law::<i32, bool>(Either::Left(a))
        })
        .unwrap();

    let json = checker.report_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["law"], "involution");
    assert_eq!(parsed[0]["instance"], "Coproduct");
    assert_eq!(parsed[0]["satisfied"], true);
}
