// Copyright 2025 Cowboy AI, LLC.

//! Checks every law in [`LawKind::all`] for both instances over a small
//! sample grid and prints the checker history as JSON.

use cim_monoidal::{
    BifunctorLaws, BraidedMonoidalCategoryLaws, CategoryLaws, Coproduct, Either, EitherTensor,
    LawCheckConfig, LawCheckResult, LawChecker, LawKind, LawResult, Morphism, MonoidalCategory,
    MonoidalCategoryLaws, PairTensor, Product, SymmetricMonoidalCategoryLaws, Void,
};

type Triple = (i32, &'static str, bool);
type Tagged = Either<Either<i32, &'static str>, bool>;

/// The morphisms fed to the laws that quantify over arrows
struct Arrows {
    inc: Morphism<i32, i32>,
    double: Morphism<i32, i32>,
    negate: Morphism<i32, i32>,
    len: Morphism<&'static str, usize>,
    even: Morphism<usize, bool>,
    not: Morphism<bool, bool>,
    to_u8: Morphism<bool, u8>,
    inner_tag: Morphism<Either<i32, &'static str>, bool>,
    outer_tag: Morphism<Tagged, bool>,
}

impl Arrows {
    fn new() -> Self {
        Self {
            inc: Morphism::new("inc", |x: i32| x.wrapping_add(1)),
            double: Morphism::new("double", |x: i32| x.wrapping_mul(2)),
            negate: Morphism::new("negate", |x: i32| x.wrapping_neg()),
            len: Morphism::new("len", |s: &'static str| s.len()),
            even: Morphism::new("even", |n: usize| n % 2 == 0),
            not: Morphism::new("not", |b: bool| !b),
            to_u8: Morphism::new("to_u8", |b: bool| u8::from(b)),
            inner_tag: Morphism::new("is_left", |e: Either<i32, &'static str>| e.is_left()),
            outer_tag: Morphism::new("is_left", |e: Tagged| e.is_left()),
        }
    }
}

fn check_product(
    checker: &mut LawChecker,
    law: LawKind,
    samples: &[Triple],
    m: &Arrows,
) -> LawResult<LawCheckResult> {
    macro_rules! run {
        ($predicate:expr) => {
            checker.check("Product", law, samples.iter().copied(), $predicate)
        };
    }

    match law {
        LawKind::LeftIdentity => {
            run!(|&(a, _, _)| Product::left_identity_law::<i32, i32>(&m.inc, a))
        }
        LawKind::RightIdentity => {
            run!(|&(a, _, _)| Product::right_identity_law::<i32, i32>(&m.inc, a))
        }
        LawKind::Associativity => run!(|&(a, _, _)| {
            Product::associativity_law::<i32, i32, i32, i32>(&m.negate, &m.double, &m.inc, a)
        }),
        LawKind::BimapIdentity => run!(|&(a, b, _)| {
            <PairTensor as BifunctorLaws<Product>>::bimap_identity_law::<i32, &str>((a, b))
        }),
        LawKind::BimapComposition => run!(|&(a, b, _)| {
            <PairTensor as BifunctorLaws<Product>>::bimap_composition_law::<
                i32,
                i32,
                i32,
                &str,
                usize,
                bool,
            >(&m.inc, &m.len, &m.double, &m.even, (a, b))
        }),
        LawKind::RightUnitorIso => {
            run!(|&(a, _, _)| Product::right_unitor_iso_law::<i32>((a, ())))
        }
        LawKind::RightUnitorSection => {
            run!(|&(a, _, _)| Product::right_unitor_section_law::<i32>(a))
        }
        LawKind::LeftUnitorIso => run!(|&(a, _, _)| Product::left_unitor_iso_law::<i32>(((), a))),
        LawKind::LeftUnitorSection => {
            run!(|&(a, _, _)| Product::left_unitor_section_law::<i32>(a))
        }
        LawKind::AssociatorIso => run!(|&(a, b, c)| {
            Product::associator_iso_law::<i32, &str, bool>(((a, b), c))
        }),
        LawKind::AssociatorInvIso => run!(|&(a, b, c)| {
            Product::associator_inv_iso_law::<i32, &str, bool>((a, (b, c)))
        }),
        LawKind::LeftUnitorNaturality => run!(|&(a, _, _)| {
            Product::left_unitor_naturality_law::<i32, i32>(&m.inc, ((), a))
        }),
        LawKind::RightUnitorNaturality => run!(|&(a, _, _)| {
            Product::right_unitor_naturality_law::<i32, i32>(&m.inc, (a, ()))
        }),
        LawKind::AssociatorNaturality => run!(|&(a, b, c)| {
            Product::associator_naturality_law::<i32, &str, bool, i32, usize, bool>(
                &m.inc,
                &m.len,
                &m.not,
                ((a, b), c),
            )
        }),
        LawKind::Triangle => run!(|&(a, b, _)| {
            Product::triangle_equations::<i32, &str>(((a, ()), b))
        }),
        LawKind::Pentagon => run!(|&(a, b, c)| {
            Product::pentagon_equations::<i32, &str, bool, i32>((((a, b), c), a))
        }),
        LawKind::HexagonLeft => run!(|&(a, b, c)| {
            Product::hexagon_equations_left::<i32, &str, bool>(((a, b), c))
        }),
        LawKind::HexagonRight => run!(|&(a, b, c)| {
            Product::hexagon_equations_right::<i32, &str, bool>((a, (b, c)))
        }),
        LawKind::BraidingNaturality => run!(|&(a, b, _)| {
            Product::braiding_naturality_law::<i32, i32, &str, usize>(&m.inc, &m.len, (a, b))
        }),
        LawKind::Involution => run!(|&(a, b, _)| Product::involution_law::<i32, &str>((a, b))),
    }
}

/// Replace the middle summand with the unit, keeping the other two cases
fn with_unit_middle(sample: Tagged) -> Either<Either<i32, Void>, bool> {
    match sample {
        Either::Left(Either::Left(a)) => Either::Left(Either::Left(a)),
        Either::Left(Either::Right(word)) => Either::Right(word.is_empty()),
        Either::Right(flag) => Either::Right(flag),
    }
}

fn check_coproduct(
    checker: &mut LawChecker,
    law: LawKind,
    samples: &[Tagged],
    m: &Arrows,
) -> LawResult<LawCheckResult> {
    macro_rules! run {
        ($predicate:expr) => {
            checker.check("Coproduct", law, samples.iter().copied(), $predicate)
        };
    }

    match law {
        LawKind::LeftIdentity => {
            run!(|&s| Coproduct::left_identity_law::<Tagged, bool>(&m.outer_tag, s))
        }
        LawKind::RightIdentity => {
            run!(|&s| Coproduct::right_identity_law::<Tagged, bool>(&m.outer_tag, s))
        }
        LawKind::Associativity => run!(|&s| {
            Coproduct::associativity_law::<Tagged, bool, bool, u8>(
                &m.to_u8,
                &m.not,
                &m.outer_tag,
                s,
            )
        }),
        LawKind::BimapIdentity => run!(|&s| {
            <EitherTensor as BifunctorLaws<Coproduct>>::bimap_identity_law::<
                Either<i32, &str>,
                bool,
            >(s)
        }),
        LawKind::BimapComposition => run!(|&s| {
            <EitherTensor as BifunctorLaws<Coproduct>>::bimap_composition_law::<
                Either<i32, &str>,
                bool,
                bool,
                bool,
                bool,
                u8,
            >(&m.inner_tag, &m.not, &m.not, &m.to_u8, s)
        }),
        LawKind::RightUnitorIso => {
            run!(|&s| Coproduct::right_unitor_iso_law::<Tagged>(Either::Left(s)))
        }
        LawKind::RightUnitorSection => run!(|&s| Coproduct::right_unitor_section_law::<Tagged>(s)),
        LawKind::LeftUnitorIso => {
            run!(|&s| Coproduct::left_unitor_iso_law::<Tagged>(Either::Right(s)))
        }
        LawKind::LeftUnitorSection => run!(|&s| Coproduct::left_unitor_section_law::<Tagged>(s)),
        LawKind::AssociatorIso => {
            run!(|&s| Coproduct::associator_iso_law::<i32, &str, bool>(s))
        }
        LawKind::AssociatorInvIso => run!(|&s| {
            let reassociated = Coproduct::associator::<i32, &str, bool>().apply(s);
            Coproduct::associator_inv_iso_law::<i32, &str, bool>(reassociated)
        }),
        LawKind::LeftUnitorNaturality => run!(|&s| {
            Coproduct::left_unitor_naturality_law::<Tagged, bool>(&m.outer_tag, Either::Right(s))
        }),
        LawKind::RightUnitorNaturality => run!(|&s| {
            Coproduct::right_unitor_naturality_law::<Tagged, bool>(&m.outer_tag, Either::Left(s))
        }),
        LawKind::AssociatorNaturality => run!(|&s| {
            Coproduct::associator_naturality_law::<i32, &str, bool, i32, usize, bool>(
                &m.inc, &m.len, &m.not, s,
            )
        }),
        LawKind::Triangle => {
            run!(|&s| Coproduct::triangle_equations::<i32, bool>(with_unit_middle(s)))
        }
        LawKind::Pentagon => run!(|&s| {
            Coproduct::pentagon_equations::<i32, &str, bool, i32>(Either::Left(s))
        }),
        LawKind::HexagonLeft => {
            run!(|&s| Coproduct::hexagon_equations_left::<i32, &str, bool>(s))
        }
        LawKind::HexagonRight => run!(|&s| {
            let reassociated = Coproduct::associator::<i32, &str, bool>().apply(s);
            Coproduct::hexagon_equations_right::<i32, &str, bool>(reassociated)
        }),
        LawKind::BraidingNaturality => run!(|&s| {
            Coproduct::braiding_naturality_law::<Either<i32, &str>, bool, bool, u8>(
                &m.inner_tag,
                &m.to_u8,
                s,
            )
        }),
        LawKind::Involution => {
            run!(|&s| Coproduct::involution_law::<Either<i32, &str>, bool>(s))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = LawCheckConfig::from_json(r#"{"sample_count": 27}"#)?;
    let mut checker = LawChecker::new(config)?;
    let arrows = Arrows::new();

    let ints = [-1i32, 0, 7];
    let words = ["", "x", "monoid"];
    let flags = [true, false, true];
    let triples: Vec<Triple> = ints
        .into_iter()
        .flat_map(|a| {
            words
                .into_iter()
                .flat_map(move |b| flags.into_iter().map(move |c| (a, b, c)))
        })
        .collect();
    let tagged: Vec<Tagged> = triples
        .iter()
        .enumerate()
        .map(|(i, &(a, b, c))| match i % 3 {
            0 => Either::Left(Either::Left(a)),
            1 => Either::Left(Either::Right(b)),
            _ => Either::Right(c),
        })
        .collect();

    println!("== Product: (A, B) with unit ()");
    for &law in LawKind::all() {
        check_product(&mut checker, law, &triples, &arrows)?;
    }

    println!("== Coproduct: Either<A, B> with unit Void");
    for &law in LawKind::all() {
        check_coproduct(&mut checker, law, &tagged, &arrows)?;
    }

    for result in checker.history() {
        println!(
            "{:<10} {:<24} {:>3} samples  {}",
            result.instance,
            result.law,
            result.samples_checked,
            if result.satisfied { "ok" } else { "VIOLATED" }
        );
    }
    println!("{}", checker.report_json()?);

    anyhow::ensure!(
        checker.history().len() == 2 * LawKind::all().len(),
        "every law runs once per instance"
    );
    anyhow::ensure!(checker.all_satisfied(), "coherence law violated");
    Ok(())
}
