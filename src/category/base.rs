// Copyright 2025 Cowboy AI, LLC.

//! The minimal algebra of composable morphisms

/// A category whose objects are Rust types
///
/// Implementors choose the representation of morphisms through [`Category::Hom`].
/// Composition must be associative and [`Category::identity`] must be a unit for
/// it on both sides; [`crate::laws::CategoryLaws`] checks both on samples.
pub trait Category: Sized {
    /// Morphisms `A -> B`
    type Hom<A: 'static, B: 'static>: Clone;

    /// The morphism that maps any value to itself
    fn identity<A: 'static>() -> Self::Hom<A, A>;

    /// `f ∘ g`: apply `g`, then `f`
    fn compose<A: 'static, B: 'static, C: 'static>(
        f: &Self::Hom<B, C>,
        g: &Self::Hom<A, B>,
    ) -> Self::Hom<A, C>;

    /// Evaluate a morphism on a concrete value
    ///
    /// Extensional equality of morphisms is undecidable in general; the law
    /// suites compare morphisms by running them on sample values through this.
    fn apply<A: 'static, B: 'static>(f: &Self::Hom<A, B>, source: A) -> B;
}
