// Copyright 2025 Cowboy AI, LLC.

//! Morphisms between Rust types
//!
//! A morphism is a pure, total function from one object (type) to another.
//! Morphisms are shared behind an `Arc` so that composites and tensors can
//! capture them cheaply, and they carry a description that shows how they
//! were built (`"α ∘ (σ ⊗ id)"`). `Display` prints the description and
//! `Debug` wraps it, so a failing composite can be named in test output.

use std::fmt;
use std::sync::Arc;

type MorphismFn<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

/// A structure-preserving mapping `A -> B`
pub struct Morphism<A, B> {
    run: MorphismFn<A, B>,
    description: String,
}

impl<A, B> Morphism<A, B> {
    /// Create a morphism from a description and a pure function
    ///
    /// # Arguments
    /// * `description` - Human-readable name used in composites and logs
    /// * `f` - The mapping rule; must be total and side-effect free
    pub fn new<F>(description: impl Into<String>, f: F) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Self {
            run: Arc::new(f),
            description: description.into(),
        }
    }

    /// Apply the morphism to a value
    pub fn apply(&self, source: A) -> B {
        (self.run)(source)
    }

    /// Get a human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<A: 'static, B: 'static> Morphism<A, B> {
    /// Compose `self ∘ g`: apply `g`, then `self`
    pub fn compose<Z: 'static>(&self, g: &Morphism<Z, A>) -> Morphism<Z, B> {
        let (f, g_run) = (Arc::clone(&self.run), Arc::clone(&g.run));
        Morphism {
            run: Arc::new(move |z: Z| f(g_run(z))),
            description: format!("{} ∘ {}", self.description, g.description),
        }
    }

    /// Diagrammatic composition: apply `self`, then `next`
    pub fn and_then<C: 'static>(&self, next: &Morphism<B, C>) -> Morphism<A, C> {
        next.compose(self)
    }
}

impl<A: 'static> Morphism<A, A> {
    /// The identity morphism, mapping every value to itself
    pub fn identity() -> Self {
        Self::new("id", |a: A| a)
    }
}

impl<A, B> Clone for Morphism<A, B> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
            description: self.description.clone(),
        }
    }
}

impl<A, B> fmt::Debug for Morphism<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Morphism").field(&self.description).finish()
    }
}

impl<A, B> fmt::Display for Morphism<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
