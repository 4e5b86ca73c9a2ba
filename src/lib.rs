//! # CIM Monoidal
//!
//! Monoidal category interfaces for the Composable Information Machine, with
//! sampled checking of their coherence laws.
//!
//! This crate provides:
//! - **Category**: identity and composition of pure morphisms
//! - **Bifunctor**: the tensor product acting on pairs of morphisms
//! - **MonoidalCategory**: tensor, unit, unitors and associator
//! - **Braided / Symmetric**: a natural swap of tensor components
//! - **Instances**: `Product` (pairs and `()`) and `Coproduct` (`Either` and `Void`)
//! - **Laws**: triangle, pentagon, hexagons, involution, naturality and
//!   inverse laws, plus a [`LawChecker`] that runs them over sample streams
//!
//! ## Design Principles
//!
//! 1. **Layered Structure**: each trait extends the one below it
//! 2. **Fixed Tensor per Instance**: an instance chooses tensor and unit once
//! 3. **Sampled Equality**: laws compare results on concrete values; a pass is
//!    evidence, a failure is a counterexample
//! 4. **Violations Are Data**: a failing law is reported, never panicked on

#![warn(missing_docs)]

pub mod category;
mod config;
mod errors;
pub mod instances;
pub mod laws;

pub use category::{
    Bifunctor, BraidedMonoidalCategory, Category, Morphism, MonoidalCategory,
    SymmetricMonoidalCategory, Tensor,
};
pub use config::LawCheckConfig;
pub use errors::{LawError, LawResult};
pub use instances::{Coproduct, Either, EitherTensor, PairTensor, Product, Void};
pub use laws::{
    BifunctorLaws, BraidedMonoidalCategoryLaws, CategoryLaws, LawCheckResult, LawChecker,
    LawKind, LawViolation, MonoidalCategoryLaws, Structure, SymmetricMonoidalCategoryLaws,
};
