//! Category theory interfaces for composing pure computations
//!
//! This module provides the layered structure hierarchy
//! `Category → MonoidalCategory → BraidedMonoidalCategory →
//! SymmetricMonoidalCategory`, where each layer requires the operations of the
//! one below it. Objects are Rust types; morphisms are pure, total functions.

pub mod base;
pub mod bifunctor;
pub mod monoidal;
pub mod morphism;

pub use base::Category;
pub use bifunctor::Bifunctor;
pub use monoidal::{BraidedMonoidalCategory, MonoidalCategory, SymmetricMonoidalCategory, Tensor};
pub use morphism::Morphism;
