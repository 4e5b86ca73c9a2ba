//! Coherence laws and the sampled checker that drives them
//!
//! Laws are provided methods on extension traits, blanket-implemented for
//! every structure of the matching layer, so any instance gets them for free:
//!
//! ```rust
//! use cim_monoidal::instances::Product;
//! use cim_monoidal::laws::MonoidalCategoryLaws;
//!
//! assert!(Product::pentagon_equations::<u8, u8, u8, u8>((((1, 2), 3), 4)));
//! ```
//!
//! Each law compares two derivations of a value on concrete samples. Sampling
//! can only disprove a law by finding a counterexample; it never proves one
//! for all inputs.

pub mod braided_laws;
pub mod category_laws;
pub mod checker;
pub mod monoidal_laws;

pub use braided_laws::{BraidedMonoidalCategoryLaws, SymmetricMonoidalCategoryLaws};
pub use category_laws::{BifunctorLaws, CategoryLaws};
pub use checker::{LawCheckResult, LawChecker, LawKind, LawViolation, Structure};
pub use monoidal_laws::MonoidalCategoryLaws;
