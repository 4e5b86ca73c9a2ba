//! Concrete symmetric monoidal structures on Rust types
//!
//! - [`Product`]: tensor `(A, B)`, unit `()`
//! - [`Coproduct`]: tensor [`Either<A, B>`], unit [`Void`]
//!
//! Both are braided by swapping components, and the swap is its own inverse,
//! so both are symmetric.

pub mod coproduct;
pub mod either;
pub mod product;

pub use coproduct::{Coproduct, EitherTensor};
pub use either::{Either, Void};
pub use product::{PairTensor, Product};
