//! Abstract syntax tree definitions.
//!
//! The AST is a pair of tagged sums, [`Expr`] and [`Stmt`], built by the
//! [`crate::parser`] and walked by the [`crate::interpreter`]. There is no
//! visitor interface here: dispatch is a plain `match` over the enum
//! variants, since Rust's pattern matching already gives the same
//! exhaustiveness guarantee a double-dispatch visitor buys in languages
//! without sum types.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes
//! - [`stmt`] - Statement nodes
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces these nodes
//! * [`crate::interpreter`] - Consumes these nodes

mod expr;
mod stmt;

pub use expr::Expr;
pub use stmt::Stmt;
