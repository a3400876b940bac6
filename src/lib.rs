//! A tree-walking interpreter for a small dynamically-typed scripting
//! language.
//!
//! The pipeline is the classic three-stage shape: [`lexer`] turns source
//! text into a token stream, [`parser`] turns that into an [`ast`], and
//! [`interpreter`] walks the tree directly, threading an
//! [`environment`] chain through every scope it enters. Errors from any
//! stage are funneled through a single [`diagnostics`] handle so the host
//! (see `main.rs`) can report them uniformly and choose the right exit
//! code.

pub mod ast;
pub mod diagnostics;
pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;
