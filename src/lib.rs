//! # Trellis - A Tree-Rewriting Language
//!
//! Trellis programs are built from one kind of data: labelled trees. An atom
//! such as `Zero` is a tree without children, `Suc(Zero)` is a tree with one
//! child, and lists and strings are sugar for chains of cons cells. Functions
//! are sets of clauses selected by pattern matching on their arguments.
//!
//! ## Architecture Overview
//!
//! The pipeline consists of the following stages:
//!
//! 1. **Lexer** (`lexer`) - Tokenizes source code into a stream of tokens using the `lachs` library
//! 2. **Parser** (`parser`) - Builds a Surface AST from tokens using combinator-based recursive descent
//! 3. **Lowering** (`desugar`) - Rewrites cons, list and string sugar into plain trees and merges function clauses
//! 4. **Checking** (`check`) - Reports unbound names and arity mismatches before anything runs
//! 5. **Interpreter** (`interpreter`) - Evaluates items in order, writing builtin output to a sink
//!
//! ## Pipeline Flow
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → Surface AST (ast::Program)
//!     ↓
//! [Lowering] → Canonical AST (core::Program)
//!     ↓
//! [Checker] → Ok or first CheckError
//!     ↓
//! [Interpreter] → Lines written by display/print
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Two-Tier AST System
//!
//! - **Surface AST** (`ast`): the syntax as written, with source positions,
//!   cons cells, list and string literals, and one item per function clause.
//! - **Canonical AST** (`core`): everything is a tree over a [`core::Functor`].
//!   List structure uses reserved tags that no atom written in source can
//!   produce, and every function name owns exactly one definition.
//!
//! ### Dynamic Clause Frames
//!
//! A clause body runs in a fresh frame pushed on the *caller's* scope. Names
//! the clause patterns do not bind resolve through the caller's frames and
//! finally the globals.
//!
//! ## Module Structure
//!
//! - [`ast`] - Surface Abstract Syntax Tree definitions
//! - [`core`] - Canonical (lowered) AST definitions
//! - [`desugar`] - Lowering from surface to canonical form
//! - [`check`] - Static scope and arity checking
//! - [`interpreter`] - Runtime evaluation and pattern matching
//! - [`lexer`] - Tokenization using lachs
//! - [`parser`] - Parsing using combinator-based grammar
//! - [`fmt`] - Value rendering and pretty-printing
//!
//! ## Example Program
//!
//! ```text
//! fn add(Zero, n) = n;
//! fn add(Suc(m), n) = Suc(add(m, n));
//!
//! print(add(Suc(Zero), Suc(Zero)));   // Suc(Suc(Zero))
//! display("done");                    // done
//! ```
//!
//! ## Getting Started
//!
//! 1. Parse source code with [`parser::parse_source()`]
//! 2. Lower with [`desugar::desugar_program()`]
//! 3. Check with [`check::check_program()`]
//! 4. Run with [`interpreter::run()`] or an [`interpreter::Interpreter`]

pub mod ast;
pub mod check;
pub mod core;
pub mod desugar;
pub mod fmt;
pub mod interpreter;
pub mod lexer;
pub mod parser;
