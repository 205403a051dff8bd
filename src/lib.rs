//! Kotlin source emission building blocks for code generators.
//!
//! This crate is the formatting engine of a declaration generator: callers
//! build [`Const`]/[`Var`]/[`Clazz`] descriptors and pass them through the
//! [`Emit`] operations, which append correctly formatted Kotlin text to an
//! append-only [`Sink`]. The accumulated buffer is one complete source file.
//! The core is a formatter, not a validator: it performs no semantic checks
//! on caller-supplied names, types, or expressions.
//!
//! # Module Organization
//!
//! - [`sink`] - The append-only [`Sink`] abstraction and the [`with`] combinator
//! - [`konst`] - The [`Const`] value model (literal vs property reference)
//! - [`decl`] - The [`Var`] and [`Clazz`] declaration descriptors
//! - [`emit`] - The [`Emit`] trait carrying the primitive and structural emitters
//! - [`naming`] - Humanize/quote [`Conventions`] for rendered constants
//! - [`error`] - The crate [`Error`] type
//!
//! # Example
//!
//! ```
//! use ktgen::{Clazz, Emit, Var, with};
//!
//! let file = with(String::new(), |out| {
//!     out.warning().empty_line();
//!     out.packg("com.example.html");
//!     out.import("com.example.html.Tag");
//!     out.empty_line();
//!     out.clazz(&Clazz::new("DIV").supertype("Tag"), |out| {
//!         out.function("render", &[Var::new("indent", "Int")], "String", &[], "");
//!         out.empty_line();
//!     });
//! });
//! assert!(file.contains("public class DIV : Tag {\n"));
//! ```

pub mod decl;
pub mod emit;
pub mod error;
pub mod konst;
pub mod naming;
pub mod sink;

pub use decl::{Clazz, Var};
pub use emit::Emit;
pub use error::{Error, Result};
pub use konst::Const;
pub use naming::{Conventions, KOTLIN_CONVENTIONS};
pub use sink::{Sink, with};
