#![forbid(unsafe_code)]

//! Document model and render configuration for `mathtree`.
//!
//! An [`ExpressionTree`] is the caller-supplied input: a rooted tree of
//! subexpressions, each carrying opaque presentation markup for an external
//! formula renderer. [`RenderConfig`] holds the sizing constants and the
//! style/script payloads embedded into every composed document.
//!
//! This crate is model-only: layout, formula rendering, and SVG composition
//! live in `mathtree-render`.

pub mod config;
pub mod model;

pub use config::{DEFAULT_SCRIPT, DEFAULT_STYLESHEET, RenderConfig};
pub use model::{ExpressionNode, ExpressionTree};
