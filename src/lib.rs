//! # importgraph
//!
//! Extracts the `import` declarations of one package from a source tree and
//! renders them as a Graphviz dependency graph.
//!
//! ## Pipeline
//!
//! 1. [`config::Config`] loads the XML settings.
//! 2. [`core::PackageAnalyzer`] resolves the package directory and collects
//!    imports from the files directly inside it.
//! 3. [`formatters::DotFormatter`] writes a `digraph` description.
//! 4. [`render::GraphvizRenderer`] invokes `dot -Tpng` on it.
//!
//! [`app::run`] chains the steps and returns a typed [`error::AppError`].

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod formatters;
pub mod parsers;
pub mod render;
