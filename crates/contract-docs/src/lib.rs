//! # contract-docs
//!
//! CNS smart-contract address registry to markdown documentation.
//!
//! Reads the per-network contract address registry
//! (`network-config.json`), renders one markdown address table per
//! distinct contract name, and splices the generated fragments into the
//! final document via a manifest-driven `#include` compiler.
//!
//! ## Modules
//!
//! - [`registry`] — Parse and validate the network registry
//! - [`table_gen`] — Per-contract markdown address tables
//! - [`manifest`] — The `{build, files}` assembly manifest
//! - [`include`] — `#include` resolution and document compilation
//! - [`pipeline`] — End-to-end generation to disk

pub mod error;
pub mod include;
pub mod manifest;
pub mod pipeline;
pub mod registry;
pub mod table_gen;
