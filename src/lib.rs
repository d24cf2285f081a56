//! Purpose: Library crate for frame- and shadow-aware selectors used by accessibility runs.
//! Exports: `api` (public surface), `core` (model, grammar, conversions), `json` (text boundary).
//! Role: Backs the `axe-selector` CLI and embedding crates that build engine run options.
//! Invariants: Every operation is a pure value transformation; no I/O outside `json` decoding.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
pub mod json;
