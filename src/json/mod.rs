//! Purpose: JSON text boundary shared by selector parsing and the CLI.
//! Exports: `parse` module with decode helpers and failure categorization.
//! Role: Single seam for text decoding so callsites avoid ad hoc `serde_json` error mapping.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub mod parse;
