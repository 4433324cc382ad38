//! Per-contract markdown address tables.
//!
//! Builds one row per network where the contract is deployed, in
//! registry order, and renders a pipe table with a legacy-address
//! column only when at least one network retains legacy addresses.

mod strip;
mod table;

pub use strip::strip_blank_lines;
pub use table::{collect_rows, contract_table, render_table, Row, TableData};
