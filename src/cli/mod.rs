//! CLI subcommand implementations for the pricewatch binary.

pub mod doctor;
pub mod fetch_cmd;
