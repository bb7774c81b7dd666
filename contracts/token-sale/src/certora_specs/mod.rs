// Certora Sunbeam specifications for the token sale.
//
// - sale_specs.rs : purchase pricing, window and supply rules
//
// USAGE:
// - Unit tests: cargo test -p token-sale
// - Certora build: cargo build --features certora -p token-sale

pub mod sale_specs;
