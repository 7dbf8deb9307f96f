// ABOUTME: Configuration support for StratOS
// ABOUTME: Environment variable names and lookup helpers shared by the binaries

pub mod constants;
pub mod env;
