//! CLI command implementations.

pub mod check;
pub mod curves;
pub mod infer;
pub mod init;
