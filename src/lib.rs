//! # class-version
//!
//! Reports which Java release a class file was compiled for.
//!
//! ## Architecture
//!
//! - **source**: Resolves a `.class` path or the first class entry of a `.jar`
//! - **header**: Big-endian decoding of the magic and version fields
//! - **version**: Fixed (major, minor) to release label table
//! - **error**: Error kinds surfaced to the user
//! - **cli**: Command line parsing

pub mod cli;
pub mod error;
pub mod header;
pub mod source;
pub mod version;
