//! # bsp-rs
//!
//! `bsp-rs` is a pure Rust decoder for id Software's Quake BSP level format.
//! It decodes the file header, the lump directory and the texture (miptex) directory
//! into plain Rust values for renderers, asset browsers and converters.
//!
//! ## Features
//! - Byte-exact header and lump directory decoding
//! - Texture directory decoding with corrupt entries detected and dropped
//! - A small declarative schema language ([`schema`]) driving all struct decoding
//! - Diagnostics routed through an injectable sink, `tracing` by default
//!
//! ## Usage
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! bsp-rs = "0.1"
//! ```
//!
//! ### Example: Listing Textures
//! ```rust,no_run
//! use bsp_rs::{bsp::Bsp, diagnostics::CollectingSink};
//!
//! let bytes = std::fs::read("maps/start.bsp").unwrap();
//! let sink = CollectingSink::new();
//! let bsp = Bsp::from_bytes_with_sink("maps/start.bsp", &bytes, &sink).unwrap();
//!
//! println!("{bsp}");
//! for texture in &bsp.miptex_directory {
//!     println!("{} at {:#x}", texture.name, texture.offset);
//! }
//! for diagnostic in sink.diagnostics() {
//!     eprintln!("{diagnostic}");
//! }
//! ```

pub mod bsp;
pub mod bsp_header;
pub mod bsp_schema;
pub mod byte_cursor;
pub mod diagnostics;
pub mod error;
pub mod miptex;
pub mod schema;
mod utility;
