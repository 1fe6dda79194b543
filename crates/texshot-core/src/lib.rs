//! Texshot Core
//!
//! This crate provides core types and error definitions
//! shared by every texshot crate.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`TexshotError`] - Error types
//! - [`Selection`] - A byte range inside the editor buffer
//! - [`HeightMode`] - How the exported image height is chosen
//! - [`Status`] - User-facing status line messages
//! - [`color`] - Hex colour parsing

pub mod color;
pub mod error;
pub mod types;

pub use color::{hex2rgb, hex2rgba};
pub use error::{Result, TexshotError};
pub use types::{HeightMode, Selection, Status};
