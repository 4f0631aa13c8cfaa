//! Foundation types for devcon.
//!
//! This crate contains the types shared by every devcon crate: the error
//! enum, colors and text styles handed to the render layer, and the
//! severity levels of incoming log events.

pub mod color;
pub mod error;
pub mod severity;
pub mod style;
