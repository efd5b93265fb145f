//! # VOXATLAS Core
//!
//! Host-side primitives shared by the rendering crates. Nothing in here
//! knows about GPUs or windows.
//!
//! ## Architecture Rules
//!
//! 1. **Frame-scoped state** - Per-frame values are published once and read
//!    as immutable snapshots for the rest of the frame
//! 2. **No torn reads** - A reader sees either the previous frame or the
//!    current one, never a mix
//!
//! ## Example
//!
//! ```rust
//! use voxatlas_core::DoubleBuffered;
//!
//! let view_proj = DoubleBuffered::new([[0.0f32; 4]; 4]);
//! view_proj.publish([[1.0; 4]; 4]);
//! assert_eq!(view_proj.snapshot()[0][0], 1.0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod sync;

pub use sync::{DoubleBuffered, ReadHandle, WriteHandle};
