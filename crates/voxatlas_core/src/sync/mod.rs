//! # Frame Synchronization
//!
//! ## The Problem
//!
//! ```text
//! Host (frame setup):   WRITE camera matrix for frame N+1
//! Draw submission:      READ camera matrix for frame N
//!
//! Without synchronization: half-written matrix leaks into a draw
//! ```
//!
//! ## The Solution: Double Buffering
//!
//! ```text
//! Frame N:
//!   Writer fills Buffer A
//!   Readers copy Buffer B (last published state)
//!
//! Frame N+1:
//!   SWAP (atomic index toggle)
//!   Writer fills Buffer B
//!   Readers copy Buffer A
//! ```

mod double_buffer;

pub use double_buffer::{DoubleBuffered, ReadHandle, WriteHandle};
