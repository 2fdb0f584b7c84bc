//! ualchemia-core: grid identifier codec.
//!
//! A recipe grid is a 3x3 board of tri-state cells (empty, circle, star)
//! tagged with one element. This crate encodes a grid and its tag into the
//! compact identifier stored in recipe documents (`100020001:R`) and decodes
//! and validates such identifiers.
//!
//! - [`encode`] / [`encode_values`] -- grid + tag to identifier
//! - [`decode`] -- identifier to grid + tag
//! - [`Grid`] -- the cell buffer, including the click-cycling editor step
//! - [`GridError`] -- every rejection the codec can produce

pub mod element;
pub mod error;
pub mod grid;

pub use element::ElementTag;
pub use error::GridError;
pub use grid::{decode, encode, encode_values, Grid, GridCell, GRID_CELLS, GRID_SIDE};
