//! Core data structures describing a loaded molecular geometry.
//!
//! - [`atom`] – An atom symbol paired with its Cartesian coordinates.
//! - [`geometry`] – The two supported representations of a whole file:
//!   the ordered [`Geometry`] and the symbol-keyed [`SymbolMap`].
//!
//! Both representations are immutable once built. [`SymbolMap`] collapses
//! duplicate symbols, which makes it lossy for molecules such as water.
//!
//! [`Geometry`]: geometry::Geometry
//! [`SymbolMap`]: geometry::SymbolMap

pub mod atom;
pub mod geometry;
