//! Order algebra.
//!
//! Preorders and partial orders over finite element sets, their Hasse
//! structure and linear extensions, and the enumeration of every partial
//! order over a small labeled set.

pub mod error;
pub mod graph;
pub mod matrix;
pub mod partial;
pub mod preorder;
pub mod universe;

pub use error::OrderError;
pub use graph::Digraph;
pub use matrix::BitMatrix;
pub use partial::PartialOrder;
pub use preorder::{Element, Hasse, Preorder};
pub use universe::{all_partial_orders, MAX_UNIVERSE_ELEMENTS};
