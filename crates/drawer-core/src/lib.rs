//! Geometry and gesture engine for an edge-anchored, draggable drawer.
//!
//! A host owns a [`DrawerState`] and a container [`Size`]. Each frame it asks a
//! [`DrawerLayout`] for [`Traits`], renders them, and routes drag translations
//! back through [`Traits::on_drag`] and [`Traits::on_drag_end`].

pub mod detent;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod position;

pub use detent::Detent;
pub use geometry::{Axis, Edge, Point, ProposedSize, Size};
pub use gesture::{DrawerState, MIN_DRAG_DISTANCE, Settle, damp, nearest_detent};
pub use layout::{DetentSet, DragRegion, DrawerLayout, PANEL_OVERSCAN, Traits};
pub use position::{Anchor, Position};
