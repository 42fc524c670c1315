//! Layout and routing engine for the opgrid algorithm editor.
//!
//! Turns a [`GraphModel`](og_ir::GraphModel) into a grid placement and a set
//! of orthogonal edge routes. Both passes are pure and allocation-free, so
//! they run on every pointer event.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod layout;
pub mod router;

pub use layout::{compute_layout, Placement};
pub use router::{
    route, route_all, route_cells, Point, Route, RouteSet, RoutedEdge, MAX_EDGES, MAX_WAYPOINTS,
    NODE_INSET,
};
