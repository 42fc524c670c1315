//! Orthogonal ("plumbing") edge routes between placed operators.
//!
//! Routes leave the bottom edge of the source square and enter the top
//! edge of the target square. Horizontal runs travel in the gutters
//! between grid rows and vertical runs in the gutters between columns,
//! so a route only crosses a square where it starts or ends. Each source
//! operator gets its own lane inside a cell and its own track inside a
//! gutter; feedback mirrors the lanes so both graphs stay readable.
//!
//! Routes do not avoid each other.

use heapless::Vec as HVec;
use og_ir::{Edge, GraphModel, GridCell, Mode, NodeIndex, CANVAS_PX, CELL_PX, GRID_SIZE};

use crate::layout::Placement;

/// Distance from a cell's edge to its node square.
pub const NODE_INSET: i32 = 3;

/// Most waypoints any route needs.
pub const MAX_WAYPOINTS: usize = 8;

/// Upper bound on drawn edges: every ordered pair, self-loops included.
pub const MAX_EDGES: usize = 36;

/// A surface-local pixel position (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0, CANVAS_PX - 1),
            y: self.y.clamp(0, CANVAS_PX - 1),
        }
    }
}

/// An axis-aligned polyline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    points: HVec<Point, MAX_WAYPOINTS>,
}

impl Route {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Append a waypoint, dropping repeats and folding collinear runs.
    fn push(&mut self, p: Point) {
        let p = p.clamped();
        let n = self.points.len();
        if n >= 1 && self.points[n - 1] == p {
            return;
        }
        if n >= 2 {
            let (a, b) = (self.points[n - 2], self.points[n - 1]);
            if (a.x == b.x && b.x == p.x) || (a.y == b.y && b.y == p.y) {
                self.points[n - 1] = p;
                return;
            }
        }
        let _ = self.points.push(p);
    }
}

/// An edge together with its drawn route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutedEdge {
    pub edge: Edge,
    pub route: Route,
}

/// All routes for one redraw.
pub type RouteSet = HVec<RoutedEdge, MAX_EDGES>;

/// Horizontal position of `source`'s lane inside a cell.
fn lane(source: NodeIndex, mode: Mode) -> i32 {
    let s = source.get() as i32;
    match mode {
        Mode::Algorithm => 5 + 2 * s,
        Mode::Feedback => 19 - 2 * s,
    }
}

/// Offset of `source`'s track from a gutter's centre line.
fn track(source: NodeIndex, mode: Mode) -> i32 {
    let s = source.get() as i32;
    match mode {
        Mode::Algorithm => s - 4,
        Mode::Feedback => 3 - s,
    }
}

/// Column boundary (0..=6) whose gutter carries the vertical run.
fn side_boundary(from: GridCell, to: GridCell) -> u8 {
    let last_col = GRID_SIZE - 1;
    if from.col == to.col {
        // Around the column, right side unless there is no right side.
        if from.col < last_col {
            from.col + 1
        } else {
            from.col
        }
    } else if to.row <= from.row {
        // Target level or lower: drop beside the source column.
        if to.col > from.col {
            from.col + 1
        } else {
            from.col
        }
    } else {
        // Target higher: cross at the source's band, climb beside the target.
        if to.col < from.col {
            to.col + 1
        } else {
            to.col
        }
    }
}

/// Route one edge. `None` if either end is not placed.
pub fn route(placement: &Placement, edge: Edge, mode: Mode) -> Option<Route> {
    let from = placement.cell_of(edge.source)?;
    let to = placement.cell_of(edge.target)?;
    Some(route_cells(from, to, edge.source, mode))
}

/// Route between two cells using `source`'s lane and track.
pub fn route_cells(from: GridCell, to: GridCell, source: NodeIndex, mode: Mode) -> Route {
    let (fx, fy) = from.origin_px();
    let (tx, ty) = to.origin_px();
    let lane = lane(source, mode);
    let track = track(source, mode);
    let xs = fx + lane;
    let xt = tx + lane;

    let mut route = Route::default();

    if from.col == to.col && from.row.abs_diff(to.row) == 1 {
        // Adjacent in one column: a straight run between the facing edges.
        if from.row > to.row {
            route.push(Point::new(xs, fy + CELL_PX - NODE_INSET));
            route.push(Point::new(xt, ty + NODE_INSET));
        } else {
            route.push(Point::new(xs, fy + NODE_INSET));
            route.push(Point::new(xt, ty + CELL_PX - NODE_INSET));
        }
        return route;
    }

    // Everything else, self-loops included: down into the gutter below the
    // source, along it to a column gutter, through that to the gutter above
    // the target, across to the target lane and down into the square.
    let below_source = fy + CELL_PX + track;
    let above_target = ty + track;
    let side_x = side_boundary(from, to) as i32 * CELL_PX + track;

    route.push(Point::new(xs, fy + CELL_PX - NODE_INSET));
    route.push(Point::new(xs, below_source));
    route.push(Point::new(side_x, below_source));
    route.push(Point::new(side_x, above_target));
    route.push(Point::new(xt, above_target));
    route.push(Point::new(xt, ty + NODE_INSET));
    route
}

/// Route every edge of the model's active graph.
pub fn route_all(model: &GraphModel, placement: &Placement) -> RouteSet {
    let mode = model.mode();
    let mut routes = RouteSet::new();
    for edge in model.edges(mode) {
        if let Some(route) = route(placement, edge, mode) {
            let _ = routes.push(RoutedEdge { edge, route });
        }
    }
    routes
}
