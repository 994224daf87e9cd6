//! # warehouse_pathfinding
//!
//! Models a grid warehouse holding a robot, a package and static obstacles, and finds the
//! shortest orthogonal route from the robot to the package with a
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search).
//!
//! Coordinates are [Point]s with `x` the column and `y` the row, so row 2 column 1 is
//! `Point::new(1, 2)`. The package cell counts as free space during search; robot, obstacle
//! and path marker cells block it.
//!
//! ```
//! use grid_util::Point;
//! use warehouse_pathfinding::{find_path, Robot, Warehouse};
//!
//! let mut warehouse = Warehouse::new(10, 5).unwrap();
//! warehouse.place_robot(Robot::new(Point::new(0, 0))).unwrap();
//! warehouse.set_package(Point::new(3, 2)).unwrap();
//! let path = find_path(&warehouse).unwrap().unwrap();
//! assert_eq!(path.len(), 6);
//! ```
pub mod bfs;
pub mod cell;
pub mod command;
pub mod direction;
pub mod error;
pub mod scenario;
pub mod solver;
pub mod warehouse;

pub use cell::{Cell, EntityKind};
pub use command::{Command, Outcome, Session};
pub use direction::Direction;
pub use error::{Endpoint, Result, WarehouseError};
pub use scenario::Scenario;
pub use solver::{breadth_first::BfsSolver, GridSolver};
pub use warehouse::{Robot, Warehouse};

use grid_util::Point;
use std::collections::HashSet;

/// Expansion order of neighbours during search.
pub const NEIGHBOUR_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];
pub const N_SMALLVEC_SIZE: usize = 4;

/// Shortest path from the robot to the package using the default [BfsSolver].
pub fn find_path(warehouse: &Warehouse) -> Result<Option<Vec<Point>>> {
    BfsSolver::new().find_path(warehouse)
}

/// Overlays `path` onto the grid with the default [BfsSolver] and returns the rendered grid.
pub fn materialize_path(warehouse: &mut Warehouse, path: &[Point]) -> Result<String> {
    BfsSolver::new().materialize_path(warehouse, path)
}

/// Number of moves along a path.
pub fn path_edges(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that consecutive points are one orthogonal step apart and that no point repeats.
pub fn is_valid_path(path: &[Point]) -> bool {
    let mut seen = HashSet::new();
    path.iter().all(|p| seen.insert(*p))
        && path
            .windows(2)
            .all(|w| w[0].manhattan_distance(&w[1]) == 1)
}

/// Reduces a path to its endpoints and the points where it turns.
pub fn path_to_waypoints(path: &[Point]) -> Vec<Point> {
    let mut waypoints = Vec::new();
    for (i, p) in path.iter().enumerate() {
        let turns = i > 0
            && i + 1 < path.len()
            && (path[i - 1].x - p.x, path[i - 1].y - p.y)
                != (p.x - path[i + 1].x, p.y - path[i + 1].y);
        if i == 0 || i + 1 == path.len() || turns {
            waypoints.push(*p);
        }
    }
    waypoints
}

/// Turns axis-aligned waypoints back into a step-by-step path.
pub fn waypoints_to_path(waypoints: &[Point]) -> Vec<Point> {
    let mut path: Vec<Point> = Vec::new();
    let mut iter = waypoints.iter();
    let Some(&first) = iter.next() else {
        return path;
    };
    let mut current = first;
    path.push(current);
    for next in iter {
        while current != *next {
            current = Point::new(
                current.x + (next.x - current.x).signum(),
                if current.x == next.x {
                    current.y + (next.y - current.y).signum()
                } else {
                    current.y
                },
            );
            path.push(current);
        }
    }
    path
}
