use crate::bfs::bfs;
use crate::error::{Endpoint, Result, WarehouseError};
use crate::{path_edges, Warehouse};
use grid_util::Point;
use log::info;

pub mod breadth_first;

pub trait GridSolver {
    type Successors: IntoIterator<Item = Point>;

    /// Cells reachable in one move from `node` that the search may enter.
    fn successors(&self, warehouse: &Warehouse, node: &Point) -> Self::Successors;

    /// Shortest path between two arbitrary points, both included. Does not require the
    /// endpoints to hold the robot or package.
    fn get_path_single_goal(
        &self,
        warehouse: &Warehouse,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        if !warehouse.in_bounds(start) || !warehouse.in_bounds(goal) {
            return None;
        }
        bfs(
            &start,
            |node| self.successors(warehouse, node),
            |node| *node == goal,
        )
    }

    /// Shortest path from the robot to the package. `Ok(None)` means the package cannot be
    /// reached; a missing robot or package is an error.
    fn find_path(&self, warehouse: &Warehouse) -> Result<Option<Vec<Point>>> {
        let start = warehouse
            .robot()
            .ok_or(WarehouseError::MissingEndpoint(Endpoint::Robot))?;
        let goal = warehouse
            .package()
            .ok_or(WarehouseError::MissingEndpoint(Endpoint::Package))?;
        info!("Searching for a path from {} to {}", start, goal);
        let path = self.get_path_single_goal(warehouse, start, goal);
        match &path {
            Some(p) => info!("Found path of {} steps", path_edges(p)),
            None => info!("{} is not reachable from {}", goal, start),
        }
        Ok(path)
    }

    /// Writes `path` onto the grid as path markers, leaving every non-empty cell alone, and
    /// returns the rendered grid. Fails without touching the grid if any point is out of bounds.
    fn materialize_path(&self, warehouse: &mut Warehouse, path: &[Point]) -> Result<String> {
        for p in path {
            warehouse.cell(*p)?;
        }
        let mut marked = 0;
        for p in path {
            if warehouse.mark_path(*p)? {
                marked += 1;
            }
        }
        info!("Marked {} cells of a {} cell path", marked, path.len());
        Ok(warehouse.render_text())
    }
}
