use crate::cell::{Cell, EntityKind};
use crate::direction::Direction;
use crate::error::{Endpoint, Result, WarehouseError};
use core::fmt;
use grid_util::grid::{SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use log::{debug, info, warn};

const HEADER: &str = "--- Warehouse ---";

/// The robot that fetches packages. Its position is authoritative; the robot cell on the grid
/// is a projection of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Robot {
    pub position: Point,
}

impl Robot {
    pub fn new(position: Point) -> Robot {
        Robot { position }
    }
}

/// [Warehouse] owns the cell grid together with the single robot and the optional package.
/// Every mutation is bounds-checked and keeps the robot and package cells in sync with the
/// stored positions.
#[derive(Clone, Debug)]
pub struct Warehouse {
    grid: SimpleValueGrid<Cell>,
    width: usize,
    height: usize,
    robot: Option<Robot>,
    package: Option<Point>,
}

impl Warehouse {
    /// Creates an all-empty grid of `width` columns and `height` rows.
    pub fn new(width: usize, height: usize) -> Result<Warehouse> {
        if width == 0 || height == 0 || i32::try_from(width.max(height)).is_err() {
            return Err(WarehouseError::InvalidDimensions { width, height });
        }
        Ok(Warehouse {
            grid: SimpleValueGrid::new(width, height, Cell::Empty),
            width,
            height,
            robot: None,
            package: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn robot(&self) -> Option<Point> {
        self.robot.map(|r| r.position)
    }

    pub fn package(&self) -> Option<Point> {
        self.package
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    fn check_bounds(&self, point: Point) -> Result<()> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            warn!("Rejected access to {} outside of the grid", point);
            Err(WarehouseError::OutOfBounds {
                point,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Only called with points that passed [check_bounds](Self::check_bounds).
    fn at(&self, point: Point) -> Cell {
        self.grid.get_point(point)
    }

    fn put(&mut self, point: Point, cell: Cell) {
        self.grid.set_point(point, cell);
    }

    pub fn cell(&self, point: Point) -> Result<Cell> {
        self.check_bounds(point)?;
        Ok(self.at(point))
    }

    /// True iff `point` is in bounds and holds either nothing or the package.
    pub fn is_traversable(&self, point: Point) -> bool {
        self.in_bounds(point) && self.at(point).is_traversable()
    }

    /// Places the robot, moving it if one was already placed.
    pub fn place_robot(&mut self, robot: Robot) -> Result<()> {
        let target = robot.position;
        self.check_bounds(target)?;
        let cell = self.at(target);
        if !cell.is_free() && cell != Cell::ROBOT {
            warn!("Cannot place robot on {}", target);
            return Err(WarehouseError::CellOccupied {
                point: target,
                cell,
            });
        }
        if let Some(old) = self.robot.replace(robot) {
            self.put(old.position, Cell::Empty);
        }
        self.put(target, Cell::ROBOT);
        debug!("Placed robot on {}", target);
        Ok(())
    }

    /// Marks `point` with an entity. Robots and packages are routed through
    /// [place_robot](Self::place_robot) and [set_package](Self::set_package) so that the stored
    /// positions stay authoritative.
    pub fn place_entity(&mut self, point: Point, kind: EntityKind) -> Result<()> {
        match kind {
            EntityKind::Robot => self.place_robot(Robot::new(point)),
            EntityKind::Package => self.set_package(point),
            EntityKind::Obstacle => self.place_obstacle(point),
        }
    }

    pub fn place_obstacle(&mut self, point: Point) -> Result<()> {
        self.check_bounds(point)?;
        let cell = self.at(point);
        if !cell.is_free() && cell != Cell::OBSTACLE {
            warn!("Cannot place obstacle on {}", point);
            return Err(WarehouseError::CellOccupied { point, cell });
        }
        self.put(point, Cell::OBSTACLE);
        debug!("Placed obstacle on {}", point);
        Ok(())
    }

    /// Removes an obstacle; returns whether there was one.
    pub fn remove_obstacle(&mut self, point: Point) -> Result<bool> {
        self.check_bounds(point)?;
        if self.at(point) == Cell::OBSTACLE {
            self.put(point, Cell::Empty);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Sets the package, clearing the cell of a previously placed one.
    pub fn set_package(&mut self, point: Point) -> Result<()> {
        self.check_bounds(point)?;
        let cell = self.at(point);
        if !cell.is_free() && cell != Cell::PACKAGE {
            warn!("Cannot place package on {}", point);
            return Err(WarehouseError::CellOccupied { point, cell });
        }
        if let Some(old) = self.package.replace(point) {
            self.put(old, Cell::Empty);
        }
        self.put(point, Cell::PACKAGE);
        debug!("Placed package on {}", point);
        Ok(())
    }

    pub fn clear_package(&mut self) {
        if let Some(old) = self.package.take() {
            self.put(old, Cell::Empty);
        }
    }

    /// Moves the robot one step. The destination must be in bounds and not hold an entity.
    pub fn move_robot(&mut self, direction: Direction) -> Result<Point> {
        let robot = self
            .robot
            .ok_or(WarehouseError::MissingEndpoint(Endpoint::Robot))?;
        let target = direction.step(robot.position);
        self.place_robot(Robot::new(target))?;
        debug!("Moved robot {} to {}", direction, target);
        Ok(target)
    }

    /// Writes a path marker onto `point` if it is empty. Returns whether the cell changed.
    pub fn mark_path(&mut self, point: Point) -> Result<bool> {
        self.check_bounds(point)?;
        if self.at(point) == Cell::Empty {
            self.put(point, Cell::PathMarker);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn clear_path_markers(&mut self) {
        for p in self.points().collect::<Vec<_>>() {
            if self.at(p) == Cell::PathMarker {
                self.put(p, Cell::Empty);
            }
        }
    }

    /// Clears the package, obstacles and path markers. The robot keeps its position.
    pub fn reset(&mut self) {
        info!("Resetting warehouse");
        self.package = None;
        let robot = self.robot();
        for p in self.points().collect::<Vec<_>>() {
            let cell = if robot == Some(p) {
                Cell::ROBOT
            } else {
                Cell::Empty
            };
            self.put(p, cell);
        }
    }

    /// All in-bounds points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|p| self.at(*p) == Cell::OBSTACLE)
    }

    /// Snapshot of the cell states, one `Vec` per row.
    pub fn cells(&self) -> Vec<Vec<Cell>> {
        (0..self.height as i32)
            .map(|y| {
                (0..self.width as i32)
                    .map(|x| self.at(Point::new(x, y)))
                    .collect()
            })
            .collect()
    }

    /// Checks that the robot and package cells agree with the stored positions and that no
    /// other cell carries their markers.
    pub fn is_consistent(&self) -> bool {
        self.points().all(|p| match self.at(p) {
            Cell::Occupied(EntityKind::Robot) => self.robot() == Some(p),
            Cell::Occupied(EntityKind::Package) => self.package == Some(p),
            _ => self.robot() != Some(p) && self.package != Some(p),
        })
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", HEADER)?;
        for row in self.cells() {
            let line = row
                .iter()
                .map(|c| c.symbol().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", "-".repeat(HEADER.len()))
    }
}
