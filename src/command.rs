//! Discrete commands a front-end applies to a [Warehouse], one at a time.

use crate::direction::Direction;
use crate::error::{Result, WarehouseError};
use crate::solver::{breadth_first::BfsSolver, GridSolver};
use crate::warehouse::Warehouse;
use core::str::FromStr;
use grid_util::Point;
use log::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    PlaceObstacle(Point),
    RemoveObstacle(Point),
    SetPackage(Point),
    MoveRobot(Direction),
    FindPath,
    /// Overlays the last found path onto the grid.
    ShowPath,
    Reset,
    Render,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    PathFound(Vec<Point>),
    NoPath,
    Rendered(String),
}

fn parse_coordinate(text: Option<&str>, line: &str) -> Result<i32> {
    text.and_then(|t| t.parse().ok())
        .ok_or_else(|| WarehouseError::UnknownCommand(line.to_owned()))
}

impl FromStr for Command {
    type Err = WarehouseError;

    /// Parses `obstacle <row> <col>`, `remove <row> <col>`, `package <row> <col>`,
    /// `move <direction>`, `find`, `show`, `reset` and `render`.
    fn from_str(line: &str) -> Result<Command> {
        let mut words = line.split_whitespace();
        let keyword = words.next().map(|w| w.to_ascii_lowercase());
        let point = |words: &mut std::str::SplitWhitespace| -> Result<Point> {
            let row = parse_coordinate(words.next(), line)?;
            let col = parse_coordinate(words.next(), line)?;
            Ok(Point::new(col, row))
        };
        let command = match keyword.as_deref() {
            Some("obstacle" | "o") => Command::PlaceObstacle(point(&mut words)?),
            Some("remove") => Command::RemoveObstacle(point(&mut words)?),
            Some("package" | "p") => Command::SetPackage(point(&mut words)?),
            Some("move" | "m") => Command::MoveRobot(
                words
                    .next()
                    .and_then(|w| w.parse().ok())
                    .ok_or_else(|| WarehouseError::UnknownCommand(line.to_owned()))?,
            ),
            Some("find" | "f") => Command::FindPath,
            Some("show") => Command::ShowPath,
            Some("reset") => Command::Reset,
            Some("render" | "print") => Command::Render,
            _ => return Err(WarehouseError::UnknownCommand(line.to_owned())),
        };
        if words.next().is_some() {
            return Err(WarehouseError::UnknownCommand(line.to_owned()));
        }
        Ok(command)
    }
}

/// Owns a [Warehouse] together with the last computed path. Any edit to the grid invalidates
/// the stored path and wipes its markers.
#[derive(Clone, Debug)]
pub struct Session<S: GridSolver = BfsSolver> {
    warehouse: Warehouse,
    solver: S,
    path: Option<Vec<Point>>,
}

impl Session<BfsSolver> {
    pub fn new(warehouse: Warehouse) -> Self {
        Session::with_solver(warehouse, BfsSolver::new())
    }
}

impl<S: GridSolver> Session<S> {
    pub fn with_solver(warehouse: Warehouse, solver: S) -> Self {
        Session {
            warehouse,
            solver,
            path: None,
        }
    }

    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    pub fn path(&self) -> Option<&[Point]> {
        self.path.as_deref()
    }

    fn invalidate_path(&mut self) {
        self.path = None;
        self.warehouse.clear_path_markers();
    }

    /// Applies a single command. A failed command leaves the grid as it was.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::PlaceObstacle(p) => {
                self.warehouse.place_obstacle(p)?;
                self.invalidate_path();
                Outcome::Updated
            }
            Command::RemoveObstacle(p) => {
                if self.warehouse.remove_obstacle(p)? {
                    self.invalidate_path();
                }
                Outcome::Updated
            }
            Command::SetPackage(p) => {
                self.warehouse.set_package(p)?;
                self.invalidate_path();
                Outcome::Updated
            }
            Command::MoveRobot(direction) => {
                self.warehouse.move_robot(direction)?;
                self.invalidate_path();
                Outcome::Updated
            }
            Command::FindPath => {
                self.invalidate_path();
                match self.solver.find_path(&self.warehouse)? {
                    Some(path) => {
                        self.path = Some(path.clone());
                        Outcome::PathFound(path)
                    }
                    None => Outcome::NoPath,
                }
            }
            Command::ShowPath => match &self.path {
                Some(path) => {
                    Outcome::Rendered(self.solver.materialize_path(&mut self.warehouse, path)?)
                }
                None => {
                    warn!("No path to show");
                    Outcome::Rendered(self.warehouse.render_text())
                }
            },
            Command::Reset => {
                self.path = None;
                self.warehouse.reset();
                info!("Warehouse has been reset");
                Outcome::Updated
            }
            Command::Render => Outcome::Rendered(self.warehouse.render_text()),
        };
        Ok(outcome)
    }

    /// Parses and applies one line of text.
    pub fn apply_line(&mut self, line: &str) -> Result<Outcome> {
        let command: Command = line.parse()?;
        self.apply(command)
    }

    pub fn into_warehouse(self) -> Warehouse {
        self.warehouse
    }
}
