//! Warehouse setups loaded from TOML.
//!
//! ```toml
//! name = "loading bay"
//! width = 10
//! height = 5
//! robot = [2, 1]
//! package = [4, 8]
//! obstacles = [[1, 3], [2, 3], [3, 3]]
//! ```
//!
//! Positions are written as `[row, col]`.

use crate::error::{Result, WarehouseError};
use crate::warehouse::{Robot, Warehouse};
use grid_util::Point;
use log::info;
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    #[serde(default = "default_name")]
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub robot: [i32; 2],
    #[serde(default)]
    pub package: Option<[i32; 2]>,
    #[serde(default)]
    pub obstacles: Vec<[i32; 2]>,
}

fn default_name() -> String {
    "unnamed".to_owned()
}

fn to_point([row, col]: [i32; 2]) -> Point {
    Point::new(col, row)
}

impl Scenario {
    pub fn from_toml_str(text: &str) -> Result<Scenario> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Scenario> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let scenario = Scenario::from_toml_str(&text)?;
        info!(
            "Loaded scenario '{}' from {}",
            scenario.name,
            path.as_ref().display()
        );
        Ok(scenario)
    }

    /// Builds the warehouse, placing the robot first, then obstacles, then the package.
    pub fn build(&self) -> Result<Warehouse> {
        let mut warehouse = Warehouse::new(self.width, self.height)?;
        warehouse
            .place_robot(Robot::new(to_point(self.robot)))
            .map_err(|e| WarehouseError::Config(format!("robot: {}", e)))?;
        for &obstacle in &self.obstacles {
            warehouse
                .place_obstacle(to_point(obstacle))
                .map_err(|e| WarehouseError::Config(format!("obstacle: {}", e)))?;
        }
        if let Some(package) = self.package {
            warehouse
                .set_package(to_point(package))
                .map_err(|e| WarehouseError::Config(format!("package: {}", e)))?;
        }
        Ok(warehouse)
    }
}
