use grid_util::Point;
use warehouse_pathfinding::{find_path, materialize_path, Robot, Warehouse, WarehouseError};

// In this example a path is found on a 10x5 warehouse with shape
//  __________
// |          |
// |   1      |
// | R 1      |
// |   111    |
// |        P |
//  __________
// where
// - 1 marks an obstacle
// - R marks the robot
// - P marks the package
//
// Coordinates are written (row, col).

fn main() -> Result<(), WarehouseError> {
    env_logger::init();
    let p = |row, col| Point::new(col, row);
    let mut warehouse = Warehouse::new(10, 5)?;
    warehouse.place_robot(Robot::new(p(2, 1)))?;
    warehouse.set_package(p(4, 8))?;
    for obstacle in [p(1, 3), p(2, 3), p(3, 3), p(3, 4), p(3, 5)] {
        warehouse.place_obstacle(obstacle)?;
    }
    println!("{}", warehouse);
    match find_path(&warehouse)? {
        Some(path) => {
            println!("Path of {} cells:", path.len());
            for q in &path {
                println!("({}, {})", q.y, q.x);
            }
            println!("{}", materialize_path(&mut warehouse, &path)?);
        }
        None => println!("No path could be found."),
    }
    Ok(())
}
