use grid_util::Point;
use std::io::{self, BufRead, Write};
use warehouse_pathfinding::{Outcome, Robot, Session, Warehouse, WarehouseError};

const HELP: &str = "\
Commands (coordinates are <row> <col>):
  obstacle <row> <col>   place an obstacle
  remove <row> <col>     remove an obstacle
  package <row> <col>    place or move the package
  move up|down|left|right
  find                   search for a path
  show                   draw the last path
  reset                  clear everything except the robot
  render                 print the grid
  quit";

fn main() -> Result<(), WarehouseError> {
    env_logger::init();
    let mut warehouse = Warehouse::new(10, 5)?;
    warehouse.place_robot(Robot::new(Point::new(1, 0)))?;
    let mut session = Session::new(warehouse);
    println!("{}", HELP);
    println!("{}", session.warehouse());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            _ => {}
        }
        match session.apply_line(line) {
            Ok(Outcome::Updated) => println!("{}", session.warehouse()),
            Ok(Outcome::PathFound(path)) => println!("Path Found! {} cells", path.len()),
            Ok(Outcome::NoPath) => println!("No path could be found."),
            Ok(Outcome::Rendered(text)) => println!("{}", text),
            Err(WarehouseError::MissingEndpoint(endpoint)) => {
                println!("Cannot find path: please place a {} first.", endpoint)
            }
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}
