use std::env;
use warehouse_pathfinding::{find_path, materialize_path, path_to_waypoints, Scenario, WarehouseError};

// Loads a TOML scenario (default: demos/loading_bay.toml) and solves it.
fn main() -> Result<(), WarehouseError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| format!("{}/demos/loading_bay.toml", env!("CARGO_MANIFEST_DIR")));
    let scenario = Scenario::load(&path)?;
    let mut warehouse = scenario.build()?;
    println!("Scenario: {}", scenario.name);
    println!("{}", warehouse);
    match find_path(&warehouse)? {
        Some(path) => {
            let waypoints = path_to_waypoints(&path)
                .iter()
                .map(|p| format!("({}, {})", p.y, p.x))
                .collect::<Vec<_>>();
            println!("Path Found! {} moves via {}", path.len() - 1, waypoints.join(" -> "));
            println!("{}", materialize_path(&mut warehouse, &path)?);
        }
        None => println!("No path could be found."),
    }
    Ok(())
}
