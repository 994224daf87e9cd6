//! Warehouse setups from `demos/*.toml` solved end to end.

use grid_util::Point;
use warehouse_pathfinding::{
    find_path, is_valid_path, materialize_path, Cell, Robot, Scenario, Warehouse, WarehouseError,
};

fn load(name: &str) -> Warehouse {
    env_logger::try_init().ok();
    let path = format!("{}/demos/{}.toml", env!("CARGO_MANIFEST_DIR"), name);
    Scenario::load(&path)
        .and_then(|s| s.build())
        .unwrap_or_else(|e| panic!("Scenario {} failed: {}", name, e))
}

fn p(row: i32, col: i32) -> Point {
    Point::new(col, row)
}

#[test]
fn loading_bay_routes_under_the_wall() {
    let warehouse = load("loading_bay");
    let path = find_path(&warehouse).unwrap().unwrap();
    // Manhattan distance 9: the wall does not force a detour.
    assert_eq!(path.len(), 10);
    assert!(is_valid_path(&path));
    assert_eq!(path[0], p(2, 1));
    assert_eq!(*path.last().unwrap(), p(4, 8));
    for obstacle in [p(1, 3), p(2, 3), p(3, 3), p(3, 4), p(3, 5)] {
        assert!(!path.contains(&obstacle));
    }
}

#[test]
fn walled_in_package_is_unreachable() {
    let warehouse = load("walled_in");
    assert_eq!(find_path(&warehouse).unwrap(), None);
}

#[test]
fn corridor_forces_detour_through_gap() {
    let warehouse = load("corridor");
    let path = find_path(&warehouse).unwrap().unwrap();
    assert_eq!(path.len(), 19);
    assert!(path.contains(&p(1, 9)));
}

#[test]
fn search_is_deterministic() {
    let warehouse = load("loading_bay");
    let first = find_path(&warehouse).unwrap();
    let second = find_path(&warehouse).unwrap();
    assert_eq!(first, second);
}

#[test]
fn materialized_path_renders_between_endpoints() {
    let mut warehouse = load("loading_bay");
    let path = find_path(&warehouse).unwrap().unwrap();
    let once = materialize_path(&mut warehouse, &path).unwrap();
    let twice = materialize_path(&mut warehouse, &path).unwrap();
    assert_eq!(once, twice);
    assert_eq!(warehouse.cell(p(2, 1)).unwrap(), Cell::ROBOT);
    assert_eq!(warehouse.cell(p(4, 8)).unwrap(), Cell::PACKAGE);
    let markers = warehouse
        .points()
        .filter(|q| warehouse.cell(*q).unwrap() == Cell::PathMarker)
        .count();
    assert_eq!(markers, path.len() - 2);
    assert!(once.starts_with("--- Warehouse ---\n"));
    assert_eq!(once.lines().count(), warehouse.height() + 2);
}

#[test]
fn reset_after_scenario() {
    let mut warehouse = load("corridor");
    warehouse.reset();
    assert_eq!(warehouse.package(), None);
    for q in warehouse.points() {
        let expected = if q == p(0, 1) { Cell::ROBOT } else { Cell::Empty };
        assert_eq!(warehouse.cell(q).unwrap(), expected);
    }
}

#[test]
fn out_of_bounds_obstacles_are_rejected() {
    let mut warehouse = Warehouse::new(10, 5).unwrap();
    warehouse.place_robot(Robot::new(p(0, 0))).unwrap();
    for q in [p(-1, 0), p(5, 0)] {
        assert!(matches!(
            warehouse.place_obstacle(q),
            Err(WarehouseError::OutOfBounds { .. })
        ));
    }
    assert!(warehouse.is_consistent());
}
