/// Fuzzes the search by checking on many random warehouses that a path is found exactly when the
/// package is reachable, and that its length matches an independent flood fill.
use grid_util::Point;
use rand::prelude::*;
use std::collections::VecDeque;
use warehouse_pathfinding::{find_path, is_valid_path, Cell, Robot, Warehouse};

fn random_warehouse(w: usize, h: usize, rng: &mut StdRng) -> Warehouse {
    let mut warehouse = Warehouse::new(w, h).unwrap();
    warehouse
        .place_robot(Robot::new(Point::new(0, 0)))
        .unwrap();
    warehouse
        .set_package(Point::new(w as i32 - 1, h as i32 - 1))
        .unwrap();
    let points = warehouse.points().collect::<Vec<_>>();
    for p in points {
        if warehouse.cell(p).unwrap() == Cell::Empty && rng.gen_bool(0.35) {
            warehouse.place_obstacle(p).unwrap();
        }
    }
    warehouse
}

/// Edge distance from the robot to the package by layered flood fill, if reachable.
fn flood_fill_distance(warehouse: &Warehouse) -> Option<usize> {
    let start = warehouse.robot()?;
    let goal = warehouse.package()?;
    let mut distance = vec![vec![None; warehouse.width()]; warehouse.height()];
    distance[start.y as usize][start.x as usize] = Some(0);
    let mut frontier = VecDeque::from([start]);
    while let Some(p) = frontier.pop_front() {
        let d = distance[p.y as usize][p.x as usize]?;
        if p == goal {
            return Some(d);
        }
        for n in [
            Point::new(p.x + 1, p.y),
            Point::new(p.x - 1, p.y),
            Point::new(p.x, p.y + 1),
            Point::new(p.x, p.y - 1),
        ] {
            if warehouse.is_traversable(n) && distance[n.y as usize][n.x as usize].is_none() {
                distance[n.y as usize][n.x as usize] = Some(d + 1);
                frontier.push_back(n);
            }
        }
    }
    None
}

fn visualize(warehouse: &Warehouse) {
    println!("{}", warehouse);
}

#[test]
fn fuzz() {
    const N_GRIDS: usize = 5000;
    let mut rng = StdRng::seed_from_u64(0);
    for (w, h) in [(5, 5), (10, 5), (12, 9)] {
        for _ in 0..N_GRIDS {
            let warehouse = random_warehouse(w, h, &mut rng);
            let expected = flood_fill_distance(&warehouse);
            let path = find_path(&warehouse).unwrap();
            if path.as_ref().map(|p| p.len() - 1) != expected {
                visualize(&warehouse);
            }
            assert_eq!(path.as_ref().map(|p| p.len() - 1), expected);
            if let Some(path) = path {
                assert!(is_valid_path(&path));
                assert_eq!(path[0], warehouse.robot().unwrap());
                assert_eq!(*path.last().unwrap(), warehouse.package().unwrap());
                for p in &path[1..path.len() - 1] {
                    assert_eq!(warehouse.cell(*p).unwrap(), Cell::Empty);
                }
            }
        }
    }
}

#[test]
fn fuzz_open_grids_are_manhattan() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let w = rng.gen_range(1..15);
        let h = rng.gen_range(1..15);
        let robot = Point::new(rng.gen_range(0..w) as i32, rng.gen_range(0..h) as i32);
        let package = Point::new(rng.gen_range(0..w) as i32, rng.gen_range(0..h) as i32);
        if robot == package {
            continue;
        }
        let mut warehouse = Warehouse::new(w, h).unwrap();
        warehouse.place_robot(Robot::new(robot)).unwrap();
        warehouse.set_package(package).unwrap();
        let path = find_path(&warehouse).unwrap().unwrap();
        assert_eq!(path.len() as i32, robot.manhattan_distance(&package) + 1);
    }
}
