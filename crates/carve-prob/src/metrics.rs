//! Grid-analysis metrics shared by concrete problems.
//!
//! All analyses run over the tile-name view ([`StringMap`]) so they are
//! independent of vocabulary index assignment. Connectivity is
//! 4-connected (cardinal neighbors) throughout.

use carve_core::StringMap;
use std::collections::VecDeque;

const NEIGHBOURS: [(i64, i64); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Number of cells holding `tile`.
pub fn count_tiles(map: &StringMap, tile: &str) -> u32 {
    map.iter().filter(|&(_, _, name)| name == tile).count() as u32
}

/// Number of 4-connected regions formed by the `passable` tile classes.
pub fn count_regions(map: &StringMap, passable: &[&str]) -> u32 {
    let (w, h) = (map.width(), map.height());
    let mut visited = vec![false; (w as usize) * (h as usize)];
    let idx = |x: u32, y: u32| (y as usize) * (w as usize) + (x as usize);

    let mut regions = 0;
    for y in 0..h {
        for x in 0..w {
            if visited[idx(x, y)] || !passable.contains(&map.get(x, y)) {
                continue;
            }
            regions += 1;
            let mut queue = VecDeque::new();
            visited[idx(x, y)] = true;
            queue.push_back((x, y));
            while let Some((cx, cy)) = queue.pop_front() {
                for (nx, ny) in in_bounds_neighbours(cx, cy, w, h) {
                    if !visited[idx(nx, ny)] && passable.contains(&map.get(nx, ny)) {
                        visited[idx(nx, ny)] = true;
                        queue.push_back((nx, ny));
                    }
                }
            }
        }
    }
    regions
}

/// Length (in steps) of the longest shortest path over `passable` cells.
///
/// Per region: breadth-first search from an arbitrary cell finds the
/// farthest cell, a second search from there measures the region's
/// diameter. The maximum over all regions is returned; a grid with no
/// passable cells (or only isolated ones) measures 0.
pub fn longest_path(map: &StringMap, passable: &[&str]) -> u32 {
    let (w, h) = (map.width(), map.height());
    let mut seen = vec![false; (w as usize) * (h as usize)];
    let idx = |x: u32, y: u32| (y as usize) * (w as usize) + (x as usize);

    let mut longest = 0;
    for y in 0..h {
        for x in 0..w {
            if seen[idx(x, y)] || !passable.contains(&map.get(x, y)) {
                continue;
            }
            let first = bfs(map, (x, y), passable);
            for (i, d) in first.dist.iter().enumerate() {
                if *d >= 0 {
                    seen[i] = true;
                }
            }
            let second = bfs(map, first.farthest, passable);
            longest = longest.max(second.max_dist);
        }
    }
    longest
}

struct BfsResult {
    dist: Vec<i64>,
    farthest: (u32, u32),
    max_dist: u32,
}

fn bfs(map: &StringMap, start: (u32, u32), passable: &[&str]) -> BfsResult {
    let (w, h) = (map.width(), map.height());
    let idx = |x: u32, y: u32| (y as usize) * (w as usize) + (x as usize);
    let mut dist = vec![-1i64; (w as usize) * (h as usize)];
    let mut queue = VecDeque::new();
    dist[idx(start.0, start.1)] = 0;
    queue.push_back(start);

    let mut farthest = start;
    let mut max_dist = 0i64;
    while let Some((cx, cy)) = queue.pop_front() {
        let d = dist[idx(cx, cy)];
        if d > max_dist {
            max_dist = d;
            farthest = (cx, cy);
        }
        for (nx, ny) in in_bounds_neighbours(cx, cy, w, h) {
            if dist[idx(nx, ny)] < 0 && passable.contains(&map.get(nx, ny)) {
                dist[idx(nx, ny)] = d + 1;
                queue.push_back((nx, ny));
            }
        }
    }
    BfsResult {
        dist,
        farthest,
        max_dist: max_dist as u32,
    }
}

fn in_bounds_neighbours(x: u32, y: u32, w: u32, h: u32) -> impl Iterator<Item = (u32, u32)> {
    NEIGHBOURS.iter().filter_map(move |&(dx, dy)| {
        let nx = i64::from(x) + dx;
        let ny = i64::from(y) + dy;
        if nx >= 0 && ny >= 0 && nx < i64::from(w) && ny < i64::from(h) {
            Some((nx as u32, ny as u32))
        } else {
            None
        }
    })
}
