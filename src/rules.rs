use crate::grid::GridState;

/// Counts live cells among the up-to-8 neighbors of (row, col).
///
/// Positions falling outside the grid are skipped, so edge and corner cells
/// simply see fewer neighbors. Always reads from the snapshot it is given.
pub fn count_live_neighbors(snapshot: &GridState, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for dr in [-1i64, 0, 1] {
        for dc in [-1i64, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }
            let nr = row as i64 + dr;
            let nc = col as i64 + dc;
            if nr < 0 || nc < 0 || nr >= snapshot.rows() as i64 || nc >= snapshot.cols() as i64 {
                continue;
            }
            if snapshot
                .get(nr as usize, nc as usize)
                .unwrap_or(false)
            {
                count += 1;
            }
        }
    }
    count
}

/// Conway's rule as a single exhaustive match.
///
/// Exactly one outcome applies per cell per step. Keeping this a total
/// function over (alive, neighbor count) rules out the classic bug where
/// sequential ifs mark a cell dead and then immediately alive again within
/// the same step.
pub fn next_cell_state(was_alive: bool, live_neighbors: u8) -> bool {
    match (was_alive, live_neighbors) {
        (true, n) if n < 2 => false, // underpopulation
        (true, n) if n > 3 => false, // overpopulation
        (true, _) => true,           // 2 or 3 neighbors, stable
        (false, 3) => true,          // birth
        (false, _) => false,
    }
}

/// Computes the next generation as a pure function of a snapshot.
///
/// The snapshot is taken before any cell is written, so every neighbor count
/// sees the prior generation only.
pub fn step_generation(grid: &GridState) -> GridState {
    let snapshot = grid.snapshot();
    let mut next = snapshot.clone();
    for row in 0..snapshot.rows() {
        for col in 0..snapshot.cols() {
            let was_alive = snapshot.get(row, col).unwrap_or(false);
            let neighbors = count_live_neighbors(&snapshot, row, col);
            // indices stay in range, the loop runs over the grid's own bounds
            let _ = next.set(row, col, next_cell_state(was_alive, neighbors));
        }
    }
    next
}
