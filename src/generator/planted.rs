use crate::types::Coord2;

use super::*;

/// Plants mines at an explicit list of positions. Used by tests that need a
/// known layout and by frontends replaying a recorded one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlantedMineGenerator {
    mines: Vec<Coord2>,
}

impl PlantedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for PlantedMineGenerator {
    fn place(&mut self, grid: &mut Array2<Cell>, mine_count: usize) {
        let (rows, cols) = grid.dim();

        for &(row, col) in &self.mines {
            if row < rows && col < cols {
                grid[(row, col)].set_mine();
            } else {
                log::warn!("planted mine ({row}, {col}) outside {rows}x{cols} grid, skipped");
            }
        }

        let armed = grid.iter().filter(|cell| cell.is_mined()).count();
        if armed != mine_count {
            log::warn!("planted layout armed {armed} mines, board expects {mine_count}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plants_exactly_the_given_positions() {
        let mut grid: Array2<Cell> = Array2::default((3, 3));
        PlantedMineGenerator::new([(1, 1), (0, 2)]).place(&mut grid, 2);

        assert!(grid[(1, 1)].is_mined());
        assert!(grid[(0, 2)].is_mined());
        assert_eq!(grid.iter().filter(|cell| cell.is_mined()).count(), 2);
    }

    #[test]
    fn out_of_bounds_positions_are_skipped() {
        let mut grid: Array2<Cell> = Array2::default((2, 2));
        PlantedMineGenerator::new([(0, 0), (5, 5)]).place(&mut grid, 2);

        assert_eq!(grid.iter().filter(|cell| cell.is_mined()).count(), 1);
    }
}
