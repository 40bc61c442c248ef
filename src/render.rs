use std::fmt::{self, Display};

use crate::dungeon::{EdgeType, Grid, Tile};

impl EdgeType {
    pub const fn north_glyph(self) -> char {
        if self.is_wall() {
            '_'
        } else {
            '.'
        }
    }

    pub const fn south_glyph(self) -> char {
        if self.is_wall() {
            '‾'
        } else {
            '\''
        }
    }

    /// Glyph for east and west edges.
    pub const fn side_glyph(self) -> char {
        if self.is_wall() {
            '|'
        } else {
            ':'
        }
    }
}

/// Draws each row as three lines: north edges, a numbered middle with the
/// west and east edges, then south edges. Tiles are numbered from 1 in
/// row-major order, padded to two digits.
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first_index = 1;
        for row in self.rows().iter().filter(|row| !row.is_empty()) {
            for tile in row {
                let n = tile.north.north_glyph();
                write!(f, "  {n}{n}   ")?;
            }
            writeln!(f)?;

            for (index, tile) in (first_index..).zip(row) {
                write_middle(f, index, tile)?;
            }
            writeln!(f)?;

            for tile in row {
                let s = tile.south.south_glyph();
                write!(f, "  {s}{s}   ")?;
            }
            writeln!(f)?;

            first_index += row.len();
        }
        Ok(())
    }
}

fn write_middle(f: &mut fmt::Formatter<'_>, index: usize, tile: &Tile) -> fmt::Result {
    write!(
        f,
        " {}{index:02}{}  ",
        tile.west.side_glyph(),
        tile.east.side_glyph()
    )
}

pub fn render(grid: &Grid) -> String {
    grid.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{EdgeType::Door, EdgeType::Wall, Position};

    #[test]
    fn single_walled_tile() {
        let grid = Grid::filled(1, 1, Door).unwrap();
        assert_eq!(render(&grid), "  __   \n |01|  \n  ‾‾   \n");
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(render(&grid), "");
        grid.start_row().unwrap();
        assert_eq!(render(&grid), "");
    }

    #[test]
    fn doors_and_running_index() {
        let grid = Grid::filled(2, 2, Door).unwrap();
        let expected = concat!(
            "  __     __   \n",
            " |01:   :02|  \n",
            "  ''     ''   \n",
            "  ..     ..   \n",
            " |03:   :04|  \n",
            "  ‾‾     ‾‾   \n",
        );
        assert_eq!(render(&grid), expected);
    }

    #[test]
    fn index_widens_past_99() {
        let grid = Grid::filled(101, 1, Wall).unwrap();
        let text = render(&grid);
        let middle = text.lines().nth(1).unwrap();
        assert!(middle.starts_with(" |01|   |02|"));
        assert!(middle.ends_with(" |100|   |101|  "));
    }

    #[test]
    fn partial_row_keeps_numbering() {
        let mut grid = Grid::new(2, 2).unwrap();
        for col in 0..2 {
            grid.insert(Position::new(0, col), Tile::uniform(Wall)).unwrap();
        }
        grid.insert(Position::new(1, 0), Tile::uniform(Wall)).unwrap();
        assert_eq!(render(&grid).lines().nth(4), Some(" |03|  "));
    }
}
