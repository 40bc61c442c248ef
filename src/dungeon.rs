use std::str::FromStr;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use tracing::{debug, span, trace, Level};

use crate::error::GridError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeType {
    Wall,
    Door,
}

impl EdgeType {
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}

impl TryFrom<u8> for EdgeType {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Wall),
            1 => Ok(Self::Door),
            other => Err(GridError::Validation {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for EdgeType {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("wall") {
            Ok(Self::Wall)
        } else if s.eq_ignore_ascii_case("door") {
            Ok(Self::Door)
        } else {
            Err(GridError::Validation {
                value: s.to_owned(),
            })
        }
    }
}

/// Uniform over `Wall` and `Door`.
impl Distribution<EdgeType> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> EdgeType {
        if rng.gen::<bool>() {
            EdgeType::Door
        } else {
            EdgeType::Wall
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub north: EdgeType,
    pub south: EdgeType,
    pub east: EdgeType,
    pub west: EdgeType,
}

impl Tile {
    pub const fn new(north: EdgeType, south: EdgeType, east: EdgeType, west: EdgeType) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    pub const fn uniform(edge: EdgeType) -> Self {
        Self::new(edge, edge, edge, edge)
    }

    /// Builds a tile from raw edge codes in north, south, east, west order,
    /// where `0` is a wall and `1` a door.
    pub fn from_raw(raw: [u8; 4]) -> Result<Self, GridError> {
        let [north, south, east, west] = raw;
        Ok(Self::new(
            north.try_into()?,
            south.try_into()?,
            east.try_into()?,
            west.try_into()?,
        ))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    pub width: usize,
    pub height: usize,
}

/// Forces the outward-facing edges of a boundary tile to `Wall`.
/// Edges that face another tile are left as supplied.
pub const fn normalize(tile: Tile, pos: Position, shape: Shape) -> Tile {
    let mut tile = tile;
    if pos.row == 0 {
        tile.north = EdgeType::Wall;
    }
    if pos.row + 1 == shape.height {
        tile.south = EdgeType::Wall;
    }
    if pos.col == 0 {
        tile.west = EdgeType::Wall;
    }
    if pos.col + 1 == shape.width {
        tile.east = EdgeType::Wall;
    }
    tile
}

/// A rectangular arrangement of tiles, filled row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    shape: Shape,
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Dimensions { width, height });
        }
        Ok(Self {
            shape: Shape { width, height },
            rows: Vec::with_capacity(height),
        })
    }

    /// Builds a complete grid where every edge candidate is `edge`.
    pub fn filled(width: usize, height: usize, edge: EdgeType) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for row in 0..height {
            for col in 0..width {
                grid.insert(Position::new(row, col), Tile::uniform(edge))?;
            }
        }
        Ok(grid)
    }

    pub const fn width(&self) -> usize {
        self.shape.width
    }

    pub const fn height(&self) -> usize {
        self.shape.height
    }

    pub const fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.tile_count() == self.shape.width * self.shape.height
    }

    pub fn start_row(&mut self) -> Result<(), GridError> {
        if self.rows.len() >= self.shape.height {
            return Err(GridError::Capacity {
                what: "rows",
                limit: self.shape.height,
            });
        }
        self.rows.push(Vec::with_capacity(self.shape.width));
        debug!(row = self.rows.len() - 1, "started row");
        Ok(())
    }

    /// Appends a tile to the current row, normalized against the grid border.
    /// Returns the tile as stored.
    pub fn append_tile(&mut self, candidates: Tile) -> Result<Tile, GridError> {
        let row = self.rows.last().ok_or(GridError::State)?;
        if row.len() >= self.shape.width {
            return Err(GridError::Capacity {
                what: "tiles per row",
                limit: self.shape.width,
            });
        }
        let pos = Position::new(self.rows.len() - 1, row.len());
        Ok(self.place(pos, candidates))
    }

    /// Inserts a tile at an explicit position, starting a new row when `pos`
    /// is the first column of the next row. Only the next free slot in
    /// row-major order is accepted.
    pub fn insert(&mut self, pos: Position, candidates: Tile) -> Result<Tile, GridError> {
        let expected = self.next_slot().ok_or(GridError::Capacity {
            what: "tiles",
            limit: self.shape.width * self.shape.height,
        })?;
        if pos != expected {
            return Err(GridError::OutOfOrder {
                expected_row: expected.row,
                expected_col: expected.col,
                row: pos.row,
                col: pos.col,
            });
        }
        if pos.row == self.rows.len() {
            self.start_row()?;
        }
        Ok(self.place(pos, candidates))
    }

    fn next_slot(&self) -> Option<Position> {
        match self.rows.last() {
            None => Some(Position::new(0, 0)),
            Some(row) if row.len() < self.shape.width => {
                Some(Position::new(self.rows.len() - 1, row.len()))
            }
            Some(_) if self.rows.len() < self.shape.height => {
                Some(Position::new(self.rows.len(), 0))
            }
            Some(_) => None,
        }
    }

    // `pos` has already been checked against the current row.
    fn place(&mut self, pos: Position, candidates: Tile) -> Tile {
        let tile = normalize(candidates, pos, self.shape);
        trace!(row = pos.row, col = pos.col, ?tile, "placed tile");
        self.rows[pos.row].push(tile);
        tile
    }
}

/// Populates grids with randomly chosen edges.
pub struct Dungeon<R> {
    rng: R,
}

impl<R: Rng> Dungeon<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn random_tile(&mut self) -> Tile {
        let north = self.rng.gen();
        let south = self.rng.gen();
        let east = self.rng.gen();
        let west = self.rng.gen();
        Tile::new(north, south, east, west)
    }

    pub fn generate(&mut self, width: usize, height: usize) -> Result<Grid, GridError> {
        let span = span!(Level::DEBUG, "generate", width, height);
        let _guard = span.enter();

        let mut grid = Grid::new(width, height)?;
        for _ in 0..height {
            grid.start_row()?;
            for _ in 0..width {
                let candidates = self.random_tile();
                grid.append_tile(candidates)?;
            }
        }

        debug!(tiles = grid.tile_count(), "generated grid");
        Ok(grid)
    }
}

/// Generates a `width` x `height` grid using the thread-local RNG.
pub fn generate_random(width: usize, height: usize) -> Result<Grid, GridError> {
    Dungeon::new(rand::thread_rng()).generate(width, height)
}
