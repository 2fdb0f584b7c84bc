//! The 3x3 recipe grid and its compact string identifier.
//!
//! A grid identifier is nine row-major cell digits, a `:` and the element
//! code letter, e.g. `100020001:R`:
//!
//! ```text
//! 1 0 0
//! 0 2 0     element R (火系)
//! 0 0 1
//! ```
//!
//! The format is canonical: decoding and re-encoding any accepted
//! identifier reproduces it byte for byte.

use std::fmt;

use crate::element::ElementTag;
use crate::error::GridError;

/// Cells per side.
pub const GRID_SIDE: usize = 3;
/// Cells per grid.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;
/// Separator between the cell digits and the element code.
pub const TAG_SEPARATOR: char = ':';

/// State of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridCell {
    #[default]
    Empty,
    Circle,
    Star,
}

impl GridCell {
    pub fn value(self) -> u8 {
        match self {
            GridCell::Empty => 0,
            GridCell::Circle => 1,
            GridCell::Star => 2,
        }
    }

    pub fn from_value(value: u8) -> Option<GridCell> {
        match value {
            0 => Some(GridCell::Empty),
            1 => Some(GridCell::Circle),
            2 => Some(GridCell::Star),
            _ => None,
        }
    }

    pub fn digit(self) -> char {
        char::from(b'0' + self.value())
    }

    pub fn from_digit(c: char) -> Option<GridCell> {
        match c {
            '0' => Some(GridCell::Empty),
            '1' => Some(GridCell::Circle),
            '2' => Some(GridCell::Star),
            _ => None,
        }
    }

    /// The state a click moves this cell to: Empty → Circle → Star → Empty.
    pub fn next(self) -> GridCell {
        match self {
            GridCell::Empty => GridCell::Circle,
            GridCell::Circle => GridCell::Star,
            GridCell::Star => GridCell::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == GridCell::Empty
    }
}

/// Nine cells in row-major order.
///
/// A `Grid` may be all empty while it is being edited; the non-empty rule is
/// enforced by [`encode`] and [`decode`], not by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid([GridCell; GRID_CELLS]);

impl Grid {
    /// An all-empty grid, the starting state of an editor.
    pub fn new() -> Self {
        Grid::default()
    }

    pub fn from_cells(cells: [GridCell; GRID_CELLS]) -> Self {
        Grid(cells)
    }

    pub fn cells(&self) -> &[GridCell; GRID_CELLS] {
        &self.0
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        if row >= GRID_SIDE || col >= GRID_SIDE {
            return None;
        }
        Some(self.0[row * GRID_SIDE + col])
    }

    /// Rows top to bottom, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.0.chunks(GRID_SIDE)
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|c| c.is_empty())
    }

    /// Apply one click to the cell at `index` and return its new state.
    pub fn advance(&mut self, index: usize) -> Result<GridCell, GridError> {
        let cell = self
            .0
            .get_mut(index)
            .ok_or(GridError::CellOutOfRange { index })?;
        *cell = cell.next();
        Ok(*cell)
    }

    /// Replay a sequence of clicks on an empty grid.
    pub fn from_clicks(clicks: &[usize]) -> Result<Grid, GridError> {
        let mut grid = Grid::new();
        for &index in clicks {
            grid.advance(index)?;
        }
        Ok(grid)
    }

    pub fn clear(&mut self) {
        self.0 = [GridCell::Empty; GRID_CELLS];
    }

    /// Parse hand-written cell digits such as `100020001`, `1,0,0,0,2,0,0,0,1`
    /// or `100/020/001`. Commas, slashes and whitespace are ignored.
    ///
    /// Unlike [`decode`] this accepts an all-empty grid; it describes an
    /// editor state, not an identifier.
    pub fn parse_cells(text: &str) -> Result<Grid, GridError> {
        let mut values = Vec::with_capacity(GRID_CELLS);
        for c in text.chars() {
            if c == ',' || c == '/' || c.is_whitespace() {
                continue;
            }
            let value = c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or_else(|| GridError::InvalidGrid(format!("'{}' is not a cell digit", c)))?;
            values.push(value);
        }
        Grid::try_from(values.as_slice())
    }

    /// The nine cell digits, without element code.
    pub fn digits(&self) -> String {
        self.0.iter().map(|c| c.digit()).collect()
    }

    /// Encode this grid with `tag`; see [`encode`].
    pub fn encode(&self, tag: ElementTag) -> Result<String, GridError> {
        encode(&self.0, tag)
    }
}

impl TryFrom<&[GridCell]> for Grid {
    type Error = GridError;

    fn try_from(cells: &[GridCell]) -> Result<Self, Self::Error> {
        let cells: [GridCell; GRID_CELLS] = cells.try_into().map_err(|_| {
            GridError::InvalidGrid(format!(
                "expected {} cells, got {}",
                GRID_CELLS,
                cells.len()
            ))
        })?;
        Ok(Grid(cells))
    }
}

impl TryFrom<&[u8]> for Grid {
    type Error = GridError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        if values.len() != GRID_CELLS {
            return Err(GridError::InvalidGrid(format!(
                "expected {} cells, got {}",
                GRID_CELLS,
                values.len()
            )));
        }
        let mut cells = [GridCell::Empty; GRID_CELLS];
        for (i, &value) in values.iter().enumerate() {
            cells[i] = GridCell::from_value(value).ok_or_else(|| {
                GridError::InvalidGrid(format!("cell {} has value {}, expected 0, 1 or 2", i, value))
            })?;
        }
        Ok(Grid(cells))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits())
    }
}

/// Encode nine cells and an element tag into a grid identifier.
pub fn encode(cells: &[GridCell], tag: ElementTag) -> Result<String, GridError> {
    let grid = Grid::try_from(cells)?;
    if grid.is_empty() {
        return Err(GridError::EmptyGrid);
    }
    let mut id = grid.digits();
    id.push(TAG_SEPARATOR);
    id.push(tag.code());
    Ok(id)
}

/// Encode loosely typed form input: raw cell values and an optional tag
/// name.
///
/// Checks run in order: cell count and values (`InvalidGrid`), at least one
/// non-empty cell (`EmptyGrid`), then the tag (`InvalidTag`, also for a
/// missing tag).
pub fn encode_values(values: &[u8], tag: Option<&str>) -> Result<String, GridError> {
    let grid = Grid::try_from(values)?;
    if grid.is_empty() {
        return Err(GridError::EmptyGrid);
    }
    let tag: ElementTag = tag
        .ok_or_else(|| GridError::InvalidTag(String::new()))?
        .parse()?;
    grid.encode(tag)
}

/// Decode and validate a grid identifier.
///
/// Checks run in order: separator present (`MissingTag`), element code
/// (`InvalidTag`), nine cell characters (`InvalidLength`), each cell a `0`,
/// `1` or `2` (`InvalidCharacter`), at least one non-empty cell
/// (`EmptyGrid`). Non-digit characters are reported before out-of-range
/// digits so the first foreign character is the one named.
pub fn decode(id: &str) -> Result<(Grid, ElementTag), GridError> {
    let (body, code) = id.split_once(TAG_SEPARATOR).ok_or(GridError::MissingTag)?;

    let mut code_chars = code.chars();
    let tag = match (code_chars.next(), code_chars.next()) {
        (Some(c), None) => ElementTag::from_code(c),
        _ => None,
    }
    .ok_or_else(|| GridError::InvalidTag(code.to_string()))?;

    let len = body.chars().count();
    if len != GRID_CELLS {
        return Err(GridError::InvalidLength(len));
    }

    if let Some(c) = body.chars().find(|c| !c.is_ascii_digit()) {
        return Err(GridError::InvalidCharacter(c));
    }
    let mut cells = [GridCell::Empty; GRID_CELLS];
    for (slot, c) in cells.iter_mut().zip(body.chars()) {
        *slot = GridCell::from_digit(c).ok_or(GridError::InvalidCharacter(c))?;
    }

    let grid = Grid(cells);
    if grid.is_empty() {
        return Err(GridError::EmptyGrid);
    }
    Ok((grid, tag))
}
