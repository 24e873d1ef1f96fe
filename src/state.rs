pub const GRID_ROWS: usize = 7;
pub const GRID_COLS: usize = 53;
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The 7×53 boolean paint surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    pub fn new() -> Self {
        // One allocation per row; rows must never share storage.
        let rows = (0..GRID_ROWS).map(|_| vec![false; GRID_COLS]).collect();
        Self { rows }
    }

    pub fn get(&self, pos: CellPosition) -> bool {
        self.rows[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: CellPosition, value: bool) {
        self.rows[pos.row][pos.col] = value;
    }

    pub fn toggle(&mut self, pos: CellPosition) {
        let value = self.get(pos);
        self.set(pos, !value);
    }

    /// Visit every cell in column-major order (week by week, Sunday first).
    pub fn cells(&self) -> impl Iterator<Item = (CellPosition, bool)> + '_ {
        (0..GRID_COLS).flat_map(move |col| {
            (0..GRID_ROWS).map(move |row| {
                let pos = CellPosition::new(row, col);
                (pos, self.rows[pos.row][pos.col])
            })
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintMode {
    Idle,
    Drawing { last: CellPosition },
}

/// Owns the paint grid and the pointer interaction state that mutates it.
/// Free of rendering concerns so the transitions can be driven directly.
pub struct GridEditor {
    grid: Grid,
    mode: PaintMode,
    hovered: Option<CellPosition>,
}

impl GridEditor {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            mode: PaintMode::Idle,
            hovered: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn hovered(&self) -> Option<CellPosition> {
        self.hovered
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.mode, PaintMode::Drawing { .. })
    }

    /// Pointer pressed on a cell: toggle it and start painting.
    pub fn pointer_down(&mut self, pos: CellPosition) {
        self.grid.toggle(pos);
        self.mode = PaintMode::Drawing { last: pos };
    }

    /// Pointer moved onto a cell. Always records the hovered cell; while
    /// painting, a cell other than the last painted one gets toggled, so a
    /// stream of move events inside one cell paints it only once.
    pub fn pointer_enter(&mut self, pos: CellPosition) {
        self.hovered = Some(pos);
        if let PaintMode::Drawing { last } = self.mode {
            if pos != last {
                self.grid.toggle(pos);
                self.mode = PaintMode::Drawing { last: pos };
            }
        }
    }

    /// Pointer released anywhere: stop painting.
    pub fn pointer_up(&mut self) {
        self.mode = PaintMode::Idle;
    }
}

impl Default for GridEditor {
    fn default() -> Self {
        Self::new()
    }
}
