/// A single character cell of the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Cell {
    Blank,
    Label(char),
    Connector(char),
}
impl Cell {
    #[inline]
    pub(super) const fn char(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Label(c) | Self::Connector(c) => c,
        }
    }
    #[inline]
    pub(super) const fn is_label(self) -> bool {
        matches!(self, Self::Label(..))
    }
}

/// A grid of cells which grows as things are drawn onto it. Rows end at their last drawn cell.
#[derive(Clone, Debug, Default)]
pub(super) struct Canvas {
    rows: Vec<Vec<Cell>>,
}
impl Canvas {
    pub(super) fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }
    pub(super) fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
    /// Overwrites the cell, growing the canvas if needed.
    pub(super) fn put(&mut self, row: usize, column: usize, cell: Cell) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let row = &mut self.rows[row];
        if row.len() <= column {
            row.resize(column + 1, Cell::Blank);
        }
        row[column] = cell;
    }
    pub(super) fn write_label(&mut self, row: usize, column: usize, text: &str) {
        for (i, c) in text.chars().enumerate() {
            self.put(row, column + i, Cell::Label(c));
        }
    }
    /// Draws a horizontal connector from `from` to `to`, with the specified characters at its ends.
    pub(super) fn draw_link(&mut self, row: usize, ends: (char, char), from: usize, to: usize) {
        self.put(row, from, Cell::Connector(ends.0));
        for column in (from + 1)..to {
            self.put(row, column, Cell::Connector('─'));
        }
        self.put(row, to, Cell::Connector(ends.1));
    }
}
