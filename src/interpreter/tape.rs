/// Memory of the machine, unbounded in both directions.
///
/// Cells live in one contiguous buffer; `first` is the tape position of `cells[0]`.
/// Anything outside the buffer reads as zero and writing there grows the buffer
/// on that side.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
    first: isize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(super::DEFAULT_TAPE_SIZE)
    }
}

impl Tape {
    /// `capacity` cells are allocated up front, split around position 0
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            cells: vec![0; capacity],
            first: -((capacity / 2) as isize),
        }
    }

    /// Number of cells currently materialized
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn index_of(&self, pos: isize) -> Option<usize> {
        let index = usize::try_from(pos.checked_sub(self.first)?).ok()?;
        (index < self.cells.len()).then_some(index)
    }

    pub fn get(&self, pos: isize) -> u8 {
        self.index_of(pos).map_or(0, |i| self.cells[i])
    }

    pub fn set(&mut self, pos: isize, value: u8) {
        let index = self.materialize(pos);
        self.cells[index] = value;
    }

    pub fn add(&mut self, pos: isize, by: u8) {
        let index = self.materialize(pos);
        self.cells[index] = self.cells[index].wrapping_add(by);
    }

    pub fn sub(&mut self, pos: isize, by: u8) {
        let index = self.materialize(pos);
        self.cells[index] = self.cells[index].wrapping_sub(by);
    }

    /// No bounds, the tape grows once the new position is written to
    pub fn advance(pointer: isize, delta: isize) -> isize {
        pointer.wrapping_add(delta)
    }

    /// Grows the buffer until `pos` is inside it and returns its index
    fn materialize(&mut self, pos: isize) -> usize {
        if let Some(index) = self.index_of(pos) {
            return index;
        }

        let len = self.cells.len();
        if pos < self.first {
            // grow to the left, existing cells move right
            let missing = self.first.abs_diff(pos);
            let extra = missing.max(len);
            let mut cells = vec![0; extra + len];
            cells[extra..].copy_from_slice(&self.cells);
            self.cells = cells;
            self.first -= extra as isize;
        } else {
            let missing = pos.abs_diff(self.first) + 1 - len;
            let extra = missing.max(len);
            self.cells.resize(len + extra, 0);
        }

        pos.abs_diff(self.first)
    }
}
