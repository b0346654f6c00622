use crate::CellState;
use crate::rule::Rule;
use crate::rule::RuleTable;

/// A one dimensional elementary cellular automaton on a ring of `size` cells.
///
/// Only the current generation is kept. The previous one lives on as scratch space in `next`,
/// which is where the following generation gets written before the two rows are swapped.
pub struct Automaton {
    rule: Rule,

    /// Transition table for `rule`.
    ///
    /// Indexing into this array with neighborhood `k` yields the next state of the middle cell.
    table: RuleTable,

    /// Current generation. Every state is either `0` or `1`.
    cells: Vec<CellState>,

    /// Scratch row, same length as `cells`
    next: Vec<CellState>,

    /// Number of times the automaton has advanced since construction
    generation: usize,
}

impl Automaton {
    /// Create an automaton with a single live cell at index `size / 2`.
    ///
    /// For even sizes this places the seed right of center.
    pub fn new(rule: Rule, size: usize) -> Self {
        assert!(size > 0, "automaton needs at least one cell");

        let mut cells = vec![0; size];
        cells[size / 2] = 1;

        Self::from_row(rule, cells)
    }

    /// Create an automaton whose generation 0 is `cells`. Any nonzero state counts as live.
    pub fn with_cells(rule: Rule, cells: &[CellState]) -> Self {
        assert!(!cells.is_empty(), "automaton needs at least one cell");

        let cells = cells.iter().map(|&c| (c != 0) as CellState).collect();

        Self::from_row(rule, cells)
    }

    fn from_row(rule: Rule, cells: Vec<CellState>) -> Self {
        let next = vec![0; cells.len()];

        Self {
            rule,
            table: rule.table(),
            cells,
            next,
            generation: 0,
        }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The current generation, one state per cell.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Step the automaton forward by one generation.
    ///
    /// The row is a ring: the left neighbor of cell `0` is cell `size - 1` and the right neighbor
    /// of cell `size - 1` is cell `0`.
    pub fn advance(&mut self) {
        let size = self.cells.len();
        let cells = &self.cells;

        for (i, next) in self.next.iter_mut().enumerate() {
            let left = cells[(i + size - 1) % size];
            let middle = cells[i];
            let right = cells[(i + 1) % size];

            *next = self.table[neighborhood(left, middle, right)];
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
    }

    /// Step the automaton forward by `n` generations.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}

/// Pack a neighborhood into the index of its rule table entry
#[inline]
fn neighborhood(left: CellState, middle: CellState, right: CellState) -> usize {
    ((left << 2) | (middle << 1) | right) as usize
}
