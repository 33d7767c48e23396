#![forbid(unsafe_code)]

//! Board cell selection.
//!
//! Selection has a mode, an anchor, and the set of selected cells.
//! [`SelectionMode::PendingClear`] is a one-shot transitional state: the
//! session must resolve it to `Off` before processing the next event, so
//! the renderer gets exactly one frame to erase the highlight.

/// The selection state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection.
    #[default]
    Off,
    /// Free-form selection extended cell by cell.
    Area,
    /// Rectangular selection snapped between anchor and cursor.
    Block,
    /// Selection must be cleared on the next tick.
    PendingClear,
}

/// A set of selected board cells, row-major.
#[derive(Debug, Clone)]
pub struct CellSet {
    width: u16,
    height: u16,
    cells: Vec<bool>,
}

impl CellSet {
    /// An empty set covering a board of the given size.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "cell set width must be > 0");
        assert!(height > 0, "cell set height must be > 0");
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} selection grid",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Whether the cell at (x, y) is selected.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Select the cell at (x, y).
    #[inline]
    pub fn set(&mut self, x: u16, y: u16) {
        let idx = self.index(x, y);
        self.cells[idx] = true;
    }

    /// Select every cell in the rectangle spanned by the two corners,
    /// inclusive on both ends.
    pub fn set_block(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.set(x, y);
            }
        }
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of selected cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }
}

/// Selection mode plus anchor plus selected cells.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Current mode.
    pub mode: SelectionMode,
    /// Anchor coordinate; meaningful only while `mode` is not `Off`.
    anchor: Option<(u16, u16)>,
    /// Membership grid.
    pub cells: CellSet,
}

impl Selection {
    /// An off selection for a board of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            mode: SelectionMode::Off,
            anchor: None,
            cells: CellSet::new(width, height),
        }
    }

    /// The anchor coordinate.
    ///
    /// # Panics
    ///
    /// Panics when the selection is off; the anchor is defined only while
    /// a selection is underway.
    #[must_use]
    pub fn anchor(&self) -> (u16, u16) {
        self.anchor.expect("selection anchor requires an active selection")
    }

    /// Begin a selection of the given mode anchored at (x, y).
    pub fn start(&mut self, mode: SelectionMode, x: u16, y: u16) {
        debug_assert!(matches!(mode, SelectionMode::Area | SelectionMode::Block));
        self.mode = mode;
        self.anchor = Some((x, y));
        self.cells.clear();
        self.cells.set(x, y);
    }

    /// Extend the selection toward (x, y): area mode adds the single cell,
    /// block mode re-snaps the rectangle from the anchor.
    pub fn extend(&mut self, x: u16, y: u16) {
        match self.mode {
            SelectionMode::Area => self.cells.set(x, y),
            SelectionMode::Block => {
                let (ax, ay) = self.anchor();
                self.cells.clear();
                self.cells.set_block(ax, ay, x, y);
            }
            SelectionMode::Off | SelectionMode::PendingClear => {}
        }
    }

    /// Mark the selection for clearing on the next tick.
    pub fn request_clear(&mut self) {
        if self.mode != SelectionMode::Off {
            self.mode = SelectionMode::PendingClear;
        }
    }

    /// Resolve a pending clear. Returns whether a clear happened.
    ///
    /// Must run before each event is interpreted so `PendingClear` never
    /// survives two consecutive steps.
    pub fn resolve_pending(&mut self) -> bool {
        if self.mode != SelectionMode::PendingClear {
            return false;
        }
        self.mode = SelectionMode::Off;
        self.anchor = None;
        self.cells.clear();
        true
    }
}
