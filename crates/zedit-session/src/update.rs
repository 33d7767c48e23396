#![forbid(unsafe_code)]

//! Dirty-region update flags.
//!
//! The renderer consumes this mask once per frame and clears the bits it
//! drew; the session only ever ORs bits in. Several named reasons share a
//! bit on purpose: the renderer's redraw granularity is panel regions, and
//! e.g. a draw-mode toggle and a text-mode toggle both land in the middle
//! panel. The aliasing table is a fixed external contract — do not split
//! the shared bits.
//!
//! # Invariants
//!
//! 1. Compound flags contain their components: `CURSOR` ⊇ `PANEL_TOP`,
//!    `WORLD_TITLE` ⊇ `PANEL_TOP`, `ALL` = `BOARD` | `PANEL`.
//! 2. The session never clears bits; only [`clear`](Update::remove) by the
//!    renderer after drawing.

use bitflags::bitflags;

bitflags! {
    /// Which screen regions need redrawing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Update: u16 {
        /// Nothing at all.
        const NONE         = 0x000;
        /// The entire board.
        const BOARD        = 0x001;
        /// The entire side panel.
        const PANEL        = 0x002;
        /// Top area of the panel.
        const PANEL_TOP    = 0x004;
        /// Middle area of the panel.
        const PANEL_MIDDLE = 0x008;
        /// Bottom area of the panel.
        const PANEL_BOTTOM = 0x010;
        /// The cursor spot and its panel indicator.
        const CURSOR       = 0x020 | Self::PANEL_TOP.bits();
        /// The local neighborhood around the cursor.
        const SPOT         = 0x040;
        /// Title of the current board.
        const BOARD_TITLE  = 0x080;
        /// Title of the world; shown in the top panel.
        const WORLD_TITLE  = 0x100 | Self::PANEL_TOP.bits();
        /// Object count readout (alias: top panel).
        const OBJECT_COUNT = Self::PANEL_TOP.bits();
        /// Text entry mode indicator (alias: middle panel).
        const TEXT_MODE    = Self::PANEL_MIDDLE.bits();
        /// Draw mode indicator (alias: middle panel).
        const DRAW_MODE    = Self::PANEL_MIDDLE.bits();
        /// Blink mode indicator (alias: bottom panel).
        const BLINK_MODE   = Self::PANEL_BOTTOM.bits();
        /// Pattern selector, backbuffer, and acquire mode (alias: bottom panel).
        const PATTERNS     = Self::PANEL_BOTTOM.bits();
        /// Color selectors (alias: bottom panel).
        const COLOR        = Self::PANEL_BOTTOM.bits();
        /// Default color mode indicator (alias: bottom panel).
        const COLOR_MODE   = Self::PANEL_BOTTOM.bits();
        /// Everything.
        const ALL          = Self::BOARD.bits() | Self::PANEL.bits();
    }
}

impl Default for Update {
    fn default() -> Self {
        Self::NONE
    }
}
