#![forbid(unsafe_code)]

//! The editor session state machine.
//!
//! One [`EditorSession`] exists per editing session. It owns the cursor,
//! the mode flags, the drawing color, the pattern buffers, the selection,
//! and the dirty-region mask. Input is processed one event at a time,
//! synchronously: [`EditorSession::handle_event`] runs to completion
//! before the next event is accepted, and the only suspension points are
//! the modal dialog calls into the [`DialogHost`].
//!
//! The renderer is external: it reads [`EditorSession::updates`], draws,
//! and clears the bits it consumed with [`EditorSession::clear_updates`].
//! The session only ever ORs bits in, so no sub-change's flag can be
//! dropped within an event.

use crate::event::{Event, KeyCode, KeyEvent};
use crate::patbuffer::{AcquireMode, PatternBuffer};
use crate::selection::{Selection, SelectionMode};
use crate::update::Update;
use tracing::{debug, trace};
use zedit_dialog::{
    ParamDialog, ProgramEditor, apply_option, apply_option_delta, build_param_dialog,
    build_tile_info_dialog,
};
use zedit_world::{Tile, TileKind, World};

/// The current drawing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColor {
    /// Foreground index, 0..=15.
    pub foreground: u8,
    /// Background index, 0..=7.
    pub background: u8,
    /// Blink bit.
    pub blink: bool,
}

impl Default for TextColor {
    fn default() -> Self {
        Self {
            foreground: 0x0f,
            background: 0x00,
            blink: false,
        }
    }
}

impl TextColor {
    /// The packed attribute byte.
    #[must_use]
    pub const fn attribute(&self) -> u8 {
        (self.foreground & 0x0f)
            | ((self.background & 0x07) << 4)
            | if self.blink { 0x80 } else { 0 }
    }
}

/// Process-lifetime editor options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    /// Whether plotting a standard pattern recolors it with the current
    /// drawing color.
    pub color_standard_patterns: bool,
    /// Accept h/j/k/l as movement keys.
    pub vi_movement: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            color_standard_patterns: true,
            vi_movement: false,
        }
    }
}

/// Which pattern buffer plotting draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternSource {
    /// The fixed standard pattern strip.
    #[default]
    Standard,
    /// The acquired backbuffer.
    Backbuffer,
}

/// The standard pattern strip plus the growable backbuffer.
#[derive(Debug, Clone)]
pub struct Buffers {
    /// Fixed standard patterns.
    pub standard: PatternBuffer,
    /// Acquired tiles.
    pub backbuffer: PatternBuffer,
    /// The buffer plotting currently draws from.
    pub source: PatternSource,
}

impl Buffers {
    fn new() -> Self {
        Self {
            standard: PatternBuffer::standard(),
            backbuffer: PatternBuffer::new(vec![Tile::default()]),
            source: PatternSource::Standard,
        }
    }

    /// The tile plotting would stamp right now.
    #[must_use]
    pub fn current(&self) -> &Tile {
        match self.source {
            PatternSource::Standard => self.standard.current(),
            PatternSource::Backbuffer => self.backbuffer.current(),
        }
    }

    fn active_mut(&mut self) -> &mut PatternBuffer {
        match self.source {
            PatternSource::Standard => &mut self.standard,
            PatternSource::Backbuffer => &mut self.backbuffer,
        }
    }

    fn toggle_source(&mut self) {
        self.source = match self.source {
            PatternSource::Standard => PatternSource::Backbuffer,
            PatternSource::Backbuffer => PatternSource::Standard,
        };
    }
}

/// One user action inside an open parameter dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogAction {
    /// Index into the dialog's option list.
    pub option: usize,
    /// What to do with the option.
    pub kind: ActionKind,
}

/// The kind of edit requested on a dialog option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Single-step edit (cycle, +1, open the program editor).
    Step,
    /// Signed increment, clamped by the option.
    Delta(i32),
}

/// Modal collaborator that presents dialogs and the program text editor.
///
/// `next_action` blocks until the user acts; `None` dismisses the dialog
/// and returns control to the session. While a dialog is open no other
/// session state mutates.
pub trait DialogHost: ProgramEditor {
    /// Present the dialog and return the user's next action.
    fn next_action(&mut self, dialog: &ParamDialog) -> Option<DialogAction>;
}

/// The in-memory editing session.
///
/// Holds a mutable borrow of the world for its whole lifetime; the world
/// outlives the session.
#[derive(Debug)]
pub struct EditorSession<'w, W: World> {
    world: &'w mut W,
    cursor_x: u16,
    cursor_y: u16,
    updates: Update,
    quit: bool,
    last_key: Option<KeyEvent>,
    draw_mode: bool,
    gradient_mode: bool,
    acquire_mode: AcquireMode,
    text_entry: bool,
    default_color: bool,
    color: TextColor,
    buffers: Buffers,
    selection: Selection,
    options: EditorOptions,
}

impl<'w, W: World> EditorSession<'w, W> {
    /// Create a session over the given world.
    #[must_use]
    pub fn new(world: &'w mut W, options: EditorOptions) -> Self {
        let width = world.board_width();
        let height = world.board_height();
        Self {
            world,
            cursor_x: 0,
            cursor_y: 0,
            updates: Update::ALL,
            quit: false,
            last_key: None,
            draw_mode: false,
            gradient_mode: false,
            acquire_mode: AcquireMode::Off,
            text_entry: false,
            default_color: false,
            color: TextColor::default(),
            buffers: Buffers::new(),
            selection: Selection::new(width, height),
            options,
        }
    }

    /// Cursor position.
    #[must_use]
    pub const fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    /// Pending dirty-region flags.
    #[must_use]
    pub const fn updates(&self) -> Update {
        self.updates
    }

    /// Clear flags the renderer has consumed. Bits not in `consumed`
    /// survive to the next frame.
    pub fn clear_updates(&mut self, consumed: Update) {
        self.updates.remove(consumed);
    }

    /// Whether a quit was requested; the outer loop observes this and
    /// stops feeding events.
    #[must_use]
    pub const fn quit_requested(&self) -> bool {
        self.quit
    }

    /// The most recent key event.
    #[must_use]
    pub const fn last_key(&self) -> Option<KeyEvent> {
        self.last_key
    }

    /// Whether draw mode is on.
    #[must_use]
    pub const fn draw_mode(&self) -> bool {
        self.draw_mode
    }

    /// Whether gradient mode is on.
    #[must_use]
    pub const fn gradient_mode(&self) -> bool {
        self.gradient_mode
    }

    /// Current acquire mode.
    #[must_use]
    pub const fn acquire_mode(&self) -> AcquireMode {
        self.acquire_mode
    }

    /// Whether text entry mode is on.
    #[must_use]
    pub const fn text_entry(&self) -> bool {
        self.text_entry
    }

    /// Whether default-color mode is on.
    #[must_use]
    pub const fn default_color(&self) -> bool {
        self.default_color
    }

    /// Current drawing color.
    #[must_use]
    pub const fn color(&self) -> TextColor {
        self.color
    }

    /// The pattern buffers.
    #[must_use]
    pub const fn buffers(&self) -> &Buffers {
        &self.buffers
    }

    /// The selection state.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The world under edit.
    #[must_use]
    pub fn world(&self) -> &W {
        self.world
    }

    /// Process one input event to completion.
    ///
    /// A pending selection clear is resolved before the event's own
    /// effects, so `PendingClear` never survives into a second step.
    pub fn handle_event<H: DialogHost>(&mut self, event: Event, host: &mut H) {
        if self.selection.resolve_pending() {
            self.updates |= Update::BOARD;
        }
        match event {
            Event::Key(key) => {
                self.last_key = Some(key);
                self.handle_key(key, host);
            }
            Event::Resize { .. } => self.updates |= Update::ALL,
            Event::Tick => {}
        }
    }

    fn handle_key<H: DialogHost>(&mut self, key: KeyEvent, host: &mut H) {
        if self.text_entry && self.handle_text_key(key) {
            return;
        }
        match key.code {
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Char('h') if self.options.vi_movement => self.move_cursor(-1, 0),
            KeyCode::Char('j') if self.options.vi_movement => self.move_cursor(0, 1),
            KeyCode::Char('k') if self.options.vi_movement => self.move_cursor(0, -1),
            KeyCode::Char('l') if self.options.vi_movement => self.move_cursor(1, 0),
            KeyCode::Tab => {
                self.draw_mode = !self.draw_mode;
                debug!(draw_mode = self.draw_mode, "draw mode toggled");
                if self.draw_mode {
                    self.gradient_mode = false;
                    self.plot();
                }
                self.updates |= Update::DRAW_MODE;
            }
            KeyCode::Char('g') => {
                self.gradient_mode = !self.gradient_mode;
                debug!(gradient_mode = self.gradient_mode, "gradient mode toggled");
                self.updates |= Update::DRAW_MODE;
            }
            KeyCode::Char('a') => {
                self.acquire_mode = self.acquire_mode.next();
                debug!(acquire_mode = ?self.acquire_mode, "acquire mode cycled");
                self.updates |= Update::PATTERNS;
            }
            KeyCode::Char('t') => {
                self.text_entry = !self.text_entry;
                debug!(text_entry = self.text_entry, "text entry toggled");
                self.updates |= Update::TEXT_MODE;
            }
            KeyCode::Char('d') => {
                self.default_color = !self.default_color;
                self.updates |= Update::COLOR_MODE;
            }
            KeyCode::Char('c') => {
                self.color.foreground = (self.color.foreground + 1) % 16;
                self.updates |= Update::COLOR;
            }
            KeyCode::Char('C') => {
                self.color.background = (self.color.background + 1) % 8;
                self.updates |= Update::COLOR;
            }
            KeyCode::Char('v') => {
                self.color.blink = !self.color.blink;
                self.updates |= Update::BLINK_MODE;
            }
            KeyCode::Char('p') => {
                self.buffers.active_mut().advance();
                self.updates |= Update::PATTERNS;
            }
            KeyCode::Char('P') => {
                self.buffers.toggle_source();
                self.updates |= Update::PATTERNS;
            }
            KeyCode::Char(' ') => self.plot(),
            KeyCode::Char('x') => {
                self.selection
                    .start(SelectionMode::Area, self.cursor_x, self.cursor_y);
                self.updates |= Update::SPOT;
            }
            KeyCode::Char('b') => {
                self.selection
                    .start(SelectionMode::Block, self.cursor_x, self.cursor_y);
                self.updates |= Update::SPOT;
            }
            KeyCode::Enter => {
                let changed = self.modify_param(host);
                if changed {
                    self.updates |= Update::SPOT;
                }
            }
            KeyCode::Char('i') => self.tile_info(host),
            KeyCode::Escape => {
                if matches!(
                    self.selection.mode,
                    SelectionMode::Area | SelectionMode::Block
                ) {
                    self.selection.request_clear();
                } else {
                    debug!("quit requested");
                    self.quit = true;
                }
            }
            KeyCode::Char('q') => {
                debug!("quit requested");
                self.quit = true;
            }
            _ => {}
        }
    }

    /// Keys consumed by text entry mode. Returns whether the key was
    /// handled here.
    fn handle_text_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if (' '..='~').contains(&c) => {
                // Text tiles carry the glyph in the color field.
                self.world
                    .set_tile(self.cursor_x, self.cursor_y, Tile::new(TileKind::Text, c as u8));
                self.updates |= Update::SPOT;
                self.move_cursor(1, 0);
                true
            }
            KeyCode::Backspace => {
                self.move_cursor(-1, 0);
                self.world
                    .set_tile(self.cursor_x, self.cursor_y, Tile::default());
                self.updates |= Update::SPOT;
                true
            }
            KeyCode::Enter => {
                self.move_cursor(0, 1);
                true
            }
            KeyCode::Escape => {
                self.text_entry = false;
                self.updates |= Update::TEXT_MODE;
                true
            }
            _ => false,
        }
    }

    /// Move the cursor, clamping at the board edges.
    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let max_x = i32::from(self.world.board_width()) - 1;
        let max_y = i32::from(self.world.board_height()) - 1;
        let nx = (i32::from(self.cursor_x) + dx).clamp(0, max_x) as u16;
        let ny = (i32::from(self.cursor_y) + dy).clamp(0, max_y) as u16;
        if (nx, ny) == (self.cursor_x, self.cursor_y) {
            return;
        }
        self.cursor_x = nx;
        self.cursor_y = ny;
        trace!(x = nx, y = ny, "cursor moved");
        self.updates |= Update::CURSOR | Update::SPOT;

        if self.draw_mode {
            self.plot();
        }
        if self.acquire_mode != AcquireMode::Off {
            let tile = self.world.tile(nx, ny).clone();
            if self.buffers.backbuffer.acquire(&tile, self.acquire_mode) {
                self.buffers.source = PatternSource::Backbuffer;
                self.updates |= Update::PATTERNS;
            }
        }
        match self.selection.mode {
            SelectionMode::Area => {
                self.selection.extend(nx, ny);
                self.updates |= Update::SPOT;
            }
            SelectionMode::Block => {
                // The rectangle re-snaps, so anything may have unhighlighted.
                self.selection.extend(nx, ny);
                self.updates |= Update::BOARD;
            }
            SelectionMode::Off | SelectionMode::PendingClear => {}
        }
    }

    /// Stamp the current pattern at the cursor.
    fn plot(&mut self) {
        let mut tile = self.buffers.current().clone();
        let keep_own_color = self.default_color
            || (self.buffers.source == PatternSource::Standard
                && !self.options.color_standard_patterns);
        if !keep_own_color && tile.kind != TileKind::Text {
            tile.color = self.color.attribute();
        }
        self.world.set_tile(self.cursor_x, self.cursor_y, tile);
        self.updates |= Update::SPOT | Update::OBJECT_COUNT;
        if self.gradient_mode {
            self.buffers.active_mut().advance();
            self.updates |= Update::PATTERNS;
        }
    }

    /// Run the parameter dialog for the tile under the cursor, modally.
    ///
    /// The dialog is rebuilt after every accepted edit so displayed values
    /// stay current. Returns whether the tile changed.
    fn modify_param<H: DialogHost>(&mut self, host: &mut H) -> bool {
        let (x, y) = (self.cursor_x, self.cursor_y);
        debug!(x, y, "param dialog opened");
        let mut dialog = build_param_dialog(&*self.world, x, y);
        let mut changed = false;
        while let Some(action) = host.next_action(&dialog) {
            let option = dialog.options[action.option];
            let applied = match action.kind {
                ActionKind::Step => apply_option(&mut *self.world, x, y, &option, host),
                ActionKind::Delta(delta) => {
                    apply_option_delta(&mut *self.world, x, y, &option, delta)
                }
            };
            if applied {
                changed = true;
                dialog = build_param_dialog(&*self.world, x, y);
            }
        }
        changed
    }

    /// Show the read-only tile info summary, modally.
    fn tile_info<H: DialogHost>(&mut self, host: &mut H) {
        let dialog = build_tile_info_dialog(&*self.world, self.cursor_x, self.cursor_y);
        while host.next_action(&dialog).is_some() {}
    }
}
