//! End-to-end session scenarios: one scripted input event at a time
//! through `EditorSession::handle_event`, checking state and the dirty
//! flags each step raises.

use std::collections::VecDeque;
use zedit_dialog::{ParamDialog, ProgramEditor};
use zedit_session::{
    AcquireMode, ActionKind, DialogAction, DialogHost, EditorOptions, EditorSession, Event,
    KeyCode, KeyEvent, SelectionMode, Update,
};
use zedit_world::{MemoryWorld, Param, Tile, TileKind, World};

/// A host whose dialogs nobody interacts with.
struct NoHost;

impl ProgramEditor for NoHost {
    fn edit(&mut self, _lines: Vec<String>) -> Option<Vec<String>> {
        None
    }
}

impl DialogHost for NoHost {
    fn next_action(&mut self, _dialog: &ParamDialog) -> Option<DialogAction> {
        None
    }
}

/// A host that replays a fixed list of dialog actions, with a canned
/// program editor result.
struct ScriptedHost {
    actions: VecDeque<DialogAction>,
    program: Option<Vec<String>>,
    dialogs_seen: usize,
}

impl ScriptedHost {
    fn new(actions: Vec<DialogAction>) -> Self {
        Self {
            actions: actions.into(),
            program: None,
            dialogs_seen: 0,
        }
    }
}

impl ProgramEditor for ScriptedHost {
    fn edit(&mut self, _lines: Vec<String>) -> Option<Vec<String>> {
        self.program.take()
    }
}

impl DialogHost for ScriptedHost {
    fn next_action(&mut self, _dialog: &ParamDialog) -> Option<DialogAction> {
        self.dialogs_seen += 1;
        self.actions.pop_front()
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code))
}

fn fresh_session(world: &mut MemoryWorld) -> EditorSession<'_, MemoryWorld> {
    let mut session = EditorSession::new(world, EditorOptions::default());
    // The initial full repaint is the renderer's business; start clean.
    session.clear_updates(Update::ALL);
    session
}

#[test]
fn cursor_move_raises_cursor_and_spot_not_board() {
    let mut world = MemoryWorld::new("Town");
    let mut session = fresh_session(&mut world);
    for _ in 0..5 {
        session.handle_event(key(KeyCode::Right), &mut NoHost);
        session.handle_event(key(KeyCode::Down), &mut NoHost);
    }
    session.clear_updates(Update::ALL | Update::CURSOR | Update::SPOT);
    assert_eq!(session.cursor(), (5, 5));

    session.handle_event(key(KeyCode::Tab), &mut NoHost); // draw mode on
    assert!(session.draw_mode());
    session.clear_updates(session.updates());

    session.handle_event(key(KeyCode::Right), &mut NoHost);
    assert_eq!(session.cursor(), (6, 5));
    let updates = session.updates();
    assert!(updates.contains(Update::CURSOR));
    assert!(updates.contains(Update::SPOT));
    assert!(!updates.contains(Update::BOARD));
}

#[test]
fn cursor_clamps_at_board_edges() {
    let mut world = MemoryWorld::new("Town");
    let mut session = fresh_session(&mut world);
    session.handle_event(key(KeyCode::Left), &mut NoHost);
    session.handle_event(key(KeyCode::Up), &mut NoHost);
    assert_eq!(session.cursor(), (0, 0));
    // Clamped moves raise nothing.
    assert_eq!(session.updates(), Update::NONE);
}

#[test]
fn draw_mode_plots_on_toggle_and_on_move() {
    let mut world = MemoryWorld::new("Town");
    let mut session = fresh_session(&mut world);
    session.handle_event(key(KeyCode::Tab), &mut NoHost);
    session.handle_event(key(KeyCode::Right), &mut NoHost);
    drop(session);
    // Standard pattern 0 is a solid wall, recolored with the default color.
    assert_eq!(world.tile(0, 0).kind, TileKind::SolidWall);
    assert_eq!(world.tile(1, 0).kind, TileKind::SolidWall);
    assert_eq!(world.tile(0, 0).color, 0x0f);
    assert_eq!(world.tile(2, 0).kind, TileKind::Empty);
}

#[test]
fn plot_respects_default_color_mode() {
    let mut world = MemoryWorld::new("Town");
    let mut session = fresh_session(&mut world);
    // Cycle foreground once, then enable default-color mode: the plotted
    // tile keeps the pattern's own color.
    session.handle_event(key(KeyCode::Char('c')), &mut NoHost);
    session.handle_event(key(KeyCode::Char('d')), &mut NoHost);
    assert!(session.default_color());
    session.handle_event(key(KeyCode::Char(' ')), &mut NoHost);
    drop(session);
    assert_eq!(world.tile(0, 0).color, 0x0f);
}

#[test]
fn acquire_resize_grows_backbuffer_on_move() {
    let mut world = MemoryWorld::new("Town");
    world.set_tile(1, 0, Tile::new(TileKind::Boulder, 0x0e));
    let mut session = fresh_session(&mut world);
    // 'a' twice: Off -> NoResize -> Resize.
    session.handle_event(key(KeyCode::Char('a')), &mut NoHost);
    session.handle_event(key(KeyCode::Char('a')), &mut NoHost);
    assert_eq!(session.acquire_mode(), AcquireMode::Resize);
    session.clear_updates(session.updates());

    session.handle_event(key(KeyCode::Right), &mut NoHost);
    assert!(session.updates().contains(Update::PATTERNS));
    assert_eq!(session.buffers().current().kind, TileKind::Boulder);
}

#[test]
fn text_entry_plots_glyphs_and_escape_leaves() {
    let mut world = MemoryWorld::new("Town");
    let mut session = fresh_session(&mut world);
    session.handle_event(key(KeyCode::Char('t')), &mut NoHost);
    assert!(session.text_entry());
    session.handle_event(key(KeyCode::Char('H')), &mut NoHost);
    session.handle_event(key(KeyCode::Char('i')), &mut NoHost);
    assert_eq!(session.cursor(), (2, 0));
    session.handle_event(key(KeyCode::Escape), &mut NoHost);
    assert!(!session.text_entry());
    assert!(!session.quit_requested());
    drop(session);
    assert_eq!(world.tile(0, 0).kind, TileKind::Text);
    assert_eq!(world.tile(0, 0).color, b'H');
    assert_eq!(world.tile(1, 0).color, b'i');
}

#[test]
fn block_selection_snaps_and_clears_in_one_shot() {
    let mut world = MemoryWorld::new("Town");
    let mut session = fresh_session(&mut world);
    session.handle_event(key(KeyCode::Char('b')), &mut NoHost);
    session.handle_event(key(KeyCode::Right), &mut NoHost);
    session.handle_event(key(KeyCode::Down), &mut NoHost);
    assert_eq!(session.selection().mode, SelectionMode::Block);
    assert_eq!(session.selection().cells.len(), 4);
    assert!(session.updates().contains(Update::BOARD));

    session.handle_event(key(KeyCode::Escape), &mut NoHost);
    assert_eq!(session.selection().mode, SelectionMode::PendingClear);
    assert!(!session.quit_requested());
    session.clear_updates(session.updates());

    // The very next event observes the selection as off before its own
    // effects, and the erase repaints the board.
    session.handle_event(key(KeyCode::Right), &mut NoHost);
    assert_eq!(session.selection().mode, SelectionMode::Off);
    assert!(session.selection().cells.is_empty());
    assert!(session.updates().contains(Update::BOARD));
}

#[test]
fn escape_without_selection_quits() {
    let mut world = MemoryWorld::new("Town");
    let mut session = fresh_session(&mut world);
    session.handle_event(key(KeyCode::Escape), &mut NoHost);
    assert!(session.quit_requested());
}

#[test]
fn param_dialog_step_changes_tile_and_raises_spot() {
    let mut world = MemoryWorld::new("Town");
    world.set_tile(
        0,
        0,
        Tile::with_param(TileKind::Pusher, 0x0f, Param::new()),
    );
    let mut session = fresh_session(&mut world);
    // Step the first option (Direction) once, then dismiss.
    let mut host = ScriptedHost::new(vec![DialogAction {
        option: 0,
        kind: ActionKind::Step,
    }]);
    session.handle_event(key(KeyCode::Enter), &mut host);
    assert!(session.updates().contains(Update::SPOT));
    drop(session);
    let param = world.tile(0, 0).param.as_ref().unwrap();
    assert_eq!((param.xstep, param.ystep), (0, -1));
}

#[test]
fn param_dialog_delta_clamps_to_range() {
    let mut world = MemoryWorld::new("Town");
    let mut param = Param::new();
    param.data[0] = 8;
    world.set_tile(0, 0, Tile::with_param(TileKind::Bomb, 0x07, param));
    let mut session = fresh_session(&mut world);
    // Countdown has range [0, 9]; 8 + 5 clamps to 9.
    let mut host = ScriptedHost::new(vec![DialogAction {
        option: 0,
        kind: ActionKind::Delta(5),
    }]);
    session.handle_event(key(KeyCode::Enter), &mut host);
    assert!(session.updates().contains(Update::SPOT));
    drop(session);
    assert_eq!(world.tile(0, 0).param.as_ref().unwrap().data[0], 9);
}

#[test]
fn dismissed_dialog_changes_nothing() {
    let mut world = MemoryWorld::new("Town");
    world.set_tile(
        0,
        0,
        Tile::with_param(TileKind::Lion, 0x0c, Param::new()),
    );
    let mut session = fresh_session(&mut world);
    session.handle_event(key(KeyCode::Enter), &mut NoHost);
    assert!(!session.updates().contains(Update::SPOT));
}

#[test]
fn program_edit_through_dialog_replaces_program() {
    let mut world = MemoryWorld::new("Town");
    let mut param = Param::new();
    param.program = b"#end".to_vec();
    world.set_tile(0, 0, Tile::with_param(TileKind::Object, 0x0a, param));
    let mut session = fresh_session(&mut world);

    // Object options: Character, Cycle, Program.
    let mut host = ScriptedHost::new(vec![DialogAction {
        option: 2,
        kind: ActionKind::Step,
    }]);
    host.program = Some(vec!["@guard".to_owned(), "#walk n".to_owned()]);
    session.handle_event(key(KeyCode::Enter), &mut host);
    assert!(session.updates().contains(Update::SPOT));
    drop(session);
    assert_eq!(
        world.tile(0, 0).param.as_ref().unwrap().program,
        b"@guard\r#walk n"
    );
}

#[test]
fn tile_info_is_read_only() {
    let mut world = MemoryWorld::new("Town");
    world.set_tile(0, 0, Tile::new(TileKind::NormalWall, 0x1f));
    let snapshot = world.tile(0, 0).clone();
    let mut session = fresh_session(&mut world);
    session.handle_event(key(KeyCode::Char('i')), &mut NoHost);
    assert_eq!(session.updates(), Update::NONE);
    drop(session);
    assert_eq!(*world.tile(0, 0), snapshot);
}

#[test]
fn resize_repaints_everything() {
    let mut world = MemoryWorld::new("Town");
    let mut session = fresh_session(&mut world);
    session.handle_event(
        Event::Resize {
            width: 80,
            height: 25,
        },
        &mut NoHost,
    );
    assert!(session.updates().contains(Update::ALL));
}

#[test]
fn vi_movement_is_opt_in() {
    let mut world = MemoryWorld::new("Town");
    let mut session = EditorSession::new(
        &mut world,
        EditorOptions {
            vi_movement: true,
            ..EditorOptions::default()
        },
    );
    session.clear_updates(Update::ALL);
    session.handle_event(key(KeyCode::Char('j')), &mut NoHost);
    session.handle_event(key(KeyCode::Char('l')), &mut NoHost);
    assert_eq!(session.cursor(), (1, 1));
}
