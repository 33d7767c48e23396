#![forbid(unsafe_code)]

//! The parameter option model.
//!
//! A tile's editable surface is described as data: an ordered list of
//! [`ParamOption`] descriptors built once per tile, each knowing how to
//! format its current value, apply a single-step edit, and apply a clamped
//! delta. The dialog renderer never switches on tile kind; new kinds only
//! touch [`build_options`].

use crate::program::{PROGRAM_EDIT_WIDTH, from_editable_lines, to_editable_lines};
use zedit_world::{Direction, Param, Tile, TileKind, World};

/// Out-of-range policy for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampPolicy {
    /// Stick at the nearest bound.
    Saturate,
    /// Wrap around modularly.
    Wrap,
}

/// How a data slot's value reads back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDisplay {
    /// Plain decimal.
    Number,
    /// A character glyph (object appearance).
    Glyph,
    /// Destination board title (passages).
    BoardName,
    /// Projectile kind: bullets or stars.
    FiringKind,
}

/// The field a [`ParamOption`] edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    /// The (xstep, ystep) facing, edited by cycling compass directions.
    Direction,
    /// One small data slot with a bound range.
    Data {
        /// Slot index into `Param::data`.
        slot: usize,
        /// Inclusive lower bound.
        lo: u8,
        /// Inclusive upper bound.
        hi: u8,
        /// Out-of-range policy.
        policy: ClampPolicy,
        /// Display rendering.
        display: DataDisplay,
    },
    /// The update cycle, 0..=255, saturating.
    Cycle,
    /// The bound program, edited in the modal text editor.
    Program,
}

/// One editable field surfaced by the parameter dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamOption {
    /// Short label shown next to the value.
    pub label: &'static str,
    /// What the option edits and how.
    pub field: ParamField,
}

impl ParamOption {
    const fn new(label: &'static str, field: ParamField) -> Self {
        Self { label, field }
    }
}

/// Modal collaborator that runs the program text editor.
///
/// `edit` blocks until the user finishes; `None` means the edit was
/// cancelled and the program must be left untouched.
pub trait ProgramEditor {
    /// Present `lines` for editing and return the replacement lines.
    fn edit(&mut self, lines: Vec<String>) -> Option<Vec<String>>;
}

const fn slider(slot: usize, display: DataDisplay) -> ParamField {
    ParamField::Data {
        slot,
        lo: 0,
        hi: 8,
        policy: ClampPolicy::Saturate,
        display,
    }
}

/// Build the option list for the tile at (x, y).
///
/// Kinds without a parameter block, and tiles whose block is missing,
/// yield an empty list: the dialog simply offers nothing to edit.
#[must_use]
pub fn build_options(world: &dyn World, x: u16, y: u16) -> Vec<ParamOption> {
    let tile = world.tile(x, y);
    if tile.param.is_none() {
        return Vec::new();
    }

    use DataDisplay::{BoardName, FiringKind, Glyph, Number};
    use ParamField::{Cycle, Direction, Program};

    let cycle = ParamOption::new("Cycle", Cycle);
    match tile.kind {
        TileKind::Object => vec![
            ParamOption::new(
                "Character",
                ParamField::Data {
                    slot: 0,
                    lo: 1,
                    hi: 255,
                    policy: ClampPolicy::Wrap,
                    display: Glyph,
                },
            ),
            cycle,
            ParamOption::new("Program", Program),
        ],
        TileKind::Scroll => vec![ParamOption::new("Program", Program)],
        TileKind::Passage => vec![ParamOption::new(
            "Destination",
            ParamField::Data {
                slot: 2,
                lo: 0,
                hi: world.board_count().saturating_sub(1),
                policy: ClampPolicy::Wrap,
                display: BoardName,
            },
        )],
        TileKind::Duplicator => vec![
            ParamOption::new("Duplication rate", slider(2, Number)),
            ParamOption::new("Direction", Direction),
        ],
        TileKind::Bomb => vec![ParamOption::new(
            "Countdown",
            ParamField::Data {
                slot: 0,
                lo: 0,
                hi: 9,
                policy: ClampPolicy::Saturate,
                display: Number,
            },
        )],
        TileKind::BlinkWall => vec![
            ParamOption::new(
                "Start time",
                ParamField::Data {
                    slot: 0,
                    lo: 0,
                    hi: 32,
                    policy: ClampPolicy::Saturate,
                    display: Number,
                },
            ),
            ParamOption::new(
                "Period",
                ParamField::Data {
                    slot: 1,
                    lo: 0,
                    hi: 32,
                    policy: ClampPolicy::Saturate,
                    display: Number,
                },
            ),
            ParamOption::new("Direction", Direction),
        ],
        TileKind::Transporter | TileKind::Pusher => {
            vec![ParamOption::new("Direction", Direction), cycle]
        }
        TileKind::Star | TileKind::Bullet => vec![ParamOption::new("Direction", Direction)],
        TileKind::Ruffian => vec![
            ParamOption::new("Intelligence", slider(0, Number)),
            ParamOption::new("Resting time", slider(1, Number)),
            cycle,
        ],
        TileKind::Slime => vec![ParamOption::new("Movement speed", slider(1, Number)), cycle],
        TileKind::Shark | TileKind::Lion => {
            vec![ParamOption::new("Intelligence", slider(0, Number)), cycle]
        }
        TileKind::SpinningGun | TileKind::Tiger => vec![
            ParamOption::new("Intelligence", slider(0, Number)),
            ParamOption::new("Firing rate", slider(1, Number)),
            ParamOption::new(
                "Firing type",
                ParamField::Data {
                    slot: 2,
                    lo: 0,
                    hi: 1,
                    policy: ClampPolicy::Wrap,
                    display: FiringKind,
                },
            ),
            cycle,
        ],
        TileKind::Bear => vec![ParamOption::new("Sensitivity", slider(0, Number)), cycle],
        TileKind::CentipedeHead => vec![
            ParamOption::new("Intelligence", slider(0, Number)),
            ParamOption::new("Deviance", slider(1, Number)),
            cycle,
        ],
        TileKind::CentipedeBody | TileKind::ConveyorCw | TileKind::ConveyorCcw => vec![cycle],
        _ => Vec::new(),
    }
}

fn param_mut<'w>(world: &'w mut dyn World, x: u16, y: u16) -> &'w mut Param {
    world
        .tile_mut(x, y)
        .param
        .as_mut()
        .expect("option applies to a tile with a param block")
}

/// Apply an option's single-step edit to the tile at (x, y).
///
/// Directions cycle to their successor, numeric fields step by +1 under
/// their own policy, and program fields open the modal text editor.
/// Returns whether the tile actually changed, so the caller can raise the
/// right dirty flags.
pub fn apply_option(
    world: &mut dyn World,
    x: u16,
    y: u16,
    option: &ParamOption,
    editor: &mut dyn ProgramEditor,
) -> bool {
    match option.field {
        ParamField::Direction => {
            let param = param_mut(world, x, y);
            let next = param.direction().map_or(Direction::North, Direction::next);
            let before = (param.xstep, param.ystep);
            param.set_direction(next);
            (param.xstep, param.ystep) != before
        }
        ParamField::Data { .. } | ParamField::Cycle => apply_option_delta(world, x, y, option, 1),
        ParamField::Program => {
            let lines = to_editable_lines(param_mut(world, x, y), PROGRAM_EDIT_WIDTH);
            let Some(new_lines) = editor.edit(lines) else {
                return false;
            };
            let new_program = from_editable_lines(&new_lines).program;
            let param = param_mut(world, x, y);
            if param.program == new_program {
                return false;
            }
            param.program = new_program;
            true
        }
    }
}

/// Apply a signed increment to a numeric option on the tile at (x, y).
///
/// In-range results are stored exactly; out-of-range results wrap or
/// saturate per the field's policy, never escaping `[lo, hi]`. Returns
/// whether the stored value changed.
pub fn apply_option_delta(
    world: &mut dyn World,
    x: u16,
    y: u16,
    option: &ParamOption,
    delta: i32,
) -> bool {
    match option.field {
        ParamField::Data {
            slot,
            lo,
            hi,
            policy,
            ..
        } => {
            let param = param_mut(world, x, y);
            let old = param.data[slot];
            let new = step_value(i32::from(old), delta, i32::from(lo), i32::from(hi), policy);
            param.data[slot] = new as u8;
            new != i32::from(old)
        }
        ParamField::Cycle => {
            let param = param_mut(world, x, y);
            let old = param.cycle;
            let new = step_value(i32::from(old), delta, 0, 255, ClampPolicy::Saturate);
            param.cycle = new as i16;
            new != i32::from(old)
        }
        ParamField::Direction => {
            let param = param_mut(world, x, y);
            let before = (param.xstep, param.ystep);
            let mut dir = param.direction().unwrap_or(Direction::West);
            for _ in 0..delta.rem_euclid(4) {
                dir = dir.next();
            }
            param.set_direction(dir);
            (param.xstep, param.ystep) != before
        }
        // No delta semantics for programs.
        ParamField::Program => false,
    }
}

fn step_value(value: i32, delta: i32, lo: i32, hi: i32, policy: ClampPolicy) -> i32 {
    let target = value.saturating_add(delta);
    if (lo..=hi).contains(&target) {
        return target;
    }
    match policy {
        ClampPolicy::Saturate => target.clamp(lo, hi),
        ClampPolicy::Wrap => {
            let span = hi - lo + 1;
            lo + (target - lo).rem_euclid(span)
        }
    }
}

/// Render one option's current value as display text. Pure.
#[must_use]
pub fn format_option_value(tile: &Tile, field: &ParamField, world: &dyn World) -> String {
    let Some(param) = tile.param.as_ref() else {
        return String::new();
    };
    match *field {
        ParamField::Direction => param
            .direction()
            .map_or_else(|_| "idle".to_owned(), |d| d.name().to_owned()),
        ParamField::Cycle => param.cycle.to_string(),
        ParamField::Program => {
            if param.has_program() {
                format!("{} bytes", param.program_len())
            } else {
                "(none)".to_owned()
            }
        }
        ParamField::Data { slot, display, .. } => {
            let value = param.data[slot];
            match display {
                DataDisplay::Number => value.to_string(),
                DataDisplay::Glyph => {
                    if value.is_ascii_graphic() {
                        char::from(value).to_string()
                    } else {
                        format!("#{value}")
                    }
                }
                DataDisplay::BoardName => world
                    .board_name(value)
                    .map_or_else(|| "(no board)".to_owned(), str::to_owned),
                DataDisplay::FiringKind => {
                    if value == 0 {
                        "bullets".to_owned()
                    } else {
                        "stars".to_owned()
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zedit_world::MemoryWorld;

    struct NoEditor;

    impl ProgramEditor for NoEditor {
        fn edit(&mut self, _lines: Vec<String>) -> Option<Vec<String>> {
            None
        }
    }

    struct ReplaceEditor(Vec<String>);

    impl ProgramEditor for ReplaceEditor {
        fn edit(&mut self, _lines: Vec<String>) -> Option<Vec<String>> {
            Some(self.0.clone())
        }
    }

    fn world_with(kind: TileKind, param: Param) -> MemoryWorld {
        let mut world = MemoryWorld::new("Town");
        world.set_tile(3, 3, Tile::with_param(kind, 0x0f, param));
        world
    }

    fn option(world: &MemoryWorld, label: &str) -> ParamOption {
        build_options(world, 3, 3)
            .into_iter()
            .find(|o| o.label == label)
            .expect("option present")
    }

    #[test]
    fn plain_tiles_have_no_options() {
        let mut world = MemoryWorld::new("Town");
        world.set_tile(1, 1, Tile::new(TileKind::SolidWall, 0x0e));
        assert!(build_options(&world, 1, 1).is_empty());
        // Param kind without an actual block: nothing to edit either.
        world.set_tile(2, 1, Tile::new(TileKind::Lion, 0x0c));
        assert!(build_options(&world, 2, 1).is_empty());
    }

    #[test]
    fn direction_step_cycles() {
        let mut world = world_with(TileKind::Pusher, Param::facing(Direction::North));
        let opt = option(&world, "Direction");
        assert!(apply_option(&mut world, 3, 3, &opt, &mut NoEditor));
        let param = world.tile(3, 3).param.as_ref().unwrap();
        assert_eq!(param.direction(), Ok(Direction::South));
    }

    #[test]
    fn idle_direction_steps_to_north() {
        let mut world = world_with(TileKind::Pusher, Param::new());
        let opt = option(&world, "Direction");
        assert!(apply_option(&mut world, 3, 3, &opt, &mut NoEditor));
        let param = world.tile(3, 3).param.as_ref().unwrap();
        assert_eq!(param.direction(), Ok(Direction::North));
    }

    #[test]
    fn delta_saturates_at_bounds() {
        let mut param = Param::new();
        param.data[0] = 8;
        let mut world = world_with(TileKind::Bomb, param);
        let opt = option(&world, "Countdown");
        // range [0, 9], 8 + 5 clamps to 9
        assert!(apply_option_delta(&mut world, 3, 3, &opt, 5));
        assert_eq!(world.tile(3, 3).param.as_ref().unwrap().data[0], 9);
        // already pinned: no change
        assert!(!apply_option_delta(&mut world, 3, 3, &opt, 3));
        assert!(apply_option_delta(&mut world, 3, 3, &opt, -20));
        assert_eq!(world.tile(3, 3).param.as_ref().unwrap().data[0], 0);
    }

    #[test]
    fn firing_type_wraps() {
        let mut param = Param::new();
        param.data[2] = 1;
        let mut world = world_with(TileKind::Tiger, param);
        let opt = option(&world, "Firing type");
        assert!(apply_option(&mut world, 3, 3, &opt, &mut NoEditor));
        assert_eq!(world.tile(3, 3).param.as_ref().unwrap().data[2], 0);
    }

    #[test]
    fn cancelled_program_edit_changes_nothing() {
        let mut param = Param::new();
        param.program = b"#end".to_vec();
        let mut world = world_with(TileKind::Object, param);
        let opt = option(&world, "Program");
        assert!(!apply_option(&mut world, 3, 3, &opt, &mut NoEditor));
        assert_eq!(world.tile(3, 3).param.as_ref().unwrap().program, b"#end");
    }

    #[test]
    fn program_edit_preserves_other_fields() {
        let mut param = Param::facing(Direction::East);
        param.cycle = 3;
        param.data[0] = 2;
        param.program = b"#end".to_vec();
        let mut world = world_with(TileKind::Object, param);
        let opt = option(&world, "Program");
        let mut editor = ReplaceEditor(vec!["@guard".to_owned(), "#walk n".to_owned()]);
        assert!(apply_option(&mut world, 3, 3, &opt, &mut editor));
        let param = world.tile(3, 3).param.as_ref().unwrap();
        assert_eq!(param.program, b"@guard\r#walk n");
        // Only the program was replaced.
        assert_eq!(param.direction(), Ok(Direction::East));
        assert_eq!(param.cycle, 3);
        assert_eq!(param.data[0], 2);
    }

    #[test]
    fn passage_destination_formats_board_name() {
        let mut param = Param::new();
        param.data[2] = 1;
        let mut world = world_with(TileKind::Passage, param);
        world.push_board_name("Armory");
        let opt = option(&world, "Destination");
        let text = format_option_value(world.tile(3, 3), &opt.field, &world);
        assert_eq!(text, "Armory");
    }

    #[test]
    fn format_covers_display_kinds() {
        let mut param = Param::facing(Direction::West);
        param.data[0] = b'A';
        param.data[2] = 1;
        param.program = b"#end".to_vec();
        let world = world_with(TileKind::Object, param);
        let tile = world.tile(3, 3);
        assert_eq!(
            format_option_value(tile, &ParamField::Direction, &world),
            "west"
        );
        let glyph = ParamField::Data {
            slot: 0,
            lo: 1,
            hi: 255,
            policy: ClampPolicy::Wrap,
            display: DataDisplay::Glyph,
        };
        assert_eq!(format_option_value(tile, &glyph, &world), "A");
        let firing = ParamField::Data {
            slot: 2,
            lo: 0,
            hi: 1,
            policy: ClampPolicy::Wrap,
            display: DataDisplay::FiringKind,
        };
        assert_eq!(format_option_value(tile, &firing, &world), "stars");
        assert_eq!(
            format_option_value(tile, &ParamField::Program, &world),
            "4 bytes"
        );
    }
}
