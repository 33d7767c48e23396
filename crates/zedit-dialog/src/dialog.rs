#![forbid(unsafe_code)]

//! Dialog assembly.
//!
//! A [`ParamDialog`] is plain data: a title, static info lines, and the
//! ordered option list. It is built once for a tile and never mutated;
//! edits flow through [`crate::options`] and the caller rebuilds the
//! dialog to refresh displayed values.

use crate::options::{ParamOption, build_options, format_option_value};
use zedit_world::{TileKind, World, color_name};

/// A presentable dialog for one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDialog {
    /// Dialog title.
    pub title: String,
    /// Static descriptive lines above the options.
    pub info: Vec<String>,
    /// Ordered editable fields; empty for read-only dialogs.
    pub options: Vec<ParamOption>,
    /// Formatted current value per option, index-aligned with `options`.
    pub values: Vec<String>,
}

impl ParamDialog {
    /// Whether the dialog offers anything to edit.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.options.is_empty()
    }
}

/// Build the parameter editing dialog for the tile at (x, y).
#[must_use]
pub fn build_param_dialog(world: &dyn World, x: u16, y: u16) -> ParamDialog {
    let tile = world.tile(x, y);
    let options = build_options(world, x, y);
    let values = options
        .iter()
        .map(|opt| format_option_value(tile, &opt.field, world))
        .collect();
    ParamDialog {
        title: format!("{} at ({x}, {y})", tile.kind.name()),
        info: vec![color_name(tile.color)],
        options,
        values,
    }
}

/// Build the read-only tile info summary for the tile at (x, y).
///
/// Everything lands in `info`; no edit affordances are offered.
#[must_use]
pub fn build_tile_info_dialog(world: &dyn World, x: u16, y: u16) -> ParamDialog {
    let tile = world.tile(x, y);
    let mut info = vec![
        format!("Kind:     {}", tile.kind.name()),
        format!("Color:    {}", color_name(tile.color)),
        format!("Position: ({x}, {y})"),
    ];
    if tile.kind == TileKind::Text {
        // The color field holds the glyph for text tiles.
        info[1] = format!("Glyph:    {:#04x}", tile.color);
    }
    if let Some(param) = tile.param.as_ref() {
        info.push(format!("Step:     ({}, {})", param.xstep, param.ystep));
        info.push(format!("Cycle:    {}", param.cycle));
        info.push(format!(
            "Data:     {} {} {}",
            param.data[0], param.data[1], param.data[2]
        ));
        info.push(format!("Leader:   {}", param.leader));
        info.push(format!("Follower: {}", param.follower));
        info.push(format!("Instr:    {}", param.instruction));
        info.push(format!("Program:  {} bytes", param.program_len()));
    } else {
        info.push("No parameter block".to_owned());
    }
    ParamDialog {
        title: "Tile Info".to_owned(),
        info,
        options: Vec::new(),
        values: Vec::new(),
    }
}
