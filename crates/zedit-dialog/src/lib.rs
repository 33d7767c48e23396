#![forbid(unsafe_code)]

//! Tile parameter editing: program serialization, the option model, and
//! dialog assembly.
//!
//! The dialog renderer itself is external; this crate only produces the
//! data it consumes ([`ParamDialog`]) and the edit operations it invokes
//! ([`apply_option`], [`apply_option_delta`]).

pub mod dialog;
pub mod options;
pub mod program;

pub use dialog::{ParamDialog, build_param_dialog, build_tile_info_dialog};
pub use options::{
    ClampPolicy, DataDisplay, ParamField, ParamOption, ProgramEditor, apply_option,
    apply_option_delta, build_options, format_option_value,
};
pub use program::{LINE_BREAK, PROGRAM_EDIT_WIDTH, from_editable_lines, to_editable_lines};
