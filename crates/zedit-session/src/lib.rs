#![forbid(unsafe_code)]

//! Editor session: input events, dirty-region tracking, selection,
//! pattern buffers, and the synchronous event-at-a-time state machine.

pub mod editor;
pub mod event;
pub mod patbuffer;
pub mod selection;
pub mod update;

pub use editor::{
    ActionKind, Buffers, DialogAction, DialogHost, EditorOptions, EditorSession, PatternSource,
    TextColor,
};
pub use event::{Event, KeyCode, KeyEvent, Modifiers};
pub use patbuffer::{AcquireMode, PatternBuffer};
pub use selection::{CellSet, Selection, SelectionMode};
pub use update::Update;
