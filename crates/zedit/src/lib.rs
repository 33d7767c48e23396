#![forbid(unsafe_code)]

//! Umbrella crate for the zedit board editor core.
//!
//! Re-exports the three layers:
//!
//! - [`world`]: boards, tiles, parameter blocks, the direction codec.
//! - [`dialog`]: program serialization, the option model, dialog builders.
//! - [`session`]: input events, dirty-region tracking, the editor session
//!   state machine.
//!
//! # Quick start
//!
//! ```
//! use zedit::session::{EditorOptions, EditorSession, Event, KeyCode, KeyEvent, Update};
//! use zedit::world::MemoryWorld;
//!
//! # struct NoHost;
//! # impl zedit::dialog::ProgramEditor for NoHost {
//! #     fn edit(&mut self, _: Vec<String>) -> Option<Vec<String>> { None }
//! # }
//! # impl zedit::session::DialogHost for NoHost {
//! #     fn next_action(&mut self, _: &zedit::dialog::ParamDialog)
//! #         -> Option<zedit::session::DialogAction> { None }
//! # }
//! let mut world = MemoryWorld::new("Town of ZZT");
//! let mut session = EditorSession::new(&mut world, EditorOptions::default());
//! session.clear_updates(Update::ALL);
//!
//! session.handle_event(Event::Key(KeyEvent::new(KeyCode::Right)), &mut NoHost);
//! assert_eq!(session.cursor(), (1, 0));
//! assert!(session.updates().contains(Update::CURSOR | Update::SPOT));
//! ```

pub use zedit_dialog as dialog;
pub use zedit_session as session;
pub use zedit_world as world;
