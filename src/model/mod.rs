//! Model layer - screen state separate from rendering
//!
//! - `NameList` - draft text and the append-only entries
//! - `Focus` - which element receives keys
//! - `FrameQueue` - tasks deferred to after the next paint
//! - `ModalStack` - modal overlay management

pub mod entry;
pub mod focus;
pub mod frame_queue;
pub mod modal;
pub mod name_list;

pub use entry::EntryId;
pub use focus::Focus;
pub use frame_queue::{FrameQueue, FrameTask};
pub use modal::{Modal, ModalStack};
pub use name_list::{NameList, SubmitOutcome};
