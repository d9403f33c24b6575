pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod native;
pub mod render;
pub mod scroll;
pub mod terminal;
pub mod text;
pub mod timer;

pub use document::Document;
pub use element::{Node, NodeId};
pub use error::DomError;
pub use event::{Event, EventKind, Handler, Key, Modifiers};
pub use focus::FocusState;
pub use native::NativeOption;
pub use render::{render_lines, Line};
pub use terminal::Terminal;
pub use timer::TimerId;
