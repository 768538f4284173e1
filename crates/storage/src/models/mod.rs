mod event;
mod event_result;
mod group;

pub use event::{Event, EventCategory};
pub use event_result::EventResult;
pub use group::Group;
