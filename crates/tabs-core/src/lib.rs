//! Pure tab-list model: ordered tab registry, selection resolution,
//! wraparound keyboard navigation and derived accessibility state.
//!
//! Nothing in this crate touches the DOM or a UI framework; the `frontend`
//! crate binds the state machine to Leptos signals and real keyboard events.

pub mod attrs;
pub mod container;
pub mod list;
pub mod tab;

pub use attrs::LiveRegion;
pub use container::{TabListId, TabListRegistry};
pub use list::TabListState;
pub use tab::{TabEntry, TabId};
