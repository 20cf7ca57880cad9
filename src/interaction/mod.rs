//! Interaction and animation state machines
//!
//! Nothing here touches the scene: everything is driven by explicit inputs
//! and frame deltas, so it can be exercised without a running app.

pub mod animation;
pub mod auto_rotate;
pub mod camera_rig;
pub mod debounce;
pub mod ease;
pub mod input;
pub mod loading;
pub mod page;
pub mod tracker;

pub use input::PageInput;
pub use page::{ClipAvailability, HomeController, ModelController, ModelTargets, PageController};
