// Core infrastructure module
// Tab bar state machine, buttons, geometry and the demo host's app state

pub mod animation;
pub mod app;
pub mod button;
pub mod controller;
pub mod defaults;
pub mod events;
pub mod geometry;
pub mod item;

pub use animation::{AnimationKind, Playback, TabItemAnimation};
pub use app::App;
pub use button::{ButtonId, TabBarButton};
pub use controller::{SelectionOrigin, TabBarController, TabBarDelegate, TabBarError};
pub use defaults::TabBarDefaults;
pub use events::{AppEvent, EventHandler};
pub use geometry::{button_frames, ContentBounds, FrameRect};
pub use item::TabItem;
