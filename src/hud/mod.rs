pub mod controller;
pub mod icon;
pub mod input;
pub mod menu;
pub mod state;

pub use controller::{Controller, ControllerError, ControllerResult};
pub use icon::{IconBadge, IconCategory, IconView};
pub use input::{DefaultAction, KeyPress, PointerButton, PointerClick};
pub use menu::{Fade, PauseMenu};
pub use state::{HudAction, HudHandle, HudState, MenuCommand};
