use web_sys::{KeyboardEvent, MouseEvent};

use super::controller::{Controller, forward};

/// A press on the game view proxy, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerClick {
    pub page_x: i32,
    pub page_y: i32,
    pub shift: bool,
    pub ctrl: bool,
}

impl From<&MouseEvent> for PointerClick {
    fn from(e: &MouseEvent) -> Self {
        Self {
            page_x: e.page_x(),
            page_y: e.page_y(),
            shift: e.shift_key(),
            ctrl: e.ctrl_key(),
        }
    }
}

/// A key press while the HUD is up. Only keys that produce a single character
/// are forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: char,
    pub shift: bool,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn from_key(key: &str, shift: bool, ctrl: bool) -> Option<Self> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Some(Self { key, shift, ctrl }),
            _ => None,
        }
    }

    pub fn from_event(e: &KeyboardEvent) -> Option<Self> {
        Self::from_key(&e.key(), e.shift_key(), e.ctrl_key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// `click`
    Primary,
    /// `contextmenu`
    Context,
}

/// What the listener should do with the browser's default action afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAction {
    Allow,
    Suppress,
}

pub fn forward_pointer<C: Controller>(
    controller: &C,
    button: PointerButton,
    click: PointerClick,
) -> DefaultAction {
    match button {
        PointerButton::Primary => {
            forward("onLeftClick", controller.on_left_click(click));
            DefaultAction::Allow
        }
        PointerButton::Context => {
            // native menu stays hidden even when the controller fails
            forward("onRightClick", controller.on_right_click(click));
            DefaultAction::Suppress
        }
    }
}

pub fn forward_mouse_move<C: Controller>(controller: &C, pos: PointerClick) -> bool {
    forward("onMouseMove", controller.on_mouse_move(pos))
}

pub fn forward_key_down<C: Controller>(controller: &C, key: KeyPress) -> bool {
    forward("onKeyDown", controller.on_key_down(key))
}
