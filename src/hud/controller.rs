use std::rc::Rc;
use thiserror::Error;

use super::input::{KeyPress, PointerClick};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("{method} rejected the call: {reason}")]
    Rejected { method: &'static str, reason: String },
    #[error("{method} is not available")]
    Unavailable { method: &'static str },
}

pub type ControllerResult = Result<(), ControllerError>;

/// Receiver of every interaction the HUD forwards.
///
/// The bound targets are opaque to the HUD. Icon clicks hand back the same `Rc`
/// that was passed when the icon was added.
pub trait Controller: 'static {
    type Unit: 'static;
    type Ability: 'static;
    type Item: 'static;

    fn unit_icon_btn(&self, unit: &Rc<Self::Unit>) -> ControllerResult;
    fn ability_icon_btn(&self, ability: &Rc<Self::Ability>) -> ControllerResult;
    fn item_icon_btn(&self, item: &Rc<Self::Item>) -> ControllerResult;

    fn on_left_click(&self, click: PointerClick) -> ControllerResult;
    fn on_right_click(&self, click: PointerClick) -> ControllerResult;

    /// Pointer position over the game view, in page coordinates.
    fn on_mouse_move(&self, _pos: PointerClick) -> ControllerResult {
        Ok(())
    }
    fn on_key_down(&self, _key: KeyPress) -> ControllerResult {
        Ok(())
    }

    /// Called when the pause menu opens.
    fn pause(&self) -> ControllerResult {
        Ok(())
    }
    /// Called when the pause menu is dismissed.
    fn resume(&self) -> ControllerResult {
        Ok(())
    }
    fn save(&self) -> ControllerResult {
        Err(ControllerError::Unavailable { method: "saveBtn" })
    }
    fn quit(&self) -> ControllerResult {
        Err(ControllerError::Unavailable { method: "quitBtn" })
    }
}

/// Log a failed controller call and carry on, so one broken listener does not
/// take the others down with it. Returns whether the call succeeded.
pub fn forward(method: &'static str, result: ControllerResult) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("controller.{} failed: {}", method, e);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Unit(Rc<&'static str>),
        Ability(Rc<&'static str>),
        Item(Rc<&'static str>),
        LeftClick(PointerClick),
        RightClick(PointerClick),
        MouseMove(PointerClick),
        KeyDown(KeyPress),
        Pause,
        Resume,
        Save,
        Quit,
    }

    /// Records every call; fails the next call when `fail_next` is set.
    #[derive(Default)]
    pub struct Recorder {
        pub calls: RefCell<Vec<Call>>,
        pub fail_next: Cell<bool>,
    }

    impl Recorder {
        fn record(&self, method: &'static str, call: Call) -> ControllerResult {
            self.calls.borrow_mut().push(call);
            if self.fail_next.replace(false) {
                return Err(ControllerError::Rejected {
                    method,
                    reason: "boom".into(),
                });
            }
            Ok(())
        }

        pub fn take(&self) -> Vec<Call> {
            std::mem::take(&mut *self.calls.borrow_mut())
        }
    }

    impl Controller for Recorder {
        type Unit = &'static str;
        type Ability = &'static str;
        type Item = &'static str;

        fn unit_icon_btn(&self, unit: &Rc<&'static str>) -> ControllerResult {
            self.record("unitIconBtn", Call::Unit(unit.clone()))
        }
        fn ability_icon_btn(&self, ability: &Rc<&'static str>) -> ControllerResult {
            self.record("abilityIconBtn", Call::Ability(ability.clone()))
        }
        fn item_icon_btn(&self, item: &Rc<&'static str>) -> ControllerResult {
            self.record("itemIconBtn", Call::Item(item.clone()))
        }
        fn on_left_click(&self, click: PointerClick) -> ControllerResult {
            self.record("onLeftClick", Call::LeftClick(click))
        }
        fn on_right_click(&self, click: PointerClick) -> ControllerResult {
            self.record("onRightClick", Call::RightClick(click))
        }
        fn on_mouse_move(&self, pos: PointerClick) -> ControllerResult {
            self.record("onMouseMove", Call::MouseMove(pos))
        }
        fn on_key_down(&self, key: KeyPress) -> ControllerResult {
            self.record("onKeyDown", Call::KeyDown(key))
        }
        fn pause(&self) -> ControllerResult {
            self.record("pause", Call::Pause)
        }
        fn resume(&self) -> ControllerResult {
            self.record("resume", Call::Resume)
        }
        fn save(&self) -> ControllerResult {
            self.record("saveBtn", Call::Save)
        }
        fn quit(&self) -> ControllerResult {
            self.record("quitBtn", Call::Quit)
        }
    }
}
