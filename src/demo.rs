// Stand-in game controller so the HUD can run on its own page
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::hud::{Controller, ControllerError, ControllerResult, HudHandle, IconBadge, KeyPress, PointerClick};

#[derive(Debug)]
pub struct DemoUnit {
    pub name: &'static str,
    pub icon: &'static str,
    pub level: u32,
    pub health: f64,
    pub hero: bool,
}

#[derive(Debug)]
pub struct DemoAbility {
    pub name: &'static str,
    pub icon: &'static str,
    /// Fraction of the cooldown elapsed; 1.0 means ready.
    pub cooldown_progress: f64,
}

#[derive(Debug)]
pub struct DemoItem {
    pub name: &'static str,
    pub icon: &'static str,
}

pub struct DemoController {
    units: Vec<Rc<DemoUnit>>,
    abilities: Vec<Rc<DemoAbility>>,
    items: Vec<Rc<DemoItem>>,
    selection: RefCell<Vec<Rc<DemoUnit>>>,
    hud: RefCell<Option<HudHandle<DemoController>>>,
    paused: Cell<bool>,
    hover: Cell<Option<(i32, i32)>>,
}

impl Default for DemoController {
    fn default() -> Self {
        let unit = |name, icon, level, health, hero| {
            Rc::new(DemoUnit {
                name,
                icon,
                level,
                health,
                hero,
            })
        };
        Self {
            units: vec![
                unit("Hero", "icons/hero.png", 7, 0.9, true),
                unit("Scout", "icons/scout.png", 2, 0.45, false),
                unit("Guard", "icons/guard.png", 4, 0.2, false),
            ],
            abilities: vec![
                Rc::new(DemoAbility {
                    name: "Laser",
                    icon: "icons/laser.png",
                    cooldown_progress: 1.0,
                }),
                Rc::new(DemoAbility {
                    name: "Shield",
                    icon: "icons/shield.png",
                    cooldown_progress: 0.35,
                }),
            ],
            items: vec![Rc::new(DemoItem {
                name: "Medkit",
                icon: "icons/medkit.png",
            })],
            selection: RefCell::new(Vec::new()),
            hud: RefCell::new(None),
            paused: Cell::new(false),
            hover: Cell::new(None),
        }
    }
}

impl DemoController {
    pub fn attach(&self, hud: HudHandle<DemoController>) {
        hud.set_goal("Escort the convoy to the north gate");
        *self.hud.borrow_mut() = Some(hud);
        self.select_hero();
        self.refresh_icons();
    }

    fn select_hero(&self) {
        let hero: Vec<_> = self.units.iter().filter(|u| u.hero).cloned().collect();
        *self.selection.borrow_mut() = hero;
    }

    /// Plain click selects the hero, shift adds the next unselected unit,
    /// ctrl selects everything.
    fn select(&self, click: PointerClick) {
        if click.ctrl {
            *self.selection.borrow_mut() = self.units.clone();
        } else if click.shift {
            let mut sel = self.selection.borrow_mut();
            if let Some(next) = self.units.iter().find(|u| !sel.iter().any(|s| Rc::ptr_eq(s, u))) {
                sel.push(next.clone());
            }
        } else {
            self.select_hero();
        }
    }

    pub fn hover(&self) -> Option<(i32, i32)> {
        self.hover.get()
    }

    pub fn selected_names(&self) -> Vec<&'static str> {
        self.selection.borrow().iter().map(|u| u.name).collect()
    }

    /// Rebuild all three holders from the current selection. Abilities and
    /// items belong to the hero, so they only show while the hero is selected.
    fn refresh_icons(&self) {
        let hud = self.hud.borrow();
        let Some(hud) = hud.as_ref() else {
            return;
        };
        hud.clear_units();
        hud.clear_abilities();
        hud.clear_items();
        let selection = self.selection.borrow();
        for unit in selection.iter() {
            hud.add_unit_icon_with_badge(
                unit.icon,
                unit.clone(),
                IconBadge::Unit {
                    level: unit.level,
                    health: unit.health,
                },
            );
        }
        if selection.iter().any(|u| u.hero) {
            for ability in &self.abilities {
                hud.add_ability_icon_with_badge(
                    ability.icon,
                    ability.clone(),
                    IconBadge::Cooldown {
                        progress: ability.cooldown_progress,
                    },
                );
            }
            for item in &self.items {
                hud.add_item_icon(item.icon, item.clone());
            }
        }
    }
}

impl Controller for DemoController {
    type Unit = DemoUnit;
    type Ability = DemoAbility;
    type Item = DemoItem;

    fn unit_icon_btn(&self, unit: &Rc<DemoUnit>) -> ControllerResult {
        log::info!("{} (level {}) health {:.0}%", unit.name, unit.level, unit.health * 100.0);
        *self.selection.borrow_mut() = vec![unit.clone()];
        self.refresh_icons();
        Ok(())
    }

    fn ability_icon_btn(&self, ability: &Rc<DemoAbility>) -> ControllerResult {
        if ability.cooldown_progress < 1.0 {
            return Err(ControllerError::Rejected {
                method: "abilityIconBtn",
                reason: format!("{} is still cooling down", ability.name),
            });
        }
        log::info!("cast {}", ability.name);
        Ok(())
    }

    fn item_icon_btn(&self, item: &Rc<DemoItem>) -> ControllerResult {
        log::info!("use {}", item.name);
        Ok(())
    }

    fn on_left_click(&self, click: PointerClick) -> ControllerResult {
        if self.paused.get() {
            return Err(ControllerError::Rejected {
                method: "onLeftClick",
                reason: "game is paused".into(),
            });
        }
        self.select(click);
        log::debug!("selected {:?}", self.selected_names());
        self.refresh_icons();
        Ok(())
    }

    fn on_right_click(&self, click: PointerClick) -> ControllerResult {
        if self.selection.borrow().is_empty() {
            return Err(ControllerError::Rejected {
                method: "onRightClick",
                reason: "no units selected".into(),
            });
        }
        log::info!(
            "move {:?} to ({}, {}){}",
            self.selected_names(),
            click.page_x,
            click.page_y,
            if click.shift { " queued" } else { "" }
        );
        Ok(())
    }

    fn on_mouse_move(&self, pos: PointerClick) -> ControllerResult {
        self.hover.set(Some((pos.page_x, pos.page_y)));
        Ok(())
    }

    /// 'a' selects everything, like a ctrl click.
    fn on_key_down(&self, key: KeyPress) -> ControllerResult {
        if self.paused.get() {
            return Ok(());
        }
        if key.key.eq_ignore_ascii_case(&'a') {
            *self.selection.borrow_mut() = self.units.clone();
            self.refresh_icons();
        }
        Ok(())
    }

    fn pause(&self) -> ControllerResult {
        self.paused.set(true);
        log::info!("paused");
        Ok(())
    }

    fn resume(&self) -> ControllerResult {
        self.paused.set(false);
        log::info!("resumed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(shift: bool, ctrl: bool) -> PointerClick {
        PointerClick {
            page_x: 10,
            page_y: 20,
            shift,
            ctrl,
        }
    }

    #[test]
    fn selection_follows_modifiers() {
        let c = DemoController::default();
        c.on_left_click(click(false, false)).unwrap();
        assert_eq!(c.selected_names(), ["Hero"]);
        c.on_left_click(click(true, false)).unwrap();
        assert_eq!(c.selected_names(), ["Hero", "Scout"]);
        c.on_left_click(click(false, true)).unwrap();
        assert_eq!(c.selected_names(), ["Hero", "Scout", "Guard"]);
        // nothing left to add
        c.on_left_click(click(true, false)).unwrap();
        assert_eq!(c.selected_names().len(), 3);
    }

    #[test]
    fn paused_game_rejects_selection() {
        let c = DemoController::default();
        c.pause().unwrap();
        assert!(c.on_left_click(click(false, false)).is_err());
        c.resume().unwrap();
        assert!(c.on_left_click(click(false, false)).is_ok());
    }

    #[test]
    fn move_order_needs_a_selection() {
        let c = DemoController::default();
        let err = c.on_right_click(click(false, false)).unwrap_err();
        assert_eq!(err.to_string(), "onRightClick rejected the call: no units selected");
        c.on_left_click(click(false, false)).unwrap();
        assert!(c.on_right_click(click(false, false)).is_ok());
    }

    #[test]
    fn unit_icon_narrows_selection_to_that_unit() {
        let c = DemoController::default();
        c.on_left_click(click(false, true)).unwrap();
        let scout = c.units[1].clone();
        c.unit_icon_btn(&scout).unwrap();
        assert_eq!(c.selected_names(), ["Scout"]);
    }

    #[test]
    fn cooling_ability_is_rejected() {
        let c = DemoController::default();
        assert!(c.ability_icon_btn(&c.abilities[0].clone()).is_ok());
        assert!(matches!(
            c.ability_icon_btn(&c.abilities[1].clone()),
            Err(ControllerError::Rejected { method: "abilityIconBtn", .. })
        ));
        assert!(c.save().is_err());
    }

    #[test]
    fn mouse_move_tracks_hover() {
        let c = DemoController::default();
        assert_eq!(c.hover(), None);
        c.on_mouse_move(click(false, false)).unwrap();
        assert_eq!(c.hover(), Some((10, 20)));
    }

    #[test]
    fn a_key_selects_all_unless_paused() {
        let c = DemoController::default();
        let a = KeyPress {
            key: 'A',
            shift: true,
            ctrl: false,
        };
        c.pause().unwrap();
        c.on_key_down(a).unwrap();
        assert!(c.selected_names().is_empty());
        c.resume().unwrap();
        c.on_key_down(a).unwrap();
        assert_eq!(c.selected_names(), ["Hero", "Scout", "Guard"]);
    }
}
