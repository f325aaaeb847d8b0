use std::rc::Rc;
use yew::prelude::*;

use super::controller::{Controller, forward};
use super::icon::{Icon, IconBadge, IconCategory, IconList, IconView};
use super::menu::PauseMenu;

pub enum HudAction<C: Controller> {
    AddUnitIcon(Icon<C::Unit>),
    AddAbilityIcon(Icon<C::Ability>),
    AddItemIcon(Icon<C::Item>),
    Clear(IconCategory),
    OpenMenu,
    Resume,
    SetGoal(String),
}

/// Everything the HUD shows. Mutated only through `HudAction`.
pub struct HudState<C: Controller> {
    pub units: IconList<C::Unit>,
    pub abilities: IconList<C::Ability>,
    pub items: IconList<C::Item>,
    pub menu: PauseMenu,
    pub goal: String,
}

impl<C: Controller> Default for HudState<C> {
    fn default() -> Self {
        Self {
            units: IconList::default(),
            abilities: IconList::default(),
            items: IconList::default(),
            menu: PauseMenu::default(),
            goal: String::new(),
        }
    }
}

impl<C: Controller> Clone for HudState<C> {
    fn clone(&self) -> Self {
        Self {
            units: self.units.clone(),
            abilities: self.abilities.clone(),
            items: self.items.clone(),
            menu: self.menu,
            goal: self.goal.clone(),
        }
    }
}

impl<C: Controller> PartialEq for HudState<C> {
    fn eq(&self, other: &Self) -> bool {
        self.units == other.units
            && self.abilities == other.abilities
            && self.items == other.items
            && self.menu == other.menu
            && self.goal == other.goal
    }
}

impl<C: Controller> HudState<C> {
    pub fn apply(&mut self, action: HudAction<C>) {
        match action {
            HudAction::AddUnitIcon(icon) => self.units.push(icon),
            HudAction::AddAbilityIcon(icon) => self.abilities.push(icon),
            HudAction::AddItemIcon(icon) => self.items.push(icon),
            HudAction::Clear(category) => match category {
                IconCategory::Unit => self.units.clear(),
                IconCategory::Ability => self.abilities.clear(),
                IconCategory::Item => self.items.clear(),
            },
            HudAction::OpenMenu => self.menu.open(),
            HudAction::Resume => self.menu.resume(),
            HudAction::SetGoal(text) => self.goal = text,
        }
    }

    pub fn icon_count(&self, category: IconCategory) -> usize {
        match category {
            IconCategory::Unit => self.units.len(),
            IconCategory::Ability => self.abilities.len(),
            IconCategory::Item => self.items.len(),
        }
    }

    pub fn icon_views(&self, category: IconCategory) -> Vec<IconView> {
        match category {
            IconCategory::Unit => self.units.views(),
            IconCategory::Ability => self.abilities.views(),
            IconCategory::Item => self.items.views(),
        }
    }

    /// Forward a click on the icon at `index` of a holder to the controller.
    /// Returns false when there is no such icon or the controller failed.
    pub fn activate_icon(&self, category: IconCategory, index: usize, controller: &C) -> bool {
        let method = category.controller_method();
        let result = match category {
            IconCategory::Unit => self.units.get(index).map(|i| controller.unit_icon_btn(&i.target)),
            IconCategory::Ability => self
                .abilities
                .get(index)
                .map(|i| controller.ability_icon_btn(&i.target)),
            IconCategory::Item => self.items.get(index).map(|i| controller.item_icon_btn(&i.target)),
        };
        match result {
            Some(r) => forward(method, r),
            None => {
                log::warn!("{}: no icon at index {}", method, index);
                false
            }
        }
    }
}

impl<C: Controller> Reducible for HudState<C> {
    type Action = HudAction<C>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// The menu button and the pause menu's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Open,
    Resume,
    Save,
    Quit,
}

/// Tell the controller about a menu button and return the state change to
/// dispatch for it, if any.
pub fn run_menu_command<C: Controller>(command: MenuCommand, controller: &C) -> Option<HudAction<C>> {
    match command {
        MenuCommand::Open => {
            forward("pause", controller.pause());
            Some(HudAction::OpenMenu)
        }
        MenuCommand::Resume => {
            forward("resume", controller.resume());
            Some(HudAction::Resume)
        }
        MenuCommand::Save => {
            forward("saveBtn", controller.save());
            None
        }
        MenuCommand::Quit => {
            forward("quitBtn", controller.quit());
            None
        }
    }
}

/// Handle for mutating the HUD from outside its components. `HudView` provides
/// it through context to everything rendered inside it.
pub struct HudHandle<C: Controller> {
    dispatcher: UseReducerDispatcher<HudState<C>>,
}

impl<C: Controller> HudHandle<C> {
    pub fn new(dispatcher: UseReducerDispatcher<HudState<C>>) -> Self {
        Self { dispatcher }
    }

    pub fn add_unit_icon(&self, image: impl Into<String>, unit: Rc<C::Unit>) {
        self.dispatcher.dispatch(HudAction::AddUnitIcon(Icon::new(image, unit)));
    }

    pub fn add_unit_icon_with_badge(&self, image: impl Into<String>, unit: Rc<C::Unit>, badge: IconBadge) {
        self.dispatcher
            .dispatch(HudAction::AddUnitIcon(Icon::new(image, unit).with_badge(badge)));
    }

    pub fn add_ability_icon(&self, image: impl Into<String>, ability: Rc<C::Ability>) {
        self.dispatcher
            .dispatch(HudAction::AddAbilityIcon(Icon::new(image, ability)));
    }

    pub fn add_ability_icon_with_badge(
        &self,
        image: impl Into<String>,
        ability: Rc<C::Ability>,
        badge: IconBadge,
    ) {
        self.dispatcher
            .dispatch(HudAction::AddAbilityIcon(Icon::new(image, ability).with_badge(badge)));
    }

    pub fn add_item_icon(&self, image: impl Into<String>, item: Rc<C::Item>) {
        self.dispatcher.dispatch(HudAction::AddItemIcon(Icon::new(image, item)));
    }

    pub fn add_item_icon_with_badge(&self, image: impl Into<String>, item: Rc<C::Item>, badge: IconBadge) {
        self.dispatcher
            .dispatch(HudAction::AddItemIcon(Icon::new(image, item).with_badge(badge)));
    }

    pub fn clear_units(&self) {
        self.dispatcher.dispatch(HudAction::Clear(IconCategory::Unit));
    }

    pub fn clear_abilities(&self) {
        self.dispatcher.dispatch(HudAction::Clear(IconCategory::Ability));
    }

    pub fn clear_items(&self) {
        self.dispatcher.dispatch(HudAction::Clear(IconCategory::Item));
    }

    pub fn set_goal(&self, text: impl Into<String>) {
        self.dispatcher.dispatch(HudAction::SetGoal(text.into()));
    }
}

impl<C: Controller> Clone for HudHandle<C> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<C: Controller> PartialEq for HudHandle<C> {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher
    }
}
