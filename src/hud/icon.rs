use std::rc::Rc;

use crate::config::RegionIds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Unit,
    Ability,
    Item,
}

impl IconCategory {
    pub const ALL: [IconCategory; 3] = [IconCategory::Unit, IconCategory::Ability, IconCategory::Item];

    pub fn holder_id(self, ids: &RegionIds) -> &str {
        match self {
            IconCategory::Unit => &ids.unit_holder,
            IconCategory::Ability => &ids.ability_holder,
            IconCategory::Item => &ids.item_holder,
        }
    }

    /// Name of the controller method an icon of this category forwards to.
    pub fn controller_method(self) -> &'static str {
        match self {
            IconCategory::Unit => "unitIconBtn",
            IconCategory::Ability => "abilityIconBtn",
            IconCategory::Item => "itemIconBtn",
        }
    }

    /// Painted behind the icon image so it does not flash while loading.
    pub fn background_color(self) -> &'static str {
        match self {
            IconCategory::Unit => "#1c2128",
            IconCategory::Ability => "#9c8d46",
            IconCategory::Item => "#433ab9",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconBadge {
    /// Level number and health bar. `health` is a fraction of max health.
    Unit { level: u32, health: f64 },
    /// Cooldown progress, 1.0 meaning ready.
    Cooldown { progress: f64 },
}

fn unit_fraction(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl IconBadge {
    pub fn health_fraction(health: f64) -> f64 {
        unit_fraction(health)
    }

    pub fn health_color(health: f64) -> &'static str {
        let h = unit_fraction(health);
        if h > 0.5 {
            "rgb(84,255,106)"
        } else if h > 0.25 {
            "rgb(255,194,41)"
        } else {
            "rgb(255,0,61)"
        }
    }

    /// Degrees of the cooldown pie still shaded; 0 once ready.
    pub fn cooldown_degrees(progress: f64) -> f64 {
        360.0 * (1.0 - unit_fraction(progress))
    }
}

/// One icon: image reference plus the target a click hands back.
pub struct Icon<T> {
    pub image: String,
    pub target: Rc<T>,
    pub badge: Option<IconBadge>,
}

impl<T> Icon<T> {
    pub fn new(image: impl Into<String>, target: Rc<T>) -> Self {
        Self {
            image: image.into(),
            target,
            badge: None,
        }
    }

    pub fn with_badge(mut self, badge: IconBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn view(&self) -> IconView {
        IconView {
            image: self.image.clone(),
            badge: self.badge,
        }
    }
}

impl<T> Clone for Icon<T> {
    fn clone(&self) -> Self {
        Self {
            image: self.image.clone(),
            target: self.target.clone(),
            badge: self.badge,
        }
    }
}

// Targets compare by identity; they need not implement PartialEq.
impl<T> PartialEq for Icon<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.target, &other.target) && self.image == other.image && self.badge == other.badge
    }
}

/// What a holder needs to draw an icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconView {
    pub image: String,
    pub badge: Option<IconBadge>,
}

/// Append-only list backing one holder. Only `clear` removes icons.
pub struct IconList<T> {
    icons: Vec<Icon<T>>,
}

impl<T> IconList<T> {
    pub fn push(&mut self, icon: Icon<T>) {
        self.icons.push(icon);
    }

    pub fn clear(&mut self) {
        self.icons.clear();
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Icon<T>> {
        self.icons.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Icon<T>> {
        self.icons.iter()
    }

    pub fn views(&self) -> Vec<IconView> {
        self.icons.iter().map(Icon::view).collect()
    }
}

impl<T> Default for IconList<T> {
    fn default() -> Self {
        Self { icons: Vec::new() }
    }
}

impl<T> Clone for IconList<T> {
    fn clone(&self) -> Self {
        Self {
            icons: self.icons.clone(),
        }
    }
}

impl<T> PartialEq for IconList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.icons == other.icons
    }
}

/// CSS `background-image` value for an image reference. Only quotes and
/// backslashes are escaped, to keep the declaration well formed.
pub fn background_image(image: &str) -> String {
    let escaped = image.replace('\\', "\\\\").replace('"', "\\\"");
    format!("url(\"{}\")", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_keeps_call_order_without_dedup() {
        let a = Rc::new("a");
        let mut list = IconList::default();
        list.push(Icon::new("a.png", a.clone()));
        list.push(Icon::new("b.png", Rc::new("b")));
        list.push(Icon::new("a.png", a.clone()));
        let images: Vec<_> = list.iter().map(|i| i.image.as_str()).collect();
        assert_eq!(images, ["a.png", "b.png", "a.png"]);
        assert!(Rc::ptr_eq(&list.get(2).unwrap().target, &a));
        list.clear();
        assert!(list.is_empty());
        assert!(list.get(0).is_none());
    }

    #[test]
    fn icons_compare_targets_by_identity() {
        let x = Icon::new("x.png", Rc::new(7));
        let y = Icon::new("x.png", Rc::new(7));
        assert!(x == x.clone());
        assert!(x != y);
    }

    #[test]
    fn holder_ids_and_methods_per_category() {
        let ids = RegionIds::default();
        assert_eq!(IconCategory::Unit.holder_id(&ids), "unit-holder");
        assert_eq!(IconCategory::Ability.holder_id(&ids), "ability-holder");
        assert_eq!(IconCategory::Item.holder_id(&ids), "item-holder");
        assert_eq!(IconCategory::Ability.controller_method(), "abilityIconBtn");
    }

    #[test]
    fn health_colour_thresholds() {
        assert_eq!(IconBadge::health_color(0.9), "rgb(84,255,106)");
        assert_eq!(IconBadge::health_color(0.5), "rgb(255,194,41)");
        assert_eq!(IconBadge::health_color(0.3), "rgb(255,194,41)");
        assert_eq!(IconBadge::health_color(0.25), "rgb(255,0,61)");
        assert_eq!(IconBadge::health_color(f64::NAN), "rgb(255,0,61)");
        assert_eq!(IconBadge::health_fraction(1.7), 1.0);
        assert_eq!(IconBadge::health_fraction(-0.2), 0.0);
    }

    #[test]
    fn cooldown_pie_shrinks_with_progress() {
        assert_eq!(IconBadge::cooldown_degrees(0.0), 360.0);
        assert_eq!(IconBadge::cooldown_degrees(0.75), 90.0);
        assert_eq!(IconBadge::cooldown_degrees(1.0), 0.0);
        assert_eq!(IconBadge::cooldown_degrees(3.0), 0.0);
    }

    #[test]
    fn background_image_is_verbatim_apart_from_quotes() {
        assert_eq!(background_image("foo.png"), "url(\"foo.png\")");
        assert_eq!(
            background_image("data:image/png;base64,AAA="),
            "url(\"data:image/png;base64,AAA=\")"
        );
        assert_eq!(background_image("a\"b"), "url(\"a\\\"b\")");
    }
}
