use crate::hud::icon::background_image;
use crate::hud::{IconBadge, IconCategory, IconView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IconHolderProps {
    pub id: AttrValue,
    pub category: IconCategory,
    pub icons: Vec<IconView>,
    pub size_px: u32,
    /// Emits the index of the clicked icon.
    pub on_activate: Callback<usize>,
}

fn icon_style(category: IconCategory, image: &str, size_px: u32) -> String {
    format!(
        "position:relative; width:{}px; height:{}px; background-color:{}; background-image:{}; background-size:cover; border:1px solid #30363d; border-radius:4px; overflow:hidden;",
        size_px,
        size_px,
        category.background_color(),
        background_image(image)
    )
}

fn badge_overlay(badge: Option<IconBadge>) -> Html {
    match badge {
        None => html! {},
        Some(IconBadge::Unit { level, health }) => {
            let pct = IconBadge::health_fraction(health) * 100.0;
            html! {<>
                <span style="position:absolute; top:1px; left:2px; font-size:10px; font-weight:600; color:#000;">{ level }</span>
                <div style="position:absolute; left:0; right:0; bottom:0; height:6px; background:rgba(200,200,200,0.6);">
                    <div style={format!("height:100%; width:{:.1}%; background:{};", pct, IconBadge::health_color(health))}></div>
                </div>
            </>}
        }
        Some(IconBadge::Cooldown { progress }) => {
            let deg = IconBadge::cooldown_degrees(progress);
            if deg <= 0.0 {
                return html! {};
            }
            html! {<div style={format!("position:absolute; inset:0; background:conic-gradient(rgba(0,0,0,0.6) 0deg {:.1}deg, transparent {:.1}deg 360deg);", deg, deg)}></div>}
        }
    }
}

#[function_component]
pub fn IconHolder(props: &IconHolderProps) -> Html {
    let icons = props.icons.iter().enumerate().map(|(index, icon)| {
        let onclick = {
            let cb = props.on_activate.clone();
            Callback::from(move |_: MouseEvent| cb.emit(index))
        };
        html! {
            <div key={index} class="icon" style={icon_style(props.category, &icon.image, props.size_px)} {onclick}>
                { badge_overlay(icon.badge) }
            </div>
        }
    });
    html! {<div id={props.id.clone()} style="display:flex; flex-wrap:wrap; gap:4px; min-height:8px;">
        { for icons }
    </div>}
}
