use crate::hud::{DefaultAction, PointerButton, PointerClick};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProxyProps {
    pub id: AttrValue,
    /// Returns whether the browser default should run.
    pub on_pointer: Callback<(PointerButton, PointerClick), DefaultAction>,
    pub on_move: Callback<PointerClick>,
}

/// Transparent region over the game canvas that catches clicks for the controller.
#[function_component(GameViewProxy)]
pub fn game_view_proxy(props: &GameViewProxyProps) -> Html {
    let handler = |button: PointerButton| {
        let cb = props.on_pointer.clone();
        Callback::from(move |e: MouseEvent| {
            if cb.emit((button, PointerClick::from(&e))) == DefaultAction::Suppress {
                e.prevent_default();
            }
        })
    };
    let onmousemove = {
        let cb = props.on_move.clone();
        Callback::from(move |e: MouseEvent| cb.emit(PointerClick::from(&e)))
    };
    html! {<div
        id={props.id.clone()}
        style="position:absolute; inset:0; z-index:0;"
        onclick={handler(PointerButton::Primary)}
        oncontextmenu={handler(PointerButton::Context)}
        {onmousemove}
    ></div>}
}
