use crate::hud::menu::fade_style;
use crate::hud::PauseMenu;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PauseMenuPanelProps {
    pub overlay_id: AttrValue,
    pub menu_id: AttrValue,
    pub resume_id: AttrValue,
    pub menu: PauseMenu,
    pub fade_ms: u32,
    pub on_resume: Callback<()>,
    pub on_save: Callback<()>,
    pub on_quit: Callback<()>,
}

#[function_component]
pub fn PauseMenuPanel(props: &PauseMenuPanelProps) -> Html {
    let resume_cb = {
        let cb = props.on_resume.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let save_cb = {
        let cb = props.on_save.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let quit_cb = {
        let cb = props.on_quit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<>
        <div id={props.overlay_id.clone()} style={format!("position:absolute; inset:0; background:rgba(0,0,0,0.55); z-index:40; {}", fade_style(props.menu.overlay, props.fade_ms))}></div>
        <div id={props.menu_id.clone()} style={format!("position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:240px; display:flex; flex-direction:column; gap:10px; z-index:50; {}", fade_style(props.menu.panel, props.fade_ms))}>
            <h3 style="margin:0; font-size:18px; text-align:center;">{"Paused"}</h3>
            <button id={props.resume_id.clone()} onclick={resume_cb}>{"Resume"}</button>
            <button onclick={save_cb}>{"Save"}</button>
            <button onclick={quit_cb}>{"Quit"}</button>
        </div>
    </>}
}
