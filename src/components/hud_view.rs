use std::rc::Rc;

use super::{game_view_proxy::GameViewProxy, goal_panel::GoalPanel, icon_holder::IconHolder, pause_menu::PauseMenuPanel};
use crate::config::HudConfig;
use crate::hud::input::{forward_key_down, forward_mouse_move, forward_pointer};
use crate::hud::state::run_menu_command;
use crate::hud::{Controller, HudHandle, HudState, IconCategory, KeyPress, MenuCommand, PointerButton, PointerClick};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties)]
pub struct HudViewProps<C>
where
    C: Controller,
{
    pub state: UseReducerHandle<HudState<C>>,
    pub controller: Rc<C>,
    pub config: HudConfig,
    /// Rendered inside the HUD; these can reach the `HudHandle` through context.
    #[prop_or_default]
    pub children: Html,
}

impl<C: Controller> PartialEq for HudViewProps<C> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && Rc::ptr_eq(&self.controller, &other.controller)
            && self.config == other.config
            && self.children == other.children
    }
}

/// Root of the HUD: game view proxy underneath, icon bar, goal, menu button and pause menu.
#[function_component(HudView)]
pub fn hud_view<C>(props: &HudViewProps<C>) -> Html
where
    C: Controller,
{
    let ids = &props.config.ids;
    let handle = HudHandle::new(props.state.dispatcher());

    // Window key listener is registered once; it reads whichever controller is current
    let controller_ref = use_mut_ref(|| props.controller.clone());
    *controller_ref.borrow_mut() = props.controller.clone();
    {
        let controller_ref = controller_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let key_cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                if let Some(key) = KeyPress::from_event(&e) {
                    let controller = controller_ref.borrow().clone();
                    forward_key_down(&*controller, key);
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                if win
                    .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("could not listen for keydown");
                }
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
                }
                drop(key_cb);
            }
        });
    }

    let activate = |category: IconCategory| {
        let state = props.state.clone();
        let controller = props.controller.clone();
        Callback::from(move |index: usize| {
            state.activate_icon(category, index, &*controller);
        })
    };

    let on_pointer = {
        let controller = props.controller.clone();
        Callback::from(move |(button, click): (PointerButton, PointerClick)| {
            forward_pointer(&*controller, button, click)
        })
    };
    let on_move = {
        let controller = props.controller.clone();
        Callback::from(move |pos: PointerClick| {
            forward_mouse_move(&*controller, pos);
        })
    };

    let menu_command = |command: MenuCommand| {
        let state = props.state.clone();
        let controller = props.controller.clone();
        Callback::from(move |_: ()| {
            if let Some(action) = run_menu_command(command, &*controller) {
                state.dispatch(action);
            }
        })
    };
    let open_menu = {
        let cb = menu_command(MenuCommand::Open);
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let holders = IconCategory::ALL.into_iter().map(|category| {
        html! {
            <IconHolder
                key={category.controller_method()}
                id={AttrValue::from(category.holder_id(ids).to_string())}
                {category}
                icons={props.state.icon_views(category)}
                size_px={props.config.icon_size_px}
                on_activate={activate(category)}
            />
        }
    });

    html! {<ContextProvider<HudHandle<C>> context={handle}>
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
            <GameViewProxy id={ids.game_view_proxy.clone()} {on_pointer} {on_move} />
            <GoalPanel goal={props.state.goal.clone()} />
            <div style="position:absolute; top:12px; right:12px; z-index:10;">
                <button id={ids.menu_button.clone()} onclick={open_menu}>{"Menu"}</button>
            </div>
            <div style="position:absolute; left:50%; bottom:12px; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:16px; align-items:flex-end; z-index:10;">
                { for holders }
            </div>
            <PauseMenuPanel
                overlay_id={ids.overlay.clone()}
                menu_id={ids.pause_menu.clone()}
                resume_id={ids.resume_button.clone()}
                menu={props.state.menu}
                fade_ms={props.config.fade_ms}
                on_resume={menu_command(MenuCommand::Resume)}
                on_save={menu_command(MenuCommand::Save)}
                on_quit={menu_command(MenuCommand::Quit)}
            />
            { props.children.clone() }
        </div>
    </ContextProvider<HudHandle<C>>>}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::controller::testing::Recorder;

    #[function_component(HandleCheck)]
    fn handle_check() -> Html {
        match use_context::<HudHandle<Recorder>>() {
            Some(_) => html! { <span>{"hud handle present"}</span> },
            None => html! { <span>{"no hud handle"}</span> },
        }
    }

    #[function_component(Harness)]
    fn harness() -> Html {
        let state = use_reducer(HudState::<Recorder>::default);
        let controller = use_state(|| Rc::new(Recorder::default()));
        html! { <HudView<Recorder>
            state={state.clone()}
            controller={(*controller).clone()}
            config={HudConfig::default()}
        >
            <HandleCheck />
        </HudView<Recorder>> }
    }

    #[tokio::test]
    async fn children_get_the_handle_from_context() {
        let page = yew::LocalServerRenderer::<Harness>::new().render().await;
        assert!(page.contains("hud handle present"), "{}", page);
        assert!(!page.contains("no hud handle"));
    }

    #[tokio::test]
    async fn renders_every_region_with_its_id() {
        let page = yew::LocalServerRenderer::<Harness>::new().render().await;
        for id in [
            "unit-holder",
            "ability-holder",
            "item-holder",
            "game-view-proxy",
            "menu-button",
            "resume-btn",
            "overlay",
            "pause-menu",
        ] {
            assert!(page.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
    }
}
