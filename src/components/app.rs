use std::rc::Rc;

use super::hud_view::HudView;
use crate::config::load_config;
use crate::demo::DemoController;
use crate::hud::{HudHandle, HudState};
use yew::prelude::*;

#[derive(Properties)]
struct DemoBinderProps {
    controller: Rc<DemoController>,
}

impl PartialEq for DemoBinderProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

/// Picks the HUD handle up from context and gives it to the demo controller.
#[function_component(DemoBinder)]
fn demo_binder(props: &DemoBinderProps) -> Html {
    let hud = use_context::<HudHandle<DemoController>>();
    {
        let controller = props.controller.clone();
        use_effect_with((), move |_| {
            match hud {
                Some(hud) => controller.attach(hud),
                None => log::warn!("no hud handle in context; demo controller left detached"),
            }
            || ()
        });
    }
    html! {}
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(load_config);
    let hud_state = use_reducer(HudState::<DemoController>::default);
    let controller = use_state(|| Rc::new(DemoController::default()));

    html! { <HudView<DemoController>
        state={hud_state.clone()}
        controller={(*controller).clone()}
        config={(*config).clone()}
    >
        <DemoBinder controller={(*controller).clone()} />
    </HudView<DemoController>> }
}
