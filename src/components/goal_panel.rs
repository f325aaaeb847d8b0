use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GoalPanelProps {
    pub goal: AttrValue,
}

#[function_component(GoalPanel)]
pub fn goal_panel(props: &GoalPanelProps) -> Html {
    if props.goal.is_empty() {
        return html! {};
    }
    html! {<div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; max-width:320px; font-size:13px; z-index:10;">
        <div style="font-weight:600; margin-bottom:4px;">{"Goal"}</div>
        <div>{ props.goal.clone() }</div>
    </div>}
}
