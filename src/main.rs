use hud_glue::components::app::App;

fn main() {
    hud_glue::logging::init();
    log::info!("hud starting");
    yew::Renderer::<App>::new().render();
}
