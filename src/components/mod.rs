pub mod app;
pub mod game_view_proxy;
pub mod goal_panel;
pub mod hud_view;
pub mod icon_holder;
pub mod pause_menu;
