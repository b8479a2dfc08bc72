pub mod app;
pub mod controls_panel;
pub mod settings_modal;
pub mod stats_panel;
pub mod touch_view;
