mod components;
mod draw;
mod model;
mod state;
mod util;

fn main() {
    util::install_panic_hook();
    yew::Renderer::<components::app::App>::new().render();
}
