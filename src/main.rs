use components::App;

mod components;
mod model;
mod state;
mod util;

fn main() {
    yew::Renderer::<App>::new().render();
}
