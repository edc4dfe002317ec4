use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod dom;
mod layout;

fn main() {
    yew::Renderer::<App>::new().render();
}
