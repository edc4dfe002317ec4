use crate::components::booking::BookingPage;
use crate::config::AppConfig;
use yew::{html, Component, Context, Html};

pub struct App {
    config: AppConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = AppConfig::load();
        gloo_console::log!("Booking API base:", config.api_base.clone());
        Self { config }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BookingPage config={self.config.clone()} />
        }
    }
}
