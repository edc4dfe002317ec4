//! Booking page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export `BookingPage` and its properties.
//! - Delegate every message to the pure `update::update` and run the
//!   commands it returns through `commands::execute`.
//! - On first render, load the driver list.

use yew::prelude::*;

mod cards;
mod commands;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

use crate::api::ApiClient;
use crate::config::AppConfig;

pub use messages::Msg;
pub use state::BookingPage;

#[derive(Properties, PartialEq, Clone)]
pub struct BookingPageProps {
    /// Resolved at startup by `App`; only the API base is used here.
    #[prop_or_default]
    pub config: AppConfig,
}

impl Component for BookingPage {
    type Message = Msg;
    type Properties = BookingPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        BookingPage::new(ApiClient::new(&ctx.props().config))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let outcome = update::update(&mut self.state, msg);
        for command in outcome.commands {
            commands::execute(&self.api, ctx.link(), command);
        }
        outcome.rerender
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.api = ApiClient::new(&ctx.props().config);
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::LoadDrivers);
        }
    }
}
