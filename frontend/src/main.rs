use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod reveal;
mod catalog;
mod icons;
mod navigation;
mod styles;
mod components {
    pub mod header;
    pub mod footer;
    pub mod image;
    pub mod code_rain;
    pub mod contact_form;
    pub mod service_card;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod why_choose_us;
    pub mod not_found;
}

use components::{footer::Footer, header::Header};
use pages::{
    home::Home,
    services::Services,
    why_choose_us::WhyChooseUs,
    not_found::NotFound,
};
use styles::SITE_STYLES;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/why-choose-us")]
    WhyChooseUs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::WhyChooseUs => {
            info!("Rendering Why Choose Us page");
            html! { <WhyChooseUs /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{ SITE_STYLES }</style>
            <Header />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Luminaryforge site");
    yew::Renderer::<App>::new().render();
}
