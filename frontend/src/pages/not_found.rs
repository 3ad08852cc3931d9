use yew::prelude::*;
use yew_router::prelude::*;

use crate::icons::{Icon, IconSvg};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="section not-found">
            <span class="eyebrow">{"Error 404"}</span>
            <h1 class="section-title">{"SIGNAL "}<span class="accent">{"LOST"}</span></h1>
            <p class="section-lead">{"The page you requested does not exist or has been moved."}</p>
            <Link<Route> to={Route::Home} classes="btn-primary">
                {"RETURN HOME"}<IconSvg icon={Icon::ArrowRight} size={20} />
            </Link<Route>>
            <style>
                {r#"
.not-found {
    min-height: 80vh;
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    justify-content: center;
    padding-top: 10rem;
}
                "#}
            </style>
        </section>
    }
}
