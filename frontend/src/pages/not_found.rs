use yew::prelude::*;
use yew_router::prelude::Link;

use crate::base::Base;
use crate::{styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Base>
            <div class={classes!(styles::CONTAINER_LG, "text-center", "py-24")}>
                <h1 class={styles::TEXT_H1}>{"404"}</h1>
                <p class={classes!(styles::TEXT_BODY, "mt-4")}>{"This page spun off somewhere."}</p>
                <Link<Route> to={Route::Home} classes={classes!(styles::BUTTON_PRIMARY, "mt-8")}>
                    {"Back home"}
                </Link<Route>>
            </div>
        </Base>
    }
}
