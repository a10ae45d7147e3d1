use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::auth_state::{clear_session, use_auth_state};
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

/// Page chrome: top navigation plus the routed content.
#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let auth = use_auth_state();
    let navigator = use_navigator();

    let logout = Callback::from(move |_: MouseEvent| {
        clear_session();
        log::info!("owner logged out");
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <div class={styles::CONTAINER}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_CONTENT}>
                    <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>
                        {"SpinWheel"}
                    </Link<Route>>
                    <div class={styles::NAV_ITEMS}>
                        if auth.logged_in {
                            <Link<Route> to={Route::Dashboard} classes={styles::NAV_LINK}>{"Customers"}</Link<Route>>
                            <Link<Route> to={Route::Settings} classes={styles::NAV_LINK}>{"Wheel settings"}</Link<Route>>
                            <button onclick={logout} class={styles::NAV_LINK}>{"Log out"}</button>
                        } else {
                            <Link<Route> to={Route::Login} classes={styles::NAV_LINK}>{"Log in"}</Link<Route>>
                            <Link<Route> to={Route::Signup} classes={styles::BUTTON_PRIMARY}>{"Get started"}</Link<Route>>
                        }
                    </div>
                </div>
            </nav>
            <main class="pt-20 pb-12">
                { props.children.clone() }
            </main>
        </div>
    }
}
