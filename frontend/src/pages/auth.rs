use shared::auth::{LoginRequest, SignupRequest};
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::base::Base;
use crate::hooks::auth_state::{get_token, store_session};
use crate::hooks::form_state::{describe_errors, use_form_state};
use crate::{styles, Route};

#[derive(Clone, PartialEq)]
pub enum AuthMode {
    Login,
    Signup,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: AuthMode,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn is_checked(node: &NodeRef) -> bool {
    node.cast::<HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
struct FormProps {
    on_success: Callback<()>,
}

#[function_component(LoginForm)]
fn login_form(props: &FormProps) -> Html {
    let form = use_form_state();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let remember_ref = use_node_ref();

    let onsubmit = {
        let form = form.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let remember_ref = remember_ref.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.loading {
                return;
            }

            let request = LoginRequest {
                email: input_value(&email_ref).trim().to_string(),
                password: input_value(&password_ref),
            };
            if let Err(errors) = request.validate() {
                form.handle_error.emit(describe_errors(&errors));
                return;
            }

            let remember = is_checked(&remember_ref);
            let form = form.clone();
            let on_success = on_success.clone();
            form.set_loading.emit(true);
            spawn_local(async move {
                match api::login(&request).await {
                    Ok(auth) => {
                        store_session(&auth, remember);
                        log::info!("logged in as {}", auth.user_id);
                        form.handle_success.emit(String::new());
                        on_success.emit(());
                    }
                    Err(e) => form.handle_error.emit(e),
                }
            });
        })
    };

    html! {
        <form class={styles::FORM} {onsubmit}>
            <h2 class={classes!(styles::TEXT_H2, "text-center")}>{"Welcome back"}</h2>
            <label class={styles::TEXT_LABEL}>{"Email"}
                <input ref={email_ref} type="email" class={styles::INPUT} autocomplete="email" />
            </label>
            <label class={styles::TEXT_LABEL}>{"Password"}
                <input ref={password_ref} type="password" class={styles::INPUT} autocomplete="current-password" />
            </label>
            <label class={classes!(styles::TEXT_SMALL, "flex", "items-center", "gap-2")}>
                <input ref={remember_ref} type="checkbox" />
                {"Remember me"}
            </label>
            if !form.error.is_empty() {
                <p class={styles::TEXT_ERROR}>{&form.error}</p>
            }
            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={form.loading}>
                { if form.loading { "Signing in..." } else { "Sign in" } }
            </button>
        </form>
    }
}

#[function_component(SignupForm)]
fn signup_form(props: &FormProps) -> Html {
    let form = use_form_state();
    let business_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();

    let onsubmit = {
        let form = form.clone();
        let business_ref = business_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.loading {
                return;
            }

            let request = SignupRequest {
                business_name: input_value(&business_ref).trim().to_string(),
                email: input_value(&email_ref).trim().to_string(),
                password: input_value(&password_ref),
            };
            if let Err(errors) = request.validate() {
                form.handle_error.emit(describe_errors(&errors));
                return;
            }
            if request.password != input_value(&confirm_ref) {
                form.handle_error.emit("Passwords do not match".to_string());
                return;
            }

            let form = form.clone();
            let on_success = on_success.clone();
            form.set_loading.emit(true);
            spawn_local(async move {
                match api::signup(&request).await {
                    Ok(auth) => {
                        store_session(&auth, true);
                        log::info!("created account {}", auth.user_id);
                        form.handle_success.emit(String::new());
                        on_success.emit(());
                    }
                    Err(e) => form.handle_error.emit(e),
                }
            });
        })
    };

    html! {
        <form class={styles::FORM} {onsubmit}>
            <h2 class={classes!(styles::TEXT_H2, "text-center")}>{"Create your wheel"}</h2>
            <label class={styles::TEXT_LABEL}>{"Business name"}
                <input ref={business_ref} type="text" class={styles::INPUT} autocomplete="organization" />
            </label>
            <label class={styles::TEXT_LABEL}>{"Email"}
                <input ref={email_ref} type="email" class={styles::INPUT} autocomplete="email" />
            </label>
            <label class={styles::TEXT_LABEL}>{"Password"}
                <input ref={password_ref} type="password" class={styles::INPUT} autocomplete="new-password" />
            </label>
            <p class={styles::TEXT_HINT}>
                {"At least 8 characters with an uppercase letter, a lowercase letter and a digit."}
            </p>
            <label class={styles::TEXT_LABEL}>{"Confirm password"}
                <input ref={confirm_ref} type="password" class={styles::INPUT} autocomplete="new-password" />
            </label>
            if !form.error.is_empty() {
                <p class={styles::TEXT_ERROR}>{&form.error}</p>
            }
            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={form.loading}>
                { if form.loading { "Creating..." } else { "Sign up" } }
            </button>
        </form>
    }
}

#[function_component(Auth)]
pub fn auth(props: &Props) -> Html {
    let navigator = use_navigator();
    let logged_in = get_token().is_some();

    {
        let navigator = navigator.clone();
        use_effect_with(logged_in, move |logged_in| {
            if *logged_in {
                if let Some(navigator) = navigator {
                    navigator.replace(&Route::Dashboard);
                }
            }
            || ()
        });
    }

    let on_success = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Dashboard);
            }
        })
    };

    if logged_in {
        return html! {};
    }

    html! {
        <Base>
            <div class="w-full px-4 sm:px-6 lg:px-8">
                <div class={styles::AUTH_CARD}>
                    {
                        match props.mode {
                            AuthMode::Login => html! {
                                <>
                                    <LoginForm {on_success} />
                                    <p class={classes!(styles::TEXT_SECONDARY, "mt-4", "text-center")}>
                                        {"No account yet? "}
                                        <Link<Route> to={Route::Signup} classes={styles::LINK}>
                                            {"Sign up"}
                                        </Link<Route>>
                                    </p>
                                </>
                            },
                            AuthMode::Signup => html! {
                                <>
                                    <SignupForm {on_success} />
                                    <p class={classes!(styles::TEXT_SECONDARY, "mt-4", "text-center")}>
                                        {"Already have an account? "}
                                        <Link<Route> to={Route::Login} classes={styles::LINK}>
                                            {"Sign in"}
                                        </Link<Route>>
                                    </p>
                                </>
                            },
                        }
                    }
                </div>
            </div>
        </Base>
    }
}
