use shared::customers::NewCustomerLead;
use shared::i18n::{translate, Language, TextKey};
use shared::{SpinError, SpinOutcome, SpinPolicy, Wheel};
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::api;
use crate::components::{ResultDisplay, SpinButton, WheelCanvas};
use crate::config::browser_language;
use crate::hooks::form_state::{describe_errors, use_form_state};
use crate::hooks::use_wheel_spin;
use crate::styles;

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Review,
    Spin,
    Claim,
    Done,
}

#[derive(Properties, PartialEq)]
pub struct WheelGamePageProps {
    pub wheel_id: String,
}

#[derive(Properties, PartialEq)]
struct ClaimFormProps {
    wheel_id: String,
    outcome: SpinOutcome,
    language: Language,
    on_claimed: Callback<()>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

#[function_component(ClaimForm)]
fn claim_form(props: &ClaimFormProps) -> Html {
    let form = use_form_state();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let lang = props.language;

    let onsubmit = {
        let form = form.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let wheel_id = props.wheel_id.clone();
        let winner = props.outcome.winner.clone();
        let on_claimed = props.on_claimed.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.loading {
                return;
            }

            let phone = input_value(&phone_ref);
            let lead = NewCustomerLead {
                wheel_id: wheel_id.clone(),
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                phone: (!phone.is_empty()).then_some(phone),
                prize: winner.name.clone(),
                promo_code: winner.promo_code.clone(),
            };
            if let Err(errors) = lead.validate() {
                form.handle_error.emit(describe_errors(&errors));
                return;
            }

            let form = form.clone();
            let on_claimed = on_claimed.clone();
            form.set_loading.emit(true);
            spawn_local(async move {
                match api::submit_customer(&lead).await {
                    Ok(saved) => {
                        log::info!("lead {} recorded for prize {}", saved.id, saved.prize);
                        form.handle_success.emit(String::new());
                        on_claimed.emit(());
                    }
                    Err(e) => form.handle_error.emit(e),
                }
            });
        })
    };

    html! {
        <form class={classes!(styles::FORM, "mt-6", "w-full", "max-w-sm")} {onsubmit}>
            <input ref={name_ref} type="text" class={styles::INPUT}
                placeholder={translate(TextKey::YourName, lang)} autocomplete="name" />
            <input ref={email_ref} type="email" class={styles::INPUT}
                placeholder={translate(TextKey::YourEmail, lang)} autocomplete="email" />
            <input ref={phone_ref} type="tel" class={styles::INPUT}
                placeholder={translate(TextKey::YourPhone, lang)} autocomplete="tel" />
            if !form.error.is_empty() {
                <p class={styles::TEXT_ERROR}>{&form.error}</p>
            }
            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={form.loading}>
                {translate(TextKey::Submit, lang)}
            </button>
        </form>
    }
}

/// Public page behind the QR code: review, one spin, then lead capture.
#[function_component(WheelGamePage)]
pub fn wheel_game_page(props: &WheelGamePageProps) -> Html {
    let wheel = use_state(|| None::<Wheel>);
    let load_error = use_state(|| None::<String>);
    let stage = use_state(|| Stage::Review);
    let language = use_memo((), |_| Language::from_tag(&browser_language()));
    let lang = *language;

    {
        let wheel = wheel.clone();
        let load_error = load_error.clone();
        let stage = stage.clone();
        use_effect_with(props.wheel_id.clone(), move |wheel_id| {
            let wheel_id = wheel_id.clone();
            spawn_local(async move {
                match api::fetch_wheel(&wheel_id).await {
                    Ok(fetched) => {
                        if !fetched.has_review_link() {
                            stage.set(Stage::Spin);
                        }
                        wheel.set(Some(fetched));
                    }
                    Err(e) => {
                        log::error!("failed to load wheel {}: {}", wheel_id, e);
                        load_error.set(Some(e));
                    }
                }
            });
            || ()
        });
    }

    let on_reveal = {
        let stage = stage.clone();
        Callback::from(move |_: SpinOutcome| stage.set(Stage::Claim))
    };
    let spinner = use_wheel_spin(SpinPolicy::OncePerSession, on_reveal);

    if let Some(error) = (*load_error).as_ref() {
        return html! {
            <div class={styles::CONTAINER}>
                <div class={styles::CARD_ERROR}>{error}</div>
            </div>
        };
    }

    let Some(wheel) = (*wheel).clone() else {
        return html! {
            <div class="flex justify-center py-24">
                <div class={styles::LOADING_SPINNER}></div>
            </div>
        };
    };

    let lots = wheel.normalized_lots();

    let on_reviewed = {
        let stage = stage.clone();
        Callback::from(move |_: MouseEvent| stage.set(Stage::Spin))
    };

    let onclick = {
        let spin = spinner.spin.clone();
        let lots = lots.clone();
        Callback::from(move |_: MouseEvent| spin.emit(lots.clone()))
    };

    let on_claimed = {
        let stage = stage.clone();
        Callback::from(move |_: ()| stage.set(Stage::Done))
    };

    let spin_error = match spinner.error {
        Some(SpinError::NoEligiblePrize) => Some(translate(TextKey::NoPrize, lang)),
        Some(SpinError::AlreadySpun) => Some(translate(TextKey::AlreadyPlayed, lang)),
        _ => None,
    };

    html! {
        <div class={classes!(styles::CONTAINER, "flex", "flex-col", "items-center", "text-center")}>
            if let Some(logo) = wheel.logo_url.clone() {
                <img src={logo} alt={wheel.business_name.clone()} class="h-16 mb-4 object-contain" />
            }
            <h1 class={styles::TEXT_H1}>{&wheel.business_name}</h1>
            if !wheel.customer_instruction.is_empty() {
                <p class={classes!(styles::TEXT_BODY, "mt-2")}>{&wheel.customer_instruction}</p>
            }

            <div class="my-8">
                <WheelCanvas
                    lots={lots.clone()}
                    colors={wheel.main_colors.clone()}
                    rotation={spinner.rotation}
                    is_spinning={spinner.is_spinning}
                    logo_url={wheel.logo_url.clone()}
                />
            </div>

            {
                match *stage {
                    Stage::Review => html! {
                        <div class="flex flex-col items-center gap-4 w-full max-w-[300px]">
                            <a href={wheel.google_review_link.clone()} target="_blank" rel="noopener noreferrer"
                                class={classes!(styles::BUTTON_SECONDARY, "w-full")}>
                                {translate(TextKey::LeaveReview, lang)}
                            </a>
                            <button onclick={on_reviewed} class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                                {translate(TextKey::ReviewDone, lang)}
                            </button>
                        </div>
                    },
                    Stage::Spin => html! {
                        <div class="w-full max-w-[300px]">
                            <SpinButton
                                is_spinning={spinner.is_spinning}
                                disabled={!spinner.can_spin()}
                                language={lang}
                                {onclick}
                            />
                            if let Some(message) = spin_error {
                                <p class={classes!(styles::TEXT_ERROR, "mt-4")}>{message}</p>
                            }
                        </div>
                    },
                    Stage::Claim => html! {
                        <>
                            <ResultDisplay outcome={spinner.revealed.clone()} language={lang} />
                            if let Some(outcome) = spinner.revealed.clone() {
                                <ClaimForm
                                    wheel_id={props.wheel_id.clone()}
                                    {outcome}
                                    language={lang}
                                    {on_claimed}
                                />
                            }
                        </>
                    },
                    Stage::Done => html! {
                        <>
                            <ResultDisplay outcome={spinner.revealed.clone()} language={lang} />
                            <div class={classes!(styles::CARD_SUCCESS, "mt-4")}>
                                {translate(TextKey::ThankYou, lang)}
                            </div>
                        </>
                    },
                }
            }
        </div>
    }
}
