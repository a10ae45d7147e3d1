use shared::analytics::win_rates;
use shared::{Lot, Wheel};
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api;
use crate::base::Base;
use crate::components::{GamePreviewModal, LotEditor};
use crate::config::play_url;
use crate::hooks::auth_state::get_user_id;
use crate::hooks::form_state::{describe_errors, use_form_state};
use crate::hooks::use_auth_check;
use crate::styles;

type WheelEdit = fn(&mut Wheel, String);

/// Wheel editor: branding, review link and the eight prize slots.
#[function_component(Settings)]
pub fn settings() -> Html {
    use_auth_check();

    let form = use_form_state();
    let wheel = use_state(|| None::<Wheel>);
    let show_preview = use_state(|| false);

    {
        let wheel = wheel.clone();
        use_effect_with((), move |_| {
            if let Some(user_id) = get_user_id() {
                spawn_local(async move {
                    let loaded = match api::fetch_owner_wheel(&user_id).await {
                        Ok(existing) => existing,
                        Err(e) => {
                            log::warn!("no saved wheel for {} ({}), starting fresh", user_id, e);
                            let mut starter = Wheel::starter("");
                            starter.owner_id = Some(user_id);
                            starter
                        }
                    };
                    wheel.set(Some(loaded));
                });
            }
            || ()
        });
    }

    let Some(current) = (*wheel).clone() else {
        return html! {
            <Base>
                <div class="flex justify-center py-24">
                    <div class={styles::LOADING_SPINNER}></div>
                </div>
            </Base>
        };
    };

    let edit = |apply: WheelEdit| {
        let wheel = wheel.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            if let Some(mut next) = (*wheel).clone() {
                apply(&mut next, input.value());
                wheel.set(Some(next));
            }
        })
    };

    let on_instruction = {
        let wheel = wheel.clone();
        Callback::from(move |e: InputEvent| {
            let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() else {
                return;
            };
            if let Some(mut next) = (*wheel).clone() {
                next.customer_instruction = area.value();
                wheel.set(Some(next));
            }
        })
    };

    let on_lot_change = {
        let wheel = wheel.clone();
        Callback::from(move |(index, lot): (usize, Lot)| {
            if let Some(mut next) = (*wheel).clone() {
                next.lots = next.normalized_lots();
                next.lots[index] = lot;
                wheel.set(Some(next));
            }
        })
    };

    let onsubmit = {
        let wheel = wheel.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(mut draft) = (*wheel).clone() else {
                return;
            };
            if form.loading {
                return;
            }

            draft.business_name = draft.business_name.trim().to_string();
            draft.google_review_link = draft.google_review_link.trim().to_string();
            draft.logo_url = draft
                .logo_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty());
            if let Err(errors) = draft.validate() {
                form.handle_error.emit(describe_errors(&errors));
                return;
            }

            let wheel = wheel.clone();
            let form = form.clone();
            form.set_loading.emit(true);
            spawn_local(async move {
                match api::save_wheel(&draft).await {
                    Ok(saved) => {
                        log::info!("saved wheel {:?}", saved.id);
                        wheel.set(Some(saved));
                        form.handle_success.emit("Wheel saved".to_string());
                    }
                    Err(e) => form.handle_error.emit(e),
                }
            });
        })
    };

    let open_preview = {
        let show_preview = show_preview.clone();
        Callback::from(move |_: MouseEvent| show_preview.set(true))
    };
    let close_preview = {
        let show_preview = show_preview.clone();
        Callback::from(move |_: ()| show_preview.set(false))
    };

    let lots = current.normalized_lots();
    let rates = win_rates(&lots);

    let color_input = |label: &'static str, value: &str, apply: WheelEdit| {
        html! {
            <label class={classes!(styles::TEXT_LABEL, "flex", "items-center", "gap-3")}>
                <input type="color" class="h-10 w-14 rounded cursor-pointer" value={value.to_string()} oninput={edit(apply)} />
                {label}
            </label>
        }
    };

    html! {
        <Base>
            <div class={classes!(styles::CONTAINER_LG, "max-w-3xl")}>
                <div class="flex items-center justify-between mb-6">
                    <h1 class={styles::TEXT_H1}>{"Wheel settings"}</h1>
                    <button type="button" class={styles::BUTTON_SECONDARY} onclick={open_preview}>
                        {"Preview"}
                    </button>
                </div>

                if let Some(id) = current.id.as_ref() {
                    <p class={classes!(styles::TEXT_SMALL, "mb-4")}>
                        {"Customers play at "}
                        <a href={play_url(id)} target="_blank" class={styles::LINK}>{play_url(id)}</a>
                    </p>
                }

                <form class={classes!(styles::CARD, "space-y-6")} {onsubmit}>
                    <label class={styles::TEXT_LABEL}>{"Business name"}
                        <input class={styles::INPUT} value={current.business_name.clone()}
                            oninput={edit(|w, v| w.business_name = v)} />
                    </label>
                    <label class={styles::TEXT_LABEL}>{"Google review link"}
                        <input type="url" class={styles::INPUT} value={current.google_review_link.clone()}
                            placeholder="https://g.page/r/.../review"
                            oninput={edit(|w, v| w.google_review_link = v)} />
                    </label>
                    <label class={styles::TEXT_LABEL}>{"Logo URL"}
                        <input type="url" class={styles::INPUT} value={current.logo_url.clone().unwrap_or_default()}
                            oninput={edit(|w, v| w.logo_url = Some(v))} />
                    </label>
                    <label class={styles::TEXT_LABEL}>{"Instructions shown to customers"}
                        <textarea class={styles::INPUT} rows="2" value={current.customer_instruction.clone()}
                            oninput={on_instruction} />
                    </label>

                    <div>
                        <p class={classes!(styles::TEXT_LABEL, "mb-2")}>{"Colors"}</p>
                        <div class="flex flex-wrap gap-6">
                            {color_input("Primary", &current.main_colors.color1, |w, v| w.main_colors.color1 = v)}
                            {color_input("Secondary", &current.main_colors.color2, |w, v| w.main_colors.color2 = v)}
                            {color_input("Accent", &current.main_colors.color3, |w, v| w.main_colors.color3 = v)}
                        </div>
                    </div>

                    <div class="space-y-2">
                        <p class={styles::TEXT_LABEL}>{"Prizes"}</p>
                        <p class={styles::TEXT_HINT}>
                            {"Odds are relative weights. A slot with odds 0 or no name is never won."}
                        </p>
                        { for lots.into_iter().enumerate().map(|(index, lot)| html! {
                            <LotEditor
                                key={index}
                                {index}
                                {lot}
                                win_rate={rates.get(index).copied().unwrap_or(0.0)}
                                on_change={on_lot_change.clone()}
                            />
                        }) }
                    </div>

                    if !form.error.is_empty() {
                        <div class={styles::CARD_ERROR}>{&form.error}</div>
                    }
                    if !form.success.is_empty() {
                        <div class={styles::CARD_SUCCESS}>{&form.success}</div>
                    }

                    <button type="submit" class={styles::BUTTON_PRIMARY} disabled={form.loading}>
                        { if form.loading { "Saving..." } else { "Save wheel" } }
                    </button>
                </form>
            </div>

            if *show_preview {
                <GamePreviewModal wheel={current.clone()} on_close={close_preview} />
            }
        </Base>
    }
}
