use shared::i18n::Language;
use shared::{SpinError, SpinOutcome, SpinPolicy, Wheel};
use yew::prelude::*;

use crate::components::spin_controls::{ResultDisplay, SpinButton};
use crate::components::wheel_canvas::WheelCanvas;
use crate::hooks::use_wheel_spin;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct GamePreviewModalProps {
    pub wheel: Wheel,
    pub on_close: Callback<()>,
}

/// Lets the owner try the wheel as configured in the form, unsaved edits
/// included, without the one-spin limit.
#[function_component(GamePreviewModal)]
pub fn game_preview_modal(props: &GamePreviewModalProps) -> Html {
    let on_reveal = Callback::from(|outcome: SpinOutcome| {
        log::debug!("preview landed on {:?}", outcome.winner.name);
    });
    let spinner = use_wheel_spin(SpinPolicy::Unlimited, on_reveal);
    let lots = props.wheel.normalized_lots();

    let onclick = {
        let spin = spinner.spin.clone();
        let lots = lots.clone();
        Callback::from(move |_: MouseEvent| spin.emit(lots.clone()))
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 backdrop-blur-sm p-4">
            <div class={classes!(styles::CARD, "max-w-xl", "w-full", "relative")}>
                <button onclick={close} class={classes!(styles::BUTTON_ICON, "absolute", "top-3", "right-3")}>
                    {"✕"}
                </button>
                <h2 class={classes!(styles::TEXT_H2, "mb-4", "text-center")}>{&props.wheel.business_name}</h2>
                <div class="flex justify-center mb-6">
                    <WheelCanvas
                        lots={lots.clone()}
                        colors={props.wheel.main_colors.clone()}
                        rotation={spinner.rotation}
                        is_spinning={spinner.is_spinning}
                        logo_url={props.wheel.logo_url.clone()}
                    />
                </div>
                if spinner.error == Some(SpinError::NoEligiblePrize) {
                    <p class={classes!(styles::TEXT_ERROR, "text-center", "mb-4")}>
                        {shared::constants::NO_ELIGIBLE_PRIZE_ERROR}
                    </p>
                }
                <div class="max-w-[300px] mx-auto">
                    <SpinButton
                        is_spinning={spinner.is_spinning}
                        disabled={!spinner.can_spin()}
                        language={Language::En}
                        {onclick}
                    />
                </div>
                if !spinner.is_spinning {
                    <ResultDisplay outcome={spinner.revealed.clone()} language={Language::En} />
                }
            </div>
        </div>
    }
}
