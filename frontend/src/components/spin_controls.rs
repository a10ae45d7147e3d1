use shared::i18n::{translate, Language, TextKey};
use shared::SpinOutcome;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub language: Language,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let label = if props.is_spinning {
        translate(TextKey::Spinning, props.language)
    } else {
        translate(TextKey::Spin, props.language)
    };

    let is_disabled = props.is_spinning || props.disabled;
    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 focus:outline-none focus:ring-4 focus:ring-yellow-300 bg-transparent"
            >
                <span>{label}</span>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub outcome: Option<SpinOutcome>,
    pub language: Language,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(outcome) = &props.outcome else {
        return html! {};
    };

    html! {
        <div class="mt-8 mb-4 flex flex-col items-center justify-center">
            <div class="flex items-center justify-center px-6 py-4 rounded-xl bg-gradient-to-r from-orange-400 to-orange-600 text-white font-bold text-xl shadow-lg border-2 border-orange-300 animate-bounce">
                <span>{format!("{} : {}", translate(TextKey::YouWon, props.language), outcome.winner.name)}</span>
            </div>
            if let Some(code) = outcome.winner.promo_code.as_ref().filter(|c| !c.is_empty()) {
                <div class="text-sm text-gray-600 dark:text-gray-400 mt-3 bg-gray-100 dark:bg-gray-800 px-4 py-2 rounded-full">
                    {format!("{} : ", translate(TextKey::PromoCode, props.language))}
                    <span class="font-mono font-bold">{code.clone()}</span>
                </div>
            }
        </div>
    }
}
