use shared::i18n::Language;
use shared::{SpinPolicy, Wheel};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::base::Base;
use crate::components::{ResultDisplay, SpinButton, WheelCanvas};
use crate::hooks::use_wheel_spin;
use crate::{styles, Route};

struct Step {
    title: &'static str,
    body: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        title: "Scan",
        body: "Customers scan the QR code on your counter or table.",
    },
    Step {
        title: "Review",
        body: "They leave a Google review in a couple of taps.",
    },
    Step {
        title: "Spin",
        body: "They spin your wheel and walk away with a prize. You keep the lead.",
    },
];

#[function_component(DemoWheel)]
fn demo_wheel() -> Html {
    let wheel = use_memo((), |_| Wheel::starter("Demo Cafe"));
    let spinner = use_wheel_spin(SpinPolicy::Unlimited, Callback::noop());
    let lots = wheel.normalized_lots();

    let onclick = {
        let spin = spinner.spin.clone();
        let lots = lots.clone();
        Callback::from(move |_: MouseEvent| spin.emit(lots.clone()))
    };

    html! {
        <div class="flex flex-col items-center">
            <WheelCanvas
                {lots}
                colors={wheel.main_colors.clone()}
                rotation={spinner.rotation}
                is_spinning={spinner.is_spinning}
            />
            <div class="w-full max-w-[300px] mt-6">
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
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Base>
            <section class={classes!(styles::CONTAINER_LG, "grid", "md:grid-cols-2", "gap-12", "items-center")}>
                <div>
                    <h1 class={classes!(styles::TEXT_H1, "text-4xl", "md:text-5xl", "leading-tight")}>
                        {"Turn happy customers into "}
                        <span class="bg-clip-text text-transparent bg-gradient-to-r from-orange-400 to-pink-500">
                            {"five-star reviews"}
                        </span>
                    </h1>
                    <p class={classes!(styles::TEXT_BODY, "mt-6", "text-lg")}>
                        {"A prize wheel your customers play after leaving a review. You pick the prizes and the odds, we collect the leads."}
                    </p>
                    <div class="mt-8 flex space-x-4">
                        <Link<Route> to={Route::Signup} classes={styles::BUTTON_PRIMARY}>{"Create my wheel"}</Link<Route>>
                        <Link<Route> to={Route::Login} classes={styles::BUTTON_SECONDARY}>{"I already have one"}</Link<Route>>
                    </div>
                </div>
                <DemoWheel />
            </section>

            <section class={classes!(styles::CONTAINER_LG, "grid", "md:grid-cols-3", "gap-6")}>
                { for STEPS.iter().enumerate().map(|(i, step)| html! {
                    <div class={styles::CARD}>
                        <div class="text-sm font-bold text-orange-500">{format!("0{}", i + 1)}</div>
                        <h3 class={classes!(styles::TEXT_H3, "mt-2")}>{step.title}</h3>
                        <p class={classes!(styles::TEXT_BODY, "mt-2")}>{step.body}</p>
                    </div>
                }) }
            </section>
        </Base>
    }
}
