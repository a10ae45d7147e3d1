use shared::Lot;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LotEditorProps {
    pub index: usize,
    pub lot: Lot,
    pub win_rate: f64,
    pub on_change: Callback<(usize, Lot)>,
}

#[derive(Clone, Copy)]
enum LotField {
    Name,
    Odds,
    PromoCode,
}

#[function_component(LotEditor)]
pub fn lot_editor(props: &LotEditorProps) -> Html {
    let update = |field: LotField| {
        let index = props.index;
        let lot = props.lot.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let value = input.value();
            let mut lot = lot.clone();
            match field {
                LotField::Name => lot.name = value,
                LotField::Odds => lot.odds = value,
                LotField::PromoCode => {
                    lot.promo_code = if value.trim().is_empty() { None } else { Some(value) }
                }
            }
            on_change.emit((index, lot));
        })
    };

    html! {
        <div class="grid grid-cols-12 gap-2 items-center">
            <span class={classes!(styles::TEXT_SMALL, "col-span-1")}>{format!("#{}", props.index + 1)}</span>
            <input
                class={classes!(styles::INPUT, "col-span-5")}
                placeholder="Prize name"
                value={props.lot.name.clone()}
                oninput={update(LotField::Name)}
            />
            <input
                class={classes!(styles::INPUT, "col-span-2")}
                placeholder="Odds"
                inputmode="numeric"
                value={props.lot.odds.clone()}
                oninput={update(LotField::Odds)}
            />
            <input
                class={classes!(styles::INPUT, "col-span-3")}
                placeholder="Promo code"
                value={props.lot.promo_code.clone().unwrap_or_default()}
                oninput={update(LotField::PromoCode)}
            />
            <span class={classes!(styles::TEXT_HINT, "col-span-1", "text-right")}>
                {format!("{:.0}%", props.win_rate * 100.0)}
            </span>
        </div>
    }
}
