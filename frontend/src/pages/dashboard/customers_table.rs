use shared::customers::{distinct_prizes, CustomerLead, CustomerQuery, SortColumn};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CustomersTableProps {
    pub leads: Vec<CustomerLead>,
}

fn sort_key(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Name => "name",
        SortColumn::Email => "email",
        SortColumn::Prize => "prize",
        SortColumn::CreatedAt => "date",
    }
}

fn parse_sort_key(value: &str) -> SortColumn {
    SortColumn::all_options()
        .into_iter()
        .find(|column| sort_key(*column) == value)
        .unwrap_or(SortColumn::CreatedAt)
}

#[function_component(CustomersTable)]
pub fn customers_table(props: &CustomersTableProps) -> Html {
    let query = use_state(CustomerQuery::default);
    let prizes = use_memo(props.leads.clone(), |leads| distinct_prizes(leads));
    let page = query.apply(&props.leads);

    let update = |change: fn(&mut CustomerQuery, String)| {
        let query = query.clone();
        move |value: String| {
            let mut next = (*query).clone();
            change(&mut next, value);
            query.set(next);
        }
    };

    let on_search = {
        let apply = update(|q, value| {
            q.search = value;
            q.page = 1;
        });
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                apply(input.value());
            }
        })
    };

    let on_prize = {
        let apply = update(|q, value| {
            q.prize = (!value.is_empty()).then_some(value);
            q.page = 1;
        });
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                apply(select.value());
            }
        })
    };

    let on_sort = {
        let apply = update(|q, value| q.sort_by = parse_sort_key(&value));
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                apply(select.value());
            }
        })
    };

    // Clicking the active column flips direction, another column sorts by it.
    let on_header = |column: SortColumn| {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            if next.sort_by == column {
                next.ascending = !next.ascending;
            } else {
                next.sort_by = column;
                next.ascending = true;
            }
            query.set(next);
        })
    };

    let go_to = |target: usize| {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.page = target;
            query.set(next);
        })
    };

    let arrow = |column: SortColumn| {
        if query.sort_by != column {
            ""
        } else if query.ascending {
            " ▲"
        } else {
            " ▼"
        }
    };

    html! {
        <div class={styles::CARD}>
            <div class="flex flex-wrap gap-3 mb-4">
                <input
                    type="search"
                    class={classes!(styles::INPUT, "flex-1", "min-w-[200px]", "mt-0")}
                    placeholder="Search name, email, phone or code"
                    value={query.search.clone()}
                    oninput={on_search}
                />
                <select class={classes!(styles::INPUT, "w-auto", "mt-0")} onchange={on_prize}>
                    <option value="" selected={query.prize.is_none()}>{"All prizes"}</option>
                    { for prizes.iter().map(|prize| html! {
                        <option value={prize.clone()} selected={query.prize.as_ref() == Some(prize)}>
                            {prize}
                        </option>
                    }) }
                </select>
                <select class={classes!(styles::INPUT, "w-auto", "mt-0")} onchange={on_sort}>
                    { for SortColumn::all_options().into_iter().map(|column| html! {
                        <option value={sort_key(column)} selected={query.sort_by == column}>
                            {format!("Sort by {}", column.label())}
                        </option>
                    }) }
                </select>
            </div>

            <div class="overflow-x-auto">
                <table class={styles::TABLE}>
                    <thead>
                        <tr>
                            <th class={styles::TABLE_HEAD} onclick={on_header(SortColumn::Name)}>
                                {format!("Name{}", arrow(SortColumn::Name))}
                            </th>
                            <th class={styles::TABLE_HEAD} onclick={on_header(SortColumn::Email)}>
                                {format!("Email{}", arrow(SortColumn::Email))}
                            </th>
                            <th class={styles::TABLE_HEAD}>{"Phone"}</th>
                            <th class={styles::TABLE_HEAD} onclick={on_header(SortColumn::Prize)}>
                                {format!("Prize{}", arrow(SortColumn::Prize))}
                            </th>
                            <th class={styles::TABLE_HEAD}>{"Promo code"}</th>
                            <th class={styles::TABLE_HEAD} onclick={on_header(SortColumn::CreatedAt)}>
                                {format!("Date{}", arrow(SortColumn::CreatedAt))}
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100 dark:divide-gray-800">
                        { for page.rows.iter().map(|lead| html! {
                            <tr key={lead.id.clone()}>
                                <td class={styles::TABLE_CELL}>{&lead.name}</td>
                                <td class={styles::TABLE_CELL}>{&lead.email}</td>
                                <td class={styles::TABLE_CELL}>{lead.phone.clone().unwrap_or_default()}</td>
                                <td class={styles::TABLE_CELL}>{&lead.prize}</td>
                                <td class={classes!(styles::TABLE_CELL, "font-mono")}>
                                    {lead.promo_code.clone().unwrap_or_default()}
                                </td>
                                <td class={styles::TABLE_CELL}>
                                    {lead.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
                if page.rows.is_empty() {
                    <p class={classes!(styles::TEXT_SMALL, "text-center", "py-8")}>{"No customers match."}</p>
                }
            </div>

            <div class="flex items-center justify-between mt-4">
                <span class={styles::TEXT_SMALL}>
                    {format!("{} customers, page {} of {}", page.total, page.page, page.page_count)}
                </span>
                <div class="flex gap-2">
                    <button
                        class={styles::BUTTON_SECONDARY}
                        disabled={page.page <= 1}
                        onclick={go_to(page.page.saturating_sub(1).max(1))}
                    >
                        {"Previous"}
                    </button>
                    <button
                        class={styles::BUTTON_SECONDARY}
                        disabled={page.page >= page.page_count}
                        onclick={go_to((page.page + 1).min(page.page_count))}
                    >
                        {"Next"}
                    </button>
                </div>
            </div>
        </div>
    }
}
