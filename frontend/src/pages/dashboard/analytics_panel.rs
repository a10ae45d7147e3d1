use shared::analytics::summarize;
use shared::customers::CustomerLead;
use yew::prelude::*;

use crate::styles;

/// Days shown in the activity strip.
const RECENT_DAYS: usize = 14;

#[derive(Properties, PartialEq)]
pub struct AnalyticsPanelProps {
    pub leads: Vec<CustomerLead>,
}

#[function_component(AnalyticsPanel)]
pub fn analytics_panel(props: &AnalyticsPanelProps) -> Html {
    let summary = use_memo(props.leads.clone(), |leads| summarize(leads));

    let promo_share = if summary.total_leads == 0 {
        0.0
    } else {
        summary.leads_with_promo as f64 * 100.0 / summary.total_leads as f64
    };

    let top_count = summary.prize_counts.first().map_or(1, |(_, count)| *count).max(1);
    let recent = &summary.daily_counts[summary.daily_counts.len().saturating_sub(RECENT_DAYS)..];
    let busiest_day = recent.iter().map(|(_, count)| *count).max().unwrap_or(1).max(1);

    html! {
        <div class="grid gap-6 md:grid-cols-3 mb-6">
            <div class={styles::CARD}>
                <p class={styles::TEXT_SMALL}>{"Customers"}</p>
                <p class={classes!(styles::TEXT_H1, "mt-1")}>{summary.total_leads}</p>
                <p class={classes!(styles::TEXT_HINT, "mt-2")}>
                    {format!("{:.0}% received a promo code", promo_share)}
                </p>
            </div>

            <div class={styles::CARD}>
                <p class={classes!(styles::TEXT_SMALL, "mb-3")}>{"Prizes won"}</p>
                if summary.prize_counts.is_empty() {
                    <p class={styles::TEXT_HINT}>{"No spins yet"}</p>
                }
                { for summary.prize_counts.iter().map(|(prize, count)| html! {
                    <div class="mb-2">
                        <div class="flex justify-between text-sm">
                            <span class={styles::TEXT_BODY}>{prize}</span>
                            <span class="font-semibold">{*count}</span>
                        </div>
                        <div class="h-2 rounded bg-gray-200 dark:bg-gray-700">
                            <div
                                class="h-2 rounded bg-gradient-to-r from-orange-400 to-pink-500"
                                style={format!("width: {}%", count * 100 / top_count)}
                            ></div>
                        </div>
                    </div>
                }) }
            </div>

            <div class={styles::CARD}>
                <p class={classes!(styles::TEXT_SMALL, "mb-3")}>{"Recent activity"}</p>
                <div class="flex items-end gap-1 h-24">
                    { for recent.iter().map(|(day, count)| html! {
                        <div
                            class="flex-1 rounded-t bg-orange-400"
                            title={format!("{}: {}", day.format("%b %d"), count)}
                            style={format!("height: {}%", count * 100 / busiest_day)}
                        ></div>
                    }) }
                </div>
            </div>
        </div>
    }
}
