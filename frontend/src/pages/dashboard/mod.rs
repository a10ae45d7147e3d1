mod analytics_panel;
mod customers_table;

use chrono::Utc;
use gloo::file::{Blob, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::customers::CustomerLead;
use shared::export::{export_file_name, leads_to_csv};
use shared::Wheel;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlAnchorElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::base::Base;
use crate::config::play_url;
use crate::hooks::auth_state::get_user_id;
use crate::hooks::use_auth_check;
use crate::{styles, Route};

use analytics_panel::AnalyticsPanel;
use customers_table::CustomersTable;

/// Hands `contents` to the browser as a file download.
fn download_csv(file_name: &str, contents: &str) -> Result<(), String> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available".to_string())?;

    let url = ObjectUrl::from(Blob::new_with_options(contents, Some("text/csv;charset=utf-8")));
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Failed to create download link".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // Keep the object URL alive until the browser has started the download.
    Timeout::new(1_000, move || drop(url)).forget();
    Ok(())
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    use_auth_check();

    let wheel = use_state(|| None::<Wheel>);
    let leads = use_state(Vec::<CustomerLead>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let wheel = wheel.clone();
        let leads = leads.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            if let Some(user_id) = get_user_id() {
                spawn_local(async move {
                    let result = async {
                        let owned = api::fetch_owner_wheel(&user_id).await?;
                        let customers = match &owned.id {
                            Some(id) => api::fetch_customers(id).await?,
                            None => Vec::new(),
                        };
                        Ok::<_, String>((owned, customers))
                    }
                    .await;

                    match result {
                        Ok((owned, customers)) => {
                            log::debug!("loaded {} customers", customers.len());
                            wheel.set(Some(owned));
                            leads.set(customers);
                        }
                        Err(e) => {
                            log::error!("dashboard load failed: {}", e);
                            error.set(Some(e));
                        }
                    }
                    loading.set(false);
                });
            } else {
                loading.set(false);
            }
            || ()
        });
    }

    let on_export = {
        let leads = leads.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let file_name = export_file_name(Utc::now().date_naive());
            let result = leads_to_csv(&leads)
                .map_err(|e| e.to_string())
                .and_then(|csv| download_csv(&file_name, &csv));
            match result {
                Ok(()) => log::info!("exported {} customers to {}", leads.len(), file_name),
                Err(e) => error.set(Some(e)),
            }
        })
    };

    let header = match (*wheel).as_ref() {
        Some(wheel) => html! {
            <div>
                <h1 class={styles::TEXT_H1}>{&wheel.business_name}</h1>
                if let Some(id) = wheel.id.as_ref() {
                    <p class={classes!(styles::TEXT_SMALL, "mt-1")}>
                        {"Play link: "}
                        <a href={play_url(id)} target="_blank" class={styles::LINK}>{play_url(id)}</a>
                    </p>
                }
            </div>
        },
        None => html! { <h1 class={styles::TEXT_H1}>{"Dashboard"}</h1> },
    };

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
                    {header}
                    <div class="flex gap-2">
                        <Link<Route> to={Route::Settings} classes={styles::BUTTON_SECONDARY}>
                            {"Wheel settings"}
                        </Link<Route>>
                        <button class={styles::BUTTON_PRIMARY} onclick={on_export} disabled={leads.is_empty()}>
                            {"Download CSV"}
                        </button>
                    </div>
                </div>

                if let Some(message) = (*error).clone() {
                    <div class={classes!(styles::CARD_ERROR, "mb-6")}>{message}</div>
                }

                if *loading {
                    <div class="flex justify-center py-12">
                        <div class={styles::LOADING_SPINNER}></div>
                    </div>
                } else {
                    <AnalyticsPanel leads={(*leads).clone()} />
                    <CustomersTable leads={(*leads).clone()} />
                }
            </div>
        </Base>
    }
}
