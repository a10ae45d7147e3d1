use validator::ValidationErrors;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct FormState {
    pub error: String,
    pub success: String,
    pub loading: bool,
    pub handle_success: Callback<String>,
    pub handle_error: Callback<String>,
    pub set_loading: Callback<bool>,
}

#[hook]
pub fn use_form_state() -> FormState {
    let error = use_state(String::new);
    let success = use_state(String::new);
    let loading = use_state(|| false);

    let handle_success = {
        let success = success.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |msg: String| {
            success.set(msg);
            error.set(String::new());
            loading.set(false);
        })
    };

    let handle_error = {
        let error = error.clone();
        let success = success.clone();
        let loading = loading.clone();
        Callback::from(move |msg: String| {
            log::warn!("form error: {}", msg);
            error.set(msg);
            success.set(String::new());
            loading.set(false);
        })
    };

    let set_loading = {
        let loading = loading.clone();
        Callback::from(move |value: bool| loading.set(value))
    };

    FormState {
        error: (*error).clone(),
        success: (*success).clone(),
        loading: *loading,
        handle_success,
        handle_error,
        set_loading,
    }
}

/// Flattens `validator` output into one line for the form banner.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<&str> = errors.errors().keys().copied().collect();
    fields.sort_unstable();
    format!("Please check: {}", fields.join(", ").replace('_', " "))
}
