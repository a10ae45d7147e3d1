use shared::auth::AuthResponse;
use shared::constants::{TOKEN_STORAGE_KEY, USER_ID_STORAGE_KEY};
use web_sys::{window, Storage};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

fn storages() -> Vec<Storage> {
    let Some(window) = window() else {
        return Vec::new();
    };
    [window.local_storage(), window.session_storage()]
        .into_iter()
        .filter_map(|storage| storage.ok().flatten())
        .collect()
}

fn read_item(key: &str) -> Option<String> {
    storages()
        .into_iter()
        .find_map(|storage| storage.get_item(key).ok().flatten())
}

pub fn get_token() -> Option<String> {
    read_item(TOKEN_STORAGE_KEY).filter(|token| !token.is_empty())
}

pub fn get_user_id() -> Option<String> {
    read_item(USER_ID_STORAGE_KEY)
}

/// Persists the session. `remember` picks local over session storage.
pub fn store_session(auth: &AuthResponse, remember: bool) {
    let Some(window) = window() else {
        return;
    };
    let storage = if remember {
        window.local_storage()
    } else {
        window.session_storage()
    };
    if let Ok(Some(storage)) = storage {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, &auth.token);
        let _ = storage.set_item(USER_ID_STORAGE_KEY, &auth.user_id);
    }
}

pub fn clear_session() {
    for storage in storages() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        let _ = storage.remove_item(USER_ID_STORAGE_KEY);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub logged_in: bool,
    pub user_id: Option<String>,
}

#[hook]
pub fn use_auth_state() -> AuthState {
    let state = use_state(|| AuthState {
        logged_in: get_token().is_some(),
        user_id: get_user_id(),
    });

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            state.set(AuthState {
                logged_in: get_token().is_some(),
                user_id: get_user_id(),
            });
            || ()
        });
    }

    (*state).clone()
}

/// Sends visitors without a token back to the login page.
#[hook]
pub fn use_auth_check() {
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        let check_auth = move || {
            if get_token().is_none() {
                clear_session();
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Login);
                }
            }
        };
        check_auth();
        let interval = gloo_timers::callback::Interval::new(30_000, check_auth);
        move || drop(interval)
    });
}
