use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::auth::{ApiErrorBody, AuthResponse, LoginRequest, SignupRequest};
use shared::constants::{
    CUSTOMERS_ENDPOINT, LOGIN_ENDPOINT, NETWORK_ERROR, OWNER_WHEEL_ENDPOINT, SIGNUP_ENDPOINT,
    WHEELS_ENDPOINT,
};
use shared::customers::{CustomerLead, NewCustomerLead};
use shared::Wheel;

use crate::config::get_api_base_url;
use crate::hooks::auth_state::get_token;

fn url(path: &str) -> String {
    format!("{}{}", get_api_base_url(), path)
}

fn encode(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Error parsing response: {:?}", e));
    }

    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("Error status: {}", status)),
    }
}

async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, String> {
    let response = builder.send().await.map_err(|e| {
        log::error!("request failed: {:?}", e);
        NETWORK_ERROR.to_string()
    })?;
    read_json(response).await
}

async fn send_body<B: serde::Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &B,
) -> Result<T, String> {
    let request = builder
        .json(body)
        .map_err(|e| format!("Failed to build request: {:?}", e))?;
    let response = request.send().await.map_err(|e| {
        log::error!("request failed: {:?}", e);
        NETWORK_ERROR.to_string()
    })?;
    read_json(response).await
}

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, String> {
    send_body(Request::post(&url(LOGIN_ENDPOINT)), request).await
}

pub async fn signup(request: &SignupRequest) -> Result<AuthResponse, String> {
    send_body(Request::post(&url(SIGNUP_ENDPOINT)), request).await
}

/// Public fetch used by the play page; no token needed.
pub async fn fetch_wheel(wheel_id: &str) -> Result<Wheel, String> {
    let path = format!("{}/{}", WHEELS_ENDPOINT, encode(wheel_id));
    send_json(Request::get(&url(&path))).await
}

pub async fn fetch_owner_wheel(user_id: &str) -> Result<Wheel, String> {
    let path = format!("{}/{}", OWNER_WHEEL_ENDPOINT, encode(user_id));
    send_json(with_auth(Request::get(&url(&path)))).await
}

pub async fn save_wheel(wheel: &Wheel) -> Result<Wheel, String> {
    match &wheel.id {
        Some(id) => {
            let path = format!("{}/{}", WHEELS_ENDPOINT, encode(id));
            send_body(with_auth(Request::put(&url(&path))), wheel).await
        }
        None => send_body(with_auth(Request::post(&url(WHEELS_ENDPOINT))), wheel).await,
    }
}

pub async fn fetch_customers(wheel_id: &str) -> Result<Vec<CustomerLead>, String> {
    let path = format!("{}?wheelId={}", CUSTOMERS_ENDPOINT, encode(wheel_id));
    send_json(with_auth(Request::get(&url(&path)))).await
}

pub async fn submit_customer(lead: &NewCustomerLead) -> Result<CustomerLead, String> {
    send_body(Request::post(&url(CUSTOMERS_ENDPOINT)), lead).await
}
