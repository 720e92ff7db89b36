use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::logic::client::url_utils::api_url;
use crate::logic::session::{Session, SessionStore};

#[derive(Serialize)]
struct RegisterPayload<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role: &'a str,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn register(
    api: &str,
    name: String,
    email: String,
    password: String,
    role: String,
) -> anyhow::Result<()> {
    let url = api_url(api, "/users/register");
    let payload = RegisterPayload {
        name: &name,
        email: &email,
        password: &password,
        role: &role,
    };
    let resp = Client::new().post(&url).json(&payload).send().await?;
    if resp.status().is_success() {
        let body: Value = resp.json().await?;
        println!("✓ Registered `{}`", email);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        eprintln!("✗ Registration failed: {}", resp.text().await?);
    }
    Ok(())
}

/// Log in and persist the returned identity. Every successful login
/// overwrites whatever session was cached before.
pub async fn login(
    api: &str,
    store: &SessionStore,
    email: String,
    password: String,
) -> anyhow::Result<()> {
    let url = api_url(api, "/users/login");
    let payload = LoginPayload {
        email: &email,
        password: &password,
    };
    let resp = Client::new().post(&url).json(&payload).send().await?;

    if resp.status().is_success() {
        let body: Value = resp.json().await?;
        let session: Session = serde_json::from_value(body)
            .map_err(|_| anyhow::anyhow!("no token in login response"))?;
        store.save(&session)?;
        println!("✓ Logged in as `{}` ({})", email, session.role);
    } else {
        eprintln!("✗ Login failed: {}", resp.text().await?);
    }
    Ok(())
}
