//! Access to `document.cookie`.

use anyhow::anyhow;
use leptos::document;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

use hbnb_boundary::JwtToken;
use hbnb_core::cookie::{get_cookie, TOKEN_COOKIE};

/// Read the session token, ignoring an empty value.
pub fn read_token() -> anyhow::Result<Option<JwtToken>> {
    let token = read(TOKEN_COOKIE)?
        .filter(|token| !token.is_empty())
        .map(JwtToken::from);
    Ok(token)
}

pub fn read(name: &str) -> anyhow::Result<Option<String>> {
    let cookies = html_document()?.cookie().map_err(js_error)?;
    Ok(get_cookie(&cookies, name))
}

/// Write a formatted `name=value; attributes` cookie.
pub fn write(cookie: &str) -> anyhow::Result<()> {
    html_document()?.set_cookie(cookie).map_err(js_error)
}

fn html_document() -> anyhow::Result<HtmlDocument> {
    document()
        .dyn_into::<HtmlDocument>()
        .map_err(|_| anyhow!("Not an HTML document"))
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!(err
        .as_string()
        .unwrap_or_else(|| "unknown JS error".to_string()))
}
