//! One-shot page messages carried across the post/redirect/get cycle in a
//! cookie: `docket_flash=<level>:<url-encoded message>`.

use axum::http::{header, HeaderMap};

use crate::actions::{Flash, FlashLevel};

pub const COOKIE_NAME: &str = "docket_flash";

/// `Set-Cookie` value storing `flash`.
pub fn set_cookie(flash: &Flash) -> String {
    format!(
        "{}={}:{}; Path=/; HttpOnly; SameSite=Lax",
        COOKIE_NAME,
        flash.level.as_str(),
        urlencoding::encode(&flash.message)
    )
}

/// `Set-Cookie` value that expires the flash cookie.
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0", COOKIE_NAME)
}

/// Read the flash from request cookies, if one is present and well-formed.
pub fn take(headers: &HeaderMap) -> Option<Flash> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .and_then(|(_, value)| decode(value))
}

fn decode(value: &str) -> Option<Flash> {
    let (level, message) = value.split_once(':')?;
    let level = FlashLevel::parse(level)?;
    let message = urlencoding::decode(message).ok()?.into_owned();
    Some(Flash { level, message })
}
