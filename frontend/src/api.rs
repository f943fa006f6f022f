//! Requests against the settings resource.

use designer_common::config::{DesignerConfig, CSRF_HEADER};
use designer_common::error::ApiError;
use designer_common::model::settings::SettingsRecord;
use designer_common::requests::{
    action_url, parse_action_response, parse_settings_response, settings_url, FormBody,
};
use gloo_net::http::Request;
use web_sys::UrlSearchParams;

fn transport(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// `Ok(None)` when the server has no settings for `document_type`.
pub async fn fetch_settings(
    config: &DesignerConfig,
    document_type: &str,
) -> Result<Option<SettingsRecord>, ApiError> {
    let url = settings_url(&config.lang_prefix, document_type);
    let response = Request::get(&url).send().await.map_err(transport)?;
    if response.status() == 404 {
        return Ok(None);
    }
    let body = response.text().await.map_err(transport)?;
    parse_settings_response(&body)
}

/// Posts `form` as `application/x-www-form-urlencoded` with the CSRF header.
pub async fn post_form(config: &DesignerConfig, form: &FormBody) -> Result<(), ApiError> {
    let params =
        UrlSearchParams::new().map_err(|err| ApiError::Transport(format!("{:?}", err)))?;
    for (key, value) in form.pairs() {
        params.append(key, value);
    }

    let mut request = Request::post(&action_url(&config.lang_prefix));
    if let Some(token) = &config.csrf_token {
        request = request.header(CSRF_HEADER, token);
    }
    let response = request
        .body(params)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let body = response.text().await.map_err(transport)?;
    parse_action_response(&body)
}
