use axum::response::Html;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use tower_sessions::Session;

/// Session key under which the external login flow stores the API token.
pub const TOKEN_KEY: &str = "api_token";

const FLASH_KEY: &str = "flash";

pub fn render_template(tera: &Tera, template_name: &str, context: Context) -> Html<String> {
    Html(
        tera.render(template_name, &context)
            .unwrap_or_else(|_| format!("Error rendering template: {}", template_name)),
    )
}

/// A one-shot notification shown on the next rendered page.
#[derive(Debug, Serialize, Deserialize)]
pub struct Flash {
    pub kind: String,
    pub message: String,
}

pub async fn set_flash(
    session: &Session,
    kind: &str,
    message: &str,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(
            FLASH_KEY,
            Flash {
                kind: kind.to_string(),
                message: message.to_string(),
            },
        )
        .await
}

pub async fn take_flash(session: &Session) -> Option<Flash> {
    match session.remove::<Flash>(FLASH_KEY).await {
        Ok(flash) => flash,
        Err(e) => {
            log::error!("Failed to take flash message from session: {}", e);
            None
        }
    }
}

/// The bearer token written by the external login flow, if any.
pub async fn get_api_token(session: &Session) -> Option<String> {
    match session.get::<String>(TOKEN_KEY).await {
        Ok(Some(token)) => Some(token),
        Ok(None) => None,
        Err(e) => {
            log::error!("Failed to read API token from session: {}", e);
            None
        }
    }
}
