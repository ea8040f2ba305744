use axum::extract::{Extension, Form, Path, Query, State};
use axum::response::{Html, Redirect};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tera::{Context, Tera};
use tower_sessions::Session;
use validator::Validate;

use crate::error::AdminError;
use crate::model::{display_word, parse_videos, AddSignForm, NewSignRequest, SignPage};
use crate::pagination;
use crate::signs::SignsClient;
use crate::utils;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Browse-view selection: an optional prefix letter and a zero-based
/// page index. These two values alone determine what gets fetched.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub letter: Option<String>,
    pub page: Option<usize>,
}

impl ListQuery {
    /// Active prefix filter: a single ASCII letter, uppercased.
    /// Anything else means "no filter".
    pub fn prefix(&self) -> String {
        match self.letter.as_deref() {
            Some(l) if l.len() == 1 && l.chars().all(|c| c.is_ascii_alphabetic()) => {
                l.to_ascii_uppercase()
            }
            _ => String::new(),
        }
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(0)
    }

    /// The backend paginates one-based.
    pub fn backend_page(&self) -> usize {
        self.page() + 1
    }
}

#[derive(Debug, Serialize)]
struct WordLink {
    /// The first written alternate, shown as the link text.
    label: String,
    /// The full stored word, used in the detail link.
    word: String,
    id: String,
}

#[axum::debug_handler]
pub async fn browse(
    State(client): State<SignsClient>,
    Extension(templates): Extension<Arc<Tera>>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AdminError> {
    let prefix = query.prefix();
    let page = query.page();

    let (sign_page, fetch_error) = match client.list(&prefix, query.backend_page()).await {
        Ok(fetched) => (fetched, None),
        Err(e) => {
            log::error!(
                "Failed to fetch dictionary page (prefix={:?}, page={}): {}",
                prefix,
                page,
                e
            );
            (SignPage::default(), Some("Could not load the word list".to_string()))
        }
    };

    let words: Vec<WordLink> = sign_page
        .contents
        .iter()
        .map(|entry| WordLink {
            label: display_word(&entry.word).to_string(),
            word: entry.word.clone(),
            id: entry.id.clone(),
        })
        .collect();

    let total = sign_page.total_pages as usize;
    let mut context = Context::new();
    context.insert("alphabet", &ALPHABET.chars().collect::<Vec<char>>());
    context.insert("letter", &prefix);
    context.insert("page", &page);
    context.insert("words", &words);
    context.insert("pages", &pagination::page_links(page, total));
    context.insert("has_prev", &(total > 0 && page > 0));
    context.insert("has_next", &(page + 1 < total));
    context.insert("fetch_error", &fetch_error);
    context.insert("flash", &utils::take_flash(&session).await);

    Ok(Html(templates.render("dictionary.html", &context)?))
}

#[axum::debug_handler]
pub async fn add_sign(
    State(client): State<SignsClient>,
    session: Session,
    Form(form): Form<AddSignForm>,
) -> Result<Redirect, AdminError> {
    if let Err(e) = form.validate() {
        log::warn!("Rejected add-sign form: {}", e);
        utils::set_flash(&session, "error", "Word is required").await?;
        return Ok(Redirect::to("/admin/dictionary"));
    }

    let Some(token) = utils::get_api_token(&session).await else {
        utils::set_flash(&session, "error", "Not logged in: no API token in session").await?;
        return Ok(Redirect::to("/admin/dictionary"));
    };

    let request = NewSignRequest {
        word: form.word,
        videos: parse_videos(&form.videos),
    };

    match client.create(&token, &request).await {
        Ok(body) => {
            log::info!("Added sign {:?}: {}", request.word, body);
            utils::set_flash(&session, "success", "Word added successfully").await?;
        }
        Err(e) => {
            log::error!("Failed to add sign {:?}: {}", request.word, e);
            utils::set_flash(&session, "error", "Could not add the word, please try again")
                .await?;
        }
    }

    Ok(Redirect::to("/admin/dictionary"))
}

#[axum::debug_handler]
pub async fn word_detail(
    Extension(templates): Extension<Arc<Tera>>,
    Path(word): Path<String>,
) -> Html<String> {
    let mut context = Context::new();
    context.insert("word", &word);
    context.insert("display", display_word(&word));
    utils::render_template(&templates, "word.html", context)
}
