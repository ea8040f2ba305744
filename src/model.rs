use serde::{Deserialize, Serialize};
use validator::Validate;

/// One dictionary record as served by the signs backend. `word` may hold
/// several comma-joined written alternates; the list view only shows the
/// first one (see `display_word`).
#[derive(Debug, Clone, Deserialize)]
pub struct SignEntry {
    pub word: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// One backend-paginated slice of the filtered entry list.
#[derive(Debug, Default, Deserialize)]
pub struct SignPage {
    #[serde(default)]
    pub contents: Vec<SignEntry>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

/// Body of the create request sent to the backend.
#[derive(Debug, Serialize)]
pub struct NewSignRequest {
    pub word: String,
    pub videos: Vec<String>,
}

/// The add-entry form as submitted by the operator. `videos` stays
/// free-text here and is parsed on submit.
#[derive(Debug, Deserialize, Validate)]
pub struct AddSignForm {
    #[validate(length(min = 1, message = "Word is required"))]
    pub word: String,
    #[serde(default)]
    pub videos: String,
}

/// The written form shown in the list: the first comma-separated
/// alternate of the stored word.
pub fn display_word(word: &str) -> &str {
    word.split(',').next().unwrap_or(word)
}

/// Splits the free-text videos field on commas into video references.
/// Tokens are trimmed and empty ones dropped, so trailing or doubled
/// commas do not become empty references.
pub fn parse_videos(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_videos_trims_whitespace() {
        assert_eq!(parse_videos("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_videos_drops_empty_tokens() {
        assert_eq!(parse_videos("a,,b"), vec!["a", "b"]);
        assert_eq!(parse_videos("a,b,"), vec!["a", "b"]);
    }

    #[test]
    fn parse_videos_of_empty_input_is_empty() {
        assert!(parse_videos("").is_empty());
        assert!(parse_videos("  , ,").is_empty());
    }

    #[test]
    fn display_word_takes_first_alternate() {
        assert_eq!(display_word("hello,hi,hey"), "hello");
        assert_eq!(display_word("hello"), "hello");
    }

    #[test]
    fn sign_page_decodes_backend_shape() {
        let page: SignPage = serde_json::from_value(serde_json::json!({
            "contents": [{"word": "apple,apples", "_id": "64ff01"}],
            "totalPages": 7
        }))
        .unwrap();
        assert_eq!(page.total_pages, 7);
        assert_eq!(page.contents.len(), 1);
        assert_eq!(page.contents[0].word, "apple,apples");
        assert_eq!(page.contents[0].id, "64ff01");
    }

    #[test]
    fn sign_page_tolerates_missing_contents() {
        let page: SignPage =
            serde_json::from_value(serde_json::json!({"totalPages": 0})).unwrap();
        assert!(page.contents.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn new_sign_request_serializes_word_and_videos() {
        let request = NewSignRequest {
            word: "water".into(),
            videos: vec!["https://v/1".into(), "https://v/2".into()],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"word": "water", "videos": ["https://v/1", "https://v/2"]})
        );
    }
}
