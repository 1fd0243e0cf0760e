use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::bookmarks::repo::Bookmark;

/// One hit in an AI search reply. Fields default so a model that omits one
/// does not sink the whole result set.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub reason: String,
}

/// Serialize the corpus into one line per bookmark for prompt embedding.
pub fn bookmark_lines(bookmarks: &[Bookmark]) -> String {
    bookmarks
        .iter()
        .map(|b| {
            format!(
                "ID: {}, Title: {}, Description: {}, URL: {}",
                b.id,
                b.title,
                b.description.as_deref().unwrap_or(""),
                b.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn search_prompt(corpus: &str, query: &str) -> String {
    format!(
        "You are a search assistant. Given these bookmarks:\n\n{corpus}\n\n\
         Find ones relevant to the query \"{query}\". \
         Respond ONLY as JSON array of {{id, title, reason}}."
    )
}

lazy_static! {
    // Greedy span from the first '[' to the last ']'; models usually wrap
    // the array in prose or a code fence.
    static ref JSON_ARRAY_RE: Regex = Regex::new(r"(?s)\[.*\]").unwrap();
}

/// Pull the bracket-delimited JSON array out of a free-text model reply.
/// Anything that does not parse fails open to an empty result set.
pub fn extract_results(reply: &str) -> Vec<SearchResult> {
    JSON_ARRAY_RE
        .find(reply)
        .and_then(|m| serde_json::from_str(m.as_str()).ok())
        .unwrap_or_default()
}
