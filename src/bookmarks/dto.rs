use serde::Deserialize;

/// Fixed classification of a bookmark's subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Article,
    Product,
    Video,
    Todo,
    Research,
    Inspiration,
}

impl ContentType {
    /// Omitted or unrecognized tags fall back to Article.
    pub fn parse(tag: Option<&str>) -> Self {
        match tag {
            Some("article") => ContentType::Article,
            Some("product") => ContentType::Product,
            Some("video") => ContentType::Video,
            Some("todo") => ContentType::Todo,
            Some("research") => ContentType::Research,
            Some("inspiration") => ContentType::Inspiration,
            _ => ContentType::Article,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::Product => "product",
            ContentType::Video => "video",
            ContentType::Todo => "todo",
            ContentType::Research => "research",
            ContentType::Inspiration => "inspiration",
        }
    }
}

/// Request body for creating a bookmark. url and title are required; the
/// handler rejects empty values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmarkRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub content_type: Option<String>,
}

/// Request body for a partial update. Absent fields keep their stored
/// value; url and owner are immutable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub content_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_tag() {
        for tag in ["article", "product", "video", "todo", "research", "inspiration"] {
            assert_eq!(ContentType::parse(Some(tag)).as_str(), tag);
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_article() {
        assert_eq!(ContentType::parse(Some("podcast")), ContentType::Article);
        assert_eq!(ContentType::parse(Some("")), ContentType::Article);
    }

    #[test]
    fn omitted_tag_falls_back_to_article() {
        assert_eq!(ContentType::parse(None), ContentType::Article);
    }

    #[test]
    fn create_request_accepts_camel_case() {
        let req: CreateBookmarkRequest = serde_json::from_str(
            r#"{"url":"https://x.com","title":"x","imageUrl":"https://x.com/a.png","contentType":"video"}"#,
        )
        .unwrap();
        assert_eq!(req.image_url.as_deref(), Some("https://x.com/a.png"));
        assert_eq!(req.content_type.as_deref(), Some("video"));
    }

    #[test]
    fn create_request_defaults_missing_required_fields() {
        let req: CreateBookmarkRequest = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert!(req.url.is_empty());
        assert_eq!(req.title, "x");
    }
}
