use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Bookmark record in the database. Serializes in the camelCase wire shape
/// consumed by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: Uuid,
    pub user_id: Uuid,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub content_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Bookmark {
    /// All bookmarks owned by a user, newest first.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<Bookmark>> {
        sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, user_id, url, title, description, image_url, content_type,
                   created_at, updated_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        url: &str,
        title: &str,
        description: Option<&str>,
        image_url: Option<&str>,
        content_type: &str,
    ) -> sqlx::Result<Bookmark> {
        sqlx::query_as::<_, Bookmark>(
            r#"
            INSERT INTO bookmarks (user_id, url, title, description, image_url, content_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, url, title, description, image_url, content_type,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(url)
        .bind(title)
        .bind(description)
        .bind(image_url)
        .bind(content_type)
        .fetch_one(db)
        .await
    }

    /// Partial update of the mutable fields, scoped to the owner. Returns
    /// false when no row matches both the bookmark id and the caller.
    pub async fn update_fields(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        image_url: Option<&str>,
        content_type: Option<&str>,
    ) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE bookmarks
            SET title = COALESCE($3, title),
                description = COALESCE($4, description),
                image_url = COALESCE($5, image_url),
                content_type = COALESCE($6, content_type),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(image_url)
        .bind(content_type)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a bookmark, scoped to the owner.
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookmarks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn serializes_in_camel_case_with_rfc3339_timestamps() {
        let bookmark = Bookmark {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            url: "https://example.com".into(),
            title: "Example".into(),
            description: None,
            image_url: Some("https://example.com/img.png".into()),
            content_type: "article".into(),
            created_at: datetime!(2026-01-02 03:04:05 UTC),
            updated_at: datetime!(2026-01-02 03:04:05 UTC),
        };
        let json = serde_json::to_value(&bookmark).unwrap();
        assert_eq!(json["contentType"], "article");
        assert_eq!(json["imageUrl"], "https://example.com/img.png");
        assert_eq!(json["createdAt"], "2026-01-02T03:04:05Z");
        assert!(json.get("image_url").is_none());
    }
}
