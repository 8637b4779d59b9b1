use crate::domain::errors::DomainError;

const CNT_BOOKMARK_USER_STORY: &str = "bookmarks_user_story_key";
const CNT_PROGRESS_PERCENTAGE: &str = "reading_progress_percentage_chk";
const CNT_PROGRESS_POSITION: &str = "reading_progress_position_chk";
const CNT_COMMENT_PARENT: &str = "comments_parent_id_fkey";
const CNT_COMMENT_LENGTH: &str = "comments_content_length_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_BOOKMARK_USER_STORY => {
                        DomainError::Conflict("Story already bookmarked".into())
                    }
                    CNT_PROGRESS_PERCENTAGE => DomainError::Validation(
                        "progress percentage must be between 0 and 100".into(),
                    ),
                    CNT_PROGRESS_POSITION => {
                        DomainError::Validation("last position cannot be negative".into())
                    }
                    CNT_COMMENT_PARENT => DomainError::NotFound("parent comment not found".into()),
                    CNT_COMMENT_LENGTH => DomainError::Validation(
                        "comment must be between 1 and 1000 characters".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
