use super::TagError;
use crate::framework::ActorEntity;
use crate::model::{CheckStatus, Tag, TagCreate, TagId, TagQuery};
use async_trait::async_trait;
use chrono::Utc;

/// Moderation decision on a proposed tag.
#[derive(Debug, Clone)]
pub enum TagAction {
    SetStatus(CheckStatus),
}

#[async_trait]
impl ActorEntity for Tag {
    type Id = TagId;
    type Create = TagCreate;
    type Update = ();
    type Action = TagAction;
    type ActionResult = CheckStatus;
    type Query = TagQuery;
    type Context = ();
    type Error = TagError;

    fn from_create_params(id: TagId, params: TagCreate) -> Result<Self, TagError> {
        let info = params.info.trim();
        if info.is_empty() {
            return Err(TagError::ValidationError("tag text is required".into()));
        }
        if info.contains(',') {
            return Err(TagError::ValidationError(format!("tag {info:?} contains a comma")));
        }
        Ok(Self {
            id,
            info: info.to_string(),
            status: CheckStatus::UnderReview,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, query: &TagQuery) -> bool {
        query.status.map_or(true, |status| status == self.status)
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), TagError> {
        Ok(())
    }

    async fn handle_action(&mut self, action: TagAction, _ctx: &()) -> Result<CheckStatus, TagError> {
        match action {
            TagAction::SetStatus(status) => self.status = status,
        }
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tags_await_review() {
        let tag = Tag::from_create_params(TagId(1), TagCreate { info: " rural health ".into() }).unwrap();
        assert_eq!(tag.info, "rural health");
        assert_eq!(tag.status, CheckStatus::UnderReview);
    }

    #[test]
    fn test_comma_would_split_tag_lists() {
        let err = Tag::from_create_params(TagId(1), TagCreate { info: "a,b".into() }).unwrap_err();
        assert!(matches!(err, TagError::ValidationError(_)));
    }
}
