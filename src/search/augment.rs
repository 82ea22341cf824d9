//! Adds co-author names to result rows.

use super::types::ResourceView;
use super::SearchError;
use crate::clients::AuthorClient;
use crate::model::AuthorAlternative;
use tracing::debug;

/// Owner name followed by each co-author, comma-separated, in lookup order.
pub fn display_name(owner_name: &str, authors: &[AuthorAlternative]) -> String {
    std::iter::once(owner_name)
        .chain(authors.iter().map(|a| a.user_name.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sets every row's `display_name` from its stored owner name and co-author
/// rows. Recomputed from scratch, so running it twice changes nothing.
pub async fn augment(authors: &AuthorClient, mut views: Vec<ResourceView>) -> Result<Vec<ResourceView>, SearchError> {
    let mut credited = 0;
    for view in &mut views {
        let rows = authors.for_resource(view.id).await?;
        credited += rows.len();
        view.display_name = display_name(&view.owner_name, &rows);
    }
    debug!(rows = views.len(), credited, "Augmented");
    Ok(views)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::resource::fixtures::resource;
    use crate::model::{AuthorId, ResourceId};

    fn author(id: u32, name: &str) -> AuthorAlternative {
        AuthorAlternative {
            id: AuthorId(id),
            resource_id: ResourceId(1),
            user_name: name.into(),
            user_email: String::new(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Ada", &[]), "Ada");
        assert_eq!(
            display_name("Ada", &[author(1, "Lin"), author(2, "Sam")]),
            "Ada, Lin, Sam"
        );
    }

    #[tokio::test]
    async fn test_augment_is_idempotent() {
        let mut mock = MockClient::<AuthorAlternative>::new();
        mock.expect_find().return_ok(vec![author(1, "Lin")]);
        mock.expect_find().return_ok(vec![author(1, "Lin")]);
        let authors = AuthorClient::new(mock.client());

        let views = vec![ResourceView::project(&resource(1, "Memo"), None)];
        let once = augment(&authors, views).await.unwrap();
        let twice = augment(&authors, once.clone()).await.unwrap();

        assert_eq!(once[0].display_name, "Ada, Lin");
        assert_eq!(twice, once);
        assert_eq!(twice[0].owner_name, "Ada");
        mock.verify();
    }
}
