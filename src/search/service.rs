//! # Search Service
//!
//! The request-level pipelines. Each one runs its stages strictly in order:
//!
//! ```text
//! build_query -> execute -> augment -> [dedupe] -> [filter]
//! ```
//!
//! Only [`SearchService::primary_search`] deduplicates; advanced search and
//! the listings keep duplicate rows. Every pipeline augments exactly once.

use super::augment::augment;
use super::dedupe::dedupe;
use super::executor::execute;
use super::filter::{self, AdvancedSearchForm, SearchCriteria};
use super::query::{build_query, SearchPlan, SortOrder};
use super::types::*;
use super::SearchError;
use crate::clients::{ActorClient, AuthorClient, CollectionClient, TagClient};
use crate::config::SearchConfig;
use crate::framework::ResourceClient;
use crate::model::{CourseId, Resource, ResourceId, ResourceQuery, ResourceSetId, Role, UserId, Visibility};
use tracing::{debug, info, instrument};

pub const SYLLABUS: &str = "Syllabus";
pub const ASSIGNMENT_GUIDELINES: &str = "Assignment Guidelines";
pub const COURSE_PLANNING: &str = "Course Planning";
pub const ENACT_RESEARCH: &str = "ENACT Research";
pub const PERSONAL_REFLECTION: &str = "Personal Reflection";
pub const NEWS_AND_ARTICLES: &str = "News and Articles";

/// Content type behind a faculty page slug.
pub fn content_type_for_slug(slug: &str) -> Option<&'static str> {
    match slug {
        "syllabus" => Some(SYLLABUS),
        "assignments" => Some(ASSIGNMENT_GUIDELINES),
        "facultyResearch" => Some("ENACT Faculty Research"),
        "essayENACT" => Some("Essays About ENACT"),
        "plan" => Some(COURSE_PLANNING),
        _ => None,
    }
}

#[derive(Clone)]
pub struct SearchService {
    resources: ResourceClient<Resource>,
    authors: AuthorClient,
    collections: CollectionClient,
    tags: TagClient,
    config: SearchConfig,
}

impl SearchService {
    pub fn new(
        resources: ResourceClient<Resource>,
        authors: AuthorClient,
        collections: CollectionClient,
        tags: TagClient,
        config: SearchConfig,
    ) -> Self {
        Self {
            resources,
            authors,
            collections,
            tags,
            config,
        }
    }

    /// Free-text search. Duplicate rows are collapsed after augmentation.
    #[instrument(skip(self))]
    pub async fn primary_search(
        &self,
        role: Role,
        viewer: Option<UserId>,
        search: &str,
    ) -> Result<SearchResponse, SearchError> {
        let views = self.listing(build_query(role, Some(search))).await?;
        let resources = dedupe(views);
        info!(results = resources.len(), "Primary search");
        Ok(SearchResponse {
            resources,
            starred: self.starred(viewer).await?,
        })
    }

    /// Search narrowed by the advanced form. Not deduplicated.
    #[instrument(skip(self, form))]
    pub async fn advanced_search(
        &self,
        role: Role,
        viewer: Option<UserId>,
        form: &AdvancedSearchForm,
    ) -> Result<SearchResponse, SearchError> {
        debug!(?form, "advanced_search called");
        let criteria = SearchCriteria::from_form(form);
        let views = self.listing(build_query(role, Some(&form.search))).await?;
        let resources = filter::apply(views, &criteria);
        info!(results = resources.len(), "Advanced search");
        Ok(SearchResponse {
            resources,
            starred: self.starred(viewer).await?,
        })
    }

    /// The public page's advanced search, which has no status field.
    #[instrument(skip(self, form))]
    pub async fn advanced_search_public(
        &self,
        role: Role,
        form: &AdvancedSearchForm,
    ) -> Result<Vec<ResourceView>, SearchError> {
        let criteria = SearchCriteria::from_form(form).without_status();
        let views = self.listing(build_query(role, Some(&form.search))).await?;
        Ok(filter::apply(views, &criteria))
    }

    /// Approved resources of a course, newest first. `limit` defaults to
    /// `course_listing_limit`.
    #[instrument(skip(self))]
    pub async fn course_resources(
        &self,
        viewer: Option<UserId>,
        course_id: CourseId,
        limit: Option<usize>,
    ) -> Result<SearchResponse, SearchError> {
        let plan = course_plan(course_id).limit(limit.unwrap_or(self.config.course_listing_limit));
        Ok(SearchResponse {
            resources: self.listing(plan).await?,
            starred: self.starred(viewer).await?,
        })
    }

    /// The next page of a course listing after `skip` rows.
    #[instrument(skip(self))]
    pub async fn more_course_resources(
        &self,
        viewer: Option<UserId>,
        course_id: CourseId,
        skip: usize,
    ) -> Result<SearchResponse, SearchError> {
        let plan = course_plan(course_id).skip(skip).limit(self.config.page_size);
        Ok(SearchResponse {
            resources: self.listing(plan).await?,
            starred: self.starred(viewer).await?,
        })
    }

    /// The newest professor-only syllabi, assignment guidelines and course
    /// plans. Admin and faculty only.
    #[instrument(skip(self))]
    pub async fn faculty_guide(&self, role: Role, viewer: Option<UserId>) -> Result<FacultyGuide, SearchError> {
        require_faculty(role)?;
        let limit = self.config.faculty_section_limit;
        let section = |content_type: &str| {
            SearchPlan::new(professor_only(content_type), SortOrder::YearDesc).limit(limit)
        };
        Ok(FacultyGuide {
            syllabus: self.listing(section(SYLLABUS)).await?,
            assignments: self.listing(section(ASSIGNMENT_GUIDELINES)).await?,
            guides: self.listing(section(COURSE_PLANNING)).await?,
            starred: self.starred(viewer).await?,
        })
    }

    /// Every professor-only resource of the content type behind `slug`.
    #[instrument(skip(self))]
    pub async fn faculty_content_type(
        &self,
        role: Role,
        viewer: Option<UserId>,
        slug: &str,
    ) -> Result<ContentTypeListing, SearchError> {
        require_faculty(role)?;
        let content_type = content_type_for_slug(slug)
            .ok_or_else(|| SearchError::ValidationError(format!("unknown content type page {slug:?}")))?;
        let plan = SearchPlan::new(professor_only(content_type), SortOrder::YearDesc);
        let title = if content_type == ASSIGNMENT_GUIDELINES {
            "Assignment Guidelines & Rubrics".to_string()
        } else {
            content_type.to_string()
        };
        Ok(ContentTypeListing {
            title,
            content_type: content_type.to_string(),
            resources: self.listing(plan).await?,
            starred: self.starred(viewer).await?,
        })
    }

    /// Public research and essays about the program, newest first.
    #[instrument(skip(self))]
    pub async fn impact_resources(&self) -> Result<ImpactResources, SearchError> {
        let public = || ResourceQuery::new().approved().status_in(Visibility::PUBLIC_TIERS);
        let research = SearchPlan::new(public().content_type_in([ENACT_RESEARCH]), SortOrder::YearDesc);
        let essays = SearchPlan::new(
            public().content_type_in([PERSONAL_REFLECTION, NEWS_AND_ARTICLES]),
            SortOrder::YearDesc,
        );
        Ok(ImpactResources {
            faculty_research: self.listing(research).await?,
            essays: self.listing(essays).await?,
        })
    }

    /// Every approved public or displayed resource, newest first.
    pub async fn public_resources(&self) -> Result<Vec<ResourceView>, SearchError> {
        self.listing(public_plan(&Visibility::PUBLIC_TIERS)).await
    }

    /// Resources on display (`finalPublic`), newest first.
    pub async fn displayed_resources(&self) -> Result<Vec<ResourceView>, SearchError> {
        self.listing(public_plan(&[Visibility::FinalPublic])).await
    }

    /// The first `public_listing_limit` public resources, newest first.
    pub async fn show_public(&self) -> Result<Vec<ResourceView>, SearchError> {
        self.listing(public_plan(&Visibility::PUBLIC_TIERS).limit(self.config.public_listing_limit))
            .await
    }

    /// Everything `owner_id` uploaded, in any state, plus the tag vocabulary.
    #[instrument(skip(self))]
    pub async fn my_resources(&self, owner_id: UserId) -> Result<MyResources, SearchError> {
        let plan = SearchPlan::new(ResourceQuery::new().owner(owner_id), SortOrder::Store);
        Ok(MyResources {
            resources: self.listing(plan).await?,
            tags: self.tags.vocabulary().await?,
        })
    }

    /// Name, content type and owner of every resource `role` may see.
    #[instrument(skip(self))]
    pub async fn resource_summaries(&self, role: Role) -> Result<Vec<ResourceSummary>, SearchError> {
        let views = execute(&self.resources, build_query(role, None)).await?;
        Ok(views.iter().map(ResourceSummary::from).collect())
    }

    /// The owner's starred resources and all of their sets.
    #[instrument(skip(self))]
    pub async fn starred_resources(&self, owner_id: UserId) -> Result<StarredResources, SearchError> {
        let resources = match self.collections.favorite(owner_id).await? {
            Some(set) => self.by_ids(set.resources).await?,
            None => Vec::new(),
        };
        Ok(StarredResources {
            resources,
            collections: self.collections.sets_of(owner_id).await?,
        })
    }

    /// A collection's resources, and the viewer's starred ones if logged in.
    #[instrument(skip(self))]
    pub async fn collection_view(
        &self,
        set_id: ResourceSetId,
        viewer: Option<UserId>,
    ) -> Result<CollectionView, SearchError> {
        let set = self
            .collections
            .get(set_id)
            .await?
            .ok_or_else(|| SearchError::NotFound(set_id.to_string()))?;
        let resources = self.by_ids(set.resources.clone()).await?;
        let liked = match viewer {
            Some(viewer) => self.by_ids(self.collections.starred_ids(viewer).await?).await?,
            None => Vec::new(),
        };
        Ok(CollectionView { set, resources, liked })
    }

    async fn listing(&self, plan: SearchPlan) -> Result<Vec<ResourceView>, SearchError> {
        let views = execute(&self.resources, plan).await?;
        augment(&self.authors, views).await
    }

    /// Store order, each resource once, however often it is referenced.
    async fn by_ids(&self, ids: Vec<ResourceId>) -> Result<Vec<ResourceView>, SearchError> {
        self.listing(SearchPlan::new(ResourceQuery::new().ids(ids), SortOrder::Store))
            .await
    }

    async fn starred(&self, viewer: Option<UserId>) -> Result<Vec<ResourceId>, SearchError> {
        match viewer {
            Some(viewer) => Ok(self.collections.starred_ids(viewer).await?),
            None => Ok(Vec::new()),
        }
    }
}

fn require_faculty(role: Role) -> Result<(), SearchError> {
    match role {
        Role::Admin | Role::Faculty => Ok(()),
        other => Err(SearchError::Forbidden(format!("{other} may not view faculty resources"))),
    }
}

fn course_plan(course_id: CourseId) -> SearchPlan {
    SearchPlan::new(
        ResourceQuery::new().approved().course(course_id),
        SortOrder::YearThenCreatedDesc,
    )
}

fn professor_only(content_type: &str) -> ResourceQuery {
    ResourceQuery::new()
        .status_in([Visibility::PrivateToProfessor])
        .content_type_in([content_type])
}

fn public_plan(tiers: &[Visibility]) -> SearchPlan {
    SearchPlan::new(
        ResourceQuery::new().approved().status_in(tiers.iter().copied()),
        SortOrder::YearDesc,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{AuthorAlternative, ResourceSet, Tag};

    struct Mocks {
        resources: MockClient<Resource>,
        authors: MockClient<AuthorAlternative>,
        sets: MockClient<ResourceSet>,
        tags: MockClient<Tag>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                resources: MockClient::new(),
                authors: MockClient::new(),
                sets: MockClient::new(),
                tags: MockClient::new(),
            }
        }

        fn service(&self) -> SearchService {
            SearchService::new(
                self.resources.client(),
                AuthorClient::new(self.authors.client()),
                CollectionClient::new(self.sets.client()),
                TagClient::new(self.tags.client()),
                SearchConfig::default(),
            )
        }

        fn verify(&self) {
            self.resources.verify();
            self.authors.verify();
            self.sets.verify();
            self.tags.verify();
        }
    }

    #[test]
    fn test_slugs() {
        assert_eq!(content_type_for_slug("syllabus"), Some(SYLLABUS));
        assert_eq!(content_type_for_slug("plan"), Some(COURSE_PLANNING));
        assert_eq!(content_type_for_slug("Syllabus"), None);
    }

    #[tokio::test]
    async fn test_faculty_pages_reject_other_roles_before_querying() {
        let mocks = Mocks::new();
        let service = mocks.service();
        for role in [Role::Ta, Role::Student, Role::Anonymous] {
            assert!(matches!(
                service.faculty_guide(role, None).await,
                Err(SearchError::Forbidden(_))
            ));
            assert!(matches!(
                service.faculty_content_type(role, None, "syllabus").await,
                Err(SearchError::Forbidden(_))
            ));
        }
        mocks.verify();
    }

    #[tokio::test]
    async fn test_unknown_slug_is_a_validation_error() {
        let mocks = Mocks::new();
        let err = mocks
            .service()
            .faculty_content_type(Role::Faculty, None, "memes")
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::ValidationError(_)));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_missing_collection_is_not_found() {
        let mut mocks = Mocks::new();
        mocks.sets.expect_get(ResourceSetId(4)).return_ok(None);
        let err = mocks
            .service()
            .collection_view(ResourceSetId(4), None)
            .await
            .unwrap_err();
        assert_eq!(err, SearchError::NotFound("set_4".into()));
    }

    #[tokio::test]
    async fn test_store_failure_aborts_search() {
        let mut mocks = Mocks::new();
        mocks.resources.expect_find().return_err(FrameworkError::ActorDropped);
        let err = mocks
            .service()
            .primary_search(Role::Student, None, "climate")
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_starred_without_favorite_set_is_empty() {
        let mut mocks = Mocks::new();
        mocks.sets.expect_find().return_ok(vec![]);
        mocks.sets.expect_find().return_ok(vec![]);
        let starred = mocks.service().starred_resources(UserId(1)).await.unwrap();
        assert!(starred.resources.is_empty());
        assert!(starred.collections.is_empty());
        mocks.verify();
    }
}
