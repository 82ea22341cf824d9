use crate::clients::{AuthorClient, CollectionClient, CourseClient, ResourceStore, TagClient, UserClient};
use crate::config::Config;
use crate::search::SearchService;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] tokio::task::JoinError);

/// The running document store: one actor per collection plus the clients
/// and pipelines built on top of them.
///
/// # Example
///
/// ```ignore
/// let system = ResourceSystem::new(&Config::default());
///
/// let owner = system.users.create_user(params).await?;
/// let id = system.resources.upload(Role::Faculty, owner, None, form).await?;
/// let hits = system.search.primary_search(Role::Student, None, "climate").await?;
///
/// system.shutdown().await?;
/// ```
pub struct ResourceSystem {
    pub users: UserClient,
    pub courses: CourseClient,
    pub authors: AuthorClient,
    pub tags: TagClient,
    pub collections: CollectionClient,
    /// Upload, moderation and ownership operations.
    pub resources: ResourceStore,
    pub search: SearchService,

    handles: Vec<JoinHandle<()>>,
}

impl ResourceSystem {
    /// Spawns every collection actor and wires the clients together.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let buffer = config.store.channel_buffer;

        let (user_actor, user_client) = crate::user_actor::new(buffer);
        let (course_actor, course_client) = crate::course_actor::new(buffer);
        let (author_actor, author_client) = crate::author_actor::new(buffer);
        let (tag_actor, tag_client) = crate::tag_actor::new(buffer);
        let (set_actor, set_client) = crate::collection_actor::new(buffer);
        let (resource_actor, resource_client) = crate::resource_actor::new(buffer);

        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(course_actor.run(())),
            tokio::spawn(author_actor.run(())),
            tokio::spawn(tag_actor.run(())),
            tokio::spawn(set_actor.run(())),
            tokio::spawn(resource_actor.run(())),
        ];

        let users = UserClient::new(user_client);
        let courses = CourseClient::new(course_client);
        let authors = AuthorClient::new(author_client);
        let tags = TagClient::new(tag_client);
        let collections = CollectionClient::new(set_client);

        let search = SearchService::new(
            resource_client.clone(),
            authors.clone(),
            collections.clone(),
            tags.clone(),
            config.search.clone(),
        );
        let resources = ResourceStore::new(resource_client, users.clone(), courses.clone(), authors.clone());

        info!(channel_buffer = buffer, "Resource system started");
        Self {
            users,
            courses,
            authors,
            tags,
            collections,
            resources,
            search,
            handles,
        }
    }

    /// Drops every client so the actors see their channels close, then waits
    /// for each actor task to finish.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down resource system");
        let Self {
            users,
            courses,
            authors,
            tags,
            collections,
            resources,
            search,
            handles,
        } = self;
        drop((users, courses, authors, tags, collections, resources, search));

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Resource system shutdown complete");
        Ok(())
    }
}
