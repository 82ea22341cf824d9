use course_resources::clients::{ActorClient, CoAuthor, ResourceForm};
use course_resources::collection_actor::CollectionError;
use course_resources::config::Config;
use course_resources::lifecycle::ResourceSystem;
use course_resources::model::{
    CheckStatus, CourseCreate, ResourceQuery, ResourceSetId, Role, UserCreate, UserId, UserUpdate, Visibility,
    PREDEFINED_TAGS,
};
use course_resources::resource_actor::ResourceError;
use course_resources::search::{AdvancedSearchForm, SearchError};
use course_resources::user_actor::UserError;

fn form(name: &str, status: Visibility) -> ResourceForm {
    ResourceForm {
        resource_name: name.to_string(),
        status,
        description: "Readings on climate adaptation".to_string(),
        tags: "climate,energy".to_string(),
        uri: "https://resources.example.edu/item".to_string(),
        state: "Massachusetts".to_string(),
        content_type: "Syllabus".to_string(),
        media_type: "Text".to_string(),
        institution: "Brandeis University".to_string(),
        year_of_creation: 2021,
        authors: Vec::new(),
    }
}

async fn faculty(system: &ResourceSystem, name: &str) -> UserId {
    system
        .users
        .create_user(UserCreate::new(name, format!("{name}@example.edu"), Role::Faculty))
        .await
        .expect("Failed to create user")
}

/// One resource per visibility tier, all approved.
async fn seed_every_tier(system: &ResourceSystem, owner: UserId) {
    for status in Visibility::ALL {
        system
            .resources
            .upload(Role::Faculty, owner, None, form(&format!("Climate {status}"), status))
            .await
            .expect("Failed to upload");
    }
}

#[tokio::test]
async fn test_students_never_see_professor_only_resources() {
    let system = ResourceSystem::new(&Config::default());
    let owner = faculty(&system, "grace").await;
    seed_every_tier(&system, owner).await;

    let student = system
        .search
        .primary_search(Role::Student, None, "climate")
        .await
        .expect("Search failed");
    assert_eq!(student.resources.len(), 3);
    assert!(student
        .resources
        .iter()
        .all(|r| r.status != Visibility::PrivateToProfessor && r.status != Visibility::PartPublic));

    let anonymous = system
        .search
        .primary_search(Role::Anonymous, None, "climate")
        .await
        .expect("Search failed");
    assert_eq!(anonymous.resources.len(), 2);

    let staff = system
        .search
        .primary_search(Role::Ta, None, "climate")
        .await
        .expect("Search failed");
    assert_eq!(staff.resources.len(), Visibility::ALL.len());

    let summaries = system.search.resource_summaries(Role::Student).await.expect("Listing failed");
    assert_eq!(summaries.len(), 3);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_public_status_criterion_includes_displayed() {
    let system = ResourceSystem::new(&Config::default());
    let owner = faculty(&system, "grace").await;
    seed_every_tier(&system, owner).await;

    let search = AdvancedSearchForm {
        search: "climate".to_string(),
        status: "public".to_string(),
        ..Default::default()
    };
    let found = system
        .search
        .advanced_search(Role::Admin, None, &search)
        .await
        .expect("Search failed");
    let mut statuses: Vec<Visibility> = found.resources.iter().map(|r| r.status).collect();
    statuses.sort();
    assert_eq!(statuses, vec![Visibility::Public, Visibility::FinalPublic]);

    // The public page ignores the status field entirely.
    let public_page = system
        .search
        .advanced_search_public(Role::Admin, &search)
        .await
        .expect("Search failed");
    assert_eq!(public_page.len(), Visibility::ALL.len());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_primary_search_dedupes_but_advanced_search_does_not() {
    let system = ResourceSystem::new(&Config::default());
    let owner = faculty(&system, "grace").await;
    for _ in 0..2 {
        system
            .resources
            .upload(Role::Faculty, owner, None, form("Climate Memo", Visibility::Public))
            .await
            .expect("Failed to upload");
    }

    let primary = system
        .search
        .primary_search(Role::Student, None, "memo")
        .await
        .expect("Search failed");
    assert_eq!(primary.resources.len(), 1);

    let advanced = system
        .search
        .advanced_search(
            Role::Student,
            None,
            &AdvancedSearchForm {
                search: "memo".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("Search failed");
    assert_eq!(advanced.resources.len(), 2);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_co_authors_appear_in_display_name() {
    let system = ResourceSystem::new(&Config::default());
    let owner = faculty(&system, "grace").await;
    let mut upload = form("Climate Memo", Visibility::Public);
    upload.authors = vec![CoAuthor::new("Lin", "lin@example.edu"), CoAuthor::new("Ada", "ada@example.edu")];
    system
        .resources
        .upload(Role::Faculty, owner, None, upload)
        .await
        .expect("Failed to upload");

    let found = system
        .search
        .primary_search(Role::Anonymous, None, "memo")
        .await
        .expect("Search failed");
    assert_eq!(found.resources[0].display_name, "grace, Lin, Ada");
    assert_eq!(found.resources[0].owner_name, "grace");

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_star_and_unstar_round_trip() {
    let system = ResourceSystem::new(&Config::default());
    let owner = faculty(&system, "grace").await;
    let id = system
        .resources
        .upload(Role::Faculty, owner, None, form("Climate Memo", Visibility::Public))
        .await
        .expect("Failed to upload");

    let viewer = UserId(42);
    system.collections.star(viewer, id).await.expect("Star failed");
    let found = system
        .search
        .primary_search(Role::Student, Some(viewer), "memo")
        .await
        .expect("Search failed");
    assert_eq!(found.starred, vec![id]);

    let starred = system.search.starred_resources(viewer).await.expect("Listing failed");
    assert_eq!(starred.resources.len(), 1);
    assert_eq!(starred.collections.len(), 1);

    assert_eq!(system.collections.unstar(viewer, id).await.expect("Unstar failed"), 1);
    assert!(system.collections.starred_ids(viewer).await.expect("Lookup failed").is_empty());
    // The favorite set outlives its last resource.
    assert_eq!(system.collections.sets_of(viewer).await.expect("Lookup failed").len(), 1);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_concurrent_first_stars_share_one_favorite_set() {
    let system = ResourceSystem::new(&Config::default());
    let owner = faculty(&system, "grace").await;
    let mut ids = Vec::new();
    for n in 0..8 {
        ids.push(
            system
                .resources
                .upload(Role::Faculty, owner, None, form(&format!("Memo {n}"), Visibility::Public))
                .await
                .expect("Failed to upload"),
        );
    }

    let viewer = UserId(7);
    let stars: Vec<_> = ids
        .iter()
        .map(|&id| {
            let collections = system.collections.clone();
            tokio::spawn(async move { collections.star(viewer, id).await })
        })
        .collect();
    for star in stars {
        star.await.expect("Task panicked").expect("Star failed");
    }

    let sets = system.collections.sets_of(viewer).await.expect("Lookup failed");
    assert_eq!(sets.len(), 1);
    let mut starred = sets[0].resources.clone();
    starred.sort();
    assert_eq!(starred, ids);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_student_course_upload_waits_for_review() {
    let system = ResourceSystem::new(&Config::default());
    let professor = faculty(&system, "grace").await;
    let student = system
        .users
        .create_user(UserCreate::new("alan", "alan@example.edu", Role::Student))
        .await
        .expect("Failed to create user");
    let course = system
        .courses
        .create_course(CourseCreate {
            name: "Climate Policy".to_string(),
            owner_id: professor,
        })
        .await
        .expect("Failed to create course");

    let id = system
        .resources
        .upload(Role::Student, student, Some(course), form("Climate Essay", Visibility::PartPublic))
        .await
        .expect("Failed to upload");
    let pending = system.resources.require(id).await.expect("Lookup failed");
    assert_eq!(pending.check_status, CheckStatus::UnderReview);
    assert_eq!(pending.faculty_id, Some(professor));

    let listed = system
        .search
        .course_resources(None, course, None)
        .await
        .expect("Listing failed");
    assert!(listed.resources.is_empty());

    system.resources.approve(id).await.expect("Approve failed");
    let accepted = system.resources.part_public_to_public(id).await.expect("Resolve failed");
    assert_eq!(accepted.status, Visibility::Public);
    assert!(matches!(
        system.resources.part_public_to_enact(id).await,
        Err(ResourceError::ValidationError(_))
    ));

    let listed = system
        .search
        .course_resources(None, course, None)
        .await
        .expect("Listing failed");
    assert_eq!(listed.resources.len(), 1);
    assert_eq!(system.search.public_resources().await.expect("Listing failed").len(), 1);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_faculty_guide_sections() {
    let system = ResourceSystem::new(&Config::default());
    let owner = faculty(&system, "grace").await;
    for year in 2015..2020 {
        let mut syllabus = form(&format!("Syllabus {year}"), Visibility::PrivateToProfessor);
        syllabus.year_of_creation = year;
        system
            .resources
            .upload(Role::Faculty, owner, None, syllabus)
            .await
            .expect("Failed to upload");
    }

    let guide = system
        .search
        .faculty_guide(Role::Faculty, Some(owner))
        .await
        .expect("Guide failed");
    let years: Vec<i32> = guide.syllabus.iter().map(|r| r.year_of_creation).collect();
    assert_eq!(years, vec![2019, 2018, 2017]);
    assert!(guide.assignments.is_empty());

    let page = system
        .search
        .faculty_content_type(Role::Admin, None, "syllabus")
        .await
        .expect("Listing failed");
    assert_eq!(page.resources.len(), 5);

    assert!(matches!(
        system.search.faculty_guide(Role::Student, None).await,
        Err(SearchError::Forbidden(_))
    ));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_named_collections() {
    let system = ResourceSystem::new(&Config::default());
    let owner = faculty(&system, "grace").await;
    let first = system
        .resources
        .upload(Role::Faculty, owner, None, form("Memo one", Visibility::Public))
        .await
        .expect("Failed to upload");
    let second = system
        .resources
        .upload(Role::Faculty, owner, None, form("Memo two", Visibility::Public))
        .await
        .expect("Failed to upload");

    let reader = UserId(5);
    let week = system
        .collections
        .create_collection(reader, "Week 1")
        .await
        .expect("Create failed");
    let again = system
        .collections
        .create_collection(reader, "Week 1")
        .await
        .expect("Create failed");
    assert_ne!(week, again);
    assert_eq!(system.collections.sets_of(reader).await.expect("Lookup failed").len(), 2);

    for id in [first, second, first] {
        system
            .collections
            .add_to_collection(week, id)
            .await
            .expect("Add failed");
    }
    let set = system.collections.get(week).await.expect("Lookup failed").expect("Set missing");
    assert_eq!(set.resources, vec![first, second, first]);

    assert_eq!(
        system.collections.remove_from_collection(week, first).await.expect("Remove failed"),
        2
    );
    assert_eq!(
        system
            .collections
            .remove_from_collection(ResourceSetId(99), first)
            .await
            .expect("Remove failed"),
        0
    );
    assert!(matches!(
        system.collections.add_to_collection(ResourceSetId(99), first).await,
        Err(CollectionError::NotFound(_))
    ));

    system.collections.star(reader, first).await.expect("Star failed");
    let view = system
        .search
        .collection_view(week, Some(reader))
        .await
        .expect("View failed");
    assert_eq!(view.set.name, "Week 1");
    assert_eq!(view.resources.iter().map(|r| r.id).collect::<Vec<_>>(), vec![second]);
    assert_eq!(view.liked.iter().map(|r| r.id).collect::<Vec<_>>(), vec![first]);

    // Anyone may delete a set, and deleting twice is fine.
    system.collections.delete_collection(again).await.expect("Delete failed");
    system.collections.delete_collection(again).await.expect("Delete failed");
    let names: Vec<String> = system
        .collections
        .sets_of(reader)
        .await
        .expect("Lookup failed")
        .into_iter()
        .map(|set| set.name)
        .collect();
    assert_eq!(names, vec!["Week 1", "favorite"]);
    assert!(matches!(
        system.search.collection_view(again, None).await,
        Err(SearchError::NotFound(_))
    ));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_moderation_and_ownership() {
    let system = ResourceSystem::new(&Config::default());
    let grace = faculty(&system, "grace").await;
    let lin = faculty(&system, "lin").await;
    let id = system
        .resources
        .upload(Role::Faculty, grace, None, form("Climate Memo", Visibility::Public))
        .await
        .expect("Failed to upload");

    let shown = system.resources.post_public(id).await.expect("Post failed");
    assert_eq!(shown.status, Visibility::FinalPublic);
    assert_eq!(system.search.displayed_resources().await.expect("Listing failed").len(), 1);
    let hidden = system.resources.remove_public(id).await.expect("Remove failed");
    assert_eq!(hidden.status, Visibility::Public);
    assert!(system.search.displayed_resources().await.expect("Listing failed").is_empty());

    let denied = system.resources.deny(id).await.expect("Deny failed");
    assert_eq!(denied.check_status, CheckStatus::Deny);
    assert!(system.search.public_resources().await.expect("Listing failed").is_empty());

    let moved = system.resources.transfer_owner(id, lin).await.expect("Transfer failed");
    assert_eq!((moved.owner_id, moved.owner_name.as_str()), (lin, "lin"));
    assert_eq!(system.resources.current_owner(id).await.expect("Lookup failed").id, lin);
    assert_eq!(
        system.resources.transfer_owner(id, UserId(99)).await.unwrap_err(),
        ResourceError::User(UserError::NotFound("user_99".into()))
    );
    let owned = system
        .resources
        .find(ResourceQuery::new().owner(lin))
        .await
        .expect("Find failed");
    assert_eq!(owned.len(), 1);

    system.resources.remove(id).await.expect("Remove failed");
    assert!(matches!(
        system.resources.require(id).await,
        Err(ResourceError::NotFound(_))
    ));
    assert!(system
        .resources
        .find(ResourceQuery::new().owner(lin))
        .await
        .expect("Find failed")
        .is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_public_listings() {
    let mut config = Config::default();
    config.search.public_listing_limit = 2;
    let system = ResourceSystem::new(&config);
    let owner = faculty(&system, "grace").await;
    let rows = [
        ("Impact study", "ENACT Research", Visibility::Public, 2019),
        ("Reflection", "Personal Reflection", Visibility::FinalPublic, 2020),
        ("Press", "News and Articles", Visibility::Public, 2021),
        ("Internal", "News and Articles", Visibility::PrivateToEnact, 2022),
    ];
    for (name, content_type, status, year) in rows {
        let mut upload = form(name, status);
        upload.content_type = content_type.to_string();
        upload.year_of_creation = year;
        system
            .resources
            .upload(Role::Faculty, owner, None, upload)
            .await
            .expect("Failed to upload");
    }
    let years = |views: &[course_resources::search::ResourceView]| {
        views.iter().map(|v| v.year_of_creation).collect::<Vec<_>>()
    };

    let impact = system.search.impact_resources().await.expect("Listing failed");
    assert_eq!(years(&impact.faculty_research), vec![2019]);
    assert_eq!(years(&impact.essays), vec![2021, 2020]);

    let public = system.search.public_resources().await.expect("Listing failed");
    assert_eq!(years(&public), vec![2021, 2020, 2019]);
    let displayed = system.search.displayed_resources().await.expect("Listing failed");
    assert_eq!(years(&displayed), vec![2020]);
    let front_page = system.search.show_public().await.expect("Listing failed");
    assert_eq!(years(&front_page), vec![2021, 2020]);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_course_paging_and_own_uploads() {
    let system = ResourceSystem::new(&Config::default());
    let professor = faculty(&system, "grace").await;
    let course = system
        .courses
        .create_course(CourseCreate {
            name: "Climate Policy".to_string(),
            owner_id: professor,
        })
        .await
        .expect("Failed to create course");
    assert_eq!(
        system.courses.taught_by(professor).await.expect("Lookup failed")[0].id,
        course
    );

    for year in 2010..2017 {
        let mut upload = form(&format!("Week {year}"), Visibility::PrivateToEnact);
        upload.year_of_creation = year;
        system
            .resources
            .upload(Role::Faculty, professor, Some(course), upload)
            .await
            .expect("Failed to upload");
    }
    let years = |views: &[course_resources::search::ResourceView]| {
        views.iter().map(|v| v.year_of_creation).collect::<Vec<_>>()
    };

    let first = system
        .search
        .course_resources(None, course, Some(3))
        .await
        .expect("Listing failed");
    assert_eq!(years(&first.resources), vec![2016, 2015, 2014]);
    let more = system
        .search
        .more_course_resources(None, course, 3)
        .await
        .expect("Listing failed");
    assert_eq!(years(&more.resources), vec![2013, 2012, 2011, 2010]);

    let mine = system.search.my_resources(professor).await.expect("Listing failed");
    assert_eq!(years(&mine.resources), (2010..2017).collect::<Vec<_>>());
    assert_eq!(mine.tags.len(), PREDEFINED_TAGS.len());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_user_directory() {
    let system = ResourceSystem::new(&Config::default());
    let grace = faculty(&system, "grace").await;
    let alan = system
        .users
        .create_user(UserCreate::new("alan", "alan@example.edu", Role::Student))
        .await
        .expect("Failed to create user");

    let promoted = system
        .users
        .update_user(
            alan,
            UserUpdate {
                role: Some(Role::Ta),
                ..Default::default()
            },
        )
        .await
        .expect("Update failed");
    assert_eq!((promoted.role, promoted.email.as_str()), (Role::Ta, "alan@example.edu"));

    let tas: Vec<UserId> = system
        .users
        .with_role(Role::Ta)
        .await
        .expect("Lookup failed")
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(tas, vec![alan]);
    let faculty_ids: Vec<UserId> = system
        .users
        .with_role(Role::Faculty)
        .await
        .expect("Lookup failed")
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(faculty_ids, vec![grace]);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_advanced_search_requires_every_tag() {
    let system = ResourceSystem::new(&Config::default());
    let owner = faculty(&system, "grace").await;
    for (name, tags) in [("Essay one", "climate,housing"), ("Essay two", "climate,energy")] {
        let mut upload = form(name, Visibility::Public);
        upload.tags = tags.to_string();
        system
            .resources
            .upload(Role::Faculty, owner, None, upload)
            .await
            .expect("Failed to upload");
    }

    let search = |tags: &str| AdvancedSearchForm {
        search: "essay".to_string(),
        tags: tags.to_string(),
        ..Default::default()
    };
    let housing = system
        .search
        .advanced_search(Role::Student, None, &search("housing"))
        .await
        .expect("Search failed");
    assert_eq!(housing.resources.len(), 1);
    assert_eq!(housing.resources[0].name, "Essay one");

    let both = system
        .search
        .advanced_search(Role::Student, None, &search("climate,energy"))
        .await
        .expect("Search failed");
    assert_eq!(both.resources.len(), 1);
    assert_eq!(both.resources[0].name, "Essay two");

    system.shutdown().await.expect("Shutdown failed");
}
