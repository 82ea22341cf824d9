use anyhow::Context;
use course_resources::clients::{CoAuthor, ResourceForm};
use course_resources::config::Config;
use course_resources::lifecycle::tracing::setup_tracing;
use course_resources::lifecycle::ResourceSystem;
use course_resources::model::{CourseCreate, Role, UserCreate, Visibility};
use course_resources::search::AdvancedSearchForm;
use tracing::{info, Instrument};

fn form(name: &str, status: Visibility, content_type: &str, tags: &str, year: i32) -> ResourceForm {
    ResourceForm {
        resource_name: name.to_string(),
        status,
        description: format!("{name} for an environmental civics course"),
        tags: tags.to_string(),
        uri: format!("https://resources.example.edu/{}", name.to_lowercase().replace(' ', "-")),
        state: "Massachusetts".to_string(),
        content_type: content_type.to_string(),
        media_type: "Text".to_string(),
        institution: "Brandeis University".to_string(),
        year_of_creation: year,
        authors: Vec::new(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = Config::load(None).context("loading configuration")?;
    let system = ResourceSystem::new(&config);

    let (faculty, student) = async {
        let faculty = system
            .users
            .create_user(UserCreate::new("grace", "grace@example.edu", Role::Faculty))
            .await?;
        let student = system
            .users
            .create_user(UserCreate::new("alan", "alan@example.edu", Role::Student))
            .await?;
        anyhow::Ok((faculty, student))
    }
    .instrument(tracing::info_span!("user_creation"))
    .await?;

    let course = system
        .courses
        .create_course(CourseCreate {
            name: "Climate Policy Workshop".to_string(),
            owner_id: faculty,
        })
        .await?;

    let mut syllabus = form("Climate Syllabus", Visibility::PrivateToProfessor, "Syllabus", "climate,energy", 2021);
    syllabus.authors.push(CoAuthor::new("Ada", "ada@example.edu"));
    system.resources.upload(Role::Faculty, faculty, None, syllabus).await?;
    system
        .resources
        .upload(Role::Faculty, faculty, None, form("Climate Reader", Visibility::Public, "Reading", "climate", 2022))
        .await?;
    let essay = system
        .resources
        .upload(
            Role::Student,
            student,
            Some(course),
            form("Climate Essay", Visibility::Public, "Personal Reflection", "climate,housing", 2023),
        )
        .await?;
    system.resources.approve(essay).await?;

    let span = tracing::info_span!("search");
    async {
        let student_view = system.search.primary_search(Role::Student, Some(student), "climate").await?;
        info!(results = student_view.resources.len(), "Student search");

        let faculty_view = system.search.primary_search(Role::Faculty, Some(faculty), "climate").await?;
        info!(results = faculty_view.resources.len(), "Faculty search");
        println!("{}", serde_json::to_string_pretty(&faculty_view)?);

        let advanced = AdvancedSearchForm {
            search: "climate".to_string(),
            tags: "housing".to_string(),
            ..Default::default()
        };
        let narrowed = system.search.advanced_search(Role::Student, None, &advanced).await?;
        info!(results = narrowed.resources.len(), "Advanced search");
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;

    system.collections.star(student, essay).await?;
    let starred = system.search.starred_resources(student).await?;
    info!(starred = starred.resources.len(), "Starred resources");

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
