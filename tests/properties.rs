use proptest::prelude::*;

use course_resources::model::{ResourceId, Role, UserId, Visibility};
use course_resources::search::dedupe::dedupe;
use course_resources::search::filter::{apply, SearchCriteria, StatusCriterion};
use course_resources::search::text::{tokenize, TextQuery};
use course_resources::search::visibility::allowed_statuses;
use course_resources::search::ResourceView;

const STATES: [&str; 3] = ["Massachusetts", "Ohio", "Texas"];
const TAGS: [&str; 4] = ["climate", "energy", "voting", "housing"];

fn view_strategy() -> impl Strategy<Value = ResourceView> {
    (
        0u32..4,
        0usize..STATES.len(),
        2018i32..2021,
        0usize..Visibility::ALL.len(),
        proptest::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len()),
    )
        .prop_map(|(name, state, year, status, tags)| ResourceView {
            id: ResourceId(0),
            owner_id: UserId(1),
            owner_name: "grace".to_string(),
            display_name: "grace".to_string(),
            name: format!("Memo {name}"),
            description: String::new(),
            tags: tags.into_iter().map(str::to_string).collect(),
            uri: String::new(),
            state: STATES[state].to_string(),
            media_type: "Text".to_string(),
            content_type: "Syllabus".to_string(),
            institution: "Brandeis".to_string(),
            year_of_creation: year,
            status: Visibility::ALL[status],
            score: None,
        })
}

fn views_strategy() -> impl Strategy<Value = Vec<ResourceView>> {
    proptest::collection::vec(view_strategy(), 0..24).prop_map(|mut views| {
        for (n, view) in views.iter_mut().enumerate() {
            view.id = ResourceId(n as u32 + 1);
        }
        views
    })
}

fn criteria_strategy() -> impl Strategy<Value = SearchCriteria> {
    (
        proptest::option::of(0usize..STATES.len()),
        proptest::option::of(2018i32..2021),
        any::<bool>(),
        proptest::sample::subsequence(TAGS.to_vec(), 0..=2),
    )
        .prop_map(|(state, year, public, tags)| SearchCriteria {
            state: state.map(|s| STATES[s].to_lowercase()),
            year_of_creation: year,
            status: public.then_some(StatusCriterion::PublicTiers),
            tags: tags.into_iter().map(str::to_string).collect(),
            ..Default::default()
        })
}

fn ids(views: &[ResourceView]) -> Vec<u32> {
    views.iter().map(|v| v.id.0).collect()
}

proptest! {
    #[test]
    fn test_dedupe_is_idempotent(views in views_strategy()) {
        let once = dedupe(views);
        prop_assert_eq!(dedupe(once.clone()), once);
    }

    #[test]
    fn test_dedupe_keeps_order(views in views_strategy()) {
        let all = ids(&views);
        let kept = ids(&dedupe(views));
        let positions: Vec<Option<usize>> = kept.iter().map(|id| all.iter().position(|a| a == id)).collect();
        let ordered = positions.iter().all(Option::is_some) && positions.windows(2).all(|w| w[0] < w[1]);
        prop_assert!(ordered);
    }

    #[test]
    fn test_filter_stages_commute(
        views in views_strategy(),
        first in criteria_strategy(),
        second in criteria_strategy(),
    ) {
        let a = apply(apply(views.clone(), &first), &second);
        let b = apply(apply(views, &second), &first);
        prop_assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_every_requested_tag_is_present(views in views_strategy(), criteria in criteria_strategy()) {
        for view in apply(views, &criteria) {
            for tag in &criteria.tags {
                prop_assert!(view.tags.contains(tag));
            }
        }
    }

    #[test]
    fn test_tag_list_equals_one_tag_at_a_time(
        views in views_strategy(),
        tags in proptest::sample::subsequence(TAGS.to_vec(), 1..=3),
    ) {
        let by_tags = |tags: Vec<&str>| SearchCriteria {
            tags: tags.into_iter().map(str::to_string).collect(),
            ..Default::default()
        };
        let together = apply(views.clone(), &by_tags(tags.clone()));
        let separately = tags
            .iter()
            .fold(views, |rows, tag| apply(rows, &by_tags(vec![*tag])));
        prop_assert_eq!(ids(&together), ids(&separately));
    }

    #[test]
    fn test_public_criterion_admits_only_public_tiers(views in views_strategy()) {
        let criteria = SearchCriteria {
            status: Some(StatusCriterion::PublicTiers),
            ..Default::default()
        };
        for view in apply(views, &criteria) {
            prop_assert!(Visibility::PUBLIC_TIERS.contains(&view.status));
        }
    }

    #[test]
    fn test_tokens_are_lowercase_words(text in "[a-zA-Z0-9 \"-]{0,64}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
        let query = TextQuery::parse(&text);
        prop_assert!(query.terms.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_visibility_widens_with_role() {
    let anonymous = allowed_statuses(Role::Anonymous);
    let student = allowed_statuses(Role::Student);
    let staff = allowed_statuses(Role::Ta);
    assert!(anonymous.is_subset(&student));
    assert!(student.is_subset(&staff));
    assert!(!student.contains(&Visibility::PrivateToProfessor));
    assert_eq!(allowed_statuses(Role::Admin), staff);
    assert_eq!(allowed_statuses(Role::Faculty), staff);
}
