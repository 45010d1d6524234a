#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for ranking and the metadata join.

use std::cell::RefCell;
use std::str::FromStr;

use riasec_core::partition::{self, QUESTION_COUNT};
use riasec_core::test_support::{metadata_for, reference_catalog};
use riasec_core::{
    Category, InterestProfile, MetadataCatalog, OccupationRanker, RankError, Recommendation,
    ReferenceCatalog, ResponseLevel, score_levels,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const REALISTIC_CODE: &str = "47-2031.00";
const CONVENTIONAL_CODE: &str = "43-3031.00";

struct RankingWorld {
    references: RefCell<ReferenceCatalog>,
    metadata: RefCell<MetadataCatalog>,
    profile: RefCell<Option<InterestProfile>>,
    outcome: RefCell<Option<Result<Vec<Recommendation>, RankError>>>,
}

#[fixture]
fn world() -> RankingWorld {
    RankingWorld {
        references: RefCell::new(ReferenceCatalog::default()),
        metadata: RefCell::new(MetadataCatalog::default()),
        profile: RefCell::new(None),
        outcome: RefCell::new(None),
    }
}

impl RankingWorld {
    fn recommendations(&self) -> Vec<Recommendation> {
        self.outcome
            .borrow()
            .as_ref()
            .expect("outcome recorded")
            .clone()
            .expect("ranking should succeed")
    }

    fn error(&self) -> RankError {
        self.outcome
            .borrow()
            .as_ref()
            .expect("outcome recorded")
            .clone()
            .expect_err("ranking should fail")
    }
}

#[given("a catalog with a realistic and a conventional occupation")]
fn catalog_with_two_occupations(#[from(world)] world: &RankingWorld) {
    let references = reference_catalog(&[
        (REALISTIC_CODE, [40.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        (CONVENTIONAL_CODE, [0.0, 0.0, 0.0, 0.0, 0.0, 40.0]),
    ]);
    world.metadata.replace(metadata_for(&references));
    world.references.replace(references);
}

#[given("the metadata table lacks the conventional occupation")]
fn metadata_lacks_conventional(#[from(world)] world: &RankingWorld) {
    let trimmed = MetadataCatalog::new(
        world
            .metadata
            .borrow()
            .iter()
            .filter(|row| row.code != CONVENTIONAL_CODE)
            .cloned(),
    )
    .expect("valid metadata");
    world.metadata.replace(trimmed);
}

#[given("a respondent who only likes realistic activities")]
fn realistic_respondent(#[from(world)] world: &RankingWorld) {
    let mut levels = vec![ResponseLevel::StronglyDislike; QUESTION_COUNT];
    for &position in partition::positions(Category::Realistic) {
        if let Some(slot) = levels.get_mut(position - 1) {
            *slot = ResponseLevel::StronglyLike;
        }
    }
    let profile = score_levels(&levels).expect("sixty answers");
    assert_eq!(profile.total(Category::Realistic), 40);
    assert_eq!(profile.sum(), 40);
    world.profile.replace(Some(profile));
}

#[given("a respondent who answers every question with \"Unsure\"")]
fn unsure_respondent(#[from(world)] world: &RankingWorld) {
    let level = ResponseLevel::from_str("Unsure").expect("known label");
    let profile = score_levels(&vec![level; QUESTION_COUNT]).expect("sixty answers");
    assert!(profile.iter().all(|(_, total)| total == 20));
    world.profile.replace(Some(profile));
}

#[when("I request {k} recommendations")]
fn request_recommendations(#[from(world)] world: &RankingWorld, k: usize) {
    let profile = world.profile.borrow().expect("profile scored");
    let outcome = OccupationRanker::new().recommend(
        &profile,
        &*world.references.borrow(),
        &*world.metadata.borrow(),
        k,
    );
    world.outcome.replace(Some(outcome));
}

#[then("the realistic occupation ranks strictly above the conventional one")]
fn realistic_ranks_first(#[from(world)] world: &RankingWorld) {
    let recs = world.recommendations();
    let codes: Vec<_> = recs.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec![REALISTIC_CODE, CONVENTIONAL_CODE]);
    let first = recs.first().and_then(|r| r.similarity).expect("defined");
    let second = recs.get(1).and_then(|r| r.similarity).expect("defined");
    assert!(first > second, "expected {first} > {second}");
}

#[then("every similarity is undefined")]
fn every_similarity_undefined(#[from(world)] world: &RankingWorld) {
    assert!(world.recommendations().iter().all(|r| r.similarity.is_none()));
}

#[then("the recommendations keep catalog order")]
fn keeps_catalog_order(#[from(world)] world: &RankingWorld) {
    let recs = world.recommendations();
    let codes: Vec<_> = recs.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec![REALISTIC_CODE, CONVENTIONAL_CODE]);
}

#[then("exactly 1 recommendation is returned")]
fn exactly_one(#[from(world)] world: &RankingWorld) {
    let recs = world.recommendations();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs.first().map(|r| r.code.as_str()), Some(REALISTIC_CODE));
}

#[then("the request is rejected as an invalid count")]
fn rejected_invalid_count(#[from(world)] world: &RankingWorld) {
    assert_eq!(
        world.error(),
        RankError::InvalidK {
            k: 3,
            catalog_size: 2
        }
    );
}

#[then("the request fails because metadata is missing")]
fn fails_missing_metadata(#[from(world)] world: &RankingWorld) {
    assert_eq!(
        world.error(),
        RankError::MissingOccupationMetadata {
            code: CONVENTIONAL_CODE.to_owned()
        }
    );
}

macro_rules! register_ranking_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/ranker.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RankingWorld) {
            let _ = world;
        }
    };
}

register_ranking_scenario!(
    realistic_respondent_prefers_realistic_work,
    "A realistic respondent prefers the realistic occupation"
);
register_ranking_scenario!(flat_profile_is_handled, "A flat profile does not break ranking");
register_ranking_scenario!(
    single_recommendation,
    "Requesting a single recommendation returns the best match"
);
register_ranking_scenario!(
    oversized_request_fails,
    "Requesting more recommendations than the catalog holds fails"
);
register_ranking_scenario!(
    missing_metadata_is_reported,
    "A ranked occupation without metadata is reported"
);
