//! Behavioural coverage for ranking candidates against the reference profile.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tiffin_core::test_support::{rated, restaurant};
use tiffin_core::{City, Cuisine, FeatureError, RankError, Ranker, Recommendation, Restaurant};
use tiffin_scorer::MatchScorer;

/// Candidate rows under test.
#[fixture]
pub fn candidates() -> RefCell<Vec<Restaurant>> {
    RefCell::new(Vec::new())
}

/// Captures the ranking outcome for assertions.
#[fixture]
pub fn ranking() -> RefCell<Option<Result<Vec<Recommendation>, RankError>>> {
    RefCell::new(None)
}

#[given("a candidate set with two identical restaurants and one outlier")]
fn twins_and_outlier(candidates: &RefCell<Vec<Restaurant>>) {
    *candidates.borrow_mut() = vec![
        rated(1, "Twin One", City::Bangalore, Cuisine::Biryani, 4.0, 300),
        rated(2, "Twin Two", City::Bangalore, Cuisine::Biryani, 4.0, 300),
        rated(3, "Odd One", City::Mumbai, Cuisine::Chinese, 3.5, 500),
    ];
}

#[given("a candidate set with twelve rated restaurants")]
fn twelve_candidates(candidates: &RefCell<Vec<Restaurant>>) {
    *candidates.borrow_mut() = (1..=12)
        .map(|id| {
            let name = format!("House {id}");
            rated(id, &name, City::Bangalore, Cuisine::Biryani, 4.0, 350)
        })
        .collect();
}

#[given("a candidate set containing an unrated restaurant")]
fn unrated_candidate(candidates: &RefCell<Vec<Restaurant>>) {
    *candidates.borrow_mut() = vec![
        rated(1, "Rated", City::Delhi, Cuisine::NorthIndian, 4.5, 600),
        restaurant(2, "Unrated", City::Delhi, Cuisine::NorthIndian),
    ];
}

#[when("I rank the candidates by profile match")]
fn rank_candidates(
    candidates: &RefCell<Vec<Restaurant>>,
    ranking: &RefCell<Option<Result<Vec<Recommendation>, RankError>>>,
) {
    let result = MatchScorer::new().rank(&candidates.borrow());
    *ranking.borrow_mut() = Some(result);
}

#[then("the identical restaurants share first place in input order")]
fn twins_lead(ranking: &RefCell<Option<Result<Vec<Recommendation>, RankError>>>) {
    let binding = ranked(ranking);
    let ids: Vec<u64> = binding.iter().map(|r| r.restaurant.id).collect();
    assert_eq!(ids, vec![1, 2, 3], "expected twins first, got {ids:?}");
    let Some(first) = binding.first() else {
        panic!("first recommendation")
    };
    let Some(second) = binding.get(1) else {
        panic!("second recommendation")
    };
    assert_eq!(first.score, second.score, "twins should tie");
}

#[then("the outlier ranks last with a strictly lower score")]
fn outlier_trails(ranking: &RefCell<Option<Result<Vec<Recommendation>, RankError>>>) {
    let binding = ranked(ranking);
    let Some(first) = binding.first() else {
        panic!("first recommendation")
    };
    let Some(last) = binding.last() else {
        panic!("last recommendation")
    };
    assert_eq!(last.restaurant.id, 3);
    assert!(
        last.score < first.score,
        "outlier should score below the twins (got {} vs {})",
        last.score,
        first.score
    );
}

#[then("exactly ten recommendations are returned")]
fn capped_at_ten(ranking: &RefCell<Option<Result<Vec<Recommendation>, RankError>>>) {
    assert_eq!(ranked(ranking).len(), 10);
}

#[then("ranking fails because a rating is missing")]
fn rating_missing(ranking: &RefCell<Option<Result<Vec<Recommendation>, RankError>>>) {
    let binding = ranking.borrow();
    let result = binding
        .as_ref()
        .unwrap_or_else(|| panic!("ranking result must be recorded"));
    match result {
        Ok(_) => panic!("expected ranking to fail"),
        Err(RankError::Feature(FeatureError::MissingRating { id })) => {
            assert_eq!(*id, 2_u64);
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
}

fn ranked(
    ranking: &RefCell<Option<Result<Vec<Recommendation>, RankError>>>,
) -> Vec<Recommendation> {
    let binding = ranking.borrow();
    let result = binding
        .as_ref()
        .unwrap_or_else(|| panic!("ranking result must be recorded"));
    match result {
        Ok(recommendations) => recommendations.clone(),
        Err(err) => panic!("ranking should succeed, got {err}"),
    }
}

#[scenario(path = "tests/features/scoring.feature", index = 0)]
fn lookalikes_lead(
    candidates: RefCell<Vec<Restaurant>>,
    ranking: RefCell<Option<Result<Vec<Recommendation>, RankError>>>,
) {
    let _ = (candidates, ranking);
}

#[scenario(path = "tests/features/scoring.feature", index = 1)]
fn large_sets_are_capped(
    candidates: RefCell<Vec<Restaurant>>,
    ranking: RefCell<Option<Result<Vec<Recommendation>, RankError>>>,
) {
    let _ = (candidates, ranking);
}

#[scenario(path = "tests/features/scoring.feature", index = 2)]
fn unrated_candidates_fail(
    candidates: RefCell<Vec<Restaurant>>,
    ranking: RefCell<Option<Result<Vec<Recommendation>, RankError>>>,
) {
    let _ = (candidates, ranking);
}
