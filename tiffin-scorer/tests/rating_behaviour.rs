//! Behavioural coverage for the rating fallback ranking.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tiffin_core::test_support::{rated, restaurant};
use tiffin_core::{City, Cuisine, RankError, Ranker, Recommendation, Restaurant};
use tiffin_scorer::RatingRanker;

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

#[given("a mixed candidate set with one unrated restaurant")]
fn mixed_candidates(candidates: &RefCell<Vec<Restaurant>>) {
    *candidates.borrow_mut() = vec![
        rated(1, "Mid Table", City::Bangalore, Cuisine::Biryani, 4.1, 300),
        rated(2, "Top Table", City::Bangalore, Cuisine::Biryani, 4.8, 300),
        restaurant(3, "No Stars", City::Bangalore, Cuisine::Biryani),
        rated(4, "Low Table", City::Bangalore, Cuisine::Biryani, 3.0, 300),
    ];
}

#[when("I rank the candidates by rating")]
fn rank_by_rating(
    candidates: &RefCell<Vec<Restaurant>>,
    ranking: &RefCell<Option<Result<Vec<Recommendation>, RankError>>>,
) {
    let result = RatingRanker::new().rank(&candidates.borrow());
    *ranking.borrow_mut() = Some(result);
}

#[when("I rank the candidates by rating keeping two results")]
fn rank_by_rating_capped(
    candidates: &RefCell<Vec<Restaurant>>,
    ranking: &RefCell<Option<Result<Vec<Recommendation>, RankError>>>,
) {
    let result = RatingRanker::new().with_limit(2).rank(&candidates.borrow());
    *ranking.borrow_mut() = Some(result);
}

#[then("the candidates appear in descending rating order")]
fn descending_order(ranking: &RefCell<Option<Result<Vec<Recommendation>, RankError>>>) {
    let ids: Vec<u64> = ranked(ranking)
        .iter()
        .map(|r| r.restaurant.id)
        .collect();
    assert_eq!(ids, vec![2, 1, 4, 3]);
}

#[then("the unrated restaurant is last with a zero score")]
fn unrated_is_last(ranking: &RefCell<Option<Result<Vec<Recommendation>, RankError>>>) {
    let binding = ranked(ranking);
    let Some(last) = binding.last() else {
        panic!("last recommendation")
    };
    assert_eq!(last.restaurant.id, 3);
    assert_eq!(last.score, 0.0);
}

#[then("exactly two recommendations are returned")]
fn capped_at_two(ranking: &RefCell<Option<Result<Vec<Recommendation>, RankError>>>) {
    assert_eq!(ranked(ranking).len(), 2);
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

#[scenario(path = "tests/features/rating.feature", index = 0)]
fn ratings_order_the_list(
    candidates: RefCell<Vec<Restaurant>>,
    ranking: RefCell<Option<Result<Vec<Recommendation>, RankError>>>,
) {
    let _ = (candidates, ranking);
}

#[scenario(path = "tests/features/rating.feature", index = 1)]
fn custom_limit_caps_the_list(
    candidates: RefCell<Vec<Restaurant>>,
    ranking: RefCell<Option<Result<Vec<Recommendation>, RankError>>>,
) {
    let _ = (candidates, ranking);
}
