use rstest::rstest;
use tiffin_core::{CandidateFilter, Catalogue, City, Cuisine, Restaurant, dedupe_by_name};

fn rated(id: u64, name: &str, city: City, cuisine: Cuisine, rating: f32, cost: u16) -> Restaurant {
    Restaurant::new(id, name, city, vec![cuisine])
        .unwrap()
        .try_with_rating(rating)
        .unwrap()
        .try_with_cost(cost)
        .unwrap()
}

fn catalogue() -> Catalogue {
    Catalogue::new(vec![
        rated(1, "Spice Route", City::Bangalore, Cuisine::Biryani, 4.5, 450),
        rated(2, "Dosa Palace", City::Chennai, Cuisine::SouthIndian, 4.2, 250),
        rated(3, "Curry Leaf", City::Bangalore, Cuisine::SouthIndian, 4.0, 350),
        rated(4, "Dragon Bowl", City::Mumbai, Cuisine::Chinese, 3.8, 550),
        rated(5, "Tandoor Nights", City::Delhi, Cuisine::NorthIndian, 4.7, 650),
        rated(6, "Biryani House", City::Bangalore, Cuisine::Biryani, 4.6, 350),
    ])
}

#[rstest]
#[case(CandidateFilter::new(), &[1, 2, 3, 4, 5, 6])]
#[case(CandidateFilter::new().with_city(City::Bangalore), &[1, 3, 6])]
#[case(CandidateFilter::new().with_cuisine(Cuisine::Biryani), &[1, 6])]
#[case(
    CandidateFilter::new()
        .with_cuisine(Cuisine::Biryani)
        .with_cuisine(Cuisine::Chinese),
    &[1, 4, 6]
)]
#[case(CandidateFilter::new().with_min_rating(4.5), &[1, 5, 6])]
#[case(CandidateFilter::new().with_max_cost(350), &[2, 3, 6])]
#[case(
    CandidateFilter::new()
        .with_city(City::Bangalore)
        .with_min_rating(4.4)
        .with_max_cost(400),
    &[6]
)]
fn select_matches_expected_ids(#[case] filter: CandidateFilter, #[case] expected: &[u64]) {
    let selected = catalogue().select(&filter);
    let ids: Vec<u64> = selected.iter().map(|r| r.id).collect();
    assert_eq!(ids, expected);
}

#[rstest]
fn missing_values_fail_active_bounds() {
    let unrated = Restaurant::new(7, "Chai Corner", City::Delhi, vec![Cuisine::NorthIndian])
        .unwrap()
        .try_with_cost(150)
        .unwrap();
    let unpriced = Restaurant::new(8, "Momo Cart", City::Delhi, vec![Cuisine::Chinese])
        .unwrap()
        .try_with_rating(4.9)
        .unwrap();

    assert!(!CandidateFilter::new().with_min_rating(0.0).matches(&unrated));
    assert!(!CandidateFilter::new().with_max_cost(u16::MAX).matches(&unpriced));
    assert!(CandidateFilter::new().matches(&unrated));
    assert!(CandidateFilter::new().matches(&unpriced));
}

#[rstest]
fn dedupe_keeps_first_occurrence() {
    let rows = vec![
        rated(1, "Biryani House", City::Bangalore, Cuisine::Biryani, 4.6, 350),
        rated(2, "Dosa Palace", City::Chennai, Cuisine::SouthIndian, 4.2, 250),
        rated(3, "Biryani House", City::Delhi, Cuisine::Biryani, 4.1, 500),
    ];
    let unique = dedupe_by_name(rows);
    let ids: Vec<u64> = unique.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[rstest]
fn relaxed_filter_recovers_candidates() {
    let strict = CandidateFilter::new()
        .with_city(City::Mumbai)
        .with_cuisine(Cuisine::Chinese)
        .with_min_rating(4.5);
    assert!(catalogue().select(&strict).is_empty());

    let relaxed = strict.without_limits();
    let ids: Vec<u64> = catalogue().select(&relaxed).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4]);
}
