//! Tests for constructing and improving tours.

use float_cmp::approx_eq;
use font_tour::{
    DistanceMatrix, Tour,
    tour::{BestRelocation, FirstRelocation, Improve, Strategy, construct_greedy, farthest_pair},
};
use test_case::test_case;

mod common;

#[test]
fn two_pairs_scenario() -> Result<(), String> {
    let matrix = DistanceMatrix::new(&common::data_gen::two_pairs())?;

    let (i, j, d) = farthest_pair(&matrix)?;
    assert_eq!((i, j), (0, 3));
    assert!(approx_eq!(f64, d, 221_f64.sqrt(), ulps = 2));

    // The seed is the first item of the farthest pair. Its partner is not forced into second place.
    let tour = construct_greedy(&matrix);
    assert_eq!(tour.indices(), &[0, 1, 2, 3]);
    assert!(approx_eq!(f64, tour.path_length(&matrix), 2.0 + 181_f64.sqrt(), ulps = 4));

    for strategy in [Strategy::First, Strategy::Best] {
        let improvement = strategy.improve(tour.clone(), &matrix);
        assert_eq!(improvement.tour, tour, "{} changed an optimal tour", Improve::<f64>::name(&strategy));
        assert!(improvement.history.is_empty());
    }
    Ok(())
}

#[test]
fn trivial_batches() -> Result<(), String> {
    let empty = DistanceMatrix::<f64>::new::<Vec<f64>>(&[])?;
    assert!(farthest_pair(&empty).is_err());
    assert!(construct_greedy(&empty).is_empty());

    let single = DistanceMatrix::new(&[vec![1.0_f64, 2.0]])?;
    assert!(farthest_pair(&single).is_err());
    assert_eq!(construct_greedy(&single).indices(), &[0]);

    let pair = DistanceMatrix::new(&[vec![1.0_f64], vec![3.0]])?;
    assert_eq!(farthest_pair(&pair)?, (0, 1, 2.0));
    let tour = construct_greedy(&pair);
    assert_eq!(tour.indices(), &[0, 1]);
    for strategy in [Strategy::First, Strategy::Best] {
        let improvement = strategy.improve(tour.clone(), &pair);
        assert_eq!(improvement.tour, tour);
        assert_eq!(improvement.moves(), 0);
    }
    Ok(())
}

#[test]
fn ties_go_to_lowest_index() -> Result<(), String> {
    // Every pair is at the same distance, so every choice is a tie.
    let data = vec![vec![0.0_f64; 3]; 6];
    let matrix = DistanceMatrix::new(&data)?;

    assert_eq!(farthest_pair(&matrix)?, (0, 1, 0.0));
    assert_eq!(construct_greedy(&matrix), Tour::identity(6));
    Ok(())
}

#[test]
fn greedy_steps_to_nearest_unvisited() -> Result<(), String> {
    // Item 0 is equally far from 1 and 2, so (0, 1) is the farthest pair. From 0 the walk takes 3, which is then equally close to 1 and 2.
    let data = vec![vec![0.0_f64, 0.0], vec![3.0, 1.0], vec![3.0, -1.0], vec![1.0, 0.0]];
    let matrix = DistanceMatrix::new(&data)?;

    let (i, j, _) = farthest_pair(&matrix)?;
    assert_eq!((i, j), (0, 1));
    assert_eq!(construct_greedy(&matrix).indices(), &[0, 3, 1, 2]);
    Ok(())
}

#[test_case(0; "0")]
#[test_case(1; "1")]
#[test_case(2; "2")]
#[test_case(3; "3")]
#[test_case(25; "25")]
#[test_case(60; "60")]
fn tours_are_permutations(car: usize) -> Result<(), String> {
    let data = common::data_gen::tabular(car, 5, -1.0, 1.0, 42);
    let matrix = DistanceMatrix::new(&data)?;

    let tour = construct_greedy(&matrix);
    assert_eq!(tour.len(), car);
    assert!(tour.is_valid(), "Greedy tour {tour:?} is not a permutation");

    for strategy in [Strategy::First, Strategy::Best] {
        let improved = strategy.improve(tour.clone(), &matrix).tour;
        assert_eq!(improved.len(), car);
        assert!(improved.is_valid(), "Improved tour {improved:?} is not a permutation");
    }
    Ok(())
}

#[test_case(FirstRelocation; "first")]
#[test_case(BestRelocation; "best")]
fn fixes_a_misplaced_item<A: Improve<f64>>(algorithm: A) -> Result<(), String> {
    let matrix = DistanceMatrix::new(&common::data_gen::line(5))?;
    let tour = Tour::new(vec![1, 0, 2, 3, 4])?;
    assert!(approx_eq!(f64, tour.path_length(&matrix), 5.0, ulps = 2));

    let improvement = algorithm.improve(tour, &matrix);
    assert_eq!(improvement.tour.indices(), &[0, 1, 2, 3, 4]);
    assert_eq!(improvement.moves(), 1);
    assert!(approx_eq!(f64, improvement.final_length(), 4.0, ulps = 2));
    Ok(())
}

#[test_case(20, 1; "20 seed 1")]
#[test_case(40, 2; "40 seed 2")]
#[test_case(40, 3; "40 seed 3")]
fn improvement_is_monotonic(car: usize, seed: u64) -> Result<(), String> {
    let data = common::data_gen::tabular(car, 3, -1.0, 1.0, seed);
    let matrix = DistanceMatrix::new(&data)?;
    // Start from index order, which is far from a good tour for random points.
    let tour = Tour::identity(car);

    for strategy in [Strategy::First, Strategy::Best] {
        let improvement = strategy.improve(tour.clone(), &matrix);
        assert!(improvement.moves() > 0, "No moves from an arbitrary tour");

        let mut previous = improvement.initial_length;
        for &length in &improvement.history {
            assert!(length < previous, "History is not strictly decreasing: {:?}", improvement.history);
            previous = length;
        }
        assert!(approx_eq!(f64, improvement.final_length(), improvement.tour.path_length(&matrix), epsilon = 1e-9));
    }
    Ok(())
}

#[test_case(30, 11; "30")]
#[test_case(50, 12; "50")]
fn improvement_is_idempotent(car: usize, seed: u64) -> Result<(), String> {
    let data = common::data_gen::tabular(car, 4, 0.0, 1.0, seed);
    let matrix = DistanceMatrix::new(&data)?;
    let greedy = construct_greedy(&matrix);

    for strategy in [Strategy::First, Strategy::Best] {
        let converged = strategy.improve(greedy.clone(), &matrix);
        assert!(converged.final_length() <= converged.initial_length);

        let again = strategy.improve(converged.tour.clone(), &matrix);
        assert_eq!(again.tour, converged.tour);
        assert!(again.history.is_empty());
    }
    Ok(())
}

/// Length of an open path through `order`, summed edge by edge.
fn open_length(order: &[usize], matrix: &DistanceMatrix<f64>) -> f64 {
    order.windows(2).map(|w| matrix.get(w[0], w[1])).sum()
}

/// Tries every remove-then-insert move in scan order on a plain list, recomputing the whole length each time and starting over after every
/// committed move.
fn scan_relocations(mut order: Vec<usize>, matrix: &DistanceMatrix<f64>) -> (Vec<usize>, Vec<f64>) {
    let n = order.len();
    let mut best = open_length(&order, matrix);
    let mut history = Vec::new();
    'scan: loop {
        for i in 0..n {
            for j in (0..n).filter(|&j| j != i) {
                let mut candidate = order.clone();
                let item = candidate.remove(i);
                candidate.insert(j, item);
                let length = open_length(&candidate, matrix);
                if length < best {
                    order = candidate;
                    best = length;
                    history.push(length);
                    continue 'scan;
                }
            }
        }
        break;
    }
    (order, history)
}

#[test_case(8, 21; "8 seed 21")]
#[test_case(12, 22; "12 seed 22")]
#[test_case(16, 23; "16 seed 23")]
#[test_case(25, 24; "25 seed 24")]
fn first_relocation_follows_the_scan(car: usize, seed: u64) -> Result<(), String> {
    let matrix = DistanceMatrix::new(&common::data_gen::tabular(car, 2, -1.0, 1.0, seed))?;
    let tour = Tour::identity(car);

    let (expected_order, expected_history) = scan_relocations(tour.indices().to_vec(), &matrix);
    let improvement = FirstRelocation.improve(tour, &matrix);

    assert_eq!(improvement.tour.indices(), expected_order.as_slice());
    assert_eq!(improvement.history.len(), expected_history.len());
    for (&actual, &expected) in improvement.history.iter().zip(&expected_history) {
        assert!(approx_eq!(f64, actual, expected, epsilon = 1e-9), "{:?} != {expected_history:?}", improvement.history);
    }
    Ok(())
}

#[test]
fn first_and_best_reach_different_tours() -> Result<(), String> {
    let differing = (0..20)
        .map(|seed| {
            let matrix = DistanceMatrix::new(&common::data_gen::tabular(12, 2, -1.0, 1.0, 100 + seed))?;
            let first = FirstRelocation.improve(Tour::identity(12), &matrix);
            let best = BestRelocation.improve(Tour::identity(12), &matrix);
            Ok::<_, String>(first.tour != best.tour)
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|&d| d)
        .count();
    assert!(differing > 0, "First and best improvement agreed on every instance");
    Ok(())
}

#[test]
fn strategy_names() {
    assert_eq!(Improve::<f32>::name(&Strategy::First), "FirstRelocation");
    assert_eq!(Improve::<f32>::name(&Strategy::Best), "BestRelocation");
}
