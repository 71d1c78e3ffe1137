use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use railyard::scheduling::min_platforms;
use railyard::structures::ScheduleError;

fn random_schedule(rng: &mut StdRng, trains: usize) -> (Vec<i32>, Vec<i32>) {
    let arrival: Vec<i32> = (0..trains).map(|_| rng.random_range(0..2300)).collect();
    let departure = arrival
        .iter()
        .map(|a| a + rng.random_range(1..300))
        .collect();
    (arrival, departure)
}

// Largest number of [arrival, departure) windows covering a single instant.
fn brute_force(arrival: &[i32], departure: &[i32]) -> usize {
    arrival
        .iter()
        .map(|&t| {
            arrival
                .iter()
                .zip(departure)
                .filter(|&(&a, &d)| a <= t && t < d)
                .count()
        })
        .max()
        .unwrap_or(0)
}

#[test]
fn matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let trains = rng.random_range(0..20);
        let (arrival, departure) = random_schedule(&mut rng, trains);

        let platforms = min_platforms(&arrival, &departure).unwrap();

        assert_eq!(
            platforms,
            brute_force(&arrival, &departure),
            "arrival={arrival:?} departure={departure:?}"
        );
        if trains > 0 {
            assert!(platforms >= 1);
        }
    }
}

#[test]
fn invariant_under_train_permutation() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let (arrival, departure) = random_schedule(&mut rng, 12);
        let expected = min_platforms(&arrival, &departure).unwrap();

        let mut trains: Vec<(i32, i32)> = arrival.into_iter().zip(departure).collect();
        trains.shuffle(&mut rng);
        let (arrival, departure): (Vec<i32>, Vec<i32>) = trains.into_iter().unzip();

        assert_eq!(min_platforms(&arrival, &departure).unwrap(), expected);
    }
}

#[test]
fn reference_scenarios() {
    assert_eq!(
        min_platforms(
            &[900, 940, 950, 1100, 1500, 1800],
            &[910, 1200, 1120, 1130, 1900, 2000]
        ),
        Ok(3)
    );
    assert_eq!(
        min_platforms(
            &[200, 210, 300, 320, 350, 500],
            &[230, 340, 320, 430, 400, 520]
        ),
        Ok(2)
    );
}

#[test]
fn mismatch_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(
            min_platforms(&[900], &[]),
            Err(ScheduleError::LengthMismatch {
                arrivals: 1,
                departures: 0
            })
        );
    }
}
