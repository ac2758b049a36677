//! The daily update rule at the center of the model.

use crate::random::UniformSource;

/// How many people one infected person can encounter in a day.
pub const DEFAULT_MAX_INFECTIONS: u32 = 3;

/// Computes the total number of infected people at the end of a day.
///
/// Each of the `starting_infected` already-infected people makes exactly
/// `max_infections` independent encounters, and each encounter infects one
/// more person when a uniform draw lands below `infection_probability`. The
/// sum of successful encounters is added to `starting_infected`.
///
/// Two deliberate modeling simplifications: the result is not capped at any
/// population size, and newly infected people are not deduplicated, so two
/// encounters can notionally "infect" the same person and still count
/// twice.
///
/// `infection_probability` is not range-checked. The vaccine scenario can
/// pass a negative value; no draw in `[0, 1)` compares below it, so it
/// yields zero new infections without an explicit clamp.
pub fn daily_infection<R: UniformSource>(
    rng: &mut R,
    starting_infected: u64,
    infection_probability: f64,
    max_infections: u32,
) -> u64 {
    let mut extra_infected = 0;
    for _infected_person in 0..starting_infected {
        for _encounter in 0..max_infections {
            if rng.next_draw() < infection_probability {
                extra_infected += 1;
            }
        }
    }
    starting_infected + extra_infected
}

#[cfg(test)]
mod tests {
    use super::{daily_infection, DEFAULT_MAX_INFECTIONS};
    use crate::random::{ConstantSource, RandomSource};

    #[test]
    fn zero_probability_never_grows() {
        let mut rng = RandomSource::seeded(42);
        for starting in [0, 1, 10, 1000] {
            assert_eq!(
                daily_infection(&mut rng, starting, 0.0, DEFAULT_MAX_INFECTIONS),
                starting
            );
        }
    }

    #[test]
    fn certain_probability_every_trial_succeeds() {
        let mut rng = RandomSource::seeded(42);
        for starting in [0, 1, 10, 1000] {
            for max_infections in [1, 2, 3, 5] {
                assert_eq!(
                    daily_infection(&mut rng, starting, 1.0, max_infections),
                    starting * (1 + u64::from(max_infections))
                );
            }
        }
    }

    #[test]
    fn result_never_below_starting_count() {
        let mut rng = RandomSource::seeded(123);
        for starting in [0, 1, 7, 250] {
            let next = daily_infection(&mut rng, starting, 0.3, DEFAULT_MAX_INFECTIONS);
            assert!(next >= starting);
        }
    }

    #[test]
    fn result_bounded_by_total_trials() {
        let mut rng = RandomSource::seeded(123);
        let starting = 50;
        let next = daily_infection(&mut rng, starting, 0.9, DEFAULT_MAX_INFECTIONS);
        assert!(next <= starting * (1 + u64::from(DEFAULT_MAX_INFECTIONS)));
    }

    #[test]
    fn negative_probability_is_inert() {
        // The vaccine scenario can push the effective probability below
        // zero; every comparison against a [0, 1) draw must fail.
        let mut rng = ConstantSource(0.0);
        assert_eq!(
            daily_infection(&mut rng, 100, -0.05, DEFAULT_MAX_INFECTIONS),
            100
        );
    }

    #[test]
    fn zero_encounters_is_identity() {
        let mut rng = ConstantSource(0.0);
        assert_eq!(daily_infection(&mut rng, 10, 1.0, 0), 10);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = RandomSource::seeded(7);
        let mut b = RandomSource::seeded(7);
        assert_eq!(
            daily_infection(&mut a, 100, 0.5, DEFAULT_MAX_INFECTIONS),
            daily_infection(&mut b, 100, 0.5, DEFAULT_MAX_INFECTIONS)
        );
    }
}
