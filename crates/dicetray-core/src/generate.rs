//! Random generation of valid roll requests, for exercising the resolver
//! in bulk.

use rand::Rng;
use rand::rngs::StdRng;

use crate::labels::{ABILITIES, MODIFIERS, SKILLS};
use crate::request::{RollCategory, RollRequest, RollType};
use crate::roll::{DIE_MAX, DIE_MIN};
use crate::validate::validate_request;

/// Candidate dice counts run 1 through 4.
const CANDIDATE_DICE_MAX: i64 = 4;
/// Candidate bonuses run 0 through 5; zero gets dropped at resolution.
const CANDIDATE_BONUS_MAX: i64 = 5;

/// Draw `count` fully random request candidates and keep the valid ones.
///
/// Every field is randomized independently: each label is absent half the
/// time and a uniform table pick otherwise, and the category and roll type
/// are uniform draws. Candidates that fail the grammar are discarded, so
/// the returned list is usually much shorter than `count`.
pub fn generate_requests(count: usize, rng: &mut StdRng) -> Vec<RollRequest> {
    (0..count)
        .map(|_| candidate(rng))
        .filter(|request| validate_request(request).is_ok())
        .collect()
}

/// One candidate with uniformly random fields, valid or not.
fn candidate(rng: &mut StdRng) -> RollRequest {
    let categories = RollCategory::all();
    let types = RollType::all();
    RollRequest {
        dice: rng.random_range(1..=CANDIDATE_DICE_MAX),
        die: rng.random_range(i64::from(DIE_MIN)..=i64::from(DIE_MAX)),
        bonus: Some(rng.random_range(0..=CANDIDATE_BONUS_MAX)),
        category: categories[rng.random_range(0..categories.len())],
        roll_type: types[rng.random_range(0..types.len())],
        ability: pick_optional(ABILITIES, rng),
        modifier: pick_optional(MODIFIERS, rng),
        skill: pick_optional(SKILLS, rng),
    }
}

/// Half the time `None`, otherwise a uniform pick from the table.
fn pick_optional(table: &[&str], rng: &mut StdRng) -> Option<String> {
    if rng.random_bool(0.5) {
        Some(table[rng.random_range(0..table.len())].to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn generated_requests_all_pass_validation() {
        let mut rng = StdRng::seed_from_u64(42);
        let requests = generate_requests(500, &mut rng);
        assert!(!requests.is_empty());
        for request in &requests {
            assert!(validate_request(request).is_ok());
        }
    }

    #[test]
    fn invalid_candidates_are_discarded() {
        let mut rng = StdRng::seed_from_u64(42);
        let requests = generate_requests(500, &mut rng);
        assert!(requests.len() < 500);
    }

    #[test]
    fn deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(
            generate_requests(100, &mut rng1),
            generate_requests(100, &mut rng2)
        );
    }

    #[test]
    fn candidate_fields_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let request = candidate(&mut rng);
            assert!((1..=CANDIDATE_DICE_MAX).contains(&request.dice));
            assert!((i64::from(DIE_MIN)..=i64::from(DIE_MAX)).contains(&request.die));
            assert!((0..=CANDIDATE_BONUS_MAX).contains(&request.bonus.unwrap_or(0)));
        }
    }
}
