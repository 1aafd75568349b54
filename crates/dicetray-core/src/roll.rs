//! Roll resolution: normalization, dice simulation, and aggregation.
//!
//! [`resolve`] validates the request, clamps its numbers, works out how
//! many dice the roll type calls for, draws them, and folds the draws into
//! a [`RollOutcome`]. The aggregation step is pure; only the draw itself
//! touches the RNG.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::RollResult;
use crate::request::{RollCategory, RollRequest, RollType};
use crate::validate::validate_request;

/// Smallest legal die size; also the floor of every drawn value.
pub const DIE_MIN: u32 = 4;
/// Largest legal die size.
pub const DIE_MAX: u32 = 20;
/// Smallest legal dice count.
pub const DICE_MIN: u32 = 1;
/// Largest legal dice count, before the roll type is applied.
pub const DICE_MAX: u32 = 100;
/// Largest legal bonus. A bonus of zero is dropped entirely.
pub const BONUS_MAX: u32 = 30;

/// The resolved outcome of a single roll request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Effective number of dice rolled.
    pub dice: u32,
    /// Die size after clamping.
    pub die: u32,
    /// Individual die values, in draw order.
    pub rolls: Vec<u32>,
    /// Bonus applied to the total, if any.
    pub bonus: Option<u32>,
    /// Final aggregated result.
    pub total: u32,
    /// Dice notation for the roll, like `2d20kh1+3`.
    pub notation: String,
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.notation, self.total)
    }
}

/// Validate a request and resolve it into an outcome.
///
/// Dice count and die size are taken as absolute values and clamped to
/// their legal ranges before the roll type is applied. Every die drawn
/// lands between [`DIE_MIN`] and the clamped die size, inclusive.
pub fn resolve(request: &RollRequest, rng: &mut StdRng) -> RollResult<RollOutcome> {
    validate_request(request)?;

    let die = clamp_die(request.die);
    let count = effective_dice(request.category, request.roll_type, clamp_dice(request.dice));
    let bonus = applied_bonus(request.roll_type, request.bonus);
    let rolls = (0..count).map(|_| rng.random_range(DIE_MIN..=die)).collect();

    Ok(aggregate(request.roll_type, die, rolls, bonus))
}

fn clamp_die(raw: i64) -> u32 {
    raw.unsigned_abs()
        .clamp(u64::from(DIE_MIN), u64::from(DIE_MAX)) as u32
}

fn clamp_dice(raw: i64) -> u32 {
    raw.unsigned_abs()
        .clamp(u64::from(DICE_MIN), u64::from(DICE_MAX)) as u32
}

/// How many dice the roll type actually calls for.
///
/// Advantage and disadvantage always roll a pair. Initiative rolls a single
/// die unless advantage or disadvantage overrides it. A crit doubles the
/// clamped count; a flat roll keeps it.
fn effective_dice(category: RollCategory, roll_type: RollType, dice: u32) -> u32 {
    match roll_type {
        RollType::Advantage | RollType::Disadvantage => 2,
        RollType::Normal if category == RollCategory::Initiative => 1,
        RollType::Crit => dice * 2,
        RollType::Normal | RollType::FlatRoll => dice,
    }
}

/// The bonus that actually joins the total: clamped, with zero dropped,
/// and never for a crit or flat roll.
fn applied_bonus(roll_type: RollType, raw: Option<i64>) -> Option<u32> {
    if matches!(roll_type, RollType::Crit | RollType::FlatRoll) {
        return None;
    }
    match raw?.clamp(0, i64::from(BONUS_MAX)) as u32 {
        0 => None,
        bonus => Some(bonus),
    }
}

/// Fold the draws into an outcome. Pure: no RNG, no request.
fn aggregate(roll_type: RollType, die: u32, rolls: Vec<u32>, bonus: Option<u32>) -> RollOutcome {
    let base = match roll_type {
        RollType::Advantage => rolls.iter().copied().max().unwrap_or(0),
        RollType::Disadvantage => rolls.iter().copied().min().unwrap_or(0),
        RollType::Normal | RollType::Crit | RollType::FlatRoll => rolls.iter().sum(),
    };
    let total = base + bonus.unwrap_or(0);

    let dice = rolls.len() as u32;
    let keep = match roll_type {
        RollType::Advantage => "kh1",
        RollType::Disadvantage => "kl1",
        RollType::Normal | RollType::Crit | RollType::FlatRoll => "",
    };
    let notation = match bonus {
        Some(bonus) => format!("{dice}d{die}{keep}+{bonus}"),
        None => format!("{dice}d{die}{keep}"),
    };

    RollOutcome {
        dice,
        die,
        rolls,
        bonus,
        total,
        notation,
    }
}
