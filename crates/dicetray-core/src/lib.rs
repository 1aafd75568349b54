//! Dice-roll request validation and resolution for tabletop sessions.
//!
//! Models the five roll categories (checks, saves, damage, to-hit, and
//! initiative), enforces which auxiliary label and roll types each one
//! allows, and simulates the dice with a seedable RNG. Requests arrive
//! typed, through builder methods, or as untyped JSON; outcomes carry the
//! individual draws, the applied bonus, the total, and a dice notation
//! string, leaving all presentation to the caller.

pub mod error;
pub mod generate;
pub mod labels;
pub mod request;
pub mod roll;
pub mod validate;

pub use error::{RejectionKind, RollError, RollResult};
pub use generate::generate_requests;
pub use request::{RollCategory, RollRequest, RollType};
pub use roll::{BONUS_MAX, DICE_MAX, DICE_MIN, DIE_MAX, DIE_MIN, RollOutcome, resolve};
pub use validate::{LabelKind, legal_types, required_label, validate_request};
