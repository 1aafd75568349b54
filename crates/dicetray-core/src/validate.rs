//! The category grammar: which label each roll category requires and
//! which roll types it allows.
//!
//! | Category   | Requires | Legal types       |
//! |------------|----------|-------------------|
//! | Check      | skill    | ADV, NORMAL, DIS  |
//! | Save       | modifier | ADV, NORMAL, DIS  |
//! | Damage     | ability  | CRIT, FLAT ROLL   |
//! | To hit     | ability  | ADV, NORMAL, DIS  |
//! | Initiative | nothing  | ADV, NORMAL, DIS  |

use crate::error::{RollError, RollResult};
use crate::request::{RollCategory, RollRequest, RollType};

/// One of the three auxiliary label fields on a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// The spell or attack name field.
    Ability,
    /// The saving-throw modifier field.
    Modifier,
    /// The skill name field.
    Skill,
}

/// The label a category requires; `None` means no label is allowed.
pub fn required_label(category: RollCategory) -> Option<LabelKind> {
    match category {
        RollCategory::Check => Some(LabelKind::Skill),
        RollCategory::Save => Some(LabelKind::Modifier),
        RollCategory::Damage | RollCategory::ToHit => Some(LabelKind::Ability),
        RollCategory::Initiative => None,
    }
}

/// The roll types legal for a category.
pub fn legal_types(category: RollCategory) -> &'static [RollType] {
    match category {
        RollCategory::Check
        | RollCategory::Save
        | RollCategory::ToHit
        | RollCategory::Initiative => {
            &[RollType::Advantage, RollType::Normal, RollType::Disadvantage]
        }
        RollCategory::Damage => &[RollType::Crit, RollType::FlatRoll],
    }
}

/// Check a request against the category grammar.
///
/// Exactly the required label must be present, every other label absent,
/// and the roll type must be in the category's legal set. Numeric fields
/// are not inspected here; the resolver clamps those.
pub fn validate_request(request: &RollRequest) -> RollResult<()> {
    let required = required_label(request.category);
    let labels_fit = request.ability.is_some() == (required == Some(LabelKind::Ability))
        && request.modifier.is_some() == (required == Some(LabelKind::Modifier))
        && request.skill.is_some() == (required == Some(LabelKind::Skill));
    let legal = legal_types(request.category);

    if labels_fit && legal.contains(&request.roll_type) {
        Ok(())
    } else {
        let requirement = match required {
            Some(LabelKind::Ability) => "ability required, no other labels",
            Some(LabelKind::Modifier) => "modifier required, no other labels",
            Some(LabelKind::Skill) => "skill required, no other labels",
            None => "no labels allowed",
        };
        let legal_list = legal
            .iter()
            .map(|roll_type| roll_type.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(RollError::IllegalCombination {
            category: request.category,
            requirement,
            legal: legal_list,
        })
    }
}
