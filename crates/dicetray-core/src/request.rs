//! Roll request types: categories, roll types, and the request itself.
//!
//! Requests are built directly, through the `with_*` methods, or from an
//! untyped JSON object via [`RollRequest::from_json`], which checks field
//! types before anything else looks at the values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RollError, RollResult};

/// The kind of roll being made.
///
/// The category decides which label the request must carry and which roll
/// types are legal for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollCategory {
    /// A skill check.
    #[serde(rename = "CHECK")]
    Check,
    /// A saving throw.
    #[serde(rename = "SAVE")]
    Save,
    /// A damage roll for a spell or attack.
    #[serde(rename = "DAMAGE")]
    Damage,
    /// An attack roll against a target.
    #[serde(rename = "TO HIT")]
    ToHit,
    /// A turn-order roll.
    #[serde(rename = "INITIATIVE")]
    Initiative,
}

impl RollCategory {
    /// Parse a category from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "check" => Some(Self::Check),
            "save" => Some(Self::Save),
            "damage" => Some(Self::Damage),
            "to hit" | "tohit" => Some(Self::ToHit),
            "initiative" => Some(Self::Initiative),
            _ => None,
        }
    }

    /// All categories in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Check,
            Self::Save,
            Self::Damage,
            Self::ToHit,
            Self::Initiative,
        ]
    }
}

impl std::fmt::Display for RollCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Check => write!(f, "CHECK"),
            Self::Save => write!(f, "SAVE"),
            Self::Damage => write!(f, "DAMAGE"),
            Self::ToHit => write!(f, "TO HIT"),
            Self::Initiative => write!(f, "INITIATIVE"),
        }
    }
}

/// How the dice are rolled and combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollType {
    /// Roll two dice, keep the highest.
    #[serde(rename = "ADV")]
    Advantage,
    /// Roll and sum the requested dice.
    #[serde(rename = "NORMAL")]
    Normal,
    /// Roll two dice, keep the lowest.
    #[serde(rename = "DIS")]
    Disadvantage,
    /// Roll double the dice and sum them; the bonus never applies.
    #[serde(rename = "CRIT")]
    Crit,
    /// Roll and sum the requested dice; the bonus never applies.
    #[serde(rename = "FLAT ROLL")]
    FlatRoll,
}

impl RollType {
    /// Parse a roll type from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "adv" | "advantage" => Some(Self::Advantage),
            "normal" => Some(Self::Normal),
            "dis" | "disadvantage" => Some(Self::Disadvantage),
            "crit" | "critical" => Some(Self::Crit),
            "flat roll" | "flatroll" | "flat" => Some(Self::FlatRoll),
            _ => None,
        }
    }

    /// All roll types in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Advantage,
            Self::Normal,
            Self::Disadvantage,
            Self::Crit,
            Self::FlatRoll,
        ]
    }
}

impl std::fmt::Display for RollType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Advantage => write!(f, "ADV"),
            Self::Normal => write!(f, "NORMAL"),
            Self::Disadvantage => write!(f, "DIS"),
            Self::Crit => write!(f, "CRIT"),
            Self::FlatRoll => write!(f, "FLAT ROLL"),
        }
    }
}

/// A single roll request, not yet validated or resolved.
///
/// Numeric fields carry whatever the caller asked for; the resolver
/// normalizes and clamps them. Label fields are opaque display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    /// Requested number of dice.
    pub dice: i64,
    /// Requested die size.
    pub die: i64,
    /// Flat bonus added to the result, if any.
    pub bonus: Option<i64>,
    /// What the roll is for.
    pub category: RollCategory,
    /// How the dice are rolled and combined.
    #[serde(rename = "type")]
    pub roll_type: RollType,
    /// Spell or attack name, for damage and to-hit rolls.
    pub ability: Option<String>,
    /// Saving-throw modifier abbreviation, for saves.
    pub modifier: Option<String>,
    /// Skill name, for checks.
    pub skill: Option<String>,
}

impl RollRequest {
    /// Create a request for one d20 with no bonus and no labels.
    pub fn new(category: RollCategory, roll_type: RollType) -> Self {
        Self {
            dice: 1,
            die: 20,
            bonus: None,
            category,
            roll_type,
            ability: None,
            modifier: None,
            skill: None,
        }
    }

    /// Set the number of dice.
    pub fn with_dice(mut self, dice: i64) -> Self {
        self.dice = dice;
        self
    }

    /// Set the die size.
    pub fn with_die(mut self, die: i64) -> Self {
        self.die = die;
        self
    }

    /// Set the flat bonus.
    pub fn with_bonus(mut self, bonus: i64) -> Self {
        self.bonus = Some(bonus);
        self
    }

    /// Set the ability label.
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    /// Set the modifier label.
    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    /// Set the skill label.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    /// Build a request from an untyped JSON object.
    ///
    /// Field types are checked before anything else: integer fields first,
    /// then string fields. The category and roll-type strings are parsed
    /// only after every type check has passed, so a malformed field is
    /// always reported ahead of a grammar problem. `dice` defaults to 1
    /// when absent; `die` is required.
    pub fn from_json(value: &Value) -> RollResult<Self> {
        let obj = value.as_object().ok_or(RollError::ExpectedObject)?;

        let die = int_field(obj, "die")?.ok_or(RollError::ExpectedInteger("die"))?;
        let dice = int_field(obj, "dice")?.unwrap_or(1);
        let bonus = match obj.get("bonus") {
            None | Some(Value::Null) => None,
            Some(value) => Some(as_integer(value).ok_or(RollError::ExpectedInteger("bonus"))?),
        };

        let ability = str_field(obj, "ability")?;
        let modifier = str_field(obj, "modifier")?;
        let skill = str_field(obj, "skill")?;
        let category_raw = str_field(obj, "category")?;
        let type_raw = str_field(obj, "type")?;

        let category = match category_raw {
            Some(s) => RollCategory::parse(&s).ok_or(RollError::UnknownCategory(s))?,
            None => return Err(RollError::UnknownCategory("null".to_string())),
        };
        let roll_type = match type_raw {
            Some(s) => RollType::parse(&s).ok_or(RollError::UnknownRollType(s))?,
            None => return Err(RollError::UnknownRollType("null".to_string())),
        };

        Ok(Self {
            dice,
            die,
            bonus,
            category,
            roll_type,
            ability,
            modifier,
            skill,
        })
    }
}

/// A JSON number that is exactly a whole number, widened to `i64`.
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    // Whole-valued floats like 20.0 count as integers.
    let f = value.as_f64()?;
    if f.fract() == 0.0 { Some(f as i64) } else { None }
}

fn int_field(obj: &Map<String, Value>, name: &'static str) -> RollResult<Option<i64>> {
    match obj.get(name) {
        None => Ok(None),
        Some(value) => as_integer(value)
            .map(Some)
            .ok_or(RollError::ExpectedInteger(name)),
    }
}

fn str_field(obj: &Map<String, Value>, name: &'static str) -> RollResult<Option<String>> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RollError::ExpectedString(name)),
    }
}
