use clap::Args;
use dicetray_core::{RollCategory, RollError, RollRequest, RollType, resolve};

use crate::render;

/// Flags for a single roll.
#[derive(Args)]
pub struct RollArgs {
    /// Roll category: check, save, damage, to-hit, initiative
    pub category: String,

    /// Roll type: adv, normal, dis, crit, flat
    #[arg(short = 't', long, default_value = "normal")]
    pub roll_type: String,

    /// Number of dice to roll
    #[arg(short = 'n', long, default_value = "1")]
    pub dice: i64,

    /// Die size, d4 through d20
    #[arg(short, long, default_value = "20")]
    pub die: i64,

    /// Flat bonus added to the result
    #[arg(short, long)]
    pub bonus: Option<i64>,

    /// Spell or attack name, for damage and to-hit rolls
    #[arg(long)]
    pub ability: Option<String>,

    /// Saving-throw modifier, for saves
    #[arg(long)]
    pub modifier: Option<String>,

    /// Skill name, for checks
    #[arg(long)]
    pub skill: Option<String>,

    /// RNG seed for a reproducible roll
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print request and outcome as JSON instead of the formatted block
    #[arg(short, long)]
    pub json: bool,
}

pub fn run(args: RollArgs) -> Result<(), String> {
    let category = RollCategory::parse(&args.category)
        .ok_or_else(|| super::reject(RollError::UnknownCategory(args.category.clone())))?;
    let roll_type = RollType::parse(&args.roll_type)
        .ok_or_else(|| super::reject(RollError::UnknownRollType(args.roll_type.clone())))?;

    let mut request = RollRequest::new(category, roll_type)
        .with_dice(args.dice)
        .with_die(args.die);
    if let Some(bonus) = args.bonus {
        request = request.with_bonus(bonus);
    }
    if let Some(ability) = args.ability {
        request = request.with_ability(ability);
    }
    if let Some(modifier) = args.modifier {
        request = request.with_modifier(modifier);
    }
    if let Some(skill) = args.skill {
        request = request.with_skill(skill);
    }

    let mut rng = super::make_rng(args.seed);
    let outcome = resolve(&request, &mut rng).map_err(super::reject)?;

    if args.json {
        super::print_json(&request, &outcome)
    } else {
        render::print_roll(&request, &outcome);
        Ok(())
    }
}
