//! Colorized rendering of resolved rolls: the announcement, the echoed
//! inputs, and the result block with its breakdown and notation.

use colored::Colorize;
use dicetray_core::{RollCategory, RollOutcome, RollRequest, RollType};

const SEPARATOR: &str = "##############################";

/// Print the full block for one resolved roll.
pub fn print_roll(request: &RollRequest, outcome: &RollOutcome) {
    print_announcement(request.roll_type);
    println!("{}", format!("dice: {}", outcome.dice).italic());
    println!("{}", format!("die: d{}", outcome.die).italic());
    if let Some(bonus) = outcome.bonus {
        println!("{}", format!("bonus: {bonus}").italic());
    }
    println!("{}", SEPARATOR.dimmed());
    println!("{}", header_line(request));
    println!("{}", breakdown_line(request.roll_type, outcome));
    println!("{}", outcome.notation.dimmed());
    println!("{}", SEPARATOR.dimmed());
}

fn print_announcement(roll_type: RollType) {
    let styled = match roll_type {
        RollType::Advantage => format!("+{roll_type}").green(),
        RollType::Disadvantage => format!("-{roll_type}").red(),
        RollType::Crit => roll_type.to_string().blue(),
        RollType::Normal | RollType::FlatRoll => roll_type.to_string().bright_white(),
    };
    println!("Rolling with {styled}");
}

/// `LABEL: CATEGORY`, with the category in its own color. Initiative has
/// no label, so it announces itself as `INITIATIVE: ROLL`.
fn header_line(request: &RollRequest) -> String {
    let category = request.category;
    let colored_category = match category {
        RollCategory::Check => category.to_string().magenta(),
        RollCategory::Save => category.to_string().green(),
        RollCategory::Damage => category.to_string().red(),
        RollCategory::ToHit => category.to_string().blue(),
        RollCategory::Initiative => "ROLL".yellow(),
    };
    let label = request
        .skill
        .as_deref()
        .or(request.modifier.as_deref())
        .or(request.ability.as_deref());
    let lead = match label {
        Some(label) => format!("{}:", label.to_uppercase()),
        None => format!("{category}:"),
    };
    format!("{} {colored_category}", lead.bright_white())
}

/// Advantage and disadvantage show the kept pair, sums show every term.
fn breakdown_line(roll_type: RollType, outcome: &RollOutcome) -> String {
    let total = outcome.total.to_string().bold();
    match roll_type {
        RollType::Advantage | RollType::Disadvantage => {
            let pair = outcome
                .rolls
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let lead = match outcome.bonus {
                Some(bonus) => format!("[{pair}] + {bonus}"),
                None => format!("[{pair}]"),
            };
            format!("{} = {total}", lead.bright_white())
        }
        RollType::Normal | RollType::Crit | RollType::FlatRoll => {
            let mut terms: Vec<String> = outcome
                .rolls
                .iter()
                .map(|value| value.to_string())
                .collect();
            if let Some(bonus) = outcome.bonus {
                terms.push(bonus.to_string());
            }
            format!("{} = {total}", terms.join(" + ").bright_white())
        }
    }
}
