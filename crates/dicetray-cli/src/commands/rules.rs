use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use dicetray_core::{
    BONUS_MAX, DICE_MAX, DICE_MIN, DIE_MAX, DIE_MIN, LabelKind, RollCategory, labels, legal_types,
    required_label,
};

pub fn run() -> Result<(), String> {
    println!("  {}", "Roll grammar".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Requires", "Legal types"]);

    for category in RollCategory::all() {
        let requires = match required_label(*category) {
            Some(LabelKind::Ability) => "ability",
            Some(LabelKind::Modifier) => "modifier",
            Some(LabelKind::Skill) => "skill",
            None => "nothing",
        };
        let legal = legal_types(*category)
            .iter()
            .map(|roll_type| roll_type.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![category.to_string(), requires.to_string(), legal]);
    }
    println!("{table}");
    println!();

    println!("  {}", "Limits".bold().underline());
    println!(
        "  die size {DIE_MIN}-{DIE_MAX}, dice count {DICE_MIN}-{DICE_MAX}, bonus 0-{BONUS_MAX}"
    );
    println!("  a bonus of 0 is dropped; drawn values run {DIE_MIN} through the die size");
    println!();

    println!("  {}", "Known labels".bold().underline());
    println!("  {} {}", "modifiers:".dimmed(), labels::MODIFIERS.join(", "));
    println!("  {} {}", "skills:".dimmed(), labels::SKILLS.join(", "));
    println!(
        "  {} {} spells and attacks, e.g. {}",
        "abilities:".dimmed(),
        labels::ABILITIES.len(),
        labels::ABILITIES[..3].join(", ")
    );

    Ok(())
}
