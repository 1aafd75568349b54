use std::collections::HashMap;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use dicetray_core::{RollCategory, generate_requests, resolve};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::render;

struct CategoryStats {
    rolls: u32,
    min: u32,
    max: u32,
    sum: u64,
}

pub fn run(count: usize, seed: u64, verbose: bool) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let requests = generate_requests(count, &mut rng);

    println!(
        "  {} {}",
        "Batch".bold(),
        format!("({count} candidates, {} valid, seed={seed})", requests.len()).dimmed()
    );
    println!();

    if requests.is_empty() {
        println!("  No valid requests generated.");
        return Ok(());
    }

    let mut stats: HashMap<RollCategory, CategoryStats> = HashMap::new();

    for (index, request) in requests.iter().enumerate() {
        let outcome = resolve(request, &mut rng).map_err(super::reject)?;

        if verbose {
            println!("{}", format!("Roll {}", index + 1).bold());
            render::print_roll(request, &outcome);
            println!("{}", "---------------------------------------".dimmed());
            println!();
        }

        let entry = stats.entry(request.category).or_insert(CategoryStats {
            rolls: 0,
            min: u32::MAX,
            max: 0,
            sum: 0,
        });
        entry.rolls += 1;
        entry.min = entry.min.min(outcome.total);
        entry.max = entry.max.max(outcome.total);
        entry.sum += u64::from(outcome.total);
    }

    if !verbose {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Category", "Rolls", "Min", "Mean", "Max"]);

        for category in RollCategory::all() {
            if let Some(s) = stats.get(category) {
                let mean = s.sum as f64 / f64::from(s.rolls);
                table.add_row(vec![
                    category.to_string(),
                    s.rolls.to_string(),
                    s.min.to_string(),
                    format!("{mean:.1}"),
                    s.max.to_string(),
                ]);
            }
        }
        println!("{table}");
        println!();
    }

    println!("  {} rolls resolved", requests.len());

    Ok(())
}
