pub mod batch;
pub mod eval;
pub mod roll;
pub mod rules;

use dicetray_core::{RollError, RollOutcome, RollRequest};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// RNG for a command: seeded when the user asked for one, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Format a rejection with its kind for the error line.
pub fn reject(error: RollError) -> String {
    format!("{}: {error}", error.kind())
}

/// Print the request and its outcome as a pretty JSON document.
pub fn print_json(request: &RollRequest, outcome: &RollOutcome) -> Result<(), String> {
    let payload = serde_json::json!({ "request": request, "outcome": outcome });
    let text = serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}
