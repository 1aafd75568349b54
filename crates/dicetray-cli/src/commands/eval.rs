use dicetray_core::{RollRequest, resolve};

use crate::render;

pub fn run(raw: &str, seed: Option<u64>, json: bool) -> Result<(), String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| format!("request is not valid JSON: {e}"))?;
    let request = RollRequest::from_json(&value).map_err(super::reject)?;

    let mut rng = super::make_rng(seed);
    let outcome = resolve(&request, &mut rng).map_err(super::reject)?;

    if json {
        super::print_json(&request, &outcome)
    } else {
        render::print_roll(&request, &outcome);
        Ok(())
    }
}
