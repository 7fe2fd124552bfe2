use crate::domain::model::{NormalizedAddress, RaceOutcome};

const TIMEOUT_MESSAGE: &str = "timeout";

/// Six lines, one field each, in fixed order. Absent fields print empty.
pub fn render_address(address: &NormalizedAddress) -> String {
    let lines = [
        ("CEP ..........", &address.postal_code),
        ("State ........", &address.state),
        ("City .........", &address.city),
        ("Neighborhood .", &address.neighborhood),
        ("Street .......", &address.street),
        ("API Service ..", &address.source_service),
    ];

    lines
        .iter()
        .map(|(label, value)| format!("{}: {}\n", label, value.as_deref().unwrap_or("")))
        .collect()
}

pub fn render_outcome(outcome: &RaceOutcome) -> String {
    match outcome {
        RaceOutcome::Found(address) => render_address(address),
        RaceOutcome::Failed(err) => format!("Error: {}", err.detailed_message()),
        RaceOutcome::TimedOut => TIMEOUT_MESSAGE.to_string(),
    }
}
