//! Card presentation helpers

use crate::directory::model::WorkerRecord;

/// GST applied on top of the listed daily price
pub const GST_RATE: f64 = 0.18;

/// Daily price including GST, rounded to whole rupees
pub fn price_with_gst(worker: &WorkerRecord) -> u64 {
    let base = worker.price_per_day.unwrap_or_default().max(0.0);
    (base * (1.0 + GST_RATE)).round() as u64
}

/// `₹` with comma thousands separators, e.g. `₹1,180`
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{}", grouped)
}

/// Avatar fallback: first letter of each name part, uppercased
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Subtitle under the worker's name
pub fn service_title(worker: &WorkerRecord) -> String {
    format!("{} Professional", worker.service)
}
