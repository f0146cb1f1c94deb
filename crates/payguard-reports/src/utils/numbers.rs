const SCALES: [(usize, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

/// Compact row count: `4_536` becomes `4.5K`.
pub fn format_count(n: usize) -> String {
    SCALES
        .iter()
        .find(|(scale, _)| n >= *scale)
        .map(|(scale, suffix)| format!("{:0.1}{}", n as f64 / *scale as f64, suffix))
        .unwrap_or_else(|| n.to_string())
}

pub fn format_percent(p: f64) -> String {
    format!("{:.2}%", p)
}
