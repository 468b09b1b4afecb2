// Display helpers shared by the engine (summaries, exports) and the GUI.

/// Formats a value with a fixed number of decimals and `,` thousand separators.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.decimals$}", value.abs(), decimals = decimals);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Money amounts are always shown with two decimals.
pub fn format_money(value: f64) -> String {
    format_decimal(value, 2)
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value, 2))
}

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
