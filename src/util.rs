pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

pub fn format_hours(hours: f32) -> String {
    if hours.fract().abs() < f32::EPSILON {
        format!("{hours:.0}")
    } else {
        format!("{hours:.1}")
    }
}

/// `<length> hours • <year>`, the one-line summary used on cards and panels.
pub fn length_and_year(hours: f32, year: i32) -> String {
    format!("{} hours \u{2022} {year}", format_hours(hours))
}
