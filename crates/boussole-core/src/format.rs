//! Text formatting helpers for advice and assistant output

/// French-style currency: comma decimal separator, space-grouped
/// thousands, trailing euro sign (e.g. `1 234,56 €`)
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    format!(
        "{}{},{:02} €",
        if negative { "-" } else { "" },
        grouped,
        frac
    )
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    text.chars().take(length).collect::<String>() + "..."
}

/// French label for a 1..=5 mood score
pub fn mood_label(mood: u8) -> &'static str {
    match mood {
        1 => "Très mauvais",
        2 => "Mauvais",
        3 => "Neutre",
        4 => "Bon",
        5 => "Excellent",
        _ => "Neutre",
    }
}

/// French label for a 1..=5 energy score
pub fn energy_label(energy: u8) -> &'static str {
    match energy {
        1 => "Épuisé",
        2 => "Fatigué",
        3 => "Normal",
        4 => "Énergique",
        5 => "Très énergique",
        _ => "Normal",
    }
}
