use crate::shared::icons::icon;
use leptos::prelude::*;

/// Thousands separated by a thin space: 12345 -> "12 345"
fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{2009}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Count to show (None = still loading)
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Fired when the card is clicked
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "…".to_string(),
    };

    view! {
        <div
            class=if on_click.is_some() { "stat-card stat-card--clickable" } else { "stat-card" }
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

/// Horizontal bar, width relative to `max`
#[component]
pub fn BarRow(
    #[prop(into)] label: String,
    count: usize,
    max: usize,
) -> impl IntoView {
    let percent = if max == 0 { 0 } else { count * 100 / max };
    view! {
        <div class="bar-row">
            <span class="bar-row__label">{label}</span>
            <div class="bar-row__track">
                <div class="bar-row__fill" style=format!("width: {}%", percent)></div>
            </div>
            <span class="bar-row__value">{count.to_string()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(12345), "12\u{2009}345");
        assert_eq!(format_thousands(1234567), "1\u{2009}234\u{2009}567");
    }
}
