use crate::models::SpaceColor;

#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// `999`, `1.2K`, `3.4M`, `1B`.
pub(crate) fn compact_count(n: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for (size, suffix) in UNITS {
        if n >= size {
            let tenths = n / (size / 10);
            return if tenths % 10 == 0 || tenths >= 100 {
                format!("{}{suffix}", tenths / 10)
            } else {
                format!("{}.{}{suffix}", tenths / 10, tenths % 10)
            };
        }
    }
    n.to_string()
}

pub(crate) fn format_views(n: u64) -> String {
    match n {
        1 => "1 view".to_string(),
        _ => format!("{} views", compact_count(n)),
    }
}

pub(crate) fn format_subscribers(n: u64) -> String {
    match n {
        1 => "1 subscriber".to_string(),
        _ => format!("{} subscribers", compact_count(n)),
    }
}

/// Tailwind gradient for a space tile. Pure function of the color tag.
pub(crate) fn space_gradient(color: SpaceColor) -> &'static str {
    match color {
        SpaceColor::Blue => "from-sky-500 to-indigo-600",
        SpaceColor::Purple => "from-violet-500 to-fuchsia-600",
        SpaceColor::Green => "from-emerald-500 to-lime-600",
        SpaceColor::Orange => "from-amber-500 to-orange-600",
        SpaceColor::Pink => "from-pink-500 to-rose-600",
        SpaceColor::Teal => "from-teal-500 to-cyan-600",
    }
}

/// Tile glyph for a space: a keyword emoji when the name suggests one, else its initial.
pub(crate) fn space_icon(name: &str) -> String {
    const KEYWORDS: [(&str, &str); 8] = [
        ("music", "🎵"),
        ("game", "🎮"),
        ("gaming", "🎮"),
        ("news", "📰"),
        ("tech", "💻"),
        ("cook", "🍳"),
        ("sport", "🏅"),
        ("learn", "📚"),
    ];

    let lower = name.to_lowercase();
    if let Some((_, emoji)) = KEYWORDS.iter().find(|(k, _)| lower.contains(k)) {
        return emoji.to_string();
    }

    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "#".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_count() {
        assert_eq!(compact_count(0), "0");
        assert_eq!(compact_count(999), "999");
        assert_eq!(compact_count(1_000), "1K");
        assert_eq!(compact_count(1_250), "1.2K");
        assert_eq!(compact_count(15_300), "15K");
        assert_eq!(compact_count(3_400_000), "3.4M");
        assert_eq!(compact_count(2_000_000_000), "2B");
    }

    #[test]
    fn test_format_views_and_subscribers() {
        assert_eq!(format_views(0), "0 views");
        assert_eq!(format_views(1), "1 view");
        assert_eq!(format_views(1_500_000), "1.5M views");
        assert_eq!(format_subscribers(1), "1 subscriber");
        assert_eq!(format_subscribers(42_000), "42K subscribers");
    }

    #[test]
    fn test_space_visuals_are_deterministic() {
        assert_eq!(space_gradient(SpaceColor::Pink), space_gradient(SpaceColor::Pink));
        assert_ne!(space_gradient(SpaceColor::Pink), space_gradient(SpaceColor::Green));
        assert_eq!(space_icon("Late night Music"), "🎵");
        assert_eq!(space_icon("woodworking"), "W");
        assert_eq!(space_icon("   "), "#");
    }

    #[test]
    fn test_now_ms_is_positive() {
        assert!(now_ms() > 0);
    }
}
