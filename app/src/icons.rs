use crate::model::{TimelineEntry, TransportMode, WeatherCondition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Plane,
    Car,
    Train,
    Bus,
    Hotel,
    Ticket,
    Utensils,
    Coffee,
    Home,
    MapPin,
    Clock,
    Calendar,
    Sun,
    Cloud,
    CloudRain,
    Wind,
    Droplet,
    Moon,
    Bed,
    ExternalLink,
    Info,
    Edit,
    Check,
    Plus,
    Trash,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Plane => "✈️",
            Icon::Car => "🚕",
            Icon::Train => "🚆",
            Icon::Bus => "🚌",
            Icon::Hotel => "🏨",
            Icon::Ticket => "🎟️",
            Icon::Utensils => "🍴",
            Icon::Coffee => "☕",
            Icon::Home => "🏠",
            Icon::MapPin => "📍",
            Icon::Clock => "🕒",
            Icon::Calendar => "📅",
            Icon::Sun => "☀️",
            Icon::Cloud => "☁️",
            Icon::CloudRain => "🌧️",
            Icon::Wind => "💨",
            Icon::Droplet => "💧",
            Icon::Moon => "🌙",
            Icon::Bed => "🛏️",
            Icon::ExternalLink => "↗",
            Icon::Info => "ℹ️",
            Icon::Edit => "✏️",
            Icon::Check => "✓",
            Icon::Plus => "＋",
            Icon::Trash => "🗑️",
        }
    }

    /// CSS modifier, e.g. `icon-plane`.
    pub fn class(&self) -> String {
        format!("icon-{}", format!("{self:?}").to_lowercase())
    }
}

/// Activity titles containing any keyword get `icon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRule {
    pub keywords: &'static [&'static str],
    pub icon: Icon,
}

impl IconRule {
    pub fn matches(&self, title: &str) -> bool {
        self.keywords.iter().any(|kw| title.contains(kw))
    }
}

// First match wins: "入住迪士尼度假區" is a hotel, not a ticket.
pub const ACTIVITY_ICON_RULES: &[IconRule] = &[
    IconRule { keywords: &["酒店", "入住"], icon: Icon::Hotel },
    IconRule { keywords: &["迪士尼"], icon: Icon::Ticket },
    IconRule { keywords: &["食", "餐"], icon: Icon::Utensils },
    IconRule { keywords: &["家", "高雄"], icon: Icon::Home },
];

pub const DEFAULT_ACTIVITY_ICON: Icon = Icon::MapPin;

pub fn select_icon(rules: &[IconRule], title: &str, fallback: Icon) -> Icon {
    rules
        .iter()
        .find(|rule| rule.matches(title))
        .map(|rule| rule.icon)
        .unwrap_or(fallback)
}

pub fn activity_icon(title: &str) -> Icon {
    select_icon(ACTIVITY_ICON_RULES, title, DEFAULT_ACTIVITY_ICON)
}

pub fn transport_icon(mode: TransportMode) -> Icon {
    match mode {
        TransportMode::Car => Icon::Car,
        TransportMode::Train => Icon::Train,
        TransportMode::Bus => Icon::Bus,
    }
}

/// Icon on the timeline rail.
pub fn entry_icon(entry: &TimelineEntry) -> Icon {
    match entry {
        TimelineEntry::Flight(_) => Icon::Plane,
        TimelineEntry::Transport(t) => transport_icon(t.mode),
        TimelineEntry::Activity(a) => activity_icon(&a.title),
    }
}

/// Icon in front of the duration line at the bottom of a card.
pub fn duration_icon(entry: &TimelineEntry) -> Icon {
    match entry {
        TimelineEntry::Transport(t) if t.mode != TransportMode::Bus => transport_icon(t.mode),
        TimelineEntry::Activity(a) if a.title.contains('家') => Icon::Home,
        _ => Icon::Clock,
    }
}

pub fn weather_icon(condition: WeatherCondition) -> Icon {
    match condition {
        WeatherCondition::Sunny => Icon::Sun,
        WeatherCondition::Cloudy => Icon::Cloud,
        WeatherCondition::Rainy => Icon::CloudRain,
    }
}
