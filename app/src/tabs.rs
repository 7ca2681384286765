use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Overview,
    Day(u8),
}

impl TabId {
    /// Only `Overview` and days `1..=day_count` name a panel.
    pub fn is_valid(&self, day_count: u8) -> bool {
        match self {
            TabId::Overview => true,
            TabId::Day(n) => (1..=day_count).contains(n),
        }
    }

    /// Overview first, then one tab per day.
    pub fn all(day_count: u8) -> Vec<TabId> {
        std::iter::once(TabId::Overview)
            .chain((1..=day_count).map(TabId::Day))
            .collect()
    }

    pub fn initial(day_count: u8) -> Self {
        if day_count >= 1 {
            TabId::Day(1)
        } else {
            TabId::Overview
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabId::Overview => f.write_str("overview"),
            TabId::Day(n) => write!(f, "day{n}"),
        }
    }
}
