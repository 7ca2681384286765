use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ItineraryError;

const BUNDLED_ITINERARY: &str = include_str!("../assets/itinerary.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Itinerary {
    pub trip: TripData,
    #[serde(default)]
    pub flights: Vec<FlightSummary>,
    pub days: Vec<DayPlan>,
    #[serde(default)]
    pub tips: Vec<TipSection>,
}

impl Itinerary {
    /// The trip compiled into the binary.
    pub fn bundled() -> Result<Self, ItineraryError> {
        Self::from_json(BUNDLED_ITINERARY)
    }

    pub fn from_json(raw: &str) -> Result<Self, ItineraryError> {
        let itinerary: Itinerary = serde_json::from_str(raw)?;
        itinerary.validate()?;
        Ok(itinerary)
    }

    pub fn validate(&self) -> Result<(), ItineraryError> {
        if self.days.is_empty() {
            return Err(ItineraryError::Empty);
        }

        if self.days.len() > usize::from(u8::MAX) {
            return Err(ItineraryError::TooManyDays(self.days.len()));
        }

        for (day, expected) in self.days.iter().zip(1..=u8::MAX) {
            if day.day != expected {
                return Err(ItineraryError::DayOutOfOrder {
                    expected,
                    found: day.day,
                });
            }
        }

        let mut seen = HashSet::new();
        for id in self
            .days
            .iter()
            .flat_map(|d| d.timeline.iter())
            .filter_map(TimelineEntry::note_id)
        {
            if !seen.insert(id) {
                return Err(ItineraryError::DuplicateNoteId(id.to_string()));
            }
        }

        Ok(())
    }

    /// Number of days; `validate` caps it at `u8::MAX`, so the cast is exact.
    pub fn day_count(&self) -> u8 {
        self.days.len() as u8
    }

    pub fn day(&self, day: u8) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn flight(&self, direction: FlightDirection) -> Option<&FlightSummary> {
        self.flights.iter().find(|f| f.direction == direction)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripData {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightDirection {
    Departure,
    Return,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightSummary {
    pub airline: String,
    pub flight_number: String,
    pub from: String,
    pub to: String,
    pub depart_time: String,
    pub arrive_time: String,
    pub duration: String,
    pub price: u32,
    pub direction: FlightDirection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayPlan {
    pub day: u8,
    /// "2026/01/27 星期二": headline and weekday separated by the first space.
    pub date: String,
    pub weather: Weather,
    #[serde(default)]
    pub accommodation: Option<Accommodation>,
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub meals: Meals,
}

impl DayPlan {
    pub fn date_parts(&self) -> (&str, &str) {
        let date = self.date.trim();
        date.split_once(' ')
            .map(|(head, rest)| (head, rest.trim()))
            .unwrap_or((date, ""))
    }

    /// Titles shown on the overview card: activities among the first two entries.
    pub fn summary_titles(&self) -> Vec<&str> {
        self.timeline
            .iter()
            .take(2)
            .filter_map(|entry| match entry {
                TimelineEntry::Activity(a) => Some(a.title.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn tab_value(&self) -> String {
        format!("day{}", self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Weather {
    pub day: String,
    pub date: String,
    pub temp: i32,
    pub condition: WeatherCondition,
    pub humidity: u8,
    pub wind: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Accommodation {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Meals {
    #[serde(default)]
    pub breakfast: Option<String>,
    #[serde(default)]
    pub lunch: Option<String>,
    #[serde(default)]
    pub dinner: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealKind {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealKind {
    pub fn label(&self) -> &'static str {
        match self {
            MealKind::Breakfast => "早餐",
            MealKind::Lunch => "午餐",
            MealKind::Dinner => "晚餐",
        }
    }
}

impl Meals {
    /// Present meals in breakfast/lunch/dinner order; blank strings count as absent.
    pub fn entries(&self) -> Vec<(MealKind, &str)> {
        [
            (MealKind::Breakfast, &self.breakfast),
            (MealKind::Lunch, &self.lunch),
            (MealKind::Dinner, &self.dinner),
        ]
        .into_iter()
        .filter_map(|(kind, text)| {
            text.as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(|t| (kind, t))
        })
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimelineEntry {
    Flight(FlightLeg),
    Transport(GroundTransport),
    Activity(Activity),
}

impl TimelineEntry {
    pub fn note_id(&self) -> Option<&str> {
        let id = match self {
            TimelineEntry::Flight(f) => f.note_id.as_deref(),
            TimelineEntry::Transport(t) => t.note_id.as_deref(),
            TimelineEntry::Activity(a) => a.note_id.as_deref(),
        };
        id.map(str::trim).filter(|id| !id.is_empty())
    }

    pub fn is_flight(&self) -> bool {
        matches!(self, TimelineEntry::Flight(_))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightLeg {
    pub airline: String,
    pub flight_number: String,
    pub from: String,
    pub to: String,
    pub depart_time: String,
    pub arrive_time: String,
    pub duration: String,
    #[serde(default)]
    pub note_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Train,
    Bus,
}

impl TransportMode {
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Car => "租車",
            TransportMode::Train => "火車",
            TransportMode::Bus => "巴士",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroundTransport {
    pub mode: TransportMode,
    pub from: String,
    pub to: String,
    pub time: String,
    pub duration: String,
    #[serde(default)]
    pub price: Option<u32>,
    #[serde(default)]
    pub note_id: Option<String>,
}

impl GroundTransport {
    pub fn title(&self) -> String {
        format!("{} ➝ {}", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub note_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TipSection {
    pub title: String,
    pub items: Vec<Tip>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tip {
    pub text: String,
    /// Dot colour, one of the palette names in styles.css.
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_accent() -> String {
    "gray".into()
}
