// Build-time settings. Trunk serves the release build under /HK_trip/ (see Trunk.toml),
// so every asset reference in the itinerary is resolved against that prefix.

const RELEASE_BASE_PATH: &str = "/HK_trip";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_path: String,
}

impl AppConfig {
    /// `TRIP_BASE_PATH` at compile time wins; otherwise debug builds serve from
    /// the root and release builds from the project path.
    pub fn from_build_env() -> Self {
        let base_path = match option_env!("TRIP_BASE_PATH") {
            Some(p) => p.to_string(),
            None if cfg!(debug_assertions) => String::new(),
            None => RELEASE_BASE_PATH.to_string(),
        };
        Self::with_base_path(base_path)
    }

    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        let raw: String = base_path.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let base_path = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        Self { base_path }
    }

    pub fn asset_url(&self, src: &str) -> String {
        let src = src.trim();
        if is_absolute_url(src) {
            return src.to_string();
        }
        format!("{}/{}", self.base_path, src.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn is_absolute_url(src: &str) -> bool {
    ["http://", "https://", "//", "data:"]
        .iter()
        .any(|prefix| src.starts_with(prefix))
}

pub fn maps_search_url(query: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(query)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_assets_get_exactly_one_separator() {
        let cfg = AppConfig::with_base_path("/HK_trip/");
        assert_eq!(cfg.asset_url("hotel01.jpg"), "/HK_trip/hotel01.jpg");
        assert_eq!(cfg.asset_url("/hotel01.jpg"), "/HK_trip/hotel01.jpg");
    }

    #[test]
    fn empty_base_serves_from_root() {
        let cfg = AppConfig::with_base_path("");
        assert_eq!(cfg.base_path, "");
        assert_eq!(cfg.asset_url("KH.jpg"), "/KH.jpg");
    }

    #[test]
    fn base_without_leading_slash_is_normalised() {
        let cfg = AppConfig::with_base_path("HK_trip");
        assert_eq!(cfg.base_path, "/HK_trip");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let cfg = AppConfig::with_base_path("/HK_trip");
        let remote = "https://images.unsplash.com/photo-1552599576-0f8d098e945c?q=80&w=1080";
        assert_eq!(cfg.asset_url(remote), remote);
        assert_eq!(cfg.asset_url("//cdn.example.com/a.png"), "//cdn.example.com/a.png");
        assert_eq!(cfg.asset_url("data:image/png;base64,AA=="), "data:image/png;base64,AA==");
    }

    #[test]
    fn maps_link_encodes_hotel_name() {
        assert_eq!(
            maps_search_url("Hotel A&B"),
            "https://www.google.com/maps/search/?api=1&query=Hotel%20A%26B"
        );
    }
}
