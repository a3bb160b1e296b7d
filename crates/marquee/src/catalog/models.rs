//! Catalog data model.
//!
//! Wire names are camelCase to match the site frontend.

use serde::{Deserialize, Serialize};

/// Release status of a film.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovieStatus {
    ComingSoon,
    NowPlaying,
    Ended,
}

impl std::str::FromStr for MovieStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "COMING_SOON" => Ok(MovieStatus::ComingSoon),
            "NOW_PLAYING" => Ok(MovieStatus::NowPlaying),
            "ENDED" => Ok(MovieStatus::Ended),
            _ => Err(format!("unknown movie status: {}", s)),
        }
    }
}

/// A film on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub director: String,
    pub actors: Vec<String>,
    pub categories: Vec<String>,
    /// Runtime in minutes.
    pub duration: u32,
    pub rating: f64,
    pub description: String,
    pub poster_url: String,
    pub backdrop_url: String,
    pub release_date: String,
    pub status: MovieStatus,
    pub want_to_watch: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_office: Option<u64>,
}

/// A cinema location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cinema {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub facilities: Vec<String>,
    pub tags: Vec<String>,
    /// Cheapest ticket in whole currency units.
    pub min_price: u32,
    /// Distance from the visitor, kilometers. Placeholder value.
    pub distance_km: f64,
}

/// Screening language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShowtimeLanguage {
    English,
    Original,
}

/// Projection version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowtimeVersion {
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
    #[serde(rename = "IMAX")]
    Imax,
}

/// A scheduled screening.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showtime {
    pub id: u64,
    pub movie_id: u64,
    pub cinema_id: u64,
    pub hall_id: u64,
    pub show_date: String,
    pub start_time: String,
    pub end_time: String,
    pub price: u32,
    pub language: ShowtimeLanguage,
    pub version: ShowtimeVersion,
    pub available_seats: u32,
    pub total_seats: u32,
}

/// Seat tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatType {
    Standard,
    Vip,
}

/// Seat availability in a seat map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatAvailability {
    Available,
    Occupied,
    Maintenance,
}

/// One seat in a screening's seat map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatStatus {
    pub row: u32,
    pub col: u32,
    #[serde(rename = "type")]
    pub seat_type: SeatType,
    pub status: SeatAvailability,
    pub price: u32,
}

/// The full seat map for a screening.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMap {
    pub showtime_id: u64,
    pub rows: u32,
    pub cols: u32,
    pub seats: Vec<SeatStatus>,
}

/// One entry in the hot rankings list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotRanking {
    pub rank: u32,
    pub movie: Movie,
    pub box_office: Option<u64>,
    pub rating: f64,
    pub want_to_watch: u64,
    /// Position change against last week, negative means dropped.
    pub change_from_last_week: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_status_parse() {
        assert_eq!(
            "now_playing".parse::<MovieStatus>().unwrap(),
            MovieStatus::NowPlaying
        );
        assert_eq!(
            "COMING_SOON".parse::<MovieStatus>().unwrap(),
            MovieStatus::ComingSoon
        );
        assert!("RERUN".parse::<MovieStatus>().is_err());
    }

    #[test]
    fn test_showtime_version_wire_names() {
        assert_eq!(
            serde_json::to_string(&ShowtimeVersion::Imax).unwrap(),
            "\"IMAX\""
        );
        assert_eq!(
            serde_json::to_string(&ShowtimeVersion::TwoD).unwrap(),
            "\"2D\""
        );
    }
}
