//! Mock film and cinema catalog.
//!
//! Every read simulates a backend round trip: a fixed delay, then hard-coded
//! placeholder data. Showtime slots and seat occupancy are sampled the way
//! the site template sampled them, so pages look alive without a backend.

mod data;
mod models;

pub use models::{
    Cinema, HotRanking, Movie, MovieStatus, SeatAvailability, SeatMap, SeatStatus, SeatType,
    Showtime, ShowtimeLanguage, ShowtimeVersion,
};

use std::time::Duration;

use rand::Rng;

/// Seat map dimensions used for every hall.
const SEAT_ROWS: u32 = 12;
const SEAT_COLS: u32 = 16;

/// Catalog reads with simulated backend latency.
#[derive(Debug, Clone)]
pub struct CatalogService {
    latency: Duration,
}

impl CatalogService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Simulated network round trip.
    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// All films, optionally filtered by release status.
    pub async fn list_movies(&self, status: Option<MovieStatus>) -> Vec<Movie> {
        self.round_trip().await;
        let movies = data::sample_movies();
        match status {
            Some(status) => movies.into_iter().filter(|m| m.status == status).collect(),
            None => movies,
        }
    }

    /// A single film by ID.
    pub async fn movie(&self, id: u64) -> Option<Movie> {
        self.round_trip().await;
        data::sample_movies().into_iter().find(|m| m.id == id)
    }

    /// Box-office rankings, hottest first.
    pub async fn hot_rankings(&self) -> Vec<HotRanking> {
        self.round_trip().await;
        let mut rng = rand::rng();
        let mut movies = data::sample_movies();
        movies.sort_by(|a, b| b.want_to_watch.cmp(&a.want_to_watch));
        movies
            .into_iter()
            .enumerate()
            .map(|(i, movie)| HotRanking {
                rank: i as u32 + 1,
                box_office: movie.box_office,
                rating: movie.rating,
                want_to_watch: movie.want_to_watch,
                change_from_last_week: rng.random_range(-3..=3),
                movie,
            })
            .collect()
    }

    /// All cinemas.
    pub async fn list_cinemas(&self) -> Vec<Cinema> {
        self.round_trip().await;
        data::sample_cinemas()
    }

    /// A single cinema by ID.
    pub async fn cinema(&self, id: u64) -> Option<Cinema> {
        self.round_trip().await;
        data::sample_cinemas().into_iter().find(|c| c.id == id)
    }

    /// Screenings at a cinema, optionally restricted to one film.
    ///
    /// Only films currently playing get screenings. Slots are sampled fresh
    /// per call; IDs stay stable so a slot can be navigated to.
    pub async fn showtimes(&self, cinema_id: u64, movie_id: Option<u64>) -> Vec<Showtime> {
        self.round_trip().await;

        let mut rng = rand::rng();
        let mut showtimes = Vec::new();

        for movie in data::sample_movies() {
            if movie.status != MovieStatus::NowPlaying {
                continue;
            }
            if movie_id.is_some_and(|id| id != movie.id) {
                continue;
            }

            let session_count: u32 = rng.random_range(3..=5);
            for slot in 0..session_count {
                let start_hour = 10 + slot * 3 + rng.random_range(0..2);
                let start_minute = rng.random_range(0..4) * 15;
                let total_minutes =
                    start_hour * 60 + start_minute + movie.duration;

                let versions = [
                    ShowtimeVersion::TwoD,
                    ShowtimeVersion::ThreeD,
                    ShowtimeVersion::Imax,
                ];

                showtimes.push(Showtime {
                    id: movie.id * 10_000 + cinema_id * 100 + u64::from(slot),
                    movie_id: movie.id,
                    cinema_id,
                    hall_id: u64::from(slot) + 1,
                    show_date: "2023-12-20".to_string(),
                    start_time: format!("{:02}:{:02}", start_hour, start_minute),
                    end_time: format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60),
                    price: rng.random_range(35..65),
                    language: if rng.random_range(0..2) == 0 {
                        ShowtimeLanguage::English
                    } else {
                        ShowtimeLanguage::Original
                    },
                    version: versions[rng.random_range(0..versions.len())],
                    available_seats: rng.random_range(100..150),
                    total_seats: SEAT_ROWS * SEAT_COLS,
                });
            }
        }

        showtimes
    }

    /// Seat map for a screening: a 12x16 grid with a VIP block front-center
    /// and a scatter of taken and out-of-service seats.
    pub async fn seat_map(&self, showtime_id: u64) -> SeatMap {
        self.round_trip().await;

        let mut rng = rand::rng();
        let mut seats = Vec::with_capacity((SEAT_ROWS * SEAT_COLS) as usize);

        for row in 1..=SEAT_ROWS {
            for col in 1..=SEAT_COLS {
                let roll: f64 = rng.random_range(0.0..1.0);
                let status = if roll < 0.15 {
                    SeatAvailability::Occupied
                } else if roll < 0.18 {
                    SeatAvailability::Maintenance
                } else {
                    SeatAvailability::Available
                };

                let is_vip = row <= 3 && (6..=11).contains(&col);

                seats.push(SeatStatus {
                    row,
                    col,
                    seat_type: if is_vip { SeatType::Vip } else { SeatType::Standard },
                    status,
                    price: if is_vip { 65 } else { 45 },
                });
            }
        }

        SeatMap {
            showtime_id,
            rows: SEAT_ROWS,
            cols: SEAT_COLS,
            seats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CatalogService {
        CatalogService::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_list_movies_filters_by_status() {
        let all = service().list_movies(None).await;
        let playing = service().list_movies(Some(MovieStatus::NowPlaying)).await;

        assert!(playing.len() < all.len());
        assert!(playing.iter().all(|m| m.status == MovieStatus::NowPlaying));
    }

    #[tokio::test]
    async fn test_movie_lookup() {
        assert_eq!(service().movie(1).await.unwrap().id, 1);
        assert!(service().movie(999).await.is_none());
    }

    #[tokio::test]
    async fn test_hot_rankings_ordered() {
        let rankings = service().hot_rankings().await;
        assert_eq!(rankings.len(), 8);
        assert_eq!(rankings[0].rank, 1);
        for pair in rankings.windows(2) {
            assert!(pair[0].want_to_watch >= pair[1].want_to_watch);
        }
    }

    #[tokio::test]
    async fn test_showtimes_only_for_now_playing() {
        let showtimes = service().showtimes(1, None).await;
        assert!(!showtimes.is_empty());
        assert!(showtimes.iter().all(|s| s.cinema_id == 1));

        // Movie 3 is coming soon and must not have screenings.
        let none = service().showtimes(1, Some(3)).await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_seat_map_shape() {
        let map = service().seat_map(42).await;
        assert_eq!(map.showtime_id, 42);
        assert_eq!(map.seats.len(), (map.rows * map.cols) as usize);

        // VIP block sits front-center and costs more.
        let vip = map
            .seats
            .iter()
            .find(|s| s.row == 1 && s.col == 8)
            .unwrap();
        assert_eq!(vip.seat_type, SeatType::Vip);
        assert_eq!(vip.price, 65);

        let standard = map
            .seats
            .iter()
            .find(|s| s.row == 12 && s.col == 1)
            .unwrap();
        assert_eq!(standard.seat_type, SeatType::Standard);
        assert_eq!(standard.price, 45);
    }
}
