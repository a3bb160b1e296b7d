//! Mock account surface.
//!
//! Profile, orders, coupons and favorites for the logged-in user. Same deal
//! as the catalog: fixed delay, placeholder data.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::auth::{AdminType, Claims};

/// Profile of the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub admin_type: AdminType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_cinema_id: Option<u64>,
    pub level: String,
    pub points: u32,
    pub avatar_url: String,
}

/// Status of a past order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Completed,
    PendingPayment,
    Cancelled,
}

/// A placeholder ticket order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub movie_title: String,
    pub poster_url: String,
    pub cinema: String,
    pub show_time: String,
    pub seats: String,
    pub price: u32,
    pub status: OrderStatus,
    pub has_reviewed: bool,
}

/// A placeholder coupon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: u64,
    pub name: String,
    pub value: u32,
    pub min_amount: u32,
    pub expires_at: String,
}

/// A favorited film.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub movie_id: u64,
    pub title: String,
    pub poster_url: String,
    pub added_at: String,
}

/// Account reads with simulated backend latency.
#[derive(Debug, Clone)]
pub struct AccountService {
    latency: Duration,
}

impl AccountService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Profile for the validated claims, padded with placeholder membership.
    pub async fn profile(&self, claims: &Claims) -> UserProfile {
        self.round_trip().await;
        UserProfile {
            id: claims.sub.clone(),
            name: claims.display_name().to_string(),
            email: claims.email.clone().unwrap_or_default(),
            admin_type: claims.admin_type,
            managed_cinema_id: claims.managed_cinema_id,
            level: "Gold Member".to_string(),
            points: 1250,
            avatar_url: "/placeholder.svg?height=100&width=100&text=User".to_string(),
        }
    }

    /// Five placeholder orders, freshly sampled per call.
    pub async fn orders(&self) -> Vec<Order> {
        self.round_trip().await;
        let mut rng = rand::rng();
        let statuses = [
            OrderStatus::Completed,
            OrderStatus::PendingPayment,
            OrderStatus::Cancelled,
        ];

        (0..5)
            .map(|index| Order {
                id: format!("ORD{}", 100_000 + index),
                movie_title: format!("Ordered Movie {}", index + 1),
                poster_url: format!(
                    "/placeholder.svg?height=120&width=80&text=Order{}",
                    index + 1
                ),
                cinema: format!("Cinema {}", index + 1),
                show_time: format!(
                    "2023-{:02}-{:02} {:02}:{}0",
                    rng.random_range(1..=9),
                    rng.random_range(1..=28),
                    rng.random_range(10..22),
                    rng.random_range(0..6)
                ),
                seats: format!(
                    "Row {} Seat {}",
                    rng.random_range(1..=10),
                    rng.random_range(1..=10)
                ),
                price: rng.random_range(30..80),
                status: statuses[rng.random_range(0..statuses.len())],
                has_reviewed: rng.random_range(0.0..1.0) > 0.7,
            })
            .collect()
    }

    /// Placeholder coupons.
    pub async fn coupons(&self) -> Vec<Coupon> {
        self.round_trip().await;
        vec![
            Coupon {
                id: 1,
                name: "New Member Discount".to_string(),
                value: 10,
                min_amount: 40,
                expires_at: "2024-03-31".to_string(),
            },
            Coupon {
                id: 2,
                name: "Weekend Special".to_string(),
                value: 5,
                min_amount: 30,
                expires_at: "2024-01-31".to_string(),
            },
        ]
    }

    /// Placeholder favorites.
    pub async fn favorites(&self) -> Vec<Favorite> {
        self.round_trip().await;
        vec![
            Favorite {
                movie_id: 1,
                title: "Avengers: Endgame".to_string(),
                poster_url: "/placeholder.svg?height=300&width=200&text=Endgame".to_string(),
                added_at: "2023-12-02".to_string(),
            },
            Favorite {
                movie_id: 5,
                title: "Deep Sea".to_string(),
                poster_url: "/placeholder.svg?height=300&width=200&text=DeepSea".to_string(),
                added_at: "2023-12-10".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> Claims {
        Claims {
            sub: "moviefan".to_string(),
            name: Some("Movie Fan".to_string()),
            email: Some("fan@example.com".to_string()),
            admin_type: AdminType::None,
            managed_cinema_id: None,
            exp: 0,
            iat: None,
        }
    }

    #[tokio::test]
    async fn test_profile_reflects_claims() {
        let service = AccountService::new(Duration::ZERO);
        let profile = service.profile(&claims()).await;
        assert_eq!(profile.id, "moviefan");
        assert_eq!(profile.name, "Movie Fan");
        assert_eq!(profile.admin_type, AdminType::None);
    }

    #[tokio::test]
    async fn test_orders_are_placeholders() {
        let service = AccountService::new(Duration::ZERO);
        let orders = service.orders().await;
        assert_eq!(orders.len(), 5);
        assert!(orders.iter().all(|o| o.id.starts_with("ORD")));
    }
}
