//! Hard-coded placeholder catalog data.
//!
//! Stands in for the programming backend until one is wired up.

use super::models::{Cinema, Movie, MovieStatus};

pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "Avengers: Endgame".to_string(),
            director: "Anthony Russo".to_string(),
            actors: vec![
                "Robert Downey Jr.".to_string(),
                "Chris Evans".to_string(),
                "Mark Ruffalo".to_string(),
                "Chris Hemsworth".to_string(),
            ],
            categories: vec!["Action".to_string(), "Sci-Fi".to_string(), "Adventure".to_string()],
            duration: 181,
            rating: 9.2,
            description: "The grand finale of the saga: the Avengers assemble one last time."
                .to_string(),
            poster_url: "/placeholder.svg?height=300&width=200&text=Endgame".to_string(),
            backdrop_url: "/placeholder.svg?height=600&width=1200&text=Endgame".to_string(),
            release_date: "2023-12-01".to_string(),
            status: MovieStatus::NowPlaying,
            want_to_watch: 234_567,
            box_office: Some(2_798_000_000),
        },
        Movie {
            id: 2,
            title: "Avatar: The Way of Water".to_string(),
            director: "James Cameron".to_string(),
            actors: vec![
                "Sam Worthington".to_string(),
                "Zoe Saldana".to_string(),
                "Sigourney Weaver".to_string(),
            ],
            categories: vec!["Sci-Fi".to_string(), "Adventure".to_string(), "Fantasy".to_string()],
            duration: 192,
            rating: 8.9,
            description: "Jake Sully returns to Pandora to defend his family and their home."
                .to_string(),
            poster_url: "/placeholder.svg?height=300&width=200&text=Avatar2".to_string(),
            backdrop_url: "/placeholder.svg?height=600&width=1200&text=Avatar2".to_string(),
            release_date: "2023-12-15".to_string(),
            status: MovieStatus::NowPlaying,
            want_to_watch: 187_654,
            box_office: Some(2_320_000_000),
        },
        Movie {
            id: 3,
            title: "The Wandering Earth II".to_string(),
            director: "Frant Gwo".to_string(),
            actors: vec!["Andy Lau".to_string(), "Wu Jing".to_string(), "Li Xuejian".to_string()],
            categories: vec!["Sci-Fi".to_string(), "Disaster".to_string(), "Drama".to_string()],
            duration: 173,
            rating: 8.7,
            description: "Humanity builds engines to push Earth out of the solar system."
                .to_string(),
            poster_url: "/placeholder.svg?height=300&width=200&text=WanderingEarth2".to_string(),
            backdrop_url: "/placeholder.svg?height=600&width=1200&text=WanderingEarth2".to_string(),
            release_date: "2024-01-22".to_string(),
            status: MovieStatus::ComingSoon,
            want_to_watch: 156_789,
            box_office: Some(4_029_000_000),
        },
        Movie {
            id: 4,
            title: "Full River Red".to_string(),
            director: "Zhang Yimou".to_string(),
            actors: vec!["Shen Teng".to_string(), "Jackson Yee".to_string(), "Zhang Yi".to_string()],
            categories: vec!["Comedy".to_string(), "Mystery".to_string(), "Period".to_string()],
            duration: 159,
            rating: 8.5,
            description: "A court intrigue unfolds four years after the death of General Yue Fei."
                .to_string(),
            poster_url: "/placeholder.svg?height=300&width=200&text=FullRiverRed".to_string(),
            backdrop_url: "/placeholder.svg?height=600&width=1200&text=FullRiverRed".to_string(),
            release_date: "2024-02-14".to_string(),
            status: MovieStatus::ComingSoon,
            want_to_watch: 198_765,
            box_office: Some(4_544_000_000),
        },
        Movie {
            id: 5,
            title: "Deep Sea".to_string(),
            director: "Tian Xiaopeng".to_string(),
            actors: vec!["Su Xin".to_string(), "Wang Tingwen".to_string()],
            categories: vec!["Animation".to_string(), "Fantasy".to_string(), "Adventure".to_string()],
            duration: 112,
            rating: 8.3,
            description: "A girl searches for herself in a mysterious deep-sea world.".to_string(),
            poster_url: "/placeholder.svg?height=300&width=200&text=DeepSea".to_string(),
            backdrop_url: "/placeholder.svg?height=600&width=1200&text=DeepSea".to_string(),
            release_date: "2023-12-08".to_string(),
            status: MovieStatus::NowPlaying,
            want_to_watch: 123_456,
            box_office: Some(920_000_000),
        },
        Movie {
            id: 6,
            title: "Boonie Bears: Guardian Code".to_string(),
            director: "Lin Huida".to_string(),
            actors: vec!["Zhang Wei".to_string(), "Zhang Bingjun".to_string()],
            categories: vec!["Animation".to_string(), "Comedy".to_string(), "Family".to_string()],
            duration: 103,
            rating: 8.1,
            description: "A new adventure where technology and nature meet.".to_string(),
            poster_url: "/placeholder.svg?height=300&width=200&text=BoonieBears".to_string(),
            backdrop_url: "/placeholder.svg?height=600&width=1200&text=BoonieBears".to_string(),
            release_date: "2024-01-22".to_string(),
            status: MovieStatus::ComingSoon,
            want_to_watch: 87_654,
            box_office: Some(1_477_000_000),
        },
        Movie {
            id: 7,
            title: "Ping-Pong: The Triumph".to_string(),
            director: "Deng Chao".to_string(),
            actors: vec!["Deng Chao".to_string(), "Sun Li".to_string(), "Xu Weizhou".to_string()],
            categories: vec!["Drama".to_string(), "Sport".to_string()],
            duration: 140,
            rating: 7.9,
            description: "The national table tennis team claws its way back to the top."
                .to_string(),
            poster_url: "/placeholder.svg?height=300&width=200&text=PingPong".to_string(),
            backdrop_url: "/placeholder.svg?height=600&width=1200&text=PingPong".to_string(),
            release_date: "2024-02-10".to_string(),
            status: MovieStatus::ComingSoon,
            want_to_watch: 76_543,
            box_office: Some(320_000_000),
        },
        Movie {
            id: 8,
            title: "Hidden Blade".to_string(),
            director: "Cheng Er".to_string(),
            actors: vec![
                "Tony Leung".to_string(),
                "Wang Yibo".to_string(),
                "Zhou Xun".to_string(),
            ],
            categories: vec!["Drama".to_string(), "Action".to_string(), "Espionage".to_string()],
            duration: 125,
            rating: 8.4,
            description: "Underground agents fight a secret war behind enemy lines.".to_string(),
            poster_url: "/placeholder.svg?height=300&width=200&text=HiddenBlade".to_string(),
            backdrop_url: "/placeholder.svg?height=600&width=1200&text=HiddenBlade".to_string(),
            release_date: "2023-12-22".to_string(),
            status: MovieStatus::NowPlaying,
            want_to_watch: 145_678,
            box_office: Some(930_000_000),
        },
    ]
}

pub fn sample_cinemas() -> Vec<Cinema> {
    vec![
        Cinema {
            id: 1,
            name: "Grand Palace Cinema (Joy City)".to_string(),
            address: "9F Joy City, 101 North Chaoyang Road".to_string(),
            phone: "010-85528888".to_string(),
            facilities: vec![
                "IMAX".to_string(),
                "Dolby Atmos".to_string(),
                "4DX".to_string(),
                "VIP Hall".to_string(),
            ],
            tags: vec!["Easy parking".to_string(), "Metro access".to_string()],
            min_price: 35,
            distance_km: 2.5,
        },
        Cinema {
            id: 2,
            name: "Starlight Cinema (Xidan)".to_string(),
            address: "8-9F, 131 North Xidan Street".to_string(),
            phone: "010-66186666".to_string(),
            facilities: vec!["4DX".to_string(), "ScreenX".to_string(), "VIP Hall".to_string()],
            tags: vec!["City center".to_string(), "Good transport".to_string()],
            min_price: 42,
            distance_km: 3.2,
        },
        Cinema {
            id: 3,
            name: "Meridian Cinema (Qianmen)".to_string(),
            address: "3F, 23 Qianmen Street".to_string(),
            phone: "010-67028888".to_string(),
            facilities: vec!["IMAX".to_string(), "Dolby Cinema".to_string(), "Laser Hall".to_string()],
            tags: vec!["Historic district".to_string(), "Modern equipment".to_string()],
            min_price: 38,
            distance_km: 4.1,
        },
        Cinema {
            id: 4,
            name: "Pavilion Cinema (Wukesong)".to_string(),
            address: "B1 Hi-Live Plaza, 69 Fuxing Road".to_string(),
            phone: "010-88871234".to_string(),
            facilities: vec![
                "IMAX".to_string(),
                "Dolby Atmos".to_string(),
                "VIP Hall".to_string(),
                "Kids Hall".to_string(),
            ],
            tags: vec!["Arena district".to_string(), "Easy parking".to_string()],
            min_price: 40,
            distance_km: 8.7,
        },
        Cinema {
            id: 5,
            name: "Aurora Cinema (Huaxing)".to_string(),
            address: "3F Soubao Business Center, 16 West 3rd Ring Road".to_string(),
            phone: "010-67786666".to_string(),
            facilities: vec![
                "Dolby Atmos".to_string(),
                "VIP Hall".to_string(),
                "Couple Seats".to_string(),
            ],
            tags: vec!["Comfortable".to_string(), "Affordable".to_string()],
            min_price: 32,
            distance_km: 6.3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_shape() {
        let movies = sample_movies();
        assert_eq!(movies.len(), 8);
        assert!(movies.iter().any(|m| m.status == MovieStatus::NowPlaying));
        assert!(movies.iter().any(|m| m.status == MovieStatus::ComingSoon));

        let cinemas = sample_cinemas();
        assert_eq!(cinemas.len(), 5);
        assert!(cinemas.iter().all(|c| c.min_price > 0));
    }
}
