//! Service layer: business operations behind the HTTP handlers.

pub mod movie_info;
pub mod movies;
pub mod review;

pub use movie_info::MovieInfoService;
pub use movies::MoviesService;
pub use review::ReviewService;
