// Library for tests to access modules

pub mod collector;
pub mod config;
pub mod models;
pub mod normalize;
pub mod player_repo;
pub mod report;
pub mod routes;
pub mod worker;
