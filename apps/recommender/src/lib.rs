//! Assessment recommender client.
//!
//! Form fields go through [`payload::build`], the request is sent by a
//! [`client::RecommendationService`], and [`display`] derives what the view
//! shows for each returned record. [`controller::RecommendationController`]
//! ties the three together and owns the view state.

pub mod client;
pub mod config;
pub mod controller;
pub mod display;
pub mod errors;
pub mod models;
pub mod payload;
pub mod view;

#[cfg(test)]
mod test_support;
