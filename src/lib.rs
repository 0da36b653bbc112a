//! Exploratory analysis of the Iris dataset: load, clean, summarise, chart.

pub mod app;
pub mod charts;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod ui;
