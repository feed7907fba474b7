//! file: lib.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:02:11 Saturday
//! brief: memory match, a pair-flipping card game on gpui

pub mod app;
pub mod config;
pub mod game;
