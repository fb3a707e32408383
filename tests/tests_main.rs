#[path = "helpers/mod.rs"]
mod helpers;

#[path = "engine/mod.rs"]
mod engine;
