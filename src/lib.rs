//! Redis Playground: an interactive tour of Redis commands.
//!
//! The binary connects once, shows a numbered menu, and runs one scripted
//! demonstration per choice: strings, lists, sets, sorted sets, hashes,
//! pub/sub, expiration and caching.
//!
//! # Quick start
//!
//! ```no_run
//! use redis_playground::config::load_config;
//! use redis_playground::demos::strings;
//! use redis_playground::store::Store;
//! use redis_playground::ui::render::Renderer;
//!
//! # async fn example() {
//! let config = load_config();
//! let store = Store::connect(&config.connection).await.unwrap();
//! strings::run(&store, &Renderer::new(false)).await.unwrap();
//! # }
//! ```

pub mod config;
pub mod demos;
pub mod error;
pub mod logging;
pub mod menu;
pub mod repl;
pub mod store;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
