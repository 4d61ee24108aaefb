pub mod buffer;
pub mod builder;
pub mod category;
pub mod config;
pub mod element;
pub mod filter;
pub mod pattern;
pub mod pipeline;
pub mod truncate;


pub use buffer::*;
pub use builder::*;
pub use category::*;
pub use config::*;
pub use element::*;
pub use filter::*;
pub use pattern::*;
pub use pipeline::*;
pub use truncate::*;
