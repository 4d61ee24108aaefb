//! ActiveText: Mention / Hashtag / URL element extraction
//!
//! A Rust/WASM implementation of the active-label detection stage. It finds
//! recognizable substrings in plain text and turns each one into an
//! [`ElementTuple`] (range, element, category) that a rich-text renderer can
//! style and make tappable.
//!
//! # Architecture
//!
//! ## Scanner Components
//! - `category.rs` - Category: mention, hashtag, url, custom(pattern) + pattern table
//! - `pattern.rs` - Pattern matcher: ordered matches inside a search range
//! - `element.rs` - Element factory and the ElementTuple output unit
//! - `filter.rs` - Optional caller-supplied filter predicate
//! - `truncate.rs` - Grapheme-aware ellipsis truncation for long URLs
//! - `buffer.rs` - TextBuffer: index-tracked mutable text
//! - `builder.rs` - Dispatcher + generic / sigil-stripping / URL extractors
//! - `pipeline.rs` - ElementScanner: URL pass first, then everything else
//! - `config.rs` - ScannerConfig (serde, JSON)
//!
//! # Usage (Rust)
//! ```
//! use activetext::{extract, Category, FilterPredicate};
//!
//! let text = "Hello @world, check #swift";
//! let found = extract(&Category::Mention, text, 0..text.len(), &FilterPredicate::AcceptAll);
//! assert_eq!(found[0].element.text(), "world");
//! assert_eq!(&text[found[0].range.clone()], "@world");
//! ```
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { ElementScanner } from 'activetext';
//!
//! await init();
//!
//! const scanner = ElementScanner.withConfig({ url_max_length: 20 });
//! scanner.setMentionFilter(name => name !== 'bot');
//!
//! const result = scanner.scan("Ping @alice about https://example.com/a/very/long/path");
//! console.log(result.text);      // text with the URL shortened
//! console.log(result.elements);  // [{ range, element, category }, ...]
//! ```

pub mod error;
pub mod scanner;

// Public exports
pub use error::ScanError;
pub use scanner::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("activetext v{}", env!("CARGO_PKG_VERSION"))
}
