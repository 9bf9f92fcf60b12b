//! Core quiz logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the quiz that have nothing to do with drawing:
//!
//! - [`answer`]: lenient fuzzy matching of typed answers
//! - [`fit`]: wrapping and truncating question text into a theme's layout budget
//! - [`content`]: loading quiz content (embedded blob or plain JSON file)
//!
//! It has no terminal or rendering dependencies, so every function here can be
//! exercised directly from unit tests and benchmarks.
//!
//! # Example
//!
//! ```
//! use tui_quiz_core::{check_answer, fit, load_embedded};
//! use tui_quiz_types::LayoutBudget;
//!
//! let config = load_embedded().unwrap();
//! let first = &config.questions[0];
//!
//! let fitted = fit(LayoutBudget::multi_line(30, 4), &first.text);
//! assert!(fitted.lines.len() <= 4);
//!
//! assert!(check_answer(&first.answer.to_uppercase(), &first.answer));
//! ```

pub mod answer;
pub mod content;
pub mod fit;

pub use tui_quiz_types as types;

pub use answer::{check_answer, edit_distance, normalize};
pub use content::{
    deobfuscate, load_embedded, load_from_path, obfuscate, parse_config, ContentError,
    OBFUSCATION_KEY,
};
pub use fit::{fit, FitResult};
