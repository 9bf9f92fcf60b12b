//! Pluggable presentation layer: themes, transitions, and how they are chosen.
//!
//! A [`Theme`] draws the active question, the answer being typed and an optional
//! hint into a [`Canvas`](term::Canvas). A [`Transition`] animates between two
//! captured canvases when the player advances. Both are built from zero-argument
//! constructors collected in a [`Registry`], and the [`select`] module picks which
//! instance is used for a given question, viewport and terminal.
//!
//! Renderers own their animation state and only mutate it from `update`. `view`
//! takes `&self` and must not have side effects.

pub mod fx;
pub mod registry;
pub mod select;
pub mod theme;
pub mod transition;

pub use tui_quiz_core as core;
pub use tui_quiz_term as term;
pub use tui_quiz_types as types;

pub use registry::{Registry, RegistryBuilder, ThemeCtor, TransitionCtor};
pub use select::{
    random_compatible_theme, rank_themes, score, select_best_theme, select_random_transition,
    RankedTheme,
};
pub use theme::Theme;
pub use transition::Transition;

/// What a renderer wants after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Next {
    /// Nothing scheduled.
    #[default]
    Idle,
    /// Deliver another tick after [`TICK_MS`](types::TICK_MS).
    Tick,
}

impl Next {
    pub fn wants_tick(self) -> bool {
        self == Next::Tick
    }
}
