//! Renderer registry.
//!
//! An explicit, immutable list of theme and transition constructors built once at
//! startup. Selection never depends on registration order: candidates are shuffled
//! before ranking.

use crate::theme::{self, Theme};
use crate::transition::{self, Transition};

/// Zero-argument theme constructor.
pub type ThemeCtor = fn() -> Box<dyn Theme>;

/// Zero-argument transition constructor.
pub type TransitionCtor = fn() -> Box<dyn Transition>;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    themes: Vec<ThemeCtor>,
    transitions: Vec<TransitionCtor>,
}

impl Registry {
    /// Every built-in theme and transition.
    pub fn builtin() -> Self {
        RegistryBuilder::new()
            .theme(|| Box::new(theme::RootShellTheme::new()))
            .theme(|| Box::new(theme::nes()))
            .theme(|| Box::new(theme::gameboy()))
            .theme(|| Box::new(theme::c64()))
            .theme(|| Box::new(theme::amiga()))
            .theme(|| Box::new(theme::atari()))
            .theme(|| Box::new(theme::targeting_computer()))
            .theme(|| Box::new(theme::DosTheme::new()))
            .theme(|| Box::new(theme::MatrixTheme::new()))
            .theme(|| Box::new(theme::WoprTheme::new()))
            .theme(|| Box::new(theme::PipBoyTheme::new()))
            .transition(|| Box::new(transition::LoadingBar::new()))
            .transition(|| Box::new(transition::MatrixWipe::new()))
            .transition(|| Box::new(transition::ScanLine::new()))
            .transition(|| Box::new(transition::Blinds::new()))
            .transition(|| Box::new(transition::PixelDissolve::new()))
            .transition(|| Box::new(transition::CrtPowerOff::new()))
            .transition(|| Box::new(transition::TicTacToe::new()))
            .build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn list_themes(&self) -> &[ThemeCtor] {
        &self.themes
    }

    pub fn list_transitions(&self) -> &[TransitionCtor] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty() && self.transitions.is_empty()
    }
}

/// Collects constructors; [`RegistryBuilder::build`] freezes them.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    themes: Vec<ThemeCtor>,
    transitions: Vec<TransitionCtor>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, ctor: ThemeCtor) -> Self {
        self.themes.push(ctor);
        self
    }

    pub fn transition(mut self, ctor: TransitionCtor) -> Self {
        self.transitions.push(ctor);
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            themes: self.themes,
            transitions: self.transitions,
        }
    }
}
