//! Theme and transition selection.
//!
//! Themes are scored by how much of the question they can show:
//!
//! ```text
//! score = visible_chars + MULTILINE_BONUS (if multi-line) + UNTRUNCATED_BONUS (if not truncated)
//! ```
//!
//! The untruncated bonus dwarfs any realistic character count, so a theme that shows
//! the whole question always beats one that has to cut it. Candidates are shuffled
//! and then stable-sorted by score, so equal scores resolve to a uniformly random
//! winner that is still reproducible from a seed.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::core::{fit, FitResult};
use crate::registry::Registry;
use crate::theme::Theme;
use crate::transition::Transition;
use crate::types::{Capabilities, Viewport, MULTILINE_BONUS, UNTRUNCATED_BONUS};

/// Selection score of a fit result.
pub fn score(result: &FitResult) -> usize {
    let mut score = result.visible_chars;
    if result.layout.multiline {
        score += MULTILINE_BONUS;
    }
    if !result.truncated {
        score += UNTRUNCATED_BONUS;
    }
    score
}

/// A freshly constructed theme with its score for one question.
pub struct RankedTheme {
    pub theme: Box<dyn Theme>,
    pub score: usize,
}

impl std::fmt::Debug for RankedTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankedTheme")
            .field("theme", &self.theme.name())
            .field("score", &self.score)
            .finish()
    }
}

/// All compatible themes, best first.
pub fn rank_themes<R: Rng + ?Sized>(
    registry: &Registry,
    caps: &Capabilities,
    viewport: Viewport,
    text: &str,
    rng: &mut R,
) -> Vec<RankedTheme> {
    let mut ranked: Vec<RankedTheme> = registry
        .list_themes()
        .iter()
        .map(|ctor| ctor())
        .filter(|theme| theme.is_compatible(caps))
        .map(|theme| {
            let score = score(&fit(theme.layout_budget(viewport), text));
            RankedTheme { theme, score }
        })
        .collect();

    ranked.shuffle(rng);
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// The best compatible theme for `text` in `viewport`, or `None` when nothing is
/// registered or nothing is compatible.
pub fn select_best_theme<R: Rng + ?Sized>(
    registry: &Registry,
    caps: &Capabilities,
    viewport: Viewport,
    text: &str,
    rng: &mut R,
) -> Option<Box<dyn Theme>> {
    let best = rank_themes(registry, caps, viewport, text, rng)
        .into_iter()
        .next()?;
    debug!(theme = best.theme.name(), score = best.score, "theme selected");
    Some(best.theme)
}

/// Any compatible theme, uniformly at random.
pub fn random_compatible_theme<R: Rng + ?Sized>(
    registry: &Registry,
    caps: &Capabilities,
    rng: &mut R,
) -> Option<Box<dyn Theme>> {
    let mut themes: Vec<Box<dyn Theme>> = registry
        .list_themes()
        .iter()
        .map(|ctor| ctor())
        .filter(|theme| theme.is_compatible(caps))
        .collect();
    if themes.is_empty() {
        return None;
    }
    let pick = rng.gen_range(0..themes.len());
    let theme = themes.swap_remove(pick);
    debug!(theme = theme.name(), "random theme selected");
    Some(theme)
}

/// A compatible transition, uniformly at random.
pub fn select_random_transition<R: Rng + ?Sized>(
    registry: &Registry,
    caps: &Capabilities,
    rng: &mut R,
) -> Option<Box<dyn Transition>> {
    let mut transitions: Vec<Box<dyn Transition>> = registry
        .list_transitions()
        .iter()
        .map(|ctor| ctor())
        .filter(|t| t.is_compatible(caps))
        .collect();
    if transitions.is_empty() {
        debug!("no compatible transition");
        return None;
    }
    let pick = rng.gen_range(0..transitions.len());
    let transition = transitions.swap_remove(pick);
    debug!(transition = transition.name(), "transition selected");
    Some(transition)
}
