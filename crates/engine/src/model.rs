//! Session state machine.
//!
//! `Intro -> Question -> Transition -> Question -> ... -> Success`
//!
//! [`Model::update`] is the only place session state changes. It never blocks: all
//! animation is per-tick counter mutation, and a quit request is answered before
//! anything else is looked at. [`Model::view`] is a pure read of the current state.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::core::{check_answer, fit};
use crate::guard::{render_guarded, FALLBACK_STYLE};
use crate::input::AnswerInput;
use crate::scenes::{
    random_compatible_theme, select_best_theme, select_random_transition, Next, Registry, Theme,
    Transition,
};
use crate::screens;
use crate::term::Canvas;
use crate::types::{
    Capabilities, Config, Event, Input, Question, Viewport, DEMO_TICK_BUDGET, LOADING_FALLBACK,
    NO_THEME_FALLBACK, REVEAL_CURSOR, TRANSITION_FALLBACK,
};

/// Wrong submissions before the hint is shown.
const HINT_AFTER_MISSES: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Question,
    Transition,
    Success,
}

/// What happens after the last question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completion {
    /// Show the success screen.
    #[default]
    Finish,
    /// Wrap around to the first question.
    Endless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelOptions {
    /// Seed for theme/transition selection. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub completion: Completion,
    /// Start with demo auto-advance enabled.
    pub demo: bool,
}

/// Side effects requested by [`Model::update`], carried out by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Deliver a [`Event::Tick`] after one tick period, unless one is already pending.
    ScheduleTick,
}

pub type Commands = ArrayVec<Command, 2>;

pub struct Model {
    config: Config,
    registry: Registry,
    caps: Capabilities,
    completion: Completion,
    rng: StdRng,

    phase: Phase,
    index: usize,
    wrong_answers: u32,
    show_hint: bool,
    input: AnswerInput,
    viewport: Viewport,

    theme: Option<Box<dyn Theme>>,
    theme_next: Next,
    /// Question text fitted to the active theme's budget for the current viewport.
    fitted: String,
    fitted_len: usize,
    /// Typewriter cursor, in chars of `fitted`.
    reveal: usize,

    transition: Option<Box<dyn Transition>>,
    after_transition: Phase,

    demo: bool,
    demo_ticks: u32,
    ticks: u32,
}

impl Model {
    pub fn new(
        config: Config,
        registry: Registry,
        caps: Capabilities,
        viewport: Viewport,
        options: ModelOptions,
    ) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut model = Self {
            config,
            registry,
            caps,
            completion: options.completion,
            rng,
            phase: Phase::Intro,
            index: 0,
            wrong_answers: 0,
            show_hint: false,
            input: AnswerInput::new(),
            viewport,
            theme: None,
            theme_next: Next::Idle,
            fitted: String::new(),
            fitted_len: 0,
            reveal: 0,
            transition: None,
            after_transition: Phase::Question,
            demo: options.demo,
            demo_ticks: 0,
            ticks: 0,
        };
        model.select_theme();
        model
    }

    /// Commands for the first frame.
    pub fn init(&self) -> Commands {
        self.commands()
    }

    pub fn update(&mut self, event: Event) -> Commands {
        if event == Event::Input(Input::Quit) {
            info!(phase = ?self.phase, "quit requested");
            let mut commands = Commands::new();
            commands.push(Command::Quit);
            return commands;
        }

        match event {
            Event::Tick => self.ticks = self.ticks.wrapping_add(1),
            Event::Resize(viewport) => self.resize(viewport),
            Event::Input(Input::NextTheme) => {
                self.swap_theme();
                return self.commands();
            }
            Event::Input(Input::ForceTransition) => {
                if self.phase == Phase::Question {
                    self.start_transition(false);
                }
                return self.commands();
            }
            Event::Input(Input::ToggleDemo) => {
                self.demo = !self.demo;
                self.demo_ticks = 0;
                info!(enabled = self.demo, "demo mode toggled");
                return self.commands();
            }
            Event::Input(_) => {}
        }

        if self.demo && event.is_tick() && self.phase == Phase::Question {
            self.demo_ticks += 1;
            if self.demo_ticks > DEMO_TICK_BUDGET {
                debug!("demo auto-advance");
                self.start_transition(true);
                return self.commands();
            }
        }

        match self.phase {
            Phase::Intro => {
                if event == Event::Input(Input::Submit) {
                    self.reveal = 0;
                    self.set_phase(Phase::Question);
                }
            }
            Phase::Question => self.update_question(&event),
            Phase::Transition => self.update_transition(&event),
            Phase::Success => {}
        }

        self.commands()
    }

    pub fn view(&self) -> Canvas {
        let viewport = self.viewport;
        if viewport.is_empty() {
            return Canvas::for_viewport(viewport);
        }

        let mut frame = match self.phase {
            Phase::Intro => screens::intro(viewport, self.ticks),
            Phase::Question => self.question_frame(),
            Phase::Transition => match &self.transition {
                Some(t) => {
                    render_guarded(t.name(), viewport, TRANSITION_FALLBACK, || t.view(viewport))
                }
                None => Canvas::with_message(viewport, TRANSITION_FALLBACK, FALLBACK_STYLE),
            },
            Phase::Success => screens::success(viewport, &self.config),
        };
        if self.demo {
            screens::demo_overlay(&mut frame);
        }
        frame
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn question_index(&self) -> usize {
        self.index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.config.questions.get(self.index)
    }

    pub fn wrong_answers(&self) -> u32 {
        self.wrong_answers
    }

    pub fn hint_visible(&self) -> bool {
        self.show_hint
    }

    pub fn demo(&self) -> bool {
        self.demo
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    pub fn theme_name(&self) -> Option<&str> {
        self.theme.as_ref().map(|t| t.name())
    }

    pub fn transition_name(&self) -> Option<&str> {
        self.transition.as_ref().map(|t| t.name())
    }

    pub fn input_value(&self) -> String {
        self.input.value()
    }

    /// The question text as currently revealed: a prefix of the fitted text followed
    /// by the block cursor, or the whole fitted text once the reveal is complete.
    pub fn revealed_text(&self) -> String {
        if self.reveal >= self.fitted_len {
            return self.fitted.clone();
        }
        let mut text: String = self.fitted.chars().take(self.reveal).collect();
        text.push(REVEAL_CURSOR);
        text
    }

    fn wants_tick(&self) -> bool {
        match self.phase {
            Phase::Intro | Phase::Transition => true,
            Phase::Question => {
                self.demo || self.reveal < self.fitted_len || self.theme_next.wants_tick()
            }
            Phase::Success => false,
        }
    }

    fn commands(&self) -> Commands {
        let mut commands = Commands::new();
        if self.wants_tick() {
            commands.push(Command::ScheduleTick);
        }
        commands
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            info!(from = ?self.phase, to = ?phase, question = self.index, "phase change");
            self.phase = phase;
        }
    }

    fn update_question(&mut self, event: &Event) {
        if let Some(theme) = self.theme.as_mut() {
            let next = theme.update(event);
            if event.is_tick() || next.wants_tick() {
                self.theme_next = next;
            }
        }

        match event {
            Event::Tick => {
                if self.reveal < self.fitted_len {
                    self.reveal += 1;
                }
            }
            Event::Input(Input::Submit) => self.submit(),
            Event::Input(Input::Char(c)) => {
                self.input.push(*c);
            }
            Event::Input(Input::Backspace) => self.input.backspace(),
            Event::Input(Input::ClearLine) => self.input.clear(),
            _ => {}
        }
    }

    fn update_transition(&mut self, event: &Event) {
        let done = match self.transition.as_mut() {
            Some(t) => {
                t.update(event);
                t.done()
            }
            None => true,
        };
        if done {
            self.transition = None;
            self.reveal = 0;
            let target = self.after_transition;
            self.set_phase(target);
        }
    }

    fn submit(&mut self) {
        let Some(question) = self.current_question() else {
            return;
        };
        let id = question.id;
        if check_answer(&self.input.value(), &question.answer) {
            info!(question = id, "answer accepted");
            self.start_transition(true);
        } else {
            self.wrong_answers += 1;
            if self.wrong_answers >= HINT_AFTER_MISSES {
                self.show_hint = true;
            }
            info!(question = id, wrong = self.wrong_answers, "answer rejected");
        }
    }

    /// Capture the current frame, move to the next (or same) question and bridge
    /// the two frames with a random compatible transition.
    fn start_transition(&mut self, advance: bool) {
        let old = self.question_frame();

        if advance {
            self.index += 1;
        }
        let target = if self.index < self.config.questions.len() {
            Phase::Question
        } else {
            match self.completion {
                Completion::Finish => Phase::Success,
                Completion::Endless => {
                    self.index = 0;
                    Phase::Question
                }
            }
        };

        self.input.clear();
        self.show_hint = false;
        self.wrong_answers = 0;
        self.reveal = 0;
        self.demo_ticks = 0;

        let new = if target == Phase::Question {
            self.select_theme();
            self.preview_frame()
        } else {
            screens::success(self.viewport, &self.config)
        };

        match select_random_transition(&self.registry, &self.caps, &mut self.rng) {
            Some(mut transition) => {
                transition.set_content(old, new);
                transition.init();
                info!(transition = transition.name(), "transition started");
                self.transition = Some(transition);
                self.after_transition = target;
                self.set_phase(Phase::Transition);
            }
            None => {
                self.transition = None;
                self.set_phase(target);
            }
        }
    }

    fn select_theme(&mut self) {
        let text = self
            .current_question()
            .map(|q| q.text.clone())
            .unwrap_or_default();
        self.theme = select_best_theme(
            &self.registry,
            &self.caps,
            self.viewport,
            &text,
            &mut self.rng,
        );
        self.after_theme_change();
    }

    fn swap_theme(&mut self) {
        if let Some(theme) = random_compatible_theme(&self.registry, &self.caps, &mut self.rng) {
            info!(theme = theme.name(), "theme swapped");
            self.theme = Some(theme);
            self.after_theme_change();
        }
    }

    fn after_theme_change(&mut self) {
        self.theme_next = match self.theme.as_mut() {
            Some(theme) => theme.init(),
            None => Next::Idle,
        };
        self.refit();
    }

    fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        debug!(width = viewport.width, height = viewport.height, "resize");
        self.viewport = viewport;
        self.refit();
    }

    fn refit(&mut self) {
        let was_complete = self.reveal >= self.fitted_len;
        self.fitted = match (self.theme.as_ref(), self.current_question()) {
            (Some(theme), Some(q)) => fit(theme.layout_budget(self.viewport), &q.text).text(),
            (None, Some(q)) => q.text.clone(),
            (_, None) => String::new(),
        };
        self.fitted_len = self.fitted.chars().count();
        self.reveal = if was_complete && self.reveal > 0 {
            self.fitted_len
        } else {
            self.reveal.min(self.fitted_len)
        };
    }

    fn question_frame(&self) -> Canvas {
        let viewport = self.viewport;
        let (Some(theme), Some(question)) = (self.theme.as_ref(), self.current_question()) else {
            return Canvas::with_message(viewport, NO_THEME_FALLBACK, FALLBACK_STYLE);
        };
        let display = Question {
            text: self.revealed_text(),
            ..question.clone()
        };
        let hint = (self.show_hint && !question.hint.is_empty()).then_some(question.hint.as_str());
        let input = self.input.display_value();
        render_guarded(theme.name(), viewport, LOADING_FALLBACK, || {
            theme.view(viewport, &display, &input, hint)
        })
    }

    /// The new question with nothing revealed yet.
    fn preview_frame(&self) -> Canvas {
        let viewport = self.viewport;
        let (Some(theme), Some(question)) = (self.theme.as_ref(), self.current_question()) else {
            return Canvas::with_message(viewport, NO_THEME_FALLBACK, FALLBACK_STYLE);
        };
        let display = Question {
            text: REVEAL_CURSOR.to_string(),
            ..question.clone()
        };
        render_guarded(theme.name(), viewport, LOADING_FALLBACK, || {
            theme.view(viewport, &display, "", None)
        })
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("phase", &self.phase)
            .field("index", &self.index)
            .field("wrong_answers", &self.wrong_answers)
            .field("show_hint", &self.show_hint)
            .field("theme", &self.theme_name())
            .field("transition", &self.transition_name())
            .field("reveal", &self.reveal)
            .field("viewport", &self.viewport)
            .field("demo", &self.demo)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LayoutBudget;
    use std::time::{Duration, Instant};

    const VP: Viewport = Viewport::new(80, 24);

    struct Plain;

    impl Theme for Plain {
        fn name(&self) -> &str {
            "plain"
        }
        fn description(&self) -> &str {
            "text only"
        }
        fn is_compatible(&self, _caps: &Capabilities) -> bool {
            true
        }
        fn layout_budget(&self, viewport: Viewport) -> LayoutBudget {
            LayoutBudget::multi_line(usize::from(viewport.width), 4)
        }
        fn init(&mut self) -> Next {
            Next::Idle
        }
        fn update(&mut self, _event: &Event) -> Next {
            Next::Idle
        }
        fn view(&self, viewport: Viewport, q: &Question, input: &str, hint: Option<&str>) -> Canvas {
            let mut c = Canvas::for_viewport(viewport);
            let style = Default::default();
            c.set_string(0, 0, &q.text, style);
            c.set_string(0, 1, input, style);
            if let Some(hint) = hint {
                c.set_string(0, 2, hint, style);
            }
            c
        }
    }

    struct Panicky;

    impl Theme for Panicky {
        fn name(&self) -> &str {
            "panicky"
        }
        fn description(&self) -> &str {
            "always panics"
        }
        fn is_compatible(&self, _caps: &Capabilities) -> bool {
            true
        }
        fn layout_budget(&self, _viewport: Viewport) -> LayoutBudget {
            LayoutBudget::single_line(10)
        }
        fn view(&self, _v: Viewport, q: &Question, _i: &str, _h: Option<&str>) -> Canvas {
            let n = q.text.len();
            panic!("slice out of range: {n}");
        }
    }

    fn question(id: u32, text: &str, answer: &str, hint: &str) -> Question {
        Question {
            id,
            text: text.to_string(),
            answer: answer.to_string(),
            hint: hint.to_string(),
        }
    }

    fn config() -> Config {
        Config {
            questions: vec![
                question(1, "abc", "echo", "It bounces back"),
                question(2, "What is 6 x 7?", "fortytwo", "Douglas Adams"),
                question(3, "Name the ship.", "nostromo", ""),
            ],
            final_message: "You are in.".to_string(),
            final_hint: "Mind the gap.".to_string(),
        }
    }

    fn options() -> ModelOptions {
        ModelOptions {
            seed: Some(42),
            ..ModelOptions::default()
        }
    }

    fn plain_registry() -> Registry {
        Registry::builder().theme(|| Box::new(Plain)).build()
    }

    fn started(registry: Registry, options: ModelOptions) -> Model {
        let mut model = Model::new(config(), registry, Capabilities::full(), VP, options);
        model.update(Event::Input(Input::Submit));
        assert_eq!(model.phase(), Phase::Question);
        model
    }

    fn type_answer(model: &mut Model, answer: &str) {
        for c in answer.chars() {
            model.update(Event::Input(Input::Char(c)));
        }
        model.update(Event::Input(Input::Submit));
    }

    fn run_transition(model: &mut Model) {
        for _ in 0..5000 {
            if model.phase() != Phase::Transition {
                return;
            }
            model.update(Event::Tick);
        }
        panic!("transition never finished");
    }

    #[test]
    fn test_intro_waits_for_enter() {
        let mut model = Model::new(config(), plain_registry(), Capabilities::full(), VP, options());
        assert_eq!(model.phase(), Phase::Intro);
        model.update(Event::Tick);
        model.update(Event::Input(Input::Char('x')));
        assert_eq!(model.phase(), Phase::Intro);
        assert!(model.view().plain_text().contains("HACK THE PLANET"));
        model.update(Event::Input(Input::Submit));
        assert_eq!(model.phase(), Phase::Question);
    }

    #[test]
    fn test_quit_is_immediate_in_every_phase() {
        let assert_quits = |model: &mut Model| {
            let start = Instant::now();
            let commands = model.update(Event::Input(Input::Quit));
            assert!(start.elapsed() < Duration::from_millis(10));
            assert_eq!(commands.as_slice(), &[Command::Quit]);
        };

        let mut model = Model::new(
            config(),
            Registry::builtin(),
            Capabilities::full(),
            VP,
            options(),
        );
        assert_quits(&mut model);

        model.update(Event::Input(Input::Submit));
        assert_quits(&mut model);

        type_answer(&mut model, "echo");
        assert_eq!(model.phase(), Phase::Transition);
        model.update(Event::Tick);
        assert_quits(&mut model);

        let mut model = started(plain_registry(), options());
        type_answer(&mut model, "echo");
        type_answer(&mut model, "fortytwo");
        type_answer(&mut model, "nostromo");
        assert_eq!(model.phase(), Phase::Success);
        assert_quits(&mut model);
    }

    #[test]
    fn test_wrong_answer_reveals_hint_then_correct_answer_advances() {
        let mut model = started(Registry::builtin(), options());
        assert!(!model.hint_visible());

        type_answer(&mut model, "ping");
        assert_eq!(model.wrong_answers(), 1);
        assert!(model.hint_visible());
        assert_eq!(model.question_index(), 0);

        model.update(Event::Input(Input::ClearLine));
        type_answer(&mut model, "ecoh");
        assert_eq!(model.question_index(), 1);
        assert_eq!(model.wrong_answers(), 0);
        assert!(!model.hint_visible());
        assert!(model.input_value().is_empty());
        assert_eq!(model.phase(), Phase::Transition);

        run_transition(&mut model);
        assert_eq!(model.phase(), Phase::Question);
        assert!(model.theme_name().is_some());
    }

    #[test]
    fn test_hint_is_drawn_after_a_miss() {
        let mut model = started(plain_registry(), options());
        assert!(!model.view().plain_text().contains("It bounces back"));
        type_answer(&mut model, "nope");
        assert!(model.view().row_text(2).starts_with("It bounces back"));
    }

    #[test]
    fn test_typewriter_advances_one_char_per_tick() {
        let mut model = started(plain_registry(), options());
        assert_eq!(model.revealed_text(), "█");

        model.update(Event::Input(Input::Char('z')));
        assert_eq!(model.revealed_text(), "█");

        model.update(Event::Tick);
        assert_eq!(model.revealed_text(), "a█");
        model.update(Event::Tick);
        assert_eq!(model.revealed_text(), "ab█");
        model.update(Event::Tick);
        assert_eq!(model.revealed_text(), "abc");
        model.update(Event::Tick);
        assert_eq!(model.revealed_text(), "abc");
        assert!(model.view().row_text(0).starts_with("abc "));
    }

    #[test]
    fn test_ticks_stop_once_reveal_is_done() {
        let mut model = started(plain_registry(), options());
        assert!(model.update(Event::Tick).contains(&Command::ScheduleTick));
        model.update(Event::Tick);
        let commands = model.update(Event::Tick);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_panicking_theme_shows_fallback() {
        let registry = Registry::builder().theme(|| Box::new(Panicky)).build();
        let mut model = started(registry, options());
        let frame = model.view();
        assert_eq!(frame.viewport(), VP);
        assert!(frame.plain_text().contains(LOADING_FALLBACK));

        model.update(Event::Tick);
        assert_eq!(model.phase(), Phase::Question);
        type_answer(&mut model, "echo");
        assert_eq!(model.question_index(), 1);
    }

    #[test]
    fn test_empty_registry_shows_no_theme_and_skips_transitions() {
        let mut model = started(Registry::default(), options());
        assert!(model.theme_name().is_none());
        assert!(model.view().plain_text().contains(NO_THEME_FALLBACK));

        type_answer(&mut model, "echo");
        assert_eq!(model.phase(), Phase::Question);
        assert_eq!(model.question_index(), 1);
    }

    #[test]
    fn test_last_answer_reaches_success() {
        let mut model = started(Registry::builtin(), options());
        for answer in ["echo", "fortytwo", "nostromo"] {
            type_answer(&mut model, answer);
            run_transition(&mut model);
        }
        assert_eq!(model.phase(), Phase::Success);
        assert!(model.current_question().is_none());
        let text = model.view().plain_text();
        assert!(text.contains("ACCESS GRANTED"));
        assert!(text.contains("You are in."));
        assert!(model.update(Event::Tick).is_empty());
    }

    #[test]
    fn test_endless_mode_wraps_around() {
        let options = ModelOptions {
            completion: Completion::Endless,
            ..options()
        };
        let mut model = started(plain_registry(), options);
        for answer in ["echo", "fortytwo", "nostromo"] {
            type_answer(&mut model, answer);
        }
        assert_eq!(model.phase(), Phase::Question);
        assert_eq!(model.question_index(), 0);
    }

    #[test]
    fn test_demo_mode_advances_after_budget() {
        let options = ModelOptions {
            demo: true,
            ..options()
        };
        let mut model = started(plain_registry(), options);
        for _ in 0..DEMO_TICK_BUDGET {
            model.update(Event::Tick);
        }
        assert_eq!(model.question_index(), 0);
        model.update(Event::Tick);
        assert_eq!(model.question_index(), 1);
        assert!(model.view().row_text(i32::from(VP.height) - 1).starts_with(" DEMO MODE "));
    }

    #[test]
    fn test_demo_advance_without_transition_restarts_reveal() {
        let options = ModelOptions {
            demo: true,
            ..options()
        };
        let mut model = started(plain_registry(), options);
        for _ in 0..=DEMO_TICK_BUDGET {
            model.update(Event::Tick);
        }
        assert_eq!(model.phase(), Phase::Question);
        assert_eq!(model.question_index(), 1);
        assert_eq!(model.revealed_text(), "█");
        model.update(Event::Tick);
        assert_eq!(model.revealed_text(), "W█");
    }

    #[test]
    fn test_function_keys() {
        let mut model = started(Registry::builtin(), options());

        model.update(Event::Input(Input::ToggleDemo));
        assert!(model.demo());
        model.update(Event::Input(Input::ToggleDemo));
        assert!(!model.demo());

        model.update(Event::Input(Input::NextTheme));
        assert!(model.theme_name().is_some());
        assert_eq!(model.phase(), Phase::Question);

        model.update(Event::Input(Input::ForceTransition));
        assert_eq!(model.phase(), Phase::Transition);
        assert_eq!(model.question_index(), 0);
    }

    #[test]
    fn test_resize_keeps_theme_and_refits() {
        let mut model = started(plain_registry(), options());
        for _ in 0..3 {
            model.update(Event::Tick);
        }
        model.update(Event::Resize(Viewport::new(2, 5)));
        assert_eq!(model.viewport(), Viewport::new(2, 5));
        assert_eq!(model.theme_name(), Some("plain"));
        assert_eq!(model.revealed_text(), "ab\nc");
        assert_eq!(model.view().viewport(), Viewport::new(2, 5));
    }

    #[test]
    fn test_zero_viewport_renders_empty_frame() {
        let model = Model::new(
            config(),
            Registry::builtin(),
            Capabilities::full(),
            Viewport::default(),
            options(),
        );
        assert!(model.view().cells().is_empty());
    }

    #[test]
    fn test_same_seed_same_theme_sequence() {
        let names = |seed| {
            let options = ModelOptions {
                seed: Some(seed),
                ..ModelOptions::default()
            };
            let mut model = started(Registry::builtin(), options);
            let mut names = vec![model.theme_name().map(str::to_string)];
            for answer in ["echo", "fortytwo"] {
                type_answer(&mut model, answer);
                names.push(model.theme_name().map(str::to_string));
            }
            names
        };
        assert_eq!(names(9), names(9));
    }
}
