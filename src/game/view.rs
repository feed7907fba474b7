//! file: view.rs
//! author: Jacob Xie
//! date: 2025/12/21 11:26:03 Sunday
//! brief: gpui view that draws the board and plays flips

use std::{f32::consts::PI, time::Duration};

use gpui::{
    App, Context, Div, FocusHandle, Focusable, MouseButton, MouseDownEvent, Render, Window,
    actions, div, prelude::*, px, rgb, rgba,
};
use tracing::debug;

use super::{Card, CardStatus, ConcealReason, Flip, FlipKind, MOVE_BUDGET, MatchGame, Outcome, Phase};
use crate::config::{AnimationSettings, Settings};

const GRID_COLUMNS: usize = 4;

actions!(memory_match, [DismissNotice, QuitGame]);

struct FlipAnimation {
    flip: Flip,
    delay: Duration,
    duration: Duration,
    elapsed: Duration,
}

impl FlipAnimation {
    fn new(flip: Flip, timing: &AnimationSettings) -> Self {
        let (delay, duration) = match flip.kind {
            FlipKind::Reveal => (Duration::ZERO, timing.reveal()),
            FlipKind::Conceal => (timing.conceal_delay(), timing.conceal()),
        };
        Self {
            flip,
            delay,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    fn progress(&self) -> f32 {
        let Some(running) = self.elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        (running.as_secs_f32() / self.duration.as_secs_f32().max(f32::EPSILON)).min(1.0)
    }

    /// Horizontal scale of a turning card, zero when edge-on.
    fn width_scale(&self) -> f32 {
        (self.progress() * PI).cos().abs()
    }
}

pub struct MatchGameView {
    game: MatchGame,
    animation: Option<FlipAnimation>,
    notice: Option<Outcome>,
    rounds_won: u32,
    rounds_played: u32,
    focus_handle: FocusHandle,
    timing: AnimationSettings,
    card_px: f32,
}

impl MatchGameView {
    pub fn new(settings: &Settings, cx: &mut Context<Self>) -> Self {
        Self {
            game: MatchGame::new(),
            animation: None,
            notice: None,
            rounds_won: 0,
            rounds_played: 0,
            focus_handle: cx.focus_handle(),
            timing: settings.animation.clone(),
            card_px: settings.board.card_px,
        }
    }

    pub fn frame_delay(&self) -> Duration {
        self.timing.frame()
    }

    /// Moves the flip in flight forward by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration, cx: &mut Context<Self>) {
        let progress = match self.animation.as_mut() {
            Some(animation) => {
                animation.elapsed += elapsed;
                animation.progress()
            }
            None => return,
        };

        if progress >= 0.5 {
            self.game.flip_halfway();
        }
        if progress >= 1.0 {
            self.animation = None;
            let next = self.game.flip_complete();
            if let Some(outcome) = self.game.take_outcome() {
                self.record_outcome(outcome);
            }
            self.play(next);
        }
        cx.notify();
    }

    fn play(&mut self, flip: Option<Flip>) {
        self.animation = flip.map(|flip| FlipAnimation::new(flip, &self.timing));
    }

    fn record_outcome(&mut self, outcome: Outcome) {
        self.rounds_played += 1;
        if outcome == Outcome::Won {
            self.rounds_won += 1;
        }
        debug!(?outcome, won = self.rounds_won, played = self.rounds_played, "round finished");
        self.notice = Some(outcome);
    }

    fn handle_select(&mut self, position: usize, cx: &mut Context<Self>) {
        if self.notice.is_some() {
            return;
        }
        if let Some(flip) = self.game.select_card(position) {
            self.play(Some(flip));
            cx.notify();
        }
    }

    fn handle_dismiss(&mut self, cx: &mut Context<Self>) {
        if self.notice.take().is_some() {
            cx.notify();
        }
    }

    fn status_text(&self) -> (&'static str, u32) {
        match self.game.phase() {
            Phase::Idle if self.game.open_selection().is_empty() => ("Pick a card", 0x34d399),
            Phase::Idle => ("Pick its pair", 0x34d399),
            Phase::Revealing { .. } => ("Flipping", 0x93c5fd),
            Phase::Concealing {
                reason: ConcealReason::Mismatch,
                ..
            } => ("No match", 0xf87171),
            Phase::Concealing {
                reason: ConcealReason::Reset,
                ..
            } => ("Shuffling", 0xfbbf24),
        }
    }

    fn render_card(&self, card: &Card, cx: &Context<Self>) -> Div {
        let slot = px(self.card_px);
        let scale = self
            .animation
            .as_ref()
            .filter(|animation| animation.flip.contains(card.position))
            .map_or(1.0, FlipAnimation::width_scale);
        let (background, label) = match card.face {
            Some(identity) => (rgb(identity.color), identity.label),
            None => (rgb(0x1e293b), "?"),
        };
        let position = card.position;

        div()
            .w(slot)
            .h(slot)
            .flex()
            .items_center()
            .justify_center()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _: &MouseDownEvent, _, cx| {
                    this.handle_select(position, cx)
                }),
            )
            .child(
                div()
                    .w(px(self.card_px * scale.max(0.02)))
                    .h(slot)
                    .rounded_lg()
                    .bg(background)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_3xl()
                    .text_color(rgb(0xf8fafc))
                    .when(card.status == CardStatus::Matched, |this| {
                        this.border_2().border_color(rgb(0xfacc15))
                    })
                    .when(scale > 0.25, |this| this.child(label)),
            )
    }
}

impl Render for MatchGameView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (status_text, status_color) = self.status_text();
        let is_focused = self.focus_handle(cx).is_focused(window);

        let mut rows = Vec::new();
        for row in self.game.cards().chunks(GRID_COLUMNS) {
            let mut cells = Vec::with_capacity(GRID_COLUMNS);
            for card in row {
                cells.push(self.render_card(card, cx));
            }
            rows.push(div().flex().gap_3().children(cells));
        }
        let grid = div().flex().flex_col().gap_3().children(rows);

        let instructions = [
            "Click a card to flip it",
            "Enter to dismiss a result",
            "Esc to quit",
        ];

        div()
            .bg(rgb(0x020617))
            .text_color(rgb(0xf8fafc))
            .size_full()
            .p_5()
            .gap_4()
            .flex()
            .flex_col()
            .track_focus(&self.focus_handle(cx))
            .key_context("gpui-match")
            .on_action(cx.listener(|this, _: &DismissNotice, _, cx| this.handle_dismiss(cx)))
            .child(
                div()
                    .flex()
                    .gap_4()
                    .items_center()
                    .child(div().text_3xl().child(format!(
                        "Moves left: {}/{}",
                        self.game.moves_remaining(),
                        MOVE_BUDGET
                    )))
                    .child(
                        div()
                            .text_xl()
                            .text_color(rgb(0xa5f3fc))
                            .child(format!("Pairs: {}", self.game.matched_count() / 2)),
                    )
                    .child(
                        div()
                            .text_lg()
                            .text_color(rgb(status_color))
                            .child(status_text),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap_4()
                    .text_sm()
                    .text_color(rgb(0x94a3b8))
                    .child(format!(
                        "Rounds won: {}/{}",
                        self.rounds_won, self.rounds_played
                    ))
                    .child(if is_focused {
                        "Focused"
                    } else {
                        "Click inside the window to take control"
                    }),
            )
            .child(
                div()
                    .p_4()
                    .rounded_2xl()
                    .bg(rgb(0x111827))
                    .shadow_lg()
                    .relative()
                    .child(grid)
                    .when_some(self.notice, |this, outcome| {
                        this.child(
                            div()
                                .absolute()
                                .top(px(0.))
                                .bottom(px(0.))
                                .left(px(0.))
                                .right(px(0.))
                                .flex()
                                .flex_col()
                                .gap_2()
                                .items_center()
                                .justify_center()
                                .bg(rgba(0x020617A6))
                                .on_mouse_down(
                                    MouseButton::Left,
                                    cx.listener(|this, _: &MouseDownEvent, _, cx| {
                                        cx.stop_propagation();
                                        this.handle_dismiss(cx);
                                    }),
                                )
                                .child(div().text_3xl().child(outcome.message()))
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(rgb(0xcbd5f5))
                                        .child("Click or press Enter to continue"),
                                ),
                        )
                    }),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_3()
                    .text_sm()
                    .text_color(rgb(0xcbd5f5))
                    .children(instructions.into_iter().map(|text| {
                        div()
                            .px_3()
                            .py_2()
                            .rounded_md()
                            .bg(rgb(0x1e293b))
                            .child(text)
                    })),
            )
    }
}

impl Focusable for MatchGameView {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
