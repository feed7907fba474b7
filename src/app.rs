//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/21 12:08:44 Sunday
//! brief: window setup and the frame loop

use std::time::Instant;

use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, Timer, TitlebarOptions,
    WindowBounds, WindowOptions, px, size,
};
use tracing::{error, info};

use crate::config::Settings;
use crate::game::{DismissNotice, MatchGameView, QuitGame};

pub fn run(settings: Settings) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("enter", DismissNotice, None),
            KeyBinding::new("escape", QuitGame, None),
        ]);

        let bounds = Bounds::centered(
            None,
            size(px(settings.window.width), px(settings.window.height)),
            cx,
        );
        let window = match cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Memory Match".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| MatchGameView::new(&settings, cx)),
        ) {
            Ok(window) => window,
            Err(err) => {
                error!(%err, "failed to open window");
                cx.quit();
                return;
            }
        };

        let game = match window.update(cx, |view: &mut MatchGameView, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
            cx.entity()
        }) {
            Ok(game) => game,
            Err(err) => {
                error!(%err, "failed to focus the board");
                cx.quit();
                return;
            }
        };

        spawn_frame_loop(game, cx);
        cx.on_action(|_: &QuitGame, cx| cx.quit());
        cx.activate(true);
        info!("board ready");
    });
}

fn spawn_frame_loop(game: gpui::Entity<MatchGameView>, cx: &mut App) {
    cx.spawn({
        async move |cx| {
            let mut last = Instant::now();
            loop {
                let delay = match game.read_with(cx, |game, _| game.frame_delay()) {
                    Ok(duration) => duration,
                    Err(_) => break,
                };

                Timer::after(delay).await;
                let now = Instant::now();
                let elapsed = now.duration_since(last);
                last = now;
                if game
                    .update(cx, |game, cx| {
                        game.advance(elapsed, cx);
                    })
                    .is_err()
                {
                    break;
                }
            }
        }
    })
    .detach();
}
