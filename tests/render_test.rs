//! Full pipeline: session -> snapshot -> view -> framebuffer

use tui_snake::core::{Session, SessionConfig, SessionSnapshot};
use tui_snake::term::{GameView, Viewport};

fn row_text(fb: &tui_snake::term::FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).map(|g| g.ch).unwrap_or(' '))
        .collect()
}

#[test]
fn live_session_renders_with_score_line() {
    let mut session = Session::new(SessionConfig {
        seed: 4242,
        ..SessionConfig::default()
    });
    let view = GameView::default();
    let mut snap = SessionSnapshot::default();

    for _ in 0..10 {
        session.tick();
        session.snapshot_into(&mut snap);
        let fb = view.render(&snap, 3, Viewport::new(130, 46));
        let found = (0..fb.height()).any(|y| row_text(&fb, y).contains("High: 3"));
        assert!(found);
    }
}

#[test]
fn game_over_session_renders_the_replay_prompt() {
    let mut session = Session::new(SessionConfig {
        obstacle_count: 0,
        seed: 8,
        ..SessionConfig::default()
    });
    while !session.game_over() {
        session.tick();
    }

    let fb = GameView::default().render(&session.snapshot(), 0, Viewport::new(130, 46));
    let found = (0..fb.height()).any(|y| row_text(&fb, y).contains("You Lost!"));
    assert!(found);
}

#[test]
fn rendering_never_panics_across_viewport_sizes() {
    let session = Session::new(SessionConfig::default());
    let snap = session.snapshot();
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (80, 24), (122, 42), (300, 100)] {
        let fb = view.render(&snap, 0, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
