use layered_wheels::consts::SIM_DT;
use layered_wheels::mesh::{WHEEL_VERTEX_COUNT, engine_vertices};
use layered_wheels::sim::{
    LayeredWheelEngine, PatternKind, Score, ScoreMode, Session, SessionInput, SessionPhase,
    WheelSpec,
};
use layered_wheels::{Color, EngineConfig};

fn mixed_config(seed: u64) -> EngineConfig {
    let kinds = [
        PatternKind::Random,
        PatternKind::PieChart,
        PatternKind::GradientStripe,
        PatternKind::Stripe,
    ];
    EngineConfig {
        wheels: kinds
            .iter()
            .enumerate()
            .map(|(i, &kind)| WheelSpec {
                kind,
                primary: Color::WHITE,
                secondary: Color::BLACK,
                ratio: 0.3,
                divisions: i as i32 + 3,
                speed: 90.0 + 20.0 * i as f32,
                speed_jitter: 15.0,
            })
            .collect(),
        seed,
        score_mode: ScoreMode::FullOverlap,
        ..Default::default()
    }
}

/// Click on the listed ticks and collect every score shown
fn replay(config: &EngineConfig, clicks: &[u32], ticks: u32) -> Vec<Score> {
    let mut session = Session::new(LayeredWheelEngine::from_config(config), config.score_mode);
    let mut scores = Vec::new();
    for t in 0..ticks {
        let input = SessionInput {
            click: clicks.contains(&t),
        };
        session.tick(&input, SIM_DT);
        if input.click && session.phase() == SessionPhase::ScoreView {
            scores.extend(session.last_score());
        }
    }
    scores
}

#[test]
fn same_seed_replays_identically() {
    let clicks = [120, 180, 415, 500, 777];
    let a = replay(&mixed_config(99), &clicks, 900);
    let b = replay(&mixed_config(99), &clicks, 900);
    assert_eq!(a.len(), 3);
    assert_eq!(a, b);
}

#[test]
fn same_seed_builds_identical_geometry() {
    let a = LayeredWheelEngine::from_config(&mixed_config(7));
    let b = LayeredWheelEngine::from_config(&mixed_config(7));
    let va = engine_vertices(&a, 5.0);
    let vb = engine_vertices(&b, 5.0);
    assert_eq!(va.len(), 4 * WHEEL_VERTEX_COUNT);
    assert_eq!(va, vb);
}

#[test]
fn scores_stay_in_range() {
    let config = mixed_config(3);
    let mut engine = LayeredWheelEngine::from_config(&config);
    for _ in 0..600 {
        engine.advance(SIM_DT);
        assert!(engine.score_full_overlap() <= 360);
        let top = engine.score_at_top_mark();
        assert!((0.0..=400.0 + 1e-3).contains(&top));
    }
}

#[test]
fn default_config_plays_a_round() {
    let config = EngineConfig::default();
    let mut session = Session::new(LayeredWheelEngine::from_config(&config), ScoreMode::TopMark);
    for _ in 0..240 {
        session.tick(&SessionInput::default(), SIM_DT);
    }
    session.tick(&SessionInput { click: true }, SIM_DT);
    let text = session.score_text().expect("score is shown after stopping");
    assert!(text.starts_with("SCORE: "));
    // Grey/black stripes: each of 5 wheels adds 0 or 50
    match session.last_score() {
        Some(Score::TopMark(v)) => {
            let steps = v / 50.0;
            assert!((steps - steps.round()).abs() < 1e-3, "score {v}");
            assert!(v <= 250.0 + 1e-3);
        }
        other => panic!("unexpected score {other:?}"),
    }
}
