use std::time::Duration;

use stack_visualizer::session::Session;
use stack_visualizer::stack::{StackEngine, ValueKind};
use stack_visualizer::visualizer::clock::ManualClock;
use stack_visualizer::visualizer::input_source::ScriptInput;
use stack_visualizer::visualizer::r#loop::VisualizerLoop;
use stack_visualizer::visualizer::renderer::RecordingRenderer;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn fill_and_drain_session() -> Session {
    let mut session = Session::new();
    let mut now = Duration::ZERO;
    for i in 0..20 {
        session
            .push(&i.to_string(), ValueKind::Integer, now)
            .unwrap();
        now = session.settle(now);
    }
    while session.pop(now).is_ok() {
        now = session.settle(now);
    }
    session
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("stack engine push/pop (20 strings)", |b| {
        b.iter(|| {
            let mut stack = StackEngine::new();
            for _ in 0..20 {
                stack.try_push(black_box("benchmark"), ValueKind::String).unwrap();
            }
            while stack.commit_pop().is_ok() {}
            stack
        })
    });

    c.bench_function("session fill and drain with animations", |b| {
        b.iter(fill_and_drain_session)
    });

    c.bench_function("script with recorded frames", |b| {
        b.iter(|| {
            let input = ScriptInput::parse("push 1; push 2; peek; pop; push 3; clear").unwrap();
            let mut visualizer = VisualizerLoop::new(
                Session::new(),
                input,
                RecordingRenderer::new(true),
                ManualClock::new(),
            );
            visualizer.run();
            visualizer.renderer().frames().len()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
