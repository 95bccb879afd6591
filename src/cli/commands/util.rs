//! Shared utilities for CLI commands.

use stack_visualizer::animation::Speed;
use stack_visualizer::config::{VisualizerConfig, DEFAULT_CAPACITY};
use stack_visualizer::session::{Session, ThemeMode};
use stack_visualizer::stack::ValueKind;
use stack_visualizer::visualizer::clock::Clock;
use stack_visualizer::visualizer::input_source::InputSource;
use stack_visualizer::visualizer::r#loop::VisualizerLoop;
use stack_visualizer::visualizer::renderer::SessionRenderer;
use structopt::StructOpt;

/// Options shared by every command that starts a session.
#[derive(StructOpt)]
pub struct SessionArgs {
    #[structopt(short, long, default_value = "5", help = "Animation speed, 1 (slow) to 10 (fast)")]
    pub speed: Speed,
    #[structopt(
        short,
        long,
        default_value = "integer",
        help = "Kind used by plain `push` commands: integer, character or string"
    )]
    pub kind: ValueKind,
    #[structopt(long, help = "Start with the dark theme")]
    pub dark: bool,
    #[structopt(long, default_value = "20", help = "Maximum number of elements")]
    pub capacity: usize,
}

pub(crate) fn create_session(args: &SessionArgs) -> Session {
    let capacity = if args.capacity == 0 {
        log::warn!("capacity must be positive, using {}", DEFAULT_CAPACITY);
        DEFAULT_CAPACITY
    } else {
        args.capacity
    };

    let config = VisualizerConfig {
        capacity,
        speed: args.speed,
        ..VisualizerConfig::default()
    };

    let mut session = Session::with_config(config);
    session.select_kind(args.kind);
    if args.dark {
        session.set_theme_mode(ThemeMode::Dark);
    }
    session
}

pub(crate) fn run_visualizer_loop<I, R, C>(
    session: Session,
    input_source: I,
    renderer: R,
    clock: C,
) -> VisualizerLoop<I, R, C>
where
    I: InputSource,
    R: SessionRenderer,
    C: Clock,
{
    let mut visualizer = VisualizerLoop::new(session, input_source, renderer, clock);
    visualizer.run();
    visualizer
}
