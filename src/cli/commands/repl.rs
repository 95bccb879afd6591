//! Repl command - drive the stack with typed commands.

use stack_visualizer::visualizer::clock::SystemClock;
use stack_visualizer::visualizer::input_source::LineInput;
use stack_visualizer::visualizer::renderer::PlainRenderer;
use structopt::StructOpt;

use super::util::{create_session, run_visualizer_loop, SessionArgs};
use super::Command;

#[derive(StructOpt)]
pub struct ReplArgs {
    #[structopt(flatten)]
    pub session: SessionArgs,
    #[structopt(long = "no-animation", help = "Skip intermediate animation frames")]
    pub no_animation: bool,
}

impl Command for ReplArgs {
    fn execute(self) {
        let session = create_session(&self.session);
        run_visualizer_loop(
            session,
            LineInput,
            PlainRenderer::new(!self.no_animation),
            SystemClock::new(),
        );
    }
}
