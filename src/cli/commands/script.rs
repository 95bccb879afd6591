//! Script command - run a fixed list of commands and print the result.

use stack_visualizer::visualizer::clock::ManualClock;
use stack_visualizer::visualizer::input_source::ScriptInput;
use stack_visualizer::visualizer::renderer::RecordingRenderer;
use structopt::StructOpt;

use super::util::{create_session, run_visualizer_loop, SessionArgs};
use super::Command;

#[derive(StructOpt)]
pub struct ScriptArgs {
    #[structopt(help = "Commands separated by `;` or newlines, e.g. \"push 1; push 2; pop\"")]
    pub commands: String,
    #[structopt(flatten)]
    pub session: SessionArgs,
    #[structopt(long, help = "Print every frame, including animation steps")]
    pub frames: bool,
}

impl Command for ScriptArgs {
    fn execute(self) {
        let input = match ScriptInput::parse(&self.commands) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("Failed to parse script: {}", e);
                std::process::exit(1);
            }
        };

        let session = create_session(&self.session);
        let visualizer = run_visualizer_loop(
            session,
            input,
            RecordingRenderer::new(self.frames),
            ManualClock::new(),
        );

        let renderer = visualizer.renderer();
        if self.frames {
            for frame in renderer.frames() {
                println!("{}\n", frame);
            }
        } else if let Some(frame) = renderer.last_frame() {
            println!("{}", frame);
        }
    }
}
