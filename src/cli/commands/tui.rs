//! Tui command - full-screen interactive interface.

use stack_visualizer::tui::TuiApp;
use structopt::StructOpt;

use super::util::{create_session, SessionArgs};
use super::Command;

#[derive(StructOpt)]
pub struct TuiArgs {
    #[structopt(flatten)]
    pub session: SessionArgs,
}

impl Command for TuiArgs {
    fn execute(self) {
        let mut session = create_session(&self.session);

        let result = TuiApp::new().and_then(|mut app| app.run(&mut session));
        if let Err(e) = result {
            eprintln!("Failed to run TUI: {}", e);
            std::process::exit(1);
        }

        log::info!(
            "session ended with {} elements on the stack",
            session.stack().len()
        );
    }
}
