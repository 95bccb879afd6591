use log::debug;

use crate::animation::AnimationCompletion;
use crate::input_handler::{CommandInput, InputError, HELP_TEXT};
use crate::session::{CommandError, Session};

use super::clock::Clock;
use super::input_source::InputSource;
use super::renderer::SessionRenderer;

const WELCOME_MESSAGE: &str = "Type `help` for a list of commands.";

pub struct VisualizerLoop<I: InputSource, R: SessionRenderer, C: Clock> {
    session: Session,
    input: I,
    renderer: R,
    clock: C,
}

impl<I: InputSource, R: SessionRenderer, C: Clock> VisualizerLoop<I, R, C> {
    pub fn new(session: Session, input: I, renderer: R, clock: C) -> Self {
        Self {
            session,
            input,
            renderer,
            clock,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn run(&mut self) {
        let mut message = Some(WELCOME_MESSAGE.to_string());

        loop {
            self.session.tick(self.clock.now());
            self.renderer.render(&self.session, message.as_deref());

            let command = match self.input.next_command() {
                Ok(CommandInput::Quit) | Err(InputError::UserExit) => break,
                Ok(command) => command,
                Err(error) => {
                    message = Some(error.to_string());
                    continue;
                }
            };

            let feedback = self.execute(command);
            message = match self.play_animation(&feedback) {
                Some(completed) => Some(completed),
                None => Some(feedback),
            };
        }

        // Let a pending pop land before leaving
        let now = self.clock.now();
        self.session.settle(now);
    }

    /// Applies one command to the session and describes the outcome.
    pub fn execute(&mut self, command: CommandInput) -> String {
        let now = self.clock.now();
        let result: Result<String, CommandError> = match command {
            CommandInput::Push { value, kind } => {
                let kind = kind.unwrap_or_else(|| self.session.selected_kind());
                self.session
                    .push(&value, kind, now)
                    .map(|pushed| format!("Pushed {}", pushed))
            }
            CommandInput::Pop => self
                .session
                .pop(now)
                .map(|candidate| format!("Popping {}...", candidate)),
            CommandInput::Peek => self
                .session
                .peek(now)
                .map(|top| format!("Top element: {}", top)),
            CommandInput::Clear => self
                .session
                .clear()
                .map(|removed| format!("Cleared {} elements", removed)),
            CommandInput::Speed { level } => self
                .session
                .set_speed(level)
                .map(|speed| format!("Animation speed set to {}", speed)),
            CommandInput::SelectKind { kind } => {
                self.session.select_kind(kind);
                Ok(format!("Next push will use {}", kind))
            }
            CommandInput::ToggleTheme => {
                let mode = self.session.toggle_theme();
                Ok(format!("Theme: {}", mode))
            }
            CommandInput::Help => Ok(HELP_TEXT.to_string()),
            CommandInput::Quit => Ok(String::new()),
        };

        result.unwrap_or_else(|error| {
            debug!("command rejected: {}", error);
            error.to_string()
        })
    }

    /// Steps the running animation to its end, one frame per step.
    ///
    /// Returns a message describing a finished pop.
    fn play_animation(&mut self, message: &str) -> Option<String> {
        let mut outcome = None;
        while let Some(due) = self.session.next_step_at() {
            self.clock.sleep_until(due);
            match self.session.tick(self.clock.now()) {
                Some(AnimationCompletion::Popped(value)) => {
                    outcome = Some(format!("Popped {}", value));
                }
                Some(AnimationCompletion::Pushed(_)) | None => {}
            }
            if self.renderer.animates() && self.session.is_animating() {
                self.renderer.render(&self.session, Some(message));
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::{TypedValue, ValueKind};
    use crate::visualizer::clock::ManualClock;
    use crate::visualizer::input_source::ScriptInput;
    use crate::visualizer::renderer::RecordingRenderer;

    fn run_script(script: &str, animate: bool) -> VisualizerLoop<ScriptInput, RecordingRenderer, ManualClock> {
        let input = ScriptInput::parse(script).unwrap();
        let mut visualizer = VisualizerLoop::new(
            Session::new(),
            input,
            RecordingRenderer::new(animate),
            ManualClock::new(),
        );
        visualizer.run();
        visualizer
    }

    #[test]
    fn test_script_builds_stack() {
        let visualizer = run_script("push 1; push 2; push 3; pop", false);
        let stack = visualizer.session().stack();
        assert_eq!(
            stack.elements(),
            &[TypedValue::Integer(1), TypedValue::Integer(2)]
        );
        assert_eq!(visualizer.session().history().last(), Some("Popped: 3"));
        assert!(visualizer
            .renderer()
            .last_frame()
            .unwrap()
            .contains("Popped 3"));
    }

    #[test]
    fn test_errors_become_messages() {
        let visualizer = run_script("pop; push x as string; push 5 as integer", false);
        let frames = visualizer.renderer().frames();
        assert!(frames[1].contains("Stack is empty"));
        assert!(frames[3].contains("Stack type locked to String"));
        assert_eq!(visualizer.session().stack().len(), 1);
    }

    #[test]
    fn test_animation_frames_are_rendered() {
        let visualizer = run_script("push 1", true);
        // welcome frame, 24 intermediate frames, final frame
        assert_eq!(visualizer.renderer().frames().len(), 26);
        assert!(visualizer.renderer().frames()[1].contains("pushing 1/25"));
    }

    #[test]
    fn test_select_kind_and_quit() {
        let visualizer = run_script("kind char; push z; quit; push y", false);
        let session = visualizer.session();
        assert_eq!(session.selected_kind(), ValueKind::Character);
        assert_eq!(
            session.stack().elements(),
            &[TypedValue::Character('z')]
        );
    }

    #[test]
    fn test_speed_command() {
        let visualizer = run_script("speed 9; speed 0", false);
        assert_eq!(visualizer.session().speed().level(), 9);
        assert!(visualizer
            .renderer()
            .last_frame()
            .unwrap()
            .contains("Speed must be between 1 and 10"));
    }
}
