//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{repl::ReplArgs, script::ScriptArgs, tui::TuiArgs};

#[derive(StructOpt)]
#[structopt(
    name = "stackvis",
    about = "An animated, type-locked stack you can push, pop and peek from the terminal"
)]
pub enum StackVisualizer {
    #[structopt(
        name = "repl",
        about = "Drive the stack with typed commands (`push 5`, `pop`, `peek`, ...). Type `help` inside the session for the full list. Animations play frame by frame unless `--no-animation` is given."
    )]
    Repl(ReplArgs),
    #[structopt(
        name = "tui",
        about = "Open the full-screen interface. Type a value and press Enter to push; F2 pops, F3 peeks, F4 clears, F5 toggles the theme, Tab changes the value kind and Up/Down change the animation speed."
    )]
    Tui(TuiArgs),
    #[structopt(
        name = "script",
        about = "Run a `;`-separated list of commands without interaction and print the final frame, e.g. `stackvis script \"push 1; push 2; pop\"`."
    )]
    Script(ScriptArgs),
}

impl crate::cli::commands::Command for StackVisualizer {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Repl(cmd),
            Tui(cmd),
            Script(cmd),
        }
    }
}
