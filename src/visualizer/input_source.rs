use std::collections::VecDeque;

use crate::input_handler::{parse_script, read_command_line, CommandInput, InputError};

pub trait InputSource {
    fn next_command(&mut self) -> Result<CommandInput, InputError>;
}

/// Reads commands line by line from stdin.
pub struct LineInput;

impl InputSource for LineInput {
    fn next_command(&mut self) -> Result<CommandInput, InputError> {
        read_command_line()
    }
}

/// Replays a fixed list of commands, then exits.
pub struct ScriptInput {
    commands: VecDeque<CommandInput>,
}

impl ScriptInput {
    pub fn new(commands: Vec<CommandInput>) -> Self {
        Self {
            commands: commands.into(),
        }
    }

    pub fn parse(script: &str) -> Result<Self, InputError> {
        parse_script(script).map(Self::new)
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl InputSource for ScriptInput {
    fn next_command(&mut self) -> Result<CommandInput, InputError> {
        self.commands.pop_front().ok_or(InputError::UserExit)
    }
}
