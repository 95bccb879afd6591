mod cli;

use structopt::StructOpt;

use cli::commands::Command;
use cli::StackVisualizer;

fn main() {
    env_logger::init();
    StackVisualizer::from_args().execute();
}
