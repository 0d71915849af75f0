mod cli;
mod config;
mod library;
mod logging;
mod playlist;
mod progress;
mod runtime;
mod tags;
mod text;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
