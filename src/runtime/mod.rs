use clap::Parser;

use crate::cli::Args;
use crate::logging::init_logging;
use crate::playlist::PlaylistWriter;
use crate::progress::{Reporter, SilentReporter, TerminalReporter};

mod generate;
mod settings;

pub use generate::generate;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_level, args.log_file.as_deref());

    let settings = settings::load_settings();
    let format = args.format().unwrap_or(settings.playlist.format);
    let writer = PlaylistWriter::from_settings(&settings.playlist, format, args.append);

    let mut terminal;
    let mut silent;
    let reporter: &mut dyn Reporter = if args.quiet {
        silent = SilentReporter;
        &mut silent
    } else {
        terminal = TerminalReporter::stdout();
        &mut terminal
    };

    let written = generate(&args.dirs, &settings.library, &writer, &args.output, reporter)?;
    log::info!("Wrote {} entries to {}", written, args.output.display());
    Ok(())
}
