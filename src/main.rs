// SPDX-License-Identifier: MPL-2.0
use iced_popups::app::{self, Flags};
use iced_popups::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_popups - modal and snackbar demo

USAGE:
  iced_popups [OPTIONS]

OPTIONS:
  --config-dir DIR        Directory holding settings.toml
  --theme MODE            light, dark or system
  -v, --verbose           Log debug events (RUST_LOG takes precedence)
  -h, --help              Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    tracing_init(verbose);

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_str::<_, ThemeMode>("--theme")?,
    })
}

fn tracing_init(verbose: bool) {
    let default_filter = if verbose {
        "iced_popups=debug"
    } else {
        "iced_popups=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
