// SPDX-License-Identifier: MPL-2.0
use folio::app::{self, paths, Flags};
use folio::ui::theming::ThemeMode;

const HELP: &str = "\
Folio, a personal portfolio

USAGE:
  folio [OPTIONS]

OPTIONS:
  --config-dir <DIR>    Directory holding settings.toml (overrides FOLIO_CONFIG_DIR)
  --theme <light|dark>  Start with this theme; the saved preference is kept
  -h, --help            Print this help

ENVIRONMENT:
  FOLIO_CONFIG_DIR      Config directory override
  FOLIO_ASSETS_DIR      Directory holding img/ and docs/
  RUST_LOG, FOLIO_LOG   Log filter (default: folio=info)
";

fn parse_theme(value: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(value).ok_or_else(|| format!("expected light or dark, got {value:?}"))
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_fn("--theme", parse_theme)?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    folio::logging::init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
