// SPDX-License-Identifier: MPL-2.0
use pizza_mania::app::{self, Flags};
use pizza_mania::logging;

const HELP: &str = "\
Pizza Mania, an animated restaurant showcase

USAGE:
  pizza_mania [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
                        [env: PIZZA_MANIA_CONFIG_DIR]
  --assets-dir <DIR>    Directory holding the images/ folder
                        [env: PIZZA_MANIA_ASSETS_DIR]
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    logging::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::debug!(?flags, "parsed command line");
    app::run(flags)
}
