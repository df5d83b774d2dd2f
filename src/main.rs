// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use iced_gallery::{config, observability};

const HELP: &str = "\
Iced Gallery - search and browse Pixabay images

USAGE:
  iced_gallery [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --config-dir <path>  Directory holding settings.toml
  --api-key <key>      Pixabay API key (overrides PIXABAY_API_KEY)
  -h, --help           Print this help
";

/// Splits the command line into flags and leftover arguments.
fn parse_flags(
    mut args: pico_args::Arguments,
) -> Result<(Flags, Vec<std::ffi::OsString>), pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        api_key: args.opt_value_from_str("--api-key")?,
    };
    Ok((flags, args.finish()))
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (flags, leftover) = match parse_flags(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    observability::init(config.general.log_level.as_deref());

    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unrecognized arguments");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting iced_gallery");

    app::run(flags, config, config_warning)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(|arg| std::ffi::OsString::from(*arg)).collect())
    }

    #[test]
    fn parses_every_flag() {
        let (flags, leftover) = parse_flags(args(&[
            "--lang",
            "fr",
            "--config-dir",
            "/tmp/gallery",
            "--api-key",
            "secret",
        ]))
        .unwrap();

        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/gallery"));
        assert_eq!(flags.api_key.as_deref(), Some("secret"));
        assert!(leftover.is_empty());
    }

    #[test]
    fn trailing_flag_without_value_is_an_error() {
        assert!(parse_flags(args(&["--lang", "fr", "--api-key"])).is_err());
    }

    #[test]
    fn unknown_arguments_are_returned_as_leftover() {
        let (flags, leftover) = parse_flags(args(&["extra"])).unwrap();

        assert!(flags.api_key.is_none());
        assert_eq!(leftover, vec![std::ffi::OsString::from("extra")]);
    }
}
