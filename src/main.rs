// SPDX-License-Identifier: MPL-2.0
use iced_crop::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_crop [OPTIONS] [IMAGE]

IMAGE may be a file path, a file://, http(s):// or data: URL.

Options:
  --aspect <RATIO>      Target aspect ratio: 1.5, 3:2 or 3/2 (default 1)
  --output <FILE>       Write the JPEG here instead of printing a data URI
  --lang <LOCALE>       Interface language, e.g. en-US or fr
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let flags = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(message) => {
            eprintln!("error: {message}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

/// Parses the command line; `Ok(None)` means help was requested.
fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Flags>, String> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let aspect: Option<String> = args.opt_value_from_str("--aspect").map_err(|e| e.to_string())?;
    let aspect_ratio = match aspect {
        Some(raw) => parse_aspect(&raw)?,
        None => 1.0,
    };
    let output: Option<PathBuf> = args.opt_value_from_str("--output").map_err(|e| e.to_string())?;
    let lang: Option<String> = args.opt_value_from_str("--lang").map_err(|e| e.to_string())?;
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .map_err(|e| e.to_string())?;

    let mut rest = args.finish().into_iter();
    let image_url = rest
        .next()
        .map(|raw| {
            raw.into_string().map_err(|raw| {
                format!("image argument is not valid UTF-8: {}", raw.to_string_lossy())
            })
        })
        .transpose()?;
    if let Some(extra) = rest.next() {
        return Err(format!("unexpected argument {}", extra.to_string_lossy()));
    }

    Ok(Some(Flags {
        lang,
        image_url,
        aspect_ratio,
        output,
        config_dir,
    }))
}

/// Accepts `1.5`, `3:2` or `3/2`. The ratio must be finite and positive.
fn parse_aspect(raw: &str) -> Result<f32, String> {
    let invalid = || format!("invalid aspect ratio '{raw}'");
    let parse = |s: &str| s.trim().parse::<f32>().map_err(|_| invalid());

    let ratio = match raw.split_once([':', '/']) {
        Some((w, h)) => parse(w)? / parse(h)?,
        None => parse(raw)?,
    };
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(invalid())
    }
}
