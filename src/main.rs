// SPDX-License-Identifier: MPL-2.0
use owner_lens::app::{self, Flags};
use owner_lens::logging;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: owner_lens [--config-dir DIR] [--base-url URL] [SOURCE...]

SOURCE is a URL, a path resolved against the base URL,
or a named route: route:userinfo, route:owner/<id>.
";

fn main() -> ExitCode {
    logging::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("owner_lens: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "owner_lens exited with an error");
            ExitCode::FAILURE
        }
    }
}

/// Parses command-line flags. Returns `None` when help was requested.
fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let base_url = args.opt_value_from_str("--base-url")?;
    let sources = args
        .finish()
        .into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|_| pico_args::Error::NonUtf8Argument)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Flags {
        config_dir,
        base_url,
        sources,
    }))
}
