// SPDX-License-Identifier: MPL-2.0
use notification_stack::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: notification_stack [OPTIONS]

Options:
  --capacity <N>         Maximum number of cards kept on screen
  --idle-timeout <SECS>  Seconds of inactivity before the stack hides
  --config <PATH>        Read settings from PATH instead of the user config
  -h, --help             Print this help
";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        capacity: args.opt_value_from_str("--capacity")?,
        idle_timeout_secs: args.opt_value_from_str("--idle-timeout")?,
        config_path: args.opt_value_from_str("--config")?,
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(flags)
}
