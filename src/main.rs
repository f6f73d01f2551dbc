// SPDX-License-Identifier: MPL-2.0
use notification_center::config;
use notification_center::logging;
use notification_center::notifications::{MemoryTarget, NotificationCenter};
use notification_center::playground::{self, Command};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
notification-center: console playground for the toast notification center

USAGE:
  notification-center [OPTIONS]

OPTIONS:
  --config-dir <DIR>            directory holding settings.toml
  --default-duration-ms <MS>    override the default toast duration (0 = persistent)
  -h, --help                    print this help";

struct Flags {
    config_dir: Option<PathBuf>,
    default_duration_ms: Option<u64>,
    unexpected: Vec<OsString>,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let default_duration_ms = args.opt_value_from_str("--default-duration-ms")?;
    Ok(Some(Flags {
        config_dir,
        default_duration_ms,
        unexpected: args.finish(),
    }))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let (mut config, warning) = config::load_with_override(flags.config_dir);
    logging::init(&config.logging);
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    if !flags.unexpected.is_empty() {
        tracing::warn!(unexpected = ?flags.unexpected, "ignoring unexpected arguments");
    }
    if let Some(ms) = flags.default_duration_ms {
        config.notifications.default_duration_ms = Some(ms);
    }

    let mut center = NotificationCenter::with_config(MemoryTarget::new(), &config.notifications);
    let container = center.container_id().to_string();
    center.initialize(&container);

    println!("{}", playground::USAGE);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(err) => {
                        tracing::error!("failed to read stdin: {err}");
                        return ExitCode::FAILURE;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        for output in playground::execute(&mut center, command) {
                            println!("{output}");
                        }
                    }
                    Err(err) => println!("{err} (try `help`)"),
                }
            }
            Some(id) = center.next_expired(), if center.pending_timers() > 0 => {
                println!("expired #{id}");
            }
        }
    }

    center.clear_all();
    ExitCode::SUCCESS
}
