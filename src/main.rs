// SPDX-License-Identifier: MPL-2.0
use snapdeck::app::{self, Flags};
use snapdeck::application::CapabilityCenter;
use snapdeck::domain::editing::{CropRect, FilterKind};
use snapdeck::media::{self, VideoPipeline};
use snapdeck::network::ApiClient;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
snapdeck

USAGE:
  snapdeck [GLOBAL OPTIONS] <COMMAND> [ARGS]

COMMANDS:
  render <INPUT> <OUTPUT> [--rotate DEG] [--filter NAME]... [--crop X,Y,W,H]
  trim <VIDEO> --start SECONDS --end SECONDS [--out-dir DIR]
  merge <VIDEO> <AUDIO> <OUTPUT>
  fetch <ENDPOINT> [--base-url URL]
  permissions

GLOBAL OPTIONS:
  --data-dir DIR     Override the data directory
  --config-dir DIR   Override the config directory
  -h, --help         Print help
";

#[derive(Debug)]
enum Command {
    Render {
        input: PathBuf,
        output: PathBuf,
        rotation: f32,
        filters: Vec<FilterKind>,
        crop: Option<CropRect>,
    },
    Trim {
        video: PathBuf,
        start: f64,
        end: f64,
        out_dir: Option<PathBuf>,
    },
    Merge {
        video: PathBuf,
        audio: PathBuf,
        output: PathBuf,
    },
    Fetch {
        endpoint: String,
        base_url: Option<String>,
    },
    Permissions,
}

fn parse_crop(value: &str) -> Result<CropRect, String> {
    let parts: Vec<f32> = value
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("{p}: {e}")))
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        [x, y, w, h] => Ok(CropRect::new(*x, *y, *w, *h)),
        _ => Err(format!("expected X,Y,W,H, got '{value}'")),
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn parse_command(args: &mut pico_args::Arguments) -> Result<Command, pico_args::Error> {
    let subcommand = args.subcommand()?.unwrap_or_default();
    let command = match subcommand.as_str() {
        "render" => {
            let rotation = args.opt_value_from_str("--rotate")?.unwrap_or(0.0);
            let filters = args
                .values_from_str::<_, String>("--filter")?
                .iter()
                .map(|name| FilterKind::from_id(name))
                .collect();
            let crop = args.opt_value_from_fn("--crop", parse_crop)?;
            Command::Render {
                input: args.free_from_str()?,
                output: args.free_from_str()?,
                rotation,
                filters,
                crop,
            }
        }
        "trim" => Command::Trim {
            start: args.value_from_str("--start")?,
            end: args.value_from_str("--end")?,
            out_dir: args.opt_value_from_str("--out-dir")?,
            video: args.free_from_str()?,
        },
        "merge" => Command::Merge {
            video: args.free_from_str()?,
            audio: args.free_from_str()?,
            output: args.free_from_str()?,
        },
        "fetch" => Command::Fetch {
            base_url: args.opt_value_from_str("--base-url")?,
            endpoint: args.free_from_str()?,
        },
        "permissions" => Command::Permissions,
        other => {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unknown command '{other}'"),
            })
        }
    };
    Ok(command)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let parsed = parse_flags(&mut args)
        .and_then(|flags| parse_command(&mut args).map(|command| (flags, command)));
    let (flags, command) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };
    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring extra arguments: {remaining:?}");
    }

    match run(command, flags).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, flags: Flags) -> Result<(), String> {
    let mut startup = app::startup(flags);

    match command {
        Command::Render {
            input,
            output,
            rotation,
            filters,
            crop,
        } => {
            let image = media::load_image(&input).map_err(|e| e.user_message())?;
            let rendered = media::render(&image, rotation, &filters, crop);
            rendered
                .save(&output)
                .map_err(|e| format!("Failed to write {}: {e}", output.display()))?;
            println!(
                "{} ({}x{})",
                output.display(),
                rendered.width(),
                rendered.height()
            );
        }
        Command::Trim {
            video,
            start,
            end,
            out_dir,
        } => {
            let mut pipeline = VideoPipeline::default();
            if let Some(dir) = out_dir {
                pipeline = pipeline.with_output_dir(dir);
            }
            let output = pipeline
                .trim(&video, start, end)
                .await
                .map_err(|e| e.user_message())?;
            println!("{}", output.display());
        }
        Command::Merge {
            video,
            audio,
            output,
        } => {
            let output = VideoPipeline::default()
                .merge(&video, &audio, &output)
                .await
                .map_err(|e| e.user_message())?;
            println!("{}", output.display());
        }
        Command::Fetch { endpoint, base_url } => {
            let base_url = base_url.unwrap_or(startup.config.network.backend_url);
            let client = ApiClient::new(&base_url).map_err(|e| e.user_message())?;
            let value: serde_json::Value = client
                .fetch_json(&endpoint)
                .await
                .map_err(|e| e.user_message())?;
            let pretty = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
            println!("{pretty}");
        }
        Command::Permissions => {
            // No native providers on this platform: every status reads unknown
            let report = CapabilityCenter::new().refresh_all().await;
            for (capability, status) in report.entries() {
                println!("{:<14} {status}", capability.name());
            }
            startup.state.capabilities = Some(report);
            if let Some(key) = startup.state.save() {
                log::warn!("Could not save state: {key}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arguments(args: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(args.iter().map(std::ffi::OsString::from).collect())
    }

    #[test]
    fn directory_flags_are_parsed() {
        let mut args = arguments(&["--data-dir", "/tmp/data", "--config-dir", "/tmp/cfg"]);
        let flags = parse_flags(&mut args).expect("valid flags");
        assert_eq!(flags.data_dir, Some("/tmp/data".to_string()));
        assert_eq!(flags.config_dir, Some("/tmp/cfg".to_string()));
    }

    #[test]
    fn directory_flag_without_value_is_an_error() {
        let mut args = arguments(&["--data-dir"]);
        assert!(parse_flags(&mut args).is_err());

        let mut args = arguments(&["permissions", "--config-dir"]);
        assert!(parse_flags(&mut args).is_err());
    }

    #[test]
    fn missing_directory_flags_default_to_none() {
        let mut args = arguments(&["permissions"]);
        let flags = parse_flags(&mut args).expect("valid flags");
        assert!(flags.data_dir.is_none());
        assert!(flags.config_dir.is_none());
        assert!(matches!(parse_command(&mut args), Ok(Command::Permissions)));
    }
}
