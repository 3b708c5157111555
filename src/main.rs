#![warn(clippy::pedantic)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::str_to_string)]
#![warn(clippy::unused_trait_names)]

mod config;

use std::io::Write as _;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;
use wintoast::{ActivationType, Audio, PowerShell, Scenario, render};

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Toast title
    title: String,

    /// Toast body
    message: Option<String>,

    /// Small text shown under the body
    #[arg(long)]
    attribution: Option<String>,

    /// Application user model id the toast is shown under (env WINTOAST_APP_ID)
    #[arg(long)]
    app_id: Option<String>,

    /// Logo image, as a URI or a local path
    #[arg(long, value_name = "URI|PATH")]
    icon: Option<String>,

    /// Crop the logo image to a circle
    #[arg(long)]
    circle: bool,

    /// Hero image, as a URI or a local path
    #[arg(long, value_name = "URI|PATH")]
    hero: Option<String>,

    /// Inline image, as a URI or a local path
    #[arg(long, value_name = "URI|PATH")]
    image: Option<String>,

    /// Sound cue, e.g. default, mail, looping-alarm2 or silent
    #[arg(long, value_name = "CUE")]
    audio: Option<Audio>,

    /// Loop the sound cue
    #[arg(long = "loop")]
    r#loop: bool,

    /// Keep the toast on screen longer
    #[arg(long)]
    long: bool,

    /// default, alarm, reminder or incoming-call
    #[arg(long)]
    scenario: Option<Scenario>,

    /// foreground, background, protocol or system
    #[arg(long)]
    activation_type: Option<ActivationType>,

    /// Arguments passed back when the toast is clicked
    #[arg(long, value_name = "ARGS")]
    launch: Option<String>,

    /// Button as content|arguments[|activationType] (can be specified multiple times)
    #[arg(long, value_name = "ACTION")]
    action: Vec<String>,

    /// Interpreter used to show the toast
    #[arg(long, value_name = "PROGRAM", default_value = PowerShell::PROGRAM)]
    interpreter: String,

    /// Print the script instead of running it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            if record.level() == log::Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
        })
        .init();

    if let Err(e) = run(&Args::parse()) {
        log::error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut notification = args.notification()?;

    if args.dry_run {
        notification.apply_defaults();
        print!("{}", render::script(&notification)?);
        return Ok(());
    }

    notification
        .send_with(&PowerShell::with_program(args.interpreter.clone()))
        .context("Failed to show toast")
}
