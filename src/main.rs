//! Airmouse - hand-gesture virtual mouse
//!
//! Reads hand-landmark frames from an external detector and drives the
//! system pointer from the recognized gestures.

use airmouse::app::cli::{Cli, Commands, ConfigAction};
use airmouse::app::config::Config;
use airmouse::detector::{DetectedFrame, FrameSource, JsonlFrameSource};
use airmouse::event::LoggingListener;
use airmouse::gesture::{GestureController, LogTrace, ScreenMap};
use anyhow::Context;
use std::io::BufReader;
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "os-pointer")]
use airmouse::driver::{EnigoDriver, PointerListener};

/// Frames per FPS log line
const FPS_WINDOW: u32 = 120;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    match cli.command {
        Commands::Run { input, dry_run } => {
            run_pointer(input.as_deref(), dry_run, &config)?;
        }
        Commands::Inspect { input } => {
            run_inspect(&input, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn build_controller(config: &Config) -> GestureController {
    let map = ScreenMap::new(
        config.camera.width,
        config.camera.height,
        config.screen.width,
        config.screen.height,
    );
    let bbox = map.interaction_box();
    info!(
        camera = format_args!("{}x{}", config.camera.width, config.camera.height),
        screen = format_args!("{}x{}", config.screen.width, config.screen.height),
        box_width = bbox.width(),
        box_height = bbox.height(),
        "interaction box computed"
    );

    let mut controller = GestureController::new(map);
    if config.gesture.log_classification {
        controller.set_trace(Box::new(LogTrace));
    }
    controller
}

fn run_pointer(input: Option<&Path>, dry_run: bool, config: &Config) -> anyhow::Result<()> {
    let mut controller = build_controller(config);
    attach_pointer_listener(&mut controller, config, dry_run)?;

    let mut source = open_source(input, config)?;
    let (frames, events) = frame_loop(&mut controller, source.as_mut())?;
    info!(frames, events, "frame stream ended");
    Ok(())
}

fn run_inspect(input: &Path, config: &Config) -> anyhow::Result<()> {
    let mut controller = build_controller(config);
    controller.set_trace(Box::new(LogTrace));
    controller
        .dispatcher_mut()
        .add_listener(Box::new(LoggingListener::default()));

    let mut source = JsonlFrameSource::from_path(input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let (frames, events) = frame_loop(&mut controller, &mut source)?;

    println!("{frames} frames, {events} events");
    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            let path = Config::default_path();
            if path.exists() && !force {
                anyhow::bail!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save(&path)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn attach_pointer_listener(
    controller: &mut GestureController,
    config: &Config,
    dry_run: bool,
) -> anyhow::Result<()> {
    if dry_run {
        info!("dry run: pointer moves will be logged, not executed");
        controller
            .dispatcher_mut()
            .add_listener(Box::new(LoggingListener::default()));
        return Ok(());
    }

    #[cfg(feature = "os-pointer")]
    {
        let driver = EnigoDriver::new()?;
        controller
            .dispatcher_mut()
            .add_listener(Box::new(PointerListener::new(
                driver,
                config.screen.width,
                config.screen.height,
            )));
        Ok(())
    }
    #[cfg(not(feature = "os-pointer"))]
    {
        let _ = config;
        tracing::warn!("built without the os-pointer feature; logging pointer moves instead");
        controller
            .dispatcher_mut()
            .add_listener(Box::new(LoggingListener::default()));
        Ok(())
    }
}

/// Process frames until the source is exhausted. Returns the number of
/// frames read and events dispatched.
fn frame_loop(
    controller: &mut GestureController,
    source: &mut dyn FrameSource,
) -> anyhow::Result<(u64, u64)> {
    let mut frames = 0u64;
    let mut events = 0u64;
    let mut window_start = Instant::now();
    let mut window_frames = 0u32;

    while let Some(frame) = source.next_frame()? {
        events += controller.process(Some(&frame)) as u64;
        frames += 1;
        window_frames += 1;

        if window_frames == FPS_WINDOW {
            let elapsed = window_start.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                debug!(fps = format_args!("{:.1}", f64::from(FPS_WINDOW) / elapsed), "frame rate");
            }
            window_start = Instant::now();
            window_frames = 0;
        }
    }

    Ok((frames, events))
}

fn open_source(input: Option<&Path>, config: &Config) -> anyhow::Result<Box<dyn FrameSource>> {
    if let Some(path) = input {
        info!(path = %path.display(), "reading frames from file");
        let source = JsonlFrameSource::from_path(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        return Ok(Box::new(source));
    }

    if let Some(command) = &config.detector.command {
        info!(command = %command, "spawning detector process");
        return Ok(Box::new(DetectorProcess::spawn(
            command,
            &config.detector.args,
        )?));
    }

    info!("reading frames from stdin");
    Ok(Box::new(JsonlFrameSource::new(std::io::stdin().lock())))
}

/// External detector subprocess emitting one JSON frame per line on stdout
struct DetectorProcess {
    child: Child,
    source: JsonlFrameSource<BufReader<ChildStdout>>,
}

impl DetectorProcess {
    fn spawn(command: &str, args: &[String]) -> anyhow::Result<Self> {
        let mut child = Command::new(command)
            .args(args)
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn detector: {command}"))?;
        let stdout = child
            .stdout
            .take()
            .context("detector process has no stdout")?;
        Ok(Self {
            child,
            source: JsonlFrameSource::new(BufReader::new(stdout)),
        })
    }
}

impl FrameSource for DetectorProcess {
    fn next_frame(&mut self) -> airmouse::Result<Option<DetectedFrame>> {
        self.source.next_frame()
    }
}

impl Drop for DetectorProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
