use std::{convert::Infallible, io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use fullbleed::{
    ImmersionConfig, ImmersionController, ImmersiveActivity, Lifecycle,
    common::{LifecycleEvent, LifecycleState, SdkVersion, WindowRequest},
    recording::{DisplayState, RecordingHost},
};
use serde::Serialize;

#[derive(Parser)]
struct Args {
    /// Platform API level to simulate
    #[arg(long, default_value_t = 34)]
    sdk: u32,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON object per line
    #[arg(long)]
    json: bool,

    /// create, start, resume, pause, stop, destroy or swipe
    #[arg(required = true, value_parser = parse_event)]
    events: Vec<SimEvent>,
}

#[derive(Debug, Clone, PartialEq)]
enum SimEvent {
    Lifecycle(LifecycleEvent),
    /// User swipes in from a screen edge
    Swipe,
}

fn parse_event(s: &str) -> Result<SimEvent, String> {
    match s {
        "swipe" => Ok(SimEvent::Swipe),
        _ => s
            .parse()
            .map(SimEvent::Lifecycle)
            .map_err(|e: &str| format!("{e}, or swipe")),
    }
}

#[derive(Debug, Serialize)]
struct Step {
    event: String,
    state: LifecycleState,
    requests: Vec<WindowRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    revealed: Option<bool>,
}

fn simulate(
    activity: &mut ImmersiveActivity,
    host: &mut RecordingHost,
    event: &SimEvent,
) -> anyhow::Result<Step> {
    host.window_mut().context("host has no window")?.take_requests();

    let (name, revealed) = match event {
        SimEvent::Lifecycle(lifecycle) => {
            activity.dispatch(host, lifecycle);
            (lifecycle.to_string(), None)
        }
        SimEvent::Swipe => {
            let window = host.window_mut().context("host has no window")?;
            ("swipe".to_owned(), Some(window.swipe_from_edge()))
        }
    };

    let requests = host.window_mut().context("host has no window")?.take_requests();

    Ok(Step {
        event: name,
        state: activity.state(),
        requests,
        revealed,
    })
}

fn main() -> anyhow::Result<()> {
    fullbleed::log::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ImmersionConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ImmersionConfig::default(),
    };

    let module = fullbleed::load_native_module(&config.native_library, |name| {
        tracing::info!("Simulating native module {name}");
        Ok::<_, Infallible>(())
    })
    .context("failed to load native module")?;

    tracing::debug!("Native module {} ready", module.name());

    let mut host = RecordingHost::new(SdkVersion(args.sdk));
    let mut activity = ImmersiveActivity::new((), ImmersionController::new(&config));
    let mut out = std::io::stdout().lock();

    for event in &args.events {
        let step = simulate(&mut activity, &mut host, event)?;

        if args.json {
            writeln!(out, "{}", serde_json::to_string(&step)?)?;
            continue;
        }

        writeln!(out, "{} -> {}", step.event, step.state)?;
        for request in &step.requests {
            writeln!(out, "  {request}")?;
        }
        match step.revealed {
            Some(true) => writeln!(out, "  system bars revealed")?,
            Some(false) => writeln!(out, "  nothing to reveal")?,
            None => {}
        }
    }

    let display: DisplayState = *host.window_ref().context("host has no window")?.display();

    if args.json {
        writeln!(out, "{}", serde_json::to_string(&serde_json::json!({ "display": display }))?)?;
    } else {
        writeln!(out, "display: {}", serde_json::to_string_pretty(&display)?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use fullbleed::common::{CutoutMode, InsetType, SystemBarsBehavior};

    use super::*;

    const POLICY: [WindowRequest; 4] = [
        WindowRequest::CutoutMode(CutoutMode::Always),
        WindowRequest::Hide(InsetType::SystemBars),
        WindowRequest::Hide(InsetType::DisplayCutout),
        WindowRequest::SystemBarsBehavior(SystemBarsBehavior::ShowTransientBarsBySwipe),
    ];

    fn run(sdk: u32, events: &[&str]) -> Vec<Step> {
        let mut host = RecordingHost::new(SdkVersion(sdk));
        let mut activity = ImmersiveActivity::new((), ImmersionController::default());

        events
            .iter()
            .map(|e| simulate(&mut activity, &mut host, &parse_event(e).unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn parse_events() {
        assert_eq!(parse_event("swipe").unwrap(), SimEvent::Swipe);
        assert_eq!(parse_event("resume").unwrap(), SimEvent::Lifecycle(LifecycleEvent::Resume));
        assert!(parse_event("minimize").unwrap_err().ends_with("or swipe"));
    }

    #[test]
    fn swipe_then_resume() {
        let steps = run(34, &["create", "start", "resume", "swipe", "resume"]);

        assert_eq!(steps[0].requests.len(), 5);
        assert!(steps[1].requests.is_empty());
        assert_eq!(steps[2].requests, POLICY);
        assert_eq!(steps[3].revealed, Some(true));
        assert!(steps[3].requests.is_empty());
        assert_eq!(steps[4].requests, POLICY);
        assert_eq!(steps[4].state, LifecycleState::Resumed);
    }

    #[test]
    fn legacy_platform_resume() {
        let steps = run(29, &["create", "resume"]);

        assert_eq!(steps[0].requests.len(), 5);
        assert!(steps[1].requests.is_empty());
    }

    #[test]
    fn step_format() {
        let steps = run(34, &["pause", "swipe"]);

        assert_eq!(
            serde_json::to_value(&steps[0]).unwrap(),
            serde_json::json!({ "event": "pause", "state": "paused", "requests": [] })
        );
        assert_eq!(
            serde_json::to_value(&steps[1]).unwrap(),
            serde_json::json!({
                "event": "swipe",
                "state": "paused",
                "requests": [],
                "revealed": false,
            })
        );
    }
}
