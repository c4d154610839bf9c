//! Events command: detect flood events and report them as JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use naiad_events::{FloodEvent, detect_events};
use naiad_io::read_series;

use crate::cli::EventsArgs;
use crate::config::NaiadConfig;
use crate::convert;

/// One detected event with the calendar date of its first day.
#[derive(Serialize)]
struct EventRecord {
    start: String,
    #[serde(flatten)]
    event: FloodEvent,
}

/// Run event detection and write the events as JSON.
pub fn run(args: EventsArgs) -> Result<()> {
    let _cmd = info_span!("events").entered();
    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: NaiadConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Resolve input path
    let input = args
        .input
        .as_ref()
        .or(config.io.input.as_ref())
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config or use --input"))?;

    // 3. Build configs: a band preset wins over the [events] section
    let event_cfg = match args.band.as_deref() {
        Some(band) => convert::parse_parameter_band(band)?.event_config(),
        None => convert::build_event_config(&config.events),
    };
    let reader_cfg = convert::build_series_reader_config(&config.io)?;

    // 4. Read the river series
    info!(path = %input.display(), "reading river series");
    let series = read_series(input, &reader_cfg)
        .with_context(|| format!("failed to read series: {}", input.display()))?;

    // 5. Detect events
    let events = detect_events(series.flow(), &event_cfg).context("event detection failed")?;
    info!(n_events = events.len(), "flood events detected");

    // 6. Attach start dates and serialise
    let records: Vec<EventRecord> = events
        .iter()
        .map(|&event| EventRecord {
            start: series.dates()[event.index].to_string(),
            event,
        })
        .collect();
    let json = serde_json::to_string_pretty(&records).context("failed to serialise events")?;

    // 7. Write to the output path or stdout
    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write events: {}", path.display()))?;
            info!(path = %path.display(), "events written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
