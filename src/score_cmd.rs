//! Score command: read a river series, score it, and write the index output.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use naiad_io::{load_curve, read_series, write_indices};
use naiad_score::{ScoreCurves, score};

use crate::cli::ScoreArgs;
use crate::config::NaiadConfig;
use crate::convert;

/// Run the full scoring pipeline.
pub fn run(args: ScoreArgs) -> Result<()> {
    let _cmd = info_span!("score").entered();
    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: NaiadConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Resolve paths: CLI flags win over config
    let input = args
        .input
        .as_ref()
        .or(config.io.input.as_ref())
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config or use --input"))?;
    let output = args.output.as_ref().or(config.io.output.as_ref()).ok_or_else(|| {
        anyhow::anyhow!("no output path: set [io].output in config or use --output")
    })?;
    let curves_dir = args.curves_dir.as_ref().unwrap_or(&config.io.curves_dir);

    // 3. Build configs from TOML
    let reader_cfg = convert::build_series_reader_config(&config.io)?;
    let score_cfg =
        convert::build_score_config(&config.weights, &config.events, args.profile.as_deref())?;

    // 4. Read the river series
    info!(path = %input.display(), "reading river series");
    let series = read_series(input, &reader_cfg)
        .with_context(|| format!("failed to read series: {}", input.display()))?;

    // 5. Load response curves
    let c = &config.curves;
    let timing = load_curve(&curves_dir.join(&c.timing_file), &c.timing_x_col, &c.timing_col)
        .context("failed to load timing curve")?;
    let duration = load_curve(
        &curves_dir.join(&c.duration_file),
        &c.duration_x_col,
        &c.duration_col,
    )
    .context("failed to load duration curve")?;
    let dry = load_curve(&curves_dir.join(&c.dry_file), &c.dry_x_col, &c.dry_col)
        .context("failed to load dry-spell curve")?;
    let gwlevel = load_curve(
        &curves_dir.join(&c.gwlevel_file),
        &c.gwlevel_x_col,
        &c.gwlevel_col,
    )
    .context("failed to load groundwater level curve")?;
    let curves = ScoreCurves::new(timing, duration, dry, gwlevel).context("invalid curve set")?;

    // 6. Score the series
    let result = score(&series, &curves, &score_cfg).context("scoring failed")?;
    info!(n_days = result.len(), "series scored");

    // 7. Write index output
    let blended = args.blend.then(|| result.blended(&score_cfg));
    write_indices(
        output,
        series.dates(),
        result.surface_index(),
        result.gwlevel_index(),
        blended.as_deref(),
    )
    .with_context(|| format!("failed to write indices: {}", output.display()))?;
    info!(path = %output.display(), "index output written");

    Ok(())
}
