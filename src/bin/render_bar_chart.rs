use std::fs;
use std::io::Write;
use std::path::PathBuf;

use bar_chart_kit::render::SvgRenderer;
use bar_chart_kit::telemetry::init_default_tracing;
use bar_chart_kit::{BarChart, BarChartConfig};

const USAGE: &str =
    "usage: render_bar_chart --input <config.json> [--output <path>] [--format <svg|json>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Json,
}

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let payload = render_payload(&raw, args.format)?;

    match &args.output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => std::io::stdout()
            .write_all(payload.as_bytes())
            .map_err(|err| format!("failed to write stdout: {err}")),
    }
}

fn render_payload(raw: &str, format: OutputFormat) -> Result<String, String> {
    let config = BarChartConfig::from_json_str(raw).map_err(|err| err.to_string())?;
    let mut chart = BarChart::new(SvgRenderer::new(), config).map_err(|err| err.to_string())?;

    match format {
        OutputFormat::Svg => {
            chart.render().map_err(|err| err.to_string())?;
            chart
                .renderer_mut()
                .take_document()
                .ok_or_else(|| "svg renderer produced no document".to_owned())
        }
        OutputFormat::Json => {
            let frame = chart.build_render_frame().map_err(|err| err.to_string())?;
            frame.validate().map_err(|err| err.to_string())?;
            serde_json::to_string_pretty(&frame)
                .map_err(|err| format!("failed to serialize frame: {err}"))
        }
    }
}

fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut format = OutputFormat::Svg;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--format" => {
                format = match args.next().as_deref() {
                    Some("svg") => OutputFormat::Svg,
                    Some("json") => OutputFormat::Json,
                    Some(other) => return Err(format!("unknown format `{other}`")),
                    None => return Err("missing value for --format".to_owned()),
                };
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    Ok(CliArgs {
        input,
        output,
        format,
    })
}
