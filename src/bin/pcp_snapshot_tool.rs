use std::fs;
use std::path::PathBuf;

use dnf_pcp::api::{PcpEngine, PcpEngineConfig};
use dnf_pcp::core::{Field, Viewport};
use dnf_pcp::filter::CrossFilterEvent;
use dnf_pcp::render::NullRenderer;

#[derive(Debug)]
struct BrushArg {
    field: Field,
    low: f64,
    high: f64,
}

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    country: Option<String>,
    brushes: Vec<BrushArg>,
    viewport: Viewport,
}

fn main() {
    let _ = dnf_pcp::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;

    let config = PcpEngineConfig::new(args.viewport);
    let mut engine =
        PcpEngine::new(NullRenderer::default(), config).map_err(|err| err.to_string())?;
    let ticket = engine.begin_load();
    engine
        .complete_load(ticket, &raw)
        .map_err(|err| err.to_string())?;

    if let Some(country) = args.country {
        engine.apply_cross_filter_event(&CrossFilterEvent::CountrySelected { country });
    }
    for brush in &args.brushes {
        engine
            .set_brush_domain(brush.field, brush.low, brush.high)
            .map_err(|err| err.to_string())?;
    }
    engine.render().map_err(|err| err.to_string())?;

    let json = engine
        .snapshot_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    match args.output {
        Some(path) => fs::write(&path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    const USAGE: &str = "usage: pcp_snapshot_tool --input <path> [--output <path>] \
[--country <name>] [--brush <field>:<low>:<high>]... [--size <width>x<height>]";

    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut country = None::<String>;
    let mut brushes = Vec::new();
    let mut viewport = Viewport::new(1200, 600);

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value("--input")?)),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--country" => country = Some(value("--country")?),
            "--brush" => brushes.push(parse_brush(&value("--brush")?)?),
            "--size" => viewport = parse_size(&value("--size")?)?,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    let input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    Ok(CliArgs {
        input,
        output,
        country,
        brushes,
        viewport,
    })
}

fn parse_brush(raw: &str) -> Result<BrushArg, String> {
    let mut parts = raw.split(':');
    let (Some(key), Some(low), Some(high), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("brush `{raw}` must look like <field>:<low>:<high>"));
    };
    let field = Field::from_key(key).ok_or_else(|| format!("unknown field `{key}`"))?;
    let low = low
        .parse::<f64>()
        .map_err(|err| format!("invalid brush low `{low}`: {err}"))?;
    let high = high
        .parse::<f64>()
        .map_err(|err| format!("invalid brush high `{high}`: {err}"))?;
    Ok(BrushArg { field, low, high })
}

fn parse_size(raw: &str) -> Result<Viewport, String> {
    let (width, height) = raw
        .split_once('x')
        .ok_or_else(|| format!("size `{raw}` must look like <width>x<height>"))?;
    let width = width
        .parse::<u32>()
        .map_err(|err| format!("invalid width `{width}`: {err}"))?;
    let height = height
        .parse::<u32>()
        .map_err(|err| format!("invalid height `{height}`: {err}"))?;
    Ok(Viewport::new(width, height))
}
