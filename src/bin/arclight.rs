use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arclight", version)]
struct Cli {
    /// Editor config JSON (defaults are used when omitted).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the filter registry as JSON.
    Tools,
    /// Print the export URL with filters encoded as a CDN transform.
    Export(ExportArgs),
    /// Print the preview overlay plan, or render it onto an image.
    Preview(PreviewArgs),
    /// Replay a recorded editor event script and print the resulting values.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct ValueArgs {
    /// Filter assignment `<filter>=<value>`; repeatable.
    #[arg(long = "set", value_name = "FILTER=VALUE")]
    set: Vec<String>,

    /// Filter values JSON (`{"brightness": 10, ...}`); `--set` wins on conflicts.
    #[arg(long)]
    values: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Delivery URL of the current image.
    #[arg(long)]
    url: String,

    #[command(flatten)]
    values: ValueArgs,

    /// Print the full outcome as JSON instead of just the URL.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    values: ValueArgs,

    /// Base image to render the preview onto.
    #[arg(long = "in", requires = "out")]
    in_path: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, requires = "in_path")]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// JSON array of editor events.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Also print the export URL for this delivery URL.
    #[arg(long)]
    url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => arclight::EditorConfig::load(path)?,
        None => arclight::EditorConfig::default(),
    };

    match cli.cmd {
        Command::Tools => cmd_tools(),
        Command::Export(args) => cmd_export(args),
        Command::Preview(args) => cmd_preview(args, &config),
        Command::Replay(args) => cmd_replay(args, config),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_values(args: &ValueArgs) -> anyhow::Result<arclight::FilterValues> {
    let mut values = match &args.values {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read values '{}'", path.display()))?;
            arclight::FilterValues::from_json_str(&text)
                .with_context(|| format!("parse values '{}'", path.display()))?
        }
        None => arclight::FilterValues::default(),
    };
    for assignment in &args.set {
        let (id, value) = arclight::parse_assignment(assignment)?;
        let stored = values.set(id, value);
        if stored != value {
            tracing::warn!(filter = %id, requested = value, stored, "value clamped to range");
        }
    }
    Ok(values)
}

fn cmd_tools() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&arclight::REGISTRY)?);
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let values = read_values(&args.values)?;
    let outcome = arclight::apply_filters(&args.url, &values);

    if !outcome.filters_applied() {
        eprintln!("warning: filters not applied; the original image will be used");
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.url);
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs, config: &arclight::EditorConfig) -> anyhow::Result<()> {
    let values = read_values(&args.values)?;

    let (Some(in_path), Some(out)) = (&args.in_path, &args.out) else {
        let plan = arclight::compose(&values);
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    };

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    arclight::preview_file(in_path, out, &values, &config.raster)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn read_events(path: &Path) -> anyhow::Result<Vec<arclight::EditorEvent>> {
    let f = File::open(path).with_context(|| format!("open events '{}'", path.display()))?;
    let r = BufReader::new(f);
    let events: Vec<arclight::EditorEvent> =
        serde_json::from_reader(r).with_context(|| "parse events JSON")?;
    Ok(events)
}

fn cmd_replay(args: ReplayArgs, config: arclight::EditorConfig) -> anyhow::Result<()> {
    let events = read_events(&args.in_path)?;
    let mut editor = arclight::FilterEditor::new(config)?;

    for (i, event) in events.into_iter().enumerate() {
        editor
            .handle(event)
            .with_context(|| format!("event #{i}"))?;
    }

    println!("{}", serde_json::to_string_pretty(editor.values())?);
    if let Some(url) = args.url {
        let outcome = editor.export(&url);
        if !outcome.filters_applied() {
            eprintln!("warning: filters not applied; the original image will be used");
        }
        println!("{}", outcome.url);
    }
    Ok(())
}
