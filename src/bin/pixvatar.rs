use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pixvatar::{AvatarSize, BatchOptions, ServeConfig, TimeKey};

#[derive(Parser, Debug)]
#[command(name = "pixvatar", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one avatar as a PNG.
    Render(RenderArgs),
    /// Render one avatar per line of an inputs file.
    Batch(BatchArgs),
    /// Serve `GET /avatar` over HTTP.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct DayArgs {
    /// Unix timestamp (seconds) selecting the UTC day.
    #[arg(long, conflicts_with = "day")]
    timestamp: Option<i64>,

    /// Explicit UTC day, `YYYY-MM-DD`.
    #[arg(long)]
    day: Option<TimeKey>,
}

impl DayArgs {
    fn resolve(self) -> anyhow::Result<TimeKey> {
        Ok(match (self.day, self.timestamp) {
            (Some(day), _) => day,
            (None, Some(secs)) => TimeKey::from_unix(secs)?,
            (None, None) => TimeKey::now(),
        })
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Identity string (email, username, ...). Leading/trailing whitespace is ignored.
    #[arg(long)]
    input: String,

    /// Side length: 64 or 128.
    #[arg(long, default_value_t = AvatarSize::S64)]
    size: AvatarSize,

    #[command(flatten)]
    day: DayArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Text file with one input per line; blank lines are skipped.
    #[arg(long)]
    inputs: PathBuf,

    /// Directory receiving `<digest>.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    #[arg(long, default_value_t = AvatarSize::S64)]
    size: AvatarSize,

    #[command(flatten)]
    day: DayArgs,

    /// Worker threads (default: one per core).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// TCP listener (e.g. 0.0.0.0:8080).
    #[arg(long)]
    listen: Option<SocketAddr>,

    /// Size used when a request omits `size`.
    #[arg(long)]
    default_size: Option<AvatarSize>,

    /// Route path of the avatar endpoint.
    #[arg(long)]
    route: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let time_key = args.day.resolve()?;
    let result = pixvatar::render(args.input.trim(), &time_key, args.size)?;
    pixvatar::write_png(&result.canvas, &args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    println!("hash {}", result.digest);
    println!("time_key {}", result.time_key);
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let time_key = args.day.resolve()?;
    let text = std::fs::read_to_string(&args.inputs)
        .with_context(|| format!("read inputs '{}'", args.inputs.display()))?;
    let inputs = pixvatar::read_inputs(&text);
    let opts = BatchOptions {
        size: args.size,
        threads: args.threads,
    };
    let (entries, stats) = pixvatar::render_batch(&inputs, &time_key, &args.out_dir, &opts)?;

    for entry in &entries {
        println!("{}\t{}", entry.digest, entry.input);
    }
    eprintln!(
        "wrote {} avatars for {} inputs ({} duplicates) to {}",
        stats.rendered,
        stats.inputs,
        stats.duplicates,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServeConfig::from_path(path)?,
        None => ServeConfig::default(),
    };
    if let Some(listen) = args.listen {
        config.listen = listen;
    }
    if let Some(size) = args.default_size {
        config.default_size = size;
    }
    if let Some(route) = args.route {
        config.route = route;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    runtime.block_on(pixvatar::serve::serve(config))
}
