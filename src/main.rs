use buildcraft_api::{RestApi, DEFAULT_PHASE, DEFAULT_TOP_K};
use buildcraft_storage::{
    CatalogManager, CatalogSource, DataDragonSource, SourceConfig, StaticSource,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Item recommendations for League of Legends champions
#[derive(Parser, Debug)]
#[command(name = "buildcraft")]
#[command(about = "Recommend items for League of Legends champions", long_about = None)]
struct Args {
    /// Data Dragon base URL
    #[arg(long, default_value = buildcraft_storage::source::DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Data Dragon locale
    #[arg(long, default_value = buildcraft_storage::source::DEFAULT_LOCALE, global = true)]
    locale: String,

    /// Pin a game-data version instead of using the latest
    #[arg(long, global = true)]
    game_version: Option<String>,

    /// HTTP timeout for catalog fetches
    #[arg(long, default_value_t = 30, global = true)]
    timeout_secs: u64,

    /// Read champion.json and item.json from this directory instead of the network
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Top items for a champion
    Recommend {
        champion: String,
        #[arg(long, default_value = DEFAULT_PHASE)]
        phase: String,
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },
    /// Show a champion's derived profile
    Analyze { champion: String },
    /// Compare the recommendations of two champions
    Compare {
        a: String,
        b: String,
        #[arg(long, default_value = DEFAULT_PHASE)]
        phase: String,
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },
    /// Aggregate view of a champion's recommendations
    Summary {
        champion: String,
        #[arg(long, default_value = DEFAULT_PHASE)]
        phase: String,
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },
    /// Run the REST API
    Serve {
        /// HTTP API port
        #[arg(long, default_value_t = 8080)]
        http_port: u16,
    },
}

impl Args {
    fn source_config(&self) -> SourceConfig {
        SourceConfig {
            base_url: self.base_url.clone(),
            locale: self.locale.clone(),
            version: self.game_version.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_query(manager: &CatalogManager, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Recommend { champion, phase, top_k } => {
            for (rank, rec) in manager.recommend(champion, phase, *top_k)?.iter().enumerate() {
                println!(
                    "{:>2}. {:<32} {:.4}  {:>5}g  {}",
                    rank + 1,
                    rec.name,
                    rec.score,
                    rec.item.cost,
                    rec.item.category
                );
            }
        }
        Command::Analyze { champion } => print_json(&manager.analyze(champion)?)?,
        Command::Compare { a, b, phase, top_k } => print_json(&manager.compare(a, b, phase, *top_k)?)?,
        Command::Summary { champion, phase, top_k } => {
            print_json(&manager.summarize(champion, phase, *top_k)?)?
        }
        Command::Serve { .. } => {}
    }
    Ok(())
}

async fn serve<S>(manager: Arc<CatalogManager>, source: Arc<S>, http_port: u16) -> anyhow::Result<()>
where
    S: CatalogSource + Send + Sync + 'static,
{
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(manager, source, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

async fn run<S>(args: &Args, source: S) -> anyhow::Result<()>
where
    S: CatalogSource + Send + Sync + 'static,
{
    let manager = Arc::new(CatalogManager::new());
    let summary = manager.load(&source).await?;
    info!(
        "Catalog {} loaded: {} champions, {} items",
        summary.version, summary.characters, summary.items
    );

    match &args.command {
        Command::Serve { http_port } => serve(manager, Arc::new(source), *http_port).await,
        command => run_query(&manager, command),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting buildcraft v{}", env!("CARGO_PKG_VERSION"));

    match &args.data_dir {
        Some(dir) => {
            info!("Data directory: {:?}", dir);
            run(&args, StaticSource::from_dir(dir)?).await
        }
        None => {
            let source = DataDragonSource::new(args.source_config())?;
            info!("Data Dragon: {} ({})", args.base_url, args.locale);
            run(&args, source).await
        }
    }
}
