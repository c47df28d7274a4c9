use std::path::PathBuf;

use clap::Parser;
use question_catalog::{db::Db, names, services::questions::QuestionService, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// MongoDB connection string.
    #[arg(long, env = "MONGO_URL")]
    mongo_url: String,

    /// Database holding the question collection.
    #[arg(long, env = "DB_NAME", default_value = names::DEFAULT_DB_NAME)]
    db_name: String,

    /// Collection the questions are stored in.
    #[arg(long, env = "COLLECTION_NAME", default_value = names::DEFAULT_COLLECTION_NAME)]
    collection_name: String,

    /// JSON fixture served by `/load-sample-data`.
    #[arg(long, env = "SAMPLE_DATA_PATH", default_value = names::DEFAULT_SAMPLE_DATA_PATH)]
    sample_data_path: PathBuf,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:8000")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tower_http=debug,question_catalog=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.mongo_url, &args.db_name, &args.collection_name).await?;
    let state = AppState {
        questions: QuestionService::new(db),
        sample_data: args.sample_data_path,
    };
    let app = question_catalog::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}
