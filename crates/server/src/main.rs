use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
    sync::Arc,
};

use axum::Router;
use clap::Parser;
use server::{configure_tracing, db, load_dotenv, routes, AppState, Cli};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, info, Level};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    load_dotenv()?;
    configure_tracing();

    let args = Cli::parse();
    debug!(?args);

    let (client, database) = db::connect(&args.mongo_url).await?;
    db::ensure_indexes(&database).await?;

    let socket = SocketAddr::new(IpAddr::from_str(&args.bind_addr)?, args.port);
    let listener = TcpListener::bind(socket).await?;
    info!("listening on {}", listener.local_addr()?);

    let static_dir = args.static_dir.clone();
    let state = AppState {
        db: database,
        args: Arc::new(args),
    };

    axum::serve(
        listener,
        Router::new()
            .nest("/api", routes::api_router())
            // index.html doubles as the landing page at /
            .nest_service("/", ServeDir::new(&static_dir))
            .layer(CorsLayer::permissive())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .with_state(state),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The client was acquired at startup and owns every pooled connection;
    // release it before the process goes away
    client.shutdown().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to install ctrl-c handler: {e}");
    } else {
        info!("shutting down");
    }
}
