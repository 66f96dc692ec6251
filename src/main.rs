use word_counter::config::{ServerConfig, USAGE};
use word_counter::counting::WordStore;
use word_counter::http::router;

use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let config = match ServerConfig::from_args(args.iter().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: {} {}", args[0], USAGE);
            eprintln!("Example: {} --bind 127.0.0.1:5000", args[0]);
            eprintln!(
                "Example: {} --bind 127.0.0.1:5000 --translations translations.json",
                args[0]
            );
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Normalization policy:
    let normalizer = config.build_normalizer()?;
    tracing::info!("Normalization policy: {:?}", config.policy);

    // 2. The one store shared by every request:
    let store = Arc::new(WordStore::new(normalizer));

    // 3. HTTP Router:
    let app = router(store);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
