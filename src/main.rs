//! Headless snake runner
//!
//! Reads direction commands from stdin, one per line, and prints every
//! published snapshot to stdout as a JSON line. Logs go to stderr.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snake_engine::{Command, Engine, GameConfig, SubscriptionError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snake_engine=info".into()),
        )
        .init();

    let config = GameConfig::from_env()?;
    let engine = Engine::start(config);

    // Print snapshots until the engine stops
    let mut subscription = engine.subscribe();
    let printer = tokio::spawn(async move {
        loop {
            match subscription.recv().await {
                Ok(snapshot) => println!("{}", snapshot.to_json()),
                Err(SubscriptionError::Lagged(n)) => warn!("Output lagged by {} snapshots", n),
                Err(SubscriptionError::Closed) => break,
            }
        }
    });

    info!("Commands: up/down/left/right, dx,dy or quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result?;
                info!("Interrupted");
                break;
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    // Keep playing in the last direction until interrupted
                    info!("Input closed");
                    stdin_open = false;
                    continue;
                };

                match Command::parse(&line) {
                    Some(Command::Turn(direction)) => engine.submit_direction(direction),
                    Some(Command::Vector(dx, dy)) => {
                        // Rejected vectors are logged by the engine
                        let _ = engine.submit_vector(dx, dy);
                    }
                    Some(Command::Quit) => break,
                    None => warn!("Unknown command: {:?}", line.trim()),
                }
            }
        }
    }

    let last = engine.shutdown().await?;
    printer.await?;
    info!("Final score {} after {} ticks", last.state.score, last.tick);

    Ok(())
}
