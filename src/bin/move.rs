use clap::Parser;
use log::info;

use duoku::agents::Agent;
use duoku::env::TurnRequest;
use duoku::game::GameState;
use duoku::logging;

#[derive(Debug, Parser)]
#[clap(version, about = "Compute a single move for a given turn.")]
struct Opts {
    /// Agent configuration.
    #[clap(long, default_value_t)]
    config: Agent,
    /// JSON turn request.
    #[clap(value_parser = parse_request)]
    request: TurnRequest,
    /// Time in ms that is subtracted from the game timeout.
    #[clap(long, default_value_t = 200)]
    latency: u64,
}

fn parse_request(s: &str) -> Result<TurnRequest, serde_json::Error> {
    serde_json::from_str(s)
}

#[tokio::main]
async fn main() {
    logging();

    let Opts {
        config,
        request,
        latency,
    } = Opts::parse();

    let state = GameState::from_request(&request);
    info!("{:?}", state.board);

    match config.step(&request, latency).await {
        Some(response) => info!("Step: {:?}", response),
        None => info!("Step: no legal move, forfeiting"),
    }
}
