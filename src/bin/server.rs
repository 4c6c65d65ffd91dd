use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{info, warn};
use warp::Filter;

use duoku::agents::Agent;
use duoku::env::{IndexResponse, TurnRequest, API_VERSION};
use duoku::logging;

pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = "duoku";

/// Runtime server configuration.
struct State {
    latency: u64,
    config: Agent,
}

#[derive(Debug, Parser)]
#[clap(version, about = "Anytime competitive sudoku move server.")]
struct Opt {
    /// IP and Port of the webserver.
    /// **Note**: Use the IP Address of your device if you want to access it
    /// from another device (`127.0.0.1` or `localhost` is private to your
    /// computer).
    #[clap(long, default_value = "127.0.0.1:5001")]
    host: SocketAddr,
    /// Time in ms that is subtracted from the game timeouts.
    #[clap(long, default_value_t = 100)]
    latency: u64,
    /// Default agent configuration.
    #[clap(long, default_value_t)]
    config: Agent,
}

#[tokio::main]
async fn main() {
    logging();

    let Opt {
        host,
        latency,
        config,
    } = Opt::parse();

    let state = Arc::new(State { latency, config });

    let index = warp::get().and(warp::path::end()).map(|| {
        warn!("index");
        warp::reply::json(&IndexResponse::new(API_VERSION, AUTHOR, PACKAGE_VERSION))
    });

    let start = warp::path("start")
        .and(warp::post())
        .and(warp::body::json::<TurnRequest>())
        .map(|request: TurnRequest| {
            warn!("start game {}", request.game.id);
            warp::reply()
        });

    let r#move = warp::path("move")
        .and(with_state(state.clone()))
        .and(warp::post())
        .and(warp::body::json::<TurnRequest>())
        .and_then(step);

    let end = warp::path("end")
        .and(warp::post())
        .and(warp::body::json::<TurnRequest>())
        .map(|request: TurnRequest| {
            warn!(
                "end game {} scores {:?}",
                request.game.id, request.scores
            );
            warp::reply()
        });

    warp::serve(index.or(start).or(r#move).or(end))
        .run(host)
        .await
}

fn with_state(
    state: Arc<State>,
) -> impl Filter<Extract = (Arc<State>,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

async fn step(state: Arc<State>, request: TurnRequest) -> Result<impl warp::Reply, Infallible> {
    warn!("move game {} player {}", request.game.id, request.you);

    let timer = Instant::now();
    let next_move = state.config.step(&request, state.latency).await;
    info!("response time {:?}ms", timer.elapsed().as_millis());

    Ok(warp::reply::json(&next_move))
}
