use clap::Parser;
use paigow::domain::scoring::GameStatus;
use paigow::domain::state::Player;
use paigow::{AppError, GameFlowService, GameRules};
use tracing::{error, info};

mod telemetry;

/// Play one seeded computer-vs-computer game and log every settlement.
#[derive(Parser, Debug)]
#[command(name = "paigow", version, about)]
struct Args {
    /// Game seed; every deal is derived from it. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "house game")]
    name: String,

    /// Stop after this many deals even without a winner
    #[arg(long, default_value_t = 200)]
    max_deals: u32,
}

fn main() {
    telemetry::init_tracing();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!(code = %e.code(), error = %e, "Game failed");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let rules = GameRules::from_env()?;
    let service = GameFlowService::in_memory()?;
    let players = (0..rules.player_count)
        .map(|seat| Player::computer(seat as u8, format!("house-{seat}")))
        .collect();
    let game = service.create_game(&args.name, players, rules, args.seed)?;

    for _ in 0..args.max_deals {
        let dealt = service.deal_tiles(game.id, None)?;
        let version = dealt.final_version();
        let Some(outcome) = dealt.outcome else {
            // Only computer players, so every deal settles on the spot.
            return Err(AppError::internal("Deal did not settle".to_string()));
        };
        let deal_number = outcome.settlement.deal_number;
        for share in &outcome.settlement.players {
            info!(
                deal_number,
                player = share.player,
                results = ?share.results,
                points = share.points,
                "Settled"
            );
        }
        let scores = service.scores_as_of(game.id, deal_number)?;
        info!(deal_number, ?scores, "Scores");

        if let GameStatus::Won { winner } = outcome.status {
            info!(winner, deal_number, ?scores, "Winner");
            return Ok(());
        }
        service.advance_to_next_deal(game.id, Some(version))?;
    }

    info!(max_deals = args.max_deals, "No winner within the deal limit");
    Ok(())
}
