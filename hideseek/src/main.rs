//! Headless demo: a deductive computer seeker hunts for a randomly hidden
//! cell and the game log is printed. Pass a number to fix the RNG seed.

use hideseek_lib::{GameConfig, GameSession, Outcome, SeekerAi};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GameConfig {
        human_hides: false,
        ..GameConfig::computer_seeker(SeekerAi::Deductive)
    };
    if let Some(arg) = std::env::args().nth(1) {
        config.seed = Some(arg.parse()?);
    }

    let mut game = GameSession::new(config)?;
    game.start_round()?;
    let turns = game.play_computers()?;

    for (n, t) in turns.iter().enumerate() {
        println!("{:>3}  {:<9} {}", n + 1, t.feedback.to_string(), t.pos);
    }
    for line in game.log.recent(3) {
        println!("{line}");
    }
    match game.phase().outcome() {
        Some(Outcome::Found { .. }) => println!("found in {} turns", turns.len()),
        Some(Outcome::HiderEscaped) => {
            if let Some(route) = game.route_hint()? {
                println!("the hider was {} steps away", route.len() - 1);
            }
        }
        None => {}
    }
    Ok(())
}
