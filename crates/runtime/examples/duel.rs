//! Headless demo battle.
//!
//! Runs the built-in demo roster to completion, narrating events from
//! the bus. Useful for eyeballing the event stream:
//!
//! ```text
//! RUST_LOG=duel=info,runtime=debug cargo run --example duel
//! ```

use std::time::Duration;

use battle_core::{BattleConfig, BattleEvent, BattlePhase};
use runtime::{BattleRuntime, Topic};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "duel=info,runtime=info,battle_core=info".into()),
        )
        .init();

    let (player, enemy) = battle_content::demo_pets();
    let runtime = BattleRuntime::builder()
        .with_player(player)
        .with_enemy(enemy)
        .with_battle_config(BattleConfig {
            turn_end_delay_ms: 100,
            enemy_turn_delay_ms: 300,
        })
        .with_low_hp_frenzy("Maple Bloodline")
        .spawn()?;
    let handle = runtime.handle();

    // Narrate everything the UI would normally render.
    let mut receivers = handle
        .event_bus()
        .subscribe_multiple(&[Topic::Battle, Topic::Combatant, Topic::Status]);
    for (topic, mut rx) in receivers.drain() {
        tokio::spawn(async move {
            while let Ok(event) = rx.recv().await {
                narrate(topic, &event);
            }
        });
    }

    loop {
        let snapshot = handle.snapshot().await?;
        match snapshot.phase {
            BattlePhase::BattleOver => {
                let winner = [&snapshot.player, &snapshot.enemy]
                    .into_iter()
                    .find(|pet| !pet.is_dead())
                    .map(|pet| pet.name.clone())
                    .unwrap_or_else(|| "nobody".into());
                tracing::info!(%winner, "battle finished");
                break;
            }
            BattlePhase::PlayerTurn => {
                // Pick the first skill that still has PP.
                let index = snapshot
                    .player
                    .skills
                    .iter()
                    .position(|s| s.has_pp())
                    .unwrap_or(0);
                if let Err(error) = handle.use_skill(index).await {
                    tracing::warn!(%error, "input rejected");
                }
            }
            _ => {}
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    runtime.shutdown().await?;
    Ok(())
}

fn narrate(topic: Topic, event: &BattleEvent) {
    match event {
        BattleEvent::DamageDealt {
            defender,
            amount,
            label,
            critical,
            ..
        } => {
            let crit = if *critical { " crit!" } else { "" };
            tracing::info!(?topic, ?defender, amount, label = label.as_str(), "hit{crit}");
        }
        BattleEvent::HpChanged { id, current, max } => {
            tracing::info!(?topic, ?id, "hp {current}/{max}");
        }
        BattleEvent::Died { id } => tracing::info!(?topic, ?id, "down"),
        other => tracing::info!(?topic, event = ?other, "event"),
    }
}
