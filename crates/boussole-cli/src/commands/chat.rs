//! Assistant command implementations (chat, suggest)

use anyhow::Result;

use boussole_core::assistant::{generate_reply, quick_suggestions, AssistantContext};
use boussole_core::random::{RandomSource, SeededRandom, ThreadRandom};
use boussole_core::store::Store;

use super::today;

pub fn cmd_chat(store: &Store, message: &str, seed: Option<u64>) -> Result<()> {
    let today = today();
    let ctx = AssistantContext::from_state(store.state(), &today);

    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let reply = generate_reply(message, &ctx, rng.as_mut());

    // Brief pause so replies do not feel instantaneous in a terminal.
    if seed.is_none() {
        std::thread::sleep(std::time::Duration::from_millis(600));
    }

    println!();
    println!("🧭 {}", reply.content);
    println!();

    if let Some(actions) = &reply.actions {
        println!("   Actions proposées :");
        for action in actions {
            println!(
                "     → {} {}",
                action.kind.as_str(),
                serde_json::to_string(&action.data)?
            );
        }
        println!();
    }

    Ok(())
}

pub fn cmd_suggest() -> Result<()> {
    println!();
    println!("💬 Suggestions :");
    for suggestion in quick_suggestions() {
        println!("   • {}", suggestion);
    }
    println!();
    Ok(())
}
