//! Advice and daily-plan command implementations

use anyhow::{anyhow, Result};

use boussole_core::advisor::{daily_plan, Advisor, AdvisorContext};
use boussole_core::models::{AdviceCategory, Priority};
use boussole_core::store::Store;

use super::today;

fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

pub fn cmd_advise(store: &Store, category: Option<&str>) -> Result<()> {
    let filter: Option<AdviceCategory> = category
        .map(|c| c.parse().map_err(|e: String| anyhow!(e)))
        .transpose()?;

    let today = today();
    let ctx = AdvisorContext::from_state(store.state(), &today);
    let mut advice = Advisor::new().evaluate_all(&ctx);
    if let Some(filter) = filter {
        advice.retain(|a| a.category == filter);
    }

    if advice.is_empty() {
        println!("✨ Rien à signaler pour le moment !");
        return Ok(());
    }

    println!();
    println!("💡 Conseils ({})", advice.len());
    println!("   ─────────────────────────────────────────────────────────────");
    for item in &advice {
        println!();
        println!(
            "  {} [{}] {}",
            priority_badge(item.priority),
            item.category.as_str(),
            item.title
        );
        println!("     {}", item.content);
        if let Some(actions) = &item.actions {
            for action in actions {
                println!("     → {}", action);
            }
        }
    }
    println!();

    Ok(())
}

pub fn cmd_plan(store: &Store) -> Result<()> {
    let today = today();
    let ctx = AdvisorContext::from_state(store.state(), &today);
    let plan = daily_plan(&ctx);

    println!();
    println!("📅 Plan du jour ({})", today);
    println!("   ─────────────────────────────────────────────────────────────");
    for (label, slots) in [
        ("🌅 Matin", &plan.morning),
        ("☀️ Après-midi", &plan.afternoon),
        ("🌙 Soir", &plan.evening),
    ] {
        println!();
        println!("  {}", label);
        for slot in slots {
            println!("     • {}", slot);
        }
    }
    println!();

    Ok(())
}
