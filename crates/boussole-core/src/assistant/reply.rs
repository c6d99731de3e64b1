//! Reply assembly: the ordered response pipeline

use std::sync::OnceLock;

use regex::Regex;

use crate::format::format_currency;
use crate::metrics::{completed_on, recent_average, savings_rate};
use crate::models::{
    new_id, ActionKind, AssistantAction, ChatMessage, ChatRole, GoalStatus,
};
use crate::random::RandomSource;

use super::intent::{detect_intent, Intent, IntentCategory, Topic};
use super::knowledge;
use super::AssistantContext;

const GREETING_KEYWORDS: &[&str] = &["bonjour", "salut", "hello", "coucou"];
const HELP_KEYWORDS: &[&str] = &["aide", "help", "que peux-tu faire"];

const ENCOURAGEMENTS: [&str; 3] = [
    "\n\n💪 Vous êtes sur la bonne voie !",
    "\n\n✨ Chaque petit pas compte !",
    "\n\n🌟 Je crois en vous !",
];
const ENCOURAGEMENT_PROBABILITY: f64 = 0.3;

/// Thresholds for the plain-sentence insight subset
const WEAK_SAVINGS_RATE: f64 = 10.0;
const STRONG_SAVINGS_RATE: f64 = 20.0;
const STUCK_GOAL_PROGRESS: f64 = 25.0;
const SLEEP_HOURS_TARGET: f64 = 7.0;
const LOW_MOOD_THRESHOLD: f64 = 3.0;
const RECENT_WINDOW: usize = 7;

fn amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(?:€|euros?)").expect("valid regex"))
}

/// Pull a currency amount out of free text; comma or dot decimal
/// separator. Anything unparseable is simply no amount.
pub fn parse_amount(message: &str) -> Option<f64> {
    let captures = amount_regex().captures(message)?;
    captures
        .get(1)?
        .as_str()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
}

/// Plain-sentence observations over the context, reusing a subset of
/// the advisor thresholds; appended to greeting replies
pub fn context_insights(ctx: &AssistantContext<'_>) -> Vec<String> {
    let mut insights = Vec::new();

    // With no income the rate is defined as 0, so the weak-savings
    // observation also covers the nothing-recorded-yet case
    let rate = savings_rate(ctx.transactions);
    if rate < WEAK_SAVINGS_RATE {
        insights.push(format!(
            "Votre taux d'épargne est faible ({:.1}%). Essayons d'identifier des économies possibles.",
            rate
        ));
    } else if rate >= STRONG_SAVINGS_RATE {
        insights.push(format!(
            "Excellent taux d'épargne de {:.1}% ! Vous êtes sur la bonne voie.",
            rate
        ));
    }

    let stuck = ctx
        .goals
        .iter()
        .filter(|g| g.status == GoalStatus::InProgress && g.progress < STUCK_GOAL_PROGRESS)
        .count();
    if stuck > 0 {
        insights.push(format!(
            "{} objectif(s) semblent bloqués. Voulez-vous qu'on les examine ensemble ?",
            stuck
        ));
    }

    if !ctx.habits.is_empty() {
        let completed = completed_on(ctx.habits, ctx.today);
        if (completed as f64) < ctx.habits.len() as f64 / 2.0 {
            insights.push(format!(
                "Vous n'avez complété que {}/{} habitudes aujourd'hui.",
                completed,
                ctx.habits.len()
            ));
        }
    }

    let avg_sleep = recent_average(ctx.health_metrics, RECENT_WINDOW, |m| m.sleep_hours);
    if avg_sleep > 0.0 && avg_sleep < SLEEP_HOURS_TARGET {
        insights.push(format!(
            "Votre moyenne de sommeil est de {:.1}h. Essayez de viser 7-8h.",
            avg_sleep
        ));
    }

    let avg_mood = recent_average(ctx.mood_entries, RECENT_WINDOW, |m| Some(m.mood as f64));
    if avg_mood > 0.0 && avg_mood < LOW_MOOD_THRESHOLD {
        insights.push(
            "Votre humeur semble basse ces derniers jours. Je suis là si vous voulez en parler."
                .to_string(),
        );
    }

    insights
}

/// Build the unexecuted action proposals for an action-worthy intent
pub fn propose_actions(intent: &Intent, message: &str) -> Vec<AssistantAction> {
    if !intent.needs_action {
        return Vec::new();
    }

    let amount = parse_amount(message);
    let mut actions = Vec::new();

    if intent.category == IntentCategory::Finance && intent.topic == Topic::Debt {
        actions.push(AssistantAction {
            kind: ActionKind::CreateGoal,
            data: serde_json::json!({
                "title": "Rembourser ma dette",
                "category": "finance",
                "priority": "high",
                "target_amount": amount,
            }),
            executed: false,
        });
    }

    if intent.category == IntentCategory::Finance && intent.topic == Topic::Savings {
        if let Some(amount) = amount {
            actions.push(AssistantAction {
                kind: ActionKind::CreateBudget,
                data: serde_json::json!({
                    "category": "savings",
                    "limit": amount,
                    "period": "monthly",
                }),
                executed: false,
            });
        }
    }

    if intent.category == IntentCategory::Goals {
        actions.push(AssistantAction {
            kind: ActionKind::CreateGoal,
            data: serde_json::json!({
                "title": "Nouvel objectif",
                "category": "personal",
            }),
            executed: false,
        });
    }

    actions
}

fn help_menu() -> String {
    String::from(
        "Je peux vous aider avec plusieurs aspects de votre vie :\n\n\
         💰 **Finances** - Budget, épargne, dettes, objectifs financiers\n\
         🎯 **Objectifs** - Définir, suivre et atteindre vos buts\n\
         ❤️ **Vie personnelle** - Habitudes, relations, événements\n\
         💼 **Carrière** - Projets, compétences, productivité\n\
         🏃 **Santé** - Sommeil, exercice, nutrition\n\
         🧠 **Bien-être mental** - Stress, motivation, bonheur\n\n\
         Posez-moi une question ou parlez-moi de vos préoccupations !",
    )
}

fn fallback_prompt() -> String {
    String::from(
        "Je comprends. Pouvez-vous me donner plus de détails sur ce qui vous préoccupe ?\n\n\
         Je peux vous aider avec :\n\
         • Vos finances et votre budget\n\
         • Vos objectifs de vie\n\
         • Votre santé et bien-être\n\
         • Votre productivité\n\n\
         N'hésitez pas à me poser des questions spécifiques !",
    )
}

/// Two distinct tip indices chosen without replacement
fn pick_two_tips(
    tips: &'static [&'static str],
    rng: &mut dyn RandomSource,
) -> Vec<&'static str> {
    let first = rng.index(tips.len());
    let mut second = rng.index(tips.len() - 1);
    if second >= first {
        second += 1;
    }
    vec![tips[first], tips[second]]
}

/// Run the whole pipeline for one utterance and return the assistant
/// message; synchronous, never errors
pub fn generate_reply(
    message: &str,
    ctx: &AssistantContext<'_>,
    rng: &mut dyn RandomSource,
) -> ChatMessage {
    let lower = message.to_lowercase();
    let intent = detect_intent(message);
    let insights = context_insights(ctx);
    let actions = propose_actions(&intent, message);

    let mut response;

    if GREETING_KEYWORDS.iter().any(|k| lower.contains(k)) {
        response = String::from(
            "Bonjour ! 👋 Je suis votre assistant personnel de gestion de vie. \
             Comment puis-je vous aider aujourd'hui ?\n\n",
        );
        if !insights.is_empty() {
            response.push_str("Voici ce que j'ai remarqué :\n");
            response.push_str(
                &insights
                    .iter()
                    .map(|i| format!("• {}", i))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
    } else if HELP_KEYWORDS.iter().any(|k| lower.contains(k)) {
        response = help_menu();
    } else if intent.category != IntentCategory::General {
        let tips = knowledge::tips(intent.category, intent.topic);
        response = format!(
            "Je comprends que vous vous intéressez à {}.\n\n",
            intent.topic.label()
        );
        if !tips.is_empty() {
            let chosen = pick_two_tips(tips, rng);
            response.push_str("Voici quelques conseils :\n");
            response.push_str(
                &chosen
                    .iter()
                    .map(|t| format!("• {}", t))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
            response.push_str("\n\n");
        }

        if intent.category == IntentCategory::Finance {
            if let Some(profile) = &ctx.profile {
                if let (Some(income), Some(expenses)) =
                    (profile.monthly_income, profile.monthly_expenses)
                {
                    let surplus = income - expenses;
                    response.push_str(&format!(
                        "D'après vos données, vous avez un surplus mensuel de {}. ",
                        format_currency(surplus)
                    ));
                    if surplus > 0.0 {
                        response
                            .push_str("C'est une bonne base pour atteindre vos objectifs !");
                    } else {
                        response.push_str(
                            "Nous devrions analyser vos dépenses pour trouver des économies.",
                        );
                    }
                }
            }
        }

        if !actions.is_empty() {
            response.push_str(
                "\n\nVoulez-vous que je crée un objectif ou un budget pour vous aider ?",
            );
        }
    } else {
        response = fallback_prompt();
    }

    // Independent of every branch above: occasional encouragement
    if rng.chance(ENCOURAGEMENT_PROBABILITY) {
        response.push_str(ENCOURAGEMENTS[rng.index(ENCOURAGEMENTS.len())]);
    }

    ChatMessage {
        id: new_id(),
        role: ChatRole::Assistant,
        content: response,
        timestamp: chrono::Utc::now(),
        actions: if actions.is_empty() {
            None
        } else {
            Some(actions)
        },
    }
}
