//! Keyword-based intent detection
//!
//! An ordered decision table scanned top to bottom; the first matching
//! category/topic pair wins. Keyword sets may overlap across
//! categories, so the scan order (finance, goals, health, psychology)
//! is part of the contract. Within finance, the debt and savings
//! sub-topics are checked before falling back to generic budgeting.

/// Broad category of a detected intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentCategory {
    Finance,
    Goals,
    Health,
    Psychology,
    General,
}

impl IntentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Goals => "goals",
            Self::Health => "health",
            Self::Psychology => "psychology",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sub-topic within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Budgeting,
    Debt,
    Savings,
    Setting,
    Motivation,
    Sleep,
    Exercise,
    Nutrition,
    Stress,
    Productivity,
    Wellbeing,
    General,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budgeting => "budgeting",
            Self::Debt => "debt",
            Self::Savings => "savings",
            Self::Setting => "setting",
            Self::Motivation => "motivation",
            Self::Sleep => "sleep",
            Self::Exercise => "exercise",
            Self::Nutrition => "nutrition",
            Self::Stress => "stress",
            Self::Productivity => "productivity",
            Self::Wellbeing => "wellbeing",
            Self::General => "general",
        }
    }

    /// French phrase naming the topic in the assistant's reply
    pub fn label(&self) -> &'static str {
        match self {
            Self::Budgeting => "la gestion du budget",
            Self::Debt => "le remboursement des dettes",
            Self::Savings => "l'épargne",
            Self::Setting => "la définition d'objectifs",
            Self::Motivation => "la motivation",
            Self::Sleep => "le sommeil",
            Self::Exercise => "l'exercice physique",
            Self::Nutrition => "la nutrition",
            Self::Stress => "la gestion du stress",
            Self::Productivity => "la productivité",
            Self::Wellbeing => "le bien-être",
            Self::General => "ce sujet",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub category: IntentCategory,
    pub topic: Topic,
    /// Whether this intent is worth proposing a side-effecting action
    pub needs_action: bool,
}

const FINANCE_KEYWORDS: &[&str] = &[
    "argent", "budget", "épargne", "dépense", "dette", "économie", "euro", "€", "salaire",
];
const DEBT_KEYWORDS: &[&str] = &["dette", "rembourser"];
const SAVINGS_KEYWORDS: &[&str] = &["épargne", "économiser", "mettre de côté"];
const GOALS_KEYWORDS: &[&str] = &["objectif", "but", "réussir", "atteindre", "motivation"];
const GOAL_CREATION_KEYWORDS: &[&str] = &["créer", "ajouter"];
const SLEEP_KEYWORDS: &[&str] = &["sommeil", "dormir", "fatigue"];
const EXERCISE_KEYWORDS: &[&str] = &["sport", "exercice", "musculation", "courir", "gym"];
const NUTRITION_KEYWORDS: &[&str] = &["manger", "régime", "nutrition", "poids", "eau"];
const STRESS_KEYWORDS: &[&str] = &["stress", "anxieux", "angoisse", "pression"];
const PRODUCTIVITY_KEYWORDS: &[&str] = &[
    "productif", "concentration", "focus", "procrastination", "travail",
];
const WELLBEING_KEYWORDS: &[&str] = &["heureux", "bonheur", "bien-être", "triste", "déprime"];

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| message.contains(k))
}

/// Classify one utterance; case-insensitive substring matching
pub fn detect_intent(message: &str) -> Intent {
    let lower = message.to_lowercase();

    // Finance first; sub-topic keywords also open the category so "je
    // veux économiser" lands on savings rather than the fallback
    if contains_any(&lower, FINANCE_KEYWORDS)
        || contains_any(&lower, DEBT_KEYWORDS)
        || contains_any(&lower, SAVINGS_KEYWORDS)
    {
        if contains_any(&lower, DEBT_KEYWORDS) {
            return Intent {
                category: IntentCategory::Finance,
                topic: Topic::Debt,
                needs_action: true,
            };
        }
        if contains_any(&lower, SAVINGS_KEYWORDS) {
            return Intent {
                category: IntentCategory::Finance,
                topic: Topic::Savings,
                needs_action: true,
            };
        }
        return Intent {
            category: IntentCategory::Finance,
            topic: Topic::Budgeting,
            needs_action: false,
        };
    }

    if contains_any(&lower, GOALS_KEYWORDS) {
        return Intent {
            category: IntentCategory::Goals,
            topic: Topic::Setting,
            needs_action: contains_any(&lower, GOAL_CREATION_KEYWORDS),
        };
    }

    if contains_any(&lower, SLEEP_KEYWORDS) {
        return Intent {
            category: IntentCategory::Health,
            topic: Topic::Sleep,
            needs_action: false,
        };
    }
    if contains_any(&lower, EXERCISE_KEYWORDS) {
        return Intent {
            category: IntentCategory::Health,
            topic: Topic::Exercise,
            needs_action: false,
        };
    }
    if contains_any(&lower, NUTRITION_KEYWORDS) {
        return Intent {
            category: IntentCategory::Health,
            topic: Topic::Nutrition,
            needs_action: false,
        };
    }

    if contains_any(&lower, STRESS_KEYWORDS) {
        return Intent {
            category: IntentCategory::Psychology,
            topic: Topic::Stress,
            needs_action: false,
        };
    }
    if contains_any(&lower, PRODUCTIVITY_KEYWORDS) {
        return Intent {
            category: IntentCategory::Psychology,
            topic: Topic::Productivity,
            needs_action: false,
        };
    }
    if contains_any(&lower, WELLBEING_KEYWORDS) {
        return Intent {
            category: IntentCategory::Psychology,
            topic: Topic::Wellbeing,
            needs_action: false,
        };
    }

    Intent {
        category: IntentCategory::General,
        topic: Topic::General,
        needs_action: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savings_precedes_generic_budgeting() {
        let intent = detect_intent("Comment économiser plus ?");
        assert_eq!(intent.category, IntentCategory::Finance);
        assert_eq!(intent.topic, Topic::Savings);
        assert!(intent.needs_action);
    }

    #[test]
    fn test_debt_precedes_savings() {
        let intent = detect_intent("Comment rembourser ma dette et épargner ?");
        assert_eq!(intent.topic, Topic::Debt);
        assert!(intent.needs_action);
    }

    #[test]
    fn test_generic_finance_falls_back_to_budgeting() {
        let intent = detect_intent("Parle-moi de mon budget");
        assert_eq!(intent.category, IntentCategory::Finance);
        assert_eq!(intent.topic, Topic::Budgeting);
        assert!(!intent.needs_action);
    }

    #[test]
    fn test_finance_takes_precedence_over_goals() {
        // "atteindre" is a goals keyword but "épargne" wins the scan
        let intent = detect_intent("Je veux atteindre mon objectif d'épargne");
        assert_eq!(intent.category, IntentCategory::Finance);
    }

    #[test]
    fn test_goal_creation_verbs_flag_action() {
        assert!(detect_intent("Je veux créer un objectif").needs_action);
        assert!(!detect_intent("Parlons de mes objectifs").needs_action);
    }

    #[test]
    fn test_health_topics_in_order() {
        assert_eq!(detect_intent("Je dors mal").topic, Topic::Sleep);
        assert_eq!(detect_intent("Quel sport choisir ?").topic, Topic::Exercise);
        assert_eq!(detect_intent("Que manger le soir ?").topic, Topic::Nutrition);
    }

    #[test]
    fn test_psychology_topics() {
        assert_eq!(detect_intent("Trop de stress en ce moment").topic, Topic::Stress);
        assert_eq!(
            detect_intent("Je procrastine, aide ma concentration").topic,
            Topic::Productivity
        );
        assert_eq!(detect_intent("Je me sens triste").topic, Topic::Wellbeing);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect_intent("BUDGET").category, IntentCategory::Finance);
    }

    #[test]
    fn test_unmatched_is_general() {
        let intent = detect_intent("Quelle heure est-il ?");
        assert_eq!(intent.category, IntentCategory::General);
        assert_eq!(intent.topic, Topic::General);
    }
}
