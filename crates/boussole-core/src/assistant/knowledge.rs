//! Fixed knowledge base: three tips per (category, topic) pair

use super::intent::{IntentCategory, Topic};

const FINANCE_BUDGETING: [&str; 3] = [
    "La règle 50/30/20 est un excellent point de départ : 50% pour les besoins, 30% pour les envies, 20% pour l'épargne.",
    "Créez un fonds d'urgence couvrant 3-6 mois de dépenses avant d'investir.",
    "Suivez vos dépenses pendant un mois pour identifier les fuites d'argent.",
];

const FINANCE_DEBT: [&str; 3] = [
    "La méthode avalanche (rembourser les dettes à taux élevé d'abord) minimise les intérêts.",
    "La méthode boule de neige (petites dettes d'abord) donne des victoires rapides pour la motivation.",
    "Consolidez vos dettes si vous pouvez obtenir un taux d'intérêt plus bas.",
];

const FINANCE_SAVINGS: [&str; 3] = [
    "Automatisez votre épargne dès réception du salaire.",
    "Commencez petit : même 50€/mois s'accumulent avec le temps.",
    "Utilisez des comptes séparés pour différents objectifs.",
];

const GOALS_SETTING: [&str; 3] = [
    "Utilisez la méthode SMART : Spécifique, Mesurable, Atteignable, Réaliste, Temporel.",
    "Décomposez les grands objectifs en étapes plus petites.",
    "Visualisez votre réussite chaque matin.",
];

const GOALS_MOTIVATION: [&str; 3] = [
    "Célébrez chaque petite victoire.",
    "Trouvez un partenaire de responsabilité.",
    "Rappelez-vous votre 'pourquoi' quand la motivation faiblit.",
];

const HEALTH_SLEEP: [&str; 3] = [
    "Visez 7-9 heures de sommeil par nuit.",
    "Maintenez des horaires réguliers, même le week-end.",
    "Évitez les écrans 1h avant le coucher.",
];

const HEALTH_EXERCISE: [&str; 3] = [
    "30 minutes d'activité modérée par jour suffisent.",
    "Trouvez une activité que vous aimez vraiment.",
    "La régularité compte plus que l'intensité.",
];

const HEALTH_NUTRITION: [&str; 3] = [
    "Buvez au moins 2L d'eau par jour.",
    "Mangez plus de légumes et de protéines.",
    "Préparez vos repas à l'avance pour éviter les mauvais choix.",
];

const PSYCHOLOGY_STRESS: [&str; 3] = [
    "Pratiquez la respiration profonde 5 minutes par jour.",
    "La méditation réduit significativement le stress.",
    "Identifiez vos déclencheurs de stress pour mieux les gérer.",
];

const PSYCHOLOGY_PRODUCTIVITY: [&str; 3] = [
    "Utilisez la technique Pomodoro : 25 min de travail, 5 min de pause.",
    "Faites les tâches difficiles le matin quand l'énergie est haute.",
    "Limitez les distractions : notifications, réseaux sociaux.",
];

const PSYCHOLOGY_WELLBEING: [&str; 3] = [
    "Pratiquez la gratitude quotidienne.",
    "Maintenez des connexions sociales fortes.",
    "Accordez-vous du temps pour les loisirs sans culpabilité.",
];

/// Tip list for a (category, topic) pair; empty for pairs outside the
/// knowledge base
pub fn tips(category: IntentCategory, topic: Topic) -> &'static [&'static str] {
    match (category, topic) {
        (IntentCategory::Finance, Topic::Budgeting) => &FINANCE_BUDGETING,
        (IntentCategory::Finance, Topic::Debt) => &FINANCE_DEBT,
        (IntentCategory::Finance, Topic::Savings) => &FINANCE_SAVINGS,
        (IntentCategory::Goals, Topic::Setting) => &GOALS_SETTING,
        (IntentCategory::Goals, Topic::Motivation) => &GOALS_MOTIVATION,
        (IntentCategory::Health, Topic::Sleep) => &HEALTH_SLEEP,
        (IntentCategory::Health, Topic::Exercise) => &HEALTH_EXERCISE,
        (IntentCategory::Health, Topic::Nutrition) => &HEALTH_NUTRITION,
        (IntentCategory::Psychology, Topic::Stress) => &PSYCHOLOGY_STRESS,
        (IntentCategory::Psychology, Topic::Productivity) => &PSYCHOLOGY_PRODUCTIVITY,
        (IntentCategory::Psychology, Topic::Wellbeing) => &PSYCHOLOGY_WELLBEING,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_pair_has_three_tips() {
        let pairs = [
            (IntentCategory::Finance, Topic::Budgeting),
            (IntentCategory::Finance, Topic::Debt),
            (IntentCategory::Finance, Topic::Savings),
            (IntentCategory::Goals, Topic::Setting),
            (IntentCategory::Goals, Topic::Motivation),
            (IntentCategory::Health, Topic::Sleep),
            (IntentCategory::Health, Topic::Exercise),
            (IntentCategory::Health, Topic::Nutrition),
            (IntentCategory::Psychology, Topic::Stress),
            (IntentCategory::Psychology, Topic::Productivity),
            (IntentCategory::Psychology, Topic::Wellbeing),
        ];
        for (category, topic) in pairs {
            assert_eq!(tips(category, topic).len(), 3, "{}/{}", category, topic);
        }
    }

    #[test]
    fn test_unknown_pair_is_empty() {
        assert!(tips(IntentCategory::General, Topic::General).is_empty());
        assert!(tips(IntentCategory::Finance, Topic::Sleep).is_empty());
    }
}
