// ABOUTME: Declarative rule tables for text insights
// ABOUTME: (predicate, effect) pairs evaluated in fixed order over case-folded text

use stratos_core::{preview, Role, User, MAX_KEYWORDS, SUMMARY_PREVIEW_CHARS};

use crate::types::{AnalysisResult, Sentiment};

/// Text prepared once for repeated substring checks
#[derive(Debug, Clone)]
pub struct ScannedText<'a> {
    raw: &'a str,
    folded: String,
}

impl<'a> ScannedText<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            folded: raw.to_lowercase(),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }
}

/// Condition under which a rule fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Exact substring
    Contains(String),
    /// Case-insensitive substring; the needle is stored lowercased
    ContainsFolded(String),
    /// Fires when any inner predicate fires
    AnyOf(Vec<Predicate>),
}

impl Predicate {
    pub fn contains(needle: impl Into<String>) -> Self {
        Predicate::Contains(needle.into())
    }

    pub fn contains_ignore_case(needle: impl AsRef<str>) -> Self {
        Predicate::ContainsFolded(needle.as_ref().to_lowercase())
    }

    pub fn any_of(predicates: Vec<Predicate>) -> Self {
        Predicate::AnyOf(predicates)
    }

    pub fn matches(&self, text: &ScannedText<'_>) -> bool {
        match self {
            Predicate::Contains(needle) => text.raw.contains(needle.as_str()),
            Predicate::ContainsFolded(needle) => text.folded.contains(needle.as_str()),
            Predicate::AnyOf(predicates) => predicates.iter().any(|p| p.matches(text)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule<E> {
    pub predicate: Predicate,
    pub effect: E,
}

impl<E> Rule<E> {
    pub fn new(predicate: Predicate, effect: E) -> Self {
        Self { predicate, effect }
    }
}

/// Ordered list of rules
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet<E> {
    rules: Vec<Rule<E>>,
}

impl<E> Default for RuleSet<E> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<E> RuleSet<E> {
    pub fn new(rules: Vec<Rule<E>>) -> Self {
        Self { rules }
    }

    /// Append a rule; it is evaluated after every existing rule
    pub fn push(&mut self, rule: Rule<E>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule<E>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Effect of the first rule that fires
    pub fn first_match(&self, text: &ScannedText<'_>) -> Option<&E> {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(text))
            .map(|rule| &rule.effect)
    }

    /// Effects of every rule that fires, in rule order
    pub fn all_matches(&self, text: &ScannedText<'_>) -> Vec<&E> {
        self.rules
            .iter()
            .filter(|rule| rule.predicate.matches(text))
            .map(|rule| &rule.effect)
            .collect()
    }
}

/// Per-role canned output
#[derive(Debug, Clone, PartialEq)]
pub struct RoleTemplate {
    /// Appended to every analysis after the rule-driven items
    pub action_items: Vec<String>,
    pub positive_detail: String,
    pub negative_detail: String,
    pub neutral_detail: String,
}

impl RoleTemplate {
    pub fn sentiment_detail(&self, sentiment: Sentiment) -> &str {
        match sentiment {
            Sentiment::Positive => &self.positive_detail,
            Sentiment::Negative => &self.negative_detail,
            Sentiment::Neutral => &self.neutral_detail,
        }
    }
}

/// Complete rule configuration used by the insight service
#[derive(Debug, Clone, PartialEq)]
pub struct InsightRules {
    pub sentiment: RuleSet<Sentiment>,
    pub keywords: RuleSet<String>,
    pub action_items: RuleSet<String>,
    pub manager: RoleTemplate,
    pub team_member: RoleTemplate,
    pub max_keywords: usize,
}

impl Default for InsightRules {
    fn default() -> Self {
        Self {
            sentiment: standard_sentiment_rules(),
            keywords: standard_keyword_rules(),
            action_items: standard_action_item_rules(),
            manager: RoleTemplate {
                action_items: strings(&["Prepare executive summary", "Schedule stakeholder review"]),
                positive_detail: "Favorable for business growth".to_string(),
                negative_detail: "Requires executive attention".to_string(),
                neutral_detail: "Needs further evaluation".to_string(),
            },
            team_member: RoleTemplate {
                action_items: strings(&[
                    "Create technical specifications",
                    "Estimate implementation effort",
                ]),
                positive_detail: "Technically feasible".to_string(),
                negative_detail: "Significant technical challenges".to_string(),
                neutral_detail: "Requires technical assessment".to_string(),
            },
            max_keywords: MAX_KEYWORDS,
        }
    }
}

impl InsightRules {
    pub fn template(&self, role: Role) -> &RoleTemplate {
        match role {
            Role::Manager => &self.manager,
            Role::TeamMember => &self.team_member,
        }
    }

    pub fn sentiment_of(&self, text: &ScannedText<'_>) -> Sentiment {
        self.sentiment
            .first_match(text)
            .copied()
            .unwrap_or(Sentiment::Neutral)
    }

    /// Focus areas first, then vocabulary hits; unique, capped at `max_keywords`
    pub fn keywords_for(&self, text: &ScannedText<'_>, user: &User) -> Vec<String> {
        let candidates = user
            .analysis_preferences
            .focus_areas
            .iter()
            .chain(self.keywords.all_matches(text));

        let mut keywords: Vec<String> = Vec::new();
        for candidate in candidates {
            if keywords.len() >= self.max_keywords {
                break;
            }
            if !keywords.contains(candidate) {
                keywords.push(candidate.clone());
            }
        }
        keywords
    }

    /// Rule-table hits followed by the role's fixed items, unique
    pub fn action_items_for(&self, text: &ScannedText<'_>, role: Role) -> Vec<String> {
        let candidates = self
            .action_items
            .all_matches(text)
            .into_iter()
            .chain(self.template(role).action_items.iter());

        let mut items: Vec<String> = Vec::new();
        for candidate in candidates {
            if !items.contains(candidate) {
                items.push(candidate.clone());
            }
        }
        items
    }

    /// Deterministic analysis of `text` from `user`'s perspective
    pub fn evaluate(&self, text: &str, user: &User) -> AnalysisResult {
        let scanned = ScannedText::new(text);
        let sentiment = self.sentiment_of(&scanned);

        AnalysisResult {
            summary: summary_for(user, text),
            keywords: self.keywords_for(&scanned, user),
            sentiment,
            sentiment_detail: self.template(user.role).sentiment_detail(sentiment).to_string(),
            action_items: self.action_items_for(&scanned, user.role),
        }
    }
}

/// Role-specific summary quoting the start of the text
pub fn summary_for(user: &User, text: &str) -> String {
    let excerpt = preview(text, SUMMARY_PREVIEW_CHARS);
    match user.role {
        Role::Manager => format!("From {}'s leadership perspective: {}...", user.name, excerpt),
        Role::TeamMember => format!("Technical analysis by {}: {}...", user.name, excerpt),
    }
}

/// "!" or "great" reads positive; "problem" or "concern" negative
pub fn standard_sentiment_rules() -> RuleSet<Sentiment> {
    RuleSet::new(vec![
        Rule::new(
            Predicate::any_of(vec![
                Predicate::contains("!"),
                Predicate::contains_ignore_case("great"),
            ]),
            Sentiment::Positive,
        ),
        Rule::new(
            Predicate::any_of(vec![
                Predicate::contains_ignore_case("problem"),
                Predicate::contains_ignore_case("concern"),
            ]),
            Sentiment::Negative,
        ),
    ])
}

/// Vocabulary of trigger words and the topic each one reports
pub fn standard_keyword_rules() -> RuleSet<String> {
    table(&[
        ("cost", "budget"),
        ("technical", "architecture"),
        ("client", "requirements"),
        ("integration", "integration"),
        ("performance", "performance"),
        ("budget", "budget"),
        ("timeline", "schedule"),
        ("meeting", "stakeholder alignment"),
    ])
}

pub fn standard_action_item_rules() -> RuleSet<String> {
    table(&[
        ("meeting", "Schedule follow-up meeting"),
        ("client", "Update client requirements document"),
        ("technical", "Review technical architecture"),
        ("budget", "Review budget allocation"),
        ("cost", "Review budget allocation"),
        ("timeline", "Update project timeline"),
    ])
}

fn table(entries: &[(&str, &str)]) -> RuleSet<String> {
    RuleSet::new(
        entries
            .iter()
            .map(|(trigger, effect)| {
                Rule::new(Predicate::contains_ignore_case(trigger), effect.to_string())
            })
            .collect(),
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use stratos_core::AnalysisPreferences;

    fn user(role: Role, focus_areas: &[&str]) -> User {
        User {
            id: 1,
            name: "Sarah Johnson".to_string(),
            email: "sarah@company.com".to_string(),
            role,
            analysis_preferences: AnalysisPreferences {
                focus_areas: strings(focus_areas),
                sentiment_focus: "business impact".to_string(),
            },
        }
    }

    #[rstest]
    #[case("This is great!", Sentiment::Positive)]
    #[case("GREAT progress", Sentiment::Positive)]
    #[case("Ship it!", Sentiment::Positive)]
    #[case("We have a problem", Sentiment::Negative)]
    #[case("Client raised a CONCERN", Sentiment::Negative)]
    #[case("A problem, but great recovery", Sentiment::Positive)]
    #[case("Status update", Sentiment::Neutral)]
    #[case("", Sentiment::Neutral)]
    fn test_sentiment_first_match_wins(#[case] text: &str, #[case] expected: Sentiment) {
        let rules = InsightRules::default();
        assert_eq!(rules.sentiment_of(&ScannedText::new(text)), expected);
    }

    #[test]
    fn test_keywords_focus_areas_first_then_vocabulary() {
        let rules = InsightRules::default();
        let text = ScannedText::new("Client meeting about cost");
        let keywords = rules.keywords_for(&text, &user(Role::TeamMember, &["UX"]));

        assert_eq!(
            keywords,
            vec!["UX", "budget", "requirements", "stakeholder alignment"]
        );
    }

    #[test]
    fn test_keywords_deduplicated_and_capped() {
        let rules = InsightRules::default();
        let text = ScannedText::new(
            "cost budget technical client integration performance timeline meeting",
        );
        let keywords = rules.keywords_for(
            &text,
            &user(Role::TeamMember, &["performance", "performance", "UX"]),
        );

        assert_eq!(
            keywords,
            vec!["performance", "UX", "budget", "architecture", "requirements"]
        );
    }

    #[test]
    fn test_keywords_without_hits_are_focus_areas() {
        let rules = InsightRules::default();
        let text = ScannedText::new("Status update");
        let keywords =
            rules.keywords_for(&text, &user(Role::Manager, &["strategy", "ROI", "client relations"]));

        assert_eq!(keywords, vec!["strategy", "ROI", "client relations"]);
    }

    #[test]
    fn test_action_items_rule_order_then_role_items() {
        let rules = InsightRules::default();
        let text = ScannedText::new("Timeline slipped; the cost and budget need a meeting");
        let items = rules.action_items_for(&text, Role::Manager);

        assert_eq!(
            items,
            vec![
                "Schedule follow-up meeting",
                "Review budget allocation",
                "Update project timeline",
                "Prepare executive summary",
                "Schedule stakeholder review",
            ]
        );
    }

    #[test]
    fn test_action_items_team_member_template() {
        let rules = InsightRules::default();
        let items = rules.action_items_for(&ScannedText::new("nothing notable"), Role::TeamMember);

        assert_eq!(
            items,
            vec!["Create technical specifications", "Estimate implementation effort"]
        );
    }

    #[test]
    fn test_summary_templates() {
        let manager = user(Role::Manager, &[]);
        assert_eq!(
            summary_for(&manager, "Kickoff went well"),
            "From Sarah Johnson's leadership perspective: Kickoff went well..."
        );

        let member = user(Role::TeamMember, &[]);
        let long = "x".repeat(250);
        let summary = summary_for(&member, &long);
        assert_eq!(
            summary,
            format!("Technical analysis by Sarah Johnson: {}...", "x".repeat(100))
        );
    }

    #[test]
    fn test_summary_never_splits_multibyte_characters() {
        let text = "ü".repeat(120);
        let summary = summary_for(&user(Role::Manager, &[]), &text);
        assert!(summary.contains(&"ü".repeat(100)));
        assert!(!summary.contains(&"ü".repeat(101)));
    }

    #[test]
    fn test_sentiment_detail_by_role() {
        let rules = InsightRules::default();
        let result = rules.evaluate("We have a problem", &user(Role::Manager, &[]));
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.sentiment_detail, "Requires executive attention");

        let result = rules.evaluate("This is great!", &user(Role::TeamMember, &[]));
        assert_eq!(result.sentiment_detail, "Technically feasible");
    }

    #[test]
    fn test_rule_sets_are_extensible() {
        let mut rules = InsightRules::default();
        rules.keywords.push(Rule::new(
            Predicate::contains_ignore_case("Security"),
            "compliance".to_string(),
        ));
        rules.sentiment.push(Rule::new(
            Predicate::contains_ignore_case("delayed"),
            Sentiment::Negative,
        ));

        let result = rules.evaluate("security review delayed", &user(Role::Manager, &[]));
        assert_eq!(result.keywords, vec!["compliance"]);
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_predicate_case_sensitivity() {
        let text = ScannedText::new("Hello World");
        assert!(Predicate::contains("World").matches(&text));
        assert!(!Predicate::contains("world").matches(&text));
        assert!(Predicate::contains_ignore_case("WORLD").matches(&text));
        assert_eq!(text.raw(), "Hello World");
    }
}
