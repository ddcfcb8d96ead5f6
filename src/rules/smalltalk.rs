//! Built-in small-talk rules.
//!
//! Patterns run against *normalized* text: lower-case, no stop words, nouns in
//! singular form. Stop-word removal erases `how`, `are`, `you`, `me`, `about`,
//! `what` and friends, so "Tell me about pizza" arrives here as `tell pizza`
//! and "How are you feeling?" as `feeling`. Patterns are written against that
//! vocabulary, with `\b` boundaries so that `hi` does not fire inside `chips`.
//!
//! Order matters: `tell joke` is a joke request (rule 9) before it is a topic
//! request (rule 11), and `thanks goodbye` is a farewell before it is thanks.

use crate::Rule;

/// Farewells, shared by the farewell rule and the session's exit keywords.
pub const FAREWELLS: &[&str] = &["Goodbye! Have a great day!", "See you later!", "Bye for now!"];

/// Greeting: "hi", "Hello there", "Good morning".
fn rule_greeting() -> Rule {
    rule! {
        name: "greeting",
        patterns: [
            re!(r"\b(?:hi|hello|hey|greeting|howdy|hiya)\b"),
            re!(r"\bgood (?:morning|afternoon|evening)\b"),
        ],
        responses: &["Hello! How can I help you today?", "Hi there!", "Hey! What's up?"],
    }
}

/// Well-being: "How are you feeling?", "How's it going?".
fn rule_well_being() -> Rule {
    rule! {
        name: "well-being",
        patterns: [
            re!(r"\b(?:feeling|going)\b"),
            re!(r"^(?:well|alright|ok|okay)$"),
        ],
        responses: &[
            "I'm just a program, but I'm doing great!",
            "I'm functioning perfectly, thanks for asking!",
            "I'm an AI, so I don't have feelings, but I'm ready to assist!",
        ],
    }
}

/// Identity: "What's your name?", "Are you a bot?".
fn rule_identity() -> Rule {
    rule! {
        name: "identity",
        patterns: [
            re!(r"\bname\b"),
            re!(r"\b(?:identity|bot|chatbot|robot)\b"),
        ],
        responses: &[
            "I am a simple AI chatbot.",
            "You can call me ChatBot.",
            "I don't have a name, but I'm here to chat!",
        ],
    }
}

/// Capability: "Help me", "What are your capabilities?".
fn rule_capability() -> Rule {
    rule! {
        name: "capability",
        patterns: [
            re!(r"\bhelp\b"),
            re!(r"\b(?:capability|feature)\b"),
        ],
        responses: &[
            "I can answer simple questions and engage in basic conversation.",
            "I'm here to assist with your queries!",
            "Ask me anything! I'll do my best to help.",
        ],
    }
}

/// Farewell: "bye", "See you later", "Take care".
fn rule_farewell() -> Rule {
    rule! {
        name: "farewell",
        patterns: [
            re!(r"\b(?:bye|goodbye|farewell)\b"),
            re!(r"\bsee (?:later|soon)\b"),
            re!(r"\btake care\b"),
        ],
        responses: FAREWELLS,
    }
}

/// Gratitude: "Thank you", "thanks", "I appreciate it".
fn rule_gratitude() -> Rule {
    rule! {
        name: "gratitude",
        patterns: [
            re!(r"\b(?:thank|thanks|thx)\b"),
            re!(r"\bappreciate\b"),
        ],
        responses: &["You're welcome!", "No problem!", "Glad I could help!"],
    }
}

fn rule_weather() -> Rule {
    rule! {
        name: "weather",
        patterns: [
            re!(r"\bweather\b"),
            re!(r"\btemperature\b"),
            re!(r"\b(?:forecast|raining|sunny)\b"),
        ],
        responses: &[
            "I cannot access real-time weather data. I am just a simple chatbot.",
            "Sorry, I don't have information about the weather.",
        ],
    }
}

fn rule_time() -> Rule {
    rule! {
        name: "time",
        patterns: [
            re!(r"\btime\b"),
            re!(r"\bclock\b"),
        ],
        responses: &[
            "I cannot tell the current time accurately as I don't have real-time clock access. My responses are pre-programmed.",
            "My apologies, I can't provide the exact time.",
        ],
    }
}

fn rule_joke() -> Rule {
    rule! {
        name: "joke",
        patterns: [
            re!(r"\bjoke\b"),
            re!(r"\b(?:funny|laugh)\b"),
        ],
        responses: &[
            "Why don't scientists trust atoms? Because they make up everything!",
            "What do you call a fish with no eyes? Fsh!",
            "Parallel lines have so much in common. It's a shame they'll never meet.",
        ],
    }
}

fn rule_favorite_color() -> Rule {
    rule! {
        name: "favorite color",
        patterns: [
            re!(r"\bfavou?rite colou?r\b"),
        ],
        responses: &[
            "I don't have a favorite color, but I find the color of code quite beautiful!",
            "As an AI, I don't perceive colors.",
        ],
    }
}

/// Topic request with capture: "Tell me about pizza" (`tell pizza`),
/// "Explain black holes" (`explain black hole`).
fn rule_topic() -> Rule {
    rule! {
        name: "topic",
        patterns: [
            re!(r"\btell (.+)"),
            re!(r"\b(?:explain|define|describe) (.+)"),
            re!(r"\bknow (.+)"),
        ],
        responses: &[
            "I can try to tell you about {0}.",
            "What specifically about {0} would you like to know?",
            "That's an interesting topic! What about {0}?",
        ],
    }
}

/// The built-in rules, in priority order.
pub fn get() -> Vec<Rule> {
    vec![
        rule_greeting(),
        rule_well_being(),
        rule_identity(),
        rule_capability(),
        rule_farewell(),
        rule_gratitude(),
        rule_weather(),
        rule_time(),
        rule_joke(),
        rule_favorite_color(),
        rule_topic(),
    ]
}
