use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The standard English stop-word list (the 179 words of the NLTK `english`
/// corpus, including the apostrophe forms that the tokenizer never emits).
pub(crate) const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've", "you'll", "you'd",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "she's", "her", "hers",
    "herself", "it", "it's", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if",
    "or", "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below", "to", "from", "up", "down", "in", "out",
    "on", "off", "over", "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should",
    "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't",
    "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't",
    "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Irregular noun plurals (and a few regular ones the suffix rules would get
/// wrong) mapped to their base form.
pub(crate) static LEMMA_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // umlaut and -en plurals
        ("men", "man"),
        ("women", "woman"),
        ("gentlemen", "gentleman"),
        ("firemen", "fireman"),
        ("children", "child"),
        ("oxen", "ox"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("lice", "louse"),
        ("dice", "die"),
        // -ves
        ("wolves", "wolf"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("lives", "life"),
        ("leaves", "leaf"),
        ("halves", "half"),
        ("shelves", "shelf"),
        ("thieves", "thief"),
        ("loaves", "loaf"),
        ("calves", "calf"),
        ("elves", "elf"),
        ("selves", "self"),
        ("scarves", "scarf"),
        // classical plurals
        ("cacti", "cactus"),
        ("fungi", "fungus"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("bases", "basis"),
        ("phenomena", "phenomenon"),
        ("criteria", "criterion"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("appendices", "appendix"),
        // -ies words whose singular ends in -ie
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("zombies", "zombie"),
        ("rookies", "rookie"),
        ("brownies", "brownie"),
        ("hippies", "hippie"),
        ("selfies", "selfie"),
        // -ches / -ses words whose singular ends in -e
        ("aches", "ache"),
        ("headaches", "headache"),
        ("caches", "cache"),
        ("niches", "niche"),
        ("buses", "bus"),
        ("gases", "gas"),
        // -oes words whose singular ends in -oe
        ("shoes", "shoe"),
        ("toes", "toe"),
        ("canoes", "canoe"),
        ("foes", "foe"),
        ("hoes", "hoe"),
        ("oboes", "oboe"),
        // -us plurals of words ending in -u
        ("menus", "menu"),
        ("gurus", "guru"),
        ("emus", "emu"),
        ("tofus", "tofu"),
        ("haikus", "haiku"),
    ])
});

/// Words that look plural but are returned unchanged.
pub(crate) const INVARIANT_NOUNS: &[&str] = &[
    "afterwards",
    "alias",
    "always",
    "atlas",
    "besides",
    "bias",
    "canvas",
    "chaos",
    "christmas",
    "cosmos",
    "economics",
    "ethics",
    "kudos",
    "lens",
    "mathematics",
    "news",
    "nowadays",
    "pathos",
    "perhaps",
    "physics",
    "politics",
    "series",
    "sometimes",
    "species",
    "texas",
    "thanks",
    "towards",
    "whereas",
];
