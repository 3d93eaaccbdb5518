//! Closed vocabularies and token patterns used by the feature extractor.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

fn word_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

lazy_static! {
    /// Reporting verbs that commonly follow a speaker's name.
    pub static ref SPEAKER_VERBS: HashSet<&'static str> = word_set(&[
        "said", "told", "added", "denied", "warned", "noted", "says",
        "wrote", "argued", "claimed", "announced", "confirmed", "declared",
        "explained", "stated", "admitted", "replied", "responded",
        "suggested", "urged", "praised", "lamented", "blamed", "criticised",
        "criticized", "acknowledged", "insisted", "stressed", "pledged",
        "promised", "predicted", "repeated", "reported",
    ]);

    /// Verbs that typically take a person as their subject.
    pub static ref PERSON_VERBS: HashSet<&'static str> = word_set(&[
        "was", "has", "is", "will", "had", "hit", "gave", "scored",
        "won", "lost", "beat", "shot", "fired", "ran", "led", "did",
    ]);

    /// Lower-cased titles, roles and demonyms that precede a name.
    pub static ref TITLES: HashSet<&'static str> = word_set(&[
        // Political / government
        "president", "minister", "prime", "premier", "general", "secretary",
        "secretary-general", "vice-president", "chancellor", "senator",
        "governor", "ambassador", "commissioner", "prosecutor", "judge",
        "justice", "director", "director-general", "chairman",
        "speaker", "state", "finance", "affairs", "col", "colonel", "major",
        "sergeant", "captain", "mr", "mr.", "mrs.", "ms.", "sir",
        // Royalty / religious
        "king", "queen", "prince", "princess", "sheikh", "patriarch",
        "archbishop", "bishop", "lord", "rev.", "father", "sister", "brother",
        // Academic / professional
        "professor", "prof.", "doctor", "dr", "dr.", "lawyer", "detective",
        // Sports
        "champion", "seed", "top-seeded", "fifth-seed", "third-seeded",
        "seeded", "finalist", "runner-up", "winner", "coach", "manager",
        "midfielder", "striker", "defender", "forward", "winger", "goalkeeper",
        "singles", "doubles", "left-back", "centre", "lock", "batsman",
        // Demonyms
        "frenchman", "spaniard", "swede", "austrian", "german", "american",
        "african", "namibian", "indonesian", "canadian", "belgian", "moroccan",
        "briton", "czech", "argentine", "australian", "polish", "israeli",
        "iranian", "russian", "chinese", "japanese", "korean", "brazilian",
        // Misc roles
        "spokesman", "spokeswoman", "businessman", "policeman", "strongman",
        "actor", "aide", "adviser", "official", "chief", "head", "leader",
        "member", "veteran", "teenager", "fellow", "fellow-american",
    ]);

    /// Surname-linking particles such as "van" or "de".
    pub static ref PARTICLES: HashSet<&'static str> = word_set(&[
        "de", "van", "von", "del", "der", "le", "la", "di", "da",
    ]);

    // A single capital followed by a period, e.g. "J."
    pub(crate) static ref INITIAL_RE: Regex =
        Regex::new(r"^[A-Z]\.$").expect("Invalid initial regex");
    pub(crate) static ref DATE_RE: Regex =
        Regex::new(r"\d{4}-\d{2}-\d{2}").expect("Invalid date regex");
    pub(crate) static ref DATE_EXACT_RE: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid exact date regex");
    pub(crate) static ref RANKED_NUM_RE: Regex =
        Regex::new(r"^\d+\.$").expect("Invalid ranked number regex");

    // Character classes. Digits are decimal digits (Nd) only, and letters
    // are the L* categories, so numerals such as "Ⅳ" or "½" are neither.
    pub(crate) static ref DIGIT_RE: Regex = Regex::new(r"\p{Nd}").expect("Invalid digit regex");
    pub(crate) static ref DIGITS_RE: Regex =
        Regex::new(r"^\p{Nd}+$").expect("Invalid digits regex");
    pub(crate) static ref ALPHA_OR_SPACE_RE: Regex =
        Regex::new(r"^[\p{L}\s]*$").expect("Invalid alpha regex");
    pub(crate) static ref TITLECASE_RE: Regex =
        Regex::new(r"\p{Lt}").expect("Invalid titlecase regex");
}
