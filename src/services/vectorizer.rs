//! TF-IDF text vectorizer.
//!
//! Fits a vocabulary and inverse document frequencies over the catalog
//! documents, then projects any text into that fixed feature space.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Dense feature vector, one dimension per vocabulary term
pub type Vector = Vec<f32>;

/// English stop words excluded from the vocabulary
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can", "cannot",
    "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do", "done",
    "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else", "elsewhere",
    "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything", "everywhere",
    "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five", "for", "former",
    "formerly", "forty", "found", "four", "from", "front", "full", "further", "get", "give", "go",
    "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "ie",
    "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself", "just", "keep",
    "last", "latter", "least", "less", "ltd", "made", "many", "may", "me", "meanwhile", "might",
    "mill", "mine", "more", "moreover", "most", "mostly", "move", "much", "must", "my", "myself",
    "name", "namely", "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none",
    "noone", "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one",
    "only", "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
    "over", "own", "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see",
    "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that",
    "the", "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Vocabulary and idf weights fitted on a corpus.
///
/// Immutable once fitted; `embed` maps new text into the same space and drops
/// out-of-vocabulary terms.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// term → dimension index, assigned in sorted term order
    vocabulary: HashMap<String, usize>,
    /// idf weight per dimension
    idf: Vec<f32>,
}

impl TfIdfVectorizer {
    /// Fits the vectorizer on `documents` and returns it along with one
    /// vector per document, in input order.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<Vector>) {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        // Document frequency per term; BTreeMap keeps dimension order deterministic
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f32;
        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (idx, (term, df)) in doc_freq.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), idx);
            // Smoothed idf: as if one extra document contained every term
            idf.push(((1.0 + n) / (1.0 + df as f32)).ln() + 1.0);
        }

        let vectorizer = Self { vocabulary, idf };
        let vectors = tokenized
            .iter()
            .map(|tokens| vectorizer.weigh(tokens))
            .collect();

        tracing::debug!(
            documents = documents.len(),
            dimensions = vectorizer.dimensions(),
            "Fitted TF-IDF vectorizer"
        );

        (vectorizer, vectors)
    }

    /// Projects `text` into the fitted feature space
    pub fn embed(&self, text: &str) -> Vector {
        self.weigh(&tokenize(text))
    }

    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }

    fn weigh(&self, tokens: &[String]) -> Vector {
        let mut vector = vec![0.0f32; self.dimensions()];
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                vector[idx] += self.idf[idx];
            }
        }
        normalize(&mut vector);
        vector
    }
}

/// Lowercases and splits text into word tokens of two or more characters,
/// dropping stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| w.chars().count() > 1)
        .filter(|w| !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Scales a vector to unit length in place; zero vectors are left as-is
fn normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude(v: &[f32]) -> f32 {
        v.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    #[test]
    fn test_tokenize_lowercases_and_drops_stop_words() {
        let tokens = tokenize("The Dark Knight rises over Gotham!");
        assert_eq!(tokens, vec!["dark", "knight", "rises", "gotham"]);
    }

    #[test]
    fn test_tokenize_splits_punctuation_and_short_words() {
        let tokens = tokenize("Sci-Fi: A dream-sharing heist, 2010 x");
        assert_eq!(tokens, vec!["sci", "fi", "dream", "sharing", "heist", "2010"]);
    }

    #[test]
    fn test_tokenize_drops_filler_verbs_and_numerals() {
        assert!(tokenize("find the first two").is_empty());
        assert!(tokenize("Get, see, show!").is_empty());
        assert_eq!(tokenize("find home"), vec!["home"]);
    }

    #[test]
    fn test_vocabulary_spans_corpus_in_sorted_order() {
        let docs = ["space travel", "dream heist"];
        let (vectorizer, vectors) = TfIdfVectorizer::fit_transform(&docs);
        assert_eq!(vectorizer.dimensions(), 4);
        assert_eq!(vectorizer.vocabulary["dream"], 0);
        assert_eq!(vectorizer.vocabulary["travel"], 3);
        assert!(vectors.iter().all(|v| v.len() == 4));
    }

    #[test]
    fn test_rows_are_unit_length() {
        let docs = ["space travel space", "dream heist", "space dream"];
        let (_, vectors) = TfIdfVectorizer::fit_transform(&docs);
        for v in &vectors {
            assert!((magnitude(v) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_common_terms_weigh_less() {
        // "movie" appears everywhere, "heist" only once
        let docs = ["movie heist", "movie space", "movie dream"];
        let (vectorizer, vectors) = TfIdfVectorizer::fit_transform(&docs);
        let movie = vectorizer.vocabulary["movie"];
        let heist = vectorizer.vocabulary["heist"];
        assert!(vectors[0][heist] > vectors[0][movie]);
        assert!((vectorizer.idf[movie] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_embed_ignores_unknown_terms() {
        let docs = ["space travel", "dream heist"];
        let (vectorizer, vectors) = TfIdfVectorizer::fit_transform(&docs);
        let embedded = vectorizer.embed("Space travel with quantum blockchains");
        for (a, b) in embedded.iter().zip(&vectors[0]) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_embed_without_overlap_is_zero() {
        let (vectorizer, _) = TfIdfVectorizer::fit_transform(&["space travel"]);
        assert!(vectorizer.embed("xyzzy").iter().all(|&x| x == 0.0));
        assert!(vectorizer.embed("").iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_empty_corpus_is_degenerate_not_fatal() {
        let (vectorizer, vectors) = TfIdfVectorizer::fit_transform::<&str>(&[]);
        assert_eq!(vectorizer.dimensions(), 0);
        assert!(vectors.is_empty());
        assert!(vectorizer.embed("anything").is_empty());
    }

    #[test]
    fn test_stop_word_only_document_yields_zero_vector() {
        let (_, vectors) = TfIdfVectorizer::fit_transform(&["the and of", "space"]);
        assert!(vectors[0].iter().all(|&x| x == 0.0));
    }
}
