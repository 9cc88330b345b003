use proptest::prelude::*;
use rapid_luhn::scoring::cluster::{find_clusters, Cluster};
use rapid_luhn::{
    FrequencyAnalyzer, LuhnConfig, LuhnSummarizer, ScoringStrategy, StopwordFilter,
    ThresholdPolicy,
};

const VOCAB: &[&str] = &[
    "the", "a", "of", "fox", "hen", "owl", "river", "stone", "light", "storm", "bread", "lamp",
];

fn stopwords() -> StopwordFilter {
    StopwordFilter::from_list(&["the", "a", "of"])
}

/// Documents of 1..8 sentences, 1..12 words each, drawn from a small vocabulary
fn document() -> impl Strategy<Value = String> {
    let word = prop::sample::select(VOCAB);
    let sentence = prop::collection::vec(word, 1..12).prop_map(|words| {
        let mut s = words.join(" ");
        if let Some(first) = s.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        s.push('.');
        s
    });
    prop::collection::vec(sentence, 1..8).prop_map(|sentences| sentences.join(" "))
}

fn policy() -> impl Strategy<Value = ThresholdPolicy> {
    prop_oneof![
        Just(ThresholdPolicy::Mean),
        (0.05f64..=1.0).prop_map(|fraction| ThresholdPolicy::MaxFraction { fraction }),
    ]
}

fn strategy() -> impl Strategy<Value = ScoringStrategy> {
    prop_oneof![
        Just(ScoringStrategy::Clustered),
        Just(ScoringStrategy::WholeSentence)
    ]
}

proptest! {
    #[test]
    fn summarization_is_deterministic(
        doc in document(),
        k in 1usize..5,
        gap in 0usize..6,
        policy in policy(),
        scoring in strategy(),
    ) {
        let cfg = LuhnConfig::default()
            .with_summary_length(k)
            .with_max_gap(gap)
            .with_threshold_policy(policy)
            .with_scoring(scoring);
        let s = LuhnSummarizer::new(cfg).unwrap().with_stopword_filter(stopwords());

        let first = s.summarize(&doc);
        let second = s.summarize(&doc);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.kind(), b.kind()),
            _ => prop_assert!(false, "runs disagreed"),
        }
    }

    #[test]
    fn summary_is_bounded(doc in document(), k in 1usize..5, policy in policy()) {
        let cfg = LuhnConfig::default()
            .with_summary_length(k)
            .with_threshold_policy(policy);
        let s = LuhnSummarizer::new(cfg).unwrap().with_stopword_filter(stopwords());

        if let Ok(summary) = s.summarize(&doc) {
            prop_assert!(summary.sentences.len() <= k);
            prop_assert!(summary.sentences.len() <= summary.scores.len());
            prop_assert!(summary.scores.iter().all(|s| s.score > 0.0));
            // Selection order is descending score
            for pair in summary.sentences.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }

    #[test]
    fn stopwords_never_significant(doc in document(), policy in policy()) {
        let s = LuhnSummarizer::new(LuhnConfig::default().with_threshold_policy(policy))
            .unwrap()
            .with_stopword_filter(stopwords());

        if let Ok(summary) = s.summarize(&doc) {
            let filter = stopwords();
            prop_assert!(summary.significant_words.iter().all(|w| !filter.is_stopword(w)));
        }
    }

    #[test]
    fn frequency_ignores_token_order(
        words in prop::collection::vec(prop::sample::select(VOCAB), 1..40),
        policy in policy(),
    ) {
        let analyzer = FrequencyAnalyzer::new(policy);
        let mut reversed = words.clone();
        reversed.reverse();
        let mut sorted = words.clone();
        sorted.sort_unstable();

        let base = analyzer.analyze(words.iter().copied(), &stopwords());
        for other in [reversed, sorted] {
            let again = analyzer.analyze(other.iter().copied(), &stopwords());
            match (&base, again) {
                (Ok(a), Ok(b)) => {
                    prop_assert_eq!(&a.table, &b.table);
                    prop_assert_eq!(a.threshold, b.threshold);
                    prop_assert_eq!(a.significant_words(), b.significant_words());
                }
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "order changed the outcome"),
            }
        }
    }

    #[test]
    fn cluster_invariants(
        positions in prop::collection::btree_set(0usize..60, 1..15)
            .prop_map(|s| s.into_iter().collect::<Vec<_>>()),
        gap in 0usize..8,
    ) {
        let clusters = find_clusters(&positions, gap);

        let total: usize = clusters.iter().map(Cluster::count).sum();
        prop_assert_eq!(total, positions.len());
        for c in &clusters {
            prop_assert!(c.span() >= c.count());
            prop_assert!(c.count() >= 1);
            for pair in c.positions.windows(2) {
                prop_assert!(pair[1] - pair[0] <= gap);
            }
        }
        for pair in clusters.windows(2) {
            let last = *pair[0].positions.last().unwrap();
            let first = pair[1].positions[0];
            prop_assert!(first - last > gap);
        }
    }

    #[test]
    fn density_is_rewarded(count in 1usize..10, extra in 0usize..10, more in 1usize..10) {
        // Same count, wider span scores no higher
        let tight = Cluster { positions: (0..count).collect() };
        let mut wide_positions: Vec<usize> = (0..count).collect();
        if let Some(last) = wide_positions.last_mut() {
            *last += extra;
        }
        let wide = Cluster { positions: wide_positions };
        prop_assert!(tight.score() >= wide.score());

        // Same span, more significant words scores no lower
        let span = count + more;
        let sparse = Cluster { positions: vec![0, span - 1] };
        let dense = Cluster { positions: (0..span).collect() };
        prop_assert_eq!(sparse.span(), dense.span());
        prop_assert!(dense.score() >= sparse.score());
    }
}
