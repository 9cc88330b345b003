//! Gap-bounded cluster scoring
//!
//! Significant-word positions are grouped into maximal runs where each
//! position is at most `max_gap` after the previous one. A cluster covers
//! every token between its first and last position, so
//! `score = count² / span` rewards short, dense runs over long sentences
//! with scattered significant words.

use super::{significant_positions, SentenceScorer};
use rustc_hash::FxHashSet;

/// Default largest position difference inside one cluster
pub const DEFAULT_MAX_GAP: usize = 4;

/// A run of significant-word positions within one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Ordered significant positions (never empty)
    pub positions: Vec<usize>,
}

impl Cluster {
    /// Number of significant words in the cluster
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// Inclusive token width: `last - first + 1`
    pub fn span(&self) -> usize {
        match (self.positions.first(), self.positions.last()) {
            (Some(first), Some(last)) => last.saturating_sub(*first) + 1,
            _ => 0,
        }
    }

    /// Luhn score `count² / span`
    pub fn score(&self) -> f64 {
        let span = self.span();
        if span == 0 {
            return 0.0;
        }
        let count = self.count() as f64;
        count * count / span as f64
    }
}

/// Partition ordered positions into maximal clusters.
///
/// A new cluster starts whenever two consecutive positions differ by more
/// than `max_gap`. With `max_gap == 0` every position is its own cluster.
///
/// `positions` must be strictly ascending, as produced by
/// [`significant_positions`](crate::scoring::significant_positions). A step
/// backwards is treated as a zero gap and never panics.
pub fn find_clusters(positions: &[usize], max_gap: usize) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    let mut current: Vec<usize> = Vec::new();

    for &pos in positions {
        if let Some(&prev) = current.last() {
            if pos.saturating_sub(prev) > max_gap {
                clusters.push(Cluster {
                    positions: std::mem::take(&mut current),
                });
            }
        }
        current.push(pos);
    }

    if !current.is_empty() {
        clusters.push(Cluster { positions: current });
    }

    clusters
}

/// Scores a sentence by its best cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterScorer {
    max_gap: usize,
}

impl Default for ClusterScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GAP)
    }
}

impl ClusterScorer {
    pub fn new(max_gap: usize) -> Self {
        Self { max_gap }
    }

    pub fn max_gap(&self) -> usize {
        self.max_gap
    }

    /// Clusters found in a sentence
    pub fn clusters(&self, tokens: &[String], significant: &FxHashSet<String>) -> Vec<Cluster> {
        find_clusters(&significant_positions(tokens, significant), self.max_gap)
    }
}

impl SentenceScorer for ClusterScorer {
    fn name(&self) -> &'static str {
        "clustered"
    }

    fn score(&self, tokens: &[String], significant: &FxHashSet<String>) -> Option<f64> {
        self.clusters(tokens, significant)
            .iter()
            .map(Cluster::score)
            .reduce(f64::max)
    }
}
