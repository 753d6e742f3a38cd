//! Graph builders
//!
//! One builder per graph kind, each a single pass over a finite
//! document batch producing a fully built [`TagGraph`] plus a
//! [`BuildReport`]. Builders hold no handles to external systems; the
//! document sequence comes in as an argument and the graph goes out as
//! a value.
//!
//! Malformed documents (missing author, null tag list) are skipped and
//! counted, never fatal to the batch. Tags are deduplicated within a
//! document before aggregation, so every weight means "number of
//! documents".

use crate::document::{strip_sigil, Document};
use crate::graph::{GraphResult, Orientation, TagGraph};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::borrow::Borrow;
use tracing::{debug, info, warn};

/// Cap on distinct hashtags considered per document. Pair generation is
/// quadratic in the distinct-tag count, so adversarial documents with
/// hundreds of tags are clamped to their first `MAX_TAGS_PER_DOCUMENT`
/// tags and reported via [`BuildReport::truncated`].
pub const MAX_TAGS_PER_DOCUMENT: usize = 64;

/// Outcome counts for one builder pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Documents that contributed to aggregation
    pub processed: usize,
    /// Malformed documents skipped
    pub skipped: usize,
    /// Documents whose distinct-tag set was clamped to the cap
    pub truncated: usize,
}

impl BuildReport {
    fn absorb(&mut self, other: BuildReport) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.truncated += other.truncated;
    }
}

/// Build the undirected hashtag co-occurrence graph.
///
/// Every unordered pair of distinct hashtags within one document adds 1
/// to that pair's weight, so a pair's weight is the number of documents
/// in which both tags appear. Documents with fewer than two distinct
/// hashtags contribute nothing; documents with a null hashtag list are
/// skipped and counted.
pub fn build_cooccurrence_graph<I, D>(documents: I) -> (TagGraph, BuildReport)
where
    I: IntoIterator<Item = D>,
    D: Borrow<Document>,
{
    let mut graph = TagGraph::new(Orientation::Undirected);
    let mut report = BuildReport::default();

    for doc in documents {
        let doc = doc.borrow();
        let Some(hashtags) = doc.hashtags.as_ref() else {
            debug!(document = %doc.id, "skipping document with null hashtag list");
            report.skipped += 1;
            continue;
        };
        report.processed += 1;

        let mut distinct = distinct_tags(hashtags);
        if distinct.len() > MAX_TAGS_PER_DOCUMENT {
            warn!(
                document = %doc.id,
                tags = distinct.len(),
                cap = MAX_TAGS_PER_DOCUMENT,
                "capping pair generation for tag-heavy document"
            );
            distinct.truncate(MAX_TAGS_PER_DOCUMENT);
            report.truncated += 1;
        }
        if distinct.len() < 2 {
            continue;
        }

        for (i, a) in distinct.iter().enumerate() {
            for b in &distinct[i + 1..] {
                graph.add_edge(a, b, 1);
            }
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        processed = report.processed,
        skipped = report.skipped,
        truncated = report.truncated,
        "built hashtag co-occurrence graph"
    );
    (graph, report)
}

/// Build the directed mention interaction graph.
///
/// Each document with an author adds 1 to `(author, mentioned_user)`
/// for every distinct user it mentions; self-mentions count. Documents
/// missing an author or carrying a null mention list are skipped and
/// counted.
pub fn build_mention_graph<I, D>(documents: I) -> (TagGraph, BuildReport)
where
    I: IntoIterator<Item = D>,
    D: Borrow<Document>,
{
    let mut graph = TagGraph::new(Orientation::Directed);
    let mut report = BuildReport::default();

    for doc in documents {
        let doc = doc.borrow();
        let (Some(author), Some(mentions)) = (valid_author(doc), doc.mentions.as_ref()) else {
            debug!(document = %doc.id, "skipping document without author or mention list");
            report.skipped += 1;
            continue;
        };
        report.processed += 1;

        for target in distinct_tags(mentions) {
            graph.add_edge(author, target, 1);
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        processed = report.processed,
        skipped = report.skipped,
        "built mention interaction graph"
    );
    (graph, report)
}

/// Build the directed user-hashtag association (bipartite) graph.
///
/// Each document with an author adds 1 to `(author, hashtag)` for every
/// distinct hashtag it uses, so a weight is the number of documents by
/// that author using that tag.
pub fn build_association_graph<I, D>(documents: I) -> (TagGraph, BuildReport)
where
    I: IntoIterator<Item = D>,
    D: Borrow<Document>,
{
    let mut graph = TagGraph::new(Orientation::Directed);
    let mut report = BuildReport::default();

    for doc in documents {
        let doc = doc.borrow();
        let (Some(author), Some(hashtags)) = (valid_author(doc), doc.hashtags.as_ref()) else {
            debug!(document = %doc.id, "skipping document without author or hashtag list");
            report.skipped += 1;
            continue;
        };
        report.processed += 1;

        for tag in distinct_tags(hashtags) {
            graph.add_edge(author, tag, 1);
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        processed = report.processed,
        skipped = report.skipped,
        "built user-hashtag association graph"
    );
    (graph, report)
}

/// Merge independently built partial graphs into one, summing edge
/// weights. Equivalent to a single-pass build over the concatenated
/// batch for any partitioning, because canonicalization happens at
/// insert time.
pub fn merge_partials<I>(orientation: Orientation, parts: I) -> GraphResult<TagGraph>
where
    I: IntoIterator<Item = TagGraph>,
{
    let mut merged = TagGraph::new(orientation);
    for part in parts {
        merged.merge_from(&part)?;
    }
    Ok(merged)
}

/// Build the co-occurrence graph by partitioning the batch across the
/// rayon pool and merging the partial edge-weight maps. Same result as
/// [`build_cooccurrence_graph`]; worthwhile when pair generation
/// dominates.
pub fn build_cooccurrence_graph_partitioned(documents: &[Document]) -> (TagGraph, BuildReport) {
    if documents.is_empty() {
        return (TagGraph::new(Orientation::Undirected), BuildReport::default());
    }

    let chunk_size = documents
        .len()
        .div_ceil(rayon::current_num_threads().max(1));
    let parts: Vec<(TagGraph, BuildReport)> = documents
        .par_chunks(chunk_size)
        .map(|chunk| build_cooccurrence_graph(chunk))
        .collect();

    let mut graph = TagGraph::new(Orientation::Undirected);
    let mut report = BuildReport::default();
    for (part, part_report) in parts {
        graph
            .merge_from(&part)
            .expect("co-occurrence partials share orientation");
        report.absorb(part_report);
    }
    (graph, report)
}

/// Dedup tag tokens preserving first-appearance order, stripping the
/// `#`/`@` sigil and dropping empty tokens.
fn distinct_tags(tokens: &[String]) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    let mut distinct = Vec::new();
    for token in tokens {
        let tag = strip_sigil(token);
        if !tag.is_empty() && seen.insert(tag) {
            distinct.push(tag);
        }
    }
    distinct
}

fn valid_author(doc: &Document) -> Option<&str> {
    doc.author_id.as_deref().filter(|a| !a.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, author: Option<&str>, hashtags: Option<&[&str]>, mentions: Option<&[&str]>) -> Document {
        Document {
            id: id.to_string(),
            author_id: author.map(String::from),
            hashtags: hashtags.map(|h| h.iter().map(|s| s.to_string()).collect()),
            mentions: mentions.map(|m| m.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn test_duplicate_tag_does_not_pair_with_itself() {
        let docs = vec![doc("d1", Some("u1"), Some(&["#a", "#a", "#b"]), None)];
        let (graph, report) = build_cooccurrence_graph(&docs);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight("a", "b"), Some(1));
        assert_eq!(graph.edge_weight("a", "a"), None);
        assert_eq!(report.processed, 1);
    }

    #[test]
    fn test_single_tag_document_contributes_nothing() {
        let docs = vec![doc("d1", Some("u1"), Some(&["#solo"]), None)];
        let (graph, report) = build_cooccurrence_graph(&docs);

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(report.processed, 1);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_null_hashtag_list_is_skipped() {
        let docs = vec![
            doc("d1", Some("u1"), None, None),
            doc("d2", Some("u1"), Some(&["#a", "#b"]), None),
        ];
        let (graph, report) = build_cooccurrence_graph(&docs);

        assert_eq!(report.skipped, 1);
        assert_eq!(report.processed, 1);
        assert_eq!(graph.edge_weight("a", "b"), Some(1));
    }

    #[test]
    fn test_pair_generation_cap() {
        let many: Vec<String> = (0..200).map(|i| format!("#t{i:03}")).collect();
        let many_refs: Vec<&str> = many.iter().map(|s| s.as_str()).collect();
        let docs = vec![doc("d1", Some("u1"), Some(&many_refs), None)];

        let (graph, report) = build_cooccurrence_graph(&docs);
        assert_eq!(report.truncated, 1);
        assert_eq!(graph.node_count(), MAX_TAGS_PER_DOCUMENT);
        assert_eq!(
            graph.edge_count(),
            MAX_TAGS_PER_DOCUMENT * (MAX_TAGS_PER_DOCUMENT - 1) / 2
        );
    }

    #[test]
    fn test_self_mention_counts() {
        let docs = vec![doc("d1", Some("u1"), None, Some(&["@u1"]))];
        let (graph, _) = build_mention_graph(&docs);
        assert_eq!(graph.edge_weight("u1", "u1"), Some(1));
    }

    #[test]
    fn test_mention_graph_requires_author() {
        let docs = vec![
            doc("d1", None, None, Some(&["@u2"])),
            doc("d2", Some(""), None, Some(&["@u2"])),
            doc("d3", Some("u1"), None, Some(&["@u2"])),
        ];
        let (graph, report) = build_mention_graph(&docs);

        assert_eq!(report.skipped, 2);
        assert_eq!(report.processed, 1);
        assert_eq!(graph.edge_weight("u1", "u2"), Some(1));
    }

    #[test]
    fn test_association_weight_counts_documents() {
        let docs = vec![
            doc("d1", Some("u1"), Some(&["#a", "#a"]), None),
            doc("d2", Some("u1"), Some(&["#a"]), None),
        ];
        let (graph, _) = build_association_graph(&docs);

        // Duplicate within one document counts once
        assert_eq!(graph.edge_weight("u1", "a"), Some(2));
    }

    #[test]
    fn test_partitioned_build_matches_single_pass() {
        let docs: Vec<Document> = (0..50)
            .map(|i| {
                doc(
                    &format!("d{i}"),
                    Some("u1"),
                    Some(&[
                        format!("#t{}", i % 7).as_str(),
                        format!("#t{}", i % 5).as_str(),
                        "#common",
                    ]),
                    None,
                )
            })
            .collect();

        let (single, single_report) = build_cooccurrence_graph(&docs);
        let (partitioned, partitioned_report) = build_cooccurrence_graph_partitioned(&docs);

        assert_eq!(single, partitioned);
        assert_eq!(single_report, partitioned_report);
    }

    #[test]
    fn test_merge_partials_matches_concatenated_build() {
        let batch_a = vec![doc("d1", Some("u1"), Some(&["#a", "#b", "#c"]), None)];
        let batch_b = vec![doc("d2", Some("u2"), Some(&["#b", "#a"]), None)];

        let (part_a, _) = build_cooccurrence_graph(&batch_a);
        let (part_b, _) = build_cooccurrence_graph(&batch_b);
        let merged = merge_partials(Orientation::Undirected, [part_a, part_b]).unwrap();

        let all: Vec<Document> = batch_a.into_iter().chain(batch_b).collect();
        let (single, _) = build_cooccurrence_graph(&all);

        assert_eq!(merged, single);
    }
}
