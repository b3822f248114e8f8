//! Text generation by bridge-word insertion

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::WordGraph;
use crate::ingest::fold_and_split;

/// Enrich input text by inserting bridge words between adjacent pairs
///
/// The input is case-folded and whitespace-split (punctuation kept).
/// For every consecutive pair, if the graph holds at least one bridge
/// word for it, one is chosen uniformly at random and inserted between
/// the two. Words are only ever inserted: stripping the insertions back
/// out reproduces the folded input sequence exactly.
pub fn generate_text(graph: &WordGraph, rng: &mut impl Rng, text: &str) -> String {
    let tokens = fold_and_split(text);
    let Some((last, rest)) = tokens.split_last() else {
        return String::new();
    };

    let mut output: Vec<String> = Vec::with_capacity(tokens.len());
    for (i, token) in rest.iter().enumerate() {
        output.push(token.clone());
        let bridges = graph.bridges(token, &tokens[i + 1]);
        if let Some(bridge) = bridges.choose(rng) {
            output.push(bridge.to_string());
        }
    }
    output.push(last.clone());

    output.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest_lines;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fox_graph() -> WordGraph {
        let mut graph = WordGraph::new();
        ingest_lines(&mut graph, ["the quick fox jumps over the lazy dog"]);
        graph
    }

    #[test]
    fn inserts_the_only_available_bridge() {
        let graph = fox_graph();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            generate_text(&graph, &mut rng, "fox over"),
            "fox jumps over"
        );
    }

    #[test]
    fn pairs_without_bridges_pass_through_unchanged() {
        let graph = fox_graph();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            generate_text(&graph, &mut rng, "quick fox jumps"),
            "quick fox jumps"
        );
    }

    #[test]
    fn unknown_words_are_kept_but_never_bridged() {
        let graph = fox_graph();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            generate_text(&graph, &mut rng, "zebra quark"),
            "zebra quark"
        );
    }

    #[test]
    fn single_word_and_empty_input_are_unchanged() {
        let graph = fox_graph();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate_text(&graph, &mut rng, "fox"), "fox");
        assert_eq!(generate_text(&graph, &mut rng, "   "), "");
        assert_eq!(generate_text(&graph, &mut rng, ""), "");
    }

    #[test]
    fn output_case_folds_the_input() {
        let graph = fox_graph();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            generate_text(&graph, &mut rng, "Fox OVER"),
            "fox jumps over"
        );
    }

    #[test]
    fn removing_insertions_recovers_the_input_skeleton() {
        let mut graph = WordGraph::new();
        ingest_lines(&mut graph, [
            "the quick fox jumps over the lazy dog",
            "the fox runs over the hill and the dog sleeps",
        ]);

        let input = "the fox and the dog over the hill";
        let original = fold_and_split(input);

        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generated = generate_text(&graph, &mut rng, input);
            let generated_tokens: Vec<String> = fold_and_split(&generated);

            // The original sequence must survive as a subsequence with at
            // most one inserted word between adjacent originals.
            let mut it = generated_tokens.iter().peekable();
            for (i, expected) in original.iter().enumerate() {
                let mut gap = 0;
                loop {
                    let token = it.next().expect("generated text exhausted early");
                    if token == expected {
                        break;
                    }
                    gap += 1;
                    assert!(i > 0, "leading word must be unchanged");
                    assert!(gap <= 1, "more than one word inserted in a gap");
                }
            }
            assert!(it.next().is_none(), "trailing words after the skeleton");
        }
    }
}
