/*!
 * Property tests for normalization and counting
 */

use anyhow::Result;
use proptest::prelude::*;
use rand::rng;
use rand::seq::SliceRandom;
use subfreq::text_utils::{normalize_line, tokenize};
use subfreq::word_frequency::FrequencyTable;

fn sample_lines() -> Vec<String> {
    [
        "Hello, world!",
        "\u{200F}שלום עולם\u{200E}",
        "It's a DON'T-stop kind of night...",
        "Привет, мир! Привет!",
        "   spaced    out   ",
        "Ünïcödé ÇASE",
        "100% sure, 100 times",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn test_fromDialogue_withShuffledLines_shouldProduceIdenticalTable() -> Result<()> {
    let lines = sample_lines();
    let expected = FrequencyTable::from_dialogue(&lines);

    let mut rng = rng();
    for _ in 0..20 {
        let mut shuffled = lines.clone();
        shuffled.shuffle(&mut rng);
        let table = FrequencyTable::from_dialogue(&shuffled);
        assert_eq!(table, expected);
        assert_eq!(table.to_csv_string()?, expected.to_csv_string()?);
    }
    Ok(())
}

#[test]
fn test_toCsvString_calledTwice_shouldBeByteIdentical() -> Result<()> {
    let table = FrequencyTable::from_dialogue(sample_lines());
    assert_eq!(table.to_csv_string()?.into_bytes(), table.to_csv_string()?.into_bytes());
    Ok(())
}

proptest! {
    #[test]
    fn prop_normalizeLine_isIdempotent(line in "\\PC*") {
        let once = normalize_line(&line);
        prop_assert_eq!(normalize_line(&once), once);
    }

    #[test]
    fn prop_normalizeLine_leavesOnlyAlphanumericAndWhitespace(line in "\\PC*") {
        let normalized = normalize_line(&line);
        prop_assert!(normalized.chars().all(|c| c.is_alphanumeric() || c.is_whitespace()));
    }

    #[test]
    fn prop_fromDialogue_totalMatchesTokenCount(lines in prop::collection::vec("\\PC*", 0..20)) {
        let table = FrequencyTable::from_dialogue(&lines);
        let expected: usize = lines
            .iter()
            .map(|line| tokenize(&normalize_line(line)).count())
            .sum();
        let summed: usize = table.sorted_entries().iter().map(|(_, count)| count).sum();
        prop_assert_eq!(table.total(), expected);
        prop_assert_eq!(summed, expected);
    }

    #[test]
    fn prop_fromDialogue_isOrderIndependent(lines in prop::collection::vec("[a-zA-Z ,.'!]{0,30}", 0..15)) {
        let forward = FrequencyTable::from_dialogue(&lines);
        let reversed = FrequencyTable::from_dialogue(lines.iter().rev());
        prop_assert_eq!(forward, reversed);
    }

    #[test]
    fn prop_sortedEntries_isOrderedByCountThenWord(lines in prop::collection::vec("[a-c ]{0,12}", 0..15)) {
        let table = FrequencyTable::from_dialogue(&lines);
        let entries = table.sorted_entries();
        for pair in entries.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.1 > b.1 || (a.1 == b.1 && a.0 < b.0));
        }
    }
}
