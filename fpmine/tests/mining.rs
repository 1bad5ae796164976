use std::collections::BTreeMap;

use fpmine::{
    ConfigError, FpGrowthConfig, FpGrowthError, ItemFlags, ItemRelation, MiningError,
    fp_growth_algorithm,
};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// A=0, B=1, C=2 over {A,B}, {A,B,C}, {A}, {B,C}, {A,B,C}.
fn abc_relation() -> ItemFlags {
    ItemFlags::from_transactions(
        labels(&["A", "B", "C"]),
        &[vec![0, 1], vec![0, 1, 2], vec![0], vec![1, 2], vec![0, 1, 2]],
    )
    .unwrap()
}

fn normalized(records: Vec<Vec<usize>>) -> BTreeMap<Vec<usize>, usize> {
    let mut out = BTreeMap::new();
    for mut record in records {
        let support = record.pop().unwrap();
        record.sort_unstable();
        assert!(out.insert(record, support).is_none(), "duplicate pattern");
    }
    out
}

fn brute_force_support(relation: &ItemFlags, items: &[usize]) -> usize {
    (0..relation.num_examples())
        .filter(|&row| items.iter().all(|&item| relation.flag(row, item)))
        .count()
}

#[test]
fn test_end_to_end_abc() {
    let relation = abc_relation();
    let config = FpGrowthConfig::new(40.0, 3).unwrap();
    assert_eq!(config.cutoff(relation.num_examples()), 2);

    let patterns = fp_growth_algorithm(&relation, &config)
        .unwrap()
        .expect("patterns");
    assert_eq!(patterns.discarded(), 3);
    assert_eq!(patterns.item_names(), relation.item_labels());

    let mined = normalized(patterns.into_records());
    let expected = BTreeMap::from([
        (vec![0, 1], 3),
        (vec![0, 1, 2], 2),
        (vec![0, 2], 2),
        (vec![1, 2], 3),
    ]);
    assert_eq!(mined, expected);

    for (items, &support) in &mined {
        assert_eq!(support, brute_force_support(&relation, items));
    }
}

#[test]
fn test_max_items_bounds_output() {
    let relation = abc_relation();
    let config = FpGrowthConfig::new(40.0, 2).unwrap();

    let patterns = fp_growth_algorithm(&relation, &config).unwrap().unwrap();

    assert_eq!(patterns.discarded(), 4);
    assert!(patterns.iter().all(|pattern| pattern.items.len() == 2));
    assert!(patterns.records().all(|record| record.len() == 3));
    assert_eq!(patterns.len(), 3);
}

#[test]
fn test_record_layout() {
    let relation = abc_relation();
    let config = FpGrowthConfig::new(40.0, 3).unwrap();

    let patterns = fp_growth_algorithm(&relation, &config).unwrap().unwrap();

    for (pattern, record) in patterns.iter().zip(patterns.records()) {
        assert_eq!(&record[..pattern.items.len()], pattern.items);
        assert_eq!(record.last(), Some(&pattern.support));
    }
    assert_eq!(
        patterns.describe(0).as_deref(),
        Some("{C, B} (3)"),
        "least frequent item is mined first"
    );
}

#[test]
fn test_no_column_meets_cutoff() {
    let relation = ItemFlags::from_transactions(
        labels(&["a", "b", "c", "d"]),
        &[vec![0], vec![1], vec![2], vec![3]],
    )
    .unwrap();
    let config = FpGrowthConfig::new(50.0, 4).unwrap();

    assert!(fp_growth_algorithm(&relation, &config).unwrap().is_none());
}

#[test]
fn test_only_single_items_frequent() {
    let relation = ItemFlags::from_transactions(
        labels(&["a", "b"]),
        &[vec![0], vec![0], vec![1], vec![1]],
    )
    .unwrap();
    let config = FpGrowthConfig::new(50.0, 4).unwrap();

    assert!(fp_growth_algorithm(&relation, &config).unwrap().is_none());
}

#[test]
fn test_empty_relation() {
    let relation = ItemFlags::from_transactions(labels(&["a", "b"]), &[]).unwrap();
    let config = FpGrowthConfig::default();

    assert!(fp_growth_algorithm(&relation, &config).unwrap().is_none());
}

#[test]
fn test_invalid_config_rejected_before_mining() {
    struct Untouchable;

    impl ItemRelation for Untouchable {
        fn item_labels(&self) -> &[String] {
            panic!("relation read before config validation")
        }

        fn num_examples(&self) -> usize {
            panic!("relation read before config validation")
        }

        fn flag(&self, _row: usize, _col: usize) -> bool {
            panic!("relation read before config validation")
        }
    }

    let config = FpGrowthConfig {
        min_support_percent: 0.0,
        max_items_per_rule: 3,
    };
    assert!(matches!(
        fp_growth_algorithm(&Untouchable, &config),
        Err(FpGrowthError::Config(ConfigError::MinSupportOutOfRange(_)))
    ));

    let config = FpGrowthConfig {
        min_support_percent: 10.0,
        max_items_per_rule: 1,
    };
    assert!(matches!(
        fp_growth_algorithm(&Untouchable, &config),
        Err(FpGrowthError::Config(ConfigError::MaxItemsTooSmall(1)))
    ));
}

#[test]
fn test_relation_panic_becomes_execution_error() {
    struct Broken {
        labels: Vec<String>,
    }

    impl ItemRelation for Broken {
        fn item_labels(&self) -> &[String] {
            &self.labels
        }

        fn num_examples(&self) -> usize {
            3
        }

        fn flag(&self, row: usize, _col: usize) -> bool {
            if row == 2 {
                panic!("row {row} is unreadable");
            }
            true
        }
    }

    let relation = Broken {
        labels: labels(&["x", "y"]),
    };
    let result = fp_growth_algorithm(&relation, &FpGrowthConfig::default());

    match result {
        Err(FpGrowthError::Execution(MiningError::Panicked(message))) => {
            assert_eq!(message, "row 2 is unreadable");
        }
        other => panic!("expected an execution failure, got {other:?}"),
    }
}

#[test]
fn test_by_frequency_relation_mines_same_itemsets() {
    let names = labels(&["eggs", "bread", "milk"]);
    let transactions = vec![vec![1, 2], vec![1, 2, 0], vec![1], vec![2, 0], vec![1, 2, 0]];
    let config = FpGrowthConfig::new(40.0, 3).unwrap();

    let ordered = ItemFlags::by_frequency(names.clone(), &transactions).unwrap();
    let patterns = fp_growth_algorithm(&ordered, &config).unwrap().unwrap();

    let named: BTreeMap<Vec<String>, usize> = patterns
        .iter()
        .map(|pattern| {
            let mut items: Vec<String> = pattern
                .items
                .iter()
                .map(|&item| patterns.item_names()[item].clone())
                .collect();
            items.sort();
            (items, pattern.support)
        })
        .collect();

    let expected = BTreeMap::from([
        (labels(&["bread", "eggs"]), 2),
        (labels(&["bread", "eggs", "milk"]), 2),
        (labels(&["bread", "milk"]), 3),
        (labels(&["eggs", "milk"]), 3),
    ]);
    assert_eq!(named, expected);
}
