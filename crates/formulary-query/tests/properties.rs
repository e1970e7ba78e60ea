use proptest::prelude::*;

use formulary_model::{CatalogRecord, InteractionRecord, InteractionSchema, Row};
use formulary_query::{interpret_rows, match_interactions, paginate};

fn labeled_records(count: usize) -> Vec<CatalogRecord> {
    (0..count)
        .map(|idx| {
            let mut record = CatalogRecord::default();
            record.cells.insert("Trade Name".to_string(), idx.to_string());
            record
        })
        .collect()
}

fn interaction_table(pairs: &[(String, String)]) -> Vec<InteractionRecord> {
    let rows: Vec<Row> = pairs
        .iter()
        .map(|(a, b)| Row::from_pairs([("drug1", a.as_str()), ("drug2", b.as_str())]))
        .collect();
    interpret_rows(&rows, &InteractionSchema::standard())
}

proptest! {
    #[test]
    fn pages_partition_the_sequence(count in 0usize..60, page_size in 1usize..12) {
        let records = labeled_records(count);
        let total_pages = count.div_ceil(page_size).max(1);

        let mut reassembled = Vec::new();
        for page_number in 1..=total_pages {
            let page = paginate(records.clone(), page_size, page_number).expect("valid page");
            prop_assert_eq!(page.total_pages, total_pages);
            prop_assert_eq!(page.start_index, (page_number - 1) * page_size);
            prop_assert!(page.records.len() <= page_size);
            reassembled.extend(page.records);
        }
        prop_assert_eq!(reassembled, records.clone());

        prop_assert!(paginate(records, page_size, total_pages + 1).is_err());
    }

    #[test]
    fn pair_matching_is_symmetric(
        pairs in prop::collection::vec(("[A-Za-z ]{0,10}", "[A-Za-z ]{0,10}"), 0..20),
        query_a in "[A-Za-z]{1,8}",
        query_b in "[A-Za-z]{1,8}",
    ) {
        let records = interaction_table(&pairs);
        let forward = match_interactions(&records, &query_a, &query_b).expect("forward");
        let reverse = match_interactions(&records, &query_b, &query_a).expect("reverse");
        prop_assert_eq!(forward, reverse);
    }

    #[test]
    fn matching_ignores_case_and_padding(
        name_a in "[A-Za-z]{1,8}",
        name_b in "[A-Za-z]{1,8}",
    ) {
        let records = interaction_table(&[(format!("  {name_a}"), name_b.to_uppercase())]);
        let matches =
            match_interactions(&records, &name_a.to_lowercase(), &format!(" {name_b} "))
                .expect("match");
        prop_assert_eq!(matches.len(), 1);
    }
}
