//! End-to-end runs over a CSV working set, from fetch to page.

use std::io::Write;

use formulary_model::{CatalogSchema, FilterCriteria, InteractionSchema};
use formulary_query::{catalog_page, interaction_matches};
use formulary_source::{CsvRowSource, RowSource};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn catalog_query_over_a_csv_export() {
    let file = write_csv(
        "\u{feff}trade name , tablets,group,compound,How to take medicine\n\
         Yasmin,21,COC,DRSP 3 mg / EE 0.03 mg,one tablet daily at the same time\n\
         Mercilon,28,COC,DSG 0.15 mg / EE 0.02 mg,one tablet daily\n\
         Cerazette,28,POP,DSG 0.075 mg,one tablet daily without a break\n",
    );
    let rows = CsvRowSource::new(file.path()).fetch_rows().expect("fetch");
    let schema = CatalogSchema::standard();
    let criteria = FilterCriteria::new().contains("Drug Group", "coc");
    let page = catalog_page(rows, &schema, &criteria, 10, 1).expect("page");

    assert_eq!(page.total_records, 2);
    assert_eq!(page.records[0].get("Trade Name"), Some("Yasmin"));
    assert_eq!(page.records[1].get("Tablets"), Some("28"));
    assert_eq!(page.display_range(), Some((1, 2)));
}

#[test]
fn interaction_lookup_over_a_csv_export() {
    let file = write_csv(
        "drug1,drug2,severity,note\n\
         Warfarin,Aspirin,major,bleeding risk\n\
         Ethinylestradiol,Rifampicin,major,reduced contraceptive effect\n",
    );
    let rows = CsvRowSource::new(file.path()).fetch_rows().expect("fetch");
    let schema = InteractionSchema::standard();

    let matches = interaction_matches(rows.clone(), &schema, "rifampicin", "ETHINYLESTRADIOL")
        .expect("lookup");
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0].details.get("note").map(String::as_str),
        Some("reduced contraceptive effect")
    );

    let none = interaction_matches(rows, &schema, "Warfarin", "Rifampicin").expect("lookup");
    assert!(none.is_empty());
}
