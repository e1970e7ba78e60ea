use anyhow::{Context, Result};
use tracing::info;

use formulary_cli::render::{catalog_caption, catalog_table, interactions_table, schema_table};
use formulary_model::{CatalogSchema, FilterCriteria, InteractionSchema};
use formulary_query::{catalog_page, interaction_matches};
use formulary_source::{CsvRowSource, RowSource};

use crate::cli::{CatalogArgs, InteractionArgs, OutputArg};

pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let source = CsvRowSource::new(&args.data_file);
    let rows = source.fetch_rows()?;
    let schema = CatalogSchema::standard();
    let criteria = catalog_criteria(args);
    let page = catalog_page(rows, &schema, &criteria, args.page_size, args.page)?;
    info!(
        total = page.total_records,
        page = page.page_number,
        pages = page.total_pages,
        "catalog page ready"
    );
    match args.output {
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(&page).context("serialize page")?;
            println!("{json}");
        }
        OutputArg::Table => {
            if page.is_empty() {
                println!("no drugs matched the current filters");
            } else {
                println!("{}", catalog_table(&page, &schema));
                println!("{}", catalog_caption(&page));
            }
        }
    }
    Ok(())
}

pub fn run_interactions(args: &InteractionArgs) -> Result<()> {
    let source = CsvRowSource::new(&args.data_file);
    let rows = source.fetch_rows()?;
    let schema = InteractionSchema::standard();
    let matches = interaction_matches(rows, &schema, &args.drug_a, &args.drug_b)?;
    info!(match_count = matches.len(), "interaction lookup done");
    match args.output {
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(&matches).context("serialize matches")?;
            println!("{json}");
        }
        OutputArg::Table => {
            if matches.is_empty() {
                println!(
                    "no known interaction found between {} and {}",
                    args.drug_a.trim(),
                    args.drug_b.trim()
                );
            } else {
                println!("{}", interactions_table(&matches));
            }
        }
    }
    Ok(())
}

pub fn run_schema() -> Result<()> {
    let schema = CatalogSchema::standard();
    println!("{}", schema_table(&schema));
    Ok(())
}

/// Bind the form inputs to their display columns: keyword searches the
/// trade name, group searches the drug group.
fn catalog_criteria(args: &CatalogArgs) -> FilterCriteria {
    let mut criteria = FilterCriteria::new();
    if let Some(keyword) = &args.keyword {
        criteria = criteria.contains("Trade Name", keyword);
    }
    if let Some(group) = &args.group {
        criteria = criteria.contains("Drug Group", group);
    }
    criteria
}
