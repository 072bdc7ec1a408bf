use crate::catalog::{CategoryCatalog, LanguageCatalog};
use crate::materializer::MaterializeReport;
use crate::resolver::{QuerySource, Resolver};
use tabled::{builder::Builder, settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct CoverageRow {
    #[tabled(rename = "Language")]
    pub language: String,
    #[tabled(rename = "Overrides")]
    pub overrides: usize,
    #[tabled(rename = "Defaults")]
    pub defaults: usize,
    #[tabled(rename = "Placeholders")]
    pub placeholders: usize,
}

pub struct TableBuilder {
    rows: Vec<CoverageRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, row: CoverageRow) {
        self.rows.push(row);
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-language source counts of a finished run, in write order.
pub fn coverage_table(report: &MaterializeReport) -> String {
    let mut builder = TableBuilder::new();
    for chunk in report.artifacts.chunk_by(|a, b| a.language == b.language) {
        let count = |source: QuerySource| chunk.iter().filter(|a| a.source == source).count();
        builder.add_row(CoverageRow {
            language: chunk[0].language.to_string(),
            overrides: count(QuerySource::Override),
            defaults: count(QuerySource::Default),
            placeholders: count(QuerySource::Placeholder),
        });
    }
    builder.build()
}

/// Language x category matrix marking where each query comes from.
pub fn resolution_table(
    resolver: &Resolver<'_>,
    languages: &LanguageCatalog,
    categories: &CategoryCatalog,
) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Language".to_string()];
    header.extend(categories.categories().map(|c| c.to_string()));
    builder.push_record(header);

    for language in languages.iter() {
        let mut row = vec![language.to_string()];
        row.extend(resolver.resolve_language(language).iter().map(|r| {
            let mark = match r.source {
                QuerySource::Override => "override",
                QuerySource::Default => "default",
                QuerySource::Placeholder => "-",
            };
            mark.to_string()
        }));
        builder.push_record(row);
    }

    builder.build().with(Style::rounded()).to_string()
}
