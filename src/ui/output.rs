use crate::resolver::QuerySource;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{} {}", Icons::ROCKET, text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO.style(theme().info.clone()),
        label.style(theme().dim.clone()),
        value
    );
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}

/// Styled marker for where an artifact's query comes from.
pub fn source_marker(source: QuerySource) -> String {
    match source {
        QuerySource::Override => source.as_str().style(theme().overridden.clone()).to_string(),
        QuerySource::Default => source.as_str().style(theme().info.clone()).to_string(),
        QuerySource::Placeholder => source.as_str().style(theme().placeholder.clone()).to_string(),
    }
}

pub fn legend() {
    println!(
        "  {} {}  {} {}  {} {}",
        source_marker(QuerySource::Override),
        dim("language-specific query"),
        source_marker(QuerySource::Default),
        dim("category default"),
        "-".style(theme().placeholder.clone()),
        dim("placeholder"),
    );
}
