//! List command for the plugin catalog

use colored::Colorize;
use pipeline_plugins::PluginCatalog;

use crate::error::Result;

/// Run the list command
pub fn run_list(category_filter: Option<&str>) -> Result<()> {
    let catalog = PluginCatalog::global();

    let filter = match category_filter {
        Some(name) if catalog.names(name).is_empty() => {
            let known: Vec<_> = catalog.categories().iter().map(|c| c.as_str()).collect();
            eprintln!(
                "{} Unknown category '{}'. Valid: {}",
                "warning:".yellow().bold(),
                name,
                known.join(", ")
            );
            None
        }
        other => other,
    };

    println!("{}", "Available Plugins".bold());
    println!();

    for category in catalog.categories() {
        if filter.is_some_and(|f| f != category.as_str()) {
            continue;
        }

        println!("{}:", category.as_str().cyan().bold());
        for name in catalog.names(category.as_str()) {
            if let Some(reg) = catalog.get(category.as_str(), name) {
                println!("  {:<20} {}", name.green(), reg.description.dimmed());
            }
        }
        println!();
    }

    println!(
        "{} {} plugins available.",
        "Total:".dimmed(),
        catalog.len()
    );

    Ok(())
}
