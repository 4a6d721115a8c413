//! Catalog browsing commands: search, show, types, generations, cache

use anyhow::Result;
use clap::Subcommand;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use pokedex_core::catalog::{Catalog, Creature, FilterCriteria};

use crate::app::AppContext;

#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Delete the cached catalog
    Clear,
}

impl CacheCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        match self {
            CacheCommand::Clear => {
                if ctx.cache()?.clear()? {
                    println!("Cleared catalog cache");
                } else {
                    println!("No catalog cache to clear");
                }
                Ok(())
            }
        }
    }
}

/// Table row for catalog listings
#[derive(Tabled)]
pub struct CreatureRow {
    #[tabled(rename = "#")]
    number: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "English")]
    english: String,
    #[tabled(rename = "Types")]
    types: String,
    #[tabled(rename = "Gen")]
    generation: String,
    #[tabled(rename = "Fav")]
    favorite: String,
}

impl CreatureRow {
    pub fn new(creature: &Creature, favorite: bool) -> Self {
        Self {
            number: creature.padded_number(),
            name: creature.display_name().to_string(),
            english: creature.name.en.clone().unwrap_or_default(),
            types: creature.type_names().collect::<Vec<_>>().join(", "),
            generation: creature
                .generation()
                .map(|g| g.to_string())
                .unwrap_or_else(|| "-".to_string()),
            favorite: if favorite { "*".to_string() } else { String::new() },
        }
    }
}

pub fn render_table(rows: &[CreatureRow]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

async fn load_catalog(ctx: &AppContext, force_refresh: bool) -> Result<Catalog> {
    ctx.loader()?.load(force_refresh).await
}

pub async fn execute_search(
    ctx: &AppContext,
    term: Option<String>,
    type_name: Option<String>,
    generation: Option<u32>,
    json_output: bool,
    force_refresh: bool,
) -> Result<()> {
    let catalog = load_catalog(ctx, force_refresh).await?;

    let mut criteria = FilterCriteria::new();
    if let Some(term) = term {
        criteria = criteria.with_search_term(term);
    }
    if let Some(type_name) = type_name {
        criteria = criteria.with_type(type_name);
    }
    if let Some(generation) = generation {
        criteria = criteria.with_generation(generation);
    }

    let results = catalog.filter(&criteria);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No Pokémon found ({}).", criteria.describe());
        return Ok(());
    }

    let favorites = ctx.favorites().get_all().await;
    let rows: Vec<CreatureRow> = results
        .iter()
        .map(|c| CreatureRow::new(c, favorites.iter().any(|f| f.id() == c.id())))
        .collect();

    println!(
        "Found {} of {} Pokémon ({}):\n",
        results.len(),
        catalog.len(),
        criteria.describe()
    );
    println!("{}", render_table(&rows));

    Ok(())
}

pub async fn execute_show(
    ctx: &AppContext,
    id: u32,
    region: Option<&str>,
    json_output: bool,
) -> Result<()> {
    let creature = match region {
        Some(region) => ctx.loader()?.fetch_detail(id, Some(region)).await?,
        None => ctx.resolve(id).await?,
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&creature)?);
        return Ok(());
    }

    let favorite = ctx.favorites().is_favorite(creature.id()).await;
    print_details(&creature, favorite);
    Ok(())
}

fn print_details(creature: &Creature, favorite: bool) {
    let marker = if favorite { " *" } else { "" };
    println!("{} {}{}", creature.padded_number(), creature.display_name(), marker);

    let other_names: Vec<&str> = creature
        .names()
        .filter(|n| Some(*n) != creature.primary_name())
        .collect();
    if !other_names.is_empty() {
        println!("Also known as: {}", other_names.join(", "));
    }

    if let Some(category) = &creature.category {
        println!("Category:   {category}");
    }

    let types: Vec<&str> = creature.type_names().collect();
    if !types.is_empty() {
        println!("Types:      {}", types.join(", "));
    }

    if let Some(generation) = creature.generation() {
        println!("Generation: {generation}");
    }

    if let Some(height) = &creature.height {
        println!("Height:     {height}");
    }
    if let Some(weight) = &creature.weight {
        println!("Weight:     {weight}");
    }

    if let Some(talents) = &creature.talents {
        let names: Vec<String> = talents
            .iter()
            .filter_map(|t| {
                t.name.as_ref().map(|name| {
                    if t.tc == Some(true) {
                        format!("{name} (hidden)")
                    } else {
                        name.clone()
                    }
                })
            })
            .collect();
        if !names.is_empty() {
            println!("Talents:    {}", names.join(", "));
        }
    }

    if let Some(stats) = &creature.stats {
        println!();
        println!("Stats:");
        let lines = [
            ("HP", stats.hp),
            ("Attack", stats.atk),
            ("Defense", stats.def),
            ("Sp. Atk", stats.spe_atk),
            ("Sp. Def", stats.spe_def),
            ("Speed", stats.vit),
        ];
        for (label, value) in lines {
            if let Some(value) = value {
                println!("  {label:<8} {value:>3}");
            }
        }
        println!("  {:<8} {:>3}", "Total", stats.total());
    }
}

pub async fn execute_types(ctx: &AppContext, force_refresh: bool) -> Result<()> {
    let catalog = load_catalog(ctx, force_refresh).await?;
    for type_name in catalog.types() {
        println!("{type_name}");
    }
    Ok(())
}

pub async fn execute_generations(ctx: &AppContext, force_refresh: bool) -> Result<()> {
    let catalog = load_catalog(ctx, force_refresh).await?;
    for generation in catalog.generations() {
        println!("{generation}");
    }
    Ok(())
}
