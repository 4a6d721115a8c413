//! Favorites commands

use anyhow::Result;
use clap::Subcommand;

use pokedex_core::favorites::FavoritesView;

use crate::app::AppContext;
use crate::catalog_cli::{render_table, CreatureRow};

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// List favorites
    List {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Add a Pokémon to favorites
    Add {
        /// Pokédex number
        id: u32,
    },

    /// Remove a Pokémon from favorites
    Remove {
        /// Pokédex number
        id: u32,
    },

    /// Add if absent, remove if present
    Toggle {
        /// Pokédex number
        id: u32,
    },

    /// Report whether a Pokémon is a favorite
    Check {
        /// Pokédex number
        id: u32,
    },

    /// Remove every favorite
    Clear,
}

impl FavoritesCommand {
    pub async fn execute(self, ctx: &AppContext) -> Result<()> {
        let mut view = FavoritesView::load(ctx.favorites()).await;

        match self {
            FavoritesCommand::List { json } => {
                if json {
                    println!("{}", serde_json::to_string_pretty(view.favorites())?);
                } else if view.is_empty() {
                    println!("No favorites yet.");
                } else {
                    let rows: Vec<CreatureRow> = view
                        .favorites()
                        .iter()
                        .map(|c| CreatureRow::new(c, true))
                        .collect();
                    println!("{} favorite(s):\n", view.len());
                    println!("{}", render_table(&rows));
                }
            }
            FavoritesCommand::Add { id } => {
                if view.is_favorite(id) {
                    println!("#{id:03} is already a favorite");
                } else {
                    let creature = ctx.resolve(id).await?;
                    view.add(&creature).await?;
                    println!(
                        "Added {} {} to favorites",
                        creature.padded_number(),
                        creature.display_name()
                    );
                }
            }
            FavoritesCommand::Remove { id } => {
                let was_favorite = view.is_favorite(id);
                view.remove(id).await?;
                if was_favorite {
                    println!("Removed #{id:03} from favorites");
                } else {
                    println!("#{id:03} was not a favorite");
                }
            }
            FavoritesCommand::Toggle { id } => {
                let creature = match view.favorites().iter().find(|f| f.id() == id) {
                    Some(stored) => stored.clone(),
                    None => ctx.resolve(id).await?,
                };

                let label = format!("{} {}", creature.padded_number(), creature.display_name());
                if view.toggle(&creature).await? {
                    println!("Added {label} to favorites");
                } else {
                    println!("Removed {label} from favorites");
                }
            }
            FavoritesCommand::Check { id } => {
                if view.is_favorite(id) {
                    println!("#{id:03} is a favorite");
                } else {
                    println!("#{id:03} is not a favorite");
                }
            }
            FavoritesCommand::Clear => {
                let count = view.len();
                view.clear().await?;
                println!("Cleared {count} favorite(s)");
            }
        }

        Ok(())
    }
}
