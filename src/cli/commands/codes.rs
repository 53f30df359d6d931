//! Inspect and reseed the common-code reference tables.

use crate::config::Config;
use crate::models::CodeCategory;
use crate::state::SharedState;

pub async fn cmd_codes_list(
    config: &Config,
    category: Option<CodeCategory>,
    include_inactive: bool,
) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone())?;

    let categories: Vec<CodeCategory> = match category {
        Some(c) => vec![c],
        None => CodeCategory::ALL.to_vec(),
    };

    for category in categories {
        let codes = if include_inactive {
            state.codes.by_category(category).await
        } else {
            state.codes.active_by_category(category).await
        };

        println!("{} ({})", category.label(), category);
        println!("{:-<50}", "");
        for code in codes {
            let marker = if code.is_active { " " } else { "x" };
            println!("{} {:>3}. {}  [{}]", marker, code.order, code.value, code.id);
        }
        println!();
    }

    Ok(())
}

pub async fn cmd_codes_seed(config: &Config) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone())?;
    let count = state.codes.reseed().await?;
    println!("✓ Restored {count} default common codes");
    Ok(())
}
