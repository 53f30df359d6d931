//! Delete a stored résumé.

use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_remove_resume(config: &Config, id: &str) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone())?;

    let Some(resume) = state.resumes.get(id).await else {
        println!("Resume {id} not found.");
        println!("Use 'resumake list' to see IDs");
        return Ok(());
    };

    state.resumes.remove(id).await?;
    println!("✓ Deleted resume '{}' ({})", resume.title, resume.id);

    Ok(())
}
