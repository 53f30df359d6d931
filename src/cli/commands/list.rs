//! List stored résumés.

use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_list_resumes(config: &Config) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone())?;
    let resumes = state.resumes.list().await;

    if resumes.is_empty() {
        println!("No resumes stored.");
        println!();
        println!("Start the server with: resumake serve");
        return Ok(());
    }

    println!("Resumes ({} total)", resumes.len());
    println!("{:-<70}", "");

    for resume in resumes {
        let entries = resume.education.len()
            + resume.career.len()
            + resume.certificates.len()
            + resume.skills.len()
            + resume.activities.len();

        println!("{} — {}", resume.title, resume.basic_info.name);
        println!(
            "  ID: {} | Entries: {} | Updated: {}",
            resume.id, entries, resume.updated_at
        );
    }

    Ok(())
}
