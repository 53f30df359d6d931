//! Show one stored résumé in full.

use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_resume_info(config: &Config, id: &str) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone())?;
    let Some(resume) = state.resumes.get(id).await else {
        println!("Resume {id} not found.");
        println!("Use 'resumake list' to see IDs");
        return Ok(());
    };

    println!("{}", resume.title);
    println!("{:-<70}", "");
    println!("ID:      {}", resume.id);
    println!("Name:    {}", resume.basic_info.name);
    println!(
        "Phone:   {} {}",
        resume.basic_info.phone,
        if resume.basic_info.phone_verified {
            "(verified)"
        } else {
            ""
        }
    );
    println!(
        "Email:   {} {}",
        resume.basic_info.email,
        if resume.basic_info.email_verified {
            "(verified)"
        } else {
            ""
        }
    );
    println!("Address: {}", resume.basic_info.address);
    println!("Created: {} | Updated: {}", resume.created_at, resume.updated_at);

    if !resume.education.is_empty() {
        println!();
        println!("Education ({})", resume.education.len());
        for edu in &resume.education {
            println!("  {} — {} ({})", edu.school, edu.major, edu.degree);
        }
    }

    if !resume.career.is_empty() {
        println!();
        println!("Career ({})", resume.career.len());
        for career in &resume.career {
            println!("  {} — {}", career.company, career.position);
        }
    }

    if !resume.certificates.is_empty() {
        println!();
        println!("Certificates ({})", resume.certificates.len());
        for cert in &resume.certificates {
            println!("  {} — {}", cert.name, cert.organization);
        }
    }

    if !resume.skills.is_empty() {
        println!();
        println!("Skills ({})", resume.skills.len());
        for skill in &resume.skills {
            println!("  {} ({:?}, {})", skill.name, skill.level, skill.category);
        }
    }

    if !resume.activities.is_empty() {
        println!();
        println!("Activities ({})", resume.activities.len());
        for activity in &resume.activities {
            println!("  {} — {}", activity.name, activity.organization);
        }
    }

    Ok(())
}
