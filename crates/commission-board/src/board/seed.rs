use tracing::info;

use super::domain::NewCommission;
use super::repository::{BoardRepository, RepositoryError};

/// Result of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(usize),
    AlreadySeeded,
}

/// Postings installed on a fresh database.
pub fn default_commissions() -> Vec<NewCommission> {
    vec![NewCommission {
        title: "New Commission (Web Developer)".to_string(),
        category: "Web Developer".to_string(),
        description: "Seeking a JavaScript developer for Wix Velo and Blocks projects. \
While prior Wix expertise isn't required, strong JavaScript fundamentals, API experience, \
and the ability to apply platform documentation are essential. The work involves custom \
frontend logic, backend functions, database interactions, and developing reusable components. \
Candidates familiar with modern JS, Node.js, or frontend frameworks should be a good fit."
            .to_string(),
    }]
}

/// Insert `commissions` unless the table already holds rows.
pub async fn seed_commissions<R>(
    repository: &R,
    commissions: &[NewCommission],
) -> Result<SeedOutcome, RepositoryError>
where
    R: BoardRepository + ?Sized,
{
    if repository.count_commissions().await? > 0 {
        info!("commission table already seeded");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    for commission in commissions {
        let stored = repository.insert_commission(commission.clone()).await?;
        info!(commission_id = %stored.id, title = %stored.title, "seeded commission");
    }

    Ok(SeedOutcome::Seeded(commissions.len()))
}
