use crate::error::{AppError, AppResult};
use crate::models::{Membership, MembershipLevel, NewMembership};
use crate::repositories::{
    ListQuery, MembershipLevelRepository, MembershipRepository, MembershipSortField,
};

#[derive(Clone)]
pub struct MembershipService {
    memberships: MembershipRepository,
    levels: MembershipLevelRepository,
}

impl MembershipService {
    pub fn new(memberships: MembershipRepository, levels: MembershipLevelRepository) -> Self {
        Self {
            memberships,
            levels,
        }
    }

    /// Stores a membership application after checking that the requested
    /// level exists.
    pub async fn register(&self, application: NewMembership) -> AppResult<Membership> {
        let level_id = application.membership_level_id;
        require_level(self.levels.find_by_id(level_id).await?, level_id)?;

        let membership = self.memberships.create(application).await?;
        tracing::info!(
            membership_id = membership.id,
            user_id = membership.user_id,
            level_id,
            "Membership registered"
        );
        Ok(membership)
    }

    pub async fn list_memberships(
        &self,
        query: &ListQuery<MembershipSortField>,
    ) -> AppResult<(Vec<Membership>, i64)> {
        self.memberships.list(query).await
    }

    pub async fn list_levels(&self) -> AppResult<Vec<MembershipLevel>> {
        self.levels.list_all().await
    }
}

/// `BadRequest` when the looked-up level is missing.
fn require_level(found: Option<MembershipLevel>, level_id: i32) -> AppResult<MembershipLevel> {
    found.ok_or_else(|| AppError::BadRequest {
        message: format!("Unknown membership level: {}", level_id),
    })
}
