use crate::error::AppResult;
use crate::models::{Donation, NewDonation};
use crate::repositories::{DonationRepository, DonationSortField, ListQuery};

#[derive(Clone)]
pub struct DonationService {
    repo: DonationRepository,
}

impl DonationService {
    pub fn new(repo: DonationRepository) -> Self {
        Self { repo }
    }

    pub async fn donate(&self, donation: NewDonation) -> AppResult<Donation> {
        let donation = self.repo.create(donation).await?;
        tracing::info!(donation_id = donation.id, amount = %donation.amount, "Donation recorded");
        Ok(donation)
    }

    pub async fn history(
        &self,
        query: &ListQuery<DonationSortField>,
    ) -> AppResult<(Vec<Donation>, i64)> {
        self.repo.list(query).await
    }
}
