use crate::error::AppResult;
use crate::models::Payment;
use crate::repositories::PaymentRepository;

#[derive(Clone)]
pub struct PaymentService {
    repo: PaymentRepository,
}

impl PaymentService {
    pub fn new(repo: PaymentRepository) -> Self {
        Self { repo }
    }

    /// Subscription payments of `user_id`, most recent first.
    pub async fn subscriptions(&self, user_id: i32) -> AppResult<Vec<Payment>> {
        self.repo.list_for_user(user_id).await
    }
}
