use models::{DraftMember, Gym, Member};

use crate::Result;

/// The only component allowed to talk to the backend.
#[async_trait::async_trait]
pub trait MemberGateway: Send + Sync {
    async fn list_members(&self) -> Result<Vec<Member>>;

    async fn list_gyms(&self) -> Result<Vec<Gym>>;

    /// Persists the draft and returns the stored record, including any
    /// server-assigned fields.
    async fn create_member(&self, draft: &DraftMember) -> Result<Member>;
}
