use gateway::{GatewayError, MemberGateway};
use models::{DraftField, DraftMember, Gym, Member};
use tracing::{debug, error, info, warn};

use crate::notification::{Notification, NotificationQueue};

/// View state for the member roster and its add-member form.
///
/// Every handler takes `&mut self`, so events are applied one at a time. The
/// gateway is the only thing that performs I/O.
pub struct MemberController<G> {
    gateway: G,
    members: Vec<Member>,
    gyms: Vec<Gym>,
    search_term: String,
    modal_visible: bool,
    draft: DraftMember,
    submitting: bool,
    notifications: NotificationQueue,
}

impl<G: MemberGateway> MemberController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            members: Vec::new(),
            gyms: Vec::new(),
            search_term: String::new(),
            modal_visible: false,
            draft: DraftMember::default(),
            submitting: false,
            notifications: NotificationQueue::default(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetches members and gyms concurrently.
    ///
    /// Each successful fetch replaces its list wholesale. Failures are only
    /// logged and leave the list as it was.
    pub async fn load(&mut self) {
        let (members, gyms) = tokio::join!(self.gateway.list_members(), self.gateway.list_gyms());
        self.apply_members(members);
        self.apply_gyms(gyms);
    }

    pub fn apply_members(&mut self, result: gateway::Result<Vec<Member>>) {
        match result {
            Ok(members) => {
                info!("Loaded {} members", members.len());
                self.members = members;
            }
            Err(e) => error!("Failed to fetch members: {}", e),
        }
    }

    pub fn apply_gyms(&mut self, result: gateway::Result<Vec<Gym>>) {
        match result {
            Ok(gyms) => {
                info!("Loaded {} gyms", gyms.len());
                self.gyms = gyms;
            }
            Err(e) => error!("Failed to fetch gyms: {}", e),
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn gyms(&self) -> &[Gym] {
        &self.gyms
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Members whose name contains the search term, ignoring case, in stored
    /// order. Recomputed on every call.
    pub fn visible_members(&self) -> Vec<&Member> {
        let needle = self.search_term.to_lowercase();
        self.members
            .iter()
            .filter(|member| member.name_contains(&needle))
            .collect()
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn toggle_modal(&mut self) {
        self.modal_visible = !self.modal_visible;
        debug!("Add-member form visible: {}", self.modal_visible);
    }

    /// Closes the form and discards whatever was typed.
    pub fn cancel(&mut self) {
        self.modal_visible = false;
        self.draft.clear();
    }

    pub fn draft(&self) -> &DraftMember {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftMember {
        &mut self.draft
    }

    pub fn handle_input_change(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Starts a submission and returns the payload to send.
    ///
    /// Returns `None` without touching the gateway when a submission is
    /// already in flight or when a required field is empty.
    pub fn begin_submit(&mut self) -> Option<DraftMember> {
        if self.submitting {
            warn!("Ignoring submit while another one is in flight");
            self.notifications.push(Notification::warning(
                "A member is already being saved. Please wait.",
            ));
            return None;
        }

        if let Err(e) = self.draft.check_presence() {
            warn!("Add member rejected: {}", e);
            let missing: Vec<&str> = e.missing_fields().iter().map(|f| f.label()).collect();
            self.notifications.push(Notification::error(format!(
                "Please fill in all required fields (missing: {}).",
                missing.join(", ")
            )));
            return None;
        }

        self.submitting = true;
        Some(self.draft.clone())
    }

    /// Applies the outcome of a submission started with `begin_submit`.
    /// Returns `true` when the member was added.
    pub fn complete_submit(&mut self, outcome: gateway::Result<Member>) -> bool {
        self.submitting = false;

        match outcome {
            Ok(member) => {
                info!("Member added: {} ({})", member.name, member.tax_id);
                self.notifications
                    .push(Notification::info(format!("Member {} added.", member.name)));
                self.members.push(member);
                self.modal_visible = false;
                self.draft.clear();
                true
            }
            Err(e) => {
                error!("Failed to add member: {}", e);
                self.notifications.push(Notification::error(failure_message(&e)));
                false
            }
        }
    }

    /// Validates the draft, sends it and applies the result.
    pub async fn add_member(&mut self) -> bool {
        let Some(payload) = self.begin_submit() else {
            return false;
        };
        let outcome = {
            let _in_flight = InFlight(&mut self.submitting);
            self.gateway.create_member(&payload).await
        };
        self.complete_submit(outcome)
    }

    /// Placeholder for editing a visible row; only tells the user which
    /// member was picked.
    pub fn edit_member(&mut self, row: usize) {
        let name = self
            .visible_members()
            .get(row)
            .map(|member| member.name.clone());

        match name {
            Some(name) => self
                .notifications
                .push(Notification::info(format!("Editing member {}", name))),
            None => self
                .notifications
                .push(Notification::warning(format!(
                    "There is no row {}",
                    row.saturating_add(1)
                ))),
        }
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }
}

/// Clears the in-flight flag when a create call ends, including when the
/// `add_member` future is dropped before the gateway answers.
struct InFlight<'a>(&'a mut bool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

fn failure_message(error: &GatewayError) -> String {
    let reason = match error {
        GatewayError::Server { status, message } => format!("server said {}: {}", status, message),
        GatewayError::Network { .. } => "the server did not respond".to_string(),
        GatewayError::Request { message } => format!("request failed: {}", message),
        GatewayError::InvalidResponse { .. } => "unexpected server response".to_string(),
    };
    format!(
        "Failed to add member ({}). Check the data and try again.",
        reason
    )
}
