use crate::{
    Category, EventApi,
    form::{EventForm, PasswordGate},
};

const SUBMIT_FAILED: &str = "Failed to submit event";
const FETCH_CATEGORIES_FAILED: &str = "Failed to fetch categories";
const WRONG_PASSWORD: &str = "Incorrect password";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Confirm was pressed with no password prompt open.
    NotRequested,
    WrongPassword,
    Created { id: i64 },
    Failed,
}

/// State behind the admin form: the draft, the category list, the password
/// prompt and the notifications waiting to be shown.
pub struct AdminPanel<A: EventApi> {
    api: A,
    gate: PasswordGate,
    pub form: EventForm,
    categories: Vec<Category>,
    prompt_open: bool,
    notifications: Vec<Notification>,
}

impl<A: EventApi> AdminPanel<A> {
    pub fn new(api: A, gate: PasswordGate) -> Self {
        Self {
            api,
            gate,
            form: EventForm::default(),
            categories: Vec::new(),
            prompt_open: false,
            notifications: Vec::new(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_prompt_open(&self) -> bool {
        self.prompt_open
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Fetches the category list once. On failure the list stays empty.
    pub async fn load_categories(&mut self) {
        match self.api.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(_) => {
                self.categories.clear();
                self.notify_error(FETCH_CATEGORIES_FAILED);
            }
        }
    }

    pub fn request_submit(&mut self) {
        self.prompt_open = true;
    }

    pub fn cancel_submit(&mut self) {
        self.prompt_open = false;
    }

    pub async fn confirm_submit(&mut self, password: &str) -> SubmitOutcome {
        if !self.prompt_open {
            return SubmitOutcome::NotRequested;
        }
        self.prompt_open = false;

        if !self.gate.verify(password) {
            self.notify_error(WRONG_PASSWORD);
            return SubmitOutcome::WrongPassword;
        }

        match self.api.create_event(&self.form).await {
            Ok(resp) => {
                self.notifications.push(Notification::Success(resp.message));
                self.form.reset();
                SubmitOutcome::Created { id: resp.data.id }
            }
            Err(e) => {
                let message = e.server_message().unwrap_or(SUBMIT_FAILED).to_string();
                self.notify_error(message);
                SubmitOutcome::Failed
            }
        }
    }

    fn notify_error(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::Error(message.into()));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::{CreateEventResponse, CreatedEvent, HttpError};

    use super::*;

    #[derive(Clone, Copy)]
    enum Reply {
        Created,
        Rejected,
        Garbled,
    }

    #[derive(Clone)]
    struct MockEventApi {
        reply: Reply,
        categories: Option<Vec<Category>>,
        sent: Arc<Mutex<Vec<EventForm>>>,
    }

    impl MockEventApi {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                categories: Some(vec![Category {
                    id: 1,
                    name: "Music".to_string(),
                }]),
                sent: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn sent(&self) -> Vec<EventForm> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl EventApi for MockEventApi {
        async fn create_event(&self, form: &EventForm) -> Result<CreateEventResponse, HttpError> {
            let id = {
                let mut sent = self.sent.lock().unwrap();
                sent.push(form.clone());
                sent.len() as i64
            };
            match self.reply {
                Reply::Created => Ok(CreateEventResponse {
                    success: true,
                    message: "Event created successfully!".to_string(),
                    data: CreatedEvent { id },
                }),
                Reply::Rejected => Err(HttpError::Api {
                    status: 400,
                    message: format!("Category with ID {} does not exist.", form.category_id),
                }),
                Reply::Garbled => Err(HttpError::Serde(
                    serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
                )),
            }
        }

        async fn list_categories(&self) -> Result<Vec<Category>, HttpError> {
            self.categories.clone().ok_or(HttpError::Api {
                status: 500,
                message: "Failed to fetch categories".to_string(),
            })
        }
    }

    fn filled_panel(api: &MockEventApi) -> AdminPanel<MockEventApi> {
        let mut panel = AdminPanel::new(api.clone(), PasswordGate::new("letmein"));
        panel.form.set_field("eventName", "Jazz Night");
        panel.form.set_field("categoryId", "1");
        panel.form.set_promoted(true);
        panel
    }

    #[tokio::test]
    async fn test_wrong_password_sends_nothing() {
        let api = MockEventApi::new(Reply::Created);
        let mut panel = filled_panel(&api);

        panel.request_submit();
        assert!(panel.is_prompt_open());
        assert_eq!(
            panel.confirm_submit("letmein!").await,
            SubmitOutcome::WrongPassword
        );

        assert!(api.sent().is_empty());
        assert!(!panel.is_prompt_open());
        assert_eq!(panel.form.event_name, "Jazz Night");
        assert_eq!(
            panel.take_notifications(),
            vec![Notification::Error("Incorrect password".to_string())]
        );
    }

    #[tokio::test]
    async fn test_confirm_without_prompt_sends_nothing() {
        let api = MockEventApi::new(Reply::Created);
        let mut panel = filled_panel(&api);

        assert_eq!(
            panel.confirm_submit("letmein").await,
            SubmitOutcome::NotRequested
        );
        panel.request_submit();
        panel.cancel_submit();
        assert_eq!(
            panel.confirm_submit("letmein").await,
            SubmitOutcome::NotRequested
        );
        assert!(api.sent().is_empty());
    }

    #[tokio::test]
    async fn test_correct_password_sends_once_and_resets() {
        let api = MockEventApi::new(Reply::Created);
        let mut panel = filled_panel(&api);
        let draft = panel.form.clone();

        panel.request_submit();
        assert_eq!(
            panel.confirm_submit("letmein").await,
            SubmitOutcome::Created { id: 1 }
        );
        // A second click without reopening the prompt does nothing.
        assert_eq!(
            panel.confirm_submit("letmein").await,
            SubmitOutcome::NotRequested
        );

        assert_eq!(api.sent(), vec![draft]);
        assert_eq!(panel.form, EventForm::default());
        assert_eq!(
            panel.take_notifications(),
            vec![Notification::Success(
                "Event created successfully!".to_string()
            )]
        );
        assert!(panel.take_notifications().is_empty());
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_draft() {
        let api = MockEventApi::new(Reply::Rejected);
        let mut panel = filled_panel(&api);
        panel.form.set_field("categoryId", "999");
        let draft = panel.form.clone();

        panel.request_submit();
        assert_eq!(panel.confirm_submit("letmein").await, SubmitOutcome::Failed);

        assert_eq!(panel.form, draft);
        assert_eq!(
            panel.take_notifications(),
            vec![Notification::Error(
                "Category with ID 999 does not exist.".to_string()
            )]
        );

        panel.request_submit();
        panel.confirm_submit("letmein").await;
        assert_eq!(api.sent().len(), 2);
    }

    #[tokio::test]
    async fn test_unparseable_reply_uses_fallback() {
        let api = MockEventApi::new(Reply::Garbled);
        let mut panel = filled_panel(&api);
        let draft = panel.form.clone();

        panel.request_submit();
        assert_eq!(panel.confirm_submit("letmein").await, SubmitOutcome::Failed);

        assert_eq!(panel.form, draft);
        assert_eq!(
            panel.take_notifications(),
            vec![Notification::Error("Failed to submit event".to_string())]
        );
    }

    #[tokio::test]
    async fn test_load_categories() {
        let api = MockEventApi::new(Reply::Created);
        let mut panel = AdminPanel::new(api, PasswordGate::new("letmein"));
        panel.load_categories().await;
        assert_eq!(panel.categories().len(), 1);
        assert_eq!(panel.categories()[0].name, "Music");
        assert!(panel.take_notifications().is_empty());
    }

    #[tokio::test]
    async fn test_load_categories_failure() {
        let mut api = MockEventApi::new(Reply::Created);
        api.categories = None;
        let mut panel = AdminPanel::new(api, PasswordGate::new("letmein"));
        panel.load_categories().await;
        assert!(panel.categories().is_empty());
        assert_eq!(
            panel.take_notifications(),
            vec![Notification::Error("Failed to fetch categories".to_string())]
        );
    }
}
