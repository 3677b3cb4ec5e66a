// src/ui/controller.rs
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, error, info};

use crate::api::types::{
    EvaluateRequest, EvaluateResponse, GenerateRequest, GenerateResponse, StrengthenRequest,
};
use crate::models::CharClass;
use super::client::PasswordApi;
use super::clipboard::Clipboard;
use super::error::{Action, ActionError};
use super::keys::{KeyEvent, Shortcut};
use super::state::{parse_length_input, PageState};

/// How long the copy button shows its confirmation.
pub const COPY_CONFIRMATION: Duration = Duration::from_millis(1500);

/// Something the user did on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    GenerateClicked,
    CopyClicked,
    EvaluateClicked,
    StrengthenClicked,
    LengthInput(String),
    ClassToggled(CharClass, bool),
    ExistingPasswordInput(String),
    KeyDown(KeyEvent),
}

/// What handling an event produced. Presenting `result` is up to the caller.
#[derive(Debug)]
pub struct Dispatch {
    /// The key press was consumed and must not reach default handling
    pub prevent_default: bool,
    pub result: Result<(), ActionError>,
}

impl Dispatch {
    fn handled(result: Result<(), ActionError>) -> Self {
        Self { prevent_default: false, result }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strengthened {
    pub strong_password: String,
    pub evaluation: EvaluateResponse,
}

/// Drives the password page: owns its state, talks to the API and the
/// clipboard. Actions may overlap; whichever response lands last is shown.
pub struct PageController<A, C> {
    api: A,
    clipboard: C,
    page: Arc<Mutex<PageState>>,
}

impl<A, C> PageController<A, C>
where
    A: PasswordApi,
    C: Clipboard,
{
    pub fn new(api: A, clipboard: C, page: PageState) -> Self {
        Self {
            api,
            clipboard,
            page: Arc::new(Mutex::new(page)),
        }
    }

    pub fn snapshot(&self) -> PageState {
        self.page().clone()
    }

    // The guard is never held across an await
    fn page(&self) -> MutexGuard<'_, PageState> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_length_input(&self, value: impl Into<String>) {
        self.page().length_input = value.into();
    }

    pub fn set_included(&self, class: CharClass, included: bool) {
        self.page().set_included(class, included);
    }

    /// The user edited the existing password: whatever was shown about the
    /// old value no longer applies.
    pub fn input_existing_password(&self, value: impl Into<String>) {
        let mut page = self.page();
        page.existing_password = value.into();
        page.reset_existing_evaluation();
    }

    pub async fn generate(&self) -> Result<GenerateResponse, ActionError> {
        let request = {
            let page = self.page();
            GenerateRequest {
                length: parse_length_input(&page.length_input),
                include_uppercase: page.include_uppercase as i64,
                include_lowercase: page.include_lowercase as i64,
                include_numbers: page.include_numbers as i64,
                include_symbols: page.include_symbols as i64,
            }
        };
        debug!("Requesting password generation: {:?}", request);

        let response = self
            .api
            .generate(&request)
            .await
            .map_err(|source| ActionError::Api { action: Action::Generate, source })?;

        let mut page = self.page();
        page.password_output = response.password.clone();
        page.generated_strength.render(response.score);
        info!("Generated password with score {}", response.score);

        Ok(response)
    }

    pub async fn evaluate(&self) -> Result<EvaluateResponse, ActionError> {
        let password = self.existing_password_for(Action::Evaluate)?;

        let response = self
            .api
            .evaluate(&EvaluateRequest { password })
            .await
            .map_err(|source| ActionError::Api { action: Action::Evaluate, source })?;

        let mut page = self.page();
        page.existing_strength.render(response.score);
        page.feedback.show(response.feedback.clone());
        info!("Evaluated existing password with score {}", response.score);

        Ok(response)
    }

    /// Strengthens the existing password, writes the result back into the
    /// field and then evaluates the updated field.
    pub async fn strengthen(&self) -> Result<Strengthened, ActionError> {
        let password = self.existing_password_for(Action::Strengthen)?;

        let response = self
            .api
            .strengthen(&StrengthenRequest { password })
            .await
            .map_err(|source| ActionError::Api { action: Action::Strengthen, source })?;

        // A programmatic write, not an edit: no reset here
        self.page().existing_password = response.strong_password.clone();

        let evaluation = self.evaluate().await?;

        Ok(Strengthened {
            strong_password: response.strong_password,
            evaluation,
        })
    }

    pub async fn copy(&self) -> Result<(), ActionError> {
        let password = self.page().password_output.clone();
        if password.is_empty() {
            return Err(ActionError::NothingToCopy);
        }

        self.clipboard.write_text(&password).await?;

        let ticket = self.page().copy_button.confirm();
        let page = Arc::clone(&self.page);
        tokio::spawn(async move {
            tokio::time::sleep(COPY_CONFIRMATION).await;
            page.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .copy_button
                .restore(ticket);
        });

        Ok(())
    }

    /// Keeps the copied password available after the page goes away.
    pub async fn persist_clipboard(&self) -> Result<(), ActionError> {
        if self.page().copy_button.ticket() == 0 {
            return Ok(());
        }
        self.clipboard.persist().await?;
        Ok(())
    }

    pub async fn dispatch(&self, event: UiEvent) -> Dispatch {
        let dispatch = match event {
            UiEvent::GenerateClicked => Dispatch::handled(self.generate().await.map(drop)),
            UiEvent::CopyClicked => Dispatch::handled(self.copy().await),
            UiEvent::EvaluateClicked => Dispatch::handled(self.evaluate().await.map(drop)),
            UiEvent::StrengthenClicked => Dispatch::handled(self.strengthen().await.map(drop)),
            UiEvent::LengthInput(value) => {
                self.set_length_input(value);
                Dispatch::handled(Ok(()))
            }
            UiEvent::ClassToggled(class, included) => {
                self.set_included(class, included);
                Dispatch::handled(Ok(()))
            }
            UiEvent::ExistingPasswordInput(value) => {
                self.input_existing_password(value);
                Dispatch::handled(Ok(()))
            }
            UiEvent::KeyDown(key) => match Shortcut::from_key(&key) {
                Some(Shortcut::Generate) => Dispatch {
                    prevent_default: true,
                    result: self.generate().await.map(drop),
                },
                Some(Shortcut::Copy) => Dispatch {
                    prevent_default: true,
                    result: self.copy().await,
                },
                None => Dispatch::handled(Ok(())),
            },
        };

        if let Err(e) = &dispatch.result {
            if e.is_user_error() {
                debug!("Rejected {}: {}", e.action(), e);
            } else {
                error!("API error: {}", e);
            }
        }

        dispatch
    }

    fn existing_password_for(&self, action: Action) -> Result<String, ActionError> {
        let password = self.page().existing_password.trim().to_string();
        if password.is_empty() {
            return Err(ActionError::EmptyInput { action });
        }
        Ok(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::StrengthenResponse;
    use crate::ui::client::{ApiError, HttpPasswordApi};
    use crate::ui::clipboard::ClipboardError;
    use crate::ui::state::{COPY_CONFIRMED_LABEL, COPY_IDLE_LABEL};
    use crate::ui::strength::{StrengthBand, UNEVALUATED_TEXT};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Generate(GenerateRequest),
        Evaluate(EvaluateRequest),
        Strengthen(StrengthenRequest),
    }

    #[derive(Default)]
    struct FakeApi {
        generate: Option<GenerateResponse>,
        evaluate: Option<EvaluateResponse>,
        strengthen: Option<StrengthenResponse>,
        calls: Mutex<Vec<Call>>,
    }

    impl FakeApi {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn unavailable(endpoint: &'static str) -> ApiError {
        ApiError::Status { endpoint, status: 503 }
    }

    #[async_trait]
    impl PasswordApi for FakeApi {
        async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
            self.calls.lock().unwrap().push(Call::Generate(request.clone()));
            self.generate.clone().ok_or_else(|| unavailable("/generate"))
        }

        async fn evaluate(&self, request: &EvaluateRequest) -> Result<EvaluateResponse, ApiError> {
            self.calls.lock().unwrap().push(Call::Evaluate(request.clone()));
            self.evaluate.clone().ok_or_else(|| unavailable("/evaluate"))
        }

        async fn strengthen(&self, request: &StrengthenRequest) -> Result<StrengthenResponse, ApiError> {
            self.calls.lock().unwrap().push(Call::Strengthen(request.clone()));
            self.strengthen.clone().ok_or_else(|| unavailable("/strengthen"))
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        fail: bool,
        written: Mutex<Vec<String>>,
        persisted: AtomicUsize,
    }

    #[async_trait]
    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::WriteFailed("permission denied".into()));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }

        async fn persist(&self) -> Result<(), ClipboardError> {
            self.persisted.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn controller(api: FakeApi) -> PageController<FakeApi, FakeClipboard> {
        PageController::new(api, FakeClipboard::default(), PageState::new(12))
    }

    #[tokio::test]
    async fn test_generate_renders_password_and_band() {
        let api = FakeApi {
            generate: Some(GenerateResponse {
                password: "Ab3!xZ9@qT2#".into(),
                score: 85,
                feedback: String::new(),
            }),
            ..Default::default()
        };
        let controller = controller(api);

        let dispatch = controller.dispatch(UiEvent::GenerateClicked).await;
        assert!(dispatch.result.is_ok());

        let page = controller.snapshot();
        assert_eq!(page.password_output, "Ab3!xZ9@qT2#");
        assert_eq!(page.generated_strength.band(), Some(StrengthBand::VeryStrong));
        assert_eq!(page.generated_strength.width_percent(), 100);
        assert_eq!(
            controller.api.calls(),
            vec![Call::Generate(GenerateRequest {
                length: Some(12),
                include_uppercase: 1,
                include_lowercase: 1,
                include_numbers: 1,
                include_symbols: 1,
            })]
        );
    }

    #[tokio::test]
    async fn test_generate_sends_form_values_unclamped() {
        let controller = controller(FakeApi::default());
        controller.dispatch(UiEvent::LengthInput("300".into())).await;
        controller.dispatch(UiEvent::ClassToggled(CharClass::Symbols, false)).await;
        controller.dispatch(UiEvent::ClassToggled(CharClass::Uppercase, false)).await;

        let dispatch = controller.dispatch(UiEvent::GenerateClicked).await;
        let err = dispatch.result.unwrap_err();
        assert_eq!(err.alert_message(), "Nepodarilo sa spojiť so serverom pre generovanie hesla.");
        assert_eq!(
            controller.api.calls(),
            vec![Call::Generate(GenerateRequest {
                length: Some(300),
                include_uppercase: 0,
                include_lowercase: 1,
                include_numbers: 1,
                include_symbols: 0,
            })]
        );
        assert_eq!(controller.snapshot().password_output, "");
    }

    #[tokio::test]
    async fn test_evaluate_empty_input_issues_no_request() {
        let controller = controller(FakeApi::default());
        controller.dispatch(UiEvent::ExistingPasswordInput("   ".into())).await;

        let dispatch = controller.dispatch(UiEvent::EvaluateClicked).await;
        let err = dispatch.result.unwrap_err();
        assert!(matches!(err, ActionError::EmptyInput { action: Action::Evaluate }));
        assert_eq!(err.alert_message(), "Prosím, zadajte heslo na vyhodnotenie");
        assert!(controller.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_updates_indicator_and_feedback() {
        let api = FakeApi {
            evaluate: Some(EvaluateResponse { score: 25, feedback: "Too common".into() }),
            ..Default::default()
        };
        let controller = controller(api);
        controller.input_existing_password("  password123 ");

        let dispatch = controller.dispatch(UiEvent::EvaluateClicked).await;
        assert!(dispatch.result.is_ok());

        let page = controller.snapshot();
        assert_eq!(page.existing_strength.band(), Some(StrengthBand::Weak));
        assert_eq!(page.existing_strength.width_percent(), 40);
        assert_eq!(page.feedback.content, "Too common");
        assert!(page.feedback.visible);
        assert_eq!(
            controller.api.calls(),
            vec![Call::Evaluate(EvaluateRequest { password: "password123".into() })]
        );
    }

    #[tokio::test]
    async fn test_strengthen_then_evaluates_updated_password() {
        let api = FakeApi {
            strengthen: Some(StrengthenResponse { strong_password: "W3akP@ss!2024".into() }),
            evaluate: Some(EvaluateResponse { score: 90, feedback: "Heslo je silné!".into() }),
            ..Default::default()
        };
        let controller = controller(api);
        controller.input_existing_password("weakpass");

        let outcome = controller.strengthen().await.unwrap();
        assert_eq!(
            outcome,
            Strengthened {
                strong_password: "W3akP@ss!2024".into(),
                evaluation: EvaluateResponse { score: 90, feedback: "Heslo je silné!".into() },
            }
        );

        let page = controller.snapshot();
        assert_eq!(page.existing_password, "W3akP@ss!2024");
        assert_eq!(page.existing_strength.band(), Some(StrengthBand::VeryStrong));
        assert_eq!(page.feedback.content, "Heslo je silné!");
        assert_eq!(
            controller.api.calls(),
            vec![
                Call::Strengthen(StrengthenRequest { password: "weakpass".into() }),
                Call::Evaluate(EvaluateRequest { password: "W3akP@ss!2024".into() }),
            ]
        );
    }

    #[tokio::test]
    async fn test_strengthen_empty_input_issues_no_request() {
        let controller = controller(FakeApi::default());
        let err = controller.strengthen().await.unwrap_err();
        assert_eq!(err.alert_message(), "Prosím, zadajte heslo na vylepšenie");
        assert!(controller.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_strengthen_failure_keeps_input() {
        let controller = controller(FakeApi::default());
        controller.input_existing_password("weakpass");

        let err = controller.strengthen().await.unwrap_err();
        assert_eq!(err.action(), Action::Strengthen);
        assert_eq!(err.alert_message(), "Nepodarilo sa spojiť so serverom pre vylepšenie hesla.");
        assert_eq!(controller.snapshot().existing_password, "weakpass");
        assert_eq!(controller.api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_strengthen_reports_failed_follow_up_evaluation() {
        let api = FakeApi {
            strengthen: Some(StrengthenResponse { strong_password: "W3akP@ss!2024".into() }),
            ..Default::default()
        };
        let controller = controller(api);
        controller.input_existing_password("weakpass");

        let err = controller.strengthen().await.unwrap_err();
        assert_eq!(err.action(), Action::Evaluate);
        assert_eq!(controller.snapshot().existing_password, "W3akP@ss!2024");
    }

    #[tokio::test]
    async fn test_editing_resets_evaluation() {
        let api = FakeApi {
            evaluate: Some(EvaluateResponse { score: 25, feedback: "Too common".into() }),
            ..Default::default()
        };
        let controller = controller(api);
        controller.input_existing_password("password123");
        controller.evaluate().await.unwrap();

        controller.dispatch(UiEvent::ExistingPasswordInput("password1234".into())).await;

        let page = controller.snapshot();
        assert_eq!(page.existing_password, "password1234");
        assert_eq!(page.existing_strength.width_percent(), 0);
        assert_eq!(page.existing_strength.text(), UNEVALUATED_TEXT);
        assert_eq!(page.feedback.content, "");
        assert!(!page.feedback.visible);
    }

    #[tokio::test]
    async fn test_copy_without_password_leaves_clipboard_alone() {
        let controller = controller(FakeApi::default());

        let dispatch = controller.dispatch(UiEvent::CopyClicked).await;
        let err = dispatch.result.unwrap_err();
        assert_eq!(err.alert_message(), "Najprv vygenerujte heslo");
        assert!(controller.clipboard.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clipboard_failure_has_its_own_alert() {
        let controller = PageController::new(
            FakeApi::default(),
            FakeClipboard { fail: true, ..Default::default() },
            PageState::new(12),
        );
        controller.page().password_output = "Ab3!xZ9@qT2#".into();

        let err = controller.copy().await.unwrap_err();
        assert_eq!(err.alert_message(), "Kopírovanie do schránky zlyhalo.");
        assert_eq!(controller.snapshot().copy_button.label(), COPY_IDLE_LABEL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_confirmation_reverts_after_delay() {
        let controller = controller(FakeApi::default());
        controller.page().password_output = "Ab3!xZ9@qT2#".into();

        controller.copy().await.unwrap();
        assert_eq!(*controller.clipboard.written.lock().unwrap(), vec!["Ab3!xZ9@qT2#".to_string()]);
        assert_eq!(controller.snapshot().copy_button.label(), COPY_CONFIRMED_LABEL);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(controller.snapshot().copy_button.label(), COPY_CONFIRMED_LABEL);

        // copying again restarts the confirmation
        controller.copy().await.unwrap();
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(controller.snapshot().copy_button.label(), COPY_CONFIRMED_LABEL);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(controller.snapshot().copy_button.label(), COPY_IDLE_LABEL);
    }

    #[tokio::test]
    async fn test_keyboard_shortcuts_prevent_default() {
        let api = FakeApi {
            generate: Some(GenerateResponse {
                password: "Ab3!xZ9@qT2#".into(),
                score: 85,
                feedback: String::new(),
            }),
            ..Default::default()
        };
        let controller = controller(api);

        let dispatch = controller.dispatch(UiEvent::KeyDown(KeyEvent::alt('g'))).await;
        assert!(dispatch.prevent_default);
        assert!(dispatch.result.is_ok());
        assert_eq!(controller.api.calls().len(), 1);

        let dispatch = controller.dispatch(UiEvent::KeyDown(KeyEvent::alt('c'))).await;
        assert!(dispatch.prevent_default);
        assert!(dispatch.result.is_ok());
        assert_eq!(*controller.clipboard.written.lock().unwrap(), vec!["Ab3!xZ9@qT2#".to_string()]);

        let dispatch = controller.dispatch(UiEvent::KeyDown(KeyEvent::plain('g'))).await;
        assert!(!dispatch.prevent_default);
        assert_eq!(controller.api.calls().len(), 1);
    }

    // Answers the n-th generate call after `delays[n]`
    struct DelayedApi {
        delays: Vec<(Duration, &'static str, i32)>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PasswordApi for DelayedApi {
        async fn generate(&self, _: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let (delay, password, score) = self.delays[call];
            tokio::time::sleep(delay).await;
            Ok(GenerateResponse { password: password.into(), score, feedback: String::new() })
        }

        async fn evaluate(&self, _: &EvaluateRequest) -> Result<EvaluateResponse, ApiError> {
            Err(unavailable("/evaluate"))
        }

        async fn strengthen(&self, _: &StrengthenRequest) -> Result<StrengthenResponse, ApiError> {
            Err(unavailable("/strengthen"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_generates_show_last_response() {
        let api = DelayedApi {
            delays: vec![
                (Duration::from_millis(300), "slow-first-Ab3!", 10),
                (Duration::from_millis(100), "fast-second-Cd4@", 90),
            ],
            calls: AtomicUsize::new(0),
        };
        let controller = PageController::new(api, FakeClipboard::default(), PageState::new(12));

        let (first, second) = tokio::join!(controller.generate(), controller.generate());
        assert_eq!(first.unwrap().password, "slow-first-Ab3!");
        assert_eq!(second.unwrap().password, "fast-second-Cd4@");

        // the request issued first resolved last and is what the page shows
        let page = controller.snapshot();
        assert_eq!(page.password_output, "slow-first-Ab3!");
        assert_eq!(page.generated_strength.band(), Some(StrengthBand::VeryWeak));
    }

    #[tokio::test]
    async fn test_persist_clipboard_only_after_copy() {
        let controller = controller(FakeApi::default());
        controller.persist_clipboard().await.unwrap();
        assert_eq!(controller.clipboard.persisted.load(Ordering::SeqCst), 0);

        controller.page().password_output = "Ab3!xZ9@qT2#".into();
        controller.copy().await.unwrap();
        controller.persist_clipboard().await.unwrap();
        assert_eq!(controller.clipboard.persisted.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_against_running_service() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let dir = tempfile::tempdir().unwrap();
        let server = crate::api::build_server(listener, dir.path().to_path_buf()).unwrap();
        let handle = server.handle();
        tokio::spawn(server);

        let controller = PageController::new(
            HttpPasswordApi::new(format!("http://127.0.0.1:{port}/api")),
            FakeClipboard::default(),
            PageState::new(16),
        );

        controller.generate().await.unwrap();
        let page = controller.snapshot();
        assert_eq!(page.password_output.chars().count(), 16);
        assert_eq!(page.generated_strength.band(), Some(StrengthBand::VeryStrong));

        controller.input_existing_password("weakpass");
        let outcome = controller.strengthen().await.unwrap();
        let page = controller.snapshot();
        assert_eq!(page.existing_password, outcome.strong_password);
        assert_eq!(outcome.strong_password.chars().count(), 12);
        assert!(page.feedback.visible);

        handle.stop(false).await;
    }
}
