//! Dialog Service - local and cross-client dialogs
//!
//! `open` decides where a dialog is shown: on the listed users' clients when
//! recipients are known (explicitly, or as the owners of an actor), otherwise
//! on this client. Remote answers come back through the dialog protocol.

use std::sync::Arc;

use async_trait::async_trait;
use pde_domain::UserId;
use pde_shared::{DialogData, DialogOptions, DialogRequestError, InputDialogRequest, InputField, InputType};
use serde_json::{Map, Value};

use crate::ports::inbound::DialogRequestHandler;
use crate::ports::outbound::{
    CanvasPort, CanvasToken, DialogPresenter, DialogRequestPort, Localizer, UserDirectory,
};
use crate::ui::presentation::dialogs::{InputDialog, TextEditor, TokenSelector};

#[derive(Clone)]
pub struct DialogService {
    requests: Arc<dyn DialogRequestPort>,
    presenter: Arc<dyn DialogPresenter>,
    localizer: Arc<dyn Localizer>,
    users: Arc<dyn UserDirectory>,
    canvas: Arc<dyn CanvasPort>,
}

impl DialogService {
    pub fn new(
        requests: Arc<dyn DialogRequestPort>,
        presenter: Arc<dyn DialogPresenter>,
        localizer: Arc<dyn Localizer>,
        users: Arc<dyn UserDirectory>,
        canvas: Arc<dyn CanvasPort>,
    ) -> Self {
        Self {
            requests,
            presenter,
            localizer,
            users,
            canvas,
        }
    }

    /// Show a dialog and wait for its result; `None` means it was closed
    /// without an answer.
    pub async fn open(
        &self,
        input_type: InputType,
        data: DialogData,
        mut options: DialogOptions,
    ) -> Result<Option<Value>, DialogRequestError> {
        if options.to_users.is_none() {
            if let Some(actor) = options.send_to_actor_owner.as_deref() {
                let owners = self.users.players_for_actor(actor, options.allow_gm).await;
                if !owners.is_empty() {
                    options.to_users = Some(owners);
                }
            }
        }

        let Some(recipients) = options.recipients().map(<[UserId]>::to_vec) else {
            return Ok(self.show_local(input_type, data, options).await);
        };

        tracing::info!(
            input_type = %input_type,
            recipients = recipients.len(),
            "Requesting dialog from other clients"
        );
        let result = self
            .requests
            .request_dialog(input_type, data, options, recipients)
            .await?;
        Ok(Some(result).filter(|value| !value.is_null()))
    }

    /// Show a dialog on this client only.
    pub async fn show_local(
        &self,
        input_type: InputType,
        data: DialogData,
        options: DialogOptions,
    ) -> Option<Value> {
        let (dialog, handle) = InputDialog::open(input_type, data, options, self.localizer.as_ref());
        self.presenter.show_input_dialog(dialog);
        handle.wait().await
    }

    /// Single text input; resolves to the entered value.
    pub async fn input(
        &self,
        message: impl Into<String>,
        options: DialogOptions,
    ) -> Result<Option<Value>, DialogRequestError> {
        let data = DialogData::with_message(message).input(InputField::text());
        let result = self.open(InputType::Input, data, options).await?;
        Ok(first_value(result))
    }

    /// Single select; resolves to the chosen key.
    pub async fn select(
        &self,
        message: impl Into<String>,
        choices: Map<String, Value>,
        options: DialogOptions,
    ) -> Result<Option<Value>, DialogRequestError> {
        let data = DialogData::with_message(message).input(InputField::select(choices));
        let result = self.open(InputType::Input, data, options).await?;
        Ok(first_value(result))
    }

    pub async fn confirm(
        &self,
        message: impl Into<String>,
        options: DialogOptions,
    ) -> Result<Option<bool>, DialogRequestError> {
        let result = self
            .open(InputType::Confirm, DialogData::with_message(message), options)
            .await?;
        Ok(result.and_then(|value| value.as_bool()))
    }

    pub async fn info(
        &self,
        header: impl Into<String>,
        information: Vec<String>,
        options: DialogOptions,
    ) -> Result<(), DialogRequestError> {
        let data = DialogData::default().header(header).information(information);
        self.open(InputType::Info, data, options).await?;
        Ok(())
    }

    /// Pick tokens; an empty `tokens` list offers the active scene's tokens.
    pub async fn select_tokens(&self, tokens: Vec<CanvasToken>, message: Option<String>) -> Vec<CanvasToken> {
        let (selector, handle) =
            TokenSelector::open(tokens, message, Arc::clone(&self.canvas), self.localizer.as_ref());
        self.presenter.show_token_selector(selector);
        handle.wait().await
    }

    pub async fn edit_text(&self, text: impl Into<String>) -> String {
        let (editor, handle) = TextEditor::open(text, self.localizer.as_ref());
        self.presenter.show_text_editor(editor);
        handle.wait().await
    }
}

fn first_value(result: Option<Value>) -> Option<Value> {
    match result? {
        Value::Array(values) => values.into_iter().next(),
        _ => None,
    }
}

#[async_trait]
impl DialogRequestHandler for DialogService {
    async fn handle(&self, request: InputDialogRequest) -> Value {
        self.show_local(request.input_type, request.data, request.options)
            .await
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::localization::StaticLocalizer;
    use crate::ports::outbound::{
        CanvasPoint, MockCanvasPort, MockDialogPresenter, MockDialogRequestPort, MockUserDirectory,
    };
    use crate::ui::presentation::dialogs::DialogButton;
    use pde_domain::Signature;
    use serde_json::json;

    fn user(id: &str) -> UserId {
        UserId::parse(id).unwrap()
    }

    struct Ports {
        requests: MockDialogRequestPort,
        presenter: MockDialogPresenter,
        users: MockUserDirectory,
        canvas: MockCanvasPort,
    }

    impl Ports {
        fn new() -> Self {
            Self {
                requests: MockDialogRequestPort::new(),
                presenter: MockDialogPresenter::new(),
                users: MockUserDirectory::new(),
                canvas: MockCanvasPort::new(),
            }
        }

        fn build(self) -> DialogService {
            DialogService::new(
                Arc::new(self.requests),
                Arc::new(self.presenter),
                Arc::new(StaticLocalizer::english()),
                Arc::new(self.users),
                Arc::new(self.canvas),
            )
        }
    }

    #[tokio::test]
    async fn without_recipients_the_dialog_is_shown_locally() {
        let mut ports = Ports::new();
        ports.requests.expect_request_dialog().never();
        ports
            .presenter
            .expect_show_input_dialog()
            .times(1)
            .returning(|dialog| dialog.submit(DialogButton::Confirm));

        let answer = ports.build().confirm("Proceed?", DialogOptions::default()).await;
        assert_eq!(answer, Ok(Some(true)));
    }

    #[tokio::test]
    async fn explicit_recipients_go_remote() {
        let mut ports = Ports::new();
        ports.presenter.expect_show_input_dialog().never();
        ports
            .requests
            .expect_request_dialog()
            .withf(|kind, data, _, recipients| {
                *kind == InputType::Confirm
                    && data.message.as_deref() == Some("Proceed?")
                    && recipients == &vec![UserId::parse("user-42").unwrap()]
            })
            .times(1)
            .returning(|_, _, _, _| Ok(json!(false)));

        let answer = ports
            .build()
            .confirm("Proceed?", DialogOptions::to_users(vec![user("user-42")]))
            .await;
        assert_eq!(answer, Ok(Some(false)));
    }

    #[tokio::test]
    async fn actor_owners_become_recipients() {
        let mut ports = Ports::new();
        ports
            .users
            .expect_players_for_actor()
            .withf(|actor, allow_gm| actor.to_string() == "Actor.hero" && *allow_gm)
            .times(1)
            .returning(|_, _| vec![UserId::parse("owner").unwrap()]);
        ports
            .requests
            .expect_request_dialog()
            .withf(|_, _, options, recipients| {
                options.to_users.as_deref() == Some(&[UserId::parse("owner").unwrap()][..])
                    && recipients.len() == 1
            })
            .returning(|_, _, _, _| Ok(json!(["Rope"])));

        let answer = ports
            .build()
            .input("Which item?", DialogOptions::to_actor_owner("Actor.hero", true))
            .await;
        assert_eq!(answer, Ok(Some(json!("Rope"))));
    }

    #[tokio::test]
    async fn actor_without_owners_falls_back_to_local() {
        let mut ports = Ports::new();
        ports.users.expect_players_for_actor().returning(|_, _| vec![]);
        ports.requests.expect_request_dialog().never();
        ports
            .presenter
            .expect_show_input_dialog()
            .returning(|dialog| dialog.close());

        let answer = ports
            .build()
            .confirm("Proceed?", DialogOptions::to_actor_owner("Actor.npc", false))
            .await;
        assert_eq!(answer, Ok(None));
    }

    #[tokio::test]
    async fn remote_null_means_closed() {
        let mut ports = Ports::new();
        ports
            .requests
            .expect_request_dialog()
            .returning(|_, _, _, _| Ok(Value::Null));

        let answer = ports
            .build()
            .select("Pick", Map::new(), DialogOptions::to_users(vec![user("p")]))
            .await;
        assert_eq!(answer, Ok(None));
    }

    #[tokio::test]
    async fn remote_errors_propagate() {
        let mut ports = Ports::new();
        ports
            .requests
            .expect_request_dialog()
            .returning(|_, _, _, _| Err(DialogRequestError::NoResponse { timeout_ms: 10 }));

        let answer = ports
            .build()
            .info("Note", vec!["Read me".into()], DialogOptions::to_users(vec![user("p")]))
            .await;
        assert_eq!(answer, Err(DialogRequestError::NoResponse { timeout_ms: 10 }));
    }

    #[tokio::test]
    async fn handler_answers_with_the_local_result() {
        let mut ports = Ports::new();
        ports.presenter.expect_show_input_dialog().returning(|mut dialog| {
            dialog.set_input_value(0, json!("typed"));
            dialog.submit(DialogButton::Confirm);
        });
        let service = ports.build();

        let request = InputDialogRequest {
            input_type: InputType::Input,
            data: DialogData::with_message("Name?").input(InputField::text()),
            options: DialogOptions::to_users(vec![user("me")]),
            user_ids: vec![user("me")],
            signature: Signature::parse("s").unwrap(),
        };
        assert_eq!(service.handle(request).await, json!(["typed"]));
    }

    #[tokio::test]
    async fn handler_answers_null_when_closed() {
        let mut ports = Ports::new();
        ports.presenter.expect_show_input_dialog().returning(drop);
        let service = ports.build();

        let request = InputDialogRequest {
            input_type: InputType::Drop,
            data: DialogData::default(),
            options: DialogOptions::default(),
            user_ids: vec![user("me")],
            signature: Signature::parse("s").unwrap(),
        };
        assert_eq!(service.handle(request).await, Value::Null);
    }

    #[tokio::test]
    async fn token_and_text_dialogs_resolve_through_the_presenter() {
        let mut ports = Ports::new();
        ports.canvas.expect_token_placeables().returning(|| {
            vec![CanvasToken {
                id: "t1".into(),
                name: "Goblin".into(),
                img: String::new(),
                center: CanvasPoint { x: 1.0, y: 2.0 },
            }]
        });
        ports.presenter.expect_show_token_selector().returning(|mut selector| {
            selector.toggle("t1");
            selector.confirm();
        });
        ports.presenter.expect_show_text_editor().returning(|editor| editor.close());
        let service = ports.build();

        let tokens = service.select_tokens(vec![], None).await;
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "Goblin");
        assert_eq!(service.edit_text("<p>keep</p>").await, "<p>keep</p>");
    }
}
