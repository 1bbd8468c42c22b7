use anyhow::{anyhow, Context};
use closure_traits::{ChannelCallBack, ChannelCallBackOutput};
use decal_shared::{
    const_config::path::{PathSpec, PATH_HEALTH_CHECK},
    internal_error,
    token::{AccessToken, TokenPair},
    uac::{LoginResponse, User},
};
use futures::channel::oneshot;
use reqwest::{header::AUTHORIZATION, StatusCode};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use crate::token_store::TokenStore;

pub mod api;

/// Sent as the query of GET requests that take no arguments
pub const DUMMY_ARGUMENT: &[(&str, &str)] = &[("", "")];

/// HTTP implementation of the remote service facade.
///
/// Cheap to clone, all clones share the same connection pool, server address
/// and tokens.
#[derive(Debug, Clone)]
pub struct Client {
    api_client: reqwest::Client,
    token_store: Arc<dyn TokenStore>,
    inner: Arc<Mutex<ClientInner>>,
}

#[derive(Debug)]
struct ClientInner {
    server_address: String,
    /// Copy of the stored access token used to build request headers
    /// synchronously. Kept in step with the token store by this type only.
    access_token: Option<AccessToken>,
}

impl ClientInner {
    #[tracing::instrument]
    fn new(server_address: String) -> Self {
        Self {
            server_address,
            access_token: None,
        }
    }
}

impl Client {
    #[tracing::instrument(name = "NEW CLIENT-CORE", skip(token_store))]
    pub fn new(server_address: String, token_store: Arc<dyn TokenStore>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            server_address.starts_with("http"),
            "server address must start with http but got {server_address:?}"
        );
        let api_client = reqwest::Client::builder()
            .user_agent(concat!("decal-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("unable to create reqwest client")?;
        Ok(Self {
            api_client,
            token_store,
            inner: Arc::new(Mutex::new(ClientInner::new(server_address))),
        })
    }

    pub fn server_address(&self) -> String {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .server_address
            .clone()
    }

    #[tracing::instrument]
    pub async fn health_check(&self) -> anyhow::Result<()> {
        self.request_empty(PATH_HEALTH_CHECK, &DUMMY_ARGUMENT).await
    }

    #[tracing::instrument(skip(args, on_done))]
    // WARNING: Must skip args as it my contain sensitive info and "safe" versions
    // would usually already be logged by the caller
    fn initiate_request<T, F, O>(&self, path_spec: PathSpec, args: &T, on_done: F)
    where
        T: serde::Serialize + Debug + ?Sized,
        F: ChannelCallBack<O>,
        O: ChannelCallBackOutput,
    {
        let uses_query_args = path_spec.uses_query_args();
        let (url, bearer) = {
            let guard = self.inner.lock().expect("mutex poisoned");
            (
                format!("{}{}", guard.server_address, path_spec.path),
                guard
                    .access_token
                    .as_ref()
                    .map(AccessToken::bearer_header_value),
            )
        };
        let mut request = self.api_client.request(path_spec.method, url);
        request = if uses_query_args {
            request.query(args)
        } else {
            request.json(args)
        };
        if let Some(bearer) = bearer {
            request = request.header(AUTHORIZATION, bearer);
        }
        reqwest_cross::fetch(request, on_done)
    }

    fn send_request_expect_json<T, U>(
        &self,
        path_spec: PathSpec,
        args: &T,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        T: serde::Serialize + Debug + ?Sized,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async {
            let msg = process_json_body(resp).await;
            if tx.send(msg).is_err() {
                debug!("caller stopped waiting before the response arrived");
            }
        };
        self.initiate_request(path_spec, args, on_done);
        rx
    }

    fn send_request_expect_empty<T>(
        &self,
        path_spec: PathSpec,
        args: &T,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        T: serde::Serialize + Debug + ?Sized,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async {
            let msg = process_empty(resp).await;
            if tx.send(msg).is_err() {
                debug!("caller stopped waiting before the response arrived");
            }
        };
        self.initiate_request(path_spec, args, on_done);
        rx
    }

    fn send_login_request<T>(
        &self,
        path_spec: PathSpec,
        args: &T,
    ) -> oneshot::Receiver<anyhow::Result<User>>
    where
        T: serde::Serialize + Debug + ?Sized,
    {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async {
            let msg = process_login(resp, client).await;
            if tx.send(msg).is_err() {
                debug!("caller stopped waiting for the login response");
            }
        };
        self.initiate_request(path_spec, args, on_done);
        rx
    }

    async fn request_json<T, U>(&self, path_spec: PathSpec, args: &T) -> anyhow::Result<U>
    where
        T: serde::Serialize + Debug + ?Sized,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        await_response(self.send_request_expect_json(path_spec, args)).await
    }

    async fn request_empty<T>(&self, path_spec: PathSpec, args: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize + Debug + ?Sized,
    {
        await_response(self.send_request_expect_empty(path_spec, args)).await
    }

    async fn store_tokens(&self, tokens: TokenPair) {
        self.inner.lock().expect("mutex poisoned").access_token = Some(tokens.access.clone());
        self.token_store.save(tokens).await;
    }

    async fn clear_tokens(&self) {
        self.inner.lock().expect("mutex poisoned").access_token = None;
        self.token_store.clear().await;
    }

    /// Reloads the cached access token from the token store and reports if
    /// there is one
    async fn reload_access_token(&self) -> bool {
        let stored = self.token_store.read().await;
        let has_access_token = stored.has_access_token();
        self.inner.lock().expect("mutex poisoned").access_token = stored.access;
        has_access_token
    }
}

async fn await_response<T>(rx: oneshot::Receiver<anyhow::Result<T>>) -> anyhow::Result<T> {
    match rx.await {
        Ok(outcome) => outcome,
        // The sender lives in the fetch callback, which always sends
        Err(oneshot::Canceled) => Err(anyhow!(internal_error!(
            "request was dropped before a response was received"
        ))),
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_empty(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<()> {
    let (response, status) = extract_response(response)?;
    if status.is_success() {
        Ok(())
    } else {
        Err(handle_error(response).await)
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_json_body<T>(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<T>
where
    T: Debug + serde::de::DeserializeOwned,
{
    let (response, status) = extract_response(response)?;
    if status.is_success() {
        Ok(response
            .json()
            .await
            .context("failed to parse result as json")?)
    } else {
        Err(handle_error(response).await)
    }
}

#[tracing::instrument(ret, err(Debug), skip(client))]
async fn process_login(
    response: reqwest::Result<reqwest::Response>,
    client: Client,
) -> anyhow::Result<User> {
    let (response, status) = extract_response(response)?;
    match status {
        StatusCode::OK => {
            let login_response: LoginResponse = response
                .json()
                .await
                .context("failed to parse result as json")?;
            let (tokens, user) = login_response.into_parts();
            client.store_tokens(tokens).await;
            info!(username = %user.username, role = %user.role, "login accepted by server");
            Ok(user)
        }
        _ => Err(handle_error(response).await),
    }
}

#[tracing::instrument(ret)]
async fn handle_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    debug_assert!(
        !status.is_success(),
        "this is supposed to be an error, right? Status code is: {status}"
    );
    let Ok(body) = response.text().await else {
        return anyhow!("failed to get response body");
    };
    if body.is_empty() {
        anyhow!("request failed with status code: {status} and no body")
    } else {
        anyhow!("{body}")
    }
}

/// Provides a way to standardize the error message
#[tracing::instrument(ret, err(Debug))]
fn extract_response(
    response: reqwest::Result<reqwest::Response>,
) -> anyhow::Result<(reqwest::Response, StatusCode)> {
    if response.is_err() {
        info!("Response is err: {:#?}", response);
    }
    let response = response.context("failed to send request")?;
    let status = response.status();
    Ok((response, status))
}

pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> + Send {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> + Send {}
}
