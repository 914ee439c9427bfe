use std::future::Future;

use deck_client::{ApiClient, ApiError, ApiResult};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;

/// Navigation requested from outside the router, e.g. after a 401.
/// [`NavigationOutlet`] performs it.
#[derive(Clone, Copy)]
pub struct PendingNavigation(RwSignal<Option<String>>);

impl PendingNavigation {
    pub fn go(&self, route: AppRoute) {
        self.0.set(Some(route.path()));
    }
}

/// Installs the API client and the navigation channel. Call once at the root.
pub fn provide_api(client: ApiClient) {
    provide_context(client);
    provide_context(PendingNavigation(RwSignal::new(None)));
}

/// Access to the backend from a page.
#[derive(Clone)]
pub struct ApiHandle {
    client: ApiClient,
    navigation: PendingNavigation,
}

pub fn use_api() -> ApiHandle {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let navigation = use_context::<PendingNavigation>()
        .unwrap_or_else(|| PendingNavigation(RwSignal::new(None)));
    ApiHandle { client, navigation }
}

impl ApiHandle {
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn navigate(&self, route: AppRoute) {
        self.navigation.go(route);
    }

    /// Passes `result` through, sending the user to the login view when the
    /// backend rejected the session. The client has already dropped the token.
    pub fn observe<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(ApiError::Unauthorized) = &result {
            self.navigate(AppRoute::Login);
        }
        result
    }

    /// Forgets the session and returns to the login view.
    pub fn logout(&self) {
        self.client.handle_auth_error();
        tracing::info!("logged out");
        self.navigate(AppRoute::Login);
    }
}

/// Applies [`PendingNavigation`] requests. Must sit inside `<Router>`.
#[component]
pub fn NavigationOutlet() -> impl IntoView {
    let pending = expect_context::<PendingNavigation>().0;
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(path) = pending.get() {
            pending.set(None);
            navigate(&path, Default::default());
        }
    });
}

/// Runs a future in the browser. Event handlers never fire during SSR.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    wasm_bindgen_futures::spawn_local(fut);

    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use deck_client::{ApiConfig, ApiSuccess, MemoryTokenStore, TokenStore};

    use super::*;

    fn with_api<R>(store: &MemoryTokenStore, f: impl FnOnce(ApiHandle, PendingNavigation) -> R) -> R {
        let owner = Owner::new();
        owner.with(|| {
            provide_api(ApiClient::new(
                ApiConfig::new("http://localhost:5000/api"),
                Arc::new(store.clone()),
            ));
            f(use_api(), expect_context::<PendingNavigation>())
        })
    }

    #[test]
    fn unauthorized_requests_login_view() {
        let store = MemoryTokenStore::new();
        with_api(&store, |api, pending| {
            assert_eq!(pending.0.get_untracked(), None);

            let result = api.observe::<()>(Err(ApiError::Unauthorized));

            assert_eq!(result, Err(ApiError::Unauthorized));
            assert_eq!(pending.0.get_untracked().as_deref(), Some("/login"));
        });
    }

    #[test]
    fn other_outcomes_do_not_navigate() {
        let store = MemoryTokenStore::with_token("abc123");
        with_api(&store, |api, pending| {
            let _ = api.observe::<()>(Err(ApiError::RequestFailed { status: 500 }));
            let _ = api.observe::<()>(Err(ApiError::network("connection refused")));
            let ok = api.observe(Ok(ApiSuccess {
                data: 1u8,
                status: 200,
            }));

            assert_eq!(ok.map(|reply| reply.data), Ok(1));
            assert_eq!(pending.0.get_untracked(), None);
            assert_eq!(store.get().as_deref(), Some("abc123"));
        });
    }

    #[test]
    fn logout_clears_token_and_requests_login_view() {
        let store = MemoryTokenStore::with_token("abc123");
        with_api(&store, |api, pending| {
            api.logout();

            assert_eq!(store.get(), None);
            assert_eq!(pending.0.get_untracked().as_deref(), Some("/login"));
        });
    }
}
