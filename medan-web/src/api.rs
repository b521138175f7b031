use crate::config::FrontendConfig;
use crate::models::session;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Method, StatusCode};
use serde_json::{Value, json};
use shared::models::{
    AdminUser, ApiError, ApproveRechargeRequest, Category, CreateCategoryRequest, Post, Report,
    SignInRequest, Transaction, error_message, extract_items, extract_number, parse_body,
    users_endpoint,
};

const SIGNIN_PATH: &str = "auth/signin";

/// Whether a request path targets the sign-in endpoint.
///
/// Sign-in is the one call that carries no bearer token and whose 401
/// must surface as an error instead of wiping the stored credentials.
pub(crate) fn is_sign_in_path(path: &str) -> bool {
    path.trim_start_matches('/').starts_with(SIGNIN_PATH)
}

thread_local! {
    static SHARED_CLIENT: OnceCell<MedanClient> = OnceCell::new();
}

/// Single point of contact with the Medan backend.
///
/// Every call funnels through [`Self::request`], which enforces the
/// header policy, the tolerant body normalization, and the failure
/// taxonomy. A 401 outside the sign-in call is the one place the wrapper
/// reaches outside itself: it wipes the persisted credentials and forces
/// navigation back to the login view.
#[derive(Clone, Debug)]
pub struct MedanClient {
    base_url: String,
    client: Client,
}

impl MedanClient {
    /// Create a new API client against the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Process-wide client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    /// The normalized base URL this client was built with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute URL for a backend-hosted asset such as a receipt image.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            self.api_url(path)
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<Value, ApiError> {
        let is_sign_in = is_sign_in_path(path);
        let url = self.api_url(path);

        let mut builder = self.client.request(method, &url);
        if !is_sign_in {
            if let Some(token) = session::stored_token() {
                builder = builder.bearer_auth(token);
            }
        }
        // GET and DELETE carry no body and therefore no Content-Type;
        // `json` sets it for the verbs that do.
        if let Some(body) = payload {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|err| {
            web_sys::console::error_1(&format!("API transport failure for {url}: {err}").into());
            ApiError::Network(err.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let body = parse_body(&text);

        if status == StatusCode::UNAUTHORIZED {
            if !is_sign_in {
                session::clear_credentials();
                force_login_redirect();
            }
            let message = error_message(&body).unwrap_or_else(|| "Unauthorized".to_string());
            return Err(ApiError::Unauthorized(message));
        }

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                format!(
                    "Error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            });
            web_sys::console::error_1(
                &format!("API error {} for {url}: {message}", status.as_u16()).into(),
            );
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    /// Issue a GET and return the normalized body.
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, path, None).await
    }

    /// Issue a POST with a JSON payload and return the normalized body.
    pub async fn post(&self, path: &str, payload: Value) -> Result<Value, ApiError> {
        self.request(Method::POST, path, Some(payload)).await
    }

    /// Issue a PUT with a JSON payload and return the normalized body.
    pub async fn put(&self, path: &str, payload: Value) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, Some(payload)).await
    }

    /// Issue a DELETE and return the normalized body.
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::DELETE, path, None).await
    }

    // ---- Auth ----

    /// Authenticate with staff credentials; the caller extracts the token
    /// from the polymorphic body.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<Value, ApiError> {
        self.post("/auth/signin", json!(request)).await
    }

    // ---- Posts ----

    /// List all posts.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(extract_items(self.get("/posts/all").await?))
    }

    /// Delete a post.
    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/posts/{id}")).await?;
        Ok(())
    }

    // ---- Reports ----

    /// List user reports.
    pub async fn list_reports(&self) -> Result<Vec<Report>, ApiError> {
        Ok(extract_items(self.get("/reports").await?))
    }

    // ---- Users ----

    /// List users, optionally narrowed to one city.
    pub async fn list_users(&self, city: &str) -> Result<Vec<AdminUser>, ApiError> {
        Ok(extract_items(self.get(&users_endpoint(city)).await?))
    }

    /// Ban a user account.
    pub async fn ban_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.post(&format!("/User/ban?userid={user_id}"), json!({}))
            .await?;
        Ok(())
    }

    /// Lift a user account ban.
    pub async fn unban_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.post(&format!("/unban?userid={user_id}"), json!({}))
            .await?;
        Ok(())
    }

    // ---- Recharges ----

    /// List recharge transactions; `pending_only` hits the narrower
    /// endpoint, every other view filters client-side.
    pub async fn list_transactions(&self, pending_only: bool) -> Result<Vec<Transaction>, ApiError> {
        let path = if pending_only {
            "/balance/admin/transactions/pending"
        } else {
            "/balance/admin/transactions"
        };
        Ok(extract_items(self.get(path).await?))
    }

    /// Approve a recharge, crediting the given amount.
    pub async fn approve_recharge(&self, id: i64, amount: f64) -> Result<(), ApiError> {
        self.post(
            &format!("/balance/admin/approve/{id}"),
            json!(ApproveRechargeRequest { amount }),
        )
        .await?;
        Ok(())
    }

    /// Reject a recharge request.
    pub async fn reject_recharge(&self, id: i64) -> Result<(), ApiError> {
        self.post(&format!("/balance/admin/reject/{id}"), json!({}))
            .await?;
        Ok(())
    }

    // ---- Categories ----

    /// List content categories, deleted ones included.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(extract_items(self.get("/categories").await?))
    }

    /// Create a content category.
    pub async fn create_category(&self, name: &str) -> Result<(), ApiError> {
        self.post(
            "/categories",
            json!(CreateCategoryRequest {
                name: name.to_string(),
            }),
        )
        .await?;
        Ok(())
    }

    /// Soft-delete a category; the record stays listed with its flag set.
    pub async fn soft_delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.put(&format!("/categories/soft-delete/{id}"), json!({}))
            .await?;
        Ok(())
    }

    // ---- Dashboard aggregates ----

    /// Total registered users.
    pub async fn total_users(&self) -> Result<f64, ApiError> {
        Ok(extract_number(&self.get("/Statistics/total-users").await?))
    }

    /// Orders awaiting processing.
    pub async fn pending_orders(&self) -> Result<f64, ApiError> {
        Ok(extract_number(
            &self.get("/Statistics/pending-orders").await?,
        ))
    }

    /// Sum of balance transactions.
    pub async fn total_balance(&self) -> Result<f64, ApiError> {
        Ok(extract_number(
            &self.get("/Statistics/total-balance-transactions").await?,
        ))
    }
}

fn force_login_redirect() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
