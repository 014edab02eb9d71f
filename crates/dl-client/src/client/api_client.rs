use crate::client::envelopes::{
    DeletedEnvelope, OrderEnvelope, OrdersEnvelope, ResultEnvelope, ReviewEnvelope,
    ReviewsEnvelope, ServiceEnvelope, ServicesEnvelope, TokenEnvelope, UserEnvelope,
};
use crate::{ClientError, ClientResult, NewOrder, NewReview, normalize_messages};

use dl_auth::Credential;
use dl_core::{
    LoginData, Order, Price, ProfileUpdate, Review, ReviewDraft, Service, ServiceDraft, SignupData,
    User,
};

use log::debug;
use reqwest::{Client as ReqwestClient, Method, Url, header::AUTHORIZATION};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the storefront REST API.
///
/// Cloning is cheap (the underlying connection pool is shared). A client
/// carrying a credential is derived with [`ApiClient::with_credential`], so
/// no bearer token is ever shared mutably between callers.
#[derive(Clone)]
pub struct ApiClient {
    pub base_url: String,
    credential: Option<Credential>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new anonymous client
    ///
    /// # Arguments
    /// * `base_url` - API URL (e.g., "http://localhost:3001")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credential: None,
            client: ReqwestClient::new(),
        }
    }

    /// Derive a client that sends `Authorization: Bearer <credential>`
    pub fn with_credential(&self, credential: &Credential) -> Self {
        Self {
            base_url: self.base_url.clone(),
            credential: Some(credential.clone()),
            client: self.client.clone(),
        }
    }

    /// Derive a client without a bearer token
    pub fn anonymous(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            credential: None,
            client: self.client.clone(),
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Resolve path segments against the base URL, percent-encoding each one
    pub(crate) fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::invalid_url(&self.base_url, e.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| ClientError::invalid_url(&self.base_url, "URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Build a request with the bearer header when a credential is attached
    fn request(&self, method: Method, segments: &[&str]) -> ClientResult<reqwest::RequestBuilder> {
        let url = self.endpoint(segments)?;
        debug!("API call: {method} {}", url.path());

        let mut req = self.client.request(method, url);

        if let Some(ref credential) = self.credential {
            req = req.header(AUTHORIZATION, credential.bearer());
        }

        Ok(req)
    }

    fn request_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<reqwest::RequestBuilder> {
        Ok(self.request(method, segments)?.json(body))
    }

    /// Execute request, normalize error bodies, decode the success body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let messages = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| normalize_messages(&body))
                .unwrap_or_else(|| vec![format!("Request failed with status {}", status.as_u16())]);
            debug!("API error {}: {}", status.as_u16(), messages.join("; "));
            return Err(ClientError::api_error(status.as_u16(), messages));
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange username/password for a credential
    pub async fn login(&self, data: &LoginData) -> ClientResult<Credential> {
        let req = self.request_json(Method::POST, &["auth", "token"], data)?;
        let envelope: TokenEnvelope = self.execute(req).await?;
        Ok(envelope.token)
    }

    /// Register a new account and receive its credential
    pub async fn register(&self, data: &SignupData) -> ClientResult<Credential> {
        let req = self.request_json(Method::POST, &["auth", "register"], data)?;
        let envelope: TokenEnvelope = self.execute(req).await?;
        Ok(envelope.token)
    }

    /// Ask the API to (re)send the verification email
    pub async fn send_verification_email(
        &self,
        username: &str,
        email: &str,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct SendVerificationRequest<'a> {
            email: &'a str,
        }

        let req = self.request_json(
            Method::POST,
            &["auth", "send-verification", username],
            &SendVerificationRequest { email },
        )?;
        self.execute(req).await
    }

    /// Confirm an email address with the token from the verification email
    pub async fn confirm_email(&self, token: &str) -> ClientResult<User> {
        let req = self.request(Method::GET, &["auth", "confirmation", token])?;
        let envelope: UserEnvelope = self.execute(req).await?;
        Ok(envelope.user)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Get a user by username
    pub async fn get_user(&self, username: &str) -> ClientResult<User> {
        let req = self.request(Method::GET, &["users", username])?;
        let envelope: UserEnvelope = self.execute(req).await?;
        Ok(envelope.user)
    }

    /// Update a user's profile
    pub async fn update_user(&self, username: &str, data: &ProfileUpdate) -> ClientResult<User> {
        let req = self.request_json(Method::PUT, &["users", username], data)?;
        let envelope: UserEnvelope = self.execute(req).await?;
        Ok(envelope.user)
    }

    /// Delete a user
    pub async fn delete_user(&self, username: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &["users", username])?;
        let envelope: DeletedEnvelope = self.execute(req).await?;
        Ok(envelope.deleted)
    }

    /// Reactivate a user account
    pub async fn activate_user(&self, username: &str) -> ClientResult<User> {
        let req = self.request(Method::PATCH, &["users", username, "activate"])?;
        let envelope: UserEnvelope = self.execute(req).await?;
        Ok(envelope.user)
    }

    /// Deactivate a user account
    pub async fn deactivate_user(&self, username: &str) -> ClientResult<User> {
        let req = self.request(Method::PATCH, &["users", username, "deactivate"])?;
        let envelope: UserEnvelope = self.execute(req).await?;
        Ok(envelope.user)
    }

    // =========================================================================
    // Service Operations
    // =========================================================================

    /// List every service, active and inactive
    pub async fn list_services(&self) -> ClientResult<Vec<Service>> {
        let req = self.request(Method::GET, &["services"])?;
        let envelope: ServicesEnvelope = self.execute(req).await?;
        Ok(envelope.services)
    }

    /// Get a service by ID
    pub async fn get_service(&self, service_id: i64) -> ClientResult<Service> {
        let req = self.request(Method::GET, &["services", &service_id.to_string()])?;
        let envelope: ServiceEnvelope = self.execute(req).await?;
        Ok(envelope.service)
    }

    /// Create a service (admin)
    pub async fn create_service(&self, draft: &ServiceDraft) -> ClientResult<Service> {
        let req = self.request_json(Method::POST, &["services"], draft)?;
        let envelope: ServiceEnvelope = self.execute(req).await?;
        Ok(envelope.service)
    }

    /// Update a service (admin)
    pub async fn update_service(
        &self,
        service_id: i64,
        draft: &ServiceDraft,
    ) -> ClientResult<Service> {
        let req = self.request_json(Method::PATCH, &["services", &service_id.to_string()], draft)?;
        let envelope: ServiceEnvelope = self.execute(req).await?;
        Ok(envelope.service)
    }

    /// Activate a service (admin)
    pub async fn activate_service(&self, service_id: i64) -> ClientResult<Service> {
        let req = self.request(Method::PATCH, &["services", &service_id.to_string(), "activate"])?;
        let envelope: ServiceEnvelope = self.execute(req).await?;
        Ok(envelope.service)
    }

    /// Deactivate a service (admin)
    pub async fn deactivate_service(&self, service_id: i64) -> ClientResult<Service> {
        let req = self.request(
            Method::PATCH,
            &["services", &service_id.to_string(), "deactivate"],
        )?;
        let envelope: ServiceEnvelope = self.execute(req).await?;
        Ok(envelope.service)
    }

    /// Delete a service (admin)
    pub async fn delete_service(&self, service_id: i64) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &["services", &service_id.to_string()])?;
        let envelope: DeletedEnvelope = self.execute(req).await?;
        Ok(envelope.deleted)
    }

    // =========================================================================
    // Review Operations
    // =========================================================================

    /// List reviews for a service
    pub async fn list_service_reviews(&self, service_id: i64) -> ClientResult<Vec<Review>> {
        let req = self.request(Method::GET, &["services", &service_id.to_string(), "reviews"])?;
        let envelope: ReviewsEnvelope = self.execute(req).await?;
        Ok(envelope.reviews)
    }

    /// Get a review by ID
    pub async fn get_review(&self, review_id: i64) -> ClientResult<Review> {
        let req = self.request(Method::GET, &["reviews", &review_id.to_string()])?;
        let envelope: ReviewEnvelope = self.execute(req).await?;
        Ok(envelope.review)
    }

    /// Post a review as `username`
    pub async fn create_review(&self, username: &str, review: &NewReview) -> ClientResult<Review> {
        let req = self.request_json(Method::POST, &["reviews", username], review)?;
        let envelope: ReviewEnvelope = self.execute(req).await?;
        Ok(envelope.review)
    }

    /// Edit a review written by `username`
    pub async fn update_review(
        &self,
        review_id: i64,
        username: &str,
        draft: &ReviewDraft,
    ) -> ClientResult<Review> {
        let req = self.request_json(
            Method::PATCH,
            &["reviews", &review_id.to_string(), username],
            draft,
        )?;
        let envelope: ReviewEnvelope = self.execute(req).await?;
        Ok(envelope.review)
    }

    /// Delete a review
    pub async fn delete_review(&self, review_id: i64, username: &str) -> ClientResult<Value> {
        let req = self.request(
            Method::DELETE,
            &["reviews", &review_id.to_string(), username],
        )?;
        let envelope: DeletedEnvelope = self.execute(req).await?;
        Ok(envelope.deleted)
    }

    // =========================================================================
    // Order (user-service) Operations
    // =========================================================================

    /// List every order (admin)
    pub async fn list_all_orders(&self) -> ClientResult<Vec<Order>> {
        let req = self.request(Method::GET, &["user-services"])?;
        let envelope: OrdersEnvelope = self.execute(req).await?;
        Ok(envelope.user_services)
    }

    /// List orders placed by one user
    pub async fn list_user_orders(&self, username: &str) -> ClientResult<Vec<Order>> {
        let req = self.request(Method::GET, &["user-services", username])?;
        let envelope: OrdersEnvelope = self.execute(req).await?;
        Ok(envelope.user_services)
    }

    /// Place an order for `order.username`
    pub async fn create_order(&self, order: &NewOrder) -> ClientResult<Order> {
        let req = self.request_json(
            Method::POST,
            &["user-services", &order.username],
            order,
        )?;
        let envelope: OrderEnvelope = self.execute(req).await?;
        Ok(envelope.user_service)
    }

    /// Mark an order completed (admin)
    pub async fn complete_order(&self, username: &str, order_id: i64) -> ClientResult<Order> {
        let req = self.request(
            Method::PATCH,
            &["user-services", username, "complete", &order_id.to_string()],
        )?;
        let envelope: OrderEnvelope = self.execute(req).await?;
        Ok(envelope.user_service)
    }

    /// Change the confirmed price of an order (admin)
    pub async fn update_order_price(
        &self,
        username: &str,
        order_id: i64,
        price: Price,
    ) -> ClientResult<Order> {
        #[derive(Serialize)]
        struct UpdatePriceRequest {
            price: Price,
        }

        let req = self.request_json(
            Method::PATCH,
            &["user-services", username, "price", &order_id.to_string()],
            &UpdatePriceRequest { price },
        )?;
        let envelope: ResultEnvelope = self.execute(req).await?;
        Ok(envelope.result)
    }
}
