//! Bearer-token authentication middleware
//!
//! Turns `Authorization: Bearer <token>` into a trusted [`OwnerId`] in the
//! request extensions. Everything behind this middleware can assume the
//! caller identity is resolved; handlers receive it through the `OwnerId`
//! extractor rather than reaching into ambient session state.

use std::rc::Rc;

use actix_service::{Service, Transform};
use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
    body::EitherBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::sync::Arc;
use tracing::{info, trace};

use crate::api::jwt::JwtService;
use crate::api::services::error_code::ErrorCode;
use crate::api::services::types::ApiResponse;

/// Resolved caller identity for owner-scoped operations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnerId(pub String);

impl OwnerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for OwnerId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let owner = req.extensions().get::<OwnerId>().cloned();
        ready(owner.ok_or_else(|| actix_web::error::ErrorUnauthorized("missing caller identity")))
    }
}

/// API authentication middleware
#[derive(Clone)]
pub struct ApiAuth {
    jwt: Arc<JwtService>,
}

impl ApiAuth {
    pub fn new(jwt: Arc<JwtService>) -> Self {
        Self { jwt }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ApiAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiAuthMiddleware {
            service: Rc::new(service),
            jwt: self.jwt.clone(),
        }))
    }
}

pub struct ApiAuthMiddleware<S> {
    service: Rc<S>,
    jwt: Arc<JwtService>,
}

impl<S, B> ApiAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    fn handle_unauthorized(req: ServiceRequest, code: ErrorCode) -> ServiceResponse<EitherBody<B>> {
        info!("API authentication failed - invalid or missing token");
        req.into_response(
            HttpResponse::Unauthorized()
                .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
                .json(ApiResponse::<()> {
                    code: code as i32,
                    message: "Unauthorized: Invalid or missing token".to_string(),
                    data: None,
                })
                .map_into_right_body(),
        )
    }

    /// Extract the Bearer token from the Authorization header
    fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
        req.headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|s| s.to_string())
    }

    fn resolve_owner(&self, req: &ServiceRequest) -> Result<OwnerId, ErrorCode> {
        let Some(token) = Self::extract_bearer_token(req) else {
            return Err(ErrorCode::Unauthorized);
        };

        match self.jwt.validate_access_token(&token) {
            Ok(claims) => {
                trace!("Bearer token validation successful for {}", claims.sub);
                Ok(OwnerId(claims.sub))
            }
            Err(e) => {
                info!("Bearer token validation failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        Err(ErrorCode::TokenExpired)
                    }
                    _ => Err(ErrorCode::TokenInvalid),
                }
            }
        }
    }
}

impl<S, B> Service<ServiceRequest> for ApiAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();

        match self.resolve_owner(&req) {
            Ok(owner) => {
                req.extensions_mut().insert(owner);
                Box::pin(async move {
                    let response = srv.call(req).await?.map_into_left_body();
                    Ok(response)
                })
            }
            Err(code) => Box::pin(async move { Ok(Self::handle_unauthorized(req, code)) }),
        }
    }
}
