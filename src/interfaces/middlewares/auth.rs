use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, Method, StatusCode},
    web, Error, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{
    rc::Rc,
    task::{Context, Poll},
};

use crate::{errors::AppError, handlers::json_error::json_error, AppState};

/// Grants or denies write access based on the bearer token presented at the
/// transport boundary. The core layers never see identity.
pub trait WriteCapability: Send + Sync {
    fn allows_write(&self, token: Option<&str>) -> bool;
}

/// Stub capability check: plain equality against the configured admin API
/// key. When no key is configured every write is allowed, which keeps local
/// development friction-free.
pub struct StaticTokenCheck {
    admin_api_key: Option<String>,
}

impl StaticTokenCheck {
    pub fn new(admin_api_key: Option<String>) -> Self {
        StaticTokenCheck { admin_api_key }
    }
}

impl WriteCapability for StaticTokenCheck {
    fn allows_write(&self, token: Option<&str>) -> bool {
        match (&self.admin_api_key, token) {
            (None, _) => true,
            (Some(expected), Some(presented)) => expected == presented,
            (Some(_), None) => false,
        }
    }
}

/// Guards mutating verbs on the project routes behind the write capability.
pub struct WriteGuard;

impl<S> Transform<S, ServiceRequest> for WriteGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = WriteGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(WriteGuardService {
            service: Rc::new(service),
        })
    }
}

pub struct WriteGuardService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for WriteGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if !is_write_route(req.path(), req.method()) {
                return service.call(req).await;
            }

            let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
                tracing::error!("AppState missing in write guard");
                AppError::InternalError("Application state not configured".to_string())
            })?;

            let token = extract_bearer(&req);
            if state.write_guard.allows_write(token.as_deref()) {
                return service.call(req).await;
            }

            let response = if token.is_none() {
                tracing::warn!("Write request without credentials rejected");
                json_error(
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized access",
                    "Missing bearer token",
                )
            } else {
                tracing::warn!("Write request with invalid credentials rejected");
                json_error(
                    StatusCode::FORBIDDEN,
                    "Forbidden access",
                    "Invalid bearer token",
                )
            };

            Ok(short_circuit(req, response))
        })
    }
}

fn is_write_route(path: &str, method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::DELETE)
        && path.starts_with("/api/v1/projects")
}

fn extract_bearer(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_owned)
}

fn short_circuit(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<BoxBody> {
    ServiceResponse::new(req.into_parts().0, response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_check_allows_everything() {
        let check = StaticTokenCheck::new(None);
        assert!(check.allows_write(None));
        assert!(check.allows_write(Some("anything")));
    }

    #[test]
    fn configured_check_requires_the_exact_token() {
        let check = StaticTokenCheck::new(Some("secret-admin-token".to_string()));
        assert!(check.allows_write(Some("secret-admin-token")));
        assert!(!check.allows_write(Some("wrong-token")));
        assert!(!check.allows_write(None));
    }

    #[test]
    fn only_mutating_project_routes_are_guarded() {
        assert!(is_write_route("/api/v1/projects", &Method::POST));
        assert!(is_write_route("/api/v1/projects/some-id", &Method::PUT));
        assert!(is_write_route("/api/v1/projects/some-id", &Method::DELETE));
        assert!(!is_write_route("/api/v1/projects", &Method::GET));
        assert!(!is_write_route("/api/v1/health", &Method::POST));
        assert!(!is_write_route("/", &Method::GET));
    }
}
