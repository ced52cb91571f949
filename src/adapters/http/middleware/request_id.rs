use actix_web::{
  Error, HttpMessage,
  body::MessageBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  http::header::{HeaderName, HeaderValue},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
};
use uuid::Uuid;

/// Middleware tagging each request with a unique id.
///
/// The id is stored in the request extensions for handlers and log
/// correlation, and echoed back in the `X-Request-ID` response header.
#[derive(Debug, Clone, Default)]
pub struct RequestIdMiddleware;

impl RequestIdMiddleware {
  pub fn new() -> Self {
    Self
  }
}

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = RequestIdService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequestIdService {
      service: Rc::new(service),
    }))
  }
}

pub struct RequestIdService<S> {
  service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);

    Box::pin(async move {
      let request_id = RequestId(Uuid::new_v4().to_string());

      tracing::Span::current().record("request_id", request_id.0.as_str());
      req.extensions_mut().insert(request_id.clone());

      let mut res = service.call(req).await?;

      if let Ok(value) = HeaderValue::from_str(&request_id.0) {
        res
          .headers_mut()
          .insert(HeaderName::from_static("x-request-id"), value);
      }

      Ok(res)
    })
  }
}

/// Request id stored in request extensions
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl std::fmt::Display for RequestId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{
    App, HttpResponse,
    test::{self, TestRequest},
    web,
  };

  #[actix_web::test]
  async fn test_request_id_header_is_set() {
    async fn handler(req: actix_web::HttpRequest) -> HttpResponse {
      assert!(req.extensions().get::<RequestId>().is_some());
      HttpResponse::Ok().finish()
    }

    let app = test::init_service(
      App::new()
        .wrap(RequestIdMiddleware::new())
        .route("/", web::get().to(handler)),
    )
    .await;

    let req = TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    let header = resp.headers().get("x-request-id").unwrap();
    assert!(Uuid::parse_str(header.to_str().unwrap()).is_ok());
  }
}
