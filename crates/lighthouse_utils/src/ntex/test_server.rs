use std::sync::{Arc, Mutex};

use ntex::web;
use ntex::http::StatusCode;
use ntex::web::test::TestServer;

/// A response served by the fake host for one route
#[derive(Clone, Debug)]
pub struct CannedResponse {
  pub status: StatusCode,
  pub body: String,
}

impl CannedResponse {
  pub fn ok<T>(body: T) -> Self
  where
    T: ToString,
  {
    Self {
      status: StatusCode::OK,
      body: body.to_string(),
    }
  }

  pub fn status(code: u16) -> Self {
    Self {
      status: StatusCode::from_u16(code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
      body: String::new(),
    }
  }
}

/// Responses of the `/info`, `/containers` and `/images` routes of a fake
/// lighthouse backend, with a journal of every request it received.
#[derive(Clone, Debug)]
pub struct HostFixture {
  pub info: CannedResponse,
  pub containers: CannedResponse,
  pub images: CannedResponse,
  journal: Arc<Mutex<Vec<String>>>,
}

impl Default for HostFixture {
  fn default() -> Self {
    Self {
      info: CannedResponse::ok(r#"{"ok":true}"#),
      containers: CannedResponse::ok("[]"),
      images: CannedResponse::ok("[]"),
      journal: Arc::default(),
    }
  }
}

impl HostFixture {
  pub fn with_info(mut self, res: CannedResponse) -> Self {
    self.info = res;
    self
  }

  pub fn with_containers(mut self, res: CannedResponse) -> Self {
    self.containers = res;
    self
  }

  pub fn with_images(mut self, res: CannedResponse) -> Self {
    self.images = res;
    self
  }

  /// Every request received so far, as `path?query`
  pub fn requests(&self) -> Vec<String> {
    self
      .journal
      .lock()
      .map(|journal| journal.clone())
      .unwrap_or_default()
  }

  fn respond(
    &self,
    req: &web::HttpRequest,
    res: &CannedResponse,
  ) -> web::HttpResponse {
    if let Ok(mut journal) = self.journal.lock() {
      let uri = req.uri();
      let entry = match uri.query() {
        Some(query) => format!("{}?{query}", uri.path()),
        None => uri.path().to_owned(),
      };
      journal.push(entry);
    }
    web::HttpResponse::build(res.status)
      .content_type("application/json")
      .body(res.body.clone())
  }
}

async fn get_info(
  req: web::HttpRequest,
  fixture: web::types::State<HostFixture>,
) -> web::HttpResponse {
  fixture.respond(&req, &fixture.info)
}

async fn get_containers(
  req: web::HttpRequest,
  fixture: web::types::State<HostFixture>,
) -> web::HttpResponse {
  fixture.respond(&req, &fixture.containers)
}

async fn get_images(
  req: web::HttpRequest,
  fixture: web::types::State<HostFixture>,
) -> web::HttpResponse {
  fixture.respond(&req, &fixture.images)
}

/// A running fake backend and the url of its origin
pub struct HostServer {
  pub srv: TestServer,
  pub fixture: HostFixture,
}

impl HostServer {
  pub fn origin(&self) -> String {
    format!("http://{}", self.srv.addr())
  }
}

/// Start a test server answering like a lighthouse backend
pub fn gen_host_server(fixture: HostFixture) -> HostServer {
  let state = fixture.clone();
  let srv = web::test::server(move || {
    web::App::new()
      .state(state.clone())
      .route("/info", web::get().to(get_info))
      .route("/containers", web::get().to(get_containers))
      .route("/images", web::get().to(get_images))
  });
  HostServer { srv, fixture }
}
