pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::admin::handlers as admin;
use crate::content::handlers as content;
use crate::site::handlers as site;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Anything no route claims falls through to the static bundle
    // (scripts, images, uploaded resume).
    let assets = ServeDir::new(state.config.public_dir.clone());

    Router::new()
        .route("/health", get(health::health_handler))
        // Content API
        .route(
            "/api/content",
            get(content::get_content).post(content::replace_content),
        )
        .route("/api/upload", post(content::upload_resume))
        // Public site
        .route("/", get(site::gate))
        .route("/browse", get(site::browse))
        .route("/skills", get(site::skills))
        .route("/about", get(site::about))
        .route("/profiles", post(admin::add_profile))
        .route("/profiles/delete", post(admin::delete_profile))
        // Admin panel
        .route("/admin", get(admin::panel))
        .route("/admin/projects", post(admin::add_project))
        .route("/admin/projects/:id/edit", post(admin::edit_project))
        .route("/admin/projects/:id/delete", post(admin::delete_project))
        .route("/admin/skills", post(admin::add_skill))
        .route("/admin/skills/:id/delete", post(admin::delete_skill))
        .route("/admin/about/intro", post(admin::set_intro))
        .route("/admin/about/picture", post(admin::set_picture))
        .route("/admin/about/picture/delete", post(admin::delete_picture))
        .route("/admin/about/timeline", post(admin::add_timeline))
        .route(
            "/admin/about/timeline/:index/delete",
            post(admin::delete_timeline),
        )
        .route("/admin/resume", post(admin::upload_resume))
        .fallback_service(assets)
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Router-level tests: drive the whole service through tower's oneshot.
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::store::ContentStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn test_app(dir: &TempDir) -> (Router, ContentStore) {
        let config = Config {
            port: 0,
            content_file: dir.path().join("data").join("content.json"),
            public_dir: dir.path().join("public"),
            upload_dir: dir.path().join("public").join("uploads"),
            site_name: "Showreel".to_string(),
            rust_log: "info".to_string(),
        };
        let store = ContentStore::new(config.content_file.clone());
        store.ensure_seeded().await.unwrap();
        let state = AppState {
            store: store.clone(),
            config,
        };
        (build_router(state), store)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn json_post(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_post(uri: &str, field: &str, payload: &[u8]) -> Request<Body> {
        let boundary = "xxboundaryxx";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; \
                 filename=\"cv.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_post_then_get_round_trips_verbatim() {
        let dir = TempDir::new().unwrap();
        let (app, _) = test_app(&dir).await;

        let document = json!({
            "profiles": [{"id": 1, "name": "A", "avatar": "x.png"}],
            "rows": [],
            "unvalidatedExtra": {"any": ["shape", 42]}
        });

        let response = app
            .clone()
            .oneshot(json_post("/api/content", &document))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["success"], true);

        // Posting the identical document again is idempotent.
        let response = app
            .clone()
            .oneshot(json_post("/api/content", &document))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(Request::get("/api/content").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, document);
    }

    #[tokio::test]
    async fn test_get_content_reports_500_on_garbled_store() {
        let dir = TempDir::new().unwrap();
        let (app, store) = test_app(&dir).await;
        tokio::fs::write(store.path(), "{definitely not json")
            .await
            .unwrap();

        let response = app
            .oneshot(Request::get("/api/content").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"]["code"], "MALFORMED_CONTENT");
    }

    #[tokio::test]
    async fn test_upload_without_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (app, store) = test_app(&dir).await;

        let response = app
            .oneshot(multipart_post("/api/upload", "not_resume", b"zzz"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let raw = store.read_raw().await.unwrap();
        assert!(raw.get("resumeUrl").is_none());
    }

    #[tokio::test]
    async fn test_upload_stores_file_and_patches_resume_url() {
        let dir = TempDir::new().unwrap();
        let (app, store) = test_app(&dir).await;

        let response = app
            .clone()
            .oneshot(multipart_post("/api/upload", "resume", b"%PDF-1.4 first"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["filePath"], "uploads/resume.pdf");

        // Re-uploading overwrites the same fixed path.
        let response = app
            .clone()
            .oneshot(multipart_post("/api/upload", "resume", b"%PDF-1.4 second"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["filePath"], "uploads/resume.pdf");

        let on_disk = tokio::fs::read(dir.path().join("public/uploads/resume.pdf"))
            .await
            .unwrap();
        assert_eq!(on_disk, b"%PDF-1.4 second");
        let raw = store.read_raw().await.unwrap();
        assert_eq!(raw["resumeUrl"], "uploads/resume.pdf");
    }

    #[tokio::test]
    async fn test_browse_without_profile_bounces_to_gate() {
        let dir = TempDir::new().unwrap();
        let (app, _) = test_app(&dir).await;

        let response = app
            .clone()
            .oneshot(Request::get("/browse").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        // Seeded profile 1 gets the rendered page.
        let response = app
            .oneshot(
                Request::get("/browse?profile=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Web Development"));
        assert!(html.contains("id=\"hero-data\""));
    }

    #[tokio::test]
    async fn test_admin_edit_with_bad_contributors_leaves_store_untouched() {
        let dir = TempDir::new().unwrap();
        let (app, store) = test_app(&dir).await;
        let before = store.read_raw().await.unwrap();

        // Seeded item 5 lives in row 4.
        let response = app
            .clone()
            .oneshot(form_post(
                "/admin/projects/5/edit",
                "description=nope&contributors=%7Bnot+json",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert!(location.contains("error=contributors"));
        assert!(location.contains("edit=5"));

        assert_eq!(store.read_raw().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_admin_skill_add_then_delete_round_trips() {
        let dir = TempDir::new().unwrap();
        let (app, store) = test_app(&dir).await;
        let before = store.load().await.unwrap().skills.len();

        let response = app
            .clone()
            .oneshot(form_post(
                "/admin/skills",
                "name=Rust&level=90&category=Languages",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let doc = store.load().await.unwrap();
        assert_eq!(doc.skills.len(), before + 1);
        let id = doc.skills.last().unwrap().id;

        let response = app
            .oneshot(form_post(&format!("/admin/skills/{id}/delete"), ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(store.load().await.unwrap().skills.len(), before);
    }
}
