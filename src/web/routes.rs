use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::traits::QuestionAnswerer;
use crate::web::form::QuestionForm;
use crate::web::page::{self, PageView};

/// Shared across handlers. Read-only after startup.
pub struct AppState {
    pub answerer:         Box<dyn QuestionAnswerer + Send + Sync>,
    pub max_question_len: usize,
}

type AppStateArc = Arc<AppState>;

pub fn router(state: AppStateArc) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_question))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn show_form() -> Html<String> {
    Html(page::render(&PageView::default()))
}

async fn submit_question(
    State(state): State<AppStateArc>,
    Form(form): Form<QuestionForm>,
) -> Html<String> {
    let view = match form.clean(state.max_question_len) {
        Ok(question) => {
            debug!("Question: {:?}", question);
            PageView {
                question,
                error: None,
                answer: Some(state.answerer.answer(question)),
            }
        }
        Err(e) => {
            warn!("Rejected question: {}", e);
            PageView {
                question: form.question.trim(),
                error: Some(e.to_string()),
                answer: None,
            }
        }
    };

    Html(page::render(&view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Echoes the question back so tests can see what reached it.
    struct Echo;

    impl QuestionAnswerer for Echo {
        fn answer(&self, question: &str) -> String {
            format!("you asked '{question}'")
        }
    }

    fn app() -> Router {
        router(Arc::new(AppState {
            answerer:         Box::new(Echo),
            max_question_len: 20,
        }))
    }

    fn post(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(resp: axum::response::Response) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_renders_empty_form() {
        let resp = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains("name=\"question\""));
        assert!(!html.contains("class=\"answer\""));
    }

    #[tokio::test]
    async fn test_post_renders_escaped_answer() {
        let resp = app().oneshot(post("question=math+marks+1001")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains("you asked &#x27;math marks 1001&#x27;"));
        assert!(html.contains("value=\"math marks 1001\""));
    }

    #[tokio::test]
    async fn test_blank_question_is_required() {
        let resp = app().oneshot(post("question=+++")).await.unwrap();
        let html = body_text(resp).await;
        assert!(html.contains("This field is required."));
        assert!(!html.contains("class=\"answer\""));
    }

    #[tokio::test]
    async fn test_missing_field_is_required() {
        let resp = app().oneshot(post("")).await.unwrap();
        let html = body_text(resp).await;
        assert!(html.contains("This field is required."));
    }

    #[tokio::test]
    async fn test_details_from_csv_dataset() {
        use crate::application::{ask_use_case::AskUseCase, config::AppConfig};
        use std::io::Write;

        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "id,name,class,email,maths,science,social").unwrap();
        writeln!(f, "1001,Asha,10-A,asha@example.com,95,88,79").unwrap();
        writeln!(f, "1002,Ravi,10-B,ravi@example.com,72,,90").unwrap();

        let config = AppConfig {
            dataset_path: f.path().display().to_string(),
            ..AppConfig::default()
        };
        let app = router(Arc::new(AppState {
            answerer:         Box::new(AskUseCase::new(&config).unwrap()),
            max_question_len: config.max_question_len,
        }));

        let resp = app.clone().oneshot(post("question=details+for+1001")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains(
            "<pre class=\"answer\">ID: 1001\nName: Asha\nClass: 10-A\nEmail: asha@example.com\n</pre>"
        ));

        let html = body_text(app.oneshot(post("question=science+1002")).await.unwrap()).await;
        assert!(html.contains("Ravi&#x27;s Science marks: nan"));
    }

    #[tokio::test]
    async fn test_overlong_question_rejected() {
        let resp = app()
            .oneshot(post("question=details+for+student+number+1001"))
            .await
            .unwrap();
        let html = body_text(resp).await;
        assert!(html.contains("at most 20 characters"));
        assert!(!html.contains("you asked"));
    }
}
