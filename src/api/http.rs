//! HTTP surface: the form page, its submit handler, a JSON endpoint and a health probe.

use axum::{
    extract::{Form, Json, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::common::error::{RiskCode, RiskError};
use crate::intake::{PatientInput, VitalsForm};
use crate::presentation::render::render_page;
use crate::presentation::RiskReport;

use super::service::RiskService;

/// Build the application router around a loaded model.
pub fn router(service: RiskService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict_form))
        .route("/api/predict", post(predict_json))
        .route("/health", get(health))
        .layer(cors)
        .with_state(service)
}

fn status_for(code: RiskCode) -> StatusCode {
    match code {
        RiskCode::InvalidInput => StatusCode::BAD_REQUEST,
        RiskCode::Ok => StatusCode::OK,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error wrapper rendering a JSON body with the stable code.
#[derive(Debug)]
pub struct ApiError(pub RiskError);

impl From<RiskError> for ApiError {
    fn from(err: RiskError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.code();
        let body = json!({
            "ok": false,
            "code": code as u32,
            "error": self.0.to_string(),
        });
        (status_for(code), Json(body)).into_response()
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn index() -> Html<String> {
    Html(render_page(&VitalsForm::from(PatientInput::default()), None, None))
}

async fn predict_form(State(service): State<RiskService>, Form(form): Form<VitalsForm>) -> Response {
    let outcome = PatientInput::try_from(form).and_then(|input| service.assess(&input));
    match outcome {
        Ok(report) => Html(render_page(&form, Some(&report), None)).into_response(),
        Err(err) => {
            let notice = match &err {
                RiskError::InvalidInput(msg) => format!("Invalid input: {msg}"),
                other => format!("Prediction failed (code {}). Please try again.", other.code() as u32),
            };
            (status_for(err.code()), Html(render_page(&form, None, Some(&notice)))).into_response()
        }
    }
}

async fn predict_json(
    State(service): State<RiskService>,
    Json(form): Json<VitalsForm>,
) -> Result<Json<RiskReport>, ApiError> {
    let input = PatientInput::try_from(form)?;
    Ok(Json(service.assess(&input)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::to_bytes;

    use crate::common::error::RiskResult;
    use crate::features::FeatureVector;
    use crate::model::{Classifier, Label};

    struct Fixed(Label, f64);

    impl Classifier for Fixed {
        fn predict(&self, _: &FeatureVector) -> RiskResult<Label> {
            Ok(self.0)
        }

        fn predict_proba(&self, _: &FeatureVector) -> RiskResult<[f64; 2]> {
            Ok([1.0 - self.1, self.1])
        }
    }

    struct Failing;

    impl Classifier for Failing {
        fn predict(&self, _: &FeatureVector) -> RiskResult<Label> {
            Err(RiskError::internal("engine offline"))
        }

        fn predict_proba(&self, _: &FeatureVector) -> RiskResult<[f64; 2]> {
            Err(RiskError::internal("engine offline"))
        }
    }

    fn service(model: impl Classifier + 'static) -> RiskService {
        RiskService::new(Arc::new(model))
    }

    async fn body_text(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn scenario_form() -> VitalsForm {
        VitalsForm {
            age: 65,
            systolic_bp: 160,
            diastolic_bp: 95,
            cholesterol: 250,
        }
    }

    #[tokio::test]
    async fn index_renders_defaults_without_result() {
        let Html(page) = index().await;
        assert!(page.contains(r#"name="systolic_bp" min="80" max="200" step="1" value="120""#));
        assert!(!page.contains(r#"id="result""#));
    }

    #[tokio::test]
    async fn form_submit_renders_report_and_keeps_slider_values() {
        let resp = predict_form(State(service(Fixed(Label::High, 0.825))), Form(scenario_form())).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let page = body_text(resp).await;
        assert!(page.contains("High Risk of Diabetic Retinopathy!"));
        assert!(page.contains("<strong>82.50%</strong>"));
        assert!(page.contains("consult a healthcare professional immediately"));
        assert!(page.contains(r#"name="age" min="0" max="100" step="1" value="65""#));
    }

    #[tokio::test]
    async fn out_of_range_form_is_bad_request_without_result() {
        let mut form = scenario_form();
        form.cholesterol = 999;
        let resp = predict_form(State(service(Fixed(Label::High, 0.9))), Form(form)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let page = body_text(resp).await;
        assert!(page.contains("cholesterol must lie in [100, 400]"));
        assert!(!page.contains(r#"id="result""#));
    }

    #[tokio::test]
    async fn model_failure_renders_nothing_from_output_region() {
        let resp = predict_form(State(service(Failing)), Form(scenario_form())).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let page = body_text(resp).await;
        assert!(page.contains("Prediction failed (code 4)"));
        assert!(!page.contains("<svg"));
    }

    #[tokio::test]
    async fn json_endpoint_returns_report() {
        let Json(report) = predict_json(
            State(service(Fixed(Label::Low, 0.12))),
            Json(VitalsForm::from(PatientInput::default())),
        )
        .await
        .unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["banner"]["label"], "low");
        assert_eq!(value["advisory"]["tier"], "low");
        assert_eq!(value["gauge"]["bands"][0]["color"], "lightgreen");
        assert_eq!(value["probability_text"], "12.00%");
    }

    #[tokio::test]
    async fn json_errors_carry_stable_code() {
        let mut form = scenario_form();
        form.age = 150;
        let err = predict_json(State(service(Fixed(Label::Low, 0.1))), Json(form))
            .await
            .unwrap_err();
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(body["ok"], false);
        assert_eq!(body["code"], RiskCode::InvalidInput as u32);
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }
}
