//! Page Handlers - 网页表单
//!
//! GET /   空表单
//! POST /  合成并展示情绪、语速、音量和播放器

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{ApplicationError, SynthesizeSpeech};
use crate::infrastructure::http::dto::audio_url;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// 表单字段
#[derive(Debug, Deserialize)]
pub struct SpeakForm {
    #[serde(default)]
    pub text: String,
}

/// 合成结果展示
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub emotion: String,
    pub intensity_percent: u32,
    pub rate: u32,
    pub volume: f64,
    pub audio_url: String,
}

/// 页面内容
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub text: String,
    pub error: Option<String>,
    pub result: Option<ResultView>,
}

/// HTML 转义
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 保留或移除 `<!-- if:name -->` ... `<!-- end:name -->` 区块
fn toggle_section(html: String, name: &str, keep: bool) -> String {
    let open = format!("<!-- if:{} -->", name);
    let close = format!("<!-- end:{} -->", name);

    if keep {
        return html.replace(&open, "").replace(&close, "");
    }

    match (html.find(&open), html.find(&close)) {
        (Some(start), Some(end)) if start < end => {
            let mut trimmed = String::with_capacity(html.len());
            trimmed.push_str(&html[..start]);
            trimmed.push_str(&html[end + close.len()..]);
            trimmed
        }
        _ => html,
    }
}

/// 渲染页面
pub fn render_page(view: &PageView) -> String {
    let mut html = INDEX_TEMPLATE.to_string();

    html = toggle_section(html, "error", view.error.is_some());
    html = toggle_section(html, "result", view.result.is_some());

    let result = view.result.as_ref();
    // 用户文本最后替换，避免其中的占位符被再次展开
    let replacements = [
        (
            "{{ error }}",
            view.error.as_deref().map(escape_html).unwrap_or_default(),
        ),
        (
            "{{ emotion }}",
            result.map(|r| escape_html(&r.emotion)).unwrap_or_default(),
        ),
        (
            "{{ intensity_percent }}",
            result.map(|r| r.intensity_percent).unwrap_or(0).to_string(),
        ),
        (
            "{{ rate }}",
            result.map(|r| r.rate.to_string()).unwrap_or_default(),
        ),
        (
            "{{ volume }}",
            result
                .map(|r| format!("{:.2}", r.volume))
                .unwrap_or_default(),
        ),
        (
            "{{ audio_url }}",
            result.map(|r| escape_html(&r.audio_url)).unwrap_or_default(),
        ),
        ("{{ text }}", escape_html(&view.text)),
    ];

    for (placeholder, value) in replacements.iter() {
        html = html.replace(placeholder, value);
    }

    html
}

/// GET /
pub async fn index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// POST /
pub async fn speak(State(state): State<Arc<AppState>>, Form(form): Form<SpeakForm>) -> Response {
    let command = SynthesizeSpeech {
        text: form.text.clone(),
    };

    match state.synthesize_handler.handle(command).await {
        Ok(response) => {
            let outcome = &response.outcome;
            let view = PageView {
                text: form.text,
                error: None,
                result: Some(ResultView {
                    emotion: outcome.emotion.emotion.title().to_string(),
                    intensity_percent: outcome.emotion.intensity_percent(),
                    rate: outcome.profile.rate,
                    volume: outcome.profile.volume,
                    audio_url: audio_url(response.audio_id.as_str()),
                }),
            };
            Html(render_page(&view)).into_response()
        }
        Err(e) => error_page(form.text, e),
    }
}

fn error_page(text: String, error: ApplicationError) -> Response {
    let message = match &error {
        ApplicationError::ValidationError(msg) => msg.clone(),
        ApplicationError::ExternalServiceError(_) => {
            "Speech synthesis is currently unavailable. Please try again.".to_string()
        }
        _ => "Something went wrong while generating audio.".to_string(),
    };
    let status = ApiError::from(error).status();

    if status.is_server_error() {
        tracing::error!(status = %status.as_u16(), "Page synthesis failed");
    }

    let view = PageView {
        text,
        error: Some(message),
        result: None,
    };
    (status, Html(render_page(&view))).into_response()
}
