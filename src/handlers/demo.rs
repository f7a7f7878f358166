use actix_web::{web, HttpResponse};
use std::sync::LazyLock;
use tera::{Context, Tera};

use crate::error::ApiError;
use crate::intent;
use crate::models::{ReplyRequest, ReplyResponse};

const CHATBOT_PAGE: &str = include_str!("../../templates/chatbot.html");
const CHATBOT_TEMPLATE: &str = "chatbot.html";

// The `.html` name turns on Tera's autoescaping for this template.
static TEMPLATES: LazyLock<Tera> = LazyLock::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template(CHATBOT_TEMPLATE, CHATBOT_PAGE)
        .expect("Invalid chatbot page template");
    tera
});

/// Renders the demo page. The slug comes straight from the path, so it only
/// ever reaches the document through Tera's HTML autoescaping.
pub fn render_page(slug: &str) -> Result<String, tera::Error> {
    let mut ctx = Context::new();
    ctx.insert("slug", slug);
    TEMPLATES.render(CHATBOT_TEMPLATE, &ctx)
}

pub async fn chatbot_page(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let slug = path.into_inner();
    let body = render_page(&slug)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

pub async fn reply(
    _path: web::Path<String>,
    data: web::Json<ReplyRequest>,
) -> Result<HttpResponse, ApiError> {
    let message = data.into_inner().message;
    let message = message.trim();
    if message.is_empty() {
        return Err(ApiError::InvalidRequest("message is required"));
    }

    let intent = intent::classify(message);
    tracing::debug!(%intent, "demo reply");
    Ok(HttpResponse::Ok().json(ReplyResponse {
        intent,
        reply: intent.reply(),
    }))
}
