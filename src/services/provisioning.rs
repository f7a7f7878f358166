use sqlx::SqlitePool;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{Business, Chatbot, CreateBusinessRequest, Pack, DEFAULT_BOT_DESCRIPTION};

pub const REQUIRED_FIELDS_MESSAGE: &str = "name and slug are required";

#[derive(Debug)]
pub struct Provisioned {
    pub business: Business,
    pub chatbot: Chatbot,
    pub slug: String,
}

/// Byte-wise comparison whose running time depends only on the input lengths.
pub fn keys_match(expected: &str, provided: &str) -> bool {
    let a = expected.as_bytes();
    let b = provided.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub fn authorize(config: &AppConfig, provided: Option<&str>) -> Result<(), ApiError> {
    match (config.admin_key.as_deref(), provided) {
        (Some(expected), Some(key)) if !key.is_empty() && keys_match(expected, key) => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}

fn required(value: Option<String>) -> Result<String, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::InvalidRequest(REQUIRED_FIELDS_MESSAGE))
}

/// Creates a business and its companion chatbot in one transaction.
///
/// Auth and field validation run before any write. If either insert fails the
/// transaction is dropped uncommitted, so no business is left without a bot.
pub async fn provision(
    pool: &SqlitePool,
    config: &AppConfig,
    req: CreateBusinessRequest,
) -> Result<Provisioned, ApiError> {
    authorize(config, req.admin_key.as_deref())?;

    let name = required(req.name)?;
    let slug = required(req.slug)?;
    let pack = req.pack.unwrap_or_default();

    let (business, chatbot) = build_records(&name, &pack);

    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO businesses (id, name, industry, created_at) VALUES (?, ?, ?, ?)")
        .bind(&business.id)
        .bind(&business.name)
        .bind(&business.industry)
        .bind(&business.created_at)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        "INSERT INTO chatbots (id, name, description, business_id, created_at) VALUES (?, ?, ?, ?, ?)"
    )
    .bind(&chatbot.id)
    .bind(&chatbot.name)
    .bind(&chatbot.description)
    .bind(&chatbot.business_id)
    .bind(&chatbot.created_at)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(
        business_id = %business.id,
        chatbot_id = %chatbot.id,
        slug = %slug,
        "provisioned business"
    );

    Ok(Provisioned { business, chatbot, slug })
}

fn build_records(name: &str, pack: &Pack) -> (Business, Chatbot) {
    let now = chrono::Utc::now().to_rfc3339();

    let business = Business {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        industry: pack.industry().map(str::to_string),
        created_at: now.clone(),
    };

    let chatbot = Chatbot {
        id: Uuid::new_v4().to_string(),
        name: pack
            .bot_name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} Bot", name)),
        description: pack.greeting().unwrap_or(DEFAULT_BOT_DESCRIPTION).to_string(),
        business_id: business.id.clone(),
        created_at: now,
    };

    (business, chatbot)
}
