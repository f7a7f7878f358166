use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_BOT_DESCRIPTION: &str = "Business assistant";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub industry: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Chatbot {
    pub id: String,
    pub name: String,
    pub description: String,
    pub business_id: String,
    pub created_at: String,
}

/// Body of `POST /api/business`. Every field is optional and leniently typed
/// so that missing or mistyped values surface as 401/400 from provisioning
/// rather than as a JSON extractor error ahead of the admin key check.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub admin_key: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub owner_email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub pack: Option<Pack>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Pack {
    #[serde(default, deserialize_with = "lenient")]
    pub bot_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub business: Option<PackBusiness>,
    #[serde(default, deserialize_with = "lenient")]
    pub branding: Option<PackBranding>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct PackBusiness {
    #[serde(default, deserialize_with = "lenient")]
    pub industry: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct PackBranding {
    #[serde(default, deserialize_with = "lenient")]
    pub greeting: Option<String>,
}

/// Reads any JSON value and keeps it only if it has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl Pack {
    pub fn industry(&self) -> Option<&str> {
        non_empty(self.business.as_ref().and_then(|b| b.industry.as_ref()))
    }

    pub fn bot_name(&self) -> Option<&str> {
        non_empty(self.bot_id.as_ref())
    }

    pub fn greeting(&self) -> Option<&str> {
        non_empty(self.branding.as_ref().and_then(|b| b.greeting.as_ref()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessResponse {
    pub ok: bool,
    pub business_id: String,
    pub slug: String,
}
