use serde_json::Value;

use crate::error::FetchError;

/// The two fields a run reads out of a user record. The rest of the
/// record is dropped as soon as these are pulled out. Values are kept as
/// sent; only a missing key is an error.
#[derive(Clone, Debug, PartialEq)]
pub struct UserSummary {
    pub id: Value,
    pub first_name: Value,
}

impl UserSummary {
    pub fn from_record(url: &str, record: &Value) -> Result<Self, FetchError> {
        let field = |name: &'static str| {
            record.get(name).cloned().ok_or_else(|| FetchError::Schema {
                url: url.to_string(),
                field: name,
            })
        };

        Ok(UserSummary {
            id: field("id")?,
            first_name: field("firstName")?,
        })
    }

    pub fn line(&self) -> String {
        format!(
            "User ID: {}, Name: {}",
            render(&self.id),
            render(&self.first_name)
        )
    }
}

// strings print bare, everything else as JSON
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
