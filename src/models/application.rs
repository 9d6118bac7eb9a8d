use serde::{Deserialize, Serialize};

/// Application record as stored and returned by the API.
/// `appcode` is the primary key and never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Application {
    pub appcode: String,
    pub appname: String,
    pub description: Option<String>,
    pub managergroups: Vec<String>,
    pub environment: String,
}

/// Request payload for creating a new application
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApplicationCreate {
    pub appcode: String,
    pub appname: String,
    #[serde(default)]
    pub description: Option<String>,
    pub managergroups: Vec<String>,
    pub environment: String,
}

/// Request payload for replacing every mutable field of an application.
/// An `appcode` in the body is ignored; the path parameter wins.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApplicationUpdate {
    pub appname: String,
    #[serde(default)]
    pub description: Option<String>,
    pub managergroups: Vec<String>,
    pub environment: String,
}

impl From<ApplicationCreate> for Application {
    fn from(create: ApplicationCreate) -> Self {
        Self {
            appcode: create.appcode,
            appname: create.appname,
            description: create.description,
            managergroups: create.managergroups,
            environment: create.environment,
        }
    }
}

impl ApplicationUpdate {
    /// Build the full replacement record for `appcode`
    pub fn into_application(self, appcode: impl Into<String>) -> Application {
        Application {
            appcode: appcode.into(),
            appname: self.appname,
            description: self.description,
            managergroups: self.managergroups,
            environment: self.environment,
        }
    }
}

/// Acknowledgment returned by a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub detail: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            detail: "Deleted".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_without_description() {
        let create: ApplicationCreate = serde_json::from_value(json!({
            "appcode": "A1",
            "appname": "Billing",
            "managergroups": [],
            "environment": "dev"
        }))
        .unwrap();

        assert_eq!(create.description, None);
        assert!(create.managergroups.is_empty());
    }

    #[test]
    fn test_create_missing_required_field() {
        let result = serde_json::from_value::<ApplicationCreate>(json!({
            "appcode": "A1",
            "managergroups": ["ops"],
            "environment": "dev"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_wrong_type() {
        let result = serde_json::from_value::<ApplicationCreate>(json!({
            "appcode": "A1",
            "appname": "Billing",
            "managergroups": "ops",
            "environment": "dev"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_environment_is_not_restricted() {
        let create: ApplicationCreate = serde_json::from_value(json!({
            "appcode": "A1",
            "appname": "Billing",
            "managergroups": ["ops"],
            "environment": "staging"
        }))
        .unwrap();
        assert_eq!(create.environment, "staging");
    }

    #[test]
    fn test_update_ignores_appcode_in_body() {
        let update: ApplicationUpdate = serde_json::from_value(json!({
            "appcode": "OTHER",
            "appname": "Renamed",
            "description": "new",
            "managergroups": ["ops", "ops"],
            "environment": "qa"
        }))
        .unwrap();

        let app = update.into_application("A1");
        assert_eq!(app.appcode, "A1");
        assert_eq!(app.appname, "Renamed");
        // duplicates are kept in order
        assert_eq!(app.managergroups, vec!["ops", "ops"]);
    }

    #[test]
    fn test_application_serializes_null_description() {
        let app = Application {
            appcode: "A1".to_string(),
            appname: "Billing".to_string(),
            description: None,
            managergroups: vec!["ops".to_string()],
            environment: "prod".to_string(),
        };

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(
            value,
            json!({
                "appcode": "A1",
                "appname": "Billing",
                "description": null,
                "managergroups": ["ops"],
                "environment": "prod"
            })
        );
    }

    #[test]
    fn test_delete_response() {
        let value = serde_json::to_value(DeleteResponse::deleted()).unwrap();
        assert_eq!(value, json!({ "detail": "Deleted" }));
    }
}
