//! Create group command

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    error::AppResult,
    features::{
        groups::model::{Group, GROUP_COLUMNS},
        shared::{
            error_helpers::map_unique_violation,
            validation::{validate_non_negative, validate_text, ValidationError},
        },
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupCommand {
    pub group_name: String,
    /// Farm-assigned identifier (must be unique)
    pub group_id_number: String,
    #[serde(default)]
    pub number_of_livestock: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl CreateGroupCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text("group_name", &self.group_name, 1, 100)?;
        validate_text("group_id_number", &self.group_id_number, 1, 50)?;
        validate_non_negative("number_of_livestock", f64::from(self.number_of_livestock))?;
        Ok(())
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(group_id_number = %command.group_id_number)
)]
pub async fn handle(pool: PgPool, command: CreateGroupCommand) -> AppResult<Group> {
    command.validate()?;

    let sql = format!(
        "INSERT INTO groups (group_name, group_id_number, number_of_livestock, remarks) \
         VALUES ($1, $2, $3, $4) \
         RETURNING {}",
        GROUP_COLUMNS
    );

    let group = sqlx::query_as::<_, Group>(&sql)
        .bind(&command.group_name)
        .bind(&command.group_id_number)
        .bind(command.number_of_livestock)
        .bind(&command.remarks)
        .fetch_one(&pool)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                &format!(
                    "Group with ID number {} already exists",
                    command.group_id_number
                ),
            )
        })?;

    tracing::info!(group_id = %group.id, "Group created successfully");

    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> CreateGroupCommand {
        CreateGroupCommand {
            group_name: "North paddock".to_string(),
            group_id_number: "G-001".to_string(),
            number_of_livestock: 12,
            remarks: None,
        }
    }

    #[test]
    fn test_validation_success() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let cmd = CreateGroupCommand {
            group_name: " ".to_string(),
            ..command()
        };
        assert_eq!(
            cmd.validate(),
            Err(ValidationError::Required {
                field: "group_name"
            })
        );
    }

    #[test]
    fn test_validation_rejects_long_id_number() {
        let cmd = CreateGroupCommand {
            group_id_number: "9".repeat(51),
            ..command()
        };
        assert!(matches!(cmd.validate(), Err(ValidationError::Length { .. })));
    }

    #[test]
    fn test_validation_rejects_negative_count() {
        let cmd = CreateGroupCommand {
            number_of_livestock: -1,
            ..command()
        };
        assert!(matches!(cmd.validate(), Err(ValidationError::Negative { .. })));
    }

    #[test]
    fn test_count_defaults_to_zero() {
        let cmd: CreateGroupCommand =
            serde_json::from_str(r#"{"group_name":"Calves","group_id_number":"G-2"}"#).unwrap();
        assert_eq!(cmd.number_of_livestock, 0);
    }
}
