//! Update medication record command

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::links;
use crate::{
    db::ScopedTransaction,
    error::{AppError, AppResult},
    features::{
        medications::{model::Medication, queries::get::find},
        shared::{
            patch::{self, Nullable},
            validation::{validate_ids, validate_optional_text, validate_positive, ValidationError},
        },
    },
};

/// Partial update. A present `livestock_ids` replaces the treated set.
/// Optional details are cleared by sending `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMedicationCommand {
    pub date: Option<NaiveDate>,
    pub brand: Option<String>,
    pub medication_brand: Option<String>,
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub dosage: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub method: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub administered_by: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cost: Nullable<f64>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub additional_cost: Nullable<f64>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub next_vaccination_date: Nullable<NaiveDate>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub notes: Nullable<String>,
    pub livestock_ids: Option<Vec<Uuid>>,
}

impl UpdateMedicationCommand {
    pub fn has_changes(&self) -> bool {
        self.date.is_some()
            || self.brand.is_some()
            || self.medication_brand.is_some()
            || self.name.is_some()
            || self.dosage.is_some()
            || self.method.is_some()
            || self.administered_by.is_some()
            || self.cost.is_some()
            || self.additional_cost.is_some()
            || self.next_vaccination_date.is_some()
            || self.notes.is_some()
            || self.livestock_ids.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_changes() {
            return Err(ValidationError::NoFieldsToUpdate);
        }
        validate_optional_text("brand", self.brand.as_deref(), 1, 100)?;
        validate_optional_text("medication_brand", self.medication_brand.as_deref(), 1, 100)?;
        validate_optional_text("name", self.name.as_deref(), 1, 100)?;
        validate_optional_text("dosage", patch::text(&self.dosage), 1, 100)?;
        validate_optional_text("method", patch::text(&self.method), 1, 100)?;
        validate_optional_text("administered_by", patch::text(&self.administered_by), 1, 100)?;
        validate_optional_text("notes", patch::text(&self.notes), 0, 1000)?;
        if let Some(Some(cost)) = self.cost {
            validate_positive("cost", cost)?;
        }
        if let Some(Some(cost)) = self.additional_cost {
            validate_positive("additional_cost", cost)?;
        }
        if let Some(ref ids) = self.livestock_ids {
            validate_ids("livestock_ids", ids)?;
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(medication_id = %id))]
pub async fn handle(
    pool: PgPool,
    id: Uuid,
    command: UpdateMedicationCommand,
) -> AppResult<Medication> {
    command.validate()?;

    let mut scope = ScopedTransaction::begin(&pool, "update medication record").await?;
    let outcome = update(scope.conn(), id, &command).await;
    let medication = scope.finish(outcome).await?;

    tracing::info!("Medication record updated successfully");

    Ok(medication)
}

async fn update(
    conn: &mut PgConnection,
    id: Uuid,
    command: &UpdateMedicationCommand,
) -> AppResult<Medication> {
    let updated: Option<Uuid> = sqlx::query_scalar(
        "UPDATE medications SET \
           date = COALESCE($2, date), \
           brand = COALESCE($3, brand), \
           medication_brand = COALESCE($4, medication_brand), \
           name = COALESCE($5, name), \
           dosage = CASE WHEN $6 THEN $7 ELSE dosage END, \
           method = CASE WHEN $8 THEN $9 ELSE method END, \
           administered_by = CASE WHEN $10 THEN $11 ELSE administered_by END, \
           cost = CASE WHEN $12 THEN $13::NUMERIC ELSE cost END, \
           additional_cost = CASE WHEN $14 THEN $15::NUMERIC ELSE additional_cost END, \
           next_vaccination_date = CASE WHEN $16 THEN $17 ELSE next_vaccination_date END, \
           notes = CASE WHEN $18 THEN $19 ELSE notes END, \
           updated_at = NOW() \
         WHERE id = $1 \
         RETURNING id",
    )
    .bind(id)
    .bind(command.date)
    .bind(&command.brand)
    .bind(&command.medication_brand)
    .bind(&command.name)
    .bind(patch::is_present(&command.dosage))
    .bind(patch::value(&command.dosage))
    .bind(patch::is_present(&command.method))
    .bind(patch::value(&command.method))
    .bind(patch::is_present(&command.administered_by))
    .bind(patch::value(&command.administered_by))
    .bind(patch::is_present(&command.cost))
    .bind(patch::value(&command.cost))
    .bind(patch::is_present(&command.additional_cost))
    .bind(patch::value(&command.additional_cost))
    .bind(patch::is_present(&command.next_vaccination_date))
    .bind(patch::value(&command.next_vaccination_date))
    .bind(patch::is_present(&command.notes))
    .bind(patch::value(&command.notes))
    .fetch_optional(&mut *conn)
    .await?;

    if updated.is_none() {
        return Err(AppError::not_found("Medication record", id));
    }

    if let Some(ref livestock_ids) = command.livestock_ids {
        links::replace(&mut *conn, id, livestock_ids).await?;
    }

    find(&mut *conn, id)
        .await?
        .ok_or_else(|| AppError::not_found("Medication record", id))
}
