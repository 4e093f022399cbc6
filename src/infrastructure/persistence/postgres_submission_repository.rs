use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{RepositoryError, SortSpec, SubmissionRepository};
use crate::domain::entities::Submission;
use crate::domain::value_objects::{Checklist, SubmissionId};

pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn list_all(&self, sort: SortSpec) -> Result<Vec<Submission>, RepositoryError> {
        let order_by = match sort {
            SortSpec::SubmittedAtDesc => "submitted_at DESC",
        };

        let sql = format!(
            r#"
            SELECT id, full_name, firm_name, tax_number, reference_number,
                   contact_number, checklist_cheque, checklist_letterhead,
                   verified, submitted_at
            FROM submissions
            ORDER BY {}
            "#,
            order_by
        );

        let rows = sqlx::query_as::<_, SubmissionRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(SubmissionRow::into_domain).collect())
    }

    async fn find_by_id(
        &self,
        id: &SubmissionId,
    ) -> Result<Option<Submission>, RepositoryError> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT id, full_name, firm_name, tax_number, reference_number,
                   contact_number, checklist_cheque, checklist_letterhead,
                   verified, submitted_at
            FROM submissions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SubmissionRow::into_domain))
    }
}

// Internal row mapping struct
#[derive(sqlx::FromRow)]
struct SubmissionRow {
    id: uuid::Uuid,
    full_name: Option<String>,
    firm_name: Option<String>,
    tax_number: Option<String>,
    reference_number: Option<String>,
    contact_number: Option<String>,
    checklist_cheque: bool,
    checklist_letterhead: bool,
    verified: bool,
    submitted_at: chrono::DateTime<chrono::Utc>,
}

impl SubmissionRow {
    fn into_domain(self) -> Submission {
        Submission::reconstruct(
            SubmissionId::from_uuid(self.id),
            self.full_name,
            self.firm_name,
            self.tax_number,
            self.reference_number,
            self.contact_number,
            Checklist::new(self.checklist_cheque, self.checklist_letterhead),
            self.verified,
            self.submitted_at,
        )
    }
}
