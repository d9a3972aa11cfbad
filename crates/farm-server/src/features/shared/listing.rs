//! Shared listing engine
//!
//! Every `GET /<resource>` goes through [`fetch`]:
//!
//! 1. parse and validate `filters` against the entity's registered columns
//! 2. validate `page`/`limit`
//! 3. count the filtered rows (paginated requests only)
//! 4. select the filtered rows ordered by `created_at DESC, id`
//!
//! Steps 1 and 2 finish before any SQL is built.

use farm_common::filter::{EntitySchema, FilterDescriptor, FilterError, Predicate};
use serde::Deserialize;
use sqlx::{postgres::PgRow, FromRow, PgPool, Postgres, QueryBuilder};

use super::{
    filters::apply_filters,
    pagination::{PageRequest, PaginationMeta},
    validation::ValidationError,
};
use crate::error::AppResult;

/// Query-string parameters shared by all list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// JSON array of `{field, operator, value}` descriptors
    pub filters: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl ListParams {
    pub fn descriptors(&self) -> Result<Vec<FilterDescriptor>, FilterError> {
        farm_common::filter::parse_filters(self.filters.as_deref())
    }

    pub fn pagination(&self) -> Result<Option<PageRequest>, ValidationError> {
        PageRequest::from_params(self.page, self.limit)
    }

    /// Validate everything the client sent against `schema`
    pub fn plan(&self, schema: &EntitySchema) -> AppResult<ListPlan> {
        let descriptors = self.descriptors()?;
        let predicate = Predicate::build(&descriptors, &schema.columns, schema.alias)?;
        let page = self.pagination()?;
        Ok(ListPlan { predicate, page })
    }
}

/// A validated listing request
#[derive(Debug, Clone)]
pub struct ListPlan {
    pub predicate: Predicate,
    pub page: Option<PageRequest>,
}

/// One page (or all) of rows plus pagination metadata when windowed
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub meta: Option<PaginationMeta>,
}

/// Run a filtered, ordered and optionally paginated listing.
///
/// `select` is the entity's `SELECT ... FROM <table>` with columns
/// qualified by `schema.alias`.
#[tracing::instrument(skip(pool, schema, select, params), fields(table = schema.table))]
pub async fn fetch<T>(
    pool: &PgPool,
    schema: &EntitySchema,
    select: &str,
    params: &ListParams,
) -> AppResult<Listing<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let plan = params.plan(schema)?;

    tracing::debug!(
        conditions = plan.predicate.len(),
        predicate = %plan.predicate,
        page = ?plan.page,
        "Listing rows"
    );

    let meta = match plan.page {
        Some(page) => {
            let mut count = QueryBuilder::<Postgres>::new(format!(
                "SELECT COUNT(*) FROM {} {}",
                schema.table, schema.alias
            ));
            apply_filters(&mut count, &plan.predicate);
            let total: i64 = count.build_query_scalar::<i64>().fetch_one(pool).await?;
            Some(PaginationMeta::new(page.page, page.limit, total))
        },
        None => None,
    };

    let mut query = QueryBuilder::<Postgres>::new(select);
    apply_filters(&mut query, &plan.predicate);
    query.push(format!(
        " ORDER BY {} DESC, {}",
        schema.qualify("created_at"),
        schema.qualify("id")
    ));
    if let Some(page) = plan.page {
        query
            .push(" LIMIT ")
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.offset());
    }

    let items = query.build_query_as::<T>().fetch_all(pool).await?;

    Ok(Listing { items, meta })
}
