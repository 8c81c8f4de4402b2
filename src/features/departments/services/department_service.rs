use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::departments::dtos::{
    CreateDepartmentDto, DepartmentFilter, DepartmentResponseDto,
};
use crate::features::departments::models::Department;
use crate::shared::types::{like_pattern, PaginationQuery};

/// Service for department operations
pub struct DepartmentService {
    pool: PgPool,
}

impl DepartmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, dto: CreateDepartmentDto) -> Result<DepartmentResponseDto> {
        let department: Department = sqlx::query_as(
            r#"
            INSERT INTO departments (name, description, location)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, location, created_at
            "#,
        )
        .bind(dto.name.trim())
        .bind(&dto.description)
        .bind(&dto.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create department: {:?}", e);
            AppError::from_db(e)
        })?;

        tracing::info!(
            "Department created: id={}, name={}",
            department.id,
            department.name
        );

        Ok(department.into())
    }

    /// List departments ordered by name
    pub async fn list(
        &self,
        filter: &DepartmentFilter,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<DepartmentResponseDto>, i64)> {
        let search = filter.search.as_deref().map(like_pattern);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM departments
            WHERE ($1::text IS NULL OR name ILIKE $1)
            "#,
        )
        .bind(&search)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let departments: Vec<Department> = sqlx::query_as(
            r#"
            SELECT id, name, description, location, created_at
            FROM departments
            WHERE ($1::text IS NULL OR name ILIKE $1)
            ORDER BY name
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&search)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list departments: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((departments.into_iter().map(Into::into).collect(), total))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<DepartmentResponseDto> {
        let department: Option<Department> = sqlx::query_as(
            r#"
            SELECT id, name, description, location, created_at
            FROM departments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get department: {:?}", e);
            AppError::Database(e)
        })?;

        department
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Department {} not found", id)))
    }
}
