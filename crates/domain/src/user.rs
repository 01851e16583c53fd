use std::fmt;
use std::str::FromStr;

use sea_query::{Expr, Func, Iden, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{Executor, FromRow, Postgres};
use thiserror::Error;

use crate::DomainError;

/// Schema definition for the users table
#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Name,
    FavoriteTvShow,
}

/// The closed set of shows a user can pick as their favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteTvShow {
    BreakingBad,
    TheWire,
}

/// Raised when a stored or supplied tag is not part of [`FavoriteTvShow`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown favorite_tv_show value: {0:?}")]
pub struct UnknownTvShow(pub String);

impl FavoriteTvShow {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteTvShow::BreakingBad => "breaking_bad",
            FavoriteTvShow::TheWire => "the_wire",
        }
    }
}

impl FromStr for FavoriteTvShow {
    type Err = UnknownTvShow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breaking_bad" => Ok(FavoriteTvShow::BreakingBad),
            "the_wire" => Ok(FavoriteTvShow::TheWire),
            other => Err(UnknownTvShow(other.to_string())),
        }
    }
}

impl fmt::Display for FavoriteTvShow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FavoriteTvShow> for sea_query::Value {
    fn from(show: FavoriteTvShow) -> Self {
        show.as_str().into()
    }
}

/// Raw user row from database
#[derive(Debug, Clone, FromRow)]
struct UserRow {
    pub id: i32,
    pub name: String,
    pub favorite_tv_show: String,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub favorite_tv_show: FavoriteTvShow,
}

impl User {
    /// A name is any non-empty string
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::Validation("name must not be empty".to_string()));
        }
        Ok(())
    }
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        // Guarded by a CHECK constraint, anything else is a decode failure.
        let favorite_tv_show = row
            .favorite_tv_show
            .parse::<FavoriteTvShow>()
            .map_err(|e: UnknownTvShow| sqlx::Error::Decode(Box::new(e)))?;

        Ok(User {
            id: row.id,
            name: row.name,
            favorite_tv_show,
        })
    }
}

const COLUMNS: [Users; 3] = [Users::Id, Users::Name, Users::FavoriteTvShow];

/// Repository for User operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user; the id is assigned by the database
    pub async fn create<'e, E>(
        executor: E,
        name: &str,
        favorite_tv_show: FavoriteTvShow,
    ) -> Result<User, DomainError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (sql, values) = Query::insert()
            .into_table(Users::Table)
            .columns([Users::Name, Users::FavoriteTvShow])
            .values_panic([name.into(), favorite_tv_show.into()])
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let row = sqlx::query_as_with::<_, UserRow, _>(&sql, values)
            .fetch_one(executor)
            .await?;

        row.try_into()
    }

    /// Find a user by ID
    pub async fn find_by_id<'e, E>(executor: E, id: i32) -> Result<Option<User>, DomainError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (sql, values) = Query::select()
            .columns(COLUMNS)
            .from(Users::Table)
            .and_where(Expr::col(Users::Id).eq(id))
            .limit(1)
            .build_sqlx(PostgresQueryBuilder);

        let row = sqlx::query_as_with::<_, UserRow, _>(&sql, values)
            .fetch_optional(executor)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// List all users, oldest id first
    pub async fn list<'e, E>(executor: E) -> Result<Vec<User>, DomainError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (sql, values) = Query::select()
            .columns(COLUMNS)
            .from(Users::Table)
            .order_by(Users::Id, Order::Asc)
            .build_sqlx(PostgresQueryBuilder);

        let rows = sqlx::query_as_with::<_, UserRow, _>(&sql, values)
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Overwrite every mutable field of a user
    pub async fn update<'e, E>(
        executor: E,
        id: i32,
        name: &str,
        favorite_tv_show: FavoriteTvShow,
    ) -> Result<Option<User>, DomainError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (sql, values) = Query::update()
            .table(Users::Table)
            .values([
                (Users::Name, name.into()),
                (Users::FavoriteTvShow, favorite_tv_show.into()),
            ])
            .and_where(Expr::col(Users::Id).eq(id))
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let row = sqlx::query_as_with::<_, UserRow, _>(&sql, values)
            .fetch_optional(executor)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Delete a user by ID
    pub async fn delete<'e, E>(executor: E, id: i32) -> Result<bool, DomainError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (sql, values) = Query::delete()
            .from_table(Users::Table)
            .and_where(Expr::col(Users::Id).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(executor).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count all persisted users
    pub async fn count<'e, E>(executor: E) -> Result<i64, DomainError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (sql, values) = Query::select()
            .expr(Func::count(Expr::col(Users::Id)))
            .from(Users::Table)
            .build_sqlx(PostgresQueryBuilder);

        let (count,): (i64,) = sqlx::query_as_with(&sql, values)
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
