//! Kitten repository: CRUD over the `kittens` table.

use chrono::Utc;

use kitten_core::entities::{Kitten, NewKitten};

use crate::error::DatabaseError;
use crate::helpers::{
    format_date, format_datetime, get_opt_string, opt_value, parse_datetime, parse_enum,
    parse_optional_date,
};
use crate::service::KittenService;
use crate::updates::kitten::KittenUpdate;

pub(crate) const SELECT_COLS: &str =
    "id, name, birth_date, rescue_date, color, sex, status, notes, created_at, updated_at";

pub(crate) fn row_to_kitten(row: &libsql::Row) -> Result<Kitten, DatabaseError> {
    Ok(Kitten {
        id: row.get(0)?,
        name: row.get(1)?,
        birth_date: parse_optional_date(get_opt_string(row, 2)?.as_deref())?,
        rescue_date: parse_optional_date(get_opt_string(row, 3)?.as_deref())?,
        color: get_opt_string(row, 4)?,
        sex: parse_enum(&row.get::<String>(5)?)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        notes: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl KittenService {
    /// All kittens, Active first, then by name.
    pub async fn list_kittens(&self) -> Result<Vec<Kitten>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM kittens \
                     ORDER BY status = 'Active' DESC, name, id"
                ),
                (),
            )
            .await?;

        let mut kittens = Vec::new();
        while let Some(row) = rows.next().await? {
            kittens.push(row_to_kitten(&row)?);
        }
        Ok(kittens)
    }

    pub async fn get_kitten(&self, id: i64) -> Result<Option<Kitten>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM kittens WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_kitten(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert a kitten and return its storage-assigned id.
    pub async fn create_kitten(&self, kitten: &NewKitten) -> Result<i64, DatabaseError> {
        let now = format_datetime(Utc::now());

        self.db()
            .conn()
            .execute(
                "INSERT INTO kittens \
                 (name, birth_date, rescue_date, color, sex, status, notes, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                libsql::params![
                    kitten.name.as_str(),
                    kitten.birth_date.map(format_date),
                    kitten.rescue_date.map(format_date),
                    kitten.color.as_deref(),
                    kitten.sex.as_str(),
                    kitten.status.as_str(),
                    kitten.notes.as_deref(),
                    now.as_str(),
                    now.as_str()
                ],
            )
            .await?;

        let id = self.db().conn().last_insert_rowid();
        tracing::debug!(id, name = %kitten.name, "created kitten");
        Ok(id)
    }

    /// Apply a partial update. Returns whether a row changed.
    ///
    /// `updated_at` is refreshed even when the patch is empty, so an empty
    /// patch against an existing kitten still reports `true`.
    pub async fn update_kitten(&self, id: i64, update: KittenUpdate) -> Result<bool, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.into());
            idx += 1;
        }
        if let Some(birth_date) = update.birth_date {
            sets.push(format!("birth_date = ?{idx}"));
            params.push(opt_value(birth_date.map(format_date)));
            idx += 1;
        }
        if let Some(rescue_date) = update.rescue_date {
            sets.push(format!("rescue_date = ?{idx}"));
            params.push(opt_value(rescue_date.map(format_date)));
            idx += 1;
        }
        if let Some(color) = update.color {
            sets.push(format!("color = ?{idx}"));
            params.push(opt_value(color));
            idx += 1;
        }
        if let Some(sex) = update.sex {
            sets.push(format!("sex = ?{idx}"));
            params.push(sex.as_str().into());
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(notes) = update.notes {
            sets.push(format!("notes = ?{idx}"));
            params.push(opt_value(notes));
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(format_datetime(Utc::now()).into());
        idx += 1;

        params.push(id.into());
        let sql = format!("UPDATE kittens SET {} WHERE id = ?{idx}", sets.join(", "));
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::debug!(id, changed, "updated kitten");
        Ok(changed > 0)
    }

    /// Delete a kitten and, by cascade, its measurements.
    ///
    /// Deleting an id that does not exist returns `false`, not an error.
    pub async fn delete_kitten(&self, id: i64) -> Result<bool, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM kittens WHERE id = ?1", [id])
            .await?;
        tracing::debug!(id, changed, "deleted kitten");
        Ok(changed > 0)
    }
}
