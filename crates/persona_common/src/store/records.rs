//! Diagnosis and robot records.
//!
//! Row types plus the query surface of the store. Responses and tallies
//! are stored as JSON text columns; the category code is stored as its
//! four-letter string.

use super::db::PersonaDb;
use crate::category::CategoryCode;
use crate::profile::{AgeGroup, Gender, UserProfile};
use crate::question::ResponseSet;
use crate::tally::AxisTally;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::params;

/// One diagnosis to persist.
#[derive(Debug, Clone)]
pub struct NewDiagnosis {
    pub user_id: String,
    pub robot_id: String,
    pub location: String,
    pub profile: UserProfile,
    pub responses: ResponseSet,
    pub category: CategoryCode,
    pub tally: AxisTally,
    pub created_at: DateTime<Utc>,
}

/// One stored diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisRecord {
    pub id: i64,
    pub user_id: String,
    pub robot_id: String,
    pub location: String,
    pub profile: UserProfile,
    pub responses: ResponseSet,
    pub category: CategoryCode,
    pub tally: AxisTally,
    pub created_at: DateTime<Utc>,
}

/// A robot alias registered by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub description: String,
}

/// Raw row shape read inside the rusqlite closure; parsed into a
/// `DiagnosisRecord` outside of it so serde errors surface with context.
type RawDiagnosisRow = (
    i64,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    DateTime<Utc>,
);

const DIAGNOSIS_COLUMNS: &str = "id, user_id, robot_id, location, gender, age_group, \
     occupation, responses, category, tally, created_at";

fn read_raw_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawDiagnosisRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
        row.get(9)?,
        row.get(10)?,
    ))
}

fn parse_record(raw: RawDiagnosisRow) -> Result<DiagnosisRecord> {
    let (id, user_id, robot_id, location, gender, age_group, occupation, responses, category, tally, created_at) =
        raw;

    let profile = UserProfile {
        gender: Gender::from_label(&gender)
            .with_context(|| format!("diagnosis {id}: bad gender '{gender}'"))?,
        age_group: AgeGroup::from_label(&age_group)
            .with_context(|| format!("diagnosis {id}: bad age group '{age_group}'"))?,
        occupation,
    };

    Ok(DiagnosisRecord {
        id,
        user_id,
        robot_id,
        location,
        profile,
        responses: serde_json::from_str(&responses)
            .with_context(|| format!("diagnosis {id}: bad responses payload"))?,
        category: category
            .parse()
            .with_context(|| format!("diagnosis {id}: bad category '{category}'"))?,
        tally: serde_json::from_str(&tally)
            .with_context(|| format!("diagnosis {id}: bad tally payload"))?,
        created_at,
    })
}

impl PersonaDb {
    /// Persist one diagnosis, returning its row id.
    pub async fn insert_diagnosis(&self, diagnosis: NewDiagnosis) -> Result<i64> {
        let conn = self.conn();

        let id = tokio::task::spawn_blocking(move || -> Result<i64> {
            let responses = serde_json::to_string(&diagnosis.responses)?;
            let tally = serde_json::to_string(&diagnosis.tally)?;

            let conn = conn.blocking_lock();
            conn.execute(
                "INSERT INTO diagnoses (user_id, robot_id, location, gender, age_group, \
                 occupation, responses, category, tally, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    diagnosis.user_id,
                    diagnosis.robot_id,
                    diagnosis.location,
                    diagnosis.profile.gender.label(),
                    diagnosis.profile.age_group.label(),
                    diagnosis.profile.occupation,
                    responses,
                    diagnosis.category.to_string(),
                    tally,
                    diagnosis.created_at,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await??;

        Ok(id)
    }

    /// Most recent diagnosis for a user/robot pair, if any.
    pub async fn latest_diagnosis(
        &self,
        user_id: &str,
        robot_id: &str,
    ) -> Result<Option<DiagnosisRecord>> {
        let conn = self.conn();
        let user_id = user_id.to_string();
        let robot_id = robot_id.to_string();

        let raw = tokio::task::spawn_blocking(move || -> Result<Option<RawDiagnosisRow>> {
            let conn = conn.blocking_lock();
            let mut stmt = conn.prepare(&format!(
                "SELECT {DIAGNOSIS_COLUMNS} FROM diagnoses
                 WHERE user_id = ?1 AND robot_id = ?2
                 ORDER BY created_at DESC LIMIT 1"
            ))?;
            let mut rows = stmt.query_map(params![user_id, robot_id], read_raw_row)?;
            match rows.next() {
                Some(row) => Ok(Some(row?)),
                None => Ok(None),
            }
        })
        .await??;

        raw.map(parse_record).transpose()
    }

    /// All diagnoses for one user, oldest first, optionally limited to
    /// one robot.
    pub async fn history(
        &self,
        user_id: &str,
        robot_id: Option<&str>,
    ) -> Result<Vec<DiagnosisRecord>> {
        let conn = self.conn();
        let user_id = user_id.to_string();
        let robot_id = robot_id.map(str::to_string);

        let raw = tokio::task::spawn_blocking(move || -> Result<Vec<RawDiagnosisRow>> {
            let conn = conn.blocking_lock();
            let rows = match robot_id {
                Some(robot) => {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT {DIAGNOSIS_COLUMNS} FROM diagnoses
                         WHERE user_id = ?1 AND robot_id = ?2
                         ORDER BY created_at ASC"
                    ))?;
                    let rows: rusqlite::Result<Vec<_>> =
                        stmt.query_map(params![user_id, robot], read_raw_row)?.collect();
                    rows?
                }
                None => {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT {DIAGNOSIS_COLUMNS} FROM diagnoses
                         WHERE user_id = ?1
                         ORDER BY created_at ASC"
                    ))?;
                    let rows: rusqlite::Result<Vec<_>> =
                        stmt.query_map(params![user_id], read_raw_row)?.collect();
                    rows?
                }
            };
            Ok(rows)
        })
        .await??;

        raw.into_iter().map(parse_record).collect()
    }

    /// Every stored diagnosis, oldest first. Input for the statistics
    /// aggregations.
    pub async fn all_diagnoses(&self) -> Result<Vec<DiagnosisRecord>> {
        let conn = self.conn();

        let raw = tokio::task::spawn_blocking(move || -> Result<Vec<RawDiagnosisRow>> {
            let conn = conn.blocking_lock();
            let mut stmt = conn.prepare(&format!(
                "SELECT {DIAGNOSIS_COLUMNS} FROM diagnoses ORDER BY created_at ASC"
            ))?;
            let rows: rusqlite::Result<Vec<_>> = stmt.query_map([], read_raw_row)?.collect();
            Ok(rows?)
        })
        .await??;

        raw.into_iter().map(parse_record).collect()
    }

    /// Register a robot alias for a user. Returns false if the name was
    /// already registered.
    pub async fn register_robot(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
    ) -> Result<bool> {
        let conn = self.conn();
        let user_id = user_id.to_string();
        let name = name.trim().to_string();
        let description = description.to_string();

        if name.is_empty() {
            anyhow::bail!("robot name must not be empty");
        }

        let inserted = tokio::task::spawn_blocking(move || -> Result<bool> {
            let conn = conn.blocking_lock();
            let changed = conn.execute(
                "INSERT OR IGNORE INTO robots (user_id, name, description) VALUES (?1, ?2, ?3)",
                params![user_id, name, description],
            )?;
            Ok(changed > 0)
        })
        .await??;

        Ok(inserted)
    }

    /// Robots registered by a user, oldest first.
    pub async fn list_robots(&self, user_id: &str) -> Result<Vec<Robot>> {
        let conn = self.conn();
        let user_id = user_id.to_string();

        let robots = tokio::task::spawn_blocking(move || -> Result<Vec<Robot>> {
            let conn = conn.blocking_lock();
            let mut stmt = conn.prepare(
                "SELECT id, user_id, name, description FROM robots
                 WHERE user_id = ?1 ORDER BY id ASC",
            )?;
            let rows: rusqlite::Result<Vec<Robot>> = stmt
                .query_map(params![user_id], |row| {
                    Ok(Robot {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        name: row.get(2)?,
                        description: row.get(3)?,
                    })
                })?
                .collect();
            Ok(rows?)
        })
        .await??;

        Ok(robots)
    }

    /// Delete a robot alias. At least one robot must remain registered,
    /// so deleting the last one is refused.
    pub async fn delete_robot(&self, user_id: &str, name: &str) -> Result<bool> {
        let conn = self.conn();
        let user_id = user_id.to_string();
        let name = name.to_string();

        let deleted = tokio::task::spawn_blocking(move || -> Result<bool> {
            let conn = conn.blocking_lock();
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM robots WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )?;
            if count <= 1 {
                anyhow::bail!("at least one robot must remain registered");
            }
            let changed = conn.execute(
                "DELETE FROM robots WHERE user_id = ?1 AND name = ?2",
                params![user_id, name],
            )?;
            Ok(changed > 0)
        })
        .await??;

        Ok(deleted)
    }
}
