//! The check-in engine.
//!
//! A roster record has two states: unscanned and scanned. The first accepted
//! scan wins the `unscanned -> scanned` transition and stamps `scan_time`;
//! every later presentation of the same badge is a duplicate that only bumps
//! `scanned_times`. Both transitions go through record-granular conditional
//! updates so two concurrent scanners can never both be told they performed
//! the first scan.

use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, ExprTrait as _};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use thiserror::Error;

use crate::models::attendee::{Column, Entity};

/// How many times the read-decide-write loop may lose a race before giving up.
const MAX_DECISION_ATTEMPTS: usize = 5;

/// What the scanner is told about the attendee after an accepted attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInReceipt {
    pub name: String,
    /// Time of the first accepted scan. Duplicates report the original value.
    pub scan_time: Option<DateTime<Utc>>,
    pub scanned_times: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckInOutcome {
    /// This attempt won the first-scan transition.
    CheckedIn(CheckInReceipt),
    /// The badge was already scanned; only the counter moved.
    AlreadyCheckedIn(CheckInReceipt),
}

#[derive(Debug, Error)]
pub enum CheckInError {
    #[error("missing or empty attendee id")]
    InvalidRequest,
    #[error("attendee not found")]
    NotFound,
    #[error("check-in not resolved after {0} contended attempts")]
    ConflictExhausted(usize),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Applies one scan attempt for `id`.
///
/// The resolved scan time is `claimed_scan_time` when the scanner supplied
/// one, otherwise the server clock. Exactly one of any number of concurrent
/// calls for the same unscanned id returns [`CheckInOutcome::CheckedIn`];
/// the rest land on the duplicate branch. Nothing is written for an unknown
/// or empty id.
pub async fn attempt_check_in(
    db: &DatabaseConnection,
    id: &str,
    claimed_scan_time: Option<DateTime<Utc>>,
) -> Result<CheckInOutcome, CheckInError> {
    if id.trim().is_empty() {
        return Err(CheckInError::InvalidRequest);
    }

    for attempt in 0..MAX_DECISION_ATTEMPTS {
        let Some(attendee) = Entity::find_by_id(id).one(db).await? else {
            return Err(CheckInError::NotFound);
        };

        let now = Utc::now();
        if !attendee.scanned {
            let scan_time = claimed_scan_time.unwrap_or(now);
            let result = Entity::update_many()
                .col_expr(Column::Scanned, Expr::value(true))
                .col_expr(Column::ScanTime, Expr::value(scan_time))
                .col_expr(Column::ScannedTimes, Expr::col(Column::ScannedTimes).add(1))
                .col_expr(Column::UpdatedAt, Expr::value(now))
                .filter(Column::Id.eq(id))
                .filter(Column::Scanned.eq(false))
                .exec(db)
                .await?;

            if result.rows_affected == 1 {
                // The counter can only leave zero through this branch, so the
                // post-increment value is exactly 1.
                return Ok(CheckInOutcome::CheckedIn(CheckInReceipt {
                    name: attendee.name,
                    scan_time: Some(scan_time),
                    scanned_times: 1,
                }));
            }
        } else {
            // Duplicate scan: bump the counter, leave scan_time untouched.
            let result = Entity::update_many()
                .col_expr(Column::ScannedTimes, Expr::col(Column::ScannedTimes).add(1))
                .col_expr(Column::UpdatedAt, Expr::value(now))
                .filter(Column::Id.eq(id))
                .filter(Column::Scanned.eq(true))
                .exec(db)
                .await?;

            if result.rows_affected == 1 {
                let Some(refreshed) = Entity::find_by_id(id).one(db).await? else {
                    return Err(CheckInError::NotFound);
                };
                return Ok(CheckInOutcome::AlreadyCheckedIn(CheckInReceipt {
                    name: refreshed.name,
                    scan_time: refreshed.scan_time,
                    scanned_times: refreshed.scanned_times,
                }));
            }
        }

        // The record changed under us (a concurrent scanner won, or an admin
        // removed the row); re-read and take the other branch.
        tracing::debug!(id, attempt, "check-in decision raced, retrying");
    }

    Err(CheckInError::ConflictExhausted(MAX_DECISION_ATTEMPTS))
}
