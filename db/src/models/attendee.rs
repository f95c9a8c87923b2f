use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use serde::Serialize;
use uuid::Uuid;

/// Represents one roster entry in the `attendees` table.
///
/// The `id` is the opaque string embedded in the attendee's QR code; it is
/// assigned at creation and never changes. Check-in state (`scanned`,
/// `scan_time`, `scanned_times`) is mutated only through [`crate::checkin`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendees")]
pub struct Model {
    /// Primary key, a UUID v4 string encoded in the QR code.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display name.
    pub name: String,
    pub title: Option<String>,
    pub district: Option<String>,
    pub region: Option<String>,
    /// Whether the first accepted check-in has happened.
    pub scanned: bool,
    /// Timestamp of the first accepted check-in; duplicates never overwrite it.
    pub scan_time: Option<DateTime<Utc>>,
    /// Count of every check-in attempt against this record, duplicates included.
    pub scanned_times: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new attendee with a fresh UUID and unscanned check-in state.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        title: Option<&str>,
        district: Option<&str>,
        region: Option<&str>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let attendee = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_owned()),
            title: Set(title.map(str::to_owned)),
            district: Set(district.map(str::to_owned)),
            region: Set(region.map(str::to_owned)),
            scanned: Set(false),
            scan_time: Set(None),
            scanned_times: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        attendee.insert(db).await
    }
}
