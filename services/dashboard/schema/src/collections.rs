use sea_orm::entity::prelude::*;

/// Recorded pickup event from the external store. Read-only aggregates;
/// the collection lifecycle is owned elsewhere.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "collections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub collector_id: Uuid,
    pub customer_id: Option<Uuid>,
    pub customer_name: Option<String>,
    pub pickup_address: Option<String>,
    pub status: String,
    pub total_weight_kg: f64,
    pub total_value: f64,
    pub created_by: Option<Uuid>,
    pub actual_time: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
