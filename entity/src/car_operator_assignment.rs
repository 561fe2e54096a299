use sea_orm::entity::prelude::*;

/// A period during which an operator drives a car.
///
/// `end_date = NULL` marks the active assignment. The schema carries partial
/// unique indexes on `car_id` and `operator_id` restricted to active rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car_operator_assignment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub car_id: String,
    pub operator_id: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub created_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::car::Entity",
        from = "Column::CarId",
        to = "super::car::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Car,
    #[sea_orm(
        belongs_to = "super::car_operator::Entity",
        from = "Column::OperatorId",
        to = "super::car_operator::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    CarOperator,
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl Related<super::car_operator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarOperator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
