use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "player_house")]
pub enum House {
    #[sea_orm(string_value = "ARAVALI")]
    Aravali,
    #[sea_orm(string_value = "SHIVALIK")]
    Shivalik,
    #[sea_orm(string_value = "UDAIGIRI")]
    Udaigiri,
    #[sea_orm(string_value = "NILGIRI")]
    Nilgiri,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "player_strength")]
pub enum Strength {
    #[sea_orm(string_value = "BATSMAN")]
    Batsman,
    #[sea_orm(string_value = "BATTING_ALLROUNDER")]
    BattingAllrounder,
    #[sea_orm(string_value = "BOWLER")]
    Bowler,
    #[sea_orm(string_value = "BOWLING_ALLROUNDER")]
    BowlingAllrounder,
    #[sea_orm(string_value = "ALL_ROUNDER")]
    AllRounder,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub batch: i16,
    pub house: House,
    pub strength: Strength,
    #[sea_orm(column_name = "phone_number")]
    pub phone_number: Option<String>,
    #[sea_orm(column_name = "total_matches")]
    pub total_matches: i32,
    #[sea_orm(column_name = "total_score")]
    pub total_score: i32,
    #[sea_orm(column_name = "total_wickets")]
    pub total_wickets: i32,
    #[sea_orm(column_name = "base_price")]
    pub base_price: i64,
    #[sea_orm(column_name = "photo_url")]
    pub photo_url: Option<String>,
    #[sea_orm(column_name = "is_captain")]
    pub is_captain: bool,
    #[sea_orm(column_name = "is_icon")]
    pub is_icon: bool,
    #[sea_orm(column_name = "is_retained")]
    pub is_retained: bool,
    #[sea_orm(column_name = "is_traded")]
    pub is_traded: bool,
    pub sold: bool,
    #[sea_orm(column_name = "sold_to_team")]
    pub sold_to_team: Option<i64>,
    #[sea_orm(column_name = "sold_price")]
    pub sold_price: Option<i64>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::SoldToTeam",
        to = "super::teams::Column::Id"
    )]
    SoldTo,
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoldTo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
