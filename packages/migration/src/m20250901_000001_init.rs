use sea_orm::Statement;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    Name,
    Batch,
    House,
    Strength,
    PhoneNumber,
    TotalMatches,
    TotalScore,
    TotalWickets,
    BasePrice,
    PhotoUrl,
    IsCaptain,
    IsIcon,
    IsRetained,
    IsTraded,
    Sold,
    SoldToTeam,
    SoldPrice,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Teams {
    Table,
    Id,
    Name,
    Code,
    LogoUrl,
    Wallet,
    MaxPlayers,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TeamPurchases {
    Table,
    Id,
    TeamId,
    PlayerId,
    Price,
    CreatedAt,
}

#[derive(Iden)]
enum AuctionSettings {
    Table,
    Id,
    BasePrice,
    MinIncrement,
    MaxPlayersPerTeam,
    CurrentPlayerId,
    AuctionActive,
    UpdatedAt,
}

#[derive(Iden)]
enum ActiveBids {
    Table,
    Id,
    PlayerId,
    CurrentAmount,
    CurrentTeamId,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum BidRaises {
    Table,
    Id,
    BidId,
    TeamId,
    Amount,
    CreatedAt,
}

#[derive(Iden)]
enum PlayerHouseEnum {
    #[iden = "player_house"]
    Type,
}

#[derive(Iden)]
enum PlayerStrengthEnum {
    #[iden = "player_strength"]
    Type,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Enum types (guarded; re-running `up` against a partially created
        // schema must not fail on pre-existing types)
        async fn enum_exists(manager: &SchemaManager<'_>, enum_name: &str) -> Result<bool, DbErr> {
            let result = manager
                .get_connection()
                .query_one(Statement::from_string(
                    sea_orm::DatabaseBackend::Postgres,
                    format!("SELECT 1 FROM pg_type WHERE typname = '{}'", enum_name),
                ))
                .await?;
            Ok(result.is_some())
        }

        if !enum_exists(manager, "player_house").await? {
            manager
                .create_type(
                    PgType::create()
                        .as_enum(PlayerHouseEnum::Type)
                        .values(["ARAVALI", "SHIVALIK", "UDAIGIRI", "NILGIRI"])
                        .to_owned(),
                )
                .await?;
        }

        if !enum_exists(manager, "player_strength").await? {
            manager
                .create_type(
                    PgType::create()
                        .as_enum(PlayerStrengthEnum::Type)
                        .values([
                            "BATSMAN",
                            "BATTING_ALLROUNDER",
                            "BOWLER",
                            "BOWLING_ALLROUNDER",
                            "ALL_ROUNDER",
                        ])
                        .to_owned(),
                )
                .await?;
        }

        // teams
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teams::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Teams::Name).string().not_null())
                    .col(ColumnDef::new(Teams::Code).string().not_null())
                    .col(ColumnDef::new(Teams::LogoUrl).string().null())
                    .col(
                        ColumnDef::new(Teams::Wallet)
                            .big_integer()
                            .not_null()
                            .default(100_000),
                    )
                    .col(
                        ColumnDef::new(Teams::MaxPlayers)
                            .small_integer()
                            .not_null()
                            .default(15),
                    )
                    .col(
                        ColumnDef::new(Teams::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Teams::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_teams_name")
                    .table(Teams::Table)
                    .col(Teams::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_teams_code")
                    .table(Teams::Table)
                    .col(Teams::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(ColumnDef::new(Players::Batch).small_integer().not_null())
                    .col(
                        ColumnDef::new(Players::House)
                            .custom(PlayerHouseEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::Strength)
                            .custom(PlayerStrengthEnum::Type)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Players::PhoneNumber).string().null())
                    .col(
                        ColumnDef::new(Players::TotalMatches)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::TotalScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::TotalWickets)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::BasePrice)
                            .big_integer()
                            .not_null()
                            .default(1000),
                    )
                    .col(ColumnDef::new(Players::PhotoUrl).string().null())
                    .col(
                        ColumnDef::new(Players::IsCaptain)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Players::IsIcon)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Players::IsRetained)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Players::IsTraded)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Players::Sold)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Players::SoldToTeam).big_integer().null())
                    .col(ColumnDef::new(Players::SoldPrice).big_integer().null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Players::Table, Players::SoldToTeam)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_players_sold")
                    .table(Players::Table)
                    .col(Players::Sold)
                    .to_owned(),
            )
            .await?;

        // team_purchases
        manager
            .create_table(
                Table::create()
                    .table(TeamPurchases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamPurchases::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(TeamPurchases::TeamId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeamPurchases::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeamPurchases::Price).big_integer().not_null())
                    .col(
                        ColumnDef::new(TeamPurchases::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeamPurchases::Table, TeamPurchases::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeamPurchases::Table, TeamPurchases::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_team_purchases_team_id")
                    .table(TeamPurchases::Table)
                    .col(TeamPurchases::TeamId)
                    .to_owned(),
            )
            .await?;

        // One purchase per player across all teams
        manager
            .create_index(
                Index::create()
                    .name("ux_team_purchases_player_id")
                    .table(TeamPurchases::Table)
                    .col(TeamPurchases::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_team_purchases_created_at")
                    .table(TeamPurchases::Table)
                    .col(TeamPurchases::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // auction_settings (singleton row, id = 1)
        manager
            .create_table(
                Table::create()
                    .table(AuctionSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuctionSettings::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AuctionSettings::BasePrice)
                            .big_integer()
                            .not_null()
                            .default(2500),
                    )
                    .col(
                        ColumnDef::new(AuctionSettings::MinIncrement)
                            .big_integer()
                            .not_null()
                            .default(500),
                    )
                    .col(
                        ColumnDef::new(AuctionSettings::MaxPlayersPerTeam)
                            .small_integer()
                            .not_null()
                            .default(15),
                    )
                    .col(
                        ColumnDef::new(AuctionSettings::CurrentPlayerId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AuctionSettings::AuctionActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AuctionSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AuctionSettings::Table, AuctionSettings::CurrentPlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // active_bids
        manager
            .create_table(
                Table::create()
                    .table(ActiveBids::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActiveBids::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(ActiveBids::PlayerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ActiveBids::CurrentAmount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActiveBids::CurrentTeamId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ActiveBids::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ActiveBids::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActiveBids::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ActiveBids::Table, ActiveBids::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ActiveBids::Table, ActiveBids::CurrentTeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one bid row per player; the raise path load-or-creates
        // against this constraint
        manager
            .create_index(
                Index::create()
                    .name("ux_active_bids_player_id")
                    .table(ActiveBids::Table)
                    .col(ActiveBids::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_active_bids_active")
                    .table(ActiveBids::Table)
                    .col(ActiveBids::Active)
                    .to_owned(),
            )
            .await?;

        // bid_raises
        manager
            .create_table(
                Table::create()
                    .table(BidRaises::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BidRaises::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(BidRaises::BidId).big_integer().not_null())
                    .col(ColumnDef::new(BidRaises::TeamId).big_integer().not_null())
                    .col(ColumnDef::new(BidRaises::Amount).big_integer().not_null())
                    .col(
                        ColumnDef::new(BidRaises::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BidRaises::Table, BidRaises::BidId)
                            .to(ActiveBids::Table, ActiveBids::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BidRaises::Table, BidRaises::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_bid_raises_bid_id")
                    .table(BidRaises::Table)
                    .col(BidRaises::BidId)
                    .to_owned(),
            )
            .await?;

        // Seed the settings singleton
        manager
            .get_connection()
            .execute(Statement::from_string(
                sea_orm::DatabaseBackend::Postgres,
                "INSERT INTO auction_settings (id, updated_at) VALUES (1, now()) \
                 ON CONFLICT (id) DO NOTHING"
                    .to_string(),
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table

        manager
            .drop_index(
                Index::drop()
                    .name("ix_bid_raises_bid_id")
                    .table(BidRaises::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(BidRaises::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_active_bids_active")
                    .table(ActiveBids::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("ux_active_bids_player_id")
                    .table(ActiveBids::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ActiveBids::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AuctionSettings::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_team_purchases_created_at")
                    .table(TeamPurchases::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("ux_team_purchases_player_id")
                    .table(TeamPurchases::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("ix_team_purchases_team_id")
                    .table(TeamPurchases::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(TeamPurchases::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_players_sold")
                    .table(Players::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_teams_code")
                    .table(Teams::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("ux_teams_name")
                    .table(Teams::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;

        manager
            .drop_type(PgType::drop().name(PlayerStrengthEnum::Type).to_owned())
            .await?;
        manager
            .drop_type(PgType::drop().name(PlayerHouseEnum::Type).to_owned())
            .await?;

        Ok(())
    }
}
