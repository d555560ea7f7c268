use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::CharacterId",
        to = "super::character::Column::Id"
    )]
    Character,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// What a favorite points at. A row always has exactly one target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
}

impl FavoriteTarget {
    pub fn new_row(self, user_id: i32) -> ActiveModel {
        let (planet_id, character_id) = match self {
            Self::Planet(id) => (Some(id), None),
            Self::Character(id) => (None, Some(id)),
        };
        ActiveModel {
            user_id: Set(user_id),
            planet_id: Set(planet_id),
            character_id: Set(character_id),
            ..Default::default()
        }
    }

    /// Filter matching this user's favorite rows for the target.
    pub fn condition(self, user_id: i32) -> Condition {
        let cond = Condition::all().add(Column::UserId.eq(user_id));
        match self {
            Self::Planet(id) => cond.add(Column::PlanetId.eq(id)),
            Self::Character(id) => cond.add(Column::CharacterId.eq(id)),
        }
    }
}

impl Model {
    pub fn target(&self) -> Option<FavoriteTarget> {
        match (self.planet_id, self.character_id) {
            (Some(id), None) => Some(FavoriteTarget::Planet(id)),
            (None, Some(id)) => Some(FavoriteTarget::Character(id)),
            _ => None,
        }
    }
}
