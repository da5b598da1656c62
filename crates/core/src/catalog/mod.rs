mod assemble;
mod requests;
mod service;

pub use assemble::{partition_featured, sort_by_field, Featured};
pub use requests::{
    AddFavoriteRequest, CampsiteQuery, CreateArticleRequest, CreateCampsiteRequest,
    CreateParkRequest, Document, FavoritesQuery, ParkCodeQuery, Record, RemoveFavoriteRequest,
    ENTITY_ATTR, INVALID_PARK_CODE,
};
pub use service::Catalog;
