pub mod album_models;
pub mod comment_models;
pub mod concert_models;
pub mod favorite_models;
pub mod news_models;
pub mod review_models;
pub mod session_models;
pub mod token_models;
pub mod track_models;
pub mod user_models;
