pub mod about_pages;
pub mod auth_pages;
pub mod concert_pages;
pub mod discography_pages;
pub mod favorite_pages;
pub mod layout;
pub mod news_pages;
pub mod site_pages;
