pub mod flash_utils;
pub mod html_utils;
pub mod link_utils;
pub mod response_utils;
pub mod token_utils;
