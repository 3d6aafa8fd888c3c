pub mod github;

pub use github::{mock_release_page, release_page_body, write_cache_entry};
