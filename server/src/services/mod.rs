pub mod bouquet;
pub mod scrape;
pub mod slug;
pub mod subscribe;
