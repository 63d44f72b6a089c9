pub mod document;
pub mod product_id;
pub mod record;
pub mod site_profile;
