mod digital;
mod footer;
mod hero;
mod landing;
mod mobile;
mod not_found;
mod tech;
mod web;

pub use digital::DigitalSection;
pub use footer::SiteFooter;
pub use hero::Hero;
pub use landing::Landing;
pub use mobile::MobileSection;
pub use not_found::PageNotFound;
pub use tech::TechSection;
pub use web::WebSection;
