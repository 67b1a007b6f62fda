pub mod alert;
pub mod badge;
pub mod card;
pub mod hero;
pub mod layout;
pub mod link_button;
pub mod navbar;
pub mod project_card;

pub use alert::ErrorMessage;
pub use badge::TechBadge;
pub use card::{CardGrid, SkeletonCard};
pub use hero::HeroSection;
pub use layout::Layout;
pub use link_button::LinkButton;
pub use navbar::Navbar;
pub use project_card::ProjectCard;
