//! Custom widgets for the board

mod canvas;
mod command_bar;
pub mod modal_overlay;
mod navbar;
mod service_card;
mod service_details;
mod toolbox;

pub use canvas::{card_area, canvas_inner, Canvas};
pub use command_bar::CommandBar;
pub use navbar::Navbar;
pub use service_card::{ServiceCard, CARD_HEIGHT, CARD_WIDTH};
pub use service_details::{DetailsLayout, ServiceDetails, MODAL_WIDTH};
pub use toolbox::Toolbox;
