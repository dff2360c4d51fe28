pub mod board_size;
pub mod placement;
pub mod product_type;

pub use board_size::BoardSize;
pub use placement::{lamp_summary, Facing, LampPosition, Orientation};
pub use product_type::ProductType;
